use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::log;

use crate::db::Db;
use crate::matches_client::MatchesClient;
use crate::models_api::dashboard::ApiDashboard;
use crate::models_api::match_row::MatchRow;
use crate::models_api::notice::ApiNotice;
use crate::models_api::team::ApiTeam;
use crate::schedule_service::{ScheduleForm, ScheduleOutcome};
use crate::team_lookup_service::TeamLookup;
use crate::teams_client::TeamsClient;
use crate::LogResult;

const UPCOMING_KEY: &str = "upcoming";

/// Holds everything the admin dashboard shows: both caches, the loading
/// flags, the schedule form, and the in-flight marker. Both caches are
/// replaced wholesale, never patched.
pub struct DashboardService {
    teams: Vec<ApiTeam>,
    team_lookup: TeamLookup,
    upcoming: Vec<MatchRow>,

    loading_teams: bool,
    loading_upcoming: bool,
    scheduling: bool,

    match_id: Option<i64>,
    form: ScheduleForm,
    notice: Option<ApiNotice>,

    db: Db<String, Vec<MatchRow>>,
}

pub type SafeDashboardService = Arc<RwLock<DashboardService>>;

impl DashboardService {
    pub fn new(db: Db<String, Vec<MatchRow>>) -> SafeDashboardService {
        // last-good snapshot keeps the dashboard readable until the first load lands
        let upcoming = db.read(&UPCOMING_KEY.to_string()).unwrap_or_default();
        Arc::new(RwLock::new(DashboardService {
            teams: vec![],
            team_lookup: TeamLookup::default(),
            upcoming,
            loading_teams: false,
            loading_upcoming: false,
            scheduling: false,
            match_id: None,
            form: ScheduleForm::default(),
            notice: None,
            db,
        }))
    }

    pub fn view(&self) -> ApiDashboard {
        let upcoming = self
            .upcoming
            .iter()
            .cloned()
            .map(|mut row| {
                row.home_team = self.team_lookup.display_name(&row.home_team, row.home_team_id);
                row.away_team = self.team_lookup.display_name(&row.away_team, row.away_team_id);
                row
            })
            .collect();
        ApiDashboard {
            teams: self.teams.clone(),
            upcoming,
            loading_teams: self.loading_teams,
            loading_upcoming: self.loading_upcoming,
            scheduling: self.scheduling,
            match_id: self.match_id,
            form: self.form.clone(),
            same_teams_selected: self.form.same_teams_selected(),
            schedule_disabled: self.form.schedule_disabled(self.scheduling),
            notice: self.notice.clone(),
        }
    }

    /// The UI pushes the whole form on every field change; validation flags
    /// are re-derived in the returned view.
    pub fn update_form(&mut self, form: ScheduleForm) -> ApiDashboard {
        self.form = form;
        self.view()
    }

    pub async fn load_teams(service: &SafeDashboardService, client: &TeamsClient) {
        service.write().await.loading_teams = true;
        let res = client.list().await;
        let mut s = service.write().await;
        match res {
            Ok(teams) => {
                log::info!("[DASHBOARD] Loaded {} teams", teams.len());
                s.team_lookup.rebuild(&teams);
                s.teams = teams;
            }
            Err(e) => {
                log::error!("[DASHBOARD] Teams load failed: {e}");
                s.teams = vec![];
                s.team_lookup.clear();
                s.notice =
                    Some(ApiNotice::warning("Could not load teams", "Check teams-service.".to_string()));
            }
        }
        s.loading_teams = false;
    }

    pub async fn load_upcoming(service: &SafeDashboardService, client: &MatchesClient) {
        service.write().await.loading_upcoming = true;
        let res = client.upcoming().await;
        let mut s = service.write().await;
        match res {
            Ok(rows) => {
                log::info!("[DASHBOARD] Loaded {} upcoming matches", rows.len());
                if s.match_id.is_none() {
                    s.match_id = rows.first().map(|e| e.id);
                }
                s.db.write(&UPCOMING_KEY.to_string(), &rows)
                    .ok_log("[DASHBOARD] Snapshot write failed");
                s.upcoming = rows;
            }
            Err(e) => {
                log::error!("[DASHBOARD] Upcoming load failed: {e}");
                s.upcoming = vec![];
                s.notice = Some(ApiNotice::warning(
                    "Could not load upcoming matches",
                    "Check matches-service.".to_string(),
                ));
            }
        }
        s.loading_upcoming = false;
    }

    /// One pass through the scheduling state machine. The guard runs before
    /// any network call; the in-flight flag is set and cleared under the
    /// write lock, never held across the request itself.
    pub async fn submit_schedule(
        service: &SafeDashboardService,
        client: &MatchesClient,
    ) -> ScheduleOutcome {
        let request = {
            let mut s = service.write().await;
            if s.form.schedule_disabled(s.scheduling) {
                return ScheduleOutcome::incomplete();
            }
            let request = match s.form.build_request() {
                Some(request) => request,
                None => return ScheduleOutcome::incomplete(),
            };
            s.scheduling = true;
            request
        };

        match client.schedule(&request).await {
            Ok(row) => {
                let outcome = {
                    let mut s = service.write().await;
                    s.scheduling = false;
                    s.form = ScheduleForm::default();
                    if row.id > 0 {
                        s.match_id = Some(row.id);
                    }
                    let home = s.team_lookup.resolved_name(request.home_team_id, &row.home_team);
                    let away = s.team_lookup.resolved_name(request.away_team_id, &row.away_team);
                    ScheduleOutcome::scheduled(row, home, away)
                };
                Self::load_upcoming(service, client).await;
                outcome
            }
            Err(e) => {
                service.write().await.scheduling = false;
                log::error!("[DASHBOARD] Schedule failed: {e}");
                ScheduleOutcome::failed(e.user_message())
            }
        }
    }
}
