use serde::{Deserialize, Serialize};

use crate::models_api::match_row::MatchRow;
use crate::models_api::notice::ApiNotice;
use crate::models_api::team::ApiTeam;
use crate::schedule_service::ScheduleForm;

/// Snapshot of the admin dashboard: caches, loading indicators, the schedule
/// form and its derived validation flags.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ApiDashboard {
    pub teams: Vec<ApiTeam>,
    pub upcoming: Vec<MatchRow>,

    pub loading_teams: bool,
    pub loading_upcoming: bool,
    pub scheduling: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_id: Option<i64>,

    pub form: ScheduleForm,
    pub same_teams_selected: bool,
    pub schedule_disabled: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notice: Option<ApiNotice>,
}
