use std::net::SocketAddr;

use axum::extract::{Path, Query, RawQuery, State};
use axum::http::header;
use axum::response::IntoResponse;
use axum::{Json, Router};
use reqwest::StatusCode;
use serde_json::Value;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tracing::log;

use crate::dashboard_service::{DashboardService, SafeDashboardService};
use crate::matches_client::{MatchListQuery, MatchesClient};
use crate::models_api::dashboard::ApiDashboard;
use crate::models_api::dto::{
    AddFoulRequest, AddScoreRequest, AdjustFoulRequest, AdjustScoreRequest, CreateTeamRequest,
    FinishMatchRequest, RescheduleRequest, StartTimerRequest,
};
use crate::models_api::match_row::{MatchRow, PagedMatches};
use crate::models_api::notice::ApiNotice;
use crate::models_api::team::ApiTeam;
use crate::report_client::ReportsClient;
use crate::rest_client::RestError;
use crate::schedule_service::{ScheduleForm, ScheduleOutcome};
use crate::teams_client::TeamsClient;
use crate::tournament_client::TournamentsClient;

#[derive(Clone)]
pub struct ApiState {
    pub dashboard: SafeDashboardService,
    pub matches: MatchesClient,
    pub teams: TeamsClient,
    pub reports: ReportsClient,
    pub tournaments: TournamentsClient,
}

fn proxy_err(e: RestError) -> (StatusCode, String) {
    (e.status_code(), e.user_message())
}

pub struct Api;
impl Api {
    pub async fn serve(port: u16, state: ApiState) {
        let app = Router::new()
            .route("/dashboard", axum::routing::get(Api::get_dashboard))
            .route("/dashboard/schedule-form", axum::routing::put(Api::put_schedule_form))
            .route("/dashboard/schedule", axum::routing::post(Api::post_schedule))
            .route("/dashboard/refresh", axum::routing::post(Api::post_refresh))

            .route("/matches/upcoming", axum::routing::get(Api::get_upcoming))
            .route("/matches", axum::routing::get(Api::get_matches))
            .route("/matches/:id", axum::routing::get(Api::get_match))
            .route("/matches/:id/reschedule", axum::routing::put(Api::put_reschedule))
            .route("/matches/:id/cancel", axum::routing::post(Api::post_cancel))
            .route("/matches/:id/suspend", axum::routing::post(Api::post_suspend))
            .route("/matches/:id/finish", axum::routing::post(Api::post_finish))
            .route("/matches/:id/timer/:action", axum::routing::post(Api::post_timer))
            .route("/matches/:id/quarters/:action", axum::routing::post(Api::post_quarters))
            .route("/matches/:id/score", axum::routing::post(Api::post_score))
            .route("/matches/:id/score/adjust", axum::routing::post(Api::post_score_adjust))
            .route("/matches/:id/fouls", axum::routing::post(Api::post_foul))
            .route("/matches/:id/fouls/adjust", axum::routing::post(Api::post_foul_adjust))

            .route("/teams", axum::routing::get(Api::get_teams).post(Api::post_teams))

            .route("/reports/*path", axum::routing::get(Api::get_report))

            .route("/tournaments", axum::routing::get(Api::get_tournaments))
            .route("/tournaments/:id", axum::routing::get(Api::get_tournament))
            .route("/tournaments/:id/matches/:match_id", axum::routing::patch(Api::patch_tournament_match))

            .route("/", axum::routing::get(Api::root))
            .with_state(state)
            .layer(ServiceBuilder::new().layer(CompressionLayer::new()));
        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        log::info!("[API] Listening on {}", addr);
        _ = axum::Server::bind(&addr)
            .serve(app.into_make_service())
            .await;
    }

    async fn root() -> &'static str {
        "Bounce bounce bounce"
    }

    async fn get_dashboard(State(state): State<ApiState>) -> Json<ApiDashboard> {
        Json(state.dashboard.read().await.view())
    }

    async fn put_schedule_form(
        State(state): State<ApiState>,
        Json(form): Json<ScheduleForm>,
    ) -> Json<ApiDashboard> {
        Json(state.dashboard.write().await.update_form(form))
    }

    async fn post_schedule(State(state): State<ApiState>) -> (StatusCode, Json<ApiNotice>) {
        let outcome = DashboardService::submit_schedule(&state.dashboard, &state.matches).await;
        let status = match &outcome {
            ScheduleOutcome::Scheduled { .. } => StatusCode::OK,
            ScheduleOutcome::Rejected { .. } => StatusCode::BAD_REQUEST,
            ScheduleOutcome::Failed { .. } => StatusCode::BAD_GATEWAY,
        };
        (status, Json(outcome.notice().clone()))
    }

    async fn post_refresh(State(state): State<ApiState>) -> Json<ApiDashboard> {
        DashboardService::load_upcoming(&state.dashboard, &state.matches).await;
        Json(state.dashboard.read().await.view())
    }

    async fn get_upcoming(
        State(state): State<ApiState>,
    ) -> Result<Json<Vec<MatchRow>>, (StatusCode, String)> {
        state.matches.upcoming().await.map(Json).map_err(proxy_err)
    }

    async fn get_matches(
        State(state): State<ApiState>,
        Query(query): Query<MatchListQuery>,
    ) -> Result<Json<PagedMatches>, (StatusCode, String)> {
        state.matches.list(&query).await.map(Json).map_err(proxy_err)
    }

    async fn get_match(
        State(state): State<ApiState>,
        Path(id): Path<i64>,
    ) -> Result<Json<MatchRow>, (StatusCode, String)> {
        state.matches.get(id).await.map(Json).map_err(proxy_err)
    }

    async fn put_reschedule(
        State(state): State<ApiState>,
        Path(id): Path<i64>,
        Json(req): Json<RescheduleRequest>,
    ) -> Result<StatusCode, (StatusCode, String)> {
        state.matches.reschedule(id, &req).await.map(|_| StatusCode::NO_CONTENT).map_err(proxy_err)
    }

    async fn post_cancel(
        State(state): State<ApiState>,
        Path(id): Path<i64>,
    ) -> Result<StatusCode, (StatusCode, String)> {
        state.matches.cancel(id).await.map(|_| StatusCode::NO_CONTENT).map_err(proxy_err)
    }

    async fn post_suspend(
        State(state): State<ApiState>,
        Path(id): Path<i64>,
    ) -> Result<StatusCode, (StatusCode, String)> {
        state.matches.suspend(id).await.map(|_| StatusCode::NO_CONTENT).map_err(proxy_err)
    }

    async fn post_finish(
        State(state): State<ApiState>,
        Path(id): Path<i64>,
        Json(req): Json<FinishMatchRequest>,
    ) -> Result<StatusCode, (StatusCode, String)> {
        state.matches.finish(id, &req).await.map(|_| StatusCode::NO_CONTENT).map_err(proxy_err)
    }

    async fn post_timer(
        State(state): State<ApiState>,
        Path((id, action)): Path<(i64, String)>,
        body: Option<Json<StartTimerRequest>>,
    ) -> Result<StatusCode, (StatusCode, String)> {
        if let Ok(action) = action.parse() {
            let req = body.map(|Json(e)| e).unwrap_or_default();
            state.matches.timer(id, &action, &req).await.map(|_| StatusCode::NO_CONTENT).map_err(proxy_err)
        } else {
            Err((StatusCode::NOT_FOUND, "404".to_string()))
        }
    }

    async fn post_quarters(
        State(state): State<ApiState>,
        Path((id, action)): Path<(i64, String)>,
    ) -> Result<StatusCode, (StatusCode, String)> {
        if let Ok(action) = action.parse() {
            state.matches.quarters(id, &action).await.map(|_| StatusCode::NO_CONTENT).map_err(proxy_err)
        } else {
            Err((StatusCode::NOT_FOUND, "404".to_string()))
        }
    }

    async fn post_score(
        State(state): State<ApiState>,
        Path(id): Path<i64>,
        Json(req): Json<AddScoreRequest>,
    ) -> Result<StatusCode, (StatusCode, String)> {
        state.matches.add_score(id, &req).await.map(|_| StatusCode::NO_CONTENT).map_err(proxy_err)
    }

    async fn post_score_adjust(
        State(state): State<ApiState>,
        Path(id): Path<i64>,
        Json(req): Json<AdjustScoreRequest>,
    ) -> Result<StatusCode, (StatusCode, String)> {
        state.matches.adjust_score(id, &req).await.map(|_| StatusCode::NO_CONTENT).map_err(proxy_err)
    }

    async fn post_foul(
        State(state): State<ApiState>,
        Path(id): Path<i64>,
        Json(req): Json<AddFoulRequest>,
    ) -> Result<StatusCode, (StatusCode, String)> {
        state.matches.add_foul(id, &req).await.map(|_| StatusCode::NO_CONTENT).map_err(proxy_err)
    }

    async fn post_foul_adjust(
        State(state): State<ApiState>,
        Path(id): Path<i64>,
        Json(req): Json<AdjustFoulRequest>,
    ) -> Result<StatusCode, (StatusCode, String)> {
        state.matches.adjust_foul(id, &req).await.map(|_| StatusCode::NO_CONTENT).map_err(proxy_err)
    }

    async fn get_teams(
        State(state): State<ApiState>,
    ) -> Result<Json<Vec<ApiTeam>>, (StatusCode, String)> {
        state.teams.list().await.map(Json).map_err(proxy_err)
    }

    async fn post_teams(
        State(state): State<ApiState>,
        Json(req): Json<CreateTeamRequest>,
    ) -> Result<Json<Value>, (StatusCode, String)> {
        state.teams.create(&req).await.map(Json).map_err(proxy_err)
    }

    async fn get_report(
        State(state): State<ApiState>,
        Path(path): Path<String>,
        RawQuery(query): RawQuery,
    ) -> Result<impl IntoResponse, (StatusCode, String)> {
        let bytes = state.reports.download(&path, query.as_deref()).await.map_err(proxy_err)?;
        Ok(([(header::CONTENT_TYPE, "application/pdf")], bytes))
    }

    async fn get_tournaments(
        State(state): State<ApiState>,
    ) -> Result<Json<Value>, (StatusCode, String)> {
        state.tournaments.list().await.map(Json).map_err(proxy_err)
    }

    async fn get_tournament(
        State(state): State<ApiState>,
        Path(id): Path<String>,
    ) -> Result<Json<Value>, (StatusCode, String)> {
        state.tournaments.get(&id).await.map(Json).map_err(proxy_err)
    }

    async fn patch_tournament_match(
        State(state): State<ApiState>,
        Path((tournament_id, match_id)): Path<(String, String)>,
        Json(payload): Json<Value>,
    ) -> Result<Json<Value>, (StatusCode, String)> {
        state
            .tournaments
            .update_match(&tournament_id, &match_id, &payload)
            .await
            .map(Json)
            .map_err(proxy_err)
    }
}
