use std::{net::SocketAddr, sync::Arc, time::Duration};

use axum::extract::{Path, RawQuery, State};
use axum::http::{header, HeaderMap};
use axum::response::IntoResponse;
use axum::routing::{get, patch, post, put};
use axum::{Json, Router};
use reqwest::StatusCode;
use serde_json::{json, Value};
use tokio::{sync::RwLock, task::JoinHandle};

/// Everything the fake microservices serve and everything they saw. Tests
/// pre-load the serve side and assert on the record side.
#[derive(Default)]
pub struct AppState {
    pub teams: Vec<Value>,
    pub teams_fail: bool,
    pub team_creates: Vec<Value>,

    pub upcoming: Vec<Value>,
    pub upcoming_wrap_in_data: bool,
    pub upcoming_fail: bool,

    pub list_rsp: Value,
    pub list_queries: Vec<String>,

    pub schedule_fail: Option<(u16, Value)>,
    pub schedule_calls: Vec<Value>,

    pub reschedule_calls: Vec<(i64, Value)>,
    pub cancel_calls: Vec<i64>,
    pub suspend_calls: Vec<i64>,
    pub finish_calls: Vec<(i64, Value)>,
    pub timer_calls: Vec<(i64, String, Value)>,
    pub quarter_calls: Vec<(i64, String)>,
    pub score_calls: Vec<(i64, String, Value)>,
    pub foul_calls: Vec<(i64, String, Value)>,

    pub report_calls: Vec<(String, Option<String>, Option<String>)>,
    pub tournament_patches: Vec<(String, String, Value)>,
}

pub type SafeAppState = Arc<RwLock<AppState>>;

/// One axum server standing in for the matches, teams, reports and
/// tournaments services at the same time.
pub struct BackendServer {
    port: u16,
    handle: Option<JoinHandle<()>>,
    pub api_state: SafeAppState,
}

impl Drop for BackendServer {
    fn drop(&mut self) {
        if let Some(handle) = &self.handle {
            handle.abort();
        }
    }
}

impl BackendServer {
    pub fn new(port: u16) -> BackendServer {
        BackendServer { port, handle: None, api_state: Arc::new(RwLock::new(AppState::default())) }
    }

    pub async fn start(&mut self) -> SafeAppState {
        let state = self.api_state.clone();
        let port = self.port;
        let handle = tokio::spawn(async move { BackendServer::serve(state, port).await });
        self.handle = Some(handle);
        tokio::time::sleep(Duration::from_secs(1)).await; // wait for mock to start
        self.api_state.clone()
    }

    pub fn get_url(&self) -> String {
        format!("http://localhost:{}", self.port)
    }

    async fn serve(state: SafeAppState, port: u16) {
        let addr = SocketAddr::from(([127, 0, 0, 1], port));
        let app = Router::new()
            .route("/api/matches/programar", post(BackendServer::post_programar))
            .route("/api/matches/proximos", get(BackendServer::get_proximos))
            .route("/api/matches/list", get(BackendServer::get_list))
            .route("/api/matches/:id", get(BackendServer::get_match))
            .route("/api/matches/:id/reprogramar", put(BackendServer::put_reprogramar))
            .route("/api/matches/:id/cancel", post(BackendServer::post_cancel))
            .route("/api/matches/:id/suspend", post(BackendServer::post_suspend))
            .route("/api/matches/:id/finish", post(BackendServer::post_finish))
            .route("/api/matches/:id/timer/:action", post(BackendServer::post_timer))
            .route("/api/matches/:id/quarters/:action", post(BackendServer::post_quarters))
            .route("/api/matches/:id/score", post(BackendServer::post_score))
            .route("/api/matches/:id/score/adjust", post(BackendServer::post_score_adjust))
            .route("/api/matches/:id/fouls", post(BackendServer::post_foul))
            .route("/api/matches/:id/fouls/adjust", post(BackendServer::post_foul_adjust))
            .route("/api/teams", get(BackendServer::get_teams).post(BackendServer::post_teams))
            .route("/api/reports/*path", get(BackendServer::get_report))
            .route("/api/tournaments", get(BackendServer::get_tournaments))
            .route("/api/tournaments/:id", get(BackendServer::get_tournament))
            .route(
                "/api/tournaments/:id/matches/:match_id",
                patch(BackendServer::patch_tournament_match),
            )
            .with_state(state);

        axum::Server::bind(&addr)
            .serve(app.into_make_service())
            .await
            .unwrap();
    }

    async fn post_programar(
        State(state): State<SafeAppState>,
        Json(body): Json<Value>,
    ) -> (StatusCode, Json<Value>) {
        let mut s = state.write().await;
        s.schedule_calls.push(body.clone());
        if let Some((status, rsp)) = s.schedule_fail.clone() {
            return (StatusCode::from_u16(status).unwrap(), Json(rsp));
        }
        let created = json!({
            "id": 101,
            "dateMatchUtc": body.get("dateMatch").cloned().unwrap_or(Value::Null),
            "status": "Scheduled",
            "homeTeamId": body.get("homeTeamId").cloned().unwrap_or(Value::Null),
            "awayTeamId": body.get("awayTeamId").cloned().unwrap_or(Value::Null),
        });
        s.upcoming.push(created.clone());
        (StatusCode::OK, Json(created))
    }

    async fn get_proximos(State(state): State<SafeAppState>) -> (StatusCode, Json<Value>) {
        let s = state.read().await;
        if s.upcoming_fail {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "matches service down"})),
            );
        }
        let rows = Value::Array(s.upcoming.clone());
        if s.upcoming_wrap_in_data {
            (StatusCode::OK, Json(json!({ "data": rows })))
        } else {
            (StatusCode::OK, Json(rows))
        }
    }

    async fn get_list(State(state): State<SafeAppState>, RawQuery(query): RawQuery) -> Json<Value> {
        let mut s = state.write().await;
        s.list_queries.push(query.unwrap_or_default());
        if s.list_rsp.is_null() {
            Json(json!({}))
        } else {
            Json(s.list_rsp.clone())
        }
    }

    async fn get_match(Path(id): Path<i64>, State(state): State<SafeAppState>) -> Json<Value> {
        let s = state.read().await;
        Json(
            s.upcoming
                .iter()
                .find(|e| e.get("id").and_then(Value::as_i64) == Some(id))
                .cloned()
                .unwrap_or(json!({ "id": id })),
        )
    }

    async fn put_reprogramar(
        Path(id): Path<i64>,
        State(state): State<SafeAppState>,
        Json(body): Json<Value>,
    ) {
        state.write().await.reschedule_calls.push((id, body));
    }

    async fn post_cancel(Path(id): Path<i64>, State(state): State<SafeAppState>) {
        state.write().await.cancel_calls.push(id);
    }

    async fn post_suspend(Path(id): Path<i64>, State(state): State<SafeAppState>) {
        state.write().await.suspend_calls.push(id);
    }

    async fn post_finish(
        Path(id): Path<i64>,
        State(state): State<SafeAppState>,
        Json(body): Json<Value>,
    ) {
        state.write().await.finish_calls.push((id, body));
    }

    async fn post_timer(
        Path((id, action)): Path<(i64, String)>,
        State(state): State<SafeAppState>,
        Json(body): Json<Value>,
    ) {
        state.write().await.timer_calls.push((id, action, body));
    }

    async fn post_quarters(
        Path((id, action)): Path<(i64, String)>,
        State(state): State<SafeAppState>,
    ) {
        state.write().await.quarter_calls.push((id, action));
    }

    async fn post_score(
        Path(id): Path<i64>,
        State(state): State<SafeAppState>,
        Json(body): Json<Value>,
    ) {
        state.write().await.score_calls.push((id, "add".to_string(), body));
    }

    async fn post_score_adjust(
        Path(id): Path<i64>,
        State(state): State<SafeAppState>,
        Json(body): Json<Value>,
    ) {
        state.write().await.score_calls.push((id, "adjust".to_string(), body));
    }

    async fn post_foul(
        Path(id): Path<i64>,
        State(state): State<SafeAppState>,
        Json(body): Json<Value>,
    ) {
        state.write().await.foul_calls.push((id, "add".to_string(), body));
    }

    async fn post_foul_adjust(
        Path(id): Path<i64>,
        State(state): State<SafeAppState>,
        Json(body): Json<Value>,
    ) {
        state.write().await.foul_calls.push((id, "adjust".to_string(), body));
    }

    async fn get_teams(State(state): State<SafeAppState>) -> (StatusCode, Json<Value>) {
        let s = state.read().await;
        if s.teams_fail {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "teams service down"})),
            );
        }
        (StatusCode::OK, Json(Value::Array(s.teams.clone())))
    }

    async fn post_teams(State(state): State<SafeAppState>, Json(body): Json<Value>) -> Json<Value> {
        state.write().await.team_creates.push(body.clone());
        let mut created = body;
        if let Some(map) = created.as_object_mut() {
            map.insert("id".to_string(), json!(7));
        }
        Json(created)
    }

    async fn get_report(
        Path(path): Path<String>,
        RawQuery(query): RawQuery,
        headers: HeaderMap,
        State(state): State<SafeAppState>,
    ) -> impl IntoResponse {
        let auth = headers
            .get("authorization")
            .and_then(|e| e.to_str().ok())
            .map(str::to_string);
        state.write().await.report_calls.push((path, query, auth));
        ([(header::CONTENT_TYPE, "application/pdf")], b"%PDF-1.4 liga test".to_vec())
    }

    async fn get_tournaments() -> Json<Value> {
        Json(json!([{"id": "t1", "name": "Copa Metropolitana"}]))
    }

    async fn get_tournament(Path(id): Path<String>) -> Json<Value> {
        Json(json!({"id": id, "name": "Copa Metropolitana", "rounds": []}))
    }

    async fn patch_tournament_match(
        Path((tournament_id, match_id)): Path<(String, String)>,
        State(state): State<SafeAppState>,
        Json(body): Json<Value>,
    ) -> Json<Value> {
        state.write().await.tournament_patches.push((tournament_id.clone(), match_id, body));
        Json(json!({"id": tournament_id, "updated": true}))
    }
}
