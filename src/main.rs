use futures::future::join_all;

use liga_admin_rs::api::{Api, ApiState};
use liga_admin_rs::dashboard_service::DashboardService;
use liga_admin_rs::db::Db;
use liga_admin_rs::matches_client::MatchesClient;
use liga_admin_rs::migrate::Migrate;
use liga_admin_rs::report_client::ReportsClient;
use liga_admin_rs::teams_client::TeamsClient;
use liga_admin_rs::tournament_client::TournamentsClient;
use liga_admin_rs::CONFIG;

#[tokio::main]
async fn main() {
    if std::env::var_os("RUST_LOG").is_none() {
        // Set the RUST_LOG, if it hasn't been explicitly defined
        std::env::set_var("RUST_LOG", "debug,hyper=debug")
    }

    // Configure a custom event formatter
    let format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_target(false)
        .with_ansi(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .compact();
    tracing_subscriber::fmt()
        .event_format(format)
        .with_max_level(tracing::Level::INFO)
        .init();

    Migrate::up(&CONFIG.db_path);

    let state = ApiState {
        dashboard: DashboardService::new(Db::new("upcoming", &CONFIG.db_path)),
        matches: MatchesClient::new(&CONFIG.matches_url),
        teams: TeamsClient::new(&CONFIG.teams_url),
        reports: ReportsClient::new(&CONFIG.reports_url, CONFIG.reports_token.clone()),
        tournaments: TournamentsClient::new(&CONFIG.tournaments_url),
    };

    let h1 = {
        let state = state.clone();
        tokio::spawn(async move { Api::serve(CONFIG.port, state).await })
    };
    let h2 = {
        let state = state.clone();
        tokio::spawn(async move {
            // teams and upcoming load independently; neither blocks the other
            futures::join!(
                DashboardService::load_teams(&state.dashboard, &state.teams),
                DashboardService::load_upcoming(&state.dashboard, &state.matches),
            );
        })
    };

    join_all(vec![h1, h2]).await;
}
