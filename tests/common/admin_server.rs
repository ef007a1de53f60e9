use std::process::{Child, Command};

use assert_cmd::prelude::CommandCargoExt;
use predicates::{function::FnPredicate, Predicate};
use reqwest::Response;
use serde_json::Value;

use liga_admin_rs::config_handler::Config;
use liga_admin_rs::models_api::dashboard::ApiDashboard;
use liga_admin_rs::models_api::match_row::{MatchRow, PagedMatches};
use liga_admin_rs::models_api::notice::ApiNotice;
use liga_admin_rs::schedule_service::ScheduleForm;

pub struct AdminServer {
    port: u16,
    child_process: Option<Child>,
}

impl Drop for AdminServer {
    fn drop(&mut self) {
        if self.child_process.is_some() {
            self.child_process.as_mut().unwrap().kill()
                .expect("Should kill");
        }
    }
}

impl AdminServer {
    pub fn new(port: u16) -> AdminServer {
        AdminServer { port, child_process: None }
    }

    pub fn start(&mut self, path: &str, backend_url: &str) {
        let config = Config {
            port: self.port,
            matches_url: format!("{backend_url}/api/matches"),
            teams_url: format!("{backend_url}/api/teams"),
            reports_url: format!("{backend_url}/api/reports"),
            tournaments_url: format!("{backend_url}/api/tournaments"),
            reports_token: "TESTTOKEN".to_string(),
            db_path: format!("{path}/db"),
        };

        let config_str = serde_json::to_string(&config).unwrap();
        let config_path = format!("{path}/config.json");
        std::fs::write(config_path.clone(), config_str).unwrap();
        let child_process = Command::cargo_bin("liga-admin-rs")
            .unwrap()
            .env("CONFIG_PATH", config_path)
            .spawn()
            .expect("should start");

        self.child_process = Some(child_process);
    }

    fn url(&self, path: &str) -> String {
        format!("http://localhost:{}{}", self.port, path)
    }

    pub async fn get_dashboard(&self) -> Result<ApiDashboard, Box<dyn std::error::Error>> {
        Ok(reqwest::get(self.url("/dashboard")).await?.json().await?)
    }

    pub async fn retry_until_dashboard<F>(
        &self,
        predicate: FnPredicate<F, ApiDashboard>,
        retry_ms: u64,
    ) -> ApiDashboard
    where
        F: Fn(&ApiDashboard) -> bool,
    {
        tokio::time::sleep(std::time::Duration::from_millis(1000)).await;
        let mut nr_loops = 0;
        loop {
            if let Ok(dashboard) = self.get_dashboard().await {
                if predicate.eval(&dashboard) {
                    return dashboard;
                }
            }
            tokio::time::sleep(std::time::Duration::from_millis(retry_ms)).await;
            nr_loops += 1;
            if nr_loops > 50 {
                panic!("retry failed");
            }
        }
    }

    pub async fn put_form(&self, form: &ScheduleForm) -> Result<ApiDashboard, Box<dyn std::error::Error>> {
        Ok(reqwest::Client::builder()
            .build()?
            .put(self.url("/dashboard/schedule-form"))
            .json(form)
            .send()
            .await?
            .json()
            .await?)
    }

    pub async fn post_schedule(&self) -> Result<(reqwest::StatusCode, ApiNotice), Box<dyn std::error::Error>> {
        let rsp = reqwest::Client::builder()
            .build()?
            .post(self.url("/dashboard/schedule"))
            .send()
            .await?;
        let status = rsp.status();
        Ok((status, rsp.json().await?))
    }

    pub async fn get_upcoming(&self) -> Result<Vec<MatchRow>, Box<dyn std::error::Error>> {
        Ok(reqwest::get(self.url("/matches/upcoming")).await?.json().await?)
    }

    pub async fn get_paged(&self, query: &str) -> Result<PagedMatches, Box<dyn std::error::Error>> {
        Ok(reqwest::get(self.url(&format!("/matches?{query}"))).await?.json().await?)
    }

    pub async fn get(&self, path: &str) -> Result<Response, Box<dyn std::error::Error>> {
        Ok(reqwest::get(self.url(path)).await?)
    }

    pub async fn post(&self, path: &str, body: &Value) -> Result<Response, Box<dyn std::error::Error>> {
        Ok(reqwest::Client::builder()
            .build()?
            .post(self.url(path))
            .json(body)
            .send()
            .await?)
    }

    pub async fn put(&self, path: &str, body: &Value) -> Result<Response, Box<dyn std::error::Error>> {
        Ok(reqwest::Client::builder()
            .build()?
            .put(self.url(path))
            .json(body)
            .send()
            .await?)
    }

    pub async fn patch(&self, path: &str, body: &Value) -> Result<Response, Box<dyn std::error::Error>> {
        Ok(reqwest::Client::builder()
            .build()?
            .patch(self.url(path))
            .json(body)
            .send()
            .await?)
    }
}
