use reqwest::Client;
use serde_json::Value;

use crate::rest_client::{self, RestError};

/// Thin passthrough to the tournaments-service; the gateway adds no
/// semantics to its view models.
#[derive(Clone)]
pub struct TournamentsClient {
    base_url: String,
    client: Client,
}

impl TournamentsClient {
    pub fn new(base_url: &str) -> TournamentsClient {
        TournamentsClient { base_url: base_url.trim_end_matches('/').to_string(), client: Client::new() }
    }

    pub async fn list(&self) -> Result<Value, RestError> {
        rest_client::get_json(&self.client, &self.base_url).await
    }

    pub async fn get(&self, id: &str) -> Result<Value, RestError> {
        let url = format!("{}/{id}", self.base_url);
        rest_client::get_json(&self.client, &url).await
    }

    pub async fn update_match(&self, tournament_id: &str, match_id: &str, payload: &Value) -> Result<Value, RestError> {
        let url = format!("{}/{tournament_id}/matches/{match_id}", self.base_url);
        rest_client::patch_json(&self.client, &url, payload).await
    }
}
