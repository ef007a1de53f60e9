use reqwest::Client;

use crate::models_api::dto::CreateTeamRequest;
use crate::models_api::team::ApiTeam;
use crate::models_external::team::{RawTeam, TeamListRsp};
use crate::rest_client::{self, RestError};

#[derive(Clone)]
pub struct TeamsClient {
    base_url: String,
    client: Client,
}

impl TeamsClient {
    pub fn new(base_url: &str) -> TeamsClient {
        TeamsClient { base_url: base_url.trim_end_matches('/').to_string(), client: Client::new() }
    }

    pub async fn list(&self) -> Result<Vec<ApiTeam>, RestError> {
        let rsp: TeamListRsp = rest_client::get_json(&self.client, &self.base_url).await?;
        Ok(rsp.into_raw().into_iter().filter_map(RawTeam::into_api).collect())
    }

    pub async fn create(&self, req: &CreateTeamRequest) -> Result<serde_json::Value, RestError> {
        rest_client::post_json(&self.client, &self.base_url, req).await
    }
}
