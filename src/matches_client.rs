use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::models::{QuarterAction, TimerAction};
use crate::models_api::dto::{
    AddFoulRequest, AddScoreRequest, AdjustFoulRequest, AdjustScoreRequest, FinishMatchRequest,
    RescheduleRequest, ScheduleRequest, StartTimerRequest,
};
use crate::models_api::match_row::{normalize_list, MatchRow, PagedMatches};
use crate::models_external::partido::{MatchListRsp, PagedRsp, RawMatch};
use crate::rest_client::{self, RestError};

/// Typed client for the matches-service. Every response goes through the
/// canonical mapping before anything else sees it.
#[derive(Clone)]
pub struct MatchesClient {
    base_url: String,
    client: Client,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct MatchListQuery {
    #[serde(default)]
    pub page: Option<i64>,
    #[serde(default)]
    pub page_size: Option<i64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub team_id: Option<i64>,
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
}

impl MatchListQuery {
    pub fn to_query_string(&self) -> String {
        let mut params = vec![
            format!("page={}", self.page.unwrap_or(1)),
            format!("pageSize={}", self.page_size.unwrap_or(10)),
        ];
        if let Some(status) = &self.status {
            params.push(format!("status={status}"));
        }
        if let Some(team_id) = self.team_id {
            params.push(format!("teamId={team_id}"));
        }
        if let Some(from) = &self.from {
            params.push(format!("from={from}"));
        }
        if let Some(to) = &self.to {
            params.push(format!("to={to}"));
        }
        params.join("&")
    }
}

impl MatchesClient {
    pub fn new(base_url: &str) -> MatchesClient {
        MatchesClient { base_url: base_url.trim_end_matches('/').to_string(), client: Client::new() }
    }

    pub async fn schedule(&self, req: &ScheduleRequest) -> Result<MatchRow, RestError> {
        let url = format!("{}/programar", self.base_url);
        let raw: RawMatch = rest_client::post_json(&self.client, &url, req).await?;
        Ok(raw.into())
    }

    pub async fn upcoming(&self) -> Result<Vec<MatchRow>, RestError> {
        let url = format!("{}/proximos", self.base_url);
        let rsp: MatchListRsp = rest_client::get_json(&self.client, &url).await?;
        Ok(normalize_list(rsp))
    }

    pub async fn list(&self, query: &MatchListQuery) -> Result<PagedMatches, RestError> {
        let url = format!("{}/list?{}", self.base_url, query.to_query_string());
        let rsp: PagedRsp = rest_client::get_json(&self.client, &url).await?;
        Ok(rsp.into())
    }

    pub async fn get(&self, id: i64) -> Result<MatchRow, RestError> {
        let url = format!("{}/{id}", self.base_url);
        let raw: RawMatch = rest_client::get_json(&self.client, &url).await?;
        Ok(raw.into())
    }

    pub async fn reschedule(&self, id: i64, req: &RescheduleRequest) -> Result<(), RestError> {
        let url = format!("{}/{id}/reprogramar", self.base_url);
        rest_client::put_unit(&self.client, &url, req).await
    }

    pub async fn cancel(&self, id: i64) -> Result<(), RestError> {
        let url = format!("{}/{id}/cancel", self.base_url);
        rest_client::post_unit(&self.client, &url, &json!({})).await
    }

    pub async fn suspend(&self, id: i64) -> Result<(), RestError> {
        let url = format!("{}/{id}/suspend", self.base_url);
        rest_client::post_unit(&self.client, &url, &json!({})).await
    }

    pub async fn timer(&self, id: i64, action: &TimerAction, req: &StartTimerRequest) -> Result<(), RestError> {
        let url = format!("{}/{id}/timer/{action}", self.base_url);
        rest_client::post_unit(&self.client, &url, req).await
    }

    pub async fn quarters(&self, id: i64, action: &QuarterAction) -> Result<(), RestError> {
        let url = format!("{}/{id}/quarters/{action}", self.base_url);
        rest_client::post_unit(&self.client, &url, &json!({})).await
    }

    pub async fn add_score(&self, id: i64, req: &AddScoreRequest) -> Result<(), RestError> {
        let url = format!("{}/{id}/score", self.base_url);
        rest_client::post_unit(&self.client, &url, req).await
    }

    pub async fn adjust_score(&self, id: i64, req: &AdjustScoreRequest) -> Result<(), RestError> {
        let url = format!("{}/{id}/score/adjust", self.base_url);
        rest_client::post_unit(&self.client, &url, req).await
    }

    pub async fn add_foul(&self, id: i64, req: &AddFoulRequest) -> Result<(), RestError> {
        let url = format!("{}/{id}/fouls", self.base_url);
        rest_client::post_unit(&self.client, &url, req).await
    }

    pub async fn adjust_foul(&self, id: i64, req: &AdjustFoulRequest) -> Result<(), RestError> {
        let url = format!("{}/{id}/fouls/adjust", self.base_url);
        rest_client::post_unit(&self.client, &url, req).await
    }

    pub async fn finish(&self, id: i64, req: &FinishMatchRequest) -> Result<(), RestError> {
        let url = format!("{}/{id}/finish", self.base_url);
        rest_client::post_unit(&self.client, &url, req).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_string_defaults_page_and_page_size() {
        let query = MatchListQuery::default();
        assert_eq!(query.to_query_string(), "page=1&pageSize=10");
    }

    #[test]
    fn query_string_appends_optional_filters_in_order() {
        let query = MatchListQuery {
            page: Some(2),
            page_size: Some(25),
            status: Some("Scheduled".to_string()),
            team_id: Some(4),
            from: Some("2025-06-01T00:00:00Z".to_string()),
            to: None,
        };
        assert_eq!(
            query.to_query_string(),
            "page=2&pageSize=25&status=Scheduled&teamId=4&from=2025-06-01T00:00:00Z"
        );
    }
}
