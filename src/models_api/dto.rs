use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request bodies exchanged with the matches-service and teams-service.
/// Field names are the downstream wire contract.

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRequest {
    pub home_team_id: i64,
    pub away_team_id: i64,
    pub date_match: DateTime<Utc>,
    pub quarter_duration_seconds: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RescheduleRequest {
    pub new_date_match_utc: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct StartTimerRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quarter_duration_seconds: Option<i64>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AddScoreRequest {
    pub team_id: i64,
    pub points: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_id: Option<i64>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AdjustScoreRequest {
    pub team_id: i64,
    pub delta: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AddFoulRequest {
    pub team_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_id: Option<i64>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub foul_type: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AdjustFoulRequest {
    pub team_id: i64,
    pub delta: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ScoreEventItem {
    pub team_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_id: Option<i64>,
    pub points: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_register: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FoulItem {
    pub team_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_register: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FinishMatchRequest {
    pub home_score: i64,
    pub away_score: i64,
    pub home_fouls: i64,
    pub away_fouls: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score_events: Option<Vec<ScoreEventItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fouls: Option<Vec<FoulItem>>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeamPlayer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<i64>,
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeamRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default)]
    pub players: Vec<CreateTeamPlayer>,
}
