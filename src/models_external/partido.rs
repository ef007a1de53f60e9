use serde::{Deserialize, Serialize};

use crate::models::JsonNum;

/// One match as the matches-service sends it. Every field is optional and
/// every alternate spelling the service has ever used is kept; the canonical
/// mapping lives in `models_api::match_row`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct RawMatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<JsonNum>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dateMatchUtc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dateMatch: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<JsonNum>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homeTeamId: Option<JsonNum>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homeTeamID: Option<JsonNum>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_id: Option<JsonNum>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub awayTeamId: Option<JsonNum>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub awayTeamID: Option<JsonNum>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub away_id: Option<JsonNum>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homeTeam: Option<TeamField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homeTeamName: Option<TeamField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub awayTeam: Option<TeamField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub awayTeamName: Option<TeamField>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homeScore: Option<JsonNum>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub awayScore: Option<JsonNum>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homeFouls: Option<JsonNum>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub awayFouls: Option<JsonNum>,
}

/// A team reference inside a match payload: either a bare display name or a
/// nested team object. Anything else is carried along and ignored.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum TeamField {
    Name(String),
    Object(TeamObject),
    Other(serde_json::Value),
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct TeamObject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name_pascal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl TeamField {
    /// The explicit string form, when this field is one.
    pub fn as_plain_name(&self) -> Option<&str> {
        match self {
            TeamField::Name(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Name buried in a nested team object: `name`, then `Name`, then `title`.
    pub fn nested_name(&self) -> Option<&str> {
        match self {
            TeamField::Object(o) => o
                .name
                .as_deref()
                .or(o.name_pascal.as_deref())
                .or(o.title.as_deref()),
            _ => None,
        }
    }
}

/// List endpoints answer with either a bare array or a `{data: [...]}`
/// wrapper, depending on the service version.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum MatchListRsp {
    Plain(Vec<RawMatch>),
    Wrapped { data: Vec<RawMatch> },
    Other(serde_json::Value),
}

impl MatchListRsp {
    pub fn into_raw(self) -> Vec<RawMatch> {
        match self {
            MatchListRsp::Plain(rows) => rows,
            MatchListRsp::Wrapped { data } => data,
            MatchListRsp::Other(_) => vec![],
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct PagedRsp {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<RawMatch>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<RawMatch>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<JsonNum>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub totalCount: Option<JsonNum>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<JsonNum>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pageSize: Option<JsonNum>,
}

impl PagedRsp {
    pub fn into_raw(self) -> (Vec<RawMatch>, Option<i64>, Option<i64>, Option<i64>) {
        let rows = self.items.or(self.data).unwrap_or_default();
        let total = self.total.or(self.totalCount).and_then(|e| e.as_i64());
        let page = self.page.and_then(|e| e.as_i64());
        let page_size = self.pageSize.and_then(|e| e.as_i64());
        (rows, total, page, page_size)
    }
}
