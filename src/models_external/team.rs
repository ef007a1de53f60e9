use serde::{Deserialize, Serialize};

use crate::models::JsonNum;

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct RawTeam {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<JsonNum>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub playersCount: Option<JsonNum>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum TeamListRsp {
    Plain(Vec<RawTeam>),
    Wrapped { data: Vec<RawTeam> },
    Other(serde_json::Value),
}

impl TeamListRsp {
    pub fn into_raw(self) -> Vec<RawTeam> {
        match self {
            TeamListRsp::Plain(rows) => rows,
            TeamListRsp::Wrapped { data } => data,
            TeamListRsp::Other(_) => vec![],
        }
    }
}
