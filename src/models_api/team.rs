use serde::{Deserialize, Serialize};

use crate::models::JsonNum;
use crate::models_external::team::RawTeam;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ApiTeam {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl RawTeam {
    /// Rows without a usable id cannot be keyed into the lookup and are dropped.
    pub fn into_api(self) -> Option<ApiTeam> {
        let id = self.id.as_ref().and_then(JsonNum::as_i64)?;
        Some(ApiTeam {
            id,
            name: self.name.unwrap_or_default(),
            color: self.color,
        })
    }
}
