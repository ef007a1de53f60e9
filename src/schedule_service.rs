use serde::{Deserialize, Serialize};

use crate::models::JsonNum;
use crate::models_api::dto::ScheduleRequest;
use crate::models_api::match_row::{parse_utc, MatchRow};
use crate::models_api::notice::ApiNotice;

pub const DEFAULT_QUARTER_SECONDS: i64 = 600;
pub const MIN_QUARTER_SECONDS: i64 = 60;

fn default_quarter() -> Option<JsonNum> {
    Some(JsonNum::Number(DEFAULT_QUARTER_SECONDS))
}

/// The schedule form as the admin UI holds it. The duration arrives as raw
/// input (number or text); coercion happens in the derivation functions so a
/// stray keystroke never wedges the form.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleForm {
    #[serde(default)]
    pub home_team_id: Option<i64>,
    #[serde(default)]
    pub away_team_id: Option<i64>,
    #[serde(default)]
    pub date_match_local: String,
    #[serde(default = "default_quarter")]
    pub quarter_duration_seconds: Option<JsonNum>,
}

impl Default for ScheduleForm {
    fn default() -> Self {
        ScheduleForm {
            home_team_id: None,
            away_team_id: None,
            date_match_local: String::new(),
            quarter_duration_seconds: default_quarter(),
        }
    }
}

impl ScheduleForm {
    pub fn same_teams_selected(&self) -> bool {
        matches!((self.home_team_id, self.away_team_id), (Some(h), Some(a)) if h == a)
    }

    /// Numeric coercion of the duration input; unparseable or 0 falls back to
    /// the default.
    pub fn quarter_duration_or_default(&self) -> i64 {
        self.quarter_duration_seconds
            .as_ref()
            .and_then(JsonNum::as_i64)
            .filter(|e| *e != 0)
            .unwrap_or(DEFAULT_QUARTER_SECONDS)
    }

    /// The value actually submitted, floored at the one-minute minimum.
    pub fn submitted_quarter_duration(&self) -> i64 {
        self.quarter_duration_or_default().max(MIN_QUARTER_SECONDS)
    }

    pub fn has_required_fields(&self) -> bool {
        self.home_team_id.is_some()
            && self.away_team_id.is_some()
            && !self.date_match_local.trim().is_empty()
    }

    /// Recomputed on every field change; the in-flight flag is part of the
    /// guard so a pending request blocks duplicate submits.
    pub fn schedule_disabled(&self, in_flight: bool) -> bool {
        !self.has_required_fields()
            || self.same_teams_selected()
            || in_flight
            || self.quarter_duration_or_default() < MIN_QUARTER_SECONDS
    }

    pub fn build_request(&self) -> Option<ScheduleRequest> {
        let home_team_id = self.home_team_id?;
        let away_team_id = self.away_team_id?;
        let date_match = parse_utc(&self.date_match_local)?;
        Some(ScheduleRequest {
            home_team_id,
            away_team_id,
            date_match,
            quarter_duration_seconds: self.submitted_quarter_duration(),
        })
    }
}

/// Result of one pass through the scheduling state machine. `Rejected` never
/// reached the network; `Failed` did and came back with an error.
#[derive(Debug, Clone, PartialEq)]
pub enum ScheduleOutcome {
    Scheduled { row: MatchRow, notice: ApiNotice },
    Rejected { notice: ApiNotice },
    Failed { notice: ApiNotice },
}

impl ScheduleOutcome {
    pub fn incomplete() -> ScheduleOutcome {
        ScheduleOutcome::Rejected {
            notice: ApiNotice::warning(
                "Incomplete data",
                "Fill in every field and pick two different teams.".to_string(),
            ),
        }
    }

    pub fn scheduled(row: MatchRow, home_name: String, away_name: String) -> ScheduleOutcome {
        let id_label = if row.id > 0 { row.id.to_string() } else { "—".to_string() };
        let notice = ApiNotice::success(
            "Match scheduled",
            format!("#{id_label} · {home_name} vs {away_name}"),
        );
        ScheduleOutcome::Scheduled { row, notice }
    }

    pub fn failed(message: String) -> ScheduleOutcome {
        ScheduleOutcome::Failed { notice: ApiNotice::error("Could not schedule the match", message) }
    }

    pub fn notice(&self) -> &ApiNotice {
        match self {
            ScheduleOutcome::Scheduled { notice, .. } => notice,
            ScheduleOutcome::Rejected { notice } => notice,
            ScheduleOutcome::Failed { notice } => notice,
        }
    }
}
