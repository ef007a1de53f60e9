use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::JsonNum;
use crate::models_external::partido::{MatchListRsp, PagedRsp, RawMatch, TeamField};

/// Canonical match row served to the admin UI. Built fresh on every response
/// mapping; a list refresh always replaces the whole set.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MatchRow {
    pub id: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_match_utc: Option<DateTime<Utc>>,
    pub status: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_team_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub away_team_id: Option<i64>,

    pub home_team: String,
    pub away_team: String,

    pub home_score: i64,
    pub away_score: i64,
    pub home_fouls: i64,
    pub away_fouls: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PagedMatches {
    pub items: Vec<MatchRow>,
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
}

/// Accepts RFC 3339 as well as the offset-less timestamps the .NET services
/// emit. Unparseable input maps to None rather than an error.
pub fn parse_utc(value: &str) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(DateTime::from_naive_utc_and_offset(naive, Utc));
        }
    }
    None
}

fn first_id(candidates: [&Option<JsonNum>; 3]) -> Option<i64> {
    candidates.iter().find_map(|e| e.as_ref().and_then(JsonNum::as_i64))
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value.map(str::trim).filter(|e| !e.is_empty()).map(str::to_string)
}

/// Display-name precedence: explicit string field, nested object name,
/// synthetic `Team #<id>`, empty string.
fn team_display(team: &Option<TeamField>, team_name: &Option<TeamField>, id: Option<i64>) -> String {
    non_blank(team.as_ref().and_then(TeamField::as_plain_name))
        .or_else(|| non_blank(team_name.as_ref().and_then(TeamField::as_plain_name)))
        .or_else(|| non_blank(team.as_ref().and_then(TeamField::nested_name)))
        .or_else(|| non_blank(team_name.as_ref().and_then(TeamField::nested_name)))
        .or_else(|| id.map(|id| format!("Team #{id}")))
        .unwrap_or_default()
}

impl From<RawMatch> for MatchRow {
    fn from(m: RawMatch) -> Self {
        let home_team_id = first_id([&m.homeTeamId, &m.homeTeamID, &m.home_id]);
        let away_team_id = first_id([&m.awayTeamId, &m.awayTeamID, &m.away_id]);
        MatchRow {
            id: m.id.as_ref().map(JsonNum::to_num).unwrap_or(0),
            date_match_utc: m
                .dateMatchUtc
                .as_deref()
                .and_then(parse_utc)
                .or_else(|| m.dateMatch.as_deref().and_then(parse_utc)),
            status: m.status.as_ref().map(JsonNum::to_display).unwrap_or_default(),
            home_team: team_display(&m.homeTeam, &m.homeTeamName, home_team_id),
            away_team: team_display(&m.awayTeam, &m.awayTeamName, away_team_id),
            home_team_id,
            away_team_id,
            home_score: m.homeScore.as_ref().map(JsonNum::to_num).unwrap_or(0),
            away_score: m.awayScore.as_ref().map(JsonNum::to_num).unwrap_or(0),
            home_fouls: m.homeFouls.as_ref().map(JsonNum::to_num).unwrap_or(0),
            away_fouls: m.awayFouls.as_ref().map(JsonNum::to_num).unwrap_or(0),
        }
    }
}

pub fn normalize_list(rsp: MatchListRsp) -> Vec<MatchRow> {
    rsp.into_raw().into_iter().map(MatchRow::from).collect()
}

impl From<PagedRsp> for PagedMatches {
    fn from(rsp: PagedRsp) -> Self {
        let (rows, total, page, page_size) = rsp.into_raw();
        let items: Vec<MatchRow> = rows.into_iter().map(MatchRow::from).collect();
        PagedMatches {
            total: total.unwrap_or(items.len() as i64),
            page: page.unwrap_or(1),
            page_size: page_size.unwrap_or(items.len() as i64),
            items,
        }
    }
}
