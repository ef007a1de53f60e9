use std::collections::HashMap;

use crate::models_api::team::ApiTeam;

/// Id-to-name lookup backing team display everywhere on the dashboard.
/// Rebuilt in full whenever team data loads; a failed load clears it rather
/// than leaving stale entries behind.
#[derive(Default)]
pub struct TeamLookup {
    names: HashMap<i64, String>,
}

impl TeamLookup {
    pub fn rebuild(&mut self, teams: &[ApiTeam]) {
        let mut names = HashMap::with_capacity(teams.len());
        for team in teams {
            names.insert(team.id, team.name.clone());
        }
        self.names = names;
    }

    pub fn clear(&mut self) {
        self.names = HashMap::new();
    }

    pub fn name_of(&self, id: i64) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Name for a table cell: the name the row carries, else the lookup,
    /// else a synthetic label, else a dash.
    pub fn display_name(&self, carried: &str, id: Option<i64>) -> String {
        let trimmed = carried.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
        match id {
            Some(id) => self
                .name_of(id)
                .map(str::to_string)
                .unwrap_or_else(|| format!("Team #{id}")),
            None => "—".to_string(),
        }
    }

    /// Name for the scheduling confirmation: the lookup wins, the name the
    /// response carried is the fallback.
    pub fn resolved_name(&self, id: i64, carried: &str) -> String {
        if let Some(name) = self.name_of(id) {
            return name.to_string();
        }
        let trimmed = carried.trim();
        if trimmed.is_empty() {
            format!("Team #{id}")
        } else {
            trimmed.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup() -> TeamLookup {
        let mut lookup = TeamLookup::default();
        lookup.rebuild(&[
            ApiTeam { id: 1, name: "Lions".to_string(), color: None },
            ApiTeam { id: 2, name: "Tigers".to_string(), color: None },
        ]);
        lookup
    }

    #[test]
    fn rebuild_replaces_the_whole_map() {
        let mut lookup = lookup();
        lookup.rebuild(&[ApiTeam { id: 3, name: "Bears".to_string(), color: None }]);
        assert_eq!(lookup.name_of(3), Some("Bears"));
        assert_eq!(lookup.name_of(1), None);
    }

    #[test]
    fn clear_drops_every_entry() {
        let mut lookup = lookup();
        lookup.clear();
        assert!(lookup.is_empty());
        assert_eq!(lookup.resolved_name(1, ""), "Team #1");
    }

    #[test]
    fn display_name_falls_back_through_the_chain() {
        let lookup = lookup();
        assert_eq!(lookup.display_name("Carried", Some(1)), "Carried");
        assert_eq!(lookup.display_name("  ", Some(1)), "Lions");
        assert_eq!(lookup.display_name("", Some(9)), "Team #9");
        assert_eq!(lookup.display_name("", None), "—");
    }

    #[test]
    fn resolved_name_prefers_the_lookup_over_the_response() {
        let lookup = lookup();
        assert_eq!(lookup.resolved_name(1, "Stale name"), "Lions");
        assert_eq!(lookup.resolved_name(9, "Visitors"), "Visitors");
    }
}
