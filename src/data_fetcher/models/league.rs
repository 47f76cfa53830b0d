use serde::{Deserialize, Serialize};

/// One independent fantasy competition. Grouping key for teams only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct League {
    pub id: i64,
    pub name: String,
    pub season: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleeper_league_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commissioner: Option<i64>,
}

impl League {
    /// Display label, e.g. `"Dynasty Degenerates (2025)"`.
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.season)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_league_deserialization() {
        let json = r#"{
            "id": 3,
            "name": "Dynasty Degenerates",
            "sleeper_league_id": "1048273",
            "season": 2025,
            "commissioner": null
        }"#;
        let league: League = serde_json::from_str(json).unwrap();
        assert_eq!(league.id, 3);
        assert_eq!(league.season, 2025);
        assert_eq!(league.sleeper_league_id.as_deref(), Some("1048273"));
        assert_eq!(league.commissioner, None);
        assert_eq!(league.label(), "Dynasty Degenerates (2025)");
    }

    #[test]
    fn test_league_minimal_fields() {
        let league: League =
            serde_json::from_str(r#"{"id": 1, "name": "Main", "season": 2024}"#).unwrap();
        assert_eq!(league.name, "Main");
        assert_eq!(league.sleeper_league_id, None);
    }
}
