use super::common::{deserialize_optional_decimal, deserialize_optional_id_string};
use super::players::Player;
use serde::{Deserialize, Serialize};

/// A team in one league for one season, as returned by the standings endpoint.
///
/// Record and points fields are optional: a team that has not played yet, or
/// a partially synced roster, renders with blank cells instead of failing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Team {
    pub id: i64,
    #[serde(alias = "team_name")]
    pub name: String,
    /// Owner username, or the owner's user id when the API sends a key.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_optional_id_string"
    )]
    pub owner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub league: Option<i64>,
    #[serde(default)]
    pub wins: Option<u32>,
    #[serde(default)]
    pub losses: Option<u32>,
    #[serde(default)]
    pub ties: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_optional_decimal")]
    pub points_for: Option<f64>,
    #[serde(default)]
    pub made_league_playoffs: bool,
    /// Source-sorted by contribution, at most three entries expected.
    #[serde(default, alias = "top_three_players", deserialize_with = "deserialize_players")]
    pub top_players: Vec<Player>,
}

// `null` is treated like a missing list
fn deserialize_players<'de, D>(deserializer: D) -> Result<Vec<Player>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<Player>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_from_standings_payload() {
        let json = r#"{
            "id": 11,
            "owner": "nic",
            "league": 2,
            "sleeper_roster_id": "4",
            "team_name": "Gridiron Goblins",
            "made_league_playoffs": true,
            "wins": 9,
            "losses": 4,
            "ties": 1,
            "points_for": "1734.22",
            "top_three_players": [
                {"id": "4046", "name": "Patrick Mahomes", "position": "QB", "total_points": 301.5}
            ]
        }"#;
        let team: Team = serde_json::from_str(json).unwrap();
        assert_eq!(team.name, "Gridiron Goblins");
        assert_eq!(team.owner.as_deref(), Some("nic"));
        assert_eq!(team.points_for, Some(1734.22));
        assert!(team.made_league_playoffs);
        assert_eq!(team.top_players.len(), 1);
    }

    #[test]
    fn test_team_with_missing_optional_fields() {
        let json = r#"{"id": 1, "name": "Bench Mob", "top_players": null}"#;
        let team: Team = serde_json::from_str(json).unwrap();
        assert_eq!(team.owner, None);
        assert_eq!(team.wins, None);
        assert_eq!(team.points_for, None);
        assert!(team.top_players.is_empty());
    }

    #[test]
    fn test_team_with_owner_key() {
        let json = r#"{
            "id": 10,
            "owner": 4,
            "league": 1,
            "sleeper_roster_id": "1",
            "team_name": "Top Dogs",
            "made_league_playoffs": false,
            "wins": 8,
            "losses": 6,
            "ties": 0,
            "points_for": "1650.75"
        }"#;
        let team: Team = serde_json::from_str(json).unwrap();
        assert_eq!(team.owner.as_deref(), Some("4"));
        assert_eq!(team.league, Some(1));
        assert!(team.top_players.is_empty());
    }
}
