use super::common::{deserialize_decimal, deserialize_id_string};
use serde::{Deserialize, Serialize};

/// Display payload for a rostered player, already sorted by the source.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Player {
    #[serde(deserialize_with = "deserialize_id_string")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub position: String,
    #[serde(deserialize_with = "deserialize_decimal")]
    pub total_points: f64,
    #[serde(default, alias = "avatar_url", skip_serializing_if = "Option::is_none")]
    pub avatar_reference: Option<String>,
}

impl Player {
    /// Badge detail text, e.g. `"WR • 212.4 pts"`.
    pub fn badge_detail(&self) -> String {
        if self.position.is_empty() {
            format!("{:.1} pts", self.total_points)
        } else {
            format!("{} • {:.1} pts", self.position, self.total_points)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_deserialization_with_avatar_url() {
        let json = r#"{
            "id": "4046",
            "name": "Patrick Mahomes",
            "position": "QB",
            "total_points": 301.56,
            "avatar_url": "https://sleepercdn.com/content/nfl/players/4046.jpg"
        }"#;
        let player: Player = serde_json::from_str(json).unwrap();
        assert_eq!(player.id, "4046");
        assert_eq!(player.position, "QB");
        assert_eq!(
            player.avatar_reference.as_deref(),
            Some("https://sleepercdn.com/content/nfl/players/4046.jpg")
        );
        assert_eq!(player.badge_detail(), "QB • 301.6 pts");
    }

    #[test]
    fn test_player_numeric_id_and_missing_avatar() {
        let json = r#"{"id": 17, "name": "Ja'Marr Chase", "position": "WR", "total_points": "250.0"}"#;
        let player: Player = serde_json::from_str(json).unwrap();
        assert_eq!(player.id, "17");
        assert_eq!(player.total_points, 250.0);
        assert_eq!(player.avatar_reference, None);
    }

    #[test]
    fn test_badge_detail_without_position() {
        let player = Player {
            id: "1".to_string(),
            name: "Unknown".to_string(),
            position: String::new(),
            total_points: 12.345,
            avatar_reference: None,
        };
        assert_eq!(player.badge_detail(), "12.3 pts");
    }
}
