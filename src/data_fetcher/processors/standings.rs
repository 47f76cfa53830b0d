use crate::constants::display::MAX_TOP_PLAYERS;
use crate::data_fetcher::models::{Player, Team};
use tracing::debug;

/// A team placed in the standings table.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedTeam {
    /// 1-based position in the order returned by the source.
    pub rank: usize,
    pub team: Team,
}

impl RankedTeam {
    /// Player badges to show: the first three players as given by the source.
    pub fn top_players(&self) -> &[Player] {
        let shown = self.team.top_players.len().min(MAX_TOP_PLAYERS);
        &self.team.top_players[..shown]
    }

    /// `W-L-T`, or an empty string when any part of the record is missing.
    pub fn record(&self) -> String {
        match (self.team.wins, self.team.losses, self.team.ties) {
            (Some(w), Some(l), Some(t)) => format!("{w}-{l}-{t}"),
            _ => String::new(),
        }
    }

    /// Points-for with two decimals, or an empty string when unknown.
    pub fn points_for_display(&self) -> String {
        self.team
            .points_for
            .map(|points| format!("{points:.2}"))
            .unwrap_or_default()
    }
}

/// Orders a league's teams for display.
///
/// The data service already applies the league's tiebreak rules (wins, then
/// points-for, then manual override), so the input order is authoritative:
/// the rank is the input position plus one and nothing is re-sorted. Top
/// players are likewise taken as given.
///
/// # Examples
///
/// ```rust
/// use big_playoff_hub::data_fetcher::models::Team;
/// use big_playoff_hub::data_fetcher::processors::rank_standings;
///
/// let teams: Vec<Team> = serde_json::from_str(
///     r#"[{"id": 2, "name": "Second"}, {"id": 1, "name": "First"}]"#,
/// ).unwrap();
///
/// let ranked = rank_standings(teams);
/// assert_eq!(ranked[0].rank, 1);
/// assert_eq!(ranked[0].team.name, "Second");
/// ```
pub fn rank_standings(teams: Vec<Team>) -> Vec<RankedTeam> {
    debug!("Ranking {} teams in source order", teams.len());

    teams
        .into_iter()
        .enumerate()
        .map(|(index, team)| RankedTeam {
            rank: index + 1,
            team,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(id: &str, points: f64) -> Player {
        Player {
            id: id.to_string(),
            name: format!("Player {id}"),
            position: "RB".to_string(),
            total_points: points,
            avatar_reference: None,
        }
    }

    fn team(id: i64, wins: u32, players: Vec<Player>) -> Team {
        Team {
            id,
            name: format!("Team {id}"),
            owner: None,
            league: Some(1),
            wins: Some(wins),
            losses: Some(14 - wins),
            ties: Some(0),
            points_for: Some(1500.0 + id as f64),
            made_league_playoffs: false,
            top_players: players,
        }
    }

    #[test]
    fn test_rank_is_position_plus_one() {
        let teams = vec![team(7, 3, vec![]), team(2, 11, vec![]), team(5, 8, vec![])];
        let ranked = rank_standings(teams);

        let ids: Vec<i64> = ranked.iter().map(|r| r.team.id).collect();
        assert_eq!(ids, vec![7, 2, 5]);
        for (i, r) in ranked.iter().enumerate() {
            assert_eq!(r.rank, i + 1);
        }
    }

    #[test]
    fn test_does_not_resort_by_record() {
        // Worse record first stays first
        let ranked = rank_standings(vec![team(1, 2, vec![]), team(2, 12, vec![])]);
        assert_eq!(ranked[0].team.id, 1);
        assert_eq!(ranked[0].rank, 1);
    }

    #[test]
    fn test_empty_input() {
        assert!(rank_standings(Vec::new()).is_empty());
    }

    #[test]
    fn test_top_players_prefix_without_resorting() {
        let players = vec![
            player("a", 50.0),
            player("b", 90.0),
            player("c", 10.0),
            player("d", 300.0),
        ];
        let ranked = rank_standings(vec![team(1, 5, players)]);
        let shown: Vec<&str> = ranked[0].top_players().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(shown, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_fewer_than_three_players() {
        let ranked = rank_standings(vec![team(1, 5, vec![player("a", 1.0)])]);
        assert_eq!(ranked[0].top_players().len(), 1);
    }

    #[test]
    fn test_no_players_means_no_badges() {
        let ranked = rank_standings(vec![team(1, 5, vec![])]);
        assert!(ranked[0].top_players().is_empty());
    }

    #[test]
    fn test_record_and_points_display() {
        let ranked = rank_standings(vec![team(3, 10, vec![])]);
        assert_eq!(ranked[0].record(), "10-4-0");
        assert_eq!(ranked[0].points_for_display(), "1503.00");
    }

    #[test]
    fn test_missing_fields_render_blank() {
        let mut bare = team(1, 0, vec![]);
        bare.wins = None;
        bare.points_for = None;
        let ranked = rank_standings(vec![bare]);
        assert_eq!(ranked[0].record(), "");
        assert_eq!(ranked[0].points_for_display(), "");
    }
}
