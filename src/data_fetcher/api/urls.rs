//! URL building utilities for hub API endpoints

use clap::ValueEnum;

/// Aggregated widgets computed by the hub server and shown verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Widget {
    /// Highest weekly score per league
    WeeklyWinner,
    /// Cross-league power ranking
    PowerRankings,
    /// Most-rostered players across leagues
    CommonPlayers,
}

impl Widget {
    pub fn path(&self) -> &'static str {
        match self {
            Widget::WeeklyWinner => "weekly-winner",
            Widget::PowerRankings => "power-rankings",
            Widget::CommonPlayers => "common-players",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Widget::WeeklyWinner => "Weekly High Scorers",
            Widget::PowerRankings => "Power Rankings",
            Widget::CommonPlayers => "Most Rostered Players",
        }
    }
}

fn base(api_base_url: &str) -> &str {
    api_base_url.trim_end_matches('/')
}

/// # Example
/// ```
/// use big_playoff_hub::data_fetcher::api::build_leagues_url;
///
/// let url = build_leagues_url("https://hub.example.com/api/");
/// assert_eq!(url, "https://hub.example.com/api/leagues/");
/// ```
pub fn build_leagues_url(api_base_url: &str) -> String {
    format!("{}/leagues/", base(api_base_url))
}

pub fn build_league_url(api_base_url: &str, league_id: i64) -> String {
    format!("{}/leagues/{league_id}/", base(api_base_url))
}

/// Standings endpoint for one league; the server returns teams in tiebreak order.
///
/// # Example
/// ```
/// use big_playoff_hub::data_fetcher::api::build_teams_url;
///
/// let url = build_teams_url("https://hub.example.com/api", 2);
/// assert_eq!(url, "https://hub.example.com/api/teams/?league=2");
/// ```
pub fn build_teams_url(api_base_url: &str, league_id: i64) -> String {
    format!("{}/teams/?league={league_id}", base(api_base_url))
}

pub fn build_playoff_entries_url(api_base_url: &str) -> String {
    format!("{}/playoff-entries/", base(api_base_url))
}

pub fn build_widget_url(api_base_url: &str, widget: Widget) -> String {
    format!("{}/widget/{}/", base(api_base_url), widget.path())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_urls() {
        let base = "http://localhost:8000/api";
        assert_eq!(build_leagues_url(base), "http://localhost:8000/api/leagues/");
        assert_eq!(build_league_url(base, 4), "http://localhost:8000/api/leagues/4/");
        assert_eq!(
            build_teams_url(base, 4),
            "http://localhost:8000/api/teams/?league=4"
        );
        assert_eq!(
            build_playoff_entries_url(base),
            "http://localhost:8000/api/playoff-entries/"
        );
    }

    #[test]
    fn test_widget_urls() {
        let base = "https://hub.example.com/api/";
        assert_eq!(
            build_widget_url(base, Widget::WeeklyWinner),
            "https://hub.example.com/api/widget/weekly-winner/"
        );
        assert_eq!(
            build_widget_url(base, Widget::PowerRankings),
            "https://hub.example.com/api/widget/power-rankings/"
        );
        assert_eq!(
            build_widget_url(base, Widget::CommonPlayers),
            "https://hub.example.com/api/widget/common-players/"
        );
    }
}
