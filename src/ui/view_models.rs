//! Render-ready rows built from the core's ranked and grouped data.

use crate::data_fetcher::models::Player;
use crate::data_fetcher::processors::{
    PlayoffGroups, PlayoffStatus, RankedTeam, classify_status,
};
use tracing::warn;

/// One player badge: name plus position and points.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerBadge {
    pub name: String,
    pub detail: String,
}

impl From<&Player> for PlayerBadge {
    fn from(player: &Player) -> Self {
        Self {
            name: player.name.clone(),
            detail: player.badge_detail(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StandingsRow {
    pub rank: usize,
    pub team_name: String,
    /// Blank when the owner is unknown.
    pub owner: String,
    pub record: String,
    pub points_for: String,
    pub made_league_playoffs: bool,
    pub badges: Vec<PlayerBadge>,
}

impl From<&RankedTeam> for StandingsRow {
    fn from(ranked: &RankedTeam) -> Self {
        Self {
            rank: ranked.rank,
            team_name: ranked.team.name.clone(),
            owner: ranked.team.owner.clone().unwrap_or_default(),
            record: ranked.record(),
            points_for: ranked.points_for_display(),
            made_league_playoffs: ranked.team.made_league_playoffs,
            badges: ranked.top_players().iter().map(PlayerBadge::from).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayoffRow {
    /// Non-zero `final_rank` once the week is finalized, otherwise the position in the week.
    pub display_rank: usize,
    pub team: String,
    pub score: String,
    pub status: PlayoffStatus,
}

/// One week of the BIG Playoff, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayoffWeekView {
    pub week: u32,
    /// Every week that has started, for the week selector.
    pub weeks: Vec<u32>,
    pub rows: Vec<PlayoffRow>,
}

impl PlayoffWeekView {
    /// Builds the view for `requested` or, when absent or unknown, the latest week.
    ///
    /// Returns `None` when there are no entries at all, meaning the playoff
    /// has not started.
    pub fn build(groups: &PlayoffGroups, requested: Option<u32>) -> Option<Self> {
        let latest = groups.latest_week()?;
        let week = match requested {
            Some(w) if groups.weeks.contains(&w) => w,
            Some(w) => {
                warn!("Week {} has no playoff entries, showing week {}", w, latest);
                latest
            }
            None => latest,
        };

        let rows = groups
            .entries_for(week)
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| {
                let status = classify_status(entry, &groups.weeks)?;
                Some(PlayoffRow {
                    display_rank: entry
                        .final_rank
                        .filter(|&r| r > 0)
                        .map(|r| r as usize)
                        .unwrap_or(index + 1),
                    team: entry.team.clone(),
                    score: format!("{:.2}", entry.week_score),
                    status,
                })
            })
            .collect();

        Some(Self {
            week,
            weeks: groups.weeks.clone(),
            rows,
        })
    }
}
