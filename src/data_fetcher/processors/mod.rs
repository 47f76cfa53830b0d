pub mod playoff_grouping;
pub mod playoff_status;
pub mod standings;
pub mod validation;

pub use playoff_grouping::{PlayoffGroups, group_playoff_entries};
pub use playoff_status::{PlayoffStatus, classify_status};
pub use standings::{RankedTeam, rank_standings};
pub use validation::{
    parse_leagues, parse_playoff_entries, parse_teams, rank_standings_payload,
};
