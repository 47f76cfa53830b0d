pub mod api;
pub mod cache;
pub mod models;
pub mod processors;

pub use api::{HubSnapshot, fetch_hub_snapshot};
pub use models::{League, Player, PlayoffEntry, Team};
pub use processors::{
    PlayoffGroups, PlayoffStatus, RankedTeam, classify_status, group_playoff_entries,
    rank_standings,
};
