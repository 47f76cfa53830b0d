pub mod colors;
pub mod page;
pub mod view_models;

pub use page::{HubPage, HubRow};
pub use view_models::{PlayerBadge, PlayoffRow, PlayoffWeekView, StandingsRow};
