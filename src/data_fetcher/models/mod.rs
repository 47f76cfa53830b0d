pub mod common;
pub mod league;
pub mod players;
pub mod playoff;
pub mod team;

pub use league::League;
pub use players::Player;
pub use playoff::PlayoffEntry;
pub use team::Team;
