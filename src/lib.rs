//! BIG Playoff Hub Library
//!
//! Fetches standings and playoff entries for a multi-league fantasy football
//! competition and turns them into display-ready data: ranked standings with
//! top players, playoff entries grouped by week, and an Active / Advanced /
//! Eliminated status for every entry.
//!
//! # Examples
//!
//! ```rust,no_run
//! use big_playoff_hub::config::Session;
//! use big_playoff_hub::data_fetcher::api::{create_http_client, fetch_playoff_entries};
//! use big_playoff_hub::data_fetcher::processors::group_playoff_entries;
//! use big_playoff_hub::ui::{HubPage, PlayoffWeekView};
//! use big_playoff_hub::error::AppError;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let client = create_http_client(30, &Session::anonymous())?;
//!     let entries = fetch_playoff_entries(&client, "https://hub.example.com/api").await?;
//!     let groups = group_playoff_entries(entries)?;
//!
//!     let mut page = HubPage::new(302, "BIG PLAYOFF", "", true);
//!     page.add_playoff_week(PlayoffWeekView::build(&groups, None).as_ref());
//!
//!     let mut stdout = std::io::stdout();
//!     page.render_buffered(&mut stdout)?;
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod ui;

// Re-export commonly used types for convenience
pub use config::{Config, Session};
pub use data_fetcher::api::fetch_hub_snapshot;
pub use data_fetcher::models::{League, Player, PlayoffEntry, Team};
pub use data_fetcher::processors::{
    PlayoffGroups, PlayoffStatus, RankedTeam, classify_status, group_playoff_entries,
    rank_standings,
};
pub use error::AppError;
pub use ui::HubPage;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
