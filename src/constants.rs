//! Application-wide constants and configuration values
//!
//! Timeouts, cache lifetimes, retry settings and display limits live here
//! so the fetch layer and the pages agree on them.

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 16;

/// Number of HTTP responses kept in the LRU response cache
pub const HTTP_RESPONSE_CACHE_CAPACITY: usize = 64;

/// Name of the log file written by the rolling appender
pub const LOG_FILE_NAME: &str = "big_playoff_hub.log";

/// Cache TTL (Time To Live) values in seconds
pub mod cache_ttl {
    /// Playoff entries change when the elimination process runs, keep them short
    pub const PLAYOFF_ENTRIES_SECONDS: u64 = 60;

    /// Standings move at most a few times a week
    pub const TEAMS_SECONDS: u64 = 300;

    /// League list is effectively static within a season
    pub const LEAGUES_SECONDS: u64 = 1800;

    /// Aggregated widgets (weekly winners, power rankings, common players)
    pub const WIDGETS_SECONDS: u64 = 600;
}

/// Retry settings for transient transport failures
pub mod retry {
    /// Maximum number of retries after the first attempt
    pub const MAX_RETRIES: u32 = 3;

    /// Initial backoff before the first retry
    pub const BASE_DELAY_MS: u64 = 250;
}

/// Environment variable names
pub mod env_vars {
    /// Overrides the API base URL
    pub const API_URL: &str = "BIG_PLAYOFF_API_URL";

    /// Overrides the log file path
    pub const LOG_FILE: &str = "BIG_PLAYOFF_LOG_FILE";

    /// Overrides the HTTP timeout in seconds
    pub const HTTP_TIMEOUT: &str = "BIG_PLAYOFF_HTTP_TIMEOUT";

    /// Bearer token attached to every request
    pub const ACCESS_TOKEN: &str = "BIG_PLAYOFF_ACCESS_TOKEN";
}

/// Display limits and texts
pub mod display {
    /// Maximum number of player badges shown per team
    pub const MAX_TOP_PLAYERS: usize = 3;

    /// Column width for team names in standings and playoff tables
    pub const TEAM_NAME_WIDTH: usize = 24;

    /// Default terminal width for non-interactive rendering
    pub const DEFAULT_WIDTH: usize = 80;

    /// Week in which the BIG Playoff starts
    pub const PLAYOFF_START_WEEK: u32 = 15;
}

/// Teletext page numbers shown in the header
pub mod pages {
    pub const LEAGUES: u16 = 300;
    pub const STANDINGS: u16 = 301;
    pub const PLAYOFF: u16 = 302;
    pub const WIDGETS: u16 = 303;
}
