use big_playoff_hub::data_fetcher::api::Widget;
use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Returns true when the invocation only edits or prints configuration.
pub fn is_config_command(args: &Args) -> bool {
    args.new_api_url.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
        || args.list_config
}

/// BIG Playoff Hub
///
/// A teletext-style terminal viewer for a multi-league fantasy football
/// competition. Shows per-league standings with each team's top players and
/// the cross-league "BIG Playoff" with every team's Active, Advanced or
/// Eliminated status.
///
/// Without options the hub page is shown: standings for the first league and
/// the latest playoff week, loaded concurrently.
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
#[command(disable_version_flag = true)]
#[command(styles = get_styles())]
pub struct Args {
    /// Show standings for this league id instead of the first league.
    #[arg(long = "league", short = 'L', value_name = "ID", help_heading = "Pages")]
    pub league: Option<i64>,

    /// Show standings for every league.
    #[arg(long = "all-leagues", short = 'a', help_heading = "Pages")]
    pub all_leagues: bool,

    /// Show only the BIG Playoff page.
    #[arg(long = "playoff", short = 'P', help_heading = "Pages")]
    pub playoff: bool,

    /// Playoff week to show. Defaults to the latest week that has started.
    #[arg(long = "week", short = 'W', help_heading = "Pages")]
    pub week: Option<u32>,

    /// List the leagues tracked by the hub.
    #[arg(long = "leagues", help_heading = "Pages")]
    pub leagues: bool,

    /// Show a server-computed widget as-is.
    #[arg(long = "widget", value_enum, value_name = "NAME", help_heading = "Pages")]
    pub widget: Option<Widget>,

    /// Plain output without ANSI colors. Useful for piping into other tools.
    #[arg(long = "plain", short = 'p', help_heading = "Display Options")]
    pub plain: bool,

    /// Update the API base URL in config. Will prompt for a new URL if not provided.
    #[arg(
        long = "config",
        help_heading = "Configuration",
        value_name = "API_URL",
        num_args = 0..=1,
        default_missing_value = ""
    )]
    pub new_api_url: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Show version information
    #[arg(short = 'V', long = "version", help_heading = "Info")]
    pub version: bool,

    /// Mirror logs to the terminal in addition to the log file.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
