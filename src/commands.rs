use crate::cli::Args;
use big_playoff_hub::config::Config;
use big_playoff_hub::config::user_prompts::prompt_for_api_url;
use big_playoff_hub::constants::pages;
use big_playoff_hub::data_fetcher::api::{
    Widget, create_http_client, fetch_hub_snapshot, fetch_leagues, fetch_playoff_entries,
    fetch_teams_for_leagues, fetch_widget,
};
use big_playoff_hub::data_fetcher::processors::{group_playoff_entries, rank_standings};
use big_playoff_hub::error::AppError;
use big_playoff_hub::ui::{HubPage, PlayoffWeekView};
use crossterm::{execute, terminal::SetTitle};
use reqwest::Client;
use std::io::stdout;
use tracing::{info, warn};

/// Validates command line argument combinations.
///
/// Returns an error if incompatible arguments are used together.
pub fn validate_args(args: &Args) -> Result<(), AppError> {
    let pages_requested = [
        args.playoff,
        args.leagues,
        args.all_leagues,
        args.widget.is_some(),
    ]
    .iter()
    .filter(|&&selected| selected)
    .count();

    if pages_requested > 1 {
        return Err(AppError::config_error(
            "Choose only one of --playoff, --leagues, --all-leagues and --widget",
        ));
    }
    if args.all_leagues && args.league.is_some() {
        return Err(AppError::config_error(
            "Cannot use --league (-L) together with --all-leagues (-a)",
        ));
    }
    if args.week == Some(0) {
        return Err(AppError::config_error("--week must be 1 or greater"));
    }
    Ok(())
}

fn print_page(page: &HubPage, plain: bool, title: &str) -> Result<(), AppError> {
    if !plain {
        execute!(stdout(), SetTitle(title))?;
    }
    page.render_buffered(&mut stdout())?;
    println!();
    Ok(())
}

fn build_client(config: &Config) -> Result<Client, AppError> {
    create_http_client(config.http_timeout_seconds, &config.session())
}

/// Handles the --version command.
pub fn handle_version_command() {
    println!("{} {}", big_playoff_hub::NAME, big_playoff_hub::VERSION);
}

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Handles configuration update commands (--config, --set-log-file, --clear-log-file).
///
/// An empty `--config` value prompts for the new URL.
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let config_path = Config::get_config_path();
    let mut config = Config::load_from_path(&config_path)
        .await
        .unwrap_or_default();

    if let Some(new_url) = &args.new_api_url {
        config.api_base_url = if new_url.trim().is_empty() {
            prompt_for_api_url().await?
        } else {
            new_url.clone()
        };
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.validate()?;
    config.save().await?;
    println!("Config updated successfully!");

    Ok(())
}

/// Default page: the selected league's standings and the BIG Playoff.
///
/// Sections load concurrently; a failing section shows its error while the
/// others still render.
pub async fn handle_hub_command(args: &Args, config: &Config) -> Result<(), AppError> {
    let client = build_client(config)?;
    let snapshot = fetch_hub_snapshot(&client, &config.api_base_url, args.league).await;

    let subheader = snapshot
        .selected_league()
        .map(|league| league.label())
        .unwrap_or_default();
    let mut page = HubPage::new(pages::STANDINGS, "BIG PLAYOFF HUB", subheader, !args.plain);

    page.add_section_header("STANDINGS");
    match &snapshot.standings {
        Ok(standings) => page.add_standings(standings),
        Err(e) => page.add_error_message(format!("Could not load standings: {e}")),
    }

    if let Err(e) = &snapshot.leagues {
        page.add_error_message(format!("Could not load leagues: {e}"));
    }

    page.add_message("");
    page.add_section_header("BIG PLAYOFF");
    match &snapshot.playoff {
        Ok(groups) => page.add_playoff_week(PlayoffWeekView::build(groups, args.week).as_ref()),
        Err(e) => page.add_error_message(format!("Could not load the BIG Playoff: {e}")),
    }

    print_page(&page, args.plain, "BIG PLAYOFF HUB")
}

/// Handles --playoff: one playoff week with every team's status.
pub async fn handle_playoff_command(args: &Args, config: &Config) -> Result<(), AppError> {
    let client = build_client(config)?;
    let mut page = HubPage::new(pages::PLAYOFF, "BIG PLAYOFF", "Cross-league bracket", !args.plain);

    let groups = match fetch_playoff_entries(&client, &config.api_base_url).await {
        Ok(entries) => group_playoff_entries(entries),
        Err(e) => Err(e),
    };

    match groups {
        Ok(groups) => {
            info!(
                "Playoff has {} entries across {} weeks",
                groups.total_entries(),
                groups.weeks.len()
            );
            page.add_playoff_week(PlayoffWeekView::build(&groups, args.week).as_ref());
        }
        Err(e) => {
            warn!("Playoff page failed: {}", e);
            page.add_error_message(format!("Could not load the BIG Playoff: {e}"));
        }
    }

    print_page(&page, args.plain, "BIG PLAYOFF")
}

/// Handles --leagues: every league with its id, the selected one marked.
pub async fn handle_leagues_command(args: &Args, config: &Config) -> Result<(), AppError> {
    let client = build_client(config)?;
    let mut page = HubPage::new(pages::LEAGUES, "LEAGUES", "Use -L <ID> to pick one", !args.plain);

    match fetch_leagues(&client, &config.api_base_url).await {
        Ok(leagues) => page.add_leagues(&leagues, args.league),
        Err(e) => page.add_error_message(format!("Could not load leagues: {e}")),
    }

    print_page(&page, args.plain, "LEAGUES")
}

/// Handles --all-leagues: standings of every league, fetched concurrently.
pub async fn handle_all_standings_command(args: &Args, config: &Config) -> Result<(), AppError> {
    let client = build_client(config)?;
    let mut page = HubPage::new(pages::STANDINGS, "STANDINGS", "All leagues", !args.plain);

    let leagues = match fetch_leagues(&client, &config.api_base_url).await {
        Ok(leagues) => leagues,
        Err(e) => {
            page.add_error_message(format!("Could not load leagues: {e}"));
            return print_page(&page, args.plain, "STANDINGS");
        }
    };

    if leagues.is_empty() {
        page.add_message("No leagues found.");
        return print_page(&page, args.plain, "STANDINGS");
    }

    let ids: Vec<i64> = leagues.iter().map(|l| l.id).collect();
    let results = fetch_teams_for_leagues(&client, &config.api_base_url, &ids).await;

    for (league, (_, teams)) in leagues.iter().zip(results) {
        page.add_section_header(league.label());
        match teams {
            Ok(teams) => page.add_standings(&rank_standings(teams)),
            Err(e) => page.add_error_message(format!("Could not load standings: {e}")),
        }
        page.add_message("");
    }

    print_page(&page, args.plain, "STANDINGS")
}

/// Handles --widget: the server's document, pretty-printed and otherwise untouched.
pub async fn handle_widget_command(
    args: &Args,
    config: &Config,
    widget: Widget,
) -> Result<(), AppError> {
    let client = build_client(config)?;
    let mut page = HubPage::new(pages::WIDGETS, widget.title().to_uppercase(), "", !args.plain);

    match fetch_widget(&client, &config.api_base_url, widget).await {
        Ok(value) => page.add_preformatted(serde_json::to_string_pretty(&value)?),
        Err(e) => page.add_error_message(format!("Could not load {}: {e}", widget.title())),
    }

    print_page(&page, args.plain, widget.title())
}
