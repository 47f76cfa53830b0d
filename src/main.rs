// src/main.rs
mod cli;
mod commands;
mod logging;

use big_playoff_hub::config::Config;
use big_playoff_hub::error::AppError;
use clap::Parser;
use cli::{Args, is_config_command};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    commands::validate_args(&args)?;

    if args.version {
        commands::handle_version_command();
        return Ok(());
    }

    let (log_file_path, _guard) = logging::setup_logging(&args).await?;
    info!("Logging to {}", log_file_path);

    if args.list_config {
        return commands::handle_list_config_command().await;
    }

    if is_config_command(&args) {
        return commands::handle_config_update_command(&args).await;
    }

    let config = Config::load().await?;
    info!("Using API at {}", config.api_base_url);

    if let Some(widget) = args.widget {
        commands::handle_widget_command(&args, &config, widget).await
    } else if args.leagues {
        commands::handle_leagues_command(&args, &config).await
    } else if args.all_leagues {
        commands::handle_all_standings_command(&args, &config).await
    } else if args.playoff {
        commands::handle_playoff_command(&args, &config).await
    } else {
        commands::handle_hub_command(&args, &config).await
    }
}
