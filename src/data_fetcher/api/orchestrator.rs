// src/data_fetcher/api/orchestrator.rs - Concurrent loading of everything the hub page shows

use reqwest::Client;
use tracing::{info, instrument, warn};

use super::hub_api::{fetch_leagues, fetch_playoff_entries, fetch_teams};
use super::urls::build_leagues_url;
use crate::data_fetcher::models::League;
use crate::data_fetcher::processors::{
    PlayoffGroups, RankedTeam, group_playoff_entries, rank_standings,
};
use crate::error::AppError;

/// Everything the hub page renders, one independent result per section.
///
/// A failing section carries its own error; the others are still usable.
#[derive(Debug)]
pub struct HubSnapshot {
    pub leagues: Result<Vec<League>, AppError>,
    /// League the standings belong to. `None` when no league could be chosen.
    pub league_id: Option<i64>,
    pub standings: Result<Vec<RankedTeam>, AppError>,
    pub playoff: Result<PlayoffGroups, AppError>,
}

impl HubSnapshot {
    /// The selected league's record, if the league list loaded and contains it.
    pub fn selected_league(&self) -> Option<&League> {
        let id = self.league_id?;
        self.leagues.as_ref().ok()?.iter().find(|l| l.id == id)
    }
}

async fn load_standings(
    client: &Client,
    api_base_url: &str,
    league_id: i64,
) -> Result<Vec<RankedTeam>, AppError> {
    Ok(rank_standings(
        fetch_teams(client, api_base_url, league_id).await?,
    ))
}

async fn load_playoff(client: &Client, api_base_url: &str) -> Result<PlayoffGroups, AppError> {
    group_playoff_entries(fetch_playoff_entries(client, api_base_url).await?)
}

/// Loads the league list, one league's standings and the playoff groups.
///
/// With an explicit `league_id` all three requests run concurrently. Without
/// one, standings follow the first league in the list, so that request waits
/// for the league list while the playoff request still runs alongside it.
///
/// # Example
/// ```rust,no_run
/// use big_playoff_hub::config::Session;
/// use big_playoff_hub::data_fetcher::api::{create_http_client, fetch_hub_snapshot};
///
/// #[tokio::main]
/// async fn main() -> Result<(), big_playoff_hub::AppError> {
///     let client = create_http_client(30, &Session::anonymous())?;
///     let snapshot = fetch_hub_snapshot(&client, "https://hub.example.com/api", None).await;
///     if let Ok(groups) = &snapshot.playoff {
///         println!("{} playoff weeks", groups.weeks.len());
///     }
///     Ok(())
/// }
/// ```
#[instrument(skip(client))]
pub async fn fetch_hub_snapshot(
    client: &Client,
    api_base_url: &str,
    league_id: Option<i64>,
) -> HubSnapshot {
    info!("Loading hub snapshot");

    let snapshot = match league_id {
        Some(id) => {
            let (leagues, standings, playoff) = tokio::join!(
                fetch_leagues(client, api_base_url),
                load_standings(client, api_base_url, id),
                load_playoff(client, api_base_url),
            );
            HubSnapshot {
                leagues,
                league_id: Some(id),
                standings,
                playoff,
            }
        }
        None => {
            let leagues_then_standings = async {
                let leagues = fetch_leagues(client, api_base_url).await;
                let first = leagues
                    .as_ref()
                    .ok()
                    .and_then(|list| list.first())
                    .map(|l| l.id);
                let standings = match first {
                    Some(id) => load_standings(client, api_base_url, id).await,
                    None => {
                        let leagues_url = build_leagues_url(api_base_url);
                        Err(match &leagues {
                            Ok(_) => AppError::api_no_data(
                                "no leagues are configured on the hub",
                                leagues_url,
                            ),
                            Err(e) => AppError::api_no_data(
                                format!("standings unavailable because the league list failed: {e}"),
                                leagues_url,
                            ),
                        })
                    }
                };
                (leagues, first, standings)
            };
            let ((leagues, first, standings), playoff) =
                tokio::join!(leagues_then_standings, load_playoff(client, api_base_url));
            HubSnapshot {
                leagues,
                league_id: first,
                standings,
                playoff,
            }
        }
    };

    for (section, failed) in [
        ("leagues", snapshot.leagues.is_err()),
        ("standings", snapshot.standings.is_err()),
        ("playoff", snapshot.playoff.is_err()),
    ] {
        if failed {
            warn!("Hub section '{}' failed to load", section);
        }
    }

    snapshot
}
