// src/data_fetcher/api/hub_api.rs - Endpoint-level fetchers for the hub API

use reqwest::Client;
use serde_json::Value;
use tracing::{info, instrument, warn};

use super::fetch_utils::fetch;
use super::urls::{
    Widget, build_league_url, build_leagues_url, build_playoff_entries_url, build_teams_url,
    build_widget_url,
};
use crate::data_fetcher::models::{League, PlayoffEntry, Team};
use crate::data_fetcher::processors::{parse_leagues, parse_playoff_entries, parse_teams};
use crate::error::AppError;

/// Fetches every league tracked by the hub.
#[instrument(skip(client))]
pub async fn fetch_leagues(client: &Client, api_base_url: &str) -> Result<Vec<League>, AppError> {
    let payload: Value = fetch(client, &build_leagues_url(api_base_url)).await?;
    let leagues = parse_leagues(&payload)?;
    info!("Fetched {} leagues", leagues.len());
    Ok(leagues)
}

/// Fetches one league, mapping a 404 to [`AppError::ApiLeagueNotFound`].
#[instrument(skip(client))]
pub async fn fetch_league(
    client: &Client,
    api_base_url: &str,
    league_id: i64,
) -> Result<League, AppError> {
    match fetch::<League>(client, &build_league_url(api_base_url, league_id)).await {
        Ok(league) => Ok(league),
        Err(AppError::ApiNotFound { .. }) => {
            warn!("League {} does not exist", league_id);
            Err(AppError::api_league_not_found(league_id))
        }
        Err(e) => Err(e),
    }
}

/// Fetches the standings of one league in the server's tiebreak order.
///
/// The order is preserved as-is; ranking happens in
/// [`rank_standings`](crate::data_fetcher::processors::rank_standings).
#[instrument(skip(client))]
pub async fn fetch_teams(
    client: &Client,
    api_base_url: &str,
    league_id: i64,
) -> Result<Vec<Team>, AppError> {
    let payload: Value = fetch(client, &build_teams_url(api_base_url, league_id)).await?;
    let teams = parse_teams(&payload)?;
    info!("Fetched {} teams for league {}", teams.len(), league_id);
    Ok(teams)
}

/// Fetches every BIG Playoff entry for the current season.
///
/// An empty list is a valid answer and means the playoff has not started.
#[instrument(skip(client))]
pub async fn fetch_playoff_entries(
    client: &Client,
    api_base_url: &str,
) -> Result<Vec<PlayoffEntry>, AppError> {
    let payload: Value = fetch(client, &build_playoff_entries_url(api_base_url)).await?;
    let entries = parse_playoff_entries(&payload)?;
    info!("Fetched {} playoff entries", entries.len());
    Ok(entries)
}

/// Fetches a server-computed widget. The document is returned untouched.
#[instrument(skip(client))]
pub async fn fetch_widget(
    client: &Client,
    api_base_url: &str,
    widget: Widget,
) -> Result<Value, AppError> {
    fetch(client, &build_widget_url(api_base_url, widget)).await
}

/// Fetches the standings of several leagues concurrently.
///
/// Each league keeps its own result so one failing league does not hide the
/// others. Output order matches `league_ids`.
#[instrument(skip(client))]
pub async fn fetch_teams_for_leagues(
    client: &Client,
    api_base_url: &str,
    league_ids: &[i64],
) -> Vec<(i64, Result<Vec<Team>, AppError>)> {
    let futs = league_ids.iter().map(|&league_id| async move {
        (league_id, fetch_teams(client, api_base_url, league_id).await)
    });
    futures::future::join_all(futs).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::api::http_client::create_test_http_client;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use serial_test::serial;
    use crate::data_fetcher::cache::HTTP_RESPONSE_CACHE;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    #[serial(http_cache)]
    async fn test_fetch_league_not_found() {
        let server = MockServer::start().await;
        HTTP_RESPONSE_CACHE.write().await.clear();
        Mock::given(method("GET"))
            .and(path("/api/leagues/404/"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = create_test_http_client();
        let base = format!("{}/api", server.uri());
        let result = fetch_league(&client, &base, 404).await;
        assert!(matches!(
            result,
            Err(AppError::ApiLeagueNotFound { league_id: 404 })
        ));
    }

    #[tokio::test]
    #[serial(http_cache)]
    async fn test_fetch_teams_for_leagues_keeps_failures_separate() {
        let server = MockServer::start().await;
        HTTP_RESPONSE_CACHE.write().await.clear();
        Mock::given(method("GET"))
            .and(path("/api/teams/"))
            .and(query_param("league", "1"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([{"id": 1, "name": "Alpha"}])),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/teams/"))
            .and(query_param("league", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"oops": true})))
            .mount(&server)
            .await;

        let client = create_test_http_client();
        let base = format!("{}/api", server.uri());
        let results = fetch_teams_for_leagues(&client, &base, &[1, 2]).await;

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].0, 1);
        assert_eq!(results[0].1.as_ref().unwrap()[0].name, "Alpha");
        assert_eq!(results[1].0, 2);
        assert!(matches!(results[1].1, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    #[serial(http_cache)]
    async fn test_fetch_widget_returns_document_verbatim() {
        let server = MockServer::start().await;
        HTTP_RESPONSE_CACHE.write().await.clear();
        let body = json!({"week": 15, "winners": [{"league": "Main", "score": "151.20"}]});
        Mock::given(method("GET"))
            .and(path("/api/widget/weekly-winner/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
            .mount(&server)
            .await;

        let client = create_test_http_client();
        let base = format!("{}/api", server.uri());
        let value = fetch_widget(&client, &base, Widget::WeeklyWinner)
            .await
            .unwrap();
        assert_eq!(value, body);
    }
}
