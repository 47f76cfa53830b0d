//! Shape checks for raw API payloads.
//!
//! Payloads arrive as untyped JSON. These functions turn them into typed
//! records or fail with [`AppError::Validation`] as a whole: a list with one
//! malformed record yields no records at all.

use crate::data_fetcher::models::{League, PlayoffEntry, Team};
use crate::error::AppError;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use super::standings::{RankedTeam, rank_standings};

fn parse_records<T: DeserializeOwned>(payload: &Value, kind: &str) -> Result<Vec<T>, AppError> {
    let items = payload.as_array().ok_or_else(|| {
        AppError::validation(format!(
            "expected an ordered list of {kind} records, got {}",
            json_type_name(payload)
        ))
    })?;

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            if !item.is_object() {
                return Err(AppError::validation(format!(
                    "{kind} record #{index} is {}, expected an object",
                    json_type_name(item)
                )));
            }
            serde_json::from_value(item.clone()).map_err(|e| {
                warn!("Rejecting {} record #{}: {}", kind, index, e);
                AppError::validation(format!("{kind} record #{index} is malformed: {e}"))
            })
        })
        .collect()
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

pub fn parse_teams(payload: &Value) -> Result<Vec<Team>, AppError> {
    parse_records(payload, "team")
}

pub fn parse_leagues(payload: &Value) -> Result<Vec<League>, AppError> {
    parse_records(payload, "league")
}

/// Parses playoff entries, rejecting week numbers that are not integers.
pub fn parse_playoff_entries(payload: &Value) -> Result<Vec<PlayoffEntry>, AppError> {
    if let Some(items) = payload.as_array() {
        for (index, item) in items.iter().enumerate() {
            if let Some(week) = item.get("playoff_week")
                && week.as_i64().is_none()
            {
                return Err(AppError::validation(format!(
                    "playoff entry #{index} has non-integer playoff_week {week}"
                )));
            }
        }
    }
    parse_records(payload, "playoff entry")
}

/// Validates a raw standings payload and ranks it in one step.
pub fn rank_standings_payload(payload: &Value) -> Result<Vec<RankedTeam>, AppError> {
    Ok(rank_standings(parse_teams(payload)?))
}
