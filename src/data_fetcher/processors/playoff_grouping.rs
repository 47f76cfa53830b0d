use crate::data_fetcher::models::PlayoffEntry;
use crate::error::AppError;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Playoff entries partitioned by week.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayoffGroups {
    /// Distinct weeks present, ascending.
    pub weeks: Vec<u32>,
    /// Entries per week in source order.
    pub by_week: BTreeMap<u32, Vec<PlayoffEntry>>,
}

impl PlayoffGroups {
    /// No entries at all: the playoff has not started. Not an error.
    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    /// The most recent week, which is the default view.
    pub fn latest_week(&self) -> Option<u32> {
        self.weeks.last().copied()
    }

    pub fn entries_for(&self, week: u32) -> &[PlayoffEntry] {
        self.by_week.get(&week).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn total_entries(&self) -> usize {
        self.by_week.values().map(Vec::len).sum()
    }
}

/// Partitions a flat list of playoff entries into per-week cohorts.
///
/// Entries keep their input order inside a week; the service already sorted
/// them by final rank or score. Duplicate `(team, week)` pairs are kept as
/// separate rows.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any entry has a week number below 1.
/// Validation runs before grouping, so no partial result is produced.
pub fn group_playoff_entries(entries: Vec<PlayoffEntry>) -> Result<PlayoffGroups, AppError> {
    if let Some(bad) = entries.iter().find(|e| e.playoff_week < 1) {
        return Err(AppError::validation(format!(
            "playoff entry {} ({}) has invalid playoff_week {}",
            bad.id, bad.team, bad.playoff_week
        )));
    }

    let mut by_week: BTreeMap<u32, Vec<PlayoffEntry>> = BTreeMap::new();
    for entry in entries {
        let week = u32::try_from(entry.playoff_week).map_err(|_| {
            AppError::validation(format!(
                "playoff_week {} is out of range",
                entry.playoff_week
            ))
        })?;
        by_week.entry(week).or_default().push(entry);
    }

    // BTreeMap keys are already sorted and distinct
    let weeks: Vec<u32> = by_week.keys().copied().collect();

    if weeks.is_empty() {
        info!("No playoff entries yet, playoff has not started");
    } else {
        debug!(
            "Grouped playoff entries into weeks {:?} ({} entries)",
            weeks,
            by_week.values().map(Vec::len).sum::<usize>()
        );
    }

    Ok(PlayoffGroups { weeks, by_week })
}
