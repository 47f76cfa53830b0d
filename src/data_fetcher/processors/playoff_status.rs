use crate::data_fetcher::models::PlayoffEntry;
use std::fmt;

/// Lifecycle state of one playoff entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayoffStatus {
    /// Entry in the most recent round, not eliminated.
    Active,
    /// Entry in a past round that was not eliminated.
    Advanced,
    /// Flagged out by the elimination run.
    Eliminated,
}

impl PlayoffStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PlayoffStatus::Active => "Active",
            PlayoffStatus::Advanced => "Advanced",
            PlayoffStatus::Eliminated => "Eliminated",
        }
    }
}

impl fmt::Display for PlayoffStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classifies a playoff entry against the set of weeks that have started.
///
/// Precedence:
/// 1. `is_eliminated` always wins and yields [`PlayoffStatus::Eliminated`].
/// 2. An entry in the latest week is [`PlayoffStatus::Active`].
/// 3. An entry in an earlier week is [`PlayoffStatus::Advanced`].
///
/// A missing elimination flag on a past-round loser therefore reads as
/// Advanced. Elimination is never inferred from scores; that belongs to the
/// elimination run on the server.
///
/// Returns `None` when `weeks` is empty, since there is no round to compare
/// against.
///
/// # Examples
///
/// ```rust
/// use big_playoff_hub::data_fetcher::models::PlayoffEntry;
/// use big_playoff_hub::data_fetcher::processors::{classify_status, PlayoffStatus};
///
/// let weeks = [15, 16];
/// let entry = PlayoffEntry::new(1, "A", 15);
/// assert_eq!(classify_status(&entry, &weeks), Some(PlayoffStatus::Advanced));
/// ```
pub fn classify_status(entry: &PlayoffEntry, weeks: &[u32]) -> Option<PlayoffStatus> {
    let latest = i64::from(*weeks.iter().max()?);

    let status = if entry.is_eliminated {
        PlayoffStatus::Eliminated
    } else if entry.playoff_week >= latest {
        PlayoffStatus::Active
    } else {
        PlayoffStatus::Advanced
    };

    tracing::trace!(
        "Entry {} ({}) week {} eliminated={} latest={} -> {:?}",
        entry.id,
        entry.team,
        entry.playoff_week,
        entry.is_eliminated,
        latest,
        status
    );

    Some(status)
}
