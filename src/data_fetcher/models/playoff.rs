use super::common::deserialize_decimal;
use serde::{Deserialize, Serialize};

/// One team's recorded score for one BIG Playoff week.
///
/// `playoff_week` is kept signed so that bad source data survives
/// deserialization and is rejected by the grouping step instead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayoffEntry {
    pub id: i64,
    /// Display name of the team (the API sends `"Team Name (owner)"`).
    pub team: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<i32>,
    pub playoff_week: i64,
    #[serde(default, deserialize_with = "deserialize_decimal")]
    pub week_score: f64,
    /// Set by the external elimination run, never inferred here.
    #[serde(default)]
    pub is_eliminated: bool,
    #[serde(default)]
    pub final_rank: Option<u32>,
}

impl PlayoffEntry {
    pub fn new(id: i64, team: impl Into<String>, playoff_week: i64) -> Self {
        Self {
            id,
            team: team.into(),
            season: None,
            playoff_week,
            week_score: 0.0,
            is_eliminated: false,
            final_rank: None,
        }
    }

    pub fn with_score(mut self, week_score: f64) -> Self {
        self.week_score = week_score;
        self
    }

    pub fn eliminated(mut self) -> Self {
        self.is_eliminated = true;
        self
    }

    pub fn with_final_rank(mut self, final_rank: u32) -> Self {
        self.final_rank = Some(final_rank);
        self
    }
}
