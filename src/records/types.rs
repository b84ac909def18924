//! Leaderboard data structures.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Number of records kept per variant.
pub const LEADERBOARD_CAPACITY: usize = 10;

/// Display format for record dates.
pub const DISPLAY_DATE_FORMAT: &str = "%Y.%m.%d";

/// One qualifying game result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub attempts: u32,
    pub date: NaiveDate,
    /// Milliseconds since the Unix epoch, strictly increasing per process.
    /// Blobs without it load as 0 and rank as oldest.
    #[serde(rename = "timestamp", default)]
    pub created_at: i64,
}

impl Record {
    /// Returns the date as shown to players, e.g. `2026.03.14`.
    pub fn display_date(&self) -> String {
        self.date.format(DISPLAY_DATE_FORMAT).to_string()
    }

    /// Year-month bucket, e.g. `2026.10`.
    pub fn year_month(&self) -> String {
        self.date.format("%Y.%m").to_string()
    }
}

/// A leaderboard row as shown to players.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankingEntry {
    pub rank: usize,
    pub attempts: u32,
    pub date: String,
}

/// Result of submitting a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    NewRecord { rank: usize },
    NotQualified,
}

impl Outcome {
    /// Returns true if the result made the leaderboard.
    pub fn is_new_record(&self) -> bool {
        matches!(self, Outcome::NewRecord { .. })
    }

    /// Returns the 1-based rank of a new record.
    pub fn rank(&self) -> Option<usize> {
        match self {
            Outcome::NewRecord { rank } => Some(*rank),
            Outcome::NotQualified => None,
        }
    }
}

/// Best-first records for one variant.
///
/// Sorted non-decreasing by attempts; equal attempts keep insertion order.
/// Never longer than [`LEADERBOARD_CAPACITY`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Leaderboard {
    records: Vec<Record>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from arbitrary records, restoring the ordering and size limits.
    /// Returns the leaderboard and how many records were dropped.
    pub fn from_records(mut records: Vec<Record>) -> (Self, usize) {
        let before = records.len();
        records.retain(|r| r.attempts > 0);
        // sort_by_key is stable, so ties keep their stored order.
        records.sort_by_key(|r| r.attempts);
        records.truncate(LEADERBOARD_CAPACITY);
        let dropped = before - records.len();
        (Self { records }, dropped)
    }

    /// Returns the records, best first.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Returns the number of records held, at most [`LEADERBOARD_CAPACITY`].
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the top-ranked record.
    pub fn best(&self) -> Option<&Record> {
        self.records.first()
    }

    /// The worst-ranked surviving record.
    pub fn worst(&self) -> Option<&Record> {
        self.records.last()
    }

    /// True when the board has room, or `attempts` strictly beats the
    /// current 10th place.
    pub fn qualifies(&self, attempts: u32) -> bool {
        match self.records.get(LEADERBOARD_CAPACITY - 1) {
            Some(tenth) => attempts < tenth.attempts,
            None => true,
        }
    }

    /// Insert a record that has already qualified and return its 1-based
    /// rank. The record goes after every existing record with the same or
    /// fewer attempts, which is where a stable sort would put it.
    pub(crate) fn insert(&mut self, record: Record) -> usize {
        let index = self
            .records
            .partition_point(|r| r.attempts <= record.attempts);
        self.records.insert(index, record);
        self.records.truncate(LEADERBOARD_CAPACITY);
        index + 1
    }

    /// Returns the board as 1-based ranking rows.
    pub fn ranking(&self) -> Vec<RankingEntry> {
        self.records
            .iter()
            .enumerate()
            .map(|(index, record)| RankingEntry {
                rank: index + 1,
                attempts: record.attempts,
                date: record.display_date(),
            })
            .collect()
    }

    /// Returns the newest insertion timestamp on this board.
    pub fn max_timestamp(&self) -> Option<i64> {
        self.records.iter().map(|r| r.created_at).max()
    }
}
