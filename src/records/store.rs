//! The record store: per-variant leaderboards plus the statistics derived
//! from them, persisted as a single blob after every change.

use std::collections::BTreeMap;

use chrono::{Local, Utc};
use tracing::{debug, info, warn};

use crate::storage::{PersistenceProvider, StorageError};
use crate::variant::Variant;

use super::error::RecordError;
use super::stats::{AllStatistics, RecentRecord, Statistics, VariantStatistics, average};
use super::types::{Leaderboard, Outcome, RankingEntry, Record};

/// Storage key the whole store is written under.
pub const STORAGE_KEY: &str = "baseballRecordsMultiMode";

/// Default number of entries returned by [`RecordStore::recent_records`].
pub const DEFAULT_RECENT_LIMIT: usize = 10;

/// Owns every leaderboard and the provider they are saved through.
pub struct RecordStore<P: PersistenceProvider> {
    provider: P,
    boards: BTreeMap<Variant, Leaderboard>,
    last_timestamp: i64,
}

impl<P: PersistenceProvider> RecordStore<P> {
    /// Load the store from `provider`. A missing or unreadable blob yields an
    /// empty store; it never fails.
    pub fn load(provider: P) -> Self {
        let mut boards = match provider.read(STORAGE_KEY) {
            Ok(Some(blob)) => parse_boards(&blob),
            Ok(None) => {
                debug!("No saved records found, starting empty");
                BTreeMap::new()
            }
            Err(e) => {
                warn!("Failed to read saved records, starting empty: {}", e);
                BTreeMap::new()
            }
        };

        for variant in Variant::KNOWN {
            boards.entry(variant).or_default();
        }

        let last_timestamp = boards
            .values()
            .filter_map(Leaderboard::max_timestamp)
            .max()
            .unwrap_or(0);

        Self {
            provider,
            boards,
            last_timestamp,
        }
    }

    /// Write the full store, replacing whatever was persisted before.
    pub fn save(&self) -> Result<(), RecordError> {
        let blob = serde_json::to_string(&self.boards).map_err(StorageError::from)?;
        self.provider.write(STORAGE_KEY, &blob)?;
        debug!("Saved records for {} variants", self.boards.len());
        Ok(())
    }

    /// Record a finished game.
    ///
    /// The result becomes a new record when the variant's board has fewer
    /// than ten entries or `attempts` strictly beats the current 10th place.
    /// A non-qualifying result changes nothing and writes nothing.
    pub fn submit_result(&mut self, variant: Variant, attempts: u32) -> Result<Outcome, RecordError> {
        if attempts == 0 {
            return Err(RecordError::InvalidAttempts(attempts));
        }

        let board = self.boards.entry(variant.clone()).or_default();
        if !board.qualifies(attempts) {
            debug!("{} attempts on {} did not qualify", attempts, variant);
            return Ok(Outcome::NotQualified);
        }

        let created_at = next_timestamp(&mut self.last_timestamp)
            .ok_or(RecordError::TimestampExhausted(self.last_timestamp))?;
        let record = Record {
            attempts,
            date: Local::now().date_naive(),
            created_at,
        };
        let rank = board.insert(record);
        info!("New record on {}: {} attempts, rank {}", variant, attempts, rank);

        if let Err(e) = self.save() {
            let source = match e {
                RecordError::Storage(source) => source,
                other => return Err(other),
            };
            warn!("New record on {} was not saved: {}", variant, source);
            return Err(RecordError::Unsaved {
                variant,
                rank,
                source,
            });
        }

        Ok(Outcome::NewRecord { rank })
    }

    /// Raw records for `variant`, best first.
    pub fn records(&self, variant: &Variant) -> &[Record] {
        self.boards
            .get(variant)
            .map(Leaderboard::records)
            .unwrap_or(&[])
    }

    /// Variants currently held, known ones first.
    pub fn variants(&self) -> impl Iterator<Item = &Variant> {
        self.boards.keys()
    }

    /// Returns the ranked rows for `variant`, empty when it has no records.
    pub fn leaderboard(&self, variant: &Variant) -> Vec<RankingEntry> {
        self.boards
            .get(variant)
            .map(Leaderboard::ranking)
            .unwrap_or_default()
    }

    /// Returns the summary for `variant`; an empty board reports zeros and `-`.
    pub fn statistics(&self, variant: &Variant) -> Statistics {
        self.boards
            .get(variant)
            .map(Statistics::from_leaderboard)
            .unwrap_or_default()
    }

    /// Returns totals pooled across every variant plus each variant's summary.
    pub fn all_statistics(&self) -> AllStatistics {
        let per_variant_stats = self
            .boards
            .iter()
            .map(|(variant, board)| {
                let entry = VariantStatistics {
                    name: variant.label().to_string(),
                    stats: Statistics::from_leaderboard(board),
                };
                (variant.clone(), entry)
            })
            .collect();

        AllStatistics {
            total_games: self.boards.values().map(Leaderboard::len).sum(),
            overall_average: average(self.all_records().map(|(_, r)| r.attempts)),
            per_variant_stats,
        }
    }

    /// Up to `limit` records across all variants, newest first.
    pub fn recent_records(&self, limit: usize) -> Vec<RecentRecord> {
        let mut pooled: Vec<RecentRecord> = self
            .all_records()
            .map(|(variant, record)| RecentRecord {
                variant: variant.clone(),
                variant_name: variant.label().to_string(),
                record: record.clone(),
            })
            .collect();

        pooled.sort_by(|a, b| b.record.created_at.cmp(&a.record.created_at));
        pooled.truncate(limit);
        pooled
    }

    /// Record counts per `YYYY.MM` month across all variants.
    pub fn monthly_stats(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for (_, record) in self.all_records() {
            *counts.entry(record.year_month()).or_insert(0) += 1;
        }
        counts
    }

    /// Returns the provider the store saves through.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    fn all_records(&self) -> impl Iterator<Item = (&Variant, &Record)> {
        self.boards
            .iter()
            .flat_map(|(variant, board)| board.records().iter().map(move |r| (variant, r)))
    }
}

/// Wall-clock milliseconds, bumped past `last` when the clock has not moved.
/// `None` once `last` is already `i64::MAX`; `last` is left untouched then.
fn next_timestamp(last: &mut i64) -> Option<i64> {
    let now = Utc::now().timestamp_millis();
    let next = if now > *last { now } else { last.checked_add(1)? };
    *last = next;
    Some(next)
}

fn parse_boards(blob: &str) -> BTreeMap<Variant, Leaderboard> {
    let raw: BTreeMap<Variant, Vec<Record>> = match serde_json::from_str(blob) {
        Ok(raw) => raw,
        Err(e) => {
            warn!("Saved records are corrupt, starting empty: {}", e);
            return BTreeMap::new();
        }
    };

    raw.into_iter()
        .map(|(variant, records)| {
            let (board, dropped) = Leaderboard::from_records(records);
            if dropped > 0 {
                warn!("Dropped {} invalid or excess records from {}", dropped, variant);
            }
            (variant, board)
        })
        .collect()
}
