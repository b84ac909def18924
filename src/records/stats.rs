//! Statistics derived from leaderboards.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::variant::Variant;

use super::types::{Leaderboard, Record};

/// Placeholder shown for the date of an empty leaderboard.
pub const NO_DATE: &str = "-";

/// Round to one decimal place.
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Mean of `values` to one decimal, 0 when there are none.
pub fn average(values: impl IntoIterator<Item = u32>) -> f64 {
    let (sum, count) = values
        .into_iter()
        .fold((0u64, 0u64), |(sum, count), v| (sum + u64::from(v), count + 1));
    if count == 0 {
        return 0.0;
    }
    round_one_decimal(sum as f64 / count as f64)
}

/// Summary of one variant's leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_records: usize,
    pub best_record: u32,
    pub average_attempts: f64,
    /// Date of the worst-ranked surviving record, not the newest one.
    pub recent_record: String,
}

impl Default for Statistics {
    fn default() -> Self {
        Self {
            total_records: 0,
            best_record: 0,
            average_attempts: 0.0,
            recent_record: NO_DATE.to_string(),
        }
    }
}

impl Statistics {
    /// Compute statistics for one board. An empty board gives the default.
    pub fn from_leaderboard(board: &Leaderboard) -> Self {
        let Some(worst) = board.worst() else {
            return Self::default();
        };

        Self {
            total_records: board.len(),
            best_record: board.best().map_or(0, |r| r.attempts),
            average_attempts: average(board.records().iter().map(|r| r.attempts)),
            recent_record: worst.display_date(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariantStatistics {
    pub name: String,
    #[serde(flatten)]
    pub stats: Statistics,
}

/// Statistics pooled across every variant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllStatistics {
    pub total_games: usize,
    pub overall_average: f64,
    pub per_variant_stats: BTreeMap<Variant, VariantStatistics>,
}

/// A record tagged with the variant it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentRecord {
    pub variant: Variant,
    pub variant_name: String,
    #[serde(flatten)]
    pub record: Record,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn board(entries: &[(u32, (i32, u32, u32))]) -> Leaderboard {
        let records = entries
            .iter()
            .enumerate()
            .map(|(i, &(attempts, (y, m, d)))| Record {
                attempts,
                date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
                created_at: i as i64,
            })
            .collect();
        Leaderboard::from_records(records).0
    }

    #[test]
    fn test_round_one_decimal() {
        assert_eq!(round_one_decimal(5.25), 5.3);
        assert_eq!(round_one_decimal(4.04), 4.0);
        assert_eq!(round_one_decimal(7.0), 7.0);
    }

    #[test]
    fn test_average_empty_is_zero() {
        assert_eq!(average(std::iter::empty()), 0.0);
    }

    #[test]
    fn test_empty_statistics() {
        let stats = Statistics::from_leaderboard(&Leaderboard::new());
        assert_eq!(
            stats,
            Statistics {
                total_records: 0,
                best_record: 0,
                average_attempts: 0.0,
                recent_record: "-".to_string(),
            }
        );
    }

    #[test]
    fn test_statistics_uses_worst_ranked_date() {
        let b = board(&[
            (9, (2026, 1, 5)),
            (3, (2026, 2, 1)),
            (4, (2026, 9, 30)),
        ]);
        let stats = Statistics::from_leaderboard(&b);

        assert_eq!(stats.total_records, 3);
        assert_eq!(stats.best_record, 3);
        assert_eq!(stats.average_attempts, 5.3);
        // The 9-attempt game is last in rank order even though it is oldest.
        assert_eq!(stats.recent_record, "2026.01.05");
    }

    #[test]
    fn test_statistics_serialize_camel_case() {
        let json = serde_json::to_value(Statistics::default()).unwrap();
        assert_eq!(json["totalRecords"], 0);
        assert_eq!(json["recentRecord"], "-");
    }
}
