mod error;
mod stats;
mod store;
mod types;

pub use error::RecordError;
pub use stats::{AllStatistics, NO_DATE, RecentRecord, Statistics, VariantStatistics};
pub use store::{DEFAULT_RECENT_LIMIT, RecordStore, STORAGE_KEY};
pub use types::{LEADERBOARD_CAPACITY, Leaderboard, Outcome, RankingEntry, Record};
