pub mod args;
pub mod logging;
pub mod records;
pub mod storage;
pub mod variant;

pub use records::{Outcome, RecordError, RecordStore};
pub use storage::{FilePersistence, MemoryPersistence, PersistenceProvider, StorageError};
pub use variant::Variant;
