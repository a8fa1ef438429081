//! Reference data adapters.
//!
//! - `CsvReferenceLoader` - loads the datasets from CSV files at startup
//! - `InMemoryReferenceStore` - serves the reader ports from the snapshot

mod csv_loader;
mod csv_records;
mod in_memory_store;

pub use csv_loader::{
    CsvReferenceLoader, MEMBERS_FILE, PARTICIPATION_FILE, STATUSES_FILE, SURVEYS_FILE,
};
pub use in_memory_store::InMemoryReferenceStore;
