//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the query handlers to the outside world:
//! - `reference` - CSV loading and the in-memory reader store
//! - `http` - REST endpoints over the query handlers

pub mod http;
pub mod reference;

pub use reference::{CsvReferenceLoader, InMemoryReferenceStore};
