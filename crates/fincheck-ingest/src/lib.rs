//! Registry ingestion.
//!
//! Loads the published registry export (a JSON array of objects) into an
//! immutable [`RecordStore`], normalizing each registration date once.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use fincheck_ingest::{read_registry_file, SharedRegistry};
//!
//! let store = read_registry_file(Path::new("data.json"))?;
//! let registry = SharedRegistry::new(store);
//!
//! // Later, after the export is refreshed:
//! registry.replace(read_registry_file(Path::new("data.json"))?);
//! ```

mod error;
mod json;
mod state;
mod store;

// === Error Types ===
pub use error::{IngestError, Result};

// === Loading ===
pub use json::{load_registry_or_empty, raw_records, read_registry_file};

// === Store ===
pub use state::{LoadState, SharedRegistry};
pub use store::RecordStore;
