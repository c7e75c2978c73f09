//! Shared types for the fintech registry checker.
//!
//! Registry entries are loaded from the published JSON export into
//! [`Record`]s; a [`FilterSpec`] describes one search over them.

pub mod error;
pub mod field;
pub mod filter;
pub mod record;

pub use error::{ModelError, Result};
pub use field::{FieldValue, RegistryField};
pub use filter::{FREE_TEXT_FIELDS, FilterSpec};
pub use record::{ID_KEY, ISO_DATE_KEY, RawRecord, Record};
