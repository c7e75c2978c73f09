//! Registry search engine.
//!
//! [`match_records`] is a pure function over a record slice and a
//! [`FilterSpec`](fincheck_model::FilterSpec): it keeps load order, holds no
//! state between calls, and an empty spec returns every record.
//!
//! # Example
//!
//! ```ignore
//! use fincheck_filter::{match_records, SearchOutcome};
//! use fincheck_model::FilterSpec;
//!
//! let result = match_records(store.records(), &FilterSpec::query("dana"));
//! if result.outcome() == SearchOutcome::NotFound {
//!     println!("not in the registry");
//! }
//! ```

pub mod engine;
pub mod result;

pub use engine::{CompiledFilter, match_records, record_matches};
pub use result::{MatchResult, SearchOutcome};
