//! Load lifecycle and snapshot sharing for the record store.

use std::sync::{PoisonError, RwLock};

use tracing::{info, warn};

use fincheck_model::Record;

use crate::error::Result;
use crate::store::RecordStore;

/// Where the registry load currently stands.
#[derive(Debug, Clone, Default)]
pub enum LoadState {
    /// The export is still being read.
    #[default]
    Loading,
    /// The export was read; the store may be empty.
    Loaded(RecordStore),
    /// The export could not be read. Treated as zero records.
    Failed,
}

impl LoadState {
    /// Settle a load attempt. Failures are logged, not propagated.
    pub fn from_result(result: Result<RecordStore>) -> Self {
        match result {
            Ok(store) => {
                info!(records = store.len(), "registry loaded");
                LoadState::Loaded(store)
            }
            Err(error) => {
                warn!(%error, "registry load failed");
                LoadState::Failed
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    /// Records available in this state; empty unless loaded.
    pub fn records(&self) -> &[Record] {
        match self {
            LoadState::Loaded(store) => store.records(),
            LoadState::Loading | LoadState::Failed => &[],
        }
    }

    pub fn total(&self) -> usize {
        self.records().len()
    }
}

/// The current record store, replaceable as a whole.
///
/// Readers take a [`RecordStore`] snapshot and keep it for the duration of a
/// search; [`SharedRegistry::replace`] never alters a snapshot already handed
/// out.
#[derive(Debug, Default)]
pub struct SharedRegistry {
    current: RwLock<RecordStore>,
}

impl SharedRegistry {
    pub fn new(store: RecordStore) -> Self {
        Self {
            current: RwLock::new(store),
        }
    }

    pub fn snapshot(&self) -> RecordStore {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Swap in a freshly loaded store, returning the previous one.
    pub fn replace(&self, store: RecordStore) -> RecordStore {
        let mut current = self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *current, store)
    }
}
