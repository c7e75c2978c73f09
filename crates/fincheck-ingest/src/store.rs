use std::sync::Arc;

use tracing::{debug, trace};

use fincheck_model::{RawRecord, Record};
use fincheck_normalization::normalize_registration_date;

/// Immutable collection of loaded registry records.
///
/// Cloning shares the underlying records. A reload builds a new store
/// instead of touching an existing one.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Arc<[Record]>,
}

impl RecordStore {
    /// Build records from raw export entries, in order.
    ///
    /// Each record gets its position as `id` and a normalized registration
    /// date. Entries are neither deduplicated nor validated.
    pub fn load(raw: Vec<RawRecord>) -> Self {
        let records: Vec<Record> = raw
            .into_iter()
            .enumerate()
            .map(|(id, entry)| {
                let normalized = normalize_registration_date(&entry);
                if normalized.is_none() {
                    trace!(id, "registration date not normalized");
                }
                Record::new(id, normalized, entry)
            })
            .collect();
        let store = Self {
            records: records.into(),
        };
        debug!(
            records = store.len(),
            unparsed_dates = store.unparsed_date_count(),
            "record store loaded"
        );
        store
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record with the given load-time id.
    pub fn get(&self, id: usize) -> Option<&Record> {
        self.records.get(id)
    }

    /// Number of records whose registration date could not be normalized.
    pub fn unparsed_date_count(&self) -> usize {
        self.records
            .iter()
            .filter(|record| record.normalized_date().is_none())
            .count()
    }

    /// True when both stores share the same record allocation.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.records, &other.records)
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
