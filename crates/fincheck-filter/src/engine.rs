//! Record matching.
//!
//! A record is found when it satisfies every active criterion of a
//! [`FilterSpec`]: the free-text query, each per-field filter, and the
//! registration date range. Inactive criteria match everything.

use chrono::NaiveDate;
use tracing::debug;

use fincheck_model::{FREE_TEXT_FIELDS, FilterSpec, Record, RegistryField};
use fincheck_normalization::to_calendar_date;

use crate::result::MatchResult;

/// A [`FilterSpec`] with its search terms lowercased once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompiledFilter {
    query: Option<String>,
    field_terms: Vec<(RegistryField, String)>,
    date_from: Option<NaiveDate>,
    date_to: Option<NaiveDate>,
}

impl CompiledFilter {
    pub fn new(spec: &FilterSpec) -> Self {
        let query = (!spec.query.is_empty()).then(|| spec.query.to_lowercase());
        let field_terms = spec
            .field_filters()
            .into_iter()
            .filter(|(_, term)| !term.is_empty())
            .map(|(field, term)| (field, term.to_lowercase()))
            .collect();
        Self {
            query,
            field_terms,
            date_from: spec.date_from,
            date_to: spec.date_to,
        }
    }

    /// True when no criterion is active.
    pub fn is_unconstrained(&self) -> bool {
        self.query.is_none()
            && self.field_terms.is_empty()
            && self.date_from.is_none()
            && self.date_to.is_none()
    }

    pub fn matches(&self, record: &Record) -> bool {
        self.matches_query(record) && self.matches_fields(record) && self.matches_dates(record)
    }

    fn matches_query(&self, record: &Record) -> bool {
        let Some(query) = &self.query else {
            return true;
        };
        FREE_TEXT_FIELDS
            .iter()
            .any(|field| field_contains(record, *field, query))
    }

    fn matches_fields(&self, record: &Record) -> bool {
        self.field_terms
            .iter()
            .all(|(field, term)| field_contains(record, *field, term))
    }

    /// Closed interval on whole days. Records without a real calendar date
    /// never satisfy a range.
    fn matches_dates(&self, record: &Record) -> bool {
        if self.date_from.is_none() && self.date_to.is_none() {
            return true;
        }
        let Some(date) = record.normalized_date().and_then(to_calendar_date) else {
            return false;
        };
        self.date_from.is_none_or(|from| date >= from) && self.date_to.is_none_or(|to| date <= to)
    }
}

/// Case-insensitive substring test against a record field.
///
/// `term` must already be lowercase. Missing and null fields never match.
fn field_contains(record: &Record, field: RegistryField, term: &str) -> bool {
    record
        .field_text(field)
        .is_some_and(|text| text.to_lowercase().contains(term))
}

/// Select the records satisfying `spec`, keeping their input order.
pub fn match_records<'a>(records: &'a [Record], spec: &FilterSpec) -> MatchResult<'a> {
    let filter = CompiledFilter::new(spec);
    let matched: Vec<&Record> = if filter.is_unconstrained() {
        records.iter().collect()
    } else {
        records.iter().filter(|record| filter.matches(record)).collect()
    };
    let result = MatchResult::new(matched, records.len(), spec.is_active());
    debug!(
        total = result.total(),
        matched = result.matched(),
        criteria_active = result.criteria_active(),
        "filter applied"
    );
    result
}

/// Check a single record against `spec`.
pub fn record_matches(record: &Record, spec: &FilterSpec) -> bool {
    CompiledFilter::new(spec).matches(record)
}
