use serde::Serialize;

use fincheck_model::Record;

/// What a search means for the compliance check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SearchOutcome {
    /// No criteria were given; nothing was checked.
    NotSearched,
    /// At least one registry entry matched.
    Found { matches: usize },
    /// Criteria were given and nothing matched: the entity is not in the
    /// registry and should be treated as possibly unlicensed.
    NotFound,
}

impl SearchOutcome {
    pub fn is_not_found(&self) -> bool {
        matches!(self, SearchOutcome::NotFound)
    }
}

/// Records selected by one filtering pass, in load order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult<'a> {
    total: usize,
    criteria_active: bool,
    records: Vec<&'a Record>,
}

impl<'a> MatchResult<'a> {
    pub(crate) fn new(records: Vec<&'a Record>, total: usize, criteria_active: bool) -> Self {
        Self {
            total,
            criteria_active,
            records,
        }
    }

    pub fn records(&self) -> &[&'a Record] {
        &self.records
    }

    pub fn into_records(self) -> Vec<&'a Record> {
        self.records
    }

    /// Ids of the matched records.
    pub fn ids(&self) -> Vec<usize> {
        self.records.iter().map(|record| record.id()).collect()
    }

    /// Size of the collection that was searched.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn matched(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn criteria_active(&self) -> bool {
        self.criteria_active
    }

    pub fn outcome(&self) -> SearchOutcome {
        match (self.criteria_active, self.matched()) {
            (false, _) => SearchOutcome::NotSearched,
            (true, 0) => SearchOutcome::NotFound,
            (true, matches) => SearchOutcome::Found { matches },
        }
    }
}
