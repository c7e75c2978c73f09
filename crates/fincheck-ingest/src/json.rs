//! Reading the registry JSON export.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde_json::Value;
use tracing::{debug, warn};

use fincheck_model::RawRecord;

use crate::error::{IngestError, Result};
use crate::store::RecordStore;

impl RecordStore {
    /// Load records from a JSON array of objects.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Ok(Self::load(raw_records(value)?))
    }

    /// Load records from a reader yielding a JSON array of objects.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let value: Value = serde_json::from_reader(reader)?;
        Ok(Self::load(raw_records(value)?))
    }
}

/// Split a parsed JSON document into raw registry entries.
pub fn raw_records(value: Value) -> Result<Vec<RawRecord>> {
    let entries = match value {
        Value::Array(entries) => entries,
        other => {
            return Err(IngestError::NotAnArray {
                found: json_kind(&other),
            });
        }
    };
    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| match entry {
            Value::Object(map) => Ok(map),
            other => Err(IngestError::NotAnObject {
                index,
                found: json_kind(&other),
            }),
        })
        .collect()
}

/// Read the registry export at `path`.
pub fn read_registry_file(path: &Path) -> Result<RecordStore> {
    debug!(path = %path.display(), "reading registry file");
    let file = File::open(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    RecordStore::from_json_reader(BufReader::new(file))
}

/// Read the registry export, falling back to an empty store on any failure.
pub fn load_registry_or_empty(path: &Path) -> RecordStore {
    match read_registry_file(path) {
        Ok(store) => store,
        Err(error) => {
            warn!(
                path = %path.display(),
                %error,
                "failed to load registry, continuing with no records"
            );
            RecordStore::empty()
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
