//! Integration tests for registry loading.

use std::io::Write;

use fincheck_ingest::{
    IngestError, LoadState, RecordStore, SharedRegistry, load_registry_or_empty,
    read_registry_file,
};
use fincheck_model::{FieldValue, Record, RegistryField};

const REGISTRY_JSON: &str = r#"[
  {
    "Nomor": 1,
    "Nama Perusahaan": "PT Satu Dana",
    "Nama Sistem Elektronik": "SatuPay",
    "Surat Tanda Berizin/Terdaftar": "KEP-01/D.05/2021",
    "Tanggal Berizin/Terdaftar": "23 Desember 2021",
    "Jenis Usaha": "Pinjaman Online",
    "Alamat Website": "https://satu.id"
  },
  {
    "Nomor": 2,
    "Nama Perusahaan": "PT Dua Modal",
    "Tanggal Berizin/Terdaftar": "bad date",
    "Catatan": "tanpa situs"
  },
  {
    "Nama Perusahaan": "PT Satu Dana",
    "Tanggal Berizin/Terdaftar": null
  }
]"#;

#[test]
fn load_assigns_ids_and_dates_in_order() {
    let store = RecordStore::from_json_str(REGISTRY_JSON).unwrap();
    assert_eq!(store.len(), 3);

    let ids: Vec<usize> = store.iter().map(Record::id).collect();
    assert_eq!(ids, vec![0, 1, 2]);

    assert_eq!(store.records()[0].normalized_date(), Some("2021-12-23"));
    assert_eq!(store.records()[1].normalized_date(), None);
    assert_eq!(store.records()[2].normalized_date(), None);
    assert_eq!(store.unparsed_date_count(), 2);
}

#[test]
fn load_keeps_duplicates_and_extra_fields() {
    let store = RecordStore::from_json_str(REGISTRY_JSON).unwrap();
    let first = store.get(0).unwrap();
    let third = store.get(2).unwrap();
    assert_eq!(
        first.field_text(RegistryField::Company),
        third.field_text(RegistryField::Company)
    );
    let second = store.get(1).unwrap();
    assert_eq!(
        second.get("Catatan").and_then(FieldValue::as_str),
        Some("tanpa situs")
    );
    assert!(second.field(RegistryField::Website).is_none());
}

#[test]
fn read_registry_file_loads_records() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(REGISTRY_JSON.as_bytes()).unwrap();

    let store = read_registry_file(file.path()).unwrap();
    assert_eq!(store.len(), 3);
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");

    let err = read_registry_file(&path).unwrap_err();
    assert!(matches!(err, IngestError::FileRead { .. }));
    assert!(load_registry_or_empty(&path).is_empty());
}

#[test]
fn malformed_file_falls_back_to_empty() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"[{\"Nama Perusahaan\": ").unwrap();

    assert!(matches!(
        read_registry_file(file.path()),
        Err(IngestError::Json(_))
    ));
    assert!(load_registry_or_empty(file.path()).is_empty());
}

#[test]
fn load_state_exposes_loaded_records() {
    let state = LoadState::from_result(RecordStore::from_json_str(REGISTRY_JSON));
    assert!(!state.is_loading());
    assert_eq!(state.total(), 3);
}

#[test]
fn replace_does_not_disturb_existing_snapshots() {
    let registry = SharedRegistry::new(RecordStore::from_json_str(REGISTRY_JSON).unwrap());
    let before = registry.snapshot();
    assert!(before.ptr_eq(&registry.snapshot()));

    let previous = registry.replace(RecordStore::from_json_str("[]").unwrap());

    assert!(previous.ptr_eq(&before));
    assert_eq!(before.len(), 3);
    assert!(registry.snapshot().is_empty());
}
