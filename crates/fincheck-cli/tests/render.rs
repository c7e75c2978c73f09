//! Rendering of search outcomes and result tables.

use fincheck_cli::columns::ColumnSelection;
use fincheck_cli::render::{
    SearchReport, display_number, outcome_message, result_rows, results_table,
};
use fincheck_filter::match_records;
use fincheck_ingest::RecordStore;
use fincheck_model::{FilterSpec, RegistryField};
use insta::assert_snapshot;

fn registry() -> RecordStore {
    RecordStore::from_json_str(
        r#"[
            {
                "Nomor": 7,
                "Nama Perusahaan": "PT Dana Kilat",
                "Nama Sistem Elektronik": "DanaKilat",
                "Surat Tanda Berizin/Terdaftar": "KEP-12/D.05/2021",
                "Tanggal Berizin/Terdaftar": "23 Desember 2021",
                "Jenis Usaha": "Pinjaman Online",
                "Alamat Website": "www.danakilat.id"
            },
            {
                "Nama Perusahaan": "PT Modal Rakyat",
                "Nama Sistem Elektronik": "ModalRakyat",
                "Surat Tanda Berizin/Terdaftar": "S-88/NB.213/2020",
                "Tanggal Berizin/Terdaftar": "5 Januari 2020",
                "Jenis Usaha": "Pinjaman Online",
                "Alamat Website": null
            }
        ]"#,
    )
    .expect("fixture parses")
}

#[test]
fn test_outcome_messages() {
    let store = registry();

    let idle = match_records(store.records(), &FilterSpec::new());
    assert_snapshot!(
        outcome_message(&idle),
        @"Registry holds 2 record(s). Give a search term to check a provider."
    );

    let found = match_records(store.records(), &FilterSpec::query("pinjaman"));
    assert_snapshot!(outcome_message(&found), @"Found 2 result(s)");

    let missing = match_records(store.records(), &FilterSpec::query("pinjol ilegal"));
    assert_snapshot!(
        outcome_message(&missing),
        @"Not found — possibly ILLEGAL / UNLISTED fintech provider"
    );
}

#[test]
fn test_number_column_falls_back_to_position() {
    let store = registry();
    let records = store.records();
    assert_eq!(display_number(&records[0], 0), "7");
    assert_eq!(display_number(&records[1], 1), "2");
    assert_eq!(display_number(&records[1], 0), "1");
}

#[test]
fn test_rows_follow_selected_columns() {
    let store = registry();
    let result = match_records(store.records(), &FilterSpec::query("modal"));
    let columns = ColumnSelection::from_fields(&[
        RegistryField::Website,
        RegistryField::Number,
        RegistryField::Company,
    ]);
    assert_eq!(
        result_rows(result.records(), &columns),
        vec![vec![
            "1".to_string(),
            "PT Modal Rakyat".to_string(),
            "-".to_string(),
        ]]
    );
}

#[test]
fn test_results_table_shows_raw_date_and_headers() {
    let store = registry();
    let result = match_records(store.records(), &FilterSpec::query("kilat"));
    let columns =
        ColumnSelection::from_fields(&[RegistryField::Company, RegistryField::RegistrationDate]);
    let mut table = results_table(result.records(), &columns);
    table.force_no_tty();
    let rendered = table.to_string();
    assert!(rendered.contains("Tanggal Terdaftar"));
    assert!(rendered.contains("23 Desember 2021"));
    assert!(rendered.contains("PT Dana Kilat"));
    assert!(!rendered.contains("PT Modal Rakyat"));
    assert!(!rendered.contains("Alamat Website"));
}

#[test]
fn test_json_report_carries_outcome_and_records() {
    let store = registry();
    let result = match_records(store.records(), &FilterSpec::query("rakyat"));
    let json = serde_json::to_value(SearchReport::new(&result)).expect("serialize");
    assert_eq!(json["outcome"]["status"], "found");
    assert_eq!(json["outcome"]["matches"], 1);
    assert_eq!(json["total"], 2);
    assert_eq!(json["criteria_active"], true);
    assert_eq!(json["records"][0]["__id"], 1);
    assert_eq!(json["records"][0]["__isoDate"], "2020-01-05");
    assert_eq!(json["records"][0]["Nama Perusahaan"], "PT Modal Rakyat");
}

#[test]
fn test_json_report_for_not_found() {
    let store = registry();
    let result = match_records(
        store.records(),
        &FilterSpec::new().with_website("danakilat.com"),
    );
    let json = serde_json::to_value(SearchReport::new(&result)).expect("serialize");
    assert_eq!(json["outcome"], serde_json::json!({"status": "not_found"}));
    assert_eq!(json["records"], serde_json::json!([]));
}
