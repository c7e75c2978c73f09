use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use fincheck_cli::columns::ColumnSelection;
use fincheck_cli::logging::redact_value;
use fincheck_cli::render::{
    NOT_FOUND_TIP, SearchReport, outcome_message, results_table, summary_table,
};
use fincheck_filter::{SearchOutcome, match_records};
use fincheck_ingest::{RecordStore, load_registry_or_empty, read_registry_file};
use fincheck_normalization::parse_indonesian_date;

use crate::cli::{DataArgs, NormalizeDateArgs, OutputArg, SearchArgs};

fn load_store(path: &Path, lenient: bool) -> Result<RecordStore> {
    if lenient {
        return Ok(load_registry_or_empty(path));
    }
    read_registry_file(path).with_context(|| format!("load registry {}", path.display()))
}

pub fn run_search(args: &SearchArgs) -> Result<SearchOutcome> {
    let spec = args.filter_spec();
    let span = info_span!("search", query = %redact_value(&spec.query));
    let _guard = span.enter();
    let store = load_store(&args.data.data, args.lenient)?;
    debug!(
        company = %redact_value(&spec.company),
        system = %redact_value(&spec.system),
        license = %redact_value(&spec.license),
        business_type = %redact_value(&spec.business_type),
        website = %redact_value(&spec.website),
        date_from = ?spec.date_from,
        date_to = ?spec.date_to,
        "search criteria"
    );
    let result = match_records(store.records(), &spec);
    let outcome = result.outcome();
    info!(total = result.total(), matched = result.matched(), "search finished");

    match args.output {
        OutputArg::Json => {
            let json = serde_json::to_string_pretty(&SearchReport::new(&result))
                .context("serialize search result")?;
            println!("{json}");
        }
        OutputArg::Table => match outcome {
            SearchOutcome::NotSearched => {
                println!(
                    "{}",
                    summary_table(&args.data.data, store.len(), store.unparsed_date_count())
                );
                println!("{}", outcome_message(&result));
            }
            SearchOutcome::Found { .. } => {
                let columns = ColumnSelection::from_fields(&args.columns);
                println!("{}", results_table(result.records(), &columns));
                println!("{}", outcome_message(&result));
            }
            SearchOutcome::NotFound => {
                println!("{}", outcome_message(&result));
                println!("{NOT_FOUND_TIP}");
            }
        },
    }
    Ok(outcome)
}

pub fn run_summary(args: &DataArgs) -> Result<()> {
    let span = info_span!("summary", path = %args.data.display());
    let _guard = span.enter();
    let store = load_store(&args.data, false)?;
    println!(
        "{}",
        summary_table(&args.data, store.len(), store.unparsed_date_count())
    );
    Ok(())
}

/// Prints the normalized date; returns false when the text cannot be read.
pub fn run_normalize_date(args: &NormalizeDateArgs) -> bool {
    match parse_indonesian_date(&args.text) {
        Some(iso) => {
            println!("{iso}");
            true
        }
        None => {
            eprintln!("error: unparseable date: {:?}", args.text);
            false
        }
    }
}
