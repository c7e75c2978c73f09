//! CLI argument definitions for the registry checker.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use fincheck_model::{FilterSpec, RegistryField};

#[derive(Parser)]
#[command(
    name = "fincheck",
    version,
    about = "Check whether a fintech provider appears in the licensed registry",
    long_about = "Search the published registry of licensed and registered fintech \
                  providers.\n\n\
                  A search that matches nothing means the provider is not listed and \
                  should be treated as possibly illegal."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Include search terms and company names in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Search the registry.
    Search(SearchArgs),

    /// Show how many records the registry export holds.
    Summary(DataArgs),

    /// Convert an Indonesian date such as "23 Desember 2021" to YYYY-MM-DD.
    NormalizeDate(NormalizeDateArgs),
}

#[derive(Args)]
pub struct DataArgs {
    /// Registry export (JSON array of objects).
    #[arg(
        long = "data",
        value_name = "PATH",
        env = "FINCHECK_DATA",
        default_value = "data.json"
    )]
    pub data: PathBuf,
}

#[derive(Args)]
pub struct SearchArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Free text matched against company, system, website, license and business type.
    #[arg(value_name = "QUERY", default_value = "")]
    pub query: String,

    /// Company name contains.
    #[arg(long, value_name = "TEXT", default_value = "")]
    pub company: String,

    /// Electronic system name contains.
    #[arg(long, value_name = "TEXT", default_value = "")]
    pub system: String,

    /// License or registration certificate contains.
    #[arg(long, value_name = "TEXT", default_value = "")]
    pub license: String,

    /// Business type contains.
    #[arg(long = "business-type", value_name = "TEXT", default_value = "")]
    pub business_type: String,

    /// Website address contains.
    #[arg(long, value_name = "TEXT", default_value = "")]
    pub website: String,

    /// Registered on or after this date.
    #[arg(long = "from", value_name = "YYYY-MM-DD")]
    pub date_from: Option<NaiveDate>,

    /// Registered on or before this date.
    #[arg(long = "to", value_name = "YYYY-MM-DD")]
    pub date_to: Option<NaiveDate>,

    /// How to print matches.
    #[arg(long = "output", value_enum, default_value = "table")]
    pub output: OutputArg,

    /// Columns to show (no, company, system, license, date, business-type, website).
    #[arg(long = "columns", value_name = "LIST", value_delimiter = ',')]
    pub columns: Vec<RegistryField>,

    /// Search an empty registry instead of failing when the export cannot be read.
    #[arg(long = "lenient")]
    pub lenient: bool,
}

impl SearchArgs {
    pub fn filter_spec(&self) -> FilterSpec {
        FilterSpec::query(self.query.as_str())
            .with_company(self.company.as_str())
            .with_system(self.system.as_str())
            .with_license(self.license.as_str())
            .with_business_type(self.business_type.as_str())
            .with_website(self.website.as_str())
            .with_date_from(self.date_from)
            .with_date_to(self.date_to)
    }
}

#[derive(Args)]
pub struct NormalizeDateArgs {
    /// Date text, e.g. "23 Desember 2021".
    #[arg(value_name = "TEXT")]
    pub text: String,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("fincheck").chain(args.iter().copied()))
            .expect("valid arguments")
    }

    #[test]
    fn test_search_builds_filter_spec() {
        let cli = parse(&[
            "search",
            "--data",
            "registry.json",
            "dana",
            "--website",
            ".id",
            "--from",
            "2021-01-01",
        ]);
        let Command::Search(args) = cli.command else {
            panic!("expected search");
        };
        assert_eq!(args.data.data, PathBuf::from("registry.json"));
        assert_eq!(
            args.filter_spec(),
            FilterSpec::query("dana")
                .with_website(".id")
                .with_date_from(NaiveDate::from_ymd_opt(2021, 1, 1))
        );
    }

    #[test]
    fn test_columns_are_comma_separated() {
        let cli = parse(&["search", "--columns", "company,date"]);
        let Command::Search(args) = cli.command else {
            panic!("expected search");
        };
        assert_eq!(
            args.columns,
            vec![RegistryField::Company, RegistryField::RegistrationDate]
        );
    }

    #[test]
    fn test_rejects_bad_date_and_column() {
        assert!(Cli::try_parse_from(["fincheck", "search", "--from", "23-12-2021"]).is_err());
        assert!(Cli::try_parse_from(["fincheck", "search", "--columns", "phone"]).is_err());
    }
}
