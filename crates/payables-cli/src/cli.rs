//! CLI argument definitions for `payables`.
//!
//! # Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--exchange` | from suffix, else `nse` | Listing exchange (`nse`, `bse`) |
//! | `--year` | required | Fiscal year, four digits |
//! | `--api-key` | `$PAYABLES_API_KEY` | Provider API key |
//! | `--base-url` | `$PAYABLES_BASE_URL` or provider URL | Endpoint override |
//! | `--timeout-ms` | `10000` | Request timeout in ms |
//! | `--format` | `table` | Output format (table, json) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `-v` | | Raise log verbosity (repeatable) |
//!
//! # Examples
//!
//! ```bash
//! payables RELIANCE.NS --year 2024
//! payables 500325 --exchange bse --year 2023 --format json --pretty
//! PAYABLES_API_KEY=... payables TCS -y 2022 -vv
//! ```

use clap::{ArgAction, Parser, ValueEnum};
use payables_core::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS};

/// Fetch a company's Account Payables for a fiscal year.
#[derive(Debug, Parser)]
#[command(
    name = "payables",
    author,
    version,
    about = "Fetch a listed company's Account Payables for a fiscal year",
    long_about = "Looks up the Account Payables figure an NSE or BSE listed company reported \
for one fiscal year and prints it with thousands separators and its currency.\n\
\n\
The API key can be given with --api-key or the PAYABLES_API_KEY environment variable."
)]
pub struct Cli {
    /// Company ticker, optionally with its exchange suffix (RELIANCE or RELIANCE.NS).
    pub ticker: String,

    /// Listing exchange: nse or bse. Inferred from a .NS/.BO suffix when omitted.
    #[arg(long, short = 'e')]
    pub exchange: Option<String>,

    /// Fiscal year to look up (four digits, 1900-2100).
    #[arg(long, short = 'y')]
    pub year: String,

    /// Provider API key.
    #[arg(long, env = "PAYABLES_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Provider base URL.
    #[arg(long, env = "PAYABLES_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Request timeout in milliseconds.
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_MS)]
    pub timeout_ms: u64,

    /// Output format for the result.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, default_value_t = false)]
    pub pretty: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Labelled report for terminal display.
    Table,
    /// Single JSON object.
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_invocation() {
        let cli = Cli::try_parse_from(["payables", "RELIANCE.NS", "--year", "2024"])
            .expect("arguments should parse");
        assert_eq!(cli.ticker, "RELIANCE.NS");
        assert_eq!(cli.year, "2024");
        assert_eq!(cli.exchange, None);
        assert_eq!(cli.timeout_ms, DEFAULT_TIMEOUT_MS);
        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn parses_all_flags() {
        let cli = Cli::try_parse_from([
            "payables",
            "500325",
            "-e",
            "bse",
            "-y",
            "2023",
            "--api-key",
            "k",
            "--base-url",
            "http://localhost:8080",
            "--timeout-ms",
            "250",
            "--format",
            "json",
            "--pretty",
            "-vv",
        ])
        .expect("arguments should parse");
        assert_eq!(cli.exchange.as_deref(), Some("bse"));
        assert_eq!(cli.api_key.as_deref(), Some("k"));
        assert_eq!(cli.base_url, "http://localhost:8080");
        assert_eq!(cli.timeout_ms, 250);
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.pretty);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn year_is_required() {
        assert!(Cli::try_parse_from(["payables", "TCS"]).is_err());
    }
}
