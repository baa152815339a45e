//! CLI argument definitions for Quarterdeck.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `summary` | Headline cards for the latest reported quarter |
//! | `trend` | Company-wide trend for a selected metric |
//! | `segments` | Per-segment trend for a selected segment metric |
//! | `highlights` | Narrative highlights for the latest quarter |
//! | `metrics` | Selectable metric keys and display labels |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `json` | Output format (json, table) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--strict` | `false` | Treat warnings as errors |

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Quarterdeck - quarterly financial summary CLI
///
/// Renders a single company's quarterly results: headline cards, two
/// selection-driven trend series, and narrative highlights.
#[derive(Debug, Parser)]
#[command(
    name = "quarterdeck",
    author,
    version,
    about = "Quarterly financial summary CLI",
    long_about = "Quarterdeck renders a company's quarterly results from the bundled dataset:\n\
\n\
  • Headline metric cards for the latest quarter\n\
  • Company-wide trend series for a selectable metric\n\
  • Business-segment trend series for a selectable segment metric\n\
  • Narrative highlights\n\
\n\
Use 'quarterdeck <command> --help' for command-specific help."
)]
pub struct Cli {
    /// Output format for results.
    ///
    /// - json: Single JSON object (default)
    /// - table: ASCII table format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Treat warnings and errors as failures (exit code 5).
    #[arg(long, global = true, default_value_t = false)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// ASCII table format for terminal display.
    Table,
    /// Single JSON object output.
    Json,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// 💰 Headline cards for the latest reported quarter.
    ///
    /// Returns the most recent quarterly record together with the
    /// Revenue, Operating Income, and Net Income card values.
    ///
    /// # Examples
    ///
    ///   quarterdeck summary
    ///   quarterdeck summary --format table
    Summary,

    /// 📊 Company-wide trend for a selected metric.
    ///
    /// Projects the full quarterly series down to (period, value) pairs
    /// for one metric.
    ///
    /// # Examples
    ///
    ///   quarterdeck trend
    ///   quarterdeck trend --metric operatingIncome
    ///   quarterdeck trend --metric freeCashFlow --pretty
    Trend(TrendArgs),

    /// 🚚 Per-segment trend for a selected segment metric.
    ///
    /// # Examples
    ///
    ///   quarterdeck segments
    ///   quarterdeck segments --metric truckload
    Segments(SegmentsArgs),

    /// 📋 Narrative highlights for the latest quarter.
    Highlights,

    /// 🔍 List selectable metric keys, display labels, and units.
    ///
    /// Use this to populate selection controls; the key column is the
    /// value accepted by `--metric`.
    Metrics,
}

/// Arguments for the `trend` command.
#[derive(Debug, Args)]
pub struct TrendArgs {
    /// Metric to chart.
    ///
    /// Supported keys:
    /// - revenue (default)
    /// - operatingIncome
    /// - netIncome
    /// - adjustedEPS
    /// - freeCashFlow
    #[arg(long, default_value = "revenue")]
    pub metric: String,
}

/// Arguments for the `segments` command.
#[derive(Debug, Args)]
pub struct SegmentsArgs {
    /// Segment metric to chart.
    ///
    /// Supported keys:
    /// - packageAndCourier (default)
    /// - lessThanTruckload
    /// - truckload
    /// - logistics
    #[arg(long, default_value = "packageAndCourier")]
    pub metric: String,
}
