//! CLI argument definitions for flightmap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use flightmap_cli::config::ThresholdOverrides;

#[derive(Parser)]
#[command(
    name = "flightmap",
    version,
    about = "Learn callsign to flight designator rules from schedule data",
    long_about = "Learn per-airline rules that predict a flight's IATA designator from its ICAO callsign.\n\n\
                  Writes exact mappings, (number, suffix) rules, suffix delta rules and\n\
                  airline-wide constants as CSV tables."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Build model tables from a schedule CSV.
    Build(BuildArgs),

    /// Flatten a folder of JSON schedules into a de-duplicated schedule CSV.
    Flatten(FlattenArgs),

    /// Export the latest flight mapping per callsign from a folder of JSON schedules.
    Mappings(MappingsArgs),

    /// De-duplicate a CSV file on normalized key columns.
    Dedupe(DedupeArgs),
}

#[derive(Parser)]
pub struct BuildArgs {
    /// Input CSV with number, callsign, airline_iata and airline_icao columns.
    #[arg(long = "in", value_name = "CSV")]
    pub input: PathBuf,

    /// Output directory for the model CSV files.
    #[arg(long = "outdir", value_name = "DIR")]
    pub output_dir: PathBuf,

    /// TOML file with induction thresholds (flags take precedence).
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub thresholds: ThresholdArgs,
}

#[derive(Args, Clone, Copy)]
pub struct ThresholdArgs {
    /// Min support for (num, suffix) rules [default: 3].
    #[arg(long = "ns-min-support", value_name = "N")]
    pub ns_min_support: Option<usize>,

    /// Min purity for (num, suffix) rules [default: 0.90].
    #[arg(long = "ns-min-purity", value_name = "FRACTION")]
    pub ns_min_purity: Option<f64>,

    /// Min support for suffix delta rules [default: 5].
    #[arg(long = "sd-min-support", value_name = "N")]
    pub sd_min_support: Option<usize>,

    /// Min purity for suffix delta rules [default: 0.85].
    #[arg(long = "sd-min-purity", value_name = "FRACTION")]
    pub sd_min_purity: Option<f64>,

    /// Min purity for the airline-wide constant delta [default: 0.90].
    #[arg(long = "delta-min-purity", value_name = "FRACTION")]
    pub delta_min_purity: Option<f64>,
}

impl From<ThresholdArgs> for ThresholdOverrides {
    fn from(args: ThresholdArgs) -> Self {
        Self {
            ns_min_support: args.ns_min_support,
            ns_min_purity: args.ns_min_purity,
            sd_min_support: args.sd_min_support,
            sd_min_purity: args.sd_min_purity,
            delta_min_purity: args.delta_min_purity,
        }
    }
}

#[derive(Parser)]
pub struct FlattenArgs {
    /// Folder searched recursively for JSON schedule files.
    #[arg(value_name = "FOLDER")]
    pub folder: PathBuf,

    /// Output CSV path.
    #[arg(short = 'o', long = "output", value_name = "CSV", default_value = "callsigns.csv")]
    pub output: PathBuf,
}

#[derive(Parser)]
pub struct MappingsArgs {
    /// Folder searched recursively for JSON schedule files.
    #[arg(value_name = "FOLDER")]
    pub folder: PathBuf,

    /// Output CSV path.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "CSV",
        default_value = "flight_mappings.csv"
    )]
    pub output: PathBuf,
}

#[derive(Parser)]
pub struct DedupeArgs {
    /// Input CSV file.
    #[arg(value_name = "IN")]
    pub input: PathBuf,

    /// Output CSV file.
    #[arg(short = 'o', long = "output", value_name = "OUT")]
    pub output: PathBuf,

    /// Key columns (comma separated); all columns when omitted.
    #[arg(long = "key", value_name = "COLUMNS", value_delimiter = ',')]
    pub key: Vec<String>,
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
