//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "payfeed",
    version,
    about = "PayFeed - Validate and transform employee batch files",
    long_about = "Validate new-hire/employee batch files against the PayFeed business schema,\n\
                  apply the I-9/E-Verify compliance gate, and emit provider-specific output\n\
                  files (ADP and Gusto built in, or an admin-supplied mapping)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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

    /// Allow row-level values (SSNs, account numbers) in trace logs.
    ///
    /// Off by default; row values are logged as [REDACTED].
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the full pipeline and write provider output files.
    Run(RunArgs),

    /// Parse and validate a batch file without writing outputs.
    Check(CheckArgs),

    /// List the built-in provider mappings.
    Providers,
}

#[derive(Parser)]
pub struct RunArgs {
    /// Path to the batch file (delimited text, header row first).
    #[arg(value_name = "BATCH_FILE")]
    pub batch_file: PathBuf,

    /// Provider schema to emit (default: all built-in providers).
    #[arg(long = "provider", value_name = "NAME")]
    pub provider: Option<String>,

    /// JSON file containing a replacement provider mapping.
    ///
    /// Replaces the built-in mappings wholesale; only the supplied
    /// mapping's output is produced.
    #[arg(long = "mapping", value_name = "FILE")]
    pub mapping: Option<PathBuf>,

    /// Output directory (default: <BATCH_FILE directory>/output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Validate and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Path to the batch file.
    #[arg(value_name = "BATCH_FILE")]
    pub batch_file: PathBuf,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
