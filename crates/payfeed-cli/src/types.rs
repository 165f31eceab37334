use std::path::PathBuf;

use payfeed_core::SkippedRecord;
use payfeed_model::{ParseError, ValidationError};

/// Result of a `run` or `check` invocation, consumed by the summary printer.
#[derive(Debug)]
pub struct RunResult {
    pub batch_file: PathBuf,
    pub output_dir: Option<PathBuf>,
    pub rows: usize,
    pub transformed: usize,
    pub warning_count: usize,
    pub errors: Vec<ValidationError>,
    pub parse_errors: Vec<ParseError>,
    pub skipped: Vec<SkippedRecord>,
    pub provider_files: Vec<ProviderFile>,
    pub report_path: Option<PathBuf>,
    pub has_errors: bool,
}

#[derive(Debug)]
pub struct ProviderFile {
    pub provider: String,
    pub records: usize,
    pub path: Option<PathBuf>,
}
