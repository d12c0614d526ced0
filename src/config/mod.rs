//! Run configuration
//!
//! Settings that travel from the command line into the library API,
//! plus the environment overrides the binary honours.

pub mod policy;

pub use policy::AggregationPolicy;

use std::path::{Path, PathBuf};

use crate::format::{OutputFormat, TableSchema};
use crate::post::filter::FilterConfig;

/// Environment variable naming the blastp executable
pub const BLASTP_ENV: &str = "LOSAT_RBH_BLASTP";

/// Program used when neither `--blastp` nor `LOSAT_RBH_BLASTP` is set
pub const DEFAULT_BLASTP: &str = "blastp";

/// Resolve the blastp program: explicit path, then environment, then `blastp` on PATH.
pub fn blastp_program(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    match std::env::var(BLASTP_ENV) {
        Ok(value) if !value.trim().is_empty() => PathBuf::from(value.trim()),
        _ => PathBuf::from(DEFAULT_BLASTP),
    }
}

/// RBH output configuration
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// 6 = bare rows, 7 = rows preceded by `#` comment lines
    pub format: OutputFormat,
    /// Whether to write a column header line (format 6 only)
    pub include_header: bool,
    /// Delimiter between fields (default: tab)
    pub delimiter: char,
    /// Number of decimal places for identity
    pub identity_decimals: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Tabular,
            include_header: false,
            delimiter: '\t',
            identity_decimals: 3,
        }
    }
}

impl OutputConfig {
    /// Configuration with header line
    pub fn with_header() -> Self {
        Self {
            include_header: true,
            ..Default::default()
        }
    }
}

/// Everything needed to turn two hit tables into an RBH table.
#[derive(Debug, Clone, Default)]
pub struct RbhConfig {
    /// Layout of the forward and reverse tables
    pub schema: TableSchema,
    pub aggregation: AggregationPolicy,
    pub filter: FilterConfig,
    pub output: OutputConfig,
}

/// Settings forwarded to the external search program.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub program: PathBuf,
    pub max_target_seqs: usize,
    pub evalue: Option<f64>,
    pub num_threads: Option<usize>,
    /// Show a spinner while a search runs
    pub progress: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            program: PathBuf::from(DEFAULT_BLASTP),
            max_target_seqs: 1,
            evalue: None,
            num_threads: None,
            progress: false,
        }
    }
}
