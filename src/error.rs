use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

use crate::common::Direction;

#[derive(Error, Debug)]
pub enum RbhError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TSV read error: {0}")]
    Csv(#[from] csv::Error),

    #[error("FASTA read error in {path}: {message}")]
    Fasta { path: PathBuf, message: String },

    /// A required column is missing or a row has the wrong number of fields.
    #[error("schema error in {path}: {message}")]
    Schema { path: PathBuf, message: String },

    /// An input table holds no hit rows. Kept apart from an empty RBH result,
    /// which is a valid outcome.
    #[error("{direction} hit table is empty")]
    EmptyInput { direction: Direction },

    #[error("{path}:{line}: column '{column}' is not numeric: '{value}'")]
    Parse {
        path: PathBuf,
        line: u64,
        column: String,
        value: String,
    },

    /// Raised under the strict aggregation policy only.
    #[error("metadata column '{column}' differs between rows of pair ({query}, {subject})")]
    AggregationConflict {
        query: String,
        subject: String,
        column: String,
    },

    #[error("{direction} search exited with {status}: {stderr}")]
    Search {
        direction: Direction,
        status: ExitStatus,
        stderr: String,
    },

    #[error("output format error: {0}")]
    Format(String),
}

pub type Result<T> = std::result::Result<T, RbhError>;
