use std::cmp::Ordering;
use std::fmt;
use std::path::{Path, PathBuf};

/// Search direction between the two sequence sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Set A searched against set B
    Forward,
    /// Set B searched against set A
    Reverse,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Forward => "forward",
            Direction::Reverse => "reverse",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of a blastp tabular result.
///
/// The numeric fields mirror `pident qcovs qlen slen length bitscore evalue`.
/// `metadata` holds any additional fields requested in a custom outfmt
/// specification, in the order they were declared.
#[derive(Debug, Clone, PartialEq)]
pub struct Hit {
    pub query_id: String,
    pub subject_id: String,
    pub identity: f64,
    pub coverage: f64,
    pub query_length: usize,
    pub subject_length: usize,
    pub length: usize,
    pub bit_score: f64,
    pub e_value: f64,
    pub metadata: Vec<String>,
}

impl Hit {
    pub fn key(&self) -> (&str, &str) {
        (self.query_id.as_str(), self.subject_id.as_str())
    }

    /// Raise every numeric field to the column-wise maximum with `other`.
    ///
    /// E-value is maximised like every other column, so a collapsed pair
    /// reports its weakest E-value.
    pub fn absorb_max(&mut self, other: &Hit) {
        self.identity = self.identity.max(other.identity);
        self.coverage = self.coverage.max(other.coverage);
        self.query_length = self.query_length.max(other.query_length);
        self.subject_length = self.subject_length.max(other.subject_length);
        self.length = self.length.max(other.length);
        self.bit_score = self.bit_score.max(other.bit_score);
        self.e_value = self.e_value.max(other.e_value);
    }
}

/// Order hits by query id, then subject id.
pub fn compare_hit_keys(a: &Hit, b: &Hit) -> Ordering {
    match a.query_id.cmp(&b.query_id) {
        Ordering::Equal => a.subject_id.cmp(&b.subject_id),
        ord => ord,
    }
}

/// All hits produced by one search direction.
#[derive(Debug, Clone)]
pub struct HitTable {
    pub direction: Direction,
    /// File the table was read from, when it came from disk
    pub source: Option<PathBuf>,
    /// Names of the trailing metadata columns carried by every hit
    pub metadata_columns: Vec<String>,
    pub hits: Vec<Hit>,
}

impl HitTable {
    pub fn new(direction: Direction, hits: Vec<Hit>) -> Self {
        Self {
            direction,
            source: None,
            metadata_columns: Vec::new(),
            hits,
        }
    }

    pub fn with_source(mut self, source: &Path) -> Self {
        self.source = Some(source.to_path_buf());
        self
    }

    pub fn with_metadata_columns(mut self, columns: Vec<String>) -> Self {
        self.metadata_columns = columns;
        self
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// Number of distinct query ids in the table.
    pub fn distinct_queries(&self) -> usize {
        self.hits
            .iter()
            .map(|h| h.query_id.as_str())
            .collect::<rustc_hash::FxHashSet<_>>()
            .len()
    }

    pub fn source_name(&self) -> String {
        match self.source {
            Some(ref path) => path.display().to_string(),
            None => format!("<{} table>", self.direction),
        }
    }
}
