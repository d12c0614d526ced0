//! Test utilities and helpers for unit tests
//!
//! - Hit and table constructors with sensible defaults
//! - Writers for tabular search output on disk

use std::fs;
use std::path::{Path, PathBuf};

use losat_rbh::common::{Direction, Hit, HitTable};

/// Create a test Hit with default values
pub fn make_hit(query: &str, subject: &str, bit_score: f64) -> Hit {
    Hit {
        query_id: query.to_string(),
        subject_id: subject.to_string(),
        identity: 80.0,
        coverage: 95.0,
        query_length: 300,
        subject_length: 310,
        length: 290,
        bit_score,
        e_value: 1e-40,
        metadata: Vec::new(),
    }
}

pub fn forward_table(pairs: &[(&str, &str)]) -> HitTable {
    table(Direction::Forward, pairs)
}

pub fn reverse_table(pairs: &[(&str, &str)]) -> HitTable {
    table(Direction::Reverse, pairs)
}

fn table(direction: Direction, pairs: &[(&str, &str)]) -> HitTable {
    HitTable::new(
        direction,
        pairs.iter().map(|(q, s)| make_hit(q, s, 200.0)).collect(),
    )
}

/// Render hits as a default-layout outfmt 6 table.
pub fn to_tabular(hits: &[Hit]) -> String {
    let mut out = String::new();
    for h in hits {
        out.push_str(&format!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{:e}\n",
            h.query_id,
            h.subject_id,
            h.identity,
            h.coverage,
            h.query_length,
            h.subject_length,
            h.length,
            h.bit_score,
            h.e_value
        ));
    }
    out
}

/// Write `contents` to `dir/name` and return the path.
pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}
