//! Sequence set inspection
//!
//! The searches themselves are run by blastp; here the FASTA inputs are only
//! read for their identifiers, so a run can report how much of each set found
//! a reciprocal partner.

use std::path::{Path, PathBuf};

use bio::io::fasta;
use rustc_hash::FxHashSet;

use crate::error::{RbhError, Result};

/// Identifiers of one FASTA sequence set.
#[derive(Debug, Clone)]
pub struct SequenceSet {
    path: PathBuf,
    ids: Vec<String>,
    total_residues: usize,
}

impl SequenceSet {
    /// Read every record id (first word of the header) from a FASTA file.
    pub fn from_fasta(path: &Path) -> Result<Self> {
        let fasta_error = |message: String| RbhError::Fasta {
            path: path.to_path_buf(),
            message,
        };

        let reader = fasta::Reader::from_file(path).map_err(|e| fasta_error(e.to_string()))?;
        let mut ids = Vec::new();
        let mut total_residues = 0usize;
        for record in reader.records() {
            let record = record.map_err(|e| fasta_error(e.to_string()))?;
            total_residues += record.seq().len();
            ids.push(record.id().to_string());
        }

        log::debug!(
            "{}: {} sequences, {} residues",
            path.display(),
            ids.len(),
            total_residues
        );
        Ok(Self {
            path: path.to_path_buf(),
            ids,
            total_residues,
        })
    }

    pub fn from_ids(path: &Path, ids: Vec<String>) -> Self {
        Self {
            path: path.to_path_buf(),
            ids,
            total_residues: 0,
        }
    }

    /// File name used in reports.
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn total_residues(&self) -> usize {
        self.total_residues
    }

    /// Count distinct ids from `found` that belong to this set.
    pub fn count_present<'a>(&self, found: impl Iterator<Item = &'a str>) -> usize {
        let own: FxHashSet<&str> = self.ids.iter().map(String::as_str).collect();
        found
            .filter(|id| own.contains(id))
            .collect::<FxHashSet<_>>()
            .len()
    }
}
