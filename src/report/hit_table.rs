//! Loading blastp tabular output (outfmt 6 and 7) into hit tables.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::common::{Direction, Hit, HitTable};
use crate::error::{RbhError, Result};
use crate::format::{ColumnIndex, TableSchema};

/// Read one direction's search output from disk.
pub fn read_hit_table(path: &Path, direction: Direction, schema: &TableSchema) -> Result<HitTable> {
    let file = File::open(path)?;
    let table = parse_hit_table(file, path, direction, schema)?;
    log::info!(
        "{} table {}: {} hits, {} distinct queries",
        direction,
        path.display(),
        table.len(),
        table.distinct_queries()
    );
    Ok(table)
}

/// Parse tab-separated hits from any reader.
///
/// `source` is only used to label errors and the resulting table. Lines
/// starting with `#` (outfmt 7 comments) are skipped. Every other row must
/// have exactly as many fields as the schema declares.
pub fn parse_hit_table<R: Read>(
    input: R,
    source: &Path,
    direction: Direction,
    schema: &TableSchema,
) -> Result<HitTable> {
    let columns = schema.column_index().map_err(|message| RbhError::Schema {
        path: source.to_path_buf(),
        message,
    })?;

    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .comment(Some(b'#'))
        .trim(Trim::Fields)
        .from_reader(input);

    let mut record = StringRecord::new();
    let mut hits = Vec::new();
    while reader.read_record(&mut record)? {
        let line = record.position().map_or(0, |p| p.line());
        if record.len() != schema.len() {
            return Err(RbhError::Schema {
                path: source.to_path_buf(),
                message: format!(
                    "line {}: expected {} columns, found {}",
                    line,
                    schema.len(),
                    record.len()
                ),
            });
        }
        let row = RowParser {
            record: &record,
            schema,
            source,
            line,
        };
        hits.push(row.hit(&columns)?);
    }

    Ok(HitTable::new(direction, hits)
        .with_source(source)
        .with_metadata_columns(columns.metadata_names))
}

struct RowParser<'a> {
    record: &'a StringRecord,
    schema: &'a TableSchema,
    source: &'a Path,
    line: u64,
}

impl RowParser<'_> {
    fn text(&self, idx: usize) -> &str {
        self.record.get(idx).unwrap_or("")
    }

    fn number<T: FromStr>(&self, idx: usize) -> Result<T> {
        let value = self.text(idx);
        value.parse::<T>().map_err(|_| RbhError::Parse {
            path: self.source.to_path_buf(),
            line: self.line,
            column: self.schema.field_names()[idx].clone(),
            value: value.to_string(),
        })
    }

    fn hit(&self, columns: &ColumnIndex) -> Result<Hit> {
        Ok(Hit {
            query_id: self.text(columns.query).to_string(),
            subject_id: self.text(columns.subject).to_string(),
            identity: self.number(columns.identity)?,
            coverage: self.number(columns.coverage)?,
            query_length: self.number(columns.query_length)?,
            subject_length: self.number(columns.subject_length)?,
            length: self.number(columns.length)?,
            bit_score: self.number(columns.bit_score)?,
            e_value: self.number(columns.e_value)?,
            metadata: columns
                .metadata
                .iter()
                .map(|&i| self.text(i).to_string())
                .collect(),
        })
    }
}
