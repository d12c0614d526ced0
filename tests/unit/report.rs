//! Unit tests for report/ (reading search tables, writing RBH tables)

use super::helpers::{make_hit, to_tabular, write_file};
use losat_rbh::common::Direction;
use losat_rbh::config::{AggregationPolicy, OutputConfig};
use losat_rbh::core::resolve_rbh;
use losat_rbh::format::TableSchema;
use losat_rbh::report::{read_hit_table, write_rbh_output, write_rbh_table, ReportContext};
use losat_rbh::RbhError;
use std::fs;

#[test]
fn test_read_outfmt6_file() {
    let dir = tempfile::tempdir().unwrap();
    let hits = vec![make_hit("A1", "B1", 210.0), make_hit("A2", "B7", 55.5)];
    let path = write_file(dir.path(), "fwd_results.tab", &to_tabular(&hits));

    let table = read_hit_table(&path, Direction::Forward, &TableSchema::rbh_default()).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.direction, Direction::Forward);
    assert_eq!(table.source.as_deref(), Some(path.as_path()));
    assert_eq!(table.hits, hits);
}

#[test]
fn test_read_outfmt7_file_skips_comments() {
    let dir = tempfile::tempdir().unwrap();
    let contents = "# BLASTP 2.15.0+\n\
                    # Query: A1\n\
                    # Fields: query acc.ver, subject acc.ver, % identity\n\
                    # 1 hits found\n\
                    A1\tB1\t88.2\t97\t412\t420\t405\t702\t0.0\n\
                    # BLAST processed 1 queries\n";
    let path = write_file(dir.path(), "fwd.tab", contents);

    let table = read_hit_table(&path, Direction::Forward, &TableSchema::rbh_default()).unwrap();
    assert_eq!(table.len(), 1);
    assert_eq!(table.hits[0].query_length, 412);
    assert_eq!(table.hits[0].e_value, 0.0);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = read_hit_table(
        &dir.path().join("absent.tab"),
        Direction::Reverse,
        &TableSchema::rbh_default(),
    );
    assert!(matches!(result, Err(RbhError::Io(_))));
}

#[test]
fn test_wrong_column_count_is_schema_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "rev.tab", "B1\tA1\t88.2\t97\n");

    let result = read_hit_table(&path, Direction::Reverse, &TableSchema::rbh_default());
    assert!(matches!(result, Err(RbhError::Schema { .. })));
}

#[test]
fn test_write_rbh_output_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let forward_path = write_file(
        dir.path(),
        "fwd.tab",
        &to_tabular(&[make_hit("A2", "B2", 90.0), make_hit("A1", "B1", 120.0)]),
    );
    let reverse_path = write_file(
        dir.path(),
        "rev.tab",
        &to_tabular(&[make_hit("B1", "A1", 118.0), make_hit("B2", "A2", 91.0)]),
    );
    let schema = TableSchema::rbh_default();
    let forward = read_hit_table(&forward_path, Direction::Forward, &schema).unwrap();
    let reverse = read_hit_table(&reverse_path, Direction::Reverse, &schema).unwrap();
    let rbh = resolve_rbh(&forward, &reverse, AggregationPolicy::Drop).unwrap();

    let out = dir.path().join("rbh.tsv");
    write_rbh_output(&rbh, Some(&out), &OutputConfig::with_header(), &ReportContext::default())
        .unwrap();

    let written = fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("query\tsubject\t"));
    assert_eq!(lines[1], "A1\tB1\t80.000\t95\t300\t310\t290\t120\t1.00e-40");
    assert!(lines[2].starts_with("A2\tB2\t"));
}

#[test]
fn test_metadata_columns_are_written() {
    let dir = tempfile::tempdir().unwrap();
    let schema =
        TableSchema::from_outfmt("6 qseqid sseqid pident qcovs qlen slen length bitscore evalue stitle")
            .unwrap();
    let forward_path = write_file(
        dir.path(),
        "fwd.tab",
        "A1\tB1\t70\t90\t100\t100\t95\t150\t1e-30\tGroEL chaperonin\n",
    );
    let reverse_path = write_file(
        dir.path(),
        "rev.tab",
        "B1\tA1\t70\t90\t100\t100\t95\t150\t1e-30\tGroEL\n",
    );
    let forward = read_hit_table(&forward_path, Direction::Forward, &schema).unwrap();
    let reverse = read_hit_table(&reverse_path, Direction::Reverse, &schema).unwrap();
    let rbh = resolve_rbh(&forward, &reverse, AggregationPolicy::Drop).unwrap();

    let mut output = Vec::new();
    write_rbh_table(&mut output, &rbh, &OutputConfig::with_header(), &ReportContext::default())
        .unwrap();
    let output = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert!(lines[0].ends_with("\tE-value\tstitle"));
    assert!(lines[1].ends_with("\tGroEL chaperonin"));
}
