//! Unit tests for blastinput/rbh_args.rs

use clap::{Args, Command, FromArgMatches};
use losat_rbh::blastinput::{ResolveArgs, RunArgs};
use losat_rbh::config::AggregationPolicy;
use losat_rbh::format::OutputFormat;
use losat_rbh::RbhError;
use std::path::PathBuf;

fn parse_run(args: &[&str]) -> RunArgs {
    let mut all_args = vec!["losat-rbh".to_string(), "run".to_string()];
    all_args.extend(args.iter().map(|s| s.to_string()));

    let cmd = Command::new("losat-rbh").subcommand(RunArgs::augment_args(Command::new("run")));
    let matches = cmd.get_matches_from(all_args);
    let sub_matches = matches.subcommand_matches("run").unwrap();

    RunArgs::from_arg_matches(sub_matches).unwrap()
}

fn parse_resolve(args: &[&str]) -> ResolveArgs {
    let mut all_args = vec!["losat-rbh".to_string(), "resolve".to_string()];
    all_args.extend(args.iter().map(|s| s.to_string()));

    let cmd =
        Command::new("losat-rbh").subcommand(ResolveArgs::augment_args(Command::new("resolve")));
    let matches = cmd.get_matches_from(all_args);
    let sub_matches = matches.subcommand_matches("resolve").unwrap();

    ResolveArgs::from_arg_matches(sub_matches).unwrap()
}

#[test]
fn test_run_default_values() {
    let args = parse_run(&["-a", "set_a.faa", "-b", "set_b.faa"]);

    assert_eq!(args.set_a, PathBuf::from("set_a.faa"));
    assert_eq!(args.set_b, PathBuf::from("set_b.faa"));
    assert_eq!(args.outdir, PathBuf::from("."));
    assert_eq!(args.forward_out, PathBuf::from("fwd_results.tab"));
    assert_eq!(args.reverse_out, PathBuf::from("rev_results.tab"));
    assert_eq!(args.max_target_seqs, 1);
    assert_eq!(args.evalue, None);
    assert_eq!(args.num_threads, None);
    assert_eq!(args.blastp, None);
    assert!(!args.no_progress);
    assert_eq!(
        args.options.outfmt,
        "6 qseqid sseqid pident qcovs qlen slen length bitscore evalue"
    );
    assert_eq!(args.options.report_format, "6");
    assert_eq!(args.options.aggregation, AggregationPolicy::Drop);
    assert_eq!(args.options.verbose, 0);
    assert_eq!(args.options.out, None);
}

#[test]
fn test_run_search_outputs_join_outdir() {
    let args = parse_run(&[
        "-a",
        "a.faa",
        "-b",
        "b.faa",
        "-d",
        "results",
        "--forward-out",
        "ab.tsv",
    ]);
    let outputs = args.search_outputs();
    assert_eq!(outputs.forward, PathBuf::from("results/ab.tsv"));
    assert_eq!(outputs.reverse, PathBuf::from("results/rev_results.tab"));
}

#[test]
fn test_run_search_config() {
    let args = parse_run(&[
        "-a",
        "a.faa",
        "-b",
        "b.faa",
        "--blastp",
        "/opt/blast/bin/blastp",
        "--evalue",
        "1e-5",
        "-n",
        "8",
        "--max-target-seqs",
        "5",
        "--no-progress",
    ]);
    let config = args.search_config();
    assert_eq!(config.program, PathBuf::from("/opt/blast/bin/blastp"));
    assert_eq!(config.evalue, Some(1e-5));
    assert_eq!(config.num_threads, Some(8));
    assert_eq!(config.max_target_seqs, 5);
    assert!(!config.progress);
}

#[test]
fn test_verbose_counts() {
    let args = parse_resolve(&["-f", "fwd.tab", "-r", "rev.tab", "-vv"]);
    assert_eq!(args.options.verbose, 2);
}

#[test]
fn test_resolve_options_to_config() {
    let args = parse_resolve(&[
        "-f",
        "fwd.tab",
        "-r",
        "rev.tab",
        "--report-format",
        "7",
        "--max-evalue",
        "1e-10",
        "--min-identity",
        "30",
        "--min-coverage",
        "50",
        "--min-bitscore",
        "40",
        "--aggregation",
        "strict",
    ]);
    assert_eq!(args.forward, PathBuf::from("fwd.tab"));
    assert_eq!(args.reverse, PathBuf::from("rev.tab"));

    let config = args.options.rbh_config().unwrap();
    assert_eq!(config.output.format, OutputFormat::TabularWithComments);
    assert_eq!(config.aggregation, AggregationPolicy::Strict);
    assert_eq!(config.filter.max_evalue, Some(1e-10));
    assert_eq!(config.filter.min_identity, Some(30.0));
    assert_eq!(config.filter.min_coverage, Some(50.0));
    assert_eq!(config.filter.min_bit_score, Some(40.0));
}

#[test]
fn test_custom_outfmt_with_metadata() {
    let args = parse_resolve(&[
        "-f",
        "fwd.tab",
        "-r",
        "rev.tab",
        "--outfmt",
        "6 qseqid sseqid pident qcovs qlen slen length bitscore evalue stitle",
    ]);
    let config = args.options.rbh_config().unwrap();
    assert_eq!(config.schema.len(), 10);
    let columns = config.schema.column_index().unwrap();
    assert_eq!(columns.metadata_names, vec!["stitle".to_string()]);
}

#[test]
fn test_outfmt_missing_required_column_is_rejected() {
    let args = parse_resolve(&[
        "-f",
        "fwd.tab",
        "-r",
        "rev.tab",
        "--outfmt",
        "6 qseqid sseqid pident",
    ]);
    // The layout is accepted at parse time and rejected when tables are read.
    let config = args.options.rbh_config().unwrap();
    assert!(config.schema.column_index().is_err());
}

#[test]
fn test_bad_report_format_is_rejected() {
    let args = parse_resolve(&["-f", "fwd.tab", "-r", "rev.tab", "--report-format", "5"]);
    assert!(matches!(args.options.rbh_config(), Err(RbhError::Format(_))));
}

#[test]
fn test_unknown_aggregation_is_rejected() {
    let cmd =
        Command::new("losat-rbh").subcommand(ResolveArgs::augment_args(Command::new("resolve")));
    let result = cmd.try_get_matches_from([
        "losat-rbh",
        "resolve",
        "-f",
        "fwd.tab",
        "-r",
        "rev.tab",
        "--aggregation",
        "mean",
    ]);
    assert!(result.is_err());
}
