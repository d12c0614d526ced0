//! Common Arguments
//!
//! Reference: ncbi-blast/c++/src/algo/blast/blastinput/blast_args.cpp
//!
//! Defaults shared by the `run` and `resolve` subcommands.

/// Tabular layout requested from blastp and expected when reading tables back
pub const DEFAULT_OUTFMT: &str = "6 qseqid sseqid pident qcovs qlen slen length bitscore evalue";
/// Keep only the best target per query
pub const DEFAULT_MAX_TARGET_SEQS: usize = 1;
pub const DEFAULT_FORWARD_OUT: &str = "fwd_results.tab";
pub const DEFAULT_REVERSE_OUT: &str = "rev_results.tab";
pub const DEFAULT_REPORT_FORMAT: &str = "6";
