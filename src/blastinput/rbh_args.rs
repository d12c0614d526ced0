use clap::{ArgAction, Args};
use std::path::PathBuf;

use super::blast_args::{
    DEFAULT_FORWARD_OUT, DEFAULT_MAX_TARGET_SEQS, DEFAULT_OUTFMT, DEFAULT_REPORT_FORMAT,
    DEFAULT_REVERSE_OUT,
};
use crate::api::SearchOutputs;
use crate::config::{blastp_program, AggregationPolicy, OutputConfig, RbhConfig, SearchConfig};
use crate::error::{RbhError, Result};
use crate::format::{OutputFormat, TableSchema};
use crate::post::FilterConfig;

/// Options shared by every subcommand that resolves RBH pairs.
#[derive(Args, Debug, Clone)]
pub struct ResolveOptions {
    /// Layout of the search tables, as a blastp -outfmt value.
    ///
    /// Must name qseqid, sseqid, pident, qcovs, qlen, slen, length, bitscore
    /// and evalue; any further fields are carried through as metadata.
    #[arg(long, default_value = DEFAULT_OUTFMT)]
    pub outfmt: String,
    /// RBH table destination (default: stdout)
    #[arg(short, long)]
    pub out: Option<PathBuf>,
    /// RBH table layout: 6 = rows only, 7 = rows preceded by comment lines
    #[arg(long, default_value = DEFAULT_REPORT_FORMAT)]
    pub report_format: String,
    /// Write a column header line (format 6 only)
    #[arg(long, default_value_t = false)]
    pub header: bool,
    /// Drop hits with a larger E-value before resolving
    #[arg(long)]
    pub max_evalue: Option<f64>,
    /// Drop hits below this percent identity before resolving
    #[arg(long)]
    pub min_identity: Option<f64>,
    /// Drop hits below this percent query coverage before resolving
    #[arg(long)]
    pub min_coverage: Option<f64>,
    /// Drop hits below this bit score before resolving
    #[arg(long)]
    pub min_bitscore: Option<f64>,
    /// Metadata columns that differ within a pair: 'drop' blanks them, 'strict' fails
    #[arg(long, default_value = "drop")]
    pub aggregation: AggregationPolicy,
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl ResolveOptions {
    pub fn rbh_config(&self) -> Result<RbhConfig> {
        let schema = TableSchema::from_outfmt(&self.outfmt).map_err(RbhError::Format)?;
        let (format, fields) =
            OutputFormat::parse(&self.report_format).map_err(RbhError::Format)?;
        if let Some(fields) = fields {
            return Err(RbhError::Format(format!(
                "report format takes no field list, got '{}'",
                fields
            )));
        }

        Ok(RbhConfig {
            schema,
            aggregation: self.aggregation,
            filter: FilterConfig {
                max_evalue: self.max_evalue,
                min_bit_score: self.min_bitscore,
                min_identity: self.min_identity,
                min_coverage: self.min_coverage,
            },
            output: OutputConfig {
                format,
                include_header: self.header,
                ..Default::default()
            },
        })
    }
}

/// Search both directions with blastp, then resolve.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Sequence set A (protein FASTA)
    #[arg(short = 'a', long)]
    pub set_a: PathBuf,
    /// Sequence set B (protein FASTA)
    #[arg(short = 'b', long)]
    pub set_b: PathBuf,
    /// Directory receiving the forward and reverse search tables
    #[arg(short = 'd', long, default_value = ".")]
    pub outdir: PathBuf,
    /// File name of the forward (A vs B) table inside the output directory
    #[arg(long, default_value = DEFAULT_FORWARD_OUT)]
    pub forward_out: PathBuf,
    /// File name of the reverse (B vs A) table inside the output directory
    #[arg(long, default_value = DEFAULT_REVERSE_OUT)]
    pub reverse_out: PathBuf,
    /// blastp executable (default: $LOSAT_RBH_BLASTP, then blastp on PATH)
    #[arg(long)]
    pub blastp: Option<PathBuf>,
    #[arg(long, default_value_t = DEFAULT_MAX_TARGET_SEQS)]
    pub max_target_seqs: usize,
    /// E-value threshold passed to blastp
    #[arg(long)]
    pub evalue: Option<f64>,
    #[arg(short = 'n', long)]
    pub num_threads: Option<usize>,
    /// Hide the spinner shown while a search runs
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,
    #[command(flatten)]
    pub options: ResolveOptions,
}

impl RunArgs {
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            program: blastp_program(self.blastp.as_deref()),
            max_target_seqs: self.max_target_seqs,
            evalue: self.evalue,
            num_threads: self.num_threads,
            progress: !self.no_progress,
        }
    }

    pub fn search_outputs(&self) -> SearchOutputs {
        SearchOutputs {
            forward: self.outdir.join(&self.forward_out),
            reverse: self.outdir.join(&self.reverse_out),
        }
    }
}

/// Resolve precomputed forward and reverse tables.
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Forward (A vs B) search table
    #[arg(short = 'f', long)]
    pub forward: PathBuf,
    /// Reverse (B vs A) search table
    #[arg(short = 'r', long)]
    pub reverse: PathBuf,
    #[command(flatten)]
    pub options: ResolveOptions,
}
