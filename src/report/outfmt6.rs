use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::common::{Hit, HitTable};
use crate::config::OutputConfig;
use crate::core::RbhSet;
use crate::error::Result;
use crate::format::OutputFormat;
use crate::sequence::SequenceSet;

/// Column names of the RBH table, before any metadata columns.
pub const RBH_COLUMNS: [&str; 9] = [
    "query", "subject", "identity", "coverage", "qlength", "slength", "alength", "bitscore",
    "E-value",
];

/// Context for report generation
#[derive(Debug, Clone)]
pub struct ReportContext {
    /// Forward (A vs B) table name or path
    pub forward_name: Option<String>,
    /// Reverse (B vs A) table name or path
    pub reverse_name: Option<String>,
    /// Program name
    pub program: String,
    /// Version string
    pub version: Option<String>,
}

impl Default for ReportContext {
    fn default() -> Self {
        Self {
            forward_name: None,
            reverse_name: None,
            program: "losat-rbh".to_string(),
            version: Some(env!("CARGO_PKG_VERSION").to_string()),
        }
    }
}

/// Format scientific notation with NCBI-style exponent padding
/// (lowercase `e`, explicit sign, at least two exponent digits).
///
/// Reference: ncbi-blast/c++/src/corelib/ncbistr.cpp:2389-2402
fn format_scientific_ncbi(value: f64, precision: usize) -> String {
    let mut raw = format!("{:.*e}", precision, value);
    let exp_pos = match raw.find('e') {
        Some(pos) => pos,
        None => return raw,
    };

    let exp_start = exp_pos + 1;
    if exp_start >= raw.len() {
        return raw;
    }

    if !matches!(raw.as_bytes()[exp_start], b'+' | b'-') {
        raw.insert(exp_start, '+');
    }
    let digits_start = exp_start + 1;
    if raw.len().saturating_sub(digits_start) < 2 {
        raw.insert(digits_start, '0');
    }

    raw
}

/// Format E-value the way blastp tabular output prints it.
///
/// Reference: ncbi-blast/c++/src/objtools/align_format/align_format_util.cpp:965-983
/// Reference: ncbi-blast/c++/src/objtools/align_format/tabular.cpp:1332-1337
pub fn format_evalue_ncbi_tabular(e_value: f64) -> String {
    if e_value == 0.0 || e_value < 1.0e-180 {
        "0.0".to_string()
    } else if e_value < 0.0009 {
        format_scientific_ncbi(e_value, 2)
    } else if e_value < 0.1 {
        format!("{:.3}", e_value)
    } else if e_value < 1.0 {
        format!("{:.2}", e_value)
    } else if e_value < 10.0 {
        format!("{:.1}", e_value)
    } else {
        format!("{:.0}", e_value)
    }
}

/// Format bit score the way blastp prints it.
///
/// Reference: ncbi-blast/c++/src/objtools/align_format/align_format_util.cpp:986-994
pub fn format_bitscore_ncbi(bit_score: f64) -> String {
    if bit_score > 99999.0 {
        format_scientific_ncbi(bit_score, 3)
    } else if bit_score > 99.9 {
        format!("{:.0}", bit_score)
    } else {
        format!("{:.1}", bit_score)
    }
}

/// Write a single aggregated RBH row.
pub fn write_rbh_fields<W: Write>(writer: &mut W, hit: &Hit, config: &OutputConfig) -> io::Result<()> {
    let delim = config.delimiter;
    write!(writer, "{}{}{}", hit.query_id, delim, hit.subject_id)?;
    write!(writer, "{}{:.prec$}", delim, hit.identity, prec = config.identity_decimals)?;
    write!(writer, "{}{}", delim, hit.coverage)?;
    write!(writer, "{}{}", delim, hit.query_length)?;
    write!(writer, "{}{}", delim, hit.subject_length)?;
    write!(writer, "{}{}", delim, hit.length)?;
    write!(writer, "{}{}", delim, format_bitscore_ncbi(hit.bit_score))?;
    write!(writer, "{}{}", delim, format_evalue_ncbi_tabular(hit.e_value))?;
    for value in &hit.metadata {
        write!(writer, "{}{}", delim, value)?;
    }
    writeln!(writer)
}

fn column_names(rbh: &RbhSet) -> Vec<&str> {
    RBH_COLUMNS
        .iter()
        .copied()
        .chain(rbh.metadata_columns().iter().map(String::as_str))
        .collect()
}

/// Write the comment block that precedes an outfmt 7 style RBH table.
///
/// ```text
/// # LOSAT-RBH 0.1.0
/// # Forward: fwd_results.tab
/// # Reverse: rev_results.tab
/// # Fields: query, subject, identity, ...
/// # 42 reciprocal best hits found
/// ```
pub fn write_outfmt7_header<W: Write>(
    writer: &mut W,
    context: &ReportContext,
    columns: &[&str],
    num_pairs: usize,
) -> io::Result<()> {
    let version_str = context.version.as_deref().unwrap_or("0.1.0");
    writeln!(writer, "# {} {}", context.program.to_uppercase(), version_str)?;

    if let Some(ref forward) = context.forward_name {
        writeln!(writer, "# Forward: {}", forward)?;
    }
    if let Some(ref reverse) = context.reverse_name {
        writeln!(writer, "# Reverse: {}", reverse)?;
    }

    if num_pairs > 0 {
        writeln!(writer, "# Fields: {}", columns.join(", "))?;
    }

    writeln!(writer, "# {} reciprocal best hits found", num_pairs)
}

/// Write the resolved RBH set, ordered by query then subject.
pub fn write_rbh_table<W: Write>(
    writer: &mut W,
    rbh: &RbhSet,
    config: &OutputConfig,
    context: &ReportContext,
) -> io::Result<()> {
    let columns = column_names(rbh);
    match config.format {
        OutputFormat::TabularWithComments => {
            write_outfmt7_header(writer, context, &columns, rbh.len())?;
        }
        OutputFormat::Tabular => {
            if config.include_header {
                let delim = config.delimiter.to_string();
                writeln!(writer, "{}", columns.join(delim.as_str()))?;
            }
        }
    }

    for hit in rbh.sorted() {
        write_rbh_fields(writer, hit, config)?;
    }
    Ok(())
}

/// Write the RBH table to `out_path`, or stdout when no path is given.
pub fn write_rbh_output(
    rbh: &RbhSet,
    out_path: Option<&PathBuf>,
    config: &OutputConfig,
    context: &ReportContext,
) -> Result<()> {
    let stdout = io::stdout();
    let mut writer: Box<dyn Write> = if let Some(path) = out_path {
        Box::new(BufWriter::new(File::create(path)?))
    } else {
        Box::new(BufWriter::new(stdout.lock()))
    };
    write_rbh_table(&mut writer, rbh, config, context)?;
    writer.flush()?;
    Ok(())
}

/// Generate a summary of the resolution run.
///
/// `sequences` gives the A and B sequence sets when they are known, which
/// adds the share of each set that found a reciprocal partner.
pub fn generate_summary(
    forward: &HitTable,
    reverse: &HitTable,
    rbh: &RbhSet,
    sequences: Option<(&SequenceSet, &SequenceSet)>,
) -> String {
    let mut summary = String::new();

    summary.push_str(&format!(
        "# Forward hits: {} ({} queries)\n",
        forward.len(),
        forward.distinct_queries()
    ));
    summary.push_str(&format!(
        "# Reverse hits: {} ({} queries)\n",
        reverse.len(),
        reverse.distinct_queries()
    ));
    summary.push_str(&format!("# Reciprocal best hits: {}\n", rbh.len()));

    if !rbh.is_empty() {
        let avg_identity: f64 = rbh.iter().map(|h| h.identity).sum::<f64>() / rbh.len() as f64;
        let min_evalue = rbh.iter().map(|h| h.e_value).fold(f64::INFINITY, f64::min);

        summary.push_str(&format!("# Average identity: {:.1}%\n", avg_identity));
        summary.push_str(&format!("# Best E-value: {:.2e}\n", min_evalue));
    }

    if let Some((set_a, set_b)) = sequences {
        let paired_a = set_a.count_present(rbh.iter().map(|h| h.query_id.as_str()));
        let paired_b = set_b.count_present(rbh.iter().map(|h| h.subject_id.as_str()));
        summary.push_str(&format!(
            "# {}: {} of {} sequences have an RBH\n",
            set_a.name(),
            paired_a,
            set_a.len()
        ));
        summary.push_str(&format!(
            "# {}: {} of {} sequences have an RBH\n",
            set_b.name(),
            paired_b,
            set_b.len()
        ));
    }

    if !rbh.ambiguities().is_empty() {
        summary.push_str(&format!(
            "# Metadata values dropped for {} pair columns\n",
            rbh.ambiguities().len()
        ));
    }

    summary
}
