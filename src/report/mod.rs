//! Reading search tables and reporting RBH results
//!
//! # Structure
//!
//! - `hit_table` - blastp tabular input (outfmt 6/7)
//! - `outfmt6` - RBH table writer, number formatting and run summary

pub mod hit_table;
pub mod outfmt6;

pub use hit_table::{parse_hit_table, read_hit_table};
pub use outfmt6::{generate_summary, write_rbh_output, write_rbh_table, ReportContext};
