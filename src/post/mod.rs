//! Post-processing of search hits before reciprocal resolution

pub mod filter;

pub use filter::{apply_filters, filter_table, FilterConfig};
