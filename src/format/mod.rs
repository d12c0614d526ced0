//! Tabular Format Handling
//!
//! Reference: ncbi-blast/c++/src/objtools/align_format/tabular.cpp
//!
//! This module describes the column layout of blastp tabular output
//! (outfmt 6/7) as it is requested on the command line and read back.
//!
//! # Structure
//!
//! - `tabular` - outfmt specification parsing and table schema

pub mod tabular;

pub use tabular::*;
