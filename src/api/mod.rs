//! RBH API Layer
//!
//! This module provides the high-level entry points for running a
//! reciprocal best hit analysis.
//!
//! # Structure
//!
//! - `search_runner` - external blastp invocation behind the `SearchRunner` trait
//! - `local_rbh` - search, load, filter and resolve in sequence

pub mod local_rbh;
pub mod search_runner;

pub use local_rbh::{resolve_files, resolve_tables, run_rbh, run_searches, RbhOutcome, SearchOutputs};
pub use search_runner::{BlastpCommandline, SearchOutput, SearchRequest, SearchRunner};
