//! Core RBH Logic
//!
//! This module holds the reciprocal best hit resolver. It works on hit
//! tables that are already in memory and performs no I/O of its own.
//!
//! # Structure
//!
//! - `rbh` - reciprocity join and per-pair aggregation

pub mod rbh;

pub use rbh::{resolve_rbh, AggregationAmbiguity, RbhSet};
