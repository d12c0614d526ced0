//! Unit test infrastructure for losat-rbh
//!
//! Tests are organized by concern:
//! - `args` - Command line parsing for `run` and `resolve`
//! - `resolver` - Reciprocal best hit resolution properties
//! - `report` - Reading search tables from disk and writing RBH tables
//! - `pipeline` - End-to-end runs through a fake search runner

pub mod helpers;

mod args;
mod report;
