//! Command-Line Input Handling
//!
//! Reference: ncbi-blast/c++/src/algo/blast/blastinput/
//!
//! Argument definitions for the `run` and `resolve` subcommands and their
//! conversion into library configuration.
//!
//! # Structure
//!
//! - `blast_args` - defaults shared by both subcommands
//! - `rbh_args` - clap argument structs

pub mod blast_args;
pub mod rbh_args;

pub use rbh_args::{ResolveArgs, ResolveOptions, RunArgs};
