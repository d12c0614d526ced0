pub mod common;
pub mod error;
pub mod sequence;

pub mod config;
pub mod post;
pub mod report;

// Layout follows NCBI BLAST's directory structure
pub mod core;
pub mod api;
pub mod blastinput;
pub mod format;

pub use common::{Direction, Hit, HitTable};
pub use error::{RbhError, Result};
