//! Local RBH Run
//!
//! Entry points that chain the steps: forward search, reverse search, table
//! loading, optional filtering, and reciprocal resolution. Each step runs
//! strictly after the previous one.

use std::path::{Path, PathBuf};

use crate::common::{Direction, HitTable};
use crate::config::RbhConfig;
use crate::core::{resolve_rbh, RbhSet};
use crate::error::Result;
use crate::post::filter_table;
use crate::report::read_hit_table;

use super::search_runner::{SearchRequest, SearchRunner};

/// Everything a completed run produced.
#[derive(Debug, Clone)]
pub struct RbhOutcome {
    pub forward: HitTable,
    pub reverse: HitTable,
    pub rbh: RbhSet,
}

/// Paths of the two search tables written by a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutputs {
    pub forward: PathBuf,
    pub reverse: PathBuf,
}

/// Run the forward (A against B) and then the reverse (B against A) search.
pub fn run_searches<R: SearchRunner + ?Sized>(
    runner: &R,
    set_a: &Path,
    set_b: &Path,
    outputs: &SearchOutputs,
) -> Result<()> {
    let requests = [
        SearchRequest {
            direction: Direction::Forward,
            query: set_a.to_path_buf(),
            subject: set_b.to_path_buf(),
            out: outputs.forward.clone(),
        },
        SearchRequest {
            direction: Direction::Reverse,
            query: set_b.to_path_buf(),
            subject: set_a.to_path_buf(),
            out: outputs.reverse.clone(),
        },
    ];
    for request in &requests {
        runner.search(request)?;
    }
    Ok(())
}

/// Resolve reciprocal best hits from two tables already in memory.
pub fn resolve_tables(
    mut forward: HitTable,
    mut reverse: HitTable,
    config: &RbhConfig,
) -> Result<RbhOutcome> {
    filter_table(&mut forward, &config.filter);
    filter_table(&mut reverse, &config.filter);

    let rbh = resolve_rbh(&forward, &reverse, config.aggregation)?;
    log::info!("{} reciprocal best hits", rbh.len());
    Ok(RbhOutcome {
        forward,
        reverse,
        rbh,
    })
}

/// Load precomputed forward and reverse tables and resolve them.
pub fn resolve_files(forward: &Path, reverse: &Path, config: &RbhConfig) -> Result<RbhOutcome> {
    let forward = read_hit_table(forward, Direction::Forward, &config.schema)?;
    let reverse = read_hit_table(reverse, Direction::Reverse, &config.schema)?;
    resolve_tables(forward, reverse, config)
}

/// Search both directions, then resolve the tables the searches wrote.
pub fn run_rbh<R: SearchRunner + ?Sized>(
    runner: &R,
    set_a: &Path,
    set_b: &Path,
    outputs: &SearchOutputs,
    config: &RbhConfig,
) -> Result<RbhOutcome> {
    run_searches(runner, set_a, set_b, outputs)?;
    resolve_files(&outputs.forward, &outputs.reverse, config)
}
