//! Reciprocal best hit resolution
//!
//! Equivalent to outer-joining the forward table with the `(query, subject)`
//! projection of the reverse table on `forward.subject == reverse.query`,
//! keeping rows where `forward.query == reverse.subject`, and collapsing each
//! `(query, subject)` group to its column-wise maxima. Unmatched rows from
//! either side of the join never satisfy the reciprocity test, so only the
//! reverse pairs need to be indexed.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::common::{compare_hit_keys, Direction, Hit, HitTable};
use crate::config::AggregationPolicy;
use crate::error::{RbhError, Result};

/// A metadata column that held differing values within one pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregationAmbiguity {
    pub query: String,
    pub subject: String,
    pub column: String,
    /// Distinct values seen, in input order
    pub values: Vec<String>,
}

/// Resolved reciprocal best hits keyed by `(query, subject)`.
#[derive(Debug, Clone, Default)]
pub struct RbhSet {
    pairs: FxHashMap<(String, String), Hit>,
    metadata_columns: Vec<String>,
    ambiguities: Vec<AggregationAmbiguity>,
}

impl RbhSet {
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn get(&self, query: &str, subject: &str) -> Option<&Hit> {
        self.pairs.get(&(query.to_string(), subject.to_string()))
    }

    pub fn contains(&self, query: &str, subject: &str) -> bool {
        self.get(query, subject).is_some()
    }

    /// Aggregated rows in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Hit> {
        self.pairs.values()
    }

    /// Aggregated rows ordered by query id, then subject id.
    pub fn sorted(&self) -> Vec<&Hit> {
        let mut rows: Vec<&Hit> = self.pairs.values().collect();
        rows.sort_by(|a, b| compare_hit_keys(a, b));
        rows
    }

    /// Names of the metadata columns carried by each row.
    pub fn metadata_columns(&self) -> &[String] {
        &self.metadata_columns
    }

    /// Metadata conflicts that were blanked out during aggregation.
    pub fn ambiguities(&self) -> &[AggregationAmbiguity] {
        &self.ambiguities
    }
}

/// Running aggregate for one `(query, subject)` group.
struct PairAccumulator {
    hit: Hit,
    /// Distinct values per metadata column
    metadata_values: Vec<Vec<String>>,
}

impl PairAccumulator {
    fn new(hit: &Hit) -> Self {
        Self {
            metadata_values: hit.metadata.iter().map(|v| vec![v.clone()]).collect(),
            hit: hit.clone(),
        }
    }

    fn absorb(&mut self, hit: &Hit) {
        self.hit.absorb_max(hit);
        for (seen, value) in self.metadata_values.iter_mut().zip(&hit.metadata) {
            if !seen.contains(value) {
                seen.push(value.clone());
            }
        }
    }
}

/// Resolve the reciprocal best hits between a forward (A→B) and a reverse
/// (B→A) hit table.
///
/// Fails with [`RbhError::EmptyInput`] when either table has no rows. A
/// populated pair of tables with no reciprocal hits yields an empty set.
pub fn resolve_rbh(
    forward: &HitTable,
    reverse: &HitTable,
    policy: AggregationPolicy,
) -> Result<RbhSet> {
    if forward.is_empty() {
        return Err(RbhError::EmptyInput {
            direction: Direction::Forward,
        });
    }
    if reverse.is_empty() {
        return Err(RbhError::EmptyInput {
            direction: Direction::Reverse,
        });
    }

    let reverse_pairs: FxHashSet<(&str, &str)> = reverse.hits.iter().map(Hit::key).collect();

    let mut groups: FxHashMap<(String, String), PairAccumulator> = FxHashMap::default();
    let mut reciprocal_rows = 0usize;
    for hit in &forward.hits {
        if !reverse_pairs.contains(&(hit.subject_id.as_str(), hit.query_id.as_str())) {
            continue;
        }
        reciprocal_rows += 1;
        groups
            .entry((hit.query_id.clone(), hit.subject_id.clone()))
            .and_modify(|acc| acc.absorb(hit))
            .or_insert_with(|| PairAccumulator::new(hit));
    }

    log::debug!(
        "{} of {} forward rows are reciprocal, {} distinct pairs",
        reciprocal_rows,
        forward.len(),
        groups.len()
    );

    // Sorted so conflicts are reported in a stable order.
    let mut keys: Vec<(String, String)> = groups.keys().cloned().collect();
    keys.sort();

    let mut pairs = FxHashMap::default();
    let mut ambiguities = Vec::new();
    for key in keys {
        let Some(acc) = groups.remove(&key) else {
            continue;
        };
        let mut hit = acc.hit;
        for (i, values) in acc.metadata_values.into_iter().enumerate() {
            if values.len() < 2 {
                continue;
            }
            let column = forward
                .metadata_columns
                .get(i)
                .cloned()
                .unwrap_or_else(|| format!("column{}", i + 1));
            if policy == AggregationPolicy::Strict {
                return Err(RbhError::AggregationConflict {
                    query: key.0,
                    subject: key.1,
                    column,
                });
            }
            log::warn!(
                "pair ({}, {}): metadata column '{}' has {} differing values, dropped",
                key.0,
                key.1,
                column,
                values.len()
            );
            hit.metadata[i].clear();
            ambiguities.push(AggregationAmbiguity {
                query: key.0.clone(),
                subject: key.1.clone(),
                column,
                values,
            });
        }
        pairs.insert(key, hit);
    }

    Ok(RbhSet {
        pairs,
        metadata_columns: forward.metadata_columns.clone(),
        ambiguities,
    })
}
