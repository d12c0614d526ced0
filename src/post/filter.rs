use crate::common::{Hit, HitTable};

/// Filter hits by E-value threshold
pub fn filter_by_evalue(hits: Vec<Hit>, max_evalue: f64) -> Vec<Hit> {
    hits.into_iter()
        .filter(|h| h.e_value <= max_evalue)
        .collect()
}

/// Filter hits by minimum bit score
pub fn filter_by_bit_score(hits: Vec<Hit>, min_bit_score: f64) -> Vec<Hit> {
    hits.into_iter()
        .filter(|h| h.bit_score >= min_bit_score)
        .collect()
}

/// Filter hits by minimum identity percentage
pub fn filter_by_identity(hits: Vec<Hit>, min_identity: f64) -> Vec<Hit> {
    hits.into_iter()
        .filter(|h| h.identity >= min_identity)
        .collect()
}

/// Filter hits by minimum query coverage percentage
pub fn filter_by_coverage(hits: Vec<Hit>, min_coverage: f64) -> Vec<Hit> {
    hits.into_iter()
        .filter(|h| h.coverage >= min_coverage)
        .collect()
}

/// Configuration for hit filtering ahead of RBH resolution
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterConfig {
    /// Maximum E-value (None = no filter)
    pub max_evalue: Option<f64>,
    /// Minimum bit score (None = no filter)
    pub min_bit_score: Option<f64>,
    /// Minimum identity percentage (None = no filter)
    pub min_identity: Option<f64>,
    /// Minimum query coverage percentage (None = no filter)
    pub min_coverage: Option<f64>,
}

impl FilterConfig {
    pub fn is_active(&self) -> bool {
        self.max_evalue.is_some()
            || self.min_bit_score.is_some()
            || self.min_identity.is_some()
            || self.min_coverage.is_some()
    }
}

/// Apply all configured filters to hits
pub fn apply_filters(hits: Vec<Hit>, config: &FilterConfig) -> Vec<Hit> {
    let mut filtered = hits;

    if let Some(max_ev) = config.max_evalue {
        filtered = filter_by_evalue(filtered, max_ev);
    }

    if let Some(min_bs) = config.min_bit_score {
        filtered = filter_by_bit_score(filtered, min_bs);
    }

    if let Some(min_id) = config.min_identity {
        filtered = filter_by_identity(filtered, min_id);
    }

    if let Some(min_cov) = config.min_coverage {
        filtered = filter_by_coverage(filtered, min_cov);
    }

    filtered
}

/// Filter a whole table in place, logging how many rows were dropped.
pub fn filter_table(table: &mut HitTable, config: &FilterConfig) {
    if !config.is_active() {
        return;
    }
    let before = table.hits.len();
    let hits = std::mem::take(&mut table.hits);
    table.hits = apply_filters(hits, config);
    log::info!(
        "{} table: {} of {} hits pass filters",
        table.direction,
        table.hits.len(),
        before
    );
}
