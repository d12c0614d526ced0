/// How metadata columns are collapsed when several hits share a pair.
///
/// Numeric columns always take the column-wise maximum; this only governs
/// non-numeric columns outside the (query, subject) key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AggregationPolicy {
    /// Keep constant values, blank out conflicting ones and warn
    #[default]
    Drop,
    /// Conflicting values abort resolution
    Strict,
}

impl std::str::FromStr for AggregationPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "drop" | "default" => Ok(AggregationPolicy::Drop),
            "strict" => Ok(AggregationPolicy::Strict),
            _ => Err(format!(
                "Unknown aggregation policy: {}. Use 'drop' or 'strict'",
                s
            )),
        }
    }
}

impl std::fmt::Display for AggregationPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AggregationPolicy::Drop => f.write_str("drop"),
            AggregationPolicy::Strict => f.write_str("strict"),
        }
    }
}
