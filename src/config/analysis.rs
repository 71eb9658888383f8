//! Fixed cutoffs for the trend heuristics. Every comparison against these is strict.

pub struct ClassifierThresholds {
    /// Change (%) a row must beat to be suggested as trending up...
    pub trending_up_change_pct: f64,
    /// ...while also trading more than this much quote volume.
    pub trending_up_min_quote_volume: f64,
    /// Change (%) below which a row is flagged as falling.
    pub falling_change_pct: f64,
    pub likely_up_change_pct: f64,
    pub likely_down_change_pct: f64,
}

pub const CLASSIFIER: ClassifierThresholds = ClassifierThresholds {
    trending_up_change_pct: 2.0,
    trending_up_min_quote_volume: 100_000_000.0,
    falling_change_pct: -3.0,
    likely_up_change_pct: 3.0,
    likely_down_change_pct: -3.0,
};
