//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Start/finish of every refresh cycle, with row counts.
    pub log_refresh_cycle: bool,

    /// Cache hits and misses in the market data fetcher.
    pub log_cache: bool,

    /// Live FX rates as they arrive (fallbacks are always logged).
    pub log_rates: bool,

    pub log_history: bool,
}

pub const DF: LogFlags = LogFlags {
    log_refresh_cycle: true,
    log_cache: false,
    log_rates: false,
    log_history: false,
};
