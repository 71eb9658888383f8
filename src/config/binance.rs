use std::time::Duration;

/// REST endpoint for the rolling 24h ticker of every symbol.
pub struct TickerEndpoint {
    pub url: &'static str,
    pub timeout: Duration,
}

pub struct BinanceConfig {
    pub ticker_24hr: TickerEndpoint,
    /// Repeat fetches inside this window are served from the cache.
    pub cache_ttl: Duration,
    /// How many symbols (ranked by quote volume) make it into a snapshot.
    pub top_n: usize,
}

pub const BINANCE: BinanceConfig = BinanceConfig {
    ticker_24hr: TickerEndpoint {
        url: "https://api.binance.com/api/v3/ticker/24hr",
        timeout: Duration::from_secs(10),
    },
    cache_ttl: Duration::from_secs(10),
    top_n: 10,
};
