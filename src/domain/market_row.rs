use serde::{Deserialize, Serialize};

/// One symbol's 24h ticker, reduced to the fields the dashboard ranks and classifies on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketRow {
    pub symbol: String,
    pub last_price: f64,
    /// Signed, in percent (e.g. `-4.0` is a 4% drop).
    pub price_change_pct: f64,
    pub quote_volume: f64,
}

impl MarketRow {
    pub fn new(
        symbol: impl Into<String>,
        last_price: f64,
        price_change_pct: f64,
        quote_volume: f64,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            last_price,
            price_change_pct,
            quote_volume,
        }
    }
}
