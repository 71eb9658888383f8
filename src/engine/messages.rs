use crate::{
    config::FX,
    data::{FetchError, RateQuote},
    domain::Currency,
    models::MarketSnapshot,
};

/// Operator settings a refresh cycle runs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleRequest {
    pub currency: Currency,
    /// When false every price stays in the base currency and no FX lookup happens.
    pub conversion_enabled: bool,
    pub show_market_tip: bool,
    pub show_drop_alert: bool,
}

impl Default for CycleRequest {
    fn default() -> Self {
        Self {
            currency: Currency::default(),
            conversion_enabled: true,
            show_market_tip: true,
            show_drop_alert: true,
        }
    }
}

impl CycleRequest {
    /// The currency prices are actually displayed in for this cycle.
    pub fn display_currency(&self) -> Currency {
        if self.conversion_enabled {
            self.currency
        } else {
            FX.base
        }
    }
}

/// Everything the network phase of a cycle produced.
#[derive(Debug, Clone)]
pub struct CycleFetch {
    pub snapshot: Result<MarketSnapshot, FetchError>,
    pub rate: RateQuote,
}
