use crate::data::{MarketDataFetcher, RateFetcher};

use super::messages::{CycleFetch, CycleRequest};

/// Network half of a refresh cycle: snapshot first, then the display-currency rate.
pub(crate) async fn run_fetch_phase(
    market: &MarketDataFetcher,
    rates: &RateFetcher,
    request: CycleRequest,
) -> CycleFetch {
    let snapshot = market.fetch().await;
    let rate = rates.resolve(request.display_currency()).await;
    CycleFetch { snapshot, rate }
}
