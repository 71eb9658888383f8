use std::sync::Arc;

use {anyhow::Result, poll_promise::Promise, tokio::runtime::Runtime};

use crate::{
    data::{
        BinanceTickerProvider, ExchangeRateHostProvider, MarketDataFetcher, MarketDataProvider,
        RateFetcher, RateProvider,
    },
    models::HistoryStore,
    utils::now_local,
};

#[cfg(debug_assertions)]
use crate::config::DF;

use super::{
    messages::{CycleFetch, CycleRequest},
    view::{DashboardView, complete_cycle},
    worker,
};

/// Owns the network stack, the rolling history and the latest view.
///
/// The fetch half of a cycle runs on the engine's own runtime; the UI thread only polls.
/// At most one cycle is in flight at a time.
pub struct DashboardEngine {
    runtime: Runtime,
    market: Arc<MarketDataFetcher>,
    rates: Arc<RateFetcher>,
    history: HistoryStore,
    in_flight: Option<(CycleRequest, Promise<CycleFetch>)>,
    view: Option<DashboardView>,
    cycles_completed: u64,
}

impl DashboardEngine {
    /// Engine wired to the live Binance and exchangerate.host endpoints.
    pub fn new() -> Result<Self> {
        let market: Arc<dyn MarketDataProvider> = Arc::new(BinanceTickerProvider::new()?);
        let rates: Arc<dyn RateProvider> = Arc::new(ExchangeRateHostProvider::new()?);
        Self::with_providers(market, rates)
    }

    pub fn with_providers(
        market: Arc<dyn MarketDataProvider>,
        rates: Arc<dyn RateProvider>,
    ) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("pulse-fetch")
            .enable_all()
            .build()?;

        Ok(Self {
            runtime,
            market: Arc::new(MarketDataFetcher::new(market)),
            rates: Arc::new(RateFetcher::new(rates)),
            history: HistoryStore::default(),
            in_flight: None,
            view: None,
            cycles_completed: 0,
        })
    }

    /// Start a cycle in the background. Returns `false` if one is already running.
    pub fn begin_cycle(&mut self, request: CycleRequest) -> bool {
        if self.in_flight.is_some() {
            return false;
        }

        #[cfg(debug_assertions)]
        if DF.log_refresh_cycle {
            log::info!(
                "Refresh cycle #{} started ({})",
                self.cycles_completed + 1,
                request.display_currency()
            );
        }

        let (sender, promise) = Promise::new();
        let market = Arc::clone(&self.market);
        let rates = Arc::clone(&self.rates);
        self.runtime.spawn(async move {
            let fetch = worker::run_fetch_phase(&market, &rates, request).await;
            sender.send(fetch);
        });
        self.in_flight = Some((request, promise));
        true
    }

    /// Finish the in-flight cycle if its fetch is done. Returns `true` when the view changed.
    pub fn poll(&mut self) -> bool {
        let Some((request, promise)) = self.in_flight.take() else {
            return false;
        };
        match promise.try_take() {
            Ok(fetch) => {
                self.complete_cycle(fetch, &request);
                true
            }
            Err(promise) => {
                self.in_flight = Some((request, promise));
                false
            }
        }
    }

    pub fn is_cycle_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Run one whole cycle on the calling thread. Any background cycle is abandoned first.
    pub fn run_cycle_blocking(&mut self, request: CycleRequest) -> &DashboardView {
        self.in_flight = None;
        let fetch = self.runtime.block_on(worker::run_fetch_phase(
            &self.market,
            &self.rates,
            request,
        ));
        self.complete_cycle(fetch, &request)
    }

    pub fn view(&self) -> Option<&DashboardView> {
        self.view.as_ref()
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn cycles_completed(&self) -> u64 {
        self.cycles_completed
    }

    /// Synchronous half of a cycle: fold a finished fetch into history and the current view.
    pub fn complete_cycle(&mut self, fetch: CycleFetch, request: &CycleRequest) -> &DashboardView {
        let view = complete_cycle(&mut self.history, fetch, request, now_local());
        self.cycles_completed += 1;
        self.view.insert(view)
    }
}
