use {
    eframe::{Frame, Storage, egui::Context},
    serde::{Deserialize, Serialize},
    std::{mem, time::Duration},
};

use crate::{
    Cli,
    app::{AppState, BootstrapState, PhaseView, RunningState},
    config::DASHBOARD,
    domain::Currency,
    engine::{CycleRequest, DashboardEngine},
    ui::{render_bootstrap, setup_custom_visuals},
    utils::AppInstant,
};

#[cfg(debug_assertions)]
use crate::config::DF;

/// Repaint cadence while a fetch is outstanding, so the result shows up promptly.
const IN_FLIGHT_REPAINT: Duration = Duration::from_millis(200);

#[derive(Deserialize, Serialize)]
#[serde(default)]
pub struct App {
    // Operator settings; these persist across sessions.
    pub(crate) show_market_tip: bool,
    pub(crate) show_drop_alert: bool,
    pub(crate) currency: Currency,
    #[serde(skip)]
    pub(crate) conversion_enabled: bool,
    #[serde(skip)]
    pub(crate) engine: Option<DashboardEngine>,
    #[serde(skip)]
    state: AppState,
    #[serde(skip)]
    pub(crate) last_cycle_started: Option<AppInstant>,
    #[serde(skip)]
    pub(crate) refresh_requested: bool,
}

impl Default for App {
    fn default() -> Self {
        Self {
            show_market_tip: true,
            show_drop_alert: true,
            currency: Currency::default(),
            conversion_enabled: true,
            engine: None,
            state: AppState::default(),
            last_cycle_started: None,
            refresh_requested: false,
        }
    }
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let mut app: App = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            Self::default()
        };

        app.apply_cli(&args);

        let mut bootstrap = BootstrapState::default();
        match DashboardEngine::new() {
            Ok(engine) => app.engine = Some(engine),
            Err(e) => {
                log::error!("Failed to start dashboard engine: {:#}", e);
                bootstrap.engine_error = Some(e.to_string());
            }
        }
        app.state = AppState::Bootstrapping(bootstrap);
        app
    }

    /// Command-line flags win over whatever was persisted.
    pub(crate) fn apply_cli(&mut self, args: &Cli) {
        self.conversion_enabled = !args.base_only;
        if let Some(currency) = args.currency {
            self.currency = currency;
        }
    }

    pub(crate) fn cycle_request(&self) -> CycleRequest {
        CycleRequest {
            currency: self.currency,
            conversion_enabled: self.conversion_enabled,
            show_market_tip: self.show_market_tip,
            show_drop_alert: self.show_drop_alert,
        }
    }

    /// Collect a finished fetch, then start the next one if the timer or an interaction asks.
    pub(crate) fn drive_refresh_cycle(&mut self) {
        let request = self.cycle_request();
        let Some(engine) = &mut self.engine else {
            return;
        };
        engine.poll();

        let now = AppInstant::now();
        let due = self
            .last_cycle_started
            .is_none_or(|t| now.duration_since(t) >= DASHBOARD.refresh_interval);

        if engine.is_cycle_in_flight() {
            // A tick that lands mid-fetch is dropped, not queued.
            if due && !self.refresh_requested {
                #[cfg(debug_assertions)]
                if DF.log_refresh_cycle {
                    log::info!("Refresh tick skipped, previous cycle still in flight");
                }
                self.last_cycle_started = Some(now);
            }
            return;
        }

        if (due || self.refresh_requested) && engine.begin_cycle(request) {
            self.last_cycle_started = Some(now);
            self.refresh_requested = false;
        }
    }

    fn schedule_repaint(&self, ctx: &Context) {
        let in_flight = self
            .engine
            .as_ref()
            .is_some_and(DashboardEngine::is_cycle_in_flight);
        if in_flight || self.refresh_requested {
            ctx.request_repaint_after(IN_FLIGHT_REPAINT);
            return;
        }
        let until_due = self
            .last_cycle_started
            .map(|t| DASHBOARD.refresh_interval.saturating_sub(t.elapsed()))
            .unwrap_or_default();
        // Keep the countdown in the status bar ticking.
        ctx.request_repaint_after(until_due.min(Duration::from_secs(1)));
    }

    pub(crate) fn tick_bootstrap_state(
        &mut self,
        ctx: &Context,
        state: &mut BootstrapState,
    ) -> AppState {
        self.drive_refresh_cycle();

        if self.engine.as_ref().is_some_and(|e| e.view().is_some()) {
            ctx.request_repaint();
            return AppState::Running(RunningState);
        }

        render_bootstrap(ctx, state);
        if state.engine_error.is_none() {
            ctx.request_repaint_after(IN_FLIGHT_REPAINT);
        }
        AppState::Bootstrapping(state.clone())
    }

    /// RUNNING PHASE MAIN LOOP
    pub(crate) fn tick_running_state(&mut self, ctx: &Context) {
        self.drive_refresh_cycle();

        self.render_top_panel(ctx);
        self.render_side_panel(ctx);
        self.render_status_panel(ctx);
        self.render_central_panel(ctx);

        self.schedule_repaint(ctx);
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);
        let current = mem::take(&mut self.state);
        self.state = match current {
            AppState::Bootstrapping(mut s) => s.tick(self, ctx),
            AppState::Running(mut s) => s.tick(self, ctx),
        };
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        #[cfg(debug_assertions)]
        if DF.log_refresh_cycle {
            log::info!(
                "💾 SAVE [App]: tip={} alert={} currency={}",
                self.show_market_tip,
                self.show_drop_alert,
                self.currency
            );
        }
        eframe::set_value(storage, eframe::APP_KEY, self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{FetchError, MarketDataProvider, RateProvider};
    use {
        async_trait::async_trait,
        serde_json::{Value, json},
        std::{sync::Arc, thread},
        tokio::sync::Notify,
    };

    /// Ticker feed that holds each request until the test lets it through.
    struct GatedMarket {
        gate: Notify,
    }

    #[async_trait]
    impl MarketDataProvider for GatedMarket {
        async fn fetch_tickers(&self) -> Result<Value, FetchError> {
            self.gate.notified().await;
            Ok(json!([{"symbol": "BTCUSDT", "lastPrice": "65000", "priceChangePercent": "1.2",
                        "quoteVolume": "2000000000"}]))
        }
    }

    struct NoRates;

    #[async_trait]
    impl RateProvider for NoRates {
        async fn fetch_rates(&self, _base: Currency, _target: Currency) -> Result<Value, FetchError> {
            Err(FetchError::Timeout)
        }
    }

    fn engine(app: &App) -> &DashboardEngine {
        app.engine.as_ref().unwrap()
    }

    fn drive_until(app: &mut App, done: impl Fn(&App) -> bool) {
        for _ in 0..500 {
            app.drive_refresh_cycle();
            if done(app) {
                return;
            }
            thread::sleep(Duration::from_millis(10));
        }
        panic!("refresh cycle did not reach the expected state");
    }

    fn cli(base_only: bool, currency: Option<Currency>) -> Cli {
        Cli {
            base_only,
            currency,
        }
    }

    #[test]
    fn persisted_settings_round_trip_without_runtime_state() {
        let app = App {
            show_market_tip: false,
            currency: Currency::Gbp,
            refresh_requested: true,
            ..App::default()
        };
        let json = serde_json::to_string(&app).unwrap();
        let restored: App = serde_json::from_str(&json).unwrap();

        assert!(!restored.show_market_tip);
        assert!(restored.show_drop_alert);
        assert_eq!(restored.currency, Currency::Gbp);
        assert!(!restored.refresh_requested);
        assert!(restored.conversion_enabled);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let restored: App = serde_json::from_str(r#"{"currency":"Eur"}"#).unwrap();
        assert_eq!(restored.currency, Currency::Eur);
        assert!(restored.show_market_tip && restored.show_drop_alert);
    }

    #[test]
    fn cli_overrides_persisted_currency() {
        let mut app = App {
            currency: Currency::Jpy,
            ..App::default()
        };
        app.apply_cli(&cli(false, Some(Currency::Inr)));
        assert_eq!(app.currency, Currency::Inr);

        app.apply_cli(&cli(false, None));
        assert_eq!(app.currency, Currency::Inr);
    }

    #[test]
    fn base_only_pins_requests_to_base_currency() {
        let mut app = App {
            currency: Currency::Eur,
            ..App::default()
        };
        app.apply_cli(&cli(true, None));
        let request = app.cycle_request();
        assert!(!request.conversion_enabled);
        assert_eq!(request.display_currency(), Currency::Usd);
    }

    #[test]
    fn refresh_scheduler_drops_ticks_and_holds_interactions_while_in_flight() {
        let market = Arc::new(GatedMarket { gate: Notify::new() });
        let mut app = App {
            engine: Some(DashboardEngine::with_providers(market.clone(), Arc::new(NoRates)).unwrap()),
            ..App::default()
        };

        // First call is due immediately and starts a cycle that stays gated.
        app.drive_refresh_cycle();
        assert!(engine(&app).is_cycle_in_flight());
        let first_start = app.last_cycle_started.unwrap();

        // An interaction while in flight is held, not started and not treated as a tick.
        app.refresh_requested = true;
        app.drive_refresh_cycle();
        assert!(engine(&app).is_cycle_in_flight());
        assert!(app.refresh_requested);
        assert_eq!(app.last_cycle_started, Some(first_start));
        assert_eq!(engine(&app).cycles_completed(), 0);

        // A timer tick that lands mid-flight is dropped and restarts the interval.
        let overdue = AppInstant::now()
            .checked_sub(DASHBOARD.refresh_interval + Duration::from_secs(1))
            .unwrap();
        app.last_cycle_started = Some(overdue);
        app.refresh_requested = false;
        app.drive_refresh_cycle();
        assert!(app.last_cycle_started.unwrap() > overdue);
        assert!(engine(&app).is_cycle_in_flight());
        assert_eq!(engine(&app).cycles_completed(), 0);

        // Once the fetch lands, the held interaction starts exactly one more cycle.
        app.refresh_requested = true;
        market.gate.notify_one();
        drive_until(&mut app, |app| engine(app).cycles_completed() == 1);
        assert!(engine(&app).is_cycle_in_flight());
        assert!(!app.refresh_requested);

        drive_until(&mut app, |app| engine(app).cycles_completed() == 2);
        for _ in 0..5 {
            app.drive_refresh_cycle();
        }
        assert!(!engine(&app).is_cycle_in_flight());
        assert_eq!(engine(&app).cycles_completed(), 2);
        assert!(engine(&app).view().is_some_and(|v| !v.is_waiting()));
    }
}
