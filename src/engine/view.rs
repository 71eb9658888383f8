use {
    chrono::{DateTime, Local},
    itertools::Itertools,
};

use crate::{
    analysis::{Prediction, Suggestion, format_change, predict_movement, suggest_investment},
    config::DASHBOARD,
    data::RateQuote,
    domain::{Currency, MarketRow},
    models::{HistoryStore, MarketSnapshot},
};

use super::messages::{CycleFetch, CycleRequest};

#[cfg(debug_assertions)]
use crate::config::DF;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    Warning,
    Error,
}

/// Non-blocking message for the operator.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// A snapshot row with its heuristics and display-currency values attached.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedRow {
    pub row: MarketRow,
    pub change_label: String,
    pub suggestion: Suggestion,
    pub prediction: Prediction,
    pub converted_price: f64,
    pub converted_volume: f64,
}

impl ClassifiedRow {
    pub fn classify(row: MarketRow, rate: f64) -> Self {
        Self {
            change_label: format_change(row.price_change_pct),
            suggestion: suggest_investment(&row),
            prediction: predict_movement(&row),
            converted_price: row.last_price * rate,
            converted_volume: row.quote_volume * rate,
            row,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.row.symbol
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    MarketTip,
    DropAlert,
}

impl BannerKind {
    fn watches(self) -> Prediction {
        match self {
            BannerKind::MarketTip => Prediction::LikelyUp,
            BannerKind::DropAlert => Prediction::LikelyDown,
        }
    }
}

/// Market tip / drop alert. With no matching symbols it renders as a placeholder.
#[derive(Debug, Clone, PartialEq)]
pub struct Banner {
    pub kind: BannerKind,
    pub symbols: Vec<String>,
}

impl Banner {
    pub fn collect(kind: BannerKind, rows: &[ClassifiedRow]) -> Self {
        let symbols = rows
            .iter()
            .filter(|r| r.prediction == kind.watches())
            .map(|r| r.symbol().to_string())
            .collect();
        Self { kind, symbols }
    }

    pub fn is_placeholder(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn level(&self) -> NoticeLevel {
        match (self.kind, self.is_placeholder()) {
            (_, true) => NoticeLevel::Info,
            (BannerKind::MarketTip, false) => NoticeLevel::Success,
            (BannerKind::DropAlert, false) => NoticeLevel::Warning,
        }
    }

    pub fn message(&self) -> String {
        let coins = self.symbols.iter().join(", ");
        match (self.kind, self.is_placeholder()) {
            (BannerKind::MarketTip, true) => "No strong upward trends right now.".to_string(),
            (BannerKind::MarketTip, false) => {
                format!("Watch or buy: {} (trending up)", coins)
            }
            (BannerKind::DropAlert, true) => "No sharp drops detected.".to_string(),
            (BannerKind::DropAlert, false) => {
                format!("Falling coins: {}. Watch out.", coins)
            }
        }
    }
}

/// One symbol's rolling window, oldest sample first. X is the sample index.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceChart {
    pub symbol: String,
    pub prices: Vec<f64>,
}

impl PriceChart {
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.prices
            .iter()
            .enumerate()
            .map(|(i, &p)| [i as f64, p])
            .collect()
    }
}

/// Presentation model of one completed refresh cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub currency: Currency,
    pub rate: RateQuote,
    pub rows: Vec<ClassifiedRow>,
    pub market_tip: Option<Banner>,
    pub drop_alert: Option<Banner>,
    pub charts: Vec<PriceChart>,
    pub notices: Vec<Notice>,
    pub refreshed_at: DateTime<Local>,
}

impl DashboardView {
    /// No usable data arrived this cycle; nothing but notices should be drawn.
    pub fn is_waiting(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn banners(&self) -> impl Iterator<Item = &Banner> {
        self.market_tip.iter().chain(self.drop_alert.iter())
    }
}

/// Synchronous half of a refresh cycle: classify, convert, extend history, build the view.
///
/// An empty or failed snapshot yields a waiting view and leaves `history` untouched.
pub fn complete_cycle(
    history: &mut HistoryStore,
    fetch: CycleFetch,
    request: &CycleRequest,
    refreshed_at: DateTime<Local>,
) -> DashboardView {
    let mut notices = Vec::new();
    if let Some(warning) = &fetch.rate.warning {
        notices.push(Notice::warning(warning.clone()));
    }

    let snapshot = fetch.snapshot.unwrap_or_else(|e| {
        notices.push(Notice::error(format!("Error fetching Binance data: {}", e)));
        MarketSnapshot::empty()
    });

    let rate = fetch.rate.rate;
    let rows: Vec<ClassifiedRow> = snapshot
        .into_rows()
        .into_iter()
        .map(|row| ClassifiedRow::classify(row, rate))
        .collect();

    let mut view = DashboardView {
        currency: request.display_currency(),
        rate: fetch.rate,
        rows,
        market_tip: None,
        drop_alert: None,
        charts: Vec::new(),
        notices,
        refreshed_at,
    };
    if view.is_waiting() {
        #[cfg(debug_assertions)]
        if DF.log_refresh_cycle {
            log::info!("Refresh cycle finished without data");
        }
        return view;
    }

    history.record(view.rows.iter().map(|r| (r.symbol(), r.converted_price)));

    view.market_tip = request
        .show_market_tip
        .then(|| Banner::collect(BannerKind::MarketTip, &view.rows));
    view.drop_alert = request
        .show_drop_alert
        .then(|| Banner::collect(BannerKind::DropAlert, &view.rows));
    view.charts = history
        .iter()
        .take(DASHBOARD.max_charts)
        .map(|(symbol, prices)| PriceChart {
            symbol: symbol.to_string(),
            prices: prices.iter().copied().collect(),
        })
        .collect();

    #[cfg(debug_assertions)]
    if DF.log_refresh_cycle {
        log::info!(
            "Refresh cycle finished: {} rows, {} charts, rate {} ({:?})",
            view.rows.len(),
            view.charts.len(),
            view.rate.rate,
            view.rate.source
        );
    }
    view
}
