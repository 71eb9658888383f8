#![allow(dead_code)]

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use {
    async_trait::async_trait,
    serde_json::{Value, json},
    volume_pulse::{
        Currency,
        data::{FetchError, MarketDataProvider, RateProvider},
    },
};

/// Serves a canned ticker body and counts how often it was asked.
pub struct FakeMarket {
    response: Mutex<Result<Value, FetchError>>,
    calls: AtomicUsize,
}

impl FakeMarket {
    pub fn new(response: Result<Value, FetchError>) -> Arc<Self> {
        Arc::new(Self {
            response: Mutex::new(response),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn set_response(&self, response: Result<Value, FetchError>) {
        *self.response.lock().unwrap() = response;
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MarketDataProvider for FakeMarket {
    async fn fetch_tickers(&self) -> Result<Value, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response.lock().unwrap().clone()
    }
}

/// Serves a canned FX body and counts how often it was asked.
pub struct FakeRates {
    response: Result<Value, FetchError>,
    calls: AtomicUsize,
}

impl FakeRates {
    pub fn new(response: Result<Value, FetchError>) -> Arc<Self> {
        Arc::new(Self {
            response,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RateProvider for FakeRates {
    async fn fetch_rates(&self, _base: Currency, _target: Currency) -> Result<Value, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response.clone()
    }
}

pub fn ticker(symbol: &str, last_price: f64, change_pct: f64, quote_volume: f64) -> Value {
    json!({
        "symbol": symbol,
        "lastPrice": format!("{:.8}", last_price),
        "priceChangePercent": format!("{:.3}", change_pct),
        "quoteVolume": format!("{:.2}", quote_volume),
        "volume": "1.0",
        "count": 42
    })
}

/// Fifteen symbols with distinct volumes; SYM14 has the largest.
pub fn fifteen_tickers() -> Value {
    let entries: Vec<Value> = (0..15)
        .map(|i| ticker(&format!("SYM{i}USDT"), 10.0 + i as f64, 0.0, 1_000.0 * (i + 1) as f64))
        .collect();
    Value::Array(entries)
}

pub fn rates_body(code: &str, rate: f64) -> Value {
    json!({ "success": true, "base": "USD", "rates": { code: rate } })
}
