use std::collections::{HashMap, VecDeque};

use crate::config::DASHBOARD;

#[cfg(debug_assertions)]
use crate::config::DF;

/// Rolling per-symbol price windows for one dashboard session.
///
/// Symbols are iterated in the order they were first seen. A symbol that drops out of the
/// snapshot keeps its last window; nothing is ever evicted.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    window: usize,
    order: Vec<String>,
    series: HashMap<String, VecDeque<f64>>,
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::with_window(DASHBOARD.history_window)
    }
}

impl HistoryStore {
    pub fn with_window(window: usize) -> Self {
        Self {
            window: window.max(1),
            order: Vec::new(),
            series: HashMap::new(),
        }
    }

    pub fn window(&self) -> usize {
        self.window
    }

    /// Append one sample per symbol. Symbols not in `samples` are left untouched.
    pub fn record<'a, I>(&mut self, samples: I)
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        for (symbol, price) in samples {
            self.push(symbol, price);
        }

        #[cfg(debug_assertions)]
        if DF.log_history {
            log::info!("History now tracks {} symbols", self.order.len());
        }
    }

    pub fn push(&mut self, symbol: &str, price: f64) {
        if !self.series.contains_key(symbol) {
            self.order.push(symbol.to_owned());
        }
        let window = self.window;
        let prices = self
            .series
            .entry(symbol.to_owned())
            .or_insert_with(|| VecDeque::with_capacity(window));
        prices.push_back(price);
        while prices.len() > window {
            prices.pop_front();
        }
    }

    pub fn series(&self, symbol: &str) -> Option<&VecDeque<f64>> {
        self.series.get(symbol)
    }

    /// Symbols in first-seen order, with their windows (oldest sample first).
    pub fn iter(&self) -> impl Iterator<Item = (&str, &VecDeque<f64>)> {
        self.order
            .iter()
            .filter_map(|symbol| self.series.get(symbol).map(|p| (symbol.as_str(), p)))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
