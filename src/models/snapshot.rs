use serde::{Deserialize, Serialize};

use crate::domain::MarketRow;

/// The highest quote-volume rows of one fetch, sorted by quote volume descending.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    rows: Vec<MarketRow>,
}

impl MarketSnapshot {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Rank `rows` by quote volume (highest first) and keep the first `top_n`.
    pub fn top_by_quote_volume(mut rows: Vec<MarketRow>, top_n: usize) -> Self {
        rows.sort_by(|a, b| b.quote_volume.total_cmp(&a.quote_volume));
        rows.truncate(top_n);
        Self { rows }
    }

    pub fn rows(&self) -> &[MarketRow] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<MarketRow> {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(symbol: &str, quote_volume: f64) -> MarketRow {
        MarketRow::new(symbol, 1.0, 0.0, quote_volume)
    }

    #[test]
    fn keeps_top_n_sorted_descending() {
        let rows = (0..25).map(|i| row(&format!("S{i}"), (i * 7 % 25) as f64)).collect();
        let snapshot = MarketSnapshot::top_by_quote_volume(rows, 10);

        assert_eq!(snapshot.len(), 10);
        assert!(
            snapshot
                .rows()
                .windows(2)
                .all(|w| w[0].quote_volume >= w[1].quote_volume)
        );
        assert_eq!(snapshot.rows()[0].quote_volume, 24.0);
    }

    #[test]
    fn fewer_rows_than_limit_are_all_kept() {
        let snapshot =
            MarketSnapshot::top_by_quote_volume(vec![row("A", 1.0), row("B", 3.0)], 10);
        let symbols: Vec<&str> = snapshot.rows().iter().map(|r| r.symbol.as_str()).collect();
        assert_eq!(symbols, ["B", "A"]);
    }
}
