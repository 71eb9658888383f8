use {
    serde::{Deserialize, Deserializer, de},
    serde_json::Value,
    std::{sync::Arc, time::Duration},
    tokio::sync::Mutex,
};

use crate::{
    config::BINANCE,
    data::{FetchError, MarketDataProvider, TtlCache},
    domain::MarketRow,
    models::MarketSnapshot,
    utils::AppInstant,
};

#[cfg(debug_assertions)]
use crate::config::DF;

/// One element of the 24h ticker array. Everything we don't rank on is ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TickerEntry {
    symbol: String,
    #[serde(deserialize_with = "text_or_number")]
    last_price: f64,
    #[serde(deserialize_with = "text_or_number")]
    price_change_percent: f64,
    #[serde(deserialize_with = "text_or_number")]
    quote_volume: f64,
}

impl From<TickerEntry> for MarketRow {
    fn from(entry: TickerEntry) -> Self {
        MarketRow::new(
            entry.symbol,
            entry.last_price,
            entry.price_change_percent,
            entry.quote_volume,
        )
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Number(f64),
}

// Binance sends decimals as strings ("0.01500000"); accept plain numbers too.
fn text_or_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match TextOrNumber::deserialize(deserializer)? {
        TextOrNumber::Text(s) => s.trim().parse::<f64>().map_err(de::Error::custom)?,
        TextOrNumber::Number(n) => n,
    };
    if !value.is_finite() {
        return Err(de::Error::custom(format!("non-finite value {}", value)));
    }
    Ok(value)
}

/// Turn a raw 24h ticker body into the top `top_n` rows by quote volume.
///
/// Entries that fail to decode are skipped. The body is malformed only if it is not an array,
/// or if it has entries and none of them decode.
pub fn parse_ticker_payload(payload: Value, top_n: usize) -> Result<MarketSnapshot, FetchError> {
    let Value::Array(items) = payload else {
        return Err(FetchError::Malformed(
            "expected a JSON array of tickers".to_string(),
        ));
    };

    let total = items.len();
    let mut last_error = None;
    let rows: Vec<MarketRow> = items
        .into_iter()
        .filter_map(|item| match TickerEntry::deserialize(item) {
            Ok(entry) => Some(MarketRow::from(entry)),
            Err(e) => {
                last_error = Some(e);
                None
            }
        })
        .collect();

    if let Some(e) = last_error {
        if rows.is_empty() {
            return Err(FetchError::Malformed(e.to_string()));
        }
        log::warn!(
            "Skipped {} of {} ticker entries (last error: {})",
            total - rows.len(),
            total,
            e
        );
    }

    Ok(MarketSnapshot::top_by_quote_volume(rows, top_n))
}

/// Fetches and ranks the market, memoizing the outcome for a short TTL.
///
/// Failures are cached just like successes, so a broken upstream is asked at most once per
/// window no matter how often the UI refreshes.
pub struct MarketDataFetcher {
    provider: Arc<dyn MarketDataProvider>,
    cache: Mutex<TtlCache<Result<MarketSnapshot, FetchError>>>,
    top_n: usize,
}

impl MarketDataFetcher {
    pub fn new(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self::with_settings(provider, BINANCE.cache_ttl, BINANCE.top_n)
    }

    pub fn with_settings(provider: Arc<dyn MarketDataProvider>, ttl: Duration, top_n: usize) -> Self {
        Self {
            provider,
            cache: Mutex::new(TtlCache::new(ttl)),
            top_n,
        }
    }

    pub async fn fetch(&self) -> Result<MarketSnapshot, FetchError> {
        self.fetch_at(AppInstant::now()).await
    }

    pub async fn fetch_at(&self, now: AppInstant) -> Result<MarketSnapshot, FetchError> {
        // Held across the request so overlapping callers wait for one fetch instead of racing.
        let mut cache = self.cache.lock().await;
        if let Some(cached) = cache.get_at(now) {
            #[cfg(debug_assertions)]
            if DF.log_cache {
                log::info!("Market snapshot served from cache");
            }
            return cached;
        }

        #[cfg(debug_assertions)]
        if DF.log_cache {
            log::info!("Market snapshot cache miss, calling exchange");
        }

        let outcome = match self.provider.fetch_tickers().await {
            Ok(payload) => parse_ticker_payload(payload, self.top_n),
            Err(e) => Err(e),
        };
        if let Err(e) = &outcome {
            log::error!("Error fetching Binance data: {}", e);
        }

        cache.insert_at(now, outcome.clone());
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn non_array_body_is_malformed() {
        let err = parse_ticker_payload(json!({"code": -1003, "msg": "banned"}), 10).unwrap_err();
        assert!(matches!(err, FetchError::Malformed(_)));
    }

    #[test]
    fn text_numbers_are_coerced() {
        let payload = json!([
            {"symbol": "BTCUSDT", "lastPrice": "65000.10", "priceChangePercent": "-1.250",
             "quoteVolume": "1500000000.5", "count": 123},
            {"symbol": "ETHUSDT", "lastPrice": 3100.0, "priceChangePercent": 2.5,
             "quoteVolume": 900000000.0}
        ]);
        let snapshot = parse_ticker_payload(payload, 10).unwrap();
        let btc = &snapshot.rows()[0];
        assert_eq!(btc.symbol, "BTCUSDT");
        assert_eq!(btc.last_price, 65000.10);
        assert_eq!(btc.price_change_pct, -1.25);
        assert_eq!(snapshot.rows()[1].symbol, "ETHUSDT");
    }

    fn entry(symbol: &str, quote_volume: f64) -> Value {
        json!({"symbol": symbol, "lastPrice": "1.5", "priceChangePercent": "0.4",
               "quoteVolume": quote_volume.to_string()})
    }

    #[test]
    fn bad_entry_is_skipped_and_the_rest_still_rank() {
        let mut items: Vec<Value> = (1..=12).map(|i| entry(&format!("C{i}USDT"), i as f64)).collect();
        items.push(json!({"symbol": "ODDUSDT", "lastPrice": "1", "priceChangePercent": "0"}));

        let snapshot = parse_ticker_payload(Value::Array(items), 10).unwrap();
        assert_eq!(snapshot.rows().len(), 10);
        assert_eq!(snapshot.rows()[0].symbol, "C12USDT");
        assert!(snapshot.rows().iter().all(|r| r.symbol != "ODDUSDT"));
    }

    #[test]
    fn all_entries_bad_is_malformed() {
        let payload = json!([
            {"symbol": "BTCUSDT", "lastPrice": "1", "priceChangePercent": "0"},
            {"symbol": "ETHUSDT", "lastPrice": "x", "priceChangePercent": "0", "quoteVolume": "5"}
        ]);
        assert!(matches!(
            parse_ticker_payload(payload, 10),
            Err(FetchError::Malformed(_))
        ));
    }

    #[test]
    fn unparseable_or_non_finite_numbers_are_rejected() {
        for bad in ["abc", "NaN", "inf"] {
            let payload = json!([
                {"symbol": "X", "lastPrice": bad, "priceChangePercent": "0", "quoteVolume": "1"}
            ]);
            assert!(parse_ticker_payload(payload, 10).is_err(), "accepted {bad}");
        }
    }

    #[test]
    fn empty_array_gives_empty_snapshot() {
        let snapshot = parse_ticker_payload(json!([]), 10).unwrap();
        assert!(snapshot.is_empty());
    }
}
