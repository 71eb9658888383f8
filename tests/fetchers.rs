mod common;

use std::time::Duration;

use {
    common::{FakeMarket, FakeRates, fifteen_tickers, rates_body, ticker},
    serde_json::{Value, json},
    volume_pulse::{
        Currency,
        data::{FetchError, MarketDataFetcher, RateFetcher, RateSource},
        utils::AppInstant,
    },
};

#[tokio::test]
async fn snapshot_keeps_top_ten_by_quote_volume() {
    let market = FakeMarket::new(Ok(fifteen_tickers()));
    let fetcher = MarketDataFetcher::new(market.clone());

    let snapshot = fetcher.fetch().await.unwrap();
    assert_eq!(snapshot.len(), 10);
    assert_eq!(snapshot.rows()[0].symbol, "SYM14USDT");
    assert!(
        snapshot
            .rows()
            .windows(2)
            .all(|w| w[0].quote_volume >= w[1].quote_volume)
    );
}

#[tokio::test]
async fn non_array_body_is_reported_as_malformed() {
    let market = FakeMarket::new(Ok(json!({"code": -1003, "msg": "Too many requests"})));
    let fetcher = MarketDataFetcher::new(market);

    assert!(matches!(fetcher.fetch().await, Err(FetchError::Malformed(_))));
}

#[tokio::test]
async fn cache_serves_repeat_fetches_inside_ttl() {
    let market = FakeMarket::new(Ok(Value::Array(vec![ticker("BTCUSDT", 60_000.0, 1.0, 5e9)])));
    let fetcher = MarketDataFetcher::with_settings(market.clone(), Duration::from_secs(10), 10);
    let start = AppInstant::now();

    fetcher.fetch_at(start).await.unwrap();
    fetcher.fetch_at(start + Duration::from_secs(5)).await.unwrap();
    assert_eq!(market.calls(), 1);

    fetcher.fetch_at(start + Duration::from_secs(11)).await.unwrap();
    assert_eq!(market.calls(), 2);
}

#[tokio::test]
async fn failures_are_cached_too() {
    let market = FakeMarket::new(Err(FetchError::Timeout));
    let fetcher = MarketDataFetcher::with_settings(market.clone(), Duration::from_secs(10), 10);
    let start = AppInstant::now();

    assert_eq!(fetcher.fetch_at(start).await, Err(FetchError::Timeout));
    market.set_response(Ok(fifteen_tickers()));
    assert_eq!(
        fetcher.fetch_at(start + Duration::from_secs(1)).await,
        Err(FetchError::Timeout)
    );
    assert_eq!(market.calls(), 1);

    assert!(fetcher.fetch_at(start + Duration::from_secs(12)).await.is_ok());
}

#[tokio::test]
async fn base_currency_needs_no_lookup() {
    let rates = FakeRates::new(Err(FetchError::Timeout));
    let fetcher = RateFetcher::new(rates.clone());

    let quote = fetcher.resolve(Currency::Usd).await;
    assert_eq!(quote.rate, 1.0);
    assert_eq!(quote.source, RateSource::Base);
    assert_eq!(rates.calls(), 0);
}

#[tokio::test]
async fn live_rate_is_used_when_available() {
    let rates = FakeRates::new(Ok(rates_body("INR", 83.5)));
    let quote = RateFetcher::new(rates.clone()).resolve(Currency::Inr).await;

    assert_eq!(quote.rate, 83.5);
    assert_eq!(quote.source, RateSource::Live);
    assert!(quote.warning.is_none());
    assert_eq!(rates.calls(), 1);
}

#[tokio::test]
async fn timeout_falls_back_with_warning() {
    let rates = FakeRates::new(Err(FetchError::Timeout));
    let quote = RateFetcher::new(rates).resolve(Currency::Eur).await;

    assert_eq!(quote.rate, 0.92);
    assert_eq!(quote.source, RateSource::Fallback);
    let warning = quote.warning.unwrap();
    assert!(warning.starts_with("Could not fetch live rate for EUR. Using fallback."));
}

#[tokio::test]
async fn unsuccessful_body_falls_back() {
    let rates = FakeRates::new(Ok(json!({"success": false, "error": {"code": 101}})));
    let quote = RateFetcher::new(rates).resolve(Currency::Gbp).await;

    assert_eq!(quote.rate, 0.78);
    assert_eq!(quote.source, RateSource::Fallback);
}
