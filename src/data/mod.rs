mod cache;
mod error;
mod market;
mod provider;
mod rates;

pub use {
    cache::TtlCache,
    error::{FetchError, RateError},
    market::{MarketDataFetcher, parse_ticker_payload},
    provider::{BinanceTickerProvider, ExchangeRateHostProvider, MarketDataProvider, RateProvider},
    rates::{RateFetcher, RateQuote, RateSource, parse_rate_payload},
};
