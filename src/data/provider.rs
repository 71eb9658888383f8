use {
    async_trait::async_trait,
    reqwest::Client,
    serde_json::Value,
    std::time::Duration,
};

use crate::{
    config::{BINANCE, FX},
    data::FetchError,
    domain::Currency,
};

/// Abstract interface for the exchange's 24h ticker feed.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Raw JSON body of the all-symbols 24h ticker endpoint.
    async fn fetch_tickers(&self) -> Result<Value, FetchError>;
}

/// Abstract interface for a foreign-exchange rate service.
#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Raw JSON body of a `base -> target` rate query.
    async fn fetch_rates(&self, base: Currency, target: Currency) -> Result<Value, FetchError>;
}

fn build_client(timeout: Duration) -> anyhow::Result<Client> {
    let client = Client::builder()
        .timeout(timeout)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}

async fn get_json(client: &Client, url: &str, query: &[(&str, &str)]) -> Result<Value, FetchError> {
    let response = client.get(url).query(query).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }
    Ok(response.json::<Value>().await?)
}

pub struct BinanceTickerProvider {
    client: Client,
    url: String,
}

impl BinanceTickerProvider {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            client: build_client(BINANCE.ticker_24hr.timeout)?,
            url: BINANCE.ticker_24hr.url.to_string(),
        })
    }
}

#[async_trait]
impl MarketDataProvider for BinanceTickerProvider {
    async fn fetch_tickers(&self) -> Result<Value, FetchError> {
        get_json(&self.client, &self.url, &[]).await
    }
}

/// exchangerate.host `latest` endpoint.
pub struct ExchangeRateHostProvider {
    client: Client,
    url: String,
}

impl ExchangeRateHostProvider {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            client: build_client(FX.timeout)?,
            url: FX.latest_url.to_string(),
        })
    }
}

#[async_trait]
impl RateProvider for ExchangeRateHostProvider {
    async fn fetch_rates(&self, base: Currency, target: Currency) -> Result<Value, FetchError> {
        get_json(
            &self.client,
            &self.url,
            &[("base", base.code()), ("symbols", target.code())],
        )
        .await
    }
}
