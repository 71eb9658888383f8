use {serde_json::Value, std::sync::Arc};

use crate::{
    config::FX,
    data::{RateError, RateProvider},
    domain::Currency,
};

#[cfg(debug_assertions)]
use crate::config::DF;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateSource {
    /// Target is the base currency; no lookup happened.
    Base,
    Live,
    /// Live lookup failed; the manual table was used.
    Fallback,
}

/// Multiplier from the base currency to `currency`, and where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct RateQuote {
    pub currency: Currency,
    pub rate: f64,
    pub source: RateSource,
    /// Operator-facing explanation when `source` is `Fallback`.
    pub warning: Option<String>,
}

impl RateQuote {
    pub fn base(currency: Currency) -> Self {
        Self {
            currency,
            rate: 1.0,
            source: RateSource::Base,
            warning: None,
        }
    }
}

/// Pull `rates.<CODE>` out of an FX response, insisting on `success: true`.
pub fn parse_rate_payload(payload: &Value, target: Currency) -> Result<f64, RateError> {
    if payload.get("success").and_then(Value::as_bool) != Some(true) {
        return Err(RateError::Unsuccessful);
    }
    let rate = payload
        .get("rates")
        .and_then(|rates| rates.get(target.code()))
        .and_then(Value::as_f64)
        .ok_or(RateError::MissingRate(target))?;

    if !rate.is_finite() || rate <= 0.0 {
        return Err(RateError::InvalidRate(rate));
    }
    Ok(rate)
}

/// Resolves display-currency multipliers. Never fails: a bad live lookup degrades to the
/// manual rate table and carries a warning instead.
pub struct RateFetcher {
    provider: Arc<dyn RateProvider>,
    base: Currency,
}

impl RateFetcher {
    pub fn new(provider: Arc<dyn RateProvider>) -> Self {
        Self {
            provider,
            base: FX.base,
        }
    }

    pub async fn resolve(&self, currency: Currency) -> RateQuote {
        if currency == self.base {
            return RateQuote::base(currency);
        }

        match self.live_rate(currency).await {
            Ok(rate) => {
                #[cfg(debug_assertions)]
                if DF.log_rates {
                    log::info!("Live rate {} -> {}: {}", self.base, currency, rate);
                }
                RateQuote {
                    currency,
                    rate,
                    source: RateSource::Live,
                    warning: None,
                }
            }
            Err(e) => {
                log::warn!("Could not fetch live rate for {}: {}. Using fallback.", currency, e);
                RateQuote {
                    currency,
                    rate: currency.fallback_rate(),
                    source: RateSource::Fallback,
                    warning: Some(format!(
                        "Could not fetch live rate for {}. Using fallback. Error: {}",
                        currency, e
                    )),
                }
            }
        }
    }

    async fn live_rate(&self, currency: Currency) -> Result<f64, RateError> {
        let payload = self.provider.fetch_rates(self.base, currency).await?;
        parse_rate_payload(&payload, currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_successful_response() {
        let payload = json!({"success": true, "base": "USD", "rates": {"INR": 83.5}});
        assert_eq!(parse_rate_payload(&payload, Currency::Inr), Ok(83.5));
    }

    #[test]
    fn rejects_missing_success_flag() {
        let payload = json!({"rates": {"EUR": 0.9}});
        assert_eq!(
            parse_rate_payload(&payload, Currency::Eur),
            Err(RateError::Unsuccessful)
        );
        let payload = json!({"success": false, "rates": {"EUR": 0.9}});
        assert_eq!(
            parse_rate_payload(&payload, Currency::Eur),
            Err(RateError::Unsuccessful)
        );
    }

    #[test]
    fn rejects_missing_or_bad_rate() {
        let payload = json!({"success": true, "rates": {"GBP": 0.8}});
        assert_eq!(
            parse_rate_payload(&payload, Currency::Eur),
            Err(RateError::MissingRate(Currency::Eur))
        );
        let payload = json!({"success": true, "rates": {"EUR": 0}});
        assert_eq!(
            parse_rate_payload(&payload, Currency::Eur),
            Err(RateError::InvalidRate(0.0))
        );
    }
}
