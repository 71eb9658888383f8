use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Display currencies the dashboard can convert exchange prices into.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    Display,
)]
#[strum(ascii_case_insensitive)]
pub enum Currency {
    #[default]
    #[strum(to_string = "USD")]
    Usd,
    #[strum(to_string = "INR")]
    Inr,
    #[strum(to_string = "EUR")]
    Eur,
    #[strum(to_string = "GBP")]
    Gbp,
    #[strum(to_string = "JPY")]
    Jpy,
}

impl Currency {
    /// ISO code, as used in FX API queries and responses.
    pub fn code(self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Inr => "INR",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
            Self::Jpy => "JPY",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Usd => "$",
            Self::Inr => "₹",
            Self::Eur => "€",
            Self::Gbp => "£",
            Self::Jpy => "¥",
        }
    }

    /// Manually maintained USD -> currency rate, used when the live FX call fails.
    pub fn fallback_rate(self) -> f64 {
        match self {
            Self::Usd => 1.0,
            Self::Inr => 83.2,
            Self::Eur => 0.92,
            Self::Gbp => 0.78,
            Self::Jpy => 157.6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn parses_codes_case_insensitively() {
        assert_eq!(Currency::from_str("eur").unwrap(), Currency::Eur);
        assert_eq!(Currency::from_str("JPY").unwrap(), Currency::Jpy);
        assert!(Currency::from_str("CHF").is_err());
    }

    #[test]
    fn display_matches_code() {
        for currency in Currency::iter() {
            assert_eq!(currency.to_string(), currency.code());
        }
    }

    #[test]
    fn fallback_rates_are_positive() {
        assert!(Currency::iter().all(|c| c.fallback_rate() > 0.0));
        assert_eq!(Currency::Usd.fallback_rate(), 1.0);
    }
}
