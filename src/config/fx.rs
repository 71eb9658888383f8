use std::time::Duration;

use crate::domain::Currency;

pub struct FxConfig {
    pub latest_url: &'static str,
    /// Currency the exchange quotes in. Conversion to it is the identity.
    pub base: Currency,
    pub timeout: Duration,
}

pub const FX: FxConfig = FxConfig {
    latest_url: "https://api.exchangerate.host/latest",
    base: Currency::Usd,
    timeout: Duration::from_secs(5),
};
