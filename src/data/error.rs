use thiserror::Error;

use crate::domain::Currency;

/// Why a market snapshot could not be produced this cycle.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    #[error("request timed out")]
    Timeout,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("unexpected HTTP status {0}")]
    Status(u16),

    #[error("unexpected response format: {0}")]
    Malformed(String),
}

// Split reqwest failures into the variants the notices distinguish.
impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Timeout
        } else if e.is_decode() {
            FetchError::Malformed(e.to_string())
        } else if let Some(status) = e.status() {
            FetchError::Status(status.as_u16())
        } else {
            FetchError::Transport(e.to_string())
        }
    }
}

/// Why a live FX rate was rejected. Always recovered from with a fallback rate.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RateError {
    #[error("{0}")]
    Unavailable(#[from] FetchError),

    #[error("rate service reported failure")]
    Unsuccessful,

    #[error("no rate for {0} in response")]
    MissingRate(Currency),

    #[error("invalid rate {0}")]
    InvalidRate(f64),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn unavailable_wraps_fetch_error_as_source() {
        let err = RateError::from(FetchError::Status(503));
        assert_eq!(err.to_string(), "unexpected HTTP status 503");
        assert_eq!(
            err.source().map(|s| s.to_string()).as_deref(),
            Some("unexpected HTTP status 503")
        );
        assert!(RateError::Unsuccessful.source().is_none());
    }

    #[test]
    fn messages_name_the_problem() {
        assert_eq!(
            RateError::MissingRate(Currency::Eur).to_string(),
            "no rate for EUR in response"
        );
        assert_eq!(
            FetchError::Malformed("not an array".into()).to_string(),
            "unexpected response format: not an array"
        );
    }
}
