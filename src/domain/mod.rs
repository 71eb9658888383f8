// Domain types and value objects
mod currency;
mod market_row;

pub use currency::Currency;
pub use market_row::MarketRow;
