mod history;
mod snapshot;

pub use {history::HistoryStore, snapshot::MarketSnapshot};
