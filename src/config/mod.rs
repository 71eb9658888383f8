//! Configuration module for the dashboard.

// Can all be private now because we have a public re-export.
mod analysis;
mod binance;
mod dashboard;
mod debug;
mod fx;
mod persistence;

// Can't be private because we don't re-export it
pub mod plot;

// Re-export commonly used items
pub use analysis::{CLASSIFIER, ClassifierThresholds};
pub use binance::{BINANCE, BinanceConfig};
pub use dashboard::{DASHBOARD, DashboardConfig};
pub use debug::DF;
pub use fx::{FX, FxConfig};
pub use persistence::PERSISTENCE;
pub use plot::PLOT_CONFIG;
