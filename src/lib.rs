#![allow(clippy::collapsible_if)]

// Core modules
pub mod analysis;
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod models;
pub mod ui;
pub mod utils;

pub use app::App;
pub use config::PERSISTENCE;
pub use domain::Currency;
pub use engine::{CycleRequest, DashboardEngine, DashboardView};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Show exchange prices as-is, without currency conversion
    #[arg(long, default_value_t = false)]
    pub base_only: bool,

    /// Initial display currency (USD, INR, EUR, GBP, JPY). Overrides the saved choice
    #[arg(long)]
    pub currency: Option<Currency>,
}

/// Main application entry point - creates the GUI app
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}
