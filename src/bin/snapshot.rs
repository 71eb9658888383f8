use {
    anyhow::{Context, Result},
    clap::Parser,
    std::thread,
    tabled::{Table, Tabled, settings::Style},
    volume_pulse::{
        Currency, CycleRequest, DashboardEngine, DashboardView,
        config::DASHBOARD,
        engine::ClassifiedRow,
        ui::format_money,
        utils::format_clock,
    },
};

/// Run the dashboard refresh cycle without a window and print each result as a table.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Display currency (USD, INR, EUR, GBP, JPY)
    #[arg(long, default_value_t = Currency::Usd)]
    currency: Currency,

    /// Number of refresh cycles to run
    #[arg(long, default_value_t = 1)]
    ticks: u32,

    /// Hide the market tip banner
    #[arg(long, default_value_t = false)]
    no_tip: bool,

    /// Hide the drop alert banner
    #[arg(long, default_value_t = false)]
    no_alert: bool,
}

#[derive(Tabled)]
struct TableLine {
    #[tabled(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Last Price")]
    last_price: String,
    #[tabled(rename = "24h Change")]
    change: String,
    #[tabled(rename = "Suggestion")]
    suggestion: String,
    #[tabled(rename = "Prediction")]
    prediction: String,
    #[tabled(rename = "24h Volume")]
    volume: String,
}

impl TableLine {
    fn new(row: &ClassifiedRow, currency: Currency) -> Self {
        Self {
            symbol: row.symbol().to_string(),
            last_price: format_money(currency, row.converted_price, 2),
            change: row.change_label.clone(),
            suggestion: row.suggestion.to_string(),
            prediction: row.prediction.to_string(),
            volume: format_money(currency, row.converted_volume, 0),
        }
    }
}

fn print_view(tick: u32, view: &DashboardView) {
    println!(
        "\n== Tick {} @ {} ({}, rate {:.4}) ==",
        tick,
        format_clock(&view.refreshed_at),
        view.currency,
        view.rate.rate
    );
    for notice in &view.notices {
        println!("[{:?}] {}", notice.level, notice.message);
    }
    if view.is_waiting() {
        println!("Waiting for valid data from Binance API...");
        return;
    }
    for banner in view.banners() {
        println!("[{:?}] {}", banner.kind, banner.message());
    }

    let lines: Vec<TableLine> = view
        .rows
        .iter()
        .map(|row| TableLine::new(row, view.currency))
        .collect();
    let mut table = Table::new(lines);
    table.with(Style::rounded());
    println!("{}", table);
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let request = CycleRequest {
        currency: args.currency,
        conversion_enabled: true,
        show_market_tip: !args.no_tip,
        show_drop_alert: !args.no_alert,
    };

    let mut engine = DashboardEngine::new().context("Failed to build HTTP clients")?;
    for tick in 1..=args.ticks {
        let view = engine.run_cycle_blocking(request);
        print_view(tick, view);
        if tick < args.ticks {
            thread::sleep(DASHBOARD.refresh_interval);
        }
    }
    log::info!(
        "Finished {} cycles, tracking {} symbols",
        engine.cycles_completed(),
        engine.history().len()
    );
    Ok(())
}
