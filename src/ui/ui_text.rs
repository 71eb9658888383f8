use std::sync::LazyLock;

use crate::config::{BINANCE, DASHBOARD};

pub struct UiText {
    // --- Header ---
    pub app_title: String,
    pub header_caption: String,

    // --- Side panel ---
    pub sp_settings_heading: String,
    pub sp_show_market_tip: String,
    pub sp_show_drop_alert: String,
    pub sp_currency: String,
    pub sp_rates_caption: String,
    pub sp_base_only: String,

    // --- Central panel ---
    pub cp_waiting_for_data: String,
    pub cp_market_tip: String,
    pub cp_drop_alert: String,
    pub cp_table_heading: String,
    pub cp_charts_heading: String,

    // --- Table ---
    pub col_symbol: String,
    pub col_last_price: String,
    pub col_change: String,
    pub col_suggestion: String,
    pub col_prediction: String,
    pub col_volume: String,

    // --- Charts ---
    pub chart_title_suffix: String,
    pub chart_x_axis: String,
    pub chart_y_axis: String,

    // --- Status bar ---
    pub st_last_refresh: String,
    pub st_never_refreshed: String,
    pub st_refreshing: String,
    pub st_idle: String,
    pub st_rate: String,

    // --- Bootstrap screen ---
    pub bs_title: String,
    pub bs_connecting: String,
    pub bs_engine_failed: String,
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    app_title: "Binance Top Coins Dashboard".to_string(),
    header_caption: format!(
        "Updates every {} seconds. Shows live top {} coins by 24h volume.",
        DASHBOARD.refresh_interval.as_secs(),
        BINANCE.top_n
    ),

    sp_settings_heading: "Settings".to_string(),
    sp_show_market_tip: "Show Market Tip".to_string(),
    sp_show_drop_alert: "Show Drop Alert".to_string(),
    sp_currency: "Display currency".to_string(),
    sp_rates_caption: "Uses live rates with fallback to manual.".to_string(),
    sp_base_only: "Conversion disabled, prices in".to_string(),

    cp_waiting_for_data: "Waiting for valid data from Binance API...".to_string(),
    cp_market_tip: "Market Tip".to_string(),
    cp_drop_alert: "Drop Alert".to_string(),
    cp_table_heading: format!("Top {} Coins by Volume", BINANCE.top_n),
    cp_charts_heading: format!(
        "Price Trend Charts (Last {} minutes, {}s intervals)",
        DASHBOARD.history_window as u64 * DASHBOARD.refresh_interval.as_secs() / 60,
        DASHBOARD.refresh_interval.as_secs()
    ),

    col_symbol: "Symbol".to_string(),
    col_last_price: "Last Price".to_string(),
    col_change: "24h Change".to_string(),
    col_suggestion: "Suggestion".to_string(),
    col_prediction: "Prediction".to_string(),
    col_volume: "24h Volume".to_string(),

    chart_title_suffix: "Price Trend".to_string(),
    chart_x_axis: format!("Ticks ({}s)", DASHBOARD.refresh_interval.as_secs()),
    chart_y_axis: "Price".to_string(),

    st_last_refresh: "Last refresh".to_string(),
    st_never_refreshed: "No refresh yet".to_string(),
    st_refreshing: "Refreshing...".to_string(),
    st_idle: "Next refresh in".to_string(),
    st_rate: "Rate".to_string(),

    bs_title: "Volume Pulse".to_string(),
    bs_connecting: "Connecting to Binance...".to_string(),
    bs_engine_failed: "Could not start the network engine".to_string(),
});
