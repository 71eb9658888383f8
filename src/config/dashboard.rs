use std::time::Duration;

pub struct DashboardConfig {
    pub refresh_interval: Duration,
    /// Max samples kept per symbol in the price history.
    pub history_window: usize,
    pub max_charts: usize,
    pub chart_columns: usize,
    pub chart_height: f32,
}

pub const DASHBOARD: DashboardConfig = DashboardConfig {
    refresh_interval: Duration::from_secs(10),
    history_window: 30,
    max_charts: 6,
    chart_columns: 2,
    chart_height: 220.0,
};
