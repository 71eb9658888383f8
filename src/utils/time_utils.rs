use chrono::{DateTime, Local};

/// Monotonic instant that also works where `std::time::Instant` is unavailable.
pub type AppInstant = web_time::Instant;

pub struct TimeUtils;

impl TimeUtils {
    pub const CLOCK_FORMAT: &str = "%H:%M:%S";
}

pub fn now_local() -> DateTime<Local> {
    Local::now()
}

/// Wall-clock time of day, used for "last refreshed" labels.
pub fn format_clock(at: &DateTime<Local>) -> String {
    at.format(TimeUtils::CLOCK_FORMAT).to_string()
}

pub fn format_duration(ms: i64) -> String {
    let secs = ms / 1000;
    if secs < 60 {
        return format!("{}s", secs);
    }
    let mins = secs / 60;
    if mins < 60 {
        return format!("{}m {}s", mins, secs % 60);
    }
    let hours = mins / 60;
    format!("{}h {}m", hours, mins % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations_pick_largest_sensible_unit() {
        assert_eq!(format_duration(9_500), "9s");
        assert_eq!(format_duration(125_000), "2m 5s");
        assert_eq!(format_duration(3_720_000), "1h 2m");
    }
}
