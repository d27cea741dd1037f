use chrono::{DateTime, NaiveDateTime, SubsecRound, TimeDelta, Utc};

/// Layout of the `time` column, identical to SQLite's `CURRENT_TIMESTAMP`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub const FRESHNESS_WINDOW_SECS: i64 = 86_400;

pub fn freshness_window() -> TimeDelta {
    TimeDelta::seconds(FRESHNESS_WINDOW_SECS)
}

/// Current UTC time truncated to whole seconds, the precision stored on disk
pub fn get_current_time() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(0)
}

pub fn format_timestamp(time: &DateTime<Utc>) -> String {
    time.format(TIMESTAMP_FORMAT).to_string()
}

pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}
