use jiff::Timestamp;

/// Header clock text, e.g. `13:05 UTC`.
pub fn format_utc_clock(now: Timestamp) -> String {
    now.strftime("%H:%M UTC").to_string()
}
