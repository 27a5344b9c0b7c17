// Date and value formatting for chart labels
//
// All dates are rendered in UTC with fixed patterns so labels do not depend on
// the host locale or time zone.
use crate::domain::granularity::IntervalGranularity;
use chrono::{DateTime, Utc};

/// Axis label for a dated point
pub fn axis_date_label(date: &DateTime<Utc>, group_by: IntervalGranularity, compact: bool) -> String {
    match group_by {
        IntervalGranularity::Hour | IntervalGranularity::Day if compact => {
            date.format("%-m/%-d/%y").to_string()
        }
        IntervalGranularity::Hour | IntervalGranularity::Day => date.format("%b %-d, %Y").to_string(),
        IntervalGranularity::Week => date.format("W%V %G").to_string(),
        IntervalGranularity::Month => date.format("%b %Y").to_string(),
    }
}

/// Longer date text shown in the hover tooltip
pub fn hover_date_label(date: &DateTime<Utc>, group_by: IntervalGranularity) -> String {
    match group_by {
        IntervalGranularity::Hour => date.format("%-m/%-d/%y, %H:%M").to_string(),
        IntervalGranularity::Day => date.format("%a, %b %-d, %Y").to_string(),
        IntervalGranularity::Week => date.format("Week %V, %G").to_string(),
        IntervalGranularity::Month => date.format("%B %Y").to_string(),
    }
}

/// Integral values render without decimals, everything else with at most two
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{:.0}", value);
    }
    trim_decimals(format!("{:.2}", value))
}

/// Compact rendering for large numbers, e.g. 15234 -> "15.2k"
pub fn format_big_number(value: f64) -> String {
    const UNITS: [(f64, &str); 3] = [(1e9, "B"), (1e6, "M"), (1e3, "k")];

    for (divisor, suffix) in UNITS {
        if value.abs() >= divisor {
            return format!("{}{}", trim_decimals(format!("{:.1}", value / divisor)), suffix);
        }
    }
    format_value(value)
}

fn trim_decimals(text: String) -> String {
    if !text.contains('.') {
        return text;
    }
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
