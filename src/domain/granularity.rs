// Interval granularity - formatting hint for axis and hover labels
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntervalGranularity {
    Hour,
    #[default]
    Day,
    Week,
    Month,
}

impl IntervalGranularity {
    pub fn as_str(&self) -> &'static str {
        match self {
            IntervalGranularity::Hour => "hour",
            IntervalGranularity::Day => "day",
            IntervalGranularity::Week => "week",
            IntervalGranularity::Month => "month",
        }
    }
}
