// Insight calculation results as consumed by the chart core
use super::data_point::RawDataPoint;
use super::granularity::IntervalGranularity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DisplayMode {
    Raw,
    BarChart,
    #[default]
    LineChart,
    PieChart,
}

/// The slice of an insight definition that affects chart preparation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightSummary {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub group_by: IntervalGranularity,
    #[serde(default)]
    pub display_mode: DisplayMode,
    #[serde(default)]
    pub accent_color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightCalculationResult {
    pub id: String,
    pub insight: InsightSummary,
    #[serde(default)]
    pub data: Vec<RawDataPoint>,
    #[serde(default)]
    pub calculated_at: Option<DateTime<Utc>>,
}
