// Drawable primitives handed to the rendering surface
use crate::application::annotations::{HoverLabel, ValueAnnotations};
use crate::application::geometry_mapper::{Bar, HoverPosition, Slice};
use crate::application::label_planner::LabelPlacement;
use crate::domain::geometry::Point;
use crate::domain::granularity::IntervalGranularity;
use crate::domain::insight::DisplayMode;
use serde::{Deserialize, Serialize};

/// Target drawing area plus an optional pointer position for tooltips
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub pointer_x_fraction: Option<f64>,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            pointer_x_fraction: None,
        }
    }

    pub fn with_pointer(mut self, pointer_x_fraction: f64) -> Self {
        self.pointer_x_fraction = Some(pointer_x_fraction);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreparedChart {
    pub insight_id: String,
    pub title: String,
    pub display_mode: DisplayMode,
    pub group_by: IntervalGranularity,
    pub outcome: ChartOutcome,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum ChartOutcome {
    Ready(ChartPrimitives),
    /// Zero data points; render a placeholder, not an error
    NoData,
    Unrenderable { reason: String },
}

impl ChartOutcome {
    pub fn primitives(&self) -> Option<&ChartPrimitives> {
        match self {
            ChartOutcome::Ready(primitives) => Some(primitives),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPrimitives {
    pub highest_value: f64,
    pub lowest_value: f64,
    pub labels: Vec<LabelPlacement>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub path: Vec<Point>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub area: Vec<Point>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bars: Vec<Bar>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub slices: Vec<Slice>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rows: Vec<TableRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<ValueAnnotations>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover: Option<HoverDetails>,
}

impl ChartPrimitives {
    pub fn new(highest_value: f64, lowest_value: f64) -> Self {
        Self {
            highest_value,
            lowest_value,
            labels: Vec::new(),
            path: Vec::new(),
            area: Vec::new(),
            bars: Vec::new(),
            slices: Vec::new(),
            rows: Vec::new(),
            annotations: None,
            hover: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoverDetails {
    pub position: HoverPosition,
    pub label: HoverLabel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub label: String,
    pub value: String,
}
