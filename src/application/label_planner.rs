// Axis label planner - decides which data indices get an x-axis label
use crate::application::formatting::axis_date_label;
use crate::domain::chart_data_set::ChartDataSet;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelPlacement {
    pub data_index: usize,
    pub text: String,
}

#[derive(Debug, Clone, Copy)]
pub struct LabelPlanner {
    min_pixels_per_label: f64,
    compact_dates: bool,
}

impl LabelPlanner {
    pub fn new(min_pixels_per_label: f64) -> Self {
        Self {
            min_pixels_per_label,
            compact_dates: false,
        }
    }

    pub fn with_compact_dates(mut self, compact_dates: bool) -> Self {
        self.compact_dates = compact_dates;
        self
    }

    /// Plan labels for a chart `render_width` pixels wide.
    ///
    /// The first point is always labelled and the last one whenever the width
    /// exceeds a single label. The remaining slots are spread evenly between
    /// them; `label_count` is the number of intervals between first and last,
    /// capped by the data so wide charts stay bounded. Small data sets can
    /// yield repeated indices, which are kept as-is.
    pub fn plan(&self, data_set: &ChartDataSet, render_width: f64) -> Vec<LabelPlacement> {
        let count = data_set.len();
        if count == 0 {
            return Vec::new();
        }

        let label_count = self
            .slots(render_width)
            .saturating_sub(1)
            .min(count.saturating_add(1));

        let mut indices = Vec::with_capacity(label_count + 1);
        indices.push(0);
        if label_count > 1 {
            indices.extend((1..label_count).map(|rank| count * rank / label_count));
        }
        if self.fits_second_label(render_width) {
            indices.push(count - 1);
        }

        indices
            .into_iter()
            .map(|data_index| LabelPlacement {
                data_index,
                text: self.label_text(data_set, data_index),
            })
            .collect()
    }

    fn usable(&self, render_width: f64) -> bool {
        render_width.is_finite()
            && render_width > 0.0
            && self.min_pixels_per_label.is_finite()
            && self.min_pixels_per_label > 0.0
    }

    fn slots(&self, render_width: f64) -> usize {
        if !self.usable(render_width) {
            return 1;
        }
        (render_width / self.min_pixels_per_label).floor() as usize
    }

    fn fits_second_label(&self, render_width: f64) -> bool {
        self.usable(render_width) && render_width > self.min_pixels_per_label
    }

    fn label_text(&self, data_set: &ChartDataSet, index: usize) -> String {
        let Some(point) = data_set.data().get(index) else {
            return String::new();
        };

        match point.x_axis_date() {
            Some(date) if data_set.is_dated() => {
                axis_date_label(&date, data_set.group_by(), self.compact_dates)
            }
            _ => point.x_axis_value().to_string(),
        }
    }
}

/// Plan labels with regular (non-compact) date formatting
pub fn plan(data_set: &ChartDataSet, render_width: f64, min_pixels_per_label: f64) -> Vec<LabelPlacement> {
    LabelPlanner::new(min_pixels_per_label).plan(data_set, render_width)
}
