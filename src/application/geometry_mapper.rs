// Geometry mapper - projects a data set into drawing-surface coordinates
use crate::domain::chart_data_set::ChartDataSet;
use crate::domain::error::ChartError;
use crate::domain::geometry::{Point, Rect};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HoverPosition {
    pub index: usize,
    pub point: Point,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bar {
    pub index: usize,
    pub rect: Rect,
}

/// Donut slice as fractions of the full circle
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Slice {
    pub index: usize,
    pub start: f64,
    pub end: f64,
}

/// Map a data set to line path coordinates.
///
/// With `close_shape` the path starts at the bottom-left corner, runs through
/// every point, then returns along the bottom edge so it can be filled.
pub fn map_to_path(data_set: &ChartDataSet, rect: Rect, close_shape: bool) -> Result<Vec<Point>, ChartError> {
    let count = data_set.len();
    if count < 2 {
        return Err(ChartError::InsufficientPoints { count });
    }

    let step = rect.width / (count - 1) as f64;
    let scale = vertical_scale(data_set, rect)?;

    let line = data_set
        .data()
        .iter()
        .enumerate()
        .map(|(index, point)| plot(rect, index as f64 * step, point.y_axis_value(), scale));

    if !close_shape {
        return Ok(line.collect());
    }

    let mut points = Vec::with_capacity(count + 3);
    points.push(rect.bottom_left());
    points.extend(line);
    points.push(rect.bottom_right());
    points.push(rect.bottom_left());
    Ok(points)
}

/// Resolve a normalized pointer position (0.0 = left edge, 1.0 = right edge)
/// to the nearest data index and its plotted location.
pub fn map_to_hover_position(data_set: &ChartDataSet, rect: Rect, pointer_x_fraction: f64) -> HoverPosition {
    let last = data_set.len().saturating_sub(1);
    let fraction = if pointer_x_fraction.is_nan() {
        0.0
    } else {
        pointer_x_fraction.clamp(0.0, 1.0)
    };

    let index = ((fraction * last as f64).round() as usize).min(last);
    let x_offset = if last == 0 {
        0.0
    } else {
        rect.width / last as f64 * index as f64
    };
    let value = data_set.data().get(index).map_or(0.0, |p| p.y_axis_value());

    // A flat zero series has no scale; pin the marker to the baseline
    let point = match vertical_scale(data_set, rect) {
        Ok(scale) => plot(rect, x_offset, value, scale),
        Err(_) => Point::new(rect.x + x_offset, rect.max_y()),
    };

    HoverPosition { index, point }
}

/// One equal-width bar per point, separated by `spacing` pixels
pub fn map_to_bars(data_set: &ChartDataSet, rect: Rect, spacing: f64) -> Result<Vec<Bar>, ChartError> {
    let count = data_set.len();
    if count == 0 {
        return Err(ChartError::EmptyDataSet);
    }

    let scale = vertical_scale(data_set, rect)?;
    let mut spacing = spacing.max(0.0);
    let mut bar_width = (rect.width - spacing * (count - 1) as f64) / count as f64;
    if bar_width <= 0.0 {
        spacing = 0.0;
        bar_width = rect.width / count as f64;
    }

    Ok(data_set
        .data()
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let height = (point.y_axis_value() * scale).clamp(0.0, rect.height);
            let x = rect.x + index as f64 * (bar_width + spacing);
            Bar {
                index,
                rect: Rect::new(x, rect.max_y() - height, bar_width, height),
            }
        })
        .collect())
}

/// Donut slices proportional to each value's share of the total.
/// Negative values get an empty slice.
pub fn map_to_slices(data_set: &ChartDataSet) -> Result<Vec<Slice>, ChartError> {
    let total: f64 = data_set.data().iter().map(|p| p.y_axis_value().max(0.0)).sum();
    if !(total.is_finite() && total > 0.0) {
        return Err(ChartError::DegenerateRange);
    }

    let mut start = 0.0;
    Ok(data_set
        .data()
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let end = start + point.y_axis_value().max(0.0) / total;
            let slice = Slice { index, start, end };
            start = end;
            slice
        })
        .collect())
}

fn vertical_scale(data_set: &ChartDataSet, rect: Rect) -> Result<f64, ChartError> {
    let highest = data_set.highest_value();
    if highest == 0.0 {
        return Err(ChartError::DegenerateRange);
    }

    let scale = rect.height / highest;
    if !scale.is_finite() {
        return Err(ChartError::DegenerateRange);
    }
    Ok(scale)
}

// Values grow upward, the drawing surface grows downward
fn plot(rect: Rect, x_offset: f64, value: f64, scale: f64) -> Point {
    Point::new(rect.x + x_offset, rect.max_y() - value * scale)
}
