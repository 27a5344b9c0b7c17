// Value annotations for the line chart side column and hover tooltip
use crate::application::formatting::{format_big_number, format_value, hover_date_label};
use crate::domain::chart_data_set::ChartDataSet;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LastValueMarker {
    pub text: String,
    /// 0.0 is the top edge, 1.0 the bottom edge
    pub vertical_fraction: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueAnnotations {
    pub lowest: Option<String>,
    pub highest: Option<String>,
    pub last: Option<LastValueMarker>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoverLabel {
    pub title: String,
    pub value: String,
}

/// Extremes are only labelled when the last value does not already sit on them
pub fn annotate(data_set: &ChartDataSet) -> ValueAnnotations {
    let last = data_set.last_value();
    let lowest = data_set.lowest_value();
    let highest = data_set.highest_value();
    let vertical_fraction = 1.0 - last / (highest - lowest);

    ValueAnnotations {
        lowest: (last != lowest).then(|| format_value(lowest)),
        highest: (last != highest).then(|| format_value(highest)),
        last: vertical_fraction.is_finite().then(|| LastValueMarker {
            text: format_value(last),
            vertical_fraction,
        }),
    }
}

pub fn hover_label(data_set: &ChartDataSet, index: usize) -> Option<HoverLabel> {
    let point = data_set.data().get(index)?;
    let title = match point.x_axis_date() {
        Some(date) => hover_date_label(&date, data_set.group_by()),
        None => point.x_axis_value().to_string(),
    };

    Some(HoverLabel {
        title,
        value: format_big_number(point.y_axis_value()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::data_point::RawDataPoint;
    use crate::domain::granularity::IntervalGranularity;

    fn data_set(values: &[&str], group_by: IntervalGranularity) -> ChartDataSet {
        let raw = values
            .iter()
            .enumerate()
            .map(|(i, v)| RawDataPoint::new(format!("2021-06-{:02}T00:00:00Z", i + 1), *v))
            .collect();
        ChartDataSet::new(raw, group_by).unwrap()
    }

    #[test]
    fn test_interior_last_value_labels_both_extremes() {
        let annotations = annotate(&data_set(&["0", "100", "25"], IntervalGranularity::Day));

        assert_eq!(annotations.lowest.as_deref(), Some("0"));
        assert_eq!(annotations.highest.as_deref(), Some("100"));
        assert_eq!(
            annotations.last,
            Some(LastValueMarker { text: "25".to_string(), vertical_fraction: 0.75 })
        );
    }

    #[test]
    fn test_last_value_on_extreme_hides_that_extreme() {
        let annotations = annotate(&data_set(&["0", "40", "80"], IntervalGranularity::Day));
        assert_eq!(annotations.lowest.as_deref(), Some("0"));
        assert_eq!(annotations.highest, None);
        assert_eq!(annotations.last.map(|m| m.vertical_fraction), Some(0.0));
    }

    #[test]
    fn test_flat_series_has_no_last_marker() {
        let annotations = annotate(&data_set(&["3", "3"], IntervalGranularity::Day));
        assert_eq!(annotations, ValueAnnotations::default());
    }

    #[test]
    fn test_hover_label() {
        let set = data_set(&["15234", "7"], IntervalGranularity::Week);
        let label = hover_label(&set, 0).unwrap();

        assert_eq!(label.title, "Week 22, 2021");
        assert_eq!(label.value, "15.2k");
        assert!(hover_label(&set, 2).is_none());
    }

    #[test]
    fn test_hover_label_for_categories() {
        let set = ChartDataSet::new(vec![RawDataPoint::new("iOS", "12")], IntervalGranularity::Day).unwrap();
        let label = hover_label(&set, 0).unwrap();
        assert_eq!(label, HoverLabel { title: "iOS".to_string(), value: "12".to_string() });
    }
}
