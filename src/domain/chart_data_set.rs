// ChartDataSet - normalized, bounded series backing one chart
use super::data_point::{DataPoint, RawDataPoint};
use super::error::ChartError;
use super::granularity::IntervalGranularity;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataSet {
    data: Vec<DataPoint>,
    highest_value: f64,
    lowest_value: f64,
    group_by: IntervalGranularity,
}

impl ChartDataSet {
    /// Build a data set from an API result. Input order is kept as plotting
    /// order; a single malformed point rejects the whole set.
    pub fn new(points: Vec<RawDataPoint>, group_by: IntervalGranularity) -> Result<Self, ChartError> {
        if points.is_empty() {
            return Err(ChartError::EmptyDataSet);
        }

        let data = points
            .into_iter()
            .enumerate()
            .map(|(index, raw)| DataPoint::normalize(raw).map_err(|e| e.at_index(index)))
            .collect::<Result<Vec<_>, _>>()?;

        let (lowest_value, highest_value) = data.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY),
            |(low, high), point| (low.min(point.y_axis_value()), high.max(point.y_axis_value())),
        );

        tracing::debug!(
            "Built {} data set with {} points, range {}..{}",
            group_by.as_str(),
            data.len(),
            lowest_value,
            highest_value
        );

        Ok(Self {
            data,
            highest_value,
            lowest_value,
            group_by,
        })
    }

    pub fn data(&self) -> &[DataPoint] {
        &self.data
    }

    pub fn highest_value(&self) -> f64 {
        self.highest_value
    }

    pub fn lowest_value(&self) -> f64 {
        self.lowest_value
    }

    pub fn group_by(&self) -> IntervalGranularity {
        self.group_by
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// A set is dated iff its first point carries a date
    pub fn is_dated(&self) -> bool {
        self.data
            .first()
            .is_some_and(|point| point.x_axis_date().is_some())
    }

    pub fn last_value(&self) -> f64 {
        self.data.last().map_or(0.0, DataPoint::y_axis_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn raw(points: &[(&str, &str)]) -> Vec<RawDataPoint> {
        points.iter().map(|(x, y)| RawDataPoint::new(*x, *y)).collect()
    }

    #[test]
    fn test_empty_input_is_empty_state() {
        let result = ChartDataSet::new(Vec::new(), IntervalGranularity::Day);
        assert_eq!(result, Err(ChartError::EmptyDataSet));
    }

    #[test]
    fn test_malformed_point_aborts_construction() {
        let result = ChartDataSet::new(raw(&[("a", "1"), ("b", "oops"), ("c", "3")]), IntervalGranularity::Day);
        assert_eq!(
            result,
            Err(ChartError::MalformedValue { index: 1, value: "oops".to_string() })
        );
    }

    #[test]
    fn test_extrema_and_order() {
        let data_set = ChartDataSet::new(raw(&[("a", "1"), ("b", "5"), ("a", "1"), ("c", "-2")]), IntervalGranularity::Week).unwrap();

        assert_eq!(data_set.highest_value(), 5.0);
        assert_eq!(data_set.lowest_value(), -2.0);
        assert_eq!(data_set.last_value(), -2.0);
        assert_eq!(data_set.group_by(), IntervalGranularity::Week);

        let labels: Vec<&str> = data_set.data().iter().map(|p| p.x_axis_value()).collect();
        assert_eq!(labels, vec!["a", "b", "a", "c"]);
    }

    #[test]
    fn test_out_of_order_dates_are_not_resorted() {
        let data_set = ChartDataSet::new(
            raw(&[("2021-06-29T00:00:00Z", "1"), ("2021-06-28T00:00:00Z", "2")]),
            IntervalGranularity::Day,
        )
        .unwrap();

        assert_eq!(data_set.data()[0].x_axis_value(), "2021-06-29T00:00:00Z");
        assert_eq!(data_set.data()[1].x_axis_value(), "2021-06-28T00:00:00Z");
    }

    #[test]
    fn test_dated_detection_uses_first_point() {
        let dated = ChartDataSet::new(raw(&[("2021-06-28T00:00:00Z", "1")]), IntervalGranularity::Day).unwrap();
        assert!(dated.is_dated());

        let categorical = ChartDataSet::new(raw(&[("Monday", "1"), ("2021-06-28T00:00:00Z", "2")]), IntervalGranularity::Day).unwrap();
        assert!(!categorical.is_dated());
    }

    proptest! {
        #[test]
        fn prop_every_value_within_extrema(values in proptest::collection::vec(-1.0e9f64..1.0e9, 1..64)) {
            let points = values
                .iter()
                .enumerate()
                .map(|(i, v)| RawDataPoint::new(i.to_string(), v.to_string()))
                .collect();
            let data_set = ChartDataSet::new(points, IntervalGranularity::Day).unwrap();

            prop_assert_eq!(data_set.len(), values.len());
            for point in data_set.data() {
                prop_assert!(data_set.lowest_value() <= point.y_axis_value());
                prop_assert!(point.y_axis_value() <= data_set.highest_value());
            }
        }

        #[test]
        fn prop_construction_fails_on_any_malformed_point(
            values in proptest::collection::vec(0.0f64..1000.0, 1..16),
            bad_index in 0usize..16,
        ) {
            let bad_index = bad_index % values.len();
            let points = values
                .iter()
                .enumerate()
                .map(|(i, v)| {
                    let y = if i == bad_index { "n/a".to_string() } else { v.to_string() };
                    RawDataPoint::new(i.to_string(), y)
                })
                .collect();

            let result = ChartDataSet::new(points, IntervalGranularity::Day);
            let rejected = matches!(result, Err(ChartError::MalformedValue { index, .. }) if index == bad_index);
            prop_assert!(rejected, "expected MalformedValue at index {}", bad_index);
        }
    }
}
