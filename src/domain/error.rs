// Chart data errors
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    /// A y-axis value did not parse as a finite decimal number
    #[error("data point {index} has a malformed y-axis value {value:?}")]
    MalformedValue { index: usize, value: String },

    #[error("data set contains no points")]
    EmptyDataSet,

    #[error("a line needs at least two points, got {count}")]
    InsufficientPoints { count: usize },

    /// The value range would produce non-finite pixel coordinates
    #[error("value range is degenerate")]
    DegenerateRange,
}

impl ChartError {
    /// Empty input is a valid "no data" state rather than a failure
    pub fn is_empty_state(&self) -> bool {
        matches!(self, ChartError::EmptyDataSet)
    }

    /// Attach the position of the offending point within its series
    pub fn at_index(self, index: usize) -> Self {
        match self {
            ChartError::MalformedValue { value, .. } => ChartError::MalformedValue { index, value },
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_state_is_distinguished() {
        assert!(ChartError::EmptyDataSet.is_empty_state());
        assert!(!ChartError::MalformedValue { index: 0, value: "x".to_string() }.is_empty_state());
        assert!(!ChartError::DegenerateRange.is_empty_state());
    }

    #[test]
    fn test_error_messages() {
        let err = ChartError::InsufficientPoints { count: 1 };
        assert_eq!(err.to_string(), "a line needs at least two points, got 1");

        let err = ChartError::MalformedValue { index: 0, value: "abc".to_string() }.at_index(3);
        assert_eq!(err.to_string(), "data point 3 has a malformed y-axis value \"abc\"");

        assert_eq!(ChartError::DegenerateRange.at_index(3), ChartError::DegenerateRange);
    }
}
