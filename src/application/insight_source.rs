// Source trait for insight calculation results
use crate::domain::insight::InsightCalculationResult;
use async_trait::async_trait;
use chrono::{DateTime, Datelike, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

impl DateRange {
    pub fn new(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        Self { from, to }
    }

    /// From the start of the current month until `now`
    pub fn month_to_date(now: DateTime<Utc>) -> Self {
        let from = now
            .date_naive()
            .with_day(1)
            .and_then(|day| day.and_hms_opt(0, 0, 0))
            .map(|start| start.and_utc())
            .unwrap_or(now);
        Self { from, to: now }
    }
}

#[async_trait]
pub trait InsightSource: Send + Sync {
    /// Fetch the calculated result of one insight over a date range
    async fn fetch_result(&self, insight_id: &str, range: &DateRange) -> anyhow::Result<InsightCalculationResult>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_month_to_date() {
        let now = Utc.with_ymd_and_hms(2021, 6, 28, 14, 30, 0).unwrap();
        let range = DateRange::month_to_date(now);

        assert_eq!(range.from, Utc.with_ymd_and_hms(2021, 6, 1, 0, 0, 0).unwrap());
        assert_eq!(range.to, now);
    }
}
