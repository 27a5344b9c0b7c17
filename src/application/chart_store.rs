// Observable store of the latest prepared chart per insight
use crate::application::prepared_chart::PreparedChart;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::watch;

pub type ChartReceiver = watch::Receiver<Option<Arc<PreparedChart>>>;

/// Each publish replaces the previous chart for that insight wholesale and
/// wakes every subscriber. Charts are never mutated in place.
#[derive(Debug, Clone, Default)]
pub struct ChartStore {
    channels: Arc<Mutex<HashMap<String, watch::Sender<Option<Arc<PreparedChart>>>>>>,
}

impl ChartStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn publish(&self, chart: PreparedChart) -> Arc<PreparedChart> {
        let chart = Arc::new(chart);
        let mut channels = self.channels.lock().unwrap_or_else(|e| e.into_inner());
        let sender = channels
            .entry(chart.insight_id.clone())
            .or_insert_with(|| watch::channel(None).0);
        sender.send_replace(Some(chart.clone()));

        tracing::debug!(
            "Published chart for insight {} to {} subscribers",
            chart.insight_id,
            sender.receiver_count()
        );
        chart
    }

    pub fn subscribe(&self, insight_id: &str) -> ChartReceiver {
        let mut channels = self.channels.lock().unwrap_or_else(|e| e.into_inner());
        channels
            .entry(insight_id.to_string())
            .or_insert_with(|| watch::channel(None).0)
            .subscribe()
    }

    pub fn current(&self, insight_id: &str) -> Option<Arc<PreparedChart>> {
        let channels = self.channels.lock().unwrap_or_else(|e| e.into_inner());
        channels.get(insight_id).and_then(|sender| sender.borrow().clone())
    }
}
