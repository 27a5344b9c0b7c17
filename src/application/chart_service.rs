// Chart service - turns insight results into prepared charts
use crate::application::annotations::{annotate, hover_label};
use crate::application::chart_store::ChartStore;
use crate::application::formatting::format_value;
use crate::application::geometry_mapper::{map_to_bars, map_to_hover_position, map_to_path, map_to_slices};
use crate::application::insight_source::{DateRange, InsightSource};
use crate::application::label_planner::LabelPlanner;
use crate::application::platform::PlatformCapabilities;
use crate::application::prepared_chart::{
    ChartOutcome, ChartPrimitives, HoverDetails, PreparedChart, TableRow, Viewport,
};
use crate::domain::chart_data_set::ChartDataSet;
use crate::domain::error::ChartError;
use crate::domain::geometry::Rect;
use crate::domain::insight::{DisplayMode, InsightCalculationResult};
use crate::infrastructure::config::ChartSettings;
use anyhow::Context;
use std::sync::Arc;

#[derive(Clone)]
pub struct ChartService {
    source: Arc<dyn InsightSource>,
    store: ChartStore,
    platform: Arc<dyn PlatformCapabilities>,
    settings: ChartSettings,
}

impl ChartService {
    pub fn new(
        source: Arc<dyn InsightSource>,
        store: ChartStore,
        platform: Arc<dyn PlatformCapabilities>,
        settings: ChartSettings,
    ) -> Self {
        Self {
            source,
            store,
            platform,
            settings,
        }
    }

    pub fn store(&self) -> &ChartStore {
        &self.store
    }

    pub fn settings(&self) -> &ChartSettings {
        &self.settings
    }

    /// Fetch the latest result for an insight, prepare it and publish it to
    /// the store. Fetch failures are passed up unchanged.
    pub async fn refresh(
        &self,
        insight_id: &str,
        range: &DateRange,
        viewport: Viewport,
    ) -> anyhow::Result<Arc<PreparedChart>> {
        let result = self
            .source
            .fetch_result(insight_id, range)
            .await
            .with_context(|| format!("Failed to fetch result for insight {}", insight_id))?;

        let chart = self.prepare(result, viewport);
        Ok(self.store.publish(chart))
    }

    /// Prepare drawable primitives for one calculation result
    pub fn prepare(&self, result: InsightCalculationResult, viewport: Viewport) -> PreparedChart {
        let InsightCalculationResult { insight, data, .. } = result;

        let outcome = match ChartDataSet::new(data, insight.group_by) {
            Ok(data_set) => match self.render(&data_set, insight.display_mode, viewport) {
                Ok(primitives) => ChartOutcome::Ready(primitives),
                Err(e) => {
                    tracing::warn!("Cannot render insight {}: {}", insight.id, e);
                    ChartOutcome::Unrenderable { reason: e.to_string() }
                }
            },
            Err(e) if e.is_empty_state() => {
                tracing::debug!("Insight {} has no data", insight.id);
                ChartOutcome::NoData
            }
            Err(e) => {
                tracing::warn!("Rejecting data for insight {}: {}", insight.id, e);
                ChartOutcome::Unrenderable { reason: e.to_string() }
            }
        };

        PreparedChart {
            insight_id: insight.id,
            title: insight.title,
            display_mode: insight.display_mode,
            group_by: insight.group_by,
            outcome,
        }
    }

    fn render(
        &self,
        data_set: &ChartDataSet,
        display_mode: DisplayMode,
        viewport: Viewport,
    ) -> Result<ChartPrimitives, ChartError> {
        let rect = Rect::from_size(viewport.width, viewport.height);
        let planner = LabelPlanner::new(self.settings.min_pixels_per_label)
            .with_compact_dates(self.platform.prefers_compact_dates());
        let mut primitives = ChartPrimitives::new(data_set.highest_value(), data_set.lowest_value());

        match display_mode {
            DisplayMode::LineChart => {
                primitives.labels = planner.plan(data_set, viewport.width);
                primitives.path = map_to_path(data_set, rect, false)?;
                primitives.area = map_to_path(data_set, rect, true)?;
                primitives.annotations = Some(annotate(data_set));
            }
            DisplayMode::BarChart => {
                primitives.labels = planner.plan(data_set, viewport.width);
                primitives.bars = map_to_bars(data_set, rect, self.settings.bar_spacing)?;
            }
            DisplayMode::PieChart => {
                primitives.slices = map_to_slices(data_set)?;
            }
            DisplayMode::Raw => {
                primitives.rows = data_set
                    .data()
                    .iter()
                    .map(|point| TableRow {
                        label: point.x_axis_value().to_string(),
                        value: format_value(point.y_axis_value()),
                    })
                    .collect();
            }
        }

        let hover_enabled = matches!(display_mode, DisplayMode::LineChart | DisplayMode::BarChart)
            && self.platform.supports_hover();
        if let Some(fraction) = viewport.pointer_x_fraction.filter(|_| hover_enabled) {
            let position = map_to_hover_position(data_set, rect, fraction);
            primitives.hover = hover_label(data_set, position.index)
                .map(|label| HoverDetails { position, label });
        }

        Ok(primitives)
    }
}
