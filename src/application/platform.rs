// Platform capabilities - chosen once at composition time
use serde::Deserialize;
use std::fmt::Debug;
use std::sync::Arc;

pub trait PlatformCapabilities: Debug + Send + Sync {
    fn name(&self) -> &'static str;

    /// Use short numeric dates on axis labels
    fn prefers_compact_dates(&self) -> bool;

    /// Pointer hover tooltips are available
    fn supports_hover(&self) -> bool;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DesktopPlatform;

impl PlatformCapabilities for DesktopPlatform {
    fn name(&self) -> &'static str {
        "desktop"
    }

    fn prefers_compact_dates(&self) -> bool {
        false
    }

    fn supports_hover(&self) -> bool {
        true
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MobilePlatform;

impl PlatformCapabilities for MobilePlatform {
    fn name(&self) -> &'static str {
        "mobile"
    }

    fn prefers_compact_dates(&self) -> bool {
        false
    }

    fn supports_hover(&self) -> bool {
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetFamily {
    Small,
    #[default]
    Medium,
    Large,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WidgetPlatform {
    pub family: WidgetFamily,
}

impl PlatformCapabilities for WidgetPlatform {
    fn name(&self) -> &'static str {
        "widget"
    }

    fn prefers_compact_dates(&self) -> bool {
        self.family == WidgetFamily::Small
    }

    // Widgets are static snapshots
    fn supports_hover(&self) -> bool {
        false
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformKind {
    #[default]
    Desktop,
    Mobile,
    Widget,
}

pub fn select_platform(kind: PlatformKind, family: WidgetFamily) -> Arc<dyn PlatformCapabilities> {
    match kind {
        PlatformKind::Desktop => Arc::new(DesktopPlatform),
        PlatformKind::Mobile => Arc::new(MobilePlatform),
        PlatformKind::Widget => Arc::new(WidgetPlatform { family }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_platform() {
        let desktop = select_platform(PlatformKind::Desktop, WidgetFamily::Small);
        assert_eq!(desktop.name(), "desktop");
        assert!(desktop.supports_hover());
        assert!(!desktop.prefers_compact_dates());

        let small_widget = select_platform(PlatformKind::Widget, WidgetFamily::Small);
        assert!(small_widget.prefers_compact_dates());
        assert!(!small_widget.supports_hover());

        let large_widget = select_platform(PlatformKind::Widget, WidgetFamily::Large);
        assert!(!large_widget.prefers_compact_dates());
    }
}
