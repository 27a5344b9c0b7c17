use crate::application::platform::{select_platform, PlatformCapabilities, PlatformKind, WidgetFamily};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ViewerConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub chart: ChartSettings,
    #[serde(default)]
    pub platform: PlatformSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct ChartSettings {
    pub min_pixels_per_label: f64,
    pub default_width: f64,
    pub default_height: f64,
    pub bar_spacing: f64,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            min_pixels_per_label: 160.0,
            default_width: 400.0,
            default_height: 200.0,
            bar_spacing: 4.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, Default)]
#[serde(default)]
pub struct PlatformSettings {
    pub kind: PlatformKind,
    pub family: WidgetFamily,
}

impl PlatformSettings {
    pub fn capabilities(&self) -> Arc<dyn PlatformCapabilities> {
        select_platform(self.kind, self.family)
    }
}

fn default_bind_addr() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_base_url() -> String {
    "https://api.telemetrydeck.com".to_string()
}

fn default_timeout_secs() -> u64 {
    15
}

/// Load `config/viewer.toml` (optional), overridden by `VIEWER__SECTION__KEY`
/// environment variables
pub fn load_viewer_config() -> anyhow::Result<ViewerConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/viewer").required(false))
        .add_source(
            config::Environment::with_prefix("VIEWER")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}
