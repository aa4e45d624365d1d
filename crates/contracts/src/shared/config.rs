use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SiteConfig {
    /// Directory the `<pagetype>.json` files are fetched from, relative to the page
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub events: EventsConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RenderConfig {
    /// Hold the completion signal until every image has loaded, errored or timed out
    #[serde(default = "default_wait_for_images")]
    pub wait_for_images: bool,
    /// Upper bound for a single image wait
    #[serde(default = "default_image_timeout_ms")]
    pub image_timeout_ms: u32,
    /// Pause between finishing a render and broadcasting completion
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct EventsConfig {
    #[serde(default = "default_completion_event")]
    pub completion_event: String,
}

fn default_data_dir() -> String {
    "data".to_string()
}

fn default_wait_for_images() -> bool {
    true
}

fn default_image_timeout_ms() -> u32 {
    5000
}

fn default_settle_delay_ms() -> u32 {
    100
}

fn default_completion_event() -> String {
    "entriesRendered".to_string()
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            wait_for_images: default_wait_for_images(),
            image_timeout_ms: default_image_timeout_ms(),
            settle_delay_ms: default_settle_delay_ms(),
        }
    }
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self {
            completion_event: default_completion_event(),
        }
    }
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
data_dir = "data"

[render]
wait_for_images = true
image_timeout_ms = 5000
settle_delay_ms = 100

[events]
completion_event = "entriesRendered"
"#;

static DEFAULT: Lazy<SiteConfig> = Lazy::new(|| {
    toml::from_str(DEFAULT_CONFIG).unwrap_or_else(|_| SiteConfig {
        data_dir: default_data_dir(),
        render: RenderConfig::default(),
        events: EventsConfig::default(),
    })
});

impl Default for SiteConfig {
    fn default() -> Self {
        DEFAULT.clone()
    }
}

/// Parse a configuration document; missing keys take their defaults
pub fn load_config_from_str(contents: &str) -> anyhow::Result<SiteConfig> {
    let config: SiteConfig = toml::from_str(contents)?;
    if config.render.image_timeout_ms == 0 {
        anyhow::bail!("render.image_timeout_ms must be greater than zero");
    }
    if config.events.completion_event.trim().is_empty() {
        anyhow::bail!("events.completion_event must not be empty");
    }
    Ok(config)
}
