//! Site configuration for the running page
//!
//! Search order:
//! 1. `<script type="application/toml" id="site-config">` in the page
//! 2. Falls back to the embedded default config

use contracts::shared::config::{load_config_from_str, SiteConfig};
use once_cell::sync::OnceCell;

pub const CONFIG_ELEMENT_ID: &str = "site-config";

static CONFIG: OnceCell<SiteConfig> = OnceCell::new();

/// Configuration of this page, read from the DOM on first use
pub fn site_config() -> &'static SiteConfig {
    CONFIG.get_or_init(load_from_page)
}

fn load_from_page() -> SiteConfig {
    let inline = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    let Some(contents) = inline else {
        log::debug!("Using default embedded configuration");
        return SiteConfig::default();
    };

    match load_config_from_str(&contents) {
        Ok(config) => {
            log::info!("Loaded site config from #{}", CONFIG_ELEMENT_ID);
            config
        }
        Err(e) => {
            log::warn!("Ignoring #{}: {:#}", CONFIG_ELEMENT_ID, e);
            SiteConfig::default()
        }
    }
}
