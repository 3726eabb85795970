use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub catalogue: CatalogueConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Where the page is published.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// URL copied by the share-link action.
    #[serde(default = "default_page_url")]
    pub page_url: String,
}

/// Downloadable catalogue document hosted on an external file store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogueConfig {
    /// Base URL of the file store. Overridden by `BUCKET_URL`.
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default = "default_catalogue_file")]
    pub file_name: String,
}

/// Terminal UI tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event loop tick in milliseconds (default: 50).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Modal fade-out duration in milliseconds (default: 300).
    #[serde(default = "default_close_transition_ms")]
    pub close_transition_ms: u64,
    /// How long toasts stay on screen in milliseconds (default: 2000).
    #[serde(default = "default_toast_duration_ms")]
    pub toast_duration_ms: u64,
    /// Rows scrolled before the navigation bar turns solid (default: 3).
    #[serde(default = "default_scroll_threshold")]
    pub scroll_threshold: u16,
    /// Rows moved per scroll key press or wheel notch (default: 3).
    #[serde(default = "default_scroll_step")]
    pub scroll_step: u16,
    /// Directory holding the product and banner images.
    #[serde(default)]
    pub assets_dir: Option<PathBuf>,
    /// Capture mouse input for clicks and wheel scrolling (default: true).
    #[serde(default = "default_mouse")]
    pub mouse: bool,
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    pub fn close_transition(&self) -> Duration {
        Duration::from_millis(self.close_transition_ms)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }
}

fn default_page_url() -> String {
    "http://localhost:3000/".to_string()
}

fn default_catalogue_file() -> String {
    "vanika-diwali-hampers.pdf".to_string()
}

fn default_tick_rate_ms() -> u64 {
    50
}

fn default_close_transition_ms() -> u64 {
    300
}

fn default_toast_duration_ms() -> u64 {
    2000
}

fn default_scroll_threshold() -> u16 {
    3
}

fn default_scroll_step() -> u16 {
    3
}

fn default_mouse() -> bool {
    true
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            page_url: default_page_url(),
        }
    }
}

impl Default for CatalogueConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            file_name: default_catalogue_file(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            close_transition_ms: default_close_transition_ms(),
            toast_duration_ms: default_toast_duration_ms(),
            scroll_threshold: default_scroll_threshold(),
            scroll_step: default_scroll_step(),
            assets_dir: None,
            mouse: default_mouse(),
        }
    }
}
