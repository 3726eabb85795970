//! Configuration loading and types.

pub mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigOverrides, CATALOGUE_BASE_URL_ENV};
pub use types::{CatalogueConfig, Config, SiteConfig, UiConfig};
