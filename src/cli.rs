use crate::config::ConfigOverrides;
use crate::site::METADATA;
use clap::Parser;
use std::path::PathBuf;

/// Vanika Creations: Diwali gift hampers in your terminal
#[derive(Debug, Parser)]
#[command(name = "vanika")]
#[command(version)]
#[command(about = "Browse the Vanika Creations Diwali hamper catalogue")]
#[command(long_about = METADATA.description)]
#[command(after_long_help = METADATA.keyword_line())]
pub struct Cli {
    /// Config file (default: ~/.config/vanika/config.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory holding product and banner images
    #[arg(short, long)]
    pub assets: Option<PathBuf>,

    /// URL copied by the share-link action
    #[arg(long)]
    pub page_url: Option<String>,

    /// Base URL of the file store hosting the catalogue (overrides BUCKET_URL)
    #[arg(long)]
    pub catalogue_base_url: Option<String>,

    /// Do not capture the mouse
    #[arg(long)]
    pub no_mouse: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,
}

impl Cli {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            page_url: self.page_url.clone(),
            catalogue_base_url: self.catalogue_base_url.clone(),
            assets_dir: self.assets.clone(),
            disable_mouse: self.no_mouse,
        }
    }
}
