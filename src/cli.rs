use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(
    name = "health-feed",
    version,
    about = "Browse health recipes in the terminal and count your taps"
)]
pub struct Cli {
    /// Name shown in the welcome header
    pub username: String,

    /// Config file (default: ~/.config/health-feed/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the item listing URL
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Write diagnostics to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Apply command-line overrides on top of a loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(endpoint) = &self.endpoint {
            config.feed.endpoint = endpoint.clone();
        }
        if let Some(log_file) = &self.log_file {
            config.logging.file = Some(log_file.clone());
        }
    }
}
