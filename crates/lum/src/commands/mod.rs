//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod nav;

use std::path::PathBuf;

use clap::Args;
use lum_config::{CliSettings, Config};
use lum_nav::{Navigator, NavigatorConfig};

use crate::error::CliError;

pub(crate) use check::CheckArgs;
pub(crate) use nav::NavArgs;

/// Configuration arguments shared by all commands.
#[derive(Args)]
pub(crate) struct ConfigArgs {
    /// Path to configuration file (default: auto-discover lum.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Document root directory (overrides config).
    #[arg(short, long, env = "LUM_SOURCE_DIR")]
    source_dir: Option<PathBuf>,

    /// Breadcrumb home title (overrides config).
    #[arg(long)]
    home_title: Option<String>,
}

impl ConfigArgs {
    /// Load configuration with CLI overrides applied.
    fn load(&self) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            source_dir: self.source_dir.clone(),
            home_title: self.home_title.clone(),
        };
        Ok(Config::load(self.config.as_deref(), Some(&cli_settings))?)
    }
}

/// Build a navigator from the `[navigation]` section.
fn navigator_from_config(config: &Config) -> Navigator {
    Navigator::new(NavigatorConfig {
        home_title: config.navigation.home_title.clone(),
        content_extension: config.navigation.content_extension.clone(),
        known_extensions: config.navigation.known_extensions.clone(),
    })
}
