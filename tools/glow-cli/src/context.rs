//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use glow_core::{Storefront, StorefrontConfig};

use crate::output::Output;

/// Config file names searched for, nearest directory first.
pub const CONFIG_NAMES: [&str; 3] = ["glow.toml", ".glow.toml", "glow.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// Storefront configuration.
    pub config: StorefrontConfig,
    /// File the config was loaded from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = match config_path {
            Some(path) => {
                let config = StorefrontConfig::load(path)
                    .with_context(|| format!("Failed to load config: {}", path))?;
                (config, Some(PathBuf::from(path)))
            }
            None => match Self::find_config(&cwd) {
                Some(path) => {
                    let config = StorefrontConfig::load(&path)
                        .with_context(|| format!("Failed to load config: {}", path.display()))?;
                    (config, Some(path))
                }
                None => (StorefrontConfig::default(), None),
            },
        };

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<PathBuf> {
        start.ancestors().find_map(|dir| {
            CONFIG_NAMES
                .iter()
                .map(|name| dir.join(name))
                .find(|path| path.exists())
        })
    }

    /// A fresh storefront using this context's config.
    pub fn storefront(&self) -> Storefront {
        Storefront::new(self.config.clone())
    }
}
