//! Configuration for rendering defaults

use anyhow::{bail, Context, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::size::IconSize;

/// Defaults applied to every icon request made through the CLI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Prefix for asset paths (default: empty, i.e. site root)
    pub asset_root: String,
    /// Size used when none is given (default: md)
    pub default_size: IconSize,
    /// Extra CSS class added to every icon (default: none)
    pub class: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            asset_root: String::new(),
            default_size: IconSize::Md,
            class: None,
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load() -> Self {
        let Some(config_path) = Self::get_config_path() else {
            log::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if config_path.exists() {
            match Self::load_from_file(&config_path) {
                Ok(config) => {
                    log::debug!("Loaded config from {:?}", config_path);
                    config
                }
                Err(e) => {
                    log::warn!("Failed to load config from {:?}: {:#}", config_path, e);
                    log::warn!("Using default configuration");
                    Self::default()
                }
            }
        } else {
            // Create default config file
            let config = Self::default();
            if let Err(e) = config.save_to_file(&config_path) {
                log::warn!("Failed to save default config: {:#}", e);
            } else {
                log::info!("Created default config at {:?}", config_path);
            }
            config
        }
    }

    /// Get the configuration file path. `PUBLICON_CONFIG` wins over the
    /// XDG location.
    fn get_config_path() -> Option<PathBuf> {
        if let Some(path) = env::var_os("PUBLICON_CONFIG") {
            return Some(PathBuf::from(path));
        }

        let config_dir = env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))?;

        Some(config_dir.join("publicon").join("publiconrc"))
    }

    /// Load configuration from a file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {:?}", path))?;
        Self::parse(&contents)
    }

    /// Parse `key = value` lines. Blank lines and `#` comments are skipped.
    pub fn parse(contents: &str) -> Result<Self> {
        let mut config = Self::default();

        for (lineno, line) in contents.lines().enumerate() {
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                bail!("line {}: expected key = value, got {:?}", lineno + 1, line);
            };
            let key = key.trim();
            let value = value.trim();

            match key {
                "asset_root" => {
                    config.asset_root = value.to_string();
                }
                "default_size" => {
                    config.default_size = value
                        .parse()
                        .with_context(|| format!("line {}: invalid default_size", lineno + 1))?;
                }
                "class" => {
                    config.class = (!value.is_empty()).then(|| value.to_string());
                }
                _ => {
                    log::warn!("Unknown config key: {}", key);
                }
            }
        }

        Ok(config)
    }

    /// Save configuration to a file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let contents = format!(
            "# publicon configuration\n\
             \n\
             # Prefix for icon asset paths, e.g. https://cdn.example.com (default: empty)\n\
             asset_root = {}\n\
             \n\
             # Icon size when none is given: sm, md, lg or pixels (default: md)\n\
             default_size = {}\n\
             \n\
             # Extra CSS class added to every icon (default: empty)\n\
             class = {}\n",
            self.asset_root,
            self.default_size,
            self.class.as_deref().unwrap_or(""),
        );

        fs::write(path, contents).context("Failed to write config file")?;

        Ok(())
    }
}
