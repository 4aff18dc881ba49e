use std::path::{Path, PathBuf};

use anyhow::Result;
use config::{Config, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    pub input: InputConfig,
    pub logging: LoggingConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct InputConfig {
    /// Opening-hours JSON file used when none is given on the command line
    pub path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, Default)]
pub struct OutputConfig {
    pub skip_trailing_newline: bool,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        // Load .env file (silently ignore if not present)
        let _ = dotenvy::dotenv();

        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("opening-hours");

        Self::load_from(&[
            PathBuf::from("config.toml"),
            config_dir.join("config.toml"),
        ])
    }

    /// Load with explicit config file locations, later files overriding earlier ones.
    ///
    /// Missing files are ignored. Environment variables
    /// (`OPENING_HOURS__LOGGING__LEVEL=debug`) override every file.
    pub fn load_from(files: &[impl AsRef<Path>]) -> Result<Self> {
        let mut builder = Config::builder()
            // 1. Load default values
            .set_default("input.path", None::<String>)?
            .set_default("logging.level", "info")?
            .set_default("output.skip_trailing_newline", false)?;

        // 2. Load config files (optional)
        for file in files {
            builder = builder.add_source(File::from(file.as_ref()).required(false));
        }

        // 3. Load from Environment variables
        let builder = builder.add_source(Environment::with_prefix("OPENING_HOURS").separator("__"));

        let s = builder.build()?;
        Ok(s.try_deserialize()?)
    }
}
