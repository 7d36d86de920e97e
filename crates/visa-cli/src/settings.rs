//! Settings file (`--config <PATH>`).
//!
//! ```toml
//! [content]
//! path = "content.json"
//!
//! [logging]
//! format = "json"
//! level = "debug"
//! ```
//!
//! Every section and key is optional. Command-line flags win over the file.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;

use crate::logging::LogFormat;

// =============================================================================
// ROOT SETTINGS
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub content: ContentSettings,
    pub logging: LoggingSettings,
}

impl Settings {
    /// Load settings from `path`.
    pub fn load_from(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read settings file {}", path.display()))?;
        let mut settings: Self = toml::from_str(&raw)
            .with_context(|| format!("failed to parse settings file {}", path.display()))?;
        settings.resolve_relative_to(path);
        Ok(settings)
    }

    /// A relative content path is taken relative to the settings file.
    fn resolve_relative_to(&mut self, settings_path: &Path) {
        let Some(content_path) = &self.content.path else {
            return;
        };
        if content_path.is_relative()
            && let Some(dir) = settings_path.parent()
        {
            self.content.path = Some(dir.join(content_path));
        }
    }
}

// =============================================================================
// SECTIONS
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentSettings {
    /// JSON content override replacing the built-in texts.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub format: Option<LogFormatSetting>,
    /// One of `off`, `error`, `warn`, `info`, `debug`, `trace`.
    pub level: Option<String>,
}

impl LoggingSettings {
    pub fn level_filter(&self) -> Result<Option<LevelFilter>> {
        self.level
            .as_deref()
            .map(|level| {
                LevelFilter::from_str(level).map_err(|_| anyhow!("unknown log level '{level}'"))
            })
            .transpose()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormatSetting {
    Pretty,
    Compact,
    Json,
}

impl From<LogFormatSetting> for LogFormat {
    fn from(format: LogFormatSetting) -> Self {
        match format {
            LogFormatSetting::Pretty => Self::Pretty,
            LogFormatSetting::Compact => Self::Compact,
            LogFormatSetting::Json => Self::Json,
        }
    }
}
