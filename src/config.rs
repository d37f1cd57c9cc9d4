use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use strum_macros::Display;

use crate::app_dirs::AppDirs;
use crate::error::{Result, UtilError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LogEnv {
    #[default]
    Development,
    Production,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LogLevel {
    #[default]
    Info,
    Warn,
    Error,
    Debug,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LogLocation {
    #[default]
    Terminal,
    File,
    Both,
}

/// Settings a [`crate::logging::Logger`] is built from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LoggerContext {
    pub env: LogEnv,
    pub log_level: LogLevel,
    pub log_location: LogLocation,
    /// Overrides [`AppDirs::log_path`] for file output.
    pub log_file: Option<PathBuf>,
}

impl LoggerContext {
    /// Sets the env or the level from its lowercase name.
    pub fn apply_setting(&mut self, setting: &str) -> Result<()> {
        match setting {
            "development" => self.env = LogEnv::Development,
            "production" => self.env = LogEnv::Production,
            "info" => self.log_level = LogLevel::Info,
            "warn" => self.log_level = LogLevel::Warn,
            "error" => self.log_level = LogLevel::Error,
            "debug" => self.log_level = LogLevel::Debug,
            other => return Err(UtilError::InvalidLoggerSetting(other.to_string())),
        }
        Ok(())
    }

    pub fn with_setting(mut self, setting: &str) -> Result<Self> {
        self.apply_setting(setting)?;
        Ok(self)
    }

    pub fn resolved_log_file(&self) -> Option<PathBuf> {
        self.log_file.clone().or_else(AppDirs::log_path)
    }
}

pub trait ConfigStore {
    fn load(&self) -> LoggerContext;
    fn save(&self, ctx: &LoggerContext) -> std::io::Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        let path = AppDirs::config_path().unwrap_or_else(|| PathBuf::from("pmd_util_logger.json"));
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    /// Missing or unreadable files yield the default context.
    fn load(&self) -> LoggerContext {
        fs::read(&self.path)
            .ok()
            .and_then(|bytes| serde_json::from_slice::<LoggerContext>(&bytes).ok())
            .unwrap_or_default()
    }

    fn save(&self, ctx: &LoggerContext) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(ctx).map_err(std::io::Error::other)?;
        fs::write(&self.path, data)
    }
}
