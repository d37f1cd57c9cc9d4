//! Context-driven message logging.
//!
//! A [`Logger`] owns its [`LoggerContext`]; callers build one from a stored or
//! hand-made context and pass it where logging is needed. Terminal output goes
//! through `tracing`, file output appends `<timestamp> - <message>` lines.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use chrono::{SecondsFormat, Utc};
use crossterm::style::{Color, Stylize};
use serde::{Deserialize, Serialize};
use strum_macros::Display;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::{ConfigStore, LogEnv, LogLevel, LogLocation, LoggerContext};
use crate::error::{Result, UtilError};

const DEFAULT_FILTER: &str = "info";

/// Installs a fmt subscriber filtered by `RUST_LOG` (default `info`).
/// Returns false if a global subscriber was already set.
pub fn init_tracing() -> bool {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_ok()
}

/// Per-level variants of one message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelMessages {
    pub debug: Option<String>,
    pub info: Option<String>,
    pub warn: Option<String>,
    pub error: Option<String>,
}

impl LevelMessages {
    /// Most specific message available at `level`, falling back towards info.
    pub fn for_level(&self, level: LogLevel) -> Option<&str> {
        let picked = match level {
            LogLevel::Info => self.info.as_ref(),
            LogLevel::Warn => self.warn.as_ref().or(self.info.as_ref()),
            LogLevel::Error => self
                .error
                .as_ref()
                .or(self.warn.as_ref())
                .or(self.info.as_ref()),
            LogLevel::Debug => None,
        };
        picked.map(String::as_str)
    }
}

/// Message variants keyed by environment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogMessages {
    pub development: Option<LevelMessages>,
    pub production: Option<LevelMessages>,
}

impl LogMessages {
    fn for_env(&self, env: LogEnv) -> Option<&LevelMessages> {
        match env {
            LogEnv::Development => self.development.as_ref(),
            LogEnv::Production => self.production.as_ref(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogMessage {
    Plain(String),
    Leveled(LogMessages),
}

impl From<&str> for LogMessage {
    fn from(s: &str) -> Self {
        LogMessage::Plain(s.to_string())
    }
}

impl From<String> for LogMessage {
    fn from(s: String) -> Self {
        LogMessage::Plain(s)
    }
}

impl From<LogMessages> for LogMessage {
    fn from(m: LogMessages) -> Self {
        LogMessage::Leveled(m)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Logger {
    ctx: LoggerContext,
}

impl Logger {
    pub fn new(ctx: LoggerContext) -> Self {
        Self { ctx }
    }

    pub fn from_store(store: &impl ConfigStore) -> Self {
        Self::new(store.load())
    }

    pub fn context(&self) -> &LoggerContext {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut LoggerContext {
        &mut self.ctx
    }

    /// The text that [`Logger::log`] would emit for `msg`, if any.
    pub fn resolve<'a>(&self, msg: &'a LogMessage) -> Option<&'a str> {
        match msg {
            LogMessage::Plain(_)
                if self.ctx.env == LogEnv::Production && self.ctx.log_level == LogLevel::Debug =>
            {
                None
            }
            LogMessage::Plain(text) => Some(text.as_str()),
            LogMessage::Leveled(messages) => messages
                .for_env(self.ctx.env)
                .and_then(|m| m.for_level(self.ctx.log_level)),
        }
    }

    /// Writes `msg` to the configured location. Returns whether anything was
    /// written.
    pub fn log(&self, msg: impl Into<LogMessage>) -> Result<bool> {
        let msg = msg.into();
        let Some(text) = self.resolve(&msg) else {
            return Ok(false);
        };
        match self.ctx.log_location {
            LogLocation::Terminal => log_to_terminal(text),
            LogLocation::File => self.log_to_file(text)?,
            LogLocation::Both => {
                log_to_terminal(text);
                self.log_to_file(text)?;
            }
        }
        Ok(true)
    }

    fn log_file(&self) -> Result<PathBuf> {
        self.ctx
            .resolved_log_file()
            .ok_or_else(|| UtilError::MissingValue("no log file path available".into()))
    }

    fn log_to_file(&self, text: &str) -> Result<()> {
        let path = self.log_file()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        writeln!(file, "{} - {}", Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true), text)?;
        Ok(())
    }
}

fn log_to_terminal(text: &str) {
    tracing::info!(target: "pmd_util::logger", "{text}");
}

/// Presets for [`log`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum LogTemplate {
    #[default]
    Info,
    Warn,
    Error,
    /// Info level, green text.
    Success,
    /// Caller-chosen level and colours.
    Custom { level: LogLevel, fg: Color, bg: Color },
}

impl LogTemplate {
    /// White on black at `level`.
    pub fn custom(level: LogLevel) -> Self {
        LogTemplate::Custom {
            level,
            fg: Color::White,
            bg: Color::Black,
        }
    }

    fn level(&self) -> LogLevel {
        match self {
            LogTemplate::Info | LogTemplate::Success => LogLevel::Info,
            LogTemplate::Warn => LogLevel::Warn,
            LogTemplate::Error => LogLevel::Error,
            LogTemplate::Custom { level, .. } => *level,
        }
    }

    /// `message` as it is printed under this template.
    pub fn render(&self, message: impl std::fmt::Display) -> String {
        let plain = message.to_string();
        match self {
            LogTemplate::Success => plain.green().to_string(),
            LogTemplate::Custom { fg, bg, .. } => plain.with(*fg).on(*bg).to_string(),
            _ => plain,
        }
    }
}

/// One-off terminal message at the severity `template` maps to.
pub fn log(message: impl std::fmt::Display, template: LogTemplate) {
    let text = template.render(message);
    match template.level() {
        LogLevel::Debug => tracing::debug!("{text}"),
        LogLevel::Info => tracing::info!("{text}"),
        LogLevel::Warn => tracing::warn!("{text}"),
        LogLevel::Error => tracing::error!("{text}"),
    }
}
