//! Logging configuration and utilities for feedlab.
//!
//! [`Logger`] is a cheap, cloneable handle. It filters by [`LoggingConfig`],
//! writes accepted entries to stderr, and can capture them in a
//! [`LogCollector`] instead (tests read captured entries back).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::Write;
use std::sync::{Arc, Mutex};

/// Log level for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn rank(self) -> u8 {
        match self {
            LogLevel::Error => 0,
            LogLevel::Warn => 1,
            LogLevel::Info => 2,
            LogLevel::Debug => 3,
            LogLevel::Trace => 4,
        }
    }

    /// Check if this level should log messages at the given level
    pub fn should_log(&self, level: LogLevel) -> bool {
        self.rank() >= level.rank()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Trace => "TRACE",
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            other => Err(format!("unknown log level: {other}")),
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Plain,
    Json,
    Compact,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum log level to output
    #[serde(default)]
    pub level: LogLevel,
    /// Output format
    #[serde(default)]
    pub format: LogFormat,
    /// Enable timestamps
    #[serde(default = "default_true")]
    pub timestamps: bool,
    /// Component-specific log levels
    #[serde(default)]
    pub component_levels: HashMap<String, LogLevel>,
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            format: LogFormat::Plain,
            timestamps: true,
            component_levels: HashMap::new(),
        }
    }
}

impl LoggingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_component_level(mut self, component: impl Into<String>, level: LogLevel) -> Self {
        self.component_levels.insert(component.into(), level);
        self
    }

    /// Get the effective log level for a component
    pub fn effective_level(&self, component: Option<&str>) -> LogLevel {
        component
            .and_then(|comp| self.component_levels.get(comp).copied())
            .unwrap_or(self.level)
    }

    /// Check if a message at the given level should be logged
    pub fn should_log(&self, level: LogLevel, component: Option<&str>) -> bool {
        self.effective_level(component).should_log(level)
    }
}

/// A log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: LogLevel,
    pub component: Option<String>,
    pub message: String,
}

impl LogEntry {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            level,
            component: None,
            message: message.into(),
        }
    }

    pub fn with_component(
        level: LogLevel,
        component: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            level,
            component: Some(component.into()),
            message: message.into(),
        }
    }

    /// Render the entry as a single output line.
    pub fn render(&self, config: &LoggingConfig) -> String {
        match config.format {
            LogFormat::Json => serde_json::to_string(self).unwrap_or_else(|_| self.message.clone()),
            LogFormat::Compact => {
                let tag = &self.level.as_str()[..1];
                match &self.component {
                    Some(c) => format!("{tag} {c}: {}", self.message),
                    None => format!("{tag} {}", self.message),
                }
            }
            LogFormat::Plain => {
                let mut line = String::new();
                if config.timestamps {
                    line.push_str(&self.timestamp);
                    line.push(' ');
                }
                line.push_str(&format!("{:<5}", self.level.as_str()));
                if let Some(c) = &self.component {
                    line.push_str(&format!(" [{c}]"));
                }
                line.push(' ');
                line.push_str(&self.message);
                line
            }
        }
    }
}

/// Log collector for capturing log entries
#[derive(Debug, Default)]
pub struct LogCollector {
    entries: Vec<LogEntry>,
}

impl LogCollector {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, entry: LogEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Get entries matching a level
    pub fn filter_by_level(&self, level: LogLevel) -> Vec<&LogEntry> {
        self.entries.iter().filter(|e| e.level == level).collect()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[derive(Debug, Clone, Default)]
enum Sink {
    #[default]
    Stderr,
    Capture(Arc<Mutex<LogCollector>>),
    Discard,
}

/// Leveled logger handle shared by the engine, the demo context and the CLI.
#[derive(Debug, Clone, Default)]
pub struct Logger {
    config: Arc<LoggingConfig>,
    sink: Sink,
}

impl Logger {
    /// Logger that writes accepted entries to stderr.
    pub fn new(config: LoggingConfig) -> Self {
        Self {
            config: Arc::new(config),
            sink: Sink::Stderr,
        }
    }

    /// Logger that captures accepted entries instead of writing them.
    pub fn capturing(config: LoggingConfig) -> Self {
        Self {
            config: Arc::new(config),
            sink: Sink::Capture(Arc::new(Mutex::new(LogCollector::new()))),
        }
    }

    /// Logger that drops everything.
    pub fn silent() -> Self {
        Self {
            config: Arc::new(LoggingConfig::default()),
            sink: Sink::Discard,
        }
    }

    pub fn config(&self) -> &LoggingConfig {
        &self.config
    }

    pub fn enabled(&self, level: LogLevel, component: &str) -> bool {
        self.config.should_log(level, Some(component))
    }

    pub fn log(&self, level: LogLevel, component: &str, message: impl Into<String>) {
        if !self.enabled(level, component) {
            return;
        }
        let entry = LogEntry::with_component(level, component, message);
        match &self.sink {
            Sink::Capture(collector) => {
                let mut guard = collector.lock().unwrap_or_else(|p| p.into_inner());
                guard.push(entry);
            }
            Sink::Stderr => {
                let line = entry.render(&self.config);
                let _ = writeln!(std::io::stderr().lock(), "{line}");
            }
            Sink::Discard => {}
        }
    }

    pub fn error(&self, component: &str, message: impl Into<String>) {
        self.log(LogLevel::Error, component, message);
    }

    pub fn warn(&self, component: &str, message: impl Into<String>) {
        self.log(LogLevel::Warn, component, message);
    }

    pub fn info(&self, component: &str, message: impl Into<String>) {
        self.log(LogLevel::Info, component, message);
    }

    pub fn debug(&self, component: &str, message: impl Into<String>) {
        self.log(LogLevel::Debug, component, message);
    }

    /// Captured entries, oldest first. Empty unless the logger is capturing.
    pub fn entries(&self) -> Vec<LogEntry> {
        match &self.sink {
            Sink::Capture(collector) => collector
                .lock()
                .unwrap_or_else(|p| p.into_inner())
                .entries()
                .to_vec(),
            _ => Vec::new(),
        }
    }
}
