use anyhow::{anyhow, Context, Result};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::substitution::{MatchMode, TranslationRule};

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// How old words are matched
    #[serde(default)]
    pub match_mode: MatchMode,

    /// Copy every result to the system clipboard
    #[serde(default)]
    pub copy_to_clipboard: bool,

    /// Suffix inserted before the extension of folder-mode outputs
    #[serde(default = "default_output_suffix")]
    pub output_suffix: String,

    /// Extensions picked up in folder mode
    #[serde(default = "default_file_extensions")]
    pub file_extensions: Vec<String>,

    /// Rules applied when none are given on the command line
    #[serde(default)]
    pub translations: Vec<TranslationRule>,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn default_output_suffix() -> String {
    "translated".to_string()
}

fn default_file_extensions() -> Vec<String> {
    vec!["txt".to_string(), "md".to_string()]
}

impl Config {
    /// Load a configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {:?}", path))?;

        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Load the file at `path`, or write and return the defaults when it is missing
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<(Self, bool)> {
        let path = path.as_ref();
        if path.exists() {
            return Ok((Self::load(path)?, false));
        }

        let config = Self::default();
        config.save(path)?;
        Ok((config, true))
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let config_json = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;

        std::fs::write(path, config_json)
            .with_context(|| format!("Failed to write config to file: {:?}", path))
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.output_suffix.trim().is_empty() {
            return Err(anyhow!("Output suffix must not be empty"));
        }

        if self.file_extensions.is_empty() {
            return Err(anyhow!("At least one file extension is required"));
        }

        if let Some(ext) = self.file_extensions.iter().find(|e| e.trim_start_matches('.').is_empty()) {
            return Err(anyhow!("Invalid file extension: '{}'", ext));
        }

        for (index, rule) in self.translations.iter().enumerate() {
            if rule.old_word.is_empty() || rule.new_word.is_empty() {
                return Err(anyhow!("Configured translation {} has an empty word", index));
            }
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            match_mode: MatchMode::default(),
            copy_to_clipboard: false,
            output_suffix: default_output_suffix(),
            file_extensions: default_file_extensions(),
            translations: Vec::new(),
            log_level: LogLevel::default(),
        }
    }
}
