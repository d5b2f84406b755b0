//! Configuration file and flag resolution
//!
//! Connection and naming settings come from, in order of precedence: the
//! command line, an optional TOML file, the built-in defaults.

use crate::args::{Args, MISSING_POLICY};
use anyhow::{Context, Result};
use cluster::ClusterConfig;
use reaper_core::{DiskBudget, IndexPattern, RetentionWindow, RunMode, SystemClock};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Contents of a config file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub cluster: ClusterSection,
    pub indices: IndicesSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClusterSection {
    pub host: String,
    pub port: u16,
    pub timeout_secs: u64,
}

impl Default for ClusterSection {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 9200,
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IndicesSection {
    pub prefix: String,
    pub separator: String,
}

impl Default for IndicesSection {
    fn default() -> Self {
        Self {
            prefix: "logstash-".to_string(),
            separator: ".".to_string(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("cluster host must not be empty")]
    EmptyHost,
    #[error("cluster port must not be 0")]
    ZeroPort,
    #[error("timeout must be at least 1 second")]
    ZeroTimeout,
    #[error("date separator must not be empty")]
    EmptySeparator,
}

impl FileConfig {
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.cluster.host.trim().is_empty() {
            return Err(ConfigError::EmptyHost);
        }
        if self.cluster.port == 0 {
            return Err(ConfigError::ZeroPort);
        }
        if self.cluster.timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        if self.indices.separator.is_empty() {
            return Err(ConfigError::EmptySeparator);
        }
        Ok(())
    }

    /// Override file values with whatever was given on the command line
    pub fn apply_args(mut self, args: &Args) -> Self {
        if let Some(host) = &args.host {
            self.cluster.host = host.clone();
        }
        if let Some(port) = args.port {
            self.cluster.port = port;
        }
        if let Some(timeout) = args.timeout {
            self.cluster.timeout_secs = timeout;
        }
        if let Some(prefix) = &args.prefix {
            self.indices.prefix = prefix.clone();
        }
        if let Some(separator) = &args.separator {
            self.indices.separator = separator.clone();
        }
        self
    }
}

/// Read and parse a config file
pub fn load(path: &Path) -> Result<FileConfig> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("Failed to parse config file {}", path.display()))
}

/// Which selector runs
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Policy {
    /// Delete by age against daily and/or hourly windows
    Retention(RetentionWindow),
    /// Delete oldest-first above a disk budget
    DiskUsage { gb: f64, budget: DiskBudget },
}

/// Everything a run needs, fully resolved
#[derive(Debug, Clone)]
pub struct Settings {
    pub cluster: ClusterConfig,
    pub pattern: IndexPattern,
    pub policy: Policy,
    pub mode: RunMode,
    pub clock: SystemClock,
}

impl Settings {
    pub fn resolve(args: &Args) -> Result<Self> {
        let file = match &args.config {
            Some(path) => load(path)?,
            None => FileConfig::default(),
        };
        Self::from_parts(args, file)
    }

    pub fn from_parts(args: &Args, file: FileConfig) -> Result<Self> {
        let merged = file.apply_args(args);
        merged.validate().context("Invalid configuration")?;

        let policy = match args.disk_space_to_keep {
            Some(gb) => Policy::DiskUsage {
                gb,
                budget: DiskBudget::from_gb(gb)?,
            },
            None => {
                let window = RetentionWindow {
                    days: args.days_to_keep,
                    hours: args.hours_to_keep,
                };
                anyhow::ensure!(!window.is_empty(), MISSING_POLICY);
                Policy::Retention(window)
            }
        };

        Ok(Self {
            cluster: ClusterConfig {
                host: merged.cluster.host,
                port: merged.cluster.port,
                timeout: Duration::from_secs(merged.cluster.timeout_secs),
            },
            pattern: IndexPattern::new(merged.indices.prefix, merged.indices.separator),
            policy,
            mode: RunMode::from_dry_run(args.dry_run),
            clock: if args.local_time {
                SystemClock::local()
            } else {
                SystemClock::utc()
            },
        })
    }
}
