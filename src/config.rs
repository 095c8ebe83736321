//! Configuration Management
//!
//! Handles persistent configuration storage for topofetch.

use crate::pool::DEFAULT_WORKER_COUNT;
use crate::targets::DEFAULT_BASE_URL;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Base URL of the inventory service
    #[serde(default)]
    pub base_url: Option<String>,
    /// Worker count for batch dispatch
    #[serde(default)]
    pub workers: Option<usize>,
    /// Simulated per-job processing delay, in milliseconds
    #[serde(default)]
    pub processing_delay_ms: Option<u64>,
}

impl Config {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("topofetch").join("config.json"))
    }

    /// Load configuration from disk
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };

        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        let Some(path) = Self::config_path() else {
            return Ok(());
        };

        // Create parent directory
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;

        Ok(())
    }

    /// Get effective base URL (config > built-in default)
    pub fn effective_base_url(&self) -> String {
        self.base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }

    /// Get effective worker count (config > built-in default)
    pub fn effective_workers(&self) -> usize {
        self.workers.unwrap_or(DEFAULT_WORKER_COUNT)
    }

    /// Get effective processing delay in milliseconds (config > zero)
    pub fn effective_delay_ms(&self) -> u64 {
        self.processing_delay_ms.unwrap_or(0)
    }
}
