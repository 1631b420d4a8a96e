// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::Deserialize;
use serde_json::Value;

use crate::errors::SeqPairError;

pub const CONFIG_FILENAME: &str = ".seqpairconfig";

// Contents of the optional JSON config file. Missing keys keep their defaults.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct SeqPairConfig {
    pub toast_duration_ms: u64,
    pub selection_clear_delay_ms: u64,
    pub monochrome: bool,
}

impl Default for SeqPairConfig {
    fn default() -> Self {
        SeqPairConfig {
            toast_duration_ms: 1000,
            selection_clear_delay_ms: 200,
            monochrome: false,
        }
    }
}

impl SeqPairConfig {
    pub fn from_value(value: &Value) -> Result<Self, SeqPairError> {
        Ok(SeqPairConfig::deserialize(value)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, SeqPairError> {
        let text = fs::read_to_string(path)?;
        let value: Value = serde_json::from_str(&text)?;
        Self::from_value(&value)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }

    pub fn selection_clear_delay(&self) -> Duration {
        Duration::from_millis(self.selection_clear_delay_ms)
    }
}

// $HOME first, then the current directory.
pub fn find_config() -> Option<PathBuf> {
    if let Ok(home) = std::env::var("HOME") {
        let path = PathBuf::from(home).join(CONFIG_FILENAME);
        if path.exists() {
            return Some(path);
        }
    }
    if let Ok(cwd) = std::env::current_dir() {
        let path = cwd.join(CONFIG_FILENAME);
        if path.exists() {
            return Some(path);
        }
    }
    None
}
