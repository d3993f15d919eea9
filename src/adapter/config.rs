//! Configuration File
//!
//! JSON設定ファイルの読み込み

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::application::dto::aggregate_config::AggregateConfig;
use crate::domain::services::document_transform::{DEFAULT_SEPARATOR, DEFAULT_TRAILER};
use crate::domain::services::reference_inliner::{
    DEFAULT_FENCE_PREFIX, DEFAULT_FENCE_SUFFIX, DEFAULT_SENTINEL,
};

/// 設定ファイルの既定パス
pub const DEFAULT_CONFIG_PATH: &str = "./docgen.json";

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub source_directories: Vec<String>,
    pub output_path: String,
    pub trailer: String,
    pub separator: String,
    pub max_depth: usize,
    pub sort_entries: bool,

    // Snippet inlining
    pub inline_references: bool,
    pub sentinel: String,
    pub fence_prefix: String,
    pub fence_suffix: String,
    pub reference_root: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_directories: vec!["./Documentations".to_string()],
            output_path: "./README.md".to_string(),
            trailer: DEFAULT_TRAILER.to_string(),
            separator: DEFAULT_SEPARATOR.to_string(),
            max_depth: 0,
            sort_entries: false,
            inline_references: false,
            sentinel: DEFAULT_SENTINEL.to_string(),
            fence_prefix: DEFAULT_FENCE_PREFIX.to_string(),
            fence_suffix: DEFAULT_FENCE_SUFFIX.to_string(),
            reference_root: ".".to_string(),
        }
    }
}

impl Config {
    /// 設定ファイルを読み込む
    ///
    /// ファイルがなければ既定値を使う
    pub fn load(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            info!("No config file at {}, using defaults", path);
            return Ok(Self::default());
        }

        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read config: {}", path))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config JSON: {}", path))?;
        Ok(config)
    }

    /// `~` を展開して実行用の設定に変換
    pub fn to_aggregate_config(&self) -> AggregateConfig {
        let mut config = AggregateConfig::new(
            self.source_directories.iter().map(|d| expand(d)).collect(),
            expand(&self.output_path),
        );
        config.trailer = self.trailer.clone();
        config.separator = self.separator.clone();
        config.max_depth = self.max_depth;
        config.sort_entries = self.sort_entries;
        config.inline_references = self.inline_references;
        config.sentinel = self.sentinel.clone();
        config.fence_prefix = self.fence_prefix.clone();
        config.fence_suffix = self.fence_suffix.clone();
        config.reference_root = expand(&self.reference_root);
        config
    }
}

fn expand(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}
