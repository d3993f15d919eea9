//! # Output Repository Trait
//!
//! 集約結果の書き出しを抽象化

use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

#[cfg(test)]
use mockall::automock;

/// 出力リポジトリ
#[cfg_attr(test, automock)]
#[async_trait]
pub trait OutputRepository: Send + Sync {
    /// 出力先を内容で完全に上書きする
    ///
    /// 追記もマージもしない。バックアップは残さない。
    ///
    /// # Arguments
    ///
    /// * `path` - 出力ファイルのパス
    /// * `content` - 書き込む内容
    async fn write(&self, path: &Path, content: &str) -> Result<()>;
}
