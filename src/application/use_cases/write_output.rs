//! # Write Output Use Case
//!
//! 出力ファイル書き込みユースケース

use anyhow::Result;
use log::info;
use std::path::Path;
use std::sync::Arc;

use crate::domain::repositories::output_repository::OutputRepository;

/// 出力ファイル書き込みユースケース
pub struct WriteOutputUseCase<W: OutputRepository> {
    output_repository: Arc<W>,
}

impl<W: OutputRepository> WriteOutputUseCase<W> {
    /// 新しいユースケースを作成
    pub fn new(output_repository: Arc<W>) -> Self {
        Self { output_repository }
    }

    /// 出力ファイルを上書きする
    ///
    /// 内容が空でも書き込む（ファイルは空に切り詰められる）
    ///
    /// # Returns
    ///
    /// 書き込んだバイト数
    pub async fn execute(&self, output_path: &Path, content: &str) -> Result<usize> {
        self.output_repository.write(output_path, content).await?;

        info!(
            "Wrote {} bytes to {}",
            content.len(),
            output_path.display()
        );

        Ok(content.len())
    }
}
