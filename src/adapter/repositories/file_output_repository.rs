//! File Output Repository Implementation
//!
//! OutputRepositoryのファイルシステム実装

use anyhow::Result;
use async_trait::async_trait;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use crate::domain::error::DocgenError;
use crate::domain::repositories::output_repository::OutputRepository;

/// ファイルシステムベースの出力リポジトリ
///
/// 同じディレクトリに一時ファイルを書いてから rename するため、
/// 失敗時に中途半端な出力が残らない
pub struct FileOutputRepository;

impl FileOutputRepository {
    /// 新しいリポジトリを作成
    pub fn new() -> Self {
        Self
    }

    /// ファイルを上書きする（同期処理）
    fn write_sync(path: &Path, content: &str) -> Result<()> {
        let io_err = |source: std::io::Error| DocgenError::Io {
            path: path.to_path_buf(),
            source,
        };

        let parent = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        // Create parent directory if it doesn't exist
        fs::create_dir_all(&parent).map_err(io_err)?;

        let mut temp = NamedTempFile::new_in(&parent).map_err(io_err)?;
        temp.write_all(content.as_bytes()).map_err(io_err)?;
        temp.as_file().sync_all().map_err(io_err)?;

        match fs::metadata(path) {
            Ok(existing) => temp
                .as_file()
                .set_permissions(existing.permissions())
                .map_err(io_err)?,
            Err(_) => set_default_permissions(temp.as_file()).map_err(io_err)?,
        }

        temp.persist(path).map_err(|e| io_err(e.error))?;

        Ok(())
    }
}

#[cfg(unix)]
fn set_default_permissions(file: &fs::File) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn set_default_permissions(_file: &fs::File) -> std::io::Result<()> {
    Ok(())
}

#[async_trait]
impl OutputRepository for FileOutputRepository {
    async fn write(&self, path: &Path, content: &str) -> Result<()> {
        let path = path.to_path_buf();
        let content = content.to_string();
        tokio::task::spawn_blocking(move || Self::write_sync(&path, &content))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?
    }
}

impl Default for FileOutputRepository {
    fn default() -> Self {
        Self::new()
    }
}
