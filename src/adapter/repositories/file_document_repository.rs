//! File Document Repository Implementation
//!
//! DocumentRepositoryのファイルシステム実装

use anyhow::Result;
use async_trait::async_trait;
use log::{info, warn};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::domain::entities::document_file::DocumentFile;
use crate::domain::error::DocgenError;
use crate::domain::repositories::document_repository::{DocumentRepository, ListOptions};

/// ファイルシステムベースのドキュメントリポジトリ
pub struct FileDocumentRepository;

impl FileDocumentRepository {
    /// 新しいリポジトリを作成
    pub fn new() -> Self {
        Self
    }

    /// ドキュメントを列挙する（内部実装）
    ///
    /// 深さ `max_depth` までのサブディレクトリを行きがけ順で辿る。
    /// サブディレクトリのファイルはその位置にそのまま平坦化される。
    /// 拡張子による絞り込みはしない。
    fn list_sources_internal(dir: &Path, options: ListOptions) -> Result<Vec<DocumentFile>> {
        if !dir.exists() {
            warn!("Source directory does not exist: {}", dir.display());
            return Err(DocgenError::SourceNotFound(dir.to_path_buf()).into());
        }
        if !dir.is_dir() {
            return Err(DocgenError::NotADirectory(dir.to_path_buf()).into());
        }

        let mut walker = WalkDir::new(dir)
            .follow_links(true)
            .min_depth(1)
            .max_depth(options.max_depth.saturating_add(1));
        if options.sort_entries {
            walker = walker.sort_by_file_name();
        }

        let mut documents = Vec::new();

        for entry in walker {
            let entry = entry.map_err(walk_error)?;
            if entry.file_type().is_file() {
                documents.push(DocumentFile::new(entry.path(), dir));
            }
        }

        info!(
            "Found {} documents in {}",
            documents.len(),
            dir.display()
        );

        Ok(documents)
    }

    fn read_document_internal(path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|source| {
            DocgenError::Io {
                path: path.to_path_buf(),
                source,
            }
            .into()
        })
    }

    fn read_reference_internal(path: &Path) -> Result<String> {
        fs::read_to_string(path)
            .map_err(|source| DocgenError::reading_reference(path, source).into())
    }
}

/// walkdirのエラーをパス付きのI/Oエラーに変換
fn walk_error(err: walkdir::Error) -> DocgenError {
    let path = err.path().map(Path::to_path_buf).unwrap_or_default();
    let source = err
        .into_io_error()
        .unwrap_or_else(|| io::Error::other("filesystem loop detected"));
    DocgenError::Io { path, source }
}

#[async_trait]
impl DocumentRepository for FileDocumentRepository {
    async fn list_sources(&self, dir: &Path, options: &ListOptions) -> Result<Vec<DocumentFile>> {
        let dir = dir.to_path_buf();
        let options = *options;
        tokio::task::spawn_blocking(move || Self::list_sources_internal(&dir, options))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?
    }

    async fn read_document(&self, document: &DocumentFile) -> Result<String> {
        let path = document.path.clone();
        tokio::task::spawn_blocking(move || Self::read_document_internal(&path))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?
    }

    async fn read_reference(&self, path: &Path) -> Result<String> {
        let path: PathBuf = path.to_path_buf();
        tokio::task::spawn_blocking(move || Self::read_reference_internal(&path))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?
    }
}

impl Default for FileDocumentRepository {
    fn default() -> Self {
        Self::new()
    }
}
