//! # Discover Documents Use Case
//!
//! ドキュメントファイル列挙ユースケース

use anyhow::Result;
use log::debug;
use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::entities::document_file::DocumentFile;
use crate::domain::repositories::document_repository::{DocumentRepository, ListOptions};

/// ドキュメントファイル列挙ユースケース
///
/// 指定された順にソースディレクトリを走査し、1つの列に平坦化する
pub struct DiscoverDocumentsUseCase<R: DocumentRepository> {
    document_repository: Arc<R>,
}

impl<R: DocumentRepository> DiscoverDocumentsUseCase<R> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `document_repository` - ドキュメントリポジトリ
    pub fn new(document_repository: Arc<R>) -> Self {
        Self {
            document_repository,
        }
    }

    /// ドキュメントファイルを列挙する
    ///
    /// # Arguments
    ///
    /// * `directories` - ソースディレクトリのリスト
    /// * `options` - 深さと並び順の指定
    ///
    /// # Returns
    ///
    /// ディレクトリ順、各ディレクトリ内は列挙順のドキュメントのリスト
    ///
    /// # Errors
    ///
    /// いずれかのディレクトリが存在しない時点で中断する
    pub async fn execute(
        &self,
        directories: &[PathBuf],
        options: &ListOptions,
    ) -> Result<Vec<DocumentFile>> {
        let mut documents = Vec::new();

        for dir in directories {
            let found = self.document_repository.list_sources(dir, options).await?;
            debug!("{} documents in {}", found.len(), dir.display());
            documents.extend(found);
        }

        Ok(documents)
    }
}
