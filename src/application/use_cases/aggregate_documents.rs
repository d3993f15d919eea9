//! # Aggregate Documents Use Case
//!
//! ドキュメント読み込みと変換ユースケース

use anyhow::{Context, Result};
use log::{debug, info};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use crate::application::dto::aggregate_config::AggregateConfig;
use crate::domain::entities::aggregation_result::AggregationResult;
use crate::domain::entities::document_file::DocumentFile;
use crate::domain::repositories::document_repository::DocumentRepository;
use crate::domain::services::document_transform::DocumentTransform;
use crate::domain::services::reference_inliner::ReferenceInliner;

/// ドキュメント集約ユースケース
///
/// 全ファイルを列挙順に読み込み、参照埋め込み（有効時）とトリム・トレーラー付与を行う。
/// 1つでも読み込みに失敗したら結果は作らない。
pub struct AggregateDocumentsUseCase<R: DocumentRepository> {
    document_repository: Arc<R>,
}

impl<R: DocumentRepository> AggregateDocumentsUseCase<R> {
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

    /// ドキュメントを集約する
    ///
    /// # Arguments
    ///
    /// * `documents` - 列挙順のドキュメント
    /// * `config` - 集約設定
    ///
    /// # Returns
    ///
    /// 変換済みセクションの集約結果
    ///
    /// # Errors
    ///
    /// 読み込み失敗、参照先ファイルの欠落、不正なセンチネル行でエラーを返す
    pub async fn execute(
        &self,
        documents: &[DocumentFile],
        config: &AggregateConfig,
    ) -> Result<AggregationResult> {
        let inliner = config.inliner();
        let mut contents = Vec::with_capacity(documents.len());

        for document in documents {
            debug!("Reading {}", document.relative_path().display());
            let raw = self.document_repository.read_document(document).await?;

            let content = match &inliner {
                Some(inliner) => self
                    .inline_references(inliner, &raw, &config.reference_root)
                    .await
                    .with_context(|| {
                        format!("Failed to inline references in {}", document.path.display())
                    })?,
                None => raw,
            };

            contents.push(content);
        }

        let result = DocumentTransform::aggregate(&contents, &config.trailer);
        info!("Aggregated {} documents", result.len());

        Ok(result)
    }

    /// センチネル行の参照先を読み込んで埋め込む
    async fn inline_references(
        &self,
        inliner: &ReferenceInliner,
        content: &str,
        reference_root: &Path,
    ) -> Result<String> {
        let references = inliner.collect_references(content)?;
        let mut snippets = HashMap::with_capacity(references.len());

        for reference in references {
            let path = reference_root.join(&reference);
            debug!("Inlining {}", path.display());
            let snippet = self.document_repository.read_reference(&path).await?;
            snippets.insert(reference, snippet);
        }

        Ok(inliner.inline(content, &snippets)?)
    }
}
