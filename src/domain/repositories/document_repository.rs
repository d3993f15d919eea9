//! # Document Repository Trait
//!
//! ドキュメントファイルの列挙と読み込みを抽象化

use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::document_file::DocumentFile;

/// 列挙オプション
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// ソースディレクトリより下に潜るサブディレクトリの段数
    ///
    /// 0 なら直下のファイルのみ、1 なら章ディレクトリを1段だけ展開する
    pub max_depth: usize,
    /// ファイル名の辞書順で並べ替えるかどうか
    ///
    /// `false` の場合はプラットフォームのディレクトリ列挙順に従う
    pub sort_entries: bool,
}

/// ドキュメントリポジトリ
///
/// ソースディレクトリの走査とファイル内容の読み込みを担当するリポジトリ
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DocumentRepository: Send + Sync {
    /// ソースディレクトリ内のドキュメントを列挙する
    ///
    /// # Arguments
    ///
    /// * `dir` - ソースディレクトリのパス
    /// * `options` - 深さと並び順の指定
    ///
    /// # Returns
    ///
    /// 列挙順に並んだドキュメントのリスト
    ///
    /// # Errors
    ///
    /// ディレクトリが存在しない場合は `DocgenError::SourceNotFound` を返す
    async fn list_sources(&self, dir: &Path, options: &ListOptions) -> Result<Vec<DocumentFile>>;

    /// ドキュメントの内容を読み込む
    async fn read_document(&self, document: &DocumentFile) -> Result<String>;

    /// センチネル行が参照するファイルを読み込む
    ///
    /// # Errors
    ///
    /// ファイルが存在しない場合は `DocgenError::ReferenceNotFound` を返す
    async fn read_reference(&self, path: &Path) -> Result<String>;
}
