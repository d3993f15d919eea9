//! # DocumentFile Entity
//!
//! 集約対象ドキュメントのドメインエンティティ

use std::path::{Path, PathBuf};

/// ドキュメントファイル
///
/// ソースディレクトリ内で発見された1つのテキストファイル。
/// 読み取り専用で、実行ごとに新しく走査される。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentFile {
    /// ディレクトリ内でのファイル名
    pub name: String,
    /// ファイルのフルパス
    pub path: PathBuf,
    /// 発見元のソースディレクトリ
    pub source_dir: PathBuf,
}

impl DocumentFile {
    /// パスからドキュメントファイルを作成
    ///
    /// # Arguments
    ///
    /// * `path` - ファイルのパス
    /// * `source_dir` - 発見元のソースディレクトリ
    pub fn new(path: impl Into<PathBuf>, source_dir: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        Self {
            name,
            path,
            source_dir: source_dir.into(),
        }
    }

    /// ソースディレクトリからの相対パス
    ///
    /// ネストしたレイアウトでは `章ディレクトリ/ファイル名` になる
    pub fn relative_path(&self) -> &Path {
        self.path
            .strip_prefix(&self.source_dir)
            .unwrap_or(&self.path)
    }
}
