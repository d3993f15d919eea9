//! # Aggregate Configuration DTO
//!
//! 集約設定のData Transfer Object

use std::path::PathBuf;

use crate::domain::repositories::document_repository::ListOptions;
use crate::domain::services::document_transform::{DEFAULT_SEPARATOR, DEFAULT_TRAILER};
use crate::domain::services::reference_inliner::{
    ReferenceInliner, DEFAULT_FENCE_PREFIX, DEFAULT_FENCE_SUFFIX, DEFAULT_SENTINEL,
};

/// 集約設定
///
/// 1回の実行に必要な設定情報。パスは展開済み。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateConfig {
    /// ソースディレクトリ（この順に処理する）
    pub source_directories: Vec<PathBuf>,
    /// 出力ファイルのパス
    pub output_path: PathBuf,
    /// 各ファイルの後ろに付けるトレーラー
    pub trailer: String,
    /// ファイル同士のセパレータ
    pub separator: String,
    /// サブディレクトリを潜る段数
    pub max_depth: usize,
    /// ファイル名の辞書順で並べ替えるかどうか
    pub sort_entries: bool,
    /// センチネル行の埋め込みを行うかどうか
    pub inline_references: bool,
    /// センチネルトークン
    pub sentinel: String,
    /// コードフェンス開始行
    pub fence_prefix: String,
    /// コードフェンス終了行
    pub fence_suffix: String,
    /// 参照パスの基準ディレクトリ
    pub reference_root: PathBuf,
}

impl AggregateConfig {
    /// 既定値で集約設定を作成します。
    ///
    /// # 例
    ///
    /// ```
    /// use docgen::application::dto::aggregate_config::AggregateConfig;
    ///
    /// let config = AggregateConfig::new(
    ///     vec!["./Documentations".into()],
    ///     "./README.md".into(),
    /// );
    ///
    /// assert_eq!(config.separator, "\n\n");
    /// assert_eq!(config.max_depth, 0);
    /// assert!(!config.inline_references);
    /// ```
    pub fn new(source_directories: Vec<PathBuf>, output_path: PathBuf) -> Self {
        Self {
            source_directories,
            output_path,
            trailer: DEFAULT_TRAILER.to_string(),
            separator: DEFAULT_SEPARATOR.to_string(),
            max_depth: 0,
            sort_entries: false,
            inline_references: false,
            sentinel: DEFAULT_SENTINEL.to_string(),
            fence_prefix: DEFAULT_FENCE_PREFIX.to_string(),
            fence_suffix: DEFAULT_FENCE_SUFFIX.to_string(),
            reference_root: PathBuf::from("."),
        }
    }

    /// ディレクトリ列挙のオプション
    pub fn list_options(&self) -> ListOptions {
        ListOptions {
            max_depth: self.max_depth,
            sort_entries: self.sort_entries,
        }
    }

    /// 埋め込みが有効な場合のみ `ReferenceInliner` を返す
    pub fn inliner(&self) -> Option<ReferenceInliner> {
        self.inline_references.then(|| {
            ReferenceInliner::new(
                self.sentinel.clone(),
                self.fence_prefix.clone(),
                self.fence_suffix.clone(),
            )
        })
    }
}
