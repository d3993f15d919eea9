//! # Reference Inliner Service
//!
//! センチネル行を参照先ファイルのコードブロックに置き換える

use std::collections::HashMap;
use std::path::PathBuf;

use crate::domain::error::DocgenError;

/// 既定のセンチネルトークン
pub const DEFAULT_SENTINEL: &str = "[EXAMPLE-FILE-ADDRESS]";

/// 既定のコードフェンス開始行
pub const DEFAULT_FENCE_PREFIX: &str = "```typescript";

/// 既定のコードフェンス終了行
pub const DEFAULT_FENCE_SUFFIX: &str = "```";

/// 参照埋め込みサービス
///
/// ファイルの読み込みは行わない。参照パスの収集と、
/// 読み込み済みスニペットによる置換だけを担当する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceInliner {
    sentinel: String,
    fence_prefix: String,
    fence_suffix: String,
}

impl ReferenceInliner {
    pub fn new(
        sentinel: impl Into<String>,
        fence_prefix: impl Into<String>,
        fence_suffix: impl Into<String>,
    ) -> Self {
        Self {
            sentinel: sentinel.into(),
            fence_prefix: fence_prefix.into(),
            fence_suffix: fence_suffix.into(),
        }
    }

    /// 行がセンチネルトークンで始まるかどうか
    pub fn is_sentinel(&self, line: &str) -> bool {
        !self.sentinel.is_empty() && line.starts_with(&self.sentinel)
    }

    /// センチネル行から参照パスを取り出す
    ///
    /// 最初の `(` と最後の `)` の間の文字列を返す
    pub fn extract_path<'a>(&self, line: &'a str) -> Result<&'a str, DocgenError> {
        let open = line.find('(');
        let close = line.rfind(')');

        match (open, close) {
            (Some(open), Some(close)) if open < close => {
                let path = line[open + 1..close].trim();
                if path.is_empty() {
                    Err(DocgenError::MalformedReference(line.to_string()))
                } else {
                    Ok(path)
                }
            }
            _ => Err(DocgenError::MalformedReference(line.trim_end().to_string())),
        }
    }

    /// 内容に含まれる参照パスを出現順に重複なく集める
    pub fn collect_references(&self, content: &str) -> Result<Vec<String>, DocgenError> {
        let mut references: Vec<String> = Vec::new();

        for line in content.split('\n').filter(|line| self.is_sentinel(line)) {
            let path = self.extract_path(line)?;
            if !references.iter().any(|r| r == path) {
                references.push(path.to_string());
            }
        }

        Ok(references)
    }

    /// センチネル行をスニペットのコードブロックに置き換える
    ///
    /// # Arguments
    ///
    /// * `content` - 元の内容
    /// * `snippets` - 参照パスから読み込み済み内容へのマップ
    ///
    /// # Errors
    ///
    /// マップにない参照は `DocgenError::ReferenceNotFound` になる
    pub fn inline(
        &self,
        content: &str,
        snippets: &HashMap<String, String>,
    ) -> Result<String, DocgenError> {
        let mut lines = Vec::new();

        for line in content.split('\n') {
            if !self.is_sentinel(line) {
                lines.push(line.to_string());
                continue;
            }

            let path = self.extract_path(line)?;
            let snippet = snippets
                .get(path)
                .ok_or_else(|| DocgenError::ReferenceNotFound(PathBuf::from(path)))?;
            lines.push(self.fence(snippet));
        }

        Ok(lines.join("\n"))
    }

    /// スニペットをコードフェンスで囲む
    fn fence(&self, snippet: &str) -> String {
        let body = snippet.trim_start_matches(['\n', '\r']).trim_end();
        format!("{}\n{}\n{}", self.fence_prefix, body, self.fence_suffix)
    }
}

impl Default for ReferenceInliner {
    fn default() -> Self {
        Self::new(DEFAULT_SENTINEL, DEFAULT_FENCE_PREFIX, DEFAULT_FENCE_SUFFIX)
    }
}
