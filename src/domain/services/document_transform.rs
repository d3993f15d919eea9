//! # Document Transform Service
//!
//! ファイル内容の変換と結合

use crate::domain::entities::aggregation_result::AggregationResult;

/// 内容とトレーラーの間に入る空行
pub const TRAILER_GAP: &str = "\n\n";

/// ファイル同士を結合する既定のセパレータ
pub const DEFAULT_SEPARATOR: &str = "\n\n";

/// UTF-8 のバイトオーダーマーク
const BOM: char = '\u{feff}';

/// 既定のトレーラー（目次へ戻るリンク）
pub const DEFAULT_TRAILER: &str = "[`⬆ BACK TO TOP ⬆`](#table-of-contents)";

/// ドキュメント変換サービス
///
/// 入力テキストの列から出力テキストを作る純粋関数群
pub struct DocumentTransform;

impl DocumentTransform {
    /// 1ファイル分の内容を変換する
    ///
    /// 前後の空白（BOM を含む）を取り除き、空行を挟んでトレーラーを付ける。
    /// トレーラーが空なら付けない。
    ///
    /// # Arguments
    ///
    /// * `content` - ファイルの生の内容
    /// * `trailer` - 末尾に付けるトレーラー
    pub fn transform(content: &str, trailer: &str) -> String {
        let trimmed = content.trim_matches(|c: char| c.is_whitespace() || c == BOM);

        if trailer.is_empty() {
            return trimmed.to_string();
        }

        format!("{}{}{}", trimmed, TRAILER_GAP, trailer)
    }

    /// 列挙順の内容をすべて変換して集約結果にする
    pub fn aggregate<S: AsRef<str>>(contents: &[S], trailer: &str) -> AggregationResult {
        contents
            .iter()
            .map(|content| Self::transform(content.as_ref(), trailer))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_trims_and_appends_trailer() {
        let result = DocumentTransform::transform("  \n# Title\n\nBody\n\n  ", "[BACK]");
        assert_eq!(result, "# Title\n\nBody\n\n[BACK]");
    }

    #[test]
    fn test_transform_empty_trailer() {
        let result = DocumentTransform::transform("\nHello\n", "");
        assert_eq!(result, "Hello");
    }

    #[test]
    fn test_transform_empty_content() {
        let result = DocumentTransform::transform("   \n", "[BACK]");
        assert_eq!(result, "\n\n[BACK]");
    }

    #[test]
    fn test_transform_strips_leading_bom() {
        let result = DocumentTransform::transform("\u{feff}# Title\n", "[BACK]");
        assert_eq!(result, "# Title\n\n[BACK]");
    }

    #[test]
    fn test_transform_strips_bom_before_whitespace() {
        let result = DocumentTransform::transform("\u{feff}\n\n  Body\t\n", "");
        assert_eq!(result, "Body");
    }

    #[test]
    fn test_transform_keeps_inner_whitespace() {
        let result = DocumentTransform::transform("a  \n\n\n  b", "[BACK]");
        assert_eq!(result, "a  \n\n\n  b\n\n[BACK]");
    }

    #[test]
    fn test_render_two_files() {
        let output =
            DocumentTransform::aggregate(&["Hello", "World"], "[BACK]").render(DEFAULT_SEPARATOR);
        assert_eq!(output, "Hello\n\n[BACK]\n\nWorld\n\n[BACK]");
    }

    #[test]
    fn test_render_no_files() {
        let contents: Vec<String> = vec![];
        let output = DocumentTransform::aggregate(&contents, "[BACK]").render(DEFAULT_SEPARATOR);
        assert_eq!(output, "");
    }

    #[test]
    fn test_render_is_deterministic() {
        let contents = vec!["one\n".to_string(), "\ntwo".to_string()];
        let first =
            DocumentTransform::aggregate(&contents, DEFAULT_TRAILER).render(DEFAULT_SEPARATOR);
        let second =
            DocumentTransform::aggregate(&contents, DEFAULT_TRAILER).render(DEFAULT_SEPARATOR);
        assert_eq!(first, second);
    }

    #[test]
    fn test_aggregate_preserves_order() {
        let result = DocumentTransform::aggregate(&["c", "a", "b"], "");
        assert_eq!(result.sections(), &["c", "a", "b"]);
    }
}
