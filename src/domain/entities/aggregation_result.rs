//! # AggregationResult Value Object
//!
//! 集約結果のバリューオブジェクト

/// 集約結果
///
/// 変換済みファイル内容を列挙順に保持する。
/// 実行ごとに作られ、書き込み後に破棄される。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregationResult {
    sections: Vec<String>,
}

impl AggregationResult {
    /// 新しい集約結果を作成
    pub fn new(sections: Vec<String>) -> Self {
        Self { sections }
    }

    /// セクション数を返す
    #[inline]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// 空かどうかを返す
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// セクションへの参照を返す
    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    /// セパレータで結合した最終テキストを返す
    ///
    /// 空の結果は空文字列になる
    pub fn render(&self, separator: &str) -> String {
        self.sections.join(separator)
    }
}

impl FromIterator<String> for AggregationResult {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_joins_in_order() {
        let result = AggregationResult::new(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(result.render("\n\n"), "a\n\nb");
    }

    #[test]
    fn test_render_empty() {
        let result = AggregationResult::default();
        assert!(result.is_empty());
        assert_eq!(result.render("\n\n"), "");
    }

    #[test]
    fn test_len_and_sections() {
        let result = AggregationResult::new(vec!["first".to_string(), "second".to_string()]);

        assert_eq!(result.len(), 2);
        assert_eq!(result.sections()[1], "second");
    }

    #[test]
    fn test_collect() {
        let result: AggregationResult = ["x", "y"].iter().map(|s| s.to_string()).collect();
        assert_eq!(result.render(","), "x,y");
    }
}
