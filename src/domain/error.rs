//! # Domain Errors
//!
//! 集約処理のエラー分類

use std::path::PathBuf;
use thiserror::Error;

/// 集約処理で発生するエラー
///
/// どのエラーも回復されず、実行全体を中断する
#[derive(Debug, Error)]
pub enum DocgenError {
    /// ソースディレクトリが存在しない
    #[error("source directory not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    /// ソースパスはあるがディレクトリではない
    #[error("source path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// センチネル行が参照するファイルが存在しない
    #[error("referenced file not found: {}", .0.display())]
    ReferenceNotFound(PathBuf),

    /// センチネル行に `(` と `)` の組がない
    #[error("malformed reference line: {0}")]
    MalformedReference(String),

    /// 読み書きの失敗（権限、ディスク、不正なUTF-8など）
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DocgenError {
    /// `NotFound` 系のエラーかどうか
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            DocgenError::SourceNotFound(_) | DocgenError::ReferenceNotFound(_)
        )
    }

    /// 参照ファイル読み込み時のI/Oエラーをパス付きで包む
    ///
    /// `NotFound` は参照ファイル用の変種に振り分ける
    pub fn reading_reference(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            DocgenError::ReferenceNotFound(path)
        } else {
            DocgenError::Io { path, source }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_is_not_found() {
        assert!(DocgenError::SourceNotFound(PathBuf::from("docs")).is_not_found());
        assert!(DocgenError::ReferenceNotFound(PathBuf::from("a.ts")).is_not_found());
        assert!(!DocgenError::NotADirectory(PathBuf::from("docs")).is_not_found());
        assert!(!DocgenError::MalformedReference("x".to_string()).is_not_found());
    }

    #[test]
    fn test_reading_maps_not_found() {
        let err =
            DocgenError::reading_reference("snippet.ts", io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(err, DocgenError::ReferenceNotFound(_)));
    }

    #[test]
    fn test_reading_keeps_other_io_errors() {
        let err = DocgenError::reading_reference(
            "README.md",
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        match err {
            DocgenError::Io { path, source } => {
                assert_eq!(path, PathBuf::from("README.md"));
                assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_display_includes_path() {
        let err = DocgenError::SourceNotFound(PathBuf::from("./Documentations"));
        assert_eq!(
            err.to_string(),
            "source directory not found: ./Documentations"
        );
    }
}
