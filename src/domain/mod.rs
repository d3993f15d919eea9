//! # Domain Layer
//!
//! このモジュールはビジネスの核心的なルールとエンティティを定義します。
//!
//! ## 特徴
//!
//! - 外部依存を持たない（Rust標準ライブラリと最小限の依存のみ）
//! - ファイルシステムについて何も知らない
//! - 純粋な変換ロジック
//!
//! ## 構成要素
//!
//! - **entities**: ビジネスエンティティ（DocumentFile, AggregationResult）
//! - **error**: エラー分類
//! - **repositories**: Repository trait（インターフェース定義のみ）
//! - **services**: Domain Service（変換と参照の埋め込み）

pub mod entities;
pub mod error;
pub mod repositories;
pub mod services;
