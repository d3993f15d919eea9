//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **DiscoverDocumentsUseCase**: ドキュメントファイルの列挙
//! - **AggregateDocumentsUseCase**: 読み込み、参照埋め込み、変換
//! - **WriteOutputUseCase**: 出力ファイルの上書き

pub mod aggregate_documents;
pub mod discover_documents;
pub mod write_output;
