//! # Domain Entities
//!
//! ビジネスエンティティとバリューオブジェクトを定義するモジュール
//!
//! ## エンティティ
//!
//! - **DocumentFile**: 集約対象の1ファイル
//! - **AggregationResult**: 変換済みセクションの順序付きコレクション

pub mod aggregation_result;
pub mod document_file;
