//! # docgen
//!
//! Markdown ドキュメントのディレクトリを1つの README に結合するツール
//!
//! このプロジェクトはクリーンアーキテクチャを採用しており、以下の4層で構成されています：
//!
//! - **Domain層**: エンティティ、Repository trait、純粋な変換ロジック（外部依存なし）
//! - **Application層**: アプリケーション固有のビジネスフロー（ユースケース）
//! - **Adapter層**: 外部システムとの統合（ファイルシステム、設定ファイル）
//! - **Driver層**: CLI、依存性注入
//!
//! 処理は「全件読み込み → 純粋な変換 → 1回だけ書き込み」の一方向で、
//! 途中で失敗した場合は出力ファイルに触れない。

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// Domain層（純粋なビジネスロジック）
pub mod domain;

// Application層（ユースケース）
pub mod application;

// Adapter層（Infrastructure）
pub mod adapter;

// Driver層（Presentation）
pub mod driver;
