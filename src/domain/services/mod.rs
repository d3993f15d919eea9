//! # Domain Services
//!
//! ドキュメント変換のビジネスルール
//!
//! ## サービス
//!
//! - **DocumentTransform**: トリムとトレーラー付与、結合
//! - **ReferenceInliner**: センチネル行の外部ファイル埋め込み

pub mod document_transform;
pub mod reference_inliner;
