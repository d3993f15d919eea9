//! Repository Implementations
//!
//! Domain層のRepositoryトレイトの実装

pub mod file_document_repository;
pub mod file_output_repository;
