//! Workflow Orchestration
//!
//! ワークフローのオーケストレーション

use anyhow::Result;
use log::info;

use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

use crate::adapter::repositories::file_document_repository::FileDocumentRepository;
use crate::adapter::repositories::file_output_repository::FileOutputRepository;
use crate::application::dto::aggregate_config::AggregateConfig;
use crate::application::use_cases::aggregate_documents::AggregateDocumentsUseCase;
use crate::application::use_cases::discover_documents::DiscoverDocumentsUseCase;
use crate::application::use_cases::write_output::WriteOutputUseCase;

use super::cli::Args;

/// Documentation Aggregation Workflow
///
/// read-all → pure transform → write-once
pub struct AggregationWorkflow {
    config: AggregateConfig,
    discover_use_case: Arc<DiscoverDocumentsUseCase<FileDocumentRepository>>,
    aggregate_use_case: Arc<AggregateDocumentsUseCase<FileDocumentRepository>>,
    write_use_case: Arc<WriteOutputUseCase<FileOutputRepository>>,
}

impl AggregationWorkflow {
    /// Create a new workflow instance with dependency injection
    pub fn new(config: AggregateConfig) -> Self {
        // Repository implementations
        let document_repo = Arc::new(FileDocumentRepository::new());
        let output_repo = Arc::new(FileOutputRepository::new());

        // Use Cases construction
        let discover_use_case = Arc::new(DiscoverDocumentsUseCase::new(document_repo.clone()));
        let aggregate_use_case = Arc::new(AggregateDocumentsUseCase::new(document_repo));
        let write_use_case = Arc::new(WriteOutputUseCase::new(output_repo));

        Self {
            config,
            discover_use_case,
            aggregate_use_case,
            write_use_case,
        }
    }

    /// Aggregate every configured source directory into one text
    ///
    /// Nothing is written. Fails on the first missing directory or unreadable file.
    pub async fn aggregate(&self) -> Result<String> {
        let documents = self
            .discover_use_case
            .execute(&self.config.source_directories, &self.config.list_options())
            .await?;
        info!(
            "Found {} documents in {} source directories",
            documents.len(),
            self.config.source_directories.len()
        );

        let result = self
            .aggregate_use_case
            .execute(&documents, &self.config)
            .await?;

        Ok(result.render(&self.config.separator))
    }

    /// Execute the aggregation workflow
    pub async fn execute(&self, args: &Args) -> Result<()> {
        self.execute_to(args, &mut io::stdout()).await
    }

    /// Execute the aggregation workflow, reporting to `out`
    ///
    /// In dry-run mode `out` receives only the rendered document and the
    /// progress lines go to stderr.
    pub async fn execute_to<W: Write>(&self, args: &Args, out: &mut W) -> Result<()> {
        info!("Starting documentation aggregation...");
        info!("Dry run: {}", args.dry_run);
        let dry_run = args.dry_run;

        report(out, dry_run, format_args!("✓ Using configuration:"))?;
        for dir in &self.config.source_directories {
            report(out, dry_run, format_args!("  Source: {}", dir.display()))?;
        }
        report(
            out,
            dry_run,
            format_args!("  Output: {}", self.config.output_path.display()),
        )?;
        report(
            out,
            dry_run,
            format_args!(
                "  Depth: {} | Sorted: {} | Inline references: {}",
                self.config.max_depth, self.config.sort_entries, self.config.inline_references
            ),
        )?;

        let content = self.aggregate().await?;

        if dry_run {
            report(
                out,
                dry_run,
                format_args!(
                    "✓ Dry-run mode (not writing {})",
                    self.config.output_path.display()
                ),
            )?;
            out.write_all(content.as_bytes())?;
            out.flush()?;
            return Ok(());
        }

        let written = self
            .write_use_case
            .execute(&self.config.output_path, &content)
            .await?;

        report(
            out,
            dry_run,
            format_args!(
                "✓ Wrote {} bytes to {}",
                written,
                self.config.output_path.display()
            ),
        )?;

        Ok(())
    }
}

/// 進捗行を出力する（dry-run時はstderrへ）
fn report<W: Write>(out: &mut W, dry_run: bool, line: fmt::Arguments<'_>) -> io::Result<()> {
    if dry_run {
        writeln!(io::stderr(), "{}", line)
    } else {
        writeln!(out, "{}", line)
    }
}
