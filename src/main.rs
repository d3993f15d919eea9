//! docgen - Documentation Aggregator
//!
//! Markdown ドキュメントを1つの README に結合

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;
use clap::Parser;

use docgen::adapter::config::Config;
use docgen::driver::{AggregationWorkflow, Args};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    // Load configuration, then let command-line flags win
    let mut config = Config::load(&args.config)?;
    args.apply_overrides(&mut config);

    // Create workflow with injected dependencies
    let workflow = AggregationWorkflow::new(config.to_aggregate_config());

    workflow.execute(&args).await
}
