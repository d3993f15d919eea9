//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::Parser;

use crate::adapter::config::{Config, DEFAULT_CONFIG_PATH};

/// Markdownドキュメントを1つのREADMEに結合するCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "docgen")]
#[command(about = "Concatenate a directory of markdown files into a single README", long_about = None)]
pub struct Args {
    /// Dry run mode - print the result instead of writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Config file path
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: String,

    /// Source directory (repeatable, replaces the configured list)
    #[arg(short = 's', long = "source")]
    pub sources: Vec<String>,

    /// Output file path
    #[arg(short, long)]
    pub output: Option<String>,

    /// How many sub-directory levels to descend into
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Sort entries by file name instead of directory listing order
    #[arg(long)]
    pub sort: bool,

    /// Replace sentinel lines with the referenced file contents
    #[arg(long)]
    pub inline: bool,
}

impl Args {
    /// コマンドライン指定で設定を上書きする
    pub fn apply_overrides(&self, config: &mut Config) {
        if !self.sources.is_empty() {
            config.source_directories = self.sources.clone();
        }
        if let Some(output) = &self.output {
            config.output_path = output.clone();
        }
        if let Some(max_depth) = self.max_depth {
            config.max_depth = max_depth;
        }
        if self.sort {
            config.sort_entries = true;
        }
        if self.inline {
            config.inline_references = true;
        }
    }
}
