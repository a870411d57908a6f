use std::path::PathBuf;

use clap::Parser;
use sweden_commonmark::{MarkdownOptions, MarkdownOptionsBuilder};

/// Command line interface for sweden
#[derive(Parser, Debug)]
#[command(
  author,
  about = "Convert Markdown documentation into hosted-docs pages",
  disable_version_flag = true
)]
pub struct Cli {
  /// Files or directories to convert. Directories are walked recursively.
  #[arg(required = true, value_name = "PATH")]
  pub paths: Vec<PathBuf>,

  /// Category the documents are published under.
  #[arg(short, long, value_name = "NAME")]
  pub category: String,

  /// Documentation version the documents belong to.
  #[arg(short = 'V', long = "version", value_name = "NAME")]
  pub doc_version: String,

  /// Path to the configuration file (YAML, JSON or TOML).
  #[arg(short = 'C', long, default_value = "sweden.yaml")]
  pub config: PathBuf,

  /// Write every converted document into this directory instead of the
  /// directory derived from its location.
  #[arg(short, long)]
  pub output_dir: Option<PathBuf>,

  /// Disable tables, strikethrough, autolinks and description lists.
  #[arg(long = "no-gfm")]
  pub no_gfm: bool,

  /// Pass raw HTML from the source through instead of dropping it.
  #[arg(long)]
  pub keep_html: bool,

  /// Enable verbose debug logging
  #[arg(short, long)]
  pub verbose: bool,
}

impl Cli {
  /// Parse command line arguments into a [`Cli`] struct.
  #[must_use]
  pub fn parse_args() -> Self {
    Self::parse()
  }

  /// Markdown options selected on the command line.
  #[must_use]
  pub fn markdown_options(&self) -> MarkdownOptions {
    MarkdownOptionsBuilder::new()
      .gfm(!self.no_gfm)
      .skip_html(!self.keep_html)
      .build()
  }
}
