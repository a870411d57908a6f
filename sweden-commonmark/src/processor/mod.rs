//! Markdown processing for the documentation platform.
//!
//! # Architecture
//!
//! - [`types`]: options, the processor struct and the AST transformers
//! - [`core`]: the parse, transform and render pipeline
//! - [`render`]: block-level output assembly
pub mod core;
pub mod render;
pub mod types;

pub use self::core::render_body;

pub use types::{
  AstTransformer,
  LinkRewriter,
  MarkdownOptions,
  MarkdownOptionsBuilder,
  MarkdownProcessor,
  RawHtmlStripper,
};
