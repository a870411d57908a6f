//! # sweden-commonmark
//!
//! Renders CommonMark documents into the Markdown flavor understood by the
//! hosted documentation platform. The output is the usual HTML rendering of
//! every block, except that links are emitted back in Markdown link syntax and
//! repository-local destinations are turned into `doc:` references.
//!
//! ## Quick Start
//!
//! ```rust
//! use sweden_commonmark::{MarkdownOptions, MarkdownProcessor};
//!
//! let processor = MarkdownProcessor::new(MarkdownOptions::default());
//! let body = processor.render("Visit [the setup guide](setup.md) for details.");
//!
//! assert_eq!(
//!   body,
//!   "<p>Visit [the setup guide](doc:setup) for details.</p>\n"
//! );
//! ```
//!
//! ## Link rewriting
//!
//! Whether a destination is rewritten depends only on whether it carries a URL
//! scheme. See [`links::rewrite_destination`].
//!
//! ```rust
//! use sweden_commonmark::links::rewrite_destination;
//!
//! assert_eq!(rewrite_destination("guides/install.md"), "doc:guides/install");
//! assert_eq!(
//!   rewrite_destination("https://example.com/page"),
//!   "https://example.com/page"
//! );
//! ```

pub mod links;
pub mod processor;

pub use crate::processor::{
  AstTransformer,
  LinkRewriter,
  MarkdownOptions,
  MarkdownOptionsBuilder,
  MarkdownProcessor,
  RawHtmlStripper,
  render_body,
};
