//! Type definitions for the Markdown processor.
//!
//! Contains the configuration options (`MarkdownOptions`), the processor struct
//! (`MarkdownProcessor`) and the AST transformers that run between parsing and
//! rendering.
//!
//! # Examples
//!
//! ```
//! use sweden_commonmark::{MarkdownOptionsBuilder, MarkdownProcessor};
//!
//! let options = MarkdownOptionsBuilder::new().gfm(false).build();
//! let processor = MarkdownProcessor::new(options);
//! ```

use comrak::{
  nodes::{AstNode, NodeValue},
  options::Options,
};

use crate::links;

/// Options for configuring the Markdown processor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownOptions {
  /// Enable tables, strikethrough, autolinks and description lists.
  pub gfm: bool,

  /// Drop raw HTML blocks and inline HTML found in the source.
  pub skip_html: bool,
}

impl Default for MarkdownOptions {
  fn default() -> Self {
    Self {
      gfm:       cfg!(feature = "gfm"),
      skip_html: true,
    }
  }
}

/// Builder for constructing `MarkdownOptions` with method chaining.
#[derive(Debug, Clone)]
pub struct MarkdownOptionsBuilder {
  options: MarkdownOptions,
}

impl MarkdownOptionsBuilder {
  /// Create a new builder with default options.
  #[must_use]
  pub fn new() -> Self {
    Self {
      options: MarkdownOptions::default(),
    }
  }

  /// Enable or disable the GFM-style extensions.
  #[must_use]
  pub const fn gfm(mut self, enabled: bool) -> Self {
    self.options.gfm = enabled;
    self
  }

  /// Drop or keep raw HTML from the source.
  #[must_use]
  pub const fn skip_html(mut self, enabled: bool) -> Self {
    self.options.skip_html = enabled;
    self
  }

  /// Build the final `MarkdownOptions`.
  #[must_use]
  pub fn build(self) -> MarkdownOptions {
    self.options
  }
}

impl Default for MarkdownOptionsBuilder {
  fn default() -> Self {
    Self::new()
  }
}

/// Main Markdown processor.
///
/// Holds no per-document state and can be shared across conversions.
#[derive(Debug, Clone, Default)]
pub struct MarkdownProcessor {
  pub(crate) options: MarkdownOptions,
}

/// Trait for AST transformations applied between parsing and rendering.
pub trait AstTransformer {
  fn transform<'a>(&self, node: &'a AstNode<'a>);
}

/// Removes raw HTML blocks and inline HTML from the tree.
pub struct RawHtmlStripper;

impl AstTransformer for RawHtmlStripper {
  fn transform<'a>(&self, node: &'a AstNode<'a>) {
    // Collect first, detaching while walking would cut the traversal short
    let raw: Vec<_> = node
      .descendants()
      .filter(|n| {
        matches!(
          n.data.borrow().value,
          NodeValue::HtmlBlock(_) | NodeValue::HtmlInline(_)
        )
      })
      .collect();

    for html in raw {
      html.detach();
    }
  }
}

/// Turns every link into its platform form.
///
/// A link node becomes a literal inline run:
/// `[` + rendered link text + link title + `](` + destination + `)`, where
/// the destination is passed through [`links::rewrite_destination`]. Link
/// text is rendered with the same options as the rest of the document, so
/// emphasis or code inside a link keeps its HTML form.
pub struct LinkRewriter<'o, 'c> {
  options: &'o Options<'c>,
}

impl<'o, 'c> LinkRewriter<'o, 'c> {
  #[must_use]
  pub const fn new(options: &'o Options<'c>) -> Self {
    Self { options }
  }

  fn rewrite<'a>(&self, node: &'a AstNode<'a>) {
    let (url, title) = match &node.data.borrow().value {
      NodeValue::Link(link) => (link.url.clone(), link.title.clone()),
      _ => return,
    };

    let mut text = String::new();
    for child in node.children() {
      comrak::format_html(child, self.options, &mut text).unwrap_or_default();
    }

    let destination = links::rewrite_destination(&url);
    let mut literal = String::with_capacity(
      text.len() + title.len() + destination.len() + 4,
    );
    literal.push('[');
    literal.push_str(&text);
    literal.push_str(&title);
    literal.push_str("](");
    literal.push_str(&destination);
    literal.push(')');

    let children: Vec<_> = node.children().collect();
    for child in children {
      child.detach();
    }
    node.data.borrow_mut().value = NodeValue::HtmlInline(literal);
  }
}

impl AstTransformer for LinkRewriter<'_, '_> {
  fn transform<'a>(&self, node: &'a AstNode<'a>) {
    let links: Vec<_> = node
      .descendants()
      .filter(|n| matches!(n.data.borrow().value, NodeValue::Link(_)))
      .collect();

    for link in links {
      self.rewrite(link);
    }
  }
}
