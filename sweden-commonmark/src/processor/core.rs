//! Core implementation of the Markdown processor.
//!
//! Parsing is left to comrak. The parsed tree is run through the enabled
//! [`AstTransformer`]s and then handed to the block [`Renderer`].
use comrak::{Arena, options::Options, parse_document};
use log::trace;

use super::{
  render::Renderer,
  types::{
    AstTransformer,
    LinkRewriter,
    MarkdownOptions,
    MarkdownProcessor,
    RawHtmlStripper,
  },
};

impl MarkdownProcessor {
  /// Create a new `MarkdownProcessor` with the given options.
  #[must_use]
  pub const fn new(options: MarkdownOptions) -> Self {
    Self { options }
  }

  /// Access processor options.
  #[must_use]
  pub const fn options(&self) -> &MarkdownOptions {
    &self.options
  }

  /// Render a Markdown body into the platform flavor.
  ///
  /// Every block goes through comrak's HTML renderer unchanged, links are
  /// written back in Markdown syntax with local destinations rewritten to
  /// `doc:` references. Blocks are separated by one blank line and non-empty
  /// output ends with a newline.
  #[must_use]
  pub fn render(&self, markdown: &str) -> String {
    let arena = Arena::new();
    let options = self.comrak_options();
    let root = parse_document(&arena, markdown, &options);

    if self.options.skip_html {
      RawHtmlStripper.transform(root);
    }
    LinkRewriter::new(&options).transform(root);

    let output = Renderer::new(&options).render(root);
    trace!(
      "Rendered {} bytes of Markdown into {} bytes",
      markdown.len(),
      output.len()
    );
    output
  }

  /// Build comrak options from `MarkdownOptions`.
  fn comrak_options(&self) -> Options<'_> {
    let mut options = Options::default();
    if self.options.gfm {
      options.extension.table = true;
      options.extension.strikethrough = true;
      options.extension.autolink = true;
      options.extension.description_lists = true;
    }
    // Rewritten links are carried as inline HTML nodes and must be emitted
    // verbatim. Raw HTML from the source is removed beforehand unless the
    // caller asked to keep it.
    options.render.r#unsafe = true;
    options.extension.header_ids = None;
    options
  }
}

/// Render a Markdown body with the default options.
#[must_use]
pub fn render_body(markdown: &str) -> String {
  MarkdownProcessor::default().render(markdown)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::MarkdownOptionsBuilder;

  #[test]
  fn test_render_body_rewrites_local_link() {
    let html = render_body("Visit [the setup guide](setup.md) for details.");
    assert_eq!(html, "<p>Visit [the setup guide](doc:setup) for details.</p>\n");
  }

  #[test]
  fn test_empty_input_renders_nothing() {
    assert_eq!(render_body(""), "");
    assert_eq!(render_body("\n\n"), "");
  }

  #[test]
  fn test_gfm_toggle() {
    let md = "| a |\n|---|\n| b |\n";
    let with = MarkdownProcessor::new(MarkdownOptions {
      gfm:       true,
      skip_html: true,
    });
    let without =
      MarkdownProcessor::new(MarkdownOptionsBuilder::new().gfm(false).build());

    assert!(with.render(md).contains("<table>"));
    assert!(!without.render(md).contains("<table>"));
  }

  #[test]
  fn test_options_accessor() {
    let options = MarkdownOptionsBuilder::new().skip_html(false).build();
    let processor = MarkdownProcessor::new(options.clone());
    assert_eq!(processor.options(), &options);
  }
}
