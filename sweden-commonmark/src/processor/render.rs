//! Block-level output assembly.
use comrak::{nodes::AstNode, options::Options};

/// Writes the top-level blocks of a document one after another.
///
/// Each block is rendered by comrak's HTML formatter. The renderer remembers
/// the length of the last chunk it emitted and uses it to decide whether a
/// blank line is needed before the next block, so the output never starts
/// with a blank line and siblings are separated by exactly one.
pub struct Renderer<'o, 'c> {
  options:         &'o Options<'c>,
  output:          String,
  last_output_len: usize,
}

impl<'o, 'c> Renderer<'o, 'c> {
  #[must_use]
  pub const fn new(options: &'o Options<'c>) -> Self {
    Self {
      options,
      output: String::new(),
      last_output_len: 0,
    }
  }

  /// Render every block below `root` and return the assembled output.
  #[must_use]
  pub fn render<'a>(mut self, root: &'a AstNode<'a>) -> String {
    for block in root.children() {
      self.render_block(block);
    }
    if self.last_output_len > 0 {
      self.out("\n");
    }
    self.output
  }

  fn render_block<'a>(&mut self, node: &'a AstNode<'a>) {
    let mut html = String::new();
    comrak::format_html(node, self.options, &mut html).unwrap_or_default();

    let html = html.trim_end_matches('\n');
    if html.is_empty() {
      return;
    }
    self.cr();
    self.out(html);
  }

  /// Separate the next block from whatever was written before it.
  fn cr(&mut self) {
    if self.last_output_len > 0 {
      self.out("\n");
      self.out("\n");
    }
  }

  fn out(&mut self, text: &str) {
    self.output.push_str(text);
    self.last_output_len = text.len();
  }
}
