//! Front matter synthesis.
//!
//! Every converted page starts with a YAML block carrying the page title, the
//! platform category identifier and, when known, the identifier of the parent
//! document:
//!
//! ```text
//! ---
//! title: Getting Started
//! category: cat123
//! parentDoc: p1
//! ---
//! ```
use serde::Serialize;

use crate::error::SwedenError;

/// Delimiter line framing the front matter block.
pub const DELIMITER: &str = "---\n";

/// Page metadata required by the documentation platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrontMatter {
  pub title: String,

  /// Category identifier. Serialized even when unresolved.
  pub category: String,

  /// Parent document identifier, omitted from the output when empty.
  #[serde(rename = "parentDoc", skip_serializing_if = "String::is_empty")]
  pub parent_doc: String,
}

impl FrontMatter {
  #[must_use]
  pub fn new(
    title: impl Into<String>,
    category: impl Into<String>,
    parent_doc: impl Into<String>,
  ) -> Self {
    Self {
      title:      title.into(),
      category:   category.into(),
      parent_doc: parent_doc.into(),
    }
  }

  /// Serialize the mapping without delimiters.
  ///
  /// # Errors
  ///
  /// Returns an error if YAML serialization fails.
  pub fn to_yaml(&self) -> Result<String, SwedenError> {
    Ok(serde_yaml::to_string(self)?)
  }

  /// Serialize the mapping framed by `---` delimiter lines.
  ///
  /// # Errors
  ///
  /// Returns an error if YAML serialization fails.
  pub fn render(&self) -> Result<String, SwedenError> {
    let yaml = self.to_yaml()?;
    let mut block =
      String::with_capacity(yaml.len() + DELIMITER.len() * 2 + 1);
    block.push_str(DELIMITER);
    block.push_str(&yaml);
    if !yaml.ends_with('\n') {
      block.push('\n');
    }
    block.push_str(DELIMITER);
    Ok(block)
  }
}

/// Extract the page title from the first line of a document.
///
/// Returns `None` unless the line starts with `#`. Otherwise the leading run of
/// `#` characters is dropped and surrounding whitespace trimmed.
#[must_use]
pub fn extract_title(first_line: &str) -> Option<String> {
  first_line
    .strip_prefix('#')
    .map(|rest| rest.trim_start_matches('#').trim().to_owned())
}

/// Build the delimited front matter block for a page.
///
/// # Errors
///
/// Returns an error if YAML serialization fails.
pub fn synthesize_front_matter(
  title: &str,
  category_id: &str,
  parent_doc_id: &str,
) -> Result<String, SwedenError> {
  FrontMatter::new(title, category_id, parent_doc_id).render()
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, reason = "Fine in tests")]

  use super::*;

  #[test]
  fn test_parent_doc_omitted_when_empty() {
    let block = synthesize_front_matter("T", "C", "").unwrap();
    assert_eq!(block, "---\ntitle: T\ncategory: C\n---\n");
    assert!(!block.contains("parentDoc"));
  }

  #[test]
  fn test_parent_doc_included_when_set() {
    let block = synthesize_front_matter("T", "C", "p1").unwrap();
    assert_eq!(block, "---\ntitle: T\ncategory: C\nparentDoc: p1\n---\n");
  }

  #[test]
  fn test_key_order_is_fixed() {
    let yaml = FrontMatter::new("Getting Started", "cat123", "p9")
      .to_yaml()
      .unwrap();
    let keys: Vec<_> = yaml
      .lines()
      .filter_map(|line| line.split_once(':').map(|(key, _)| key))
      .collect();
    assert_eq!(keys, ["title", "category", "parentDoc"]);
  }

  #[test]
  fn test_values_needing_quotes_stay_valid_yaml() {
    let block = synthesize_front_matter("Setup: the basics", "", "").unwrap();
    let yaml = block.trim_start_matches(DELIMITER).trim_end_matches(DELIMITER);
    let parsed: serde_yaml::Value = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(parsed["title"].as_str(), Some("Setup: the basics"));
    assert_eq!(parsed["category"].as_str(), Some(""));
  }

  #[test]
  fn test_extract_title() {
    assert_eq!(extract_title("# Title").as_deref(), Some("Title"));
    assert_eq!(extract_title("#Title").as_deref(), Some("Title"));
    assert_eq!(extract_title("#   Title  \t").as_deref(), Some("Title"));
    assert_eq!(extract_title("### Deep title").as_deref(), Some("Deep title"));
    assert_eq!(extract_title("# C# in depth").as_deref(), Some("C# in depth"));
  }

  #[test]
  fn test_extract_title_requires_literal_prefix() {
    assert_eq!(extract_title("Not a heading"), None);
    assert_eq!(extract_title("  # indented"), None);
    assert_eq!(extract_title(""), None);
  }
}
