//! Document discovery and conversion.
//!
//! A [`Document`] is one source file together with everything needed to
//! convert it: the category and version it is published under, the name of
//! the parent document it belongs to (if any) and the directory its output is
//! written to. Output is flattened: every document lands directly in its
//! output directory under its own file name.
use std::{
  fs,
  path::{Path, PathBuf},
};

use log::{debug, info, warn};
use sweden_commonmark::MarkdownProcessor;
use sweden_config::Config;
use walkdir::WalkDir;

use crate::{
  error::SwedenError,
  frontmatter::{FrontMatter, extract_title},
};

/// A source file scheduled for conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
  /// Path of the source file.
  pub source_path: PathBuf,

  /// Directory the converted file is written to.
  pub output_dir: PathBuf,

  /// Category name used to resolve the category identifier.
  pub category: String,

  /// Version name used for both identifier lookups.
  pub version: String,

  /// Parent document name, taken from the directory containing the file.
  pub parent_name: Option<String>,
}

/// Result of converting one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
  /// The converted document was written to this path.
  Written(PathBuf),

  /// The document was not convertible and nothing was written.
  Skipped,
}

impl Document {
  /// Path the converted document is written to.
  #[must_use]
  pub fn output_path(&self) -> PathBuf {
    self
      .source_path
      .file_name()
      .map_or_else(|| self.output_dir.clone(), |name| self.output_dir.join(name))
  }

  /// Convert the raw bytes of this document.
  ///
  /// Returns `Ok(None)` when the first line is not a heading; such files are
  /// not meant to be published and are skipped.
  ///
  /// # Errors
  ///
  /// Returns an error if the body is not valid UTF-8 or the front matter
  /// cannot be serialized.
  pub fn transform(
    &self,
    source: &[u8],
    config: &Config,
    processor: &MarkdownProcessor,
  ) -> Result<Option<String>, SwedenError> {
    let (first_line, rest) = split_first_line(source);

    // Checked on the raw bytes so binary files are skipped rather than
    // rejected for their encoding.
    if !first_line.starts_with(b"#") {
      return Ok(None);
    }

    let first_line = String::from_utf8_lossy(first_line);
    let Some(title) = extract_title(&first_line) else {
      return Ok(None);
    };

    let body = String::from_utf8(rest.to_vec()).map_err(|source| {
      SwedenError::Encoding {
        path: self.source_path.clone(),
        source,
      }
    })?;

    let category_id = config.category_id(&self.version, &self.category);
    if category_id.is_empty() {
      warn!(
        "No category id for {}/{} ({})",
        self.version,
        self.category,
        self.source_path.display()
      );
    }

    let parent_doc_id = self.parent_name.as_deref().map_or("", |parent| {
      config.parent_doc_id(&self.version, &self.category, parent)
    });

    let front_matter =
      FrontMatter::new(title, category_id, parent_doc_id).render()?;
    let rendered = processor.render(&join_lines(&body));

    let mut output = String::with_capacity(front_matter.len() + rendered.len());
    output.push_str(&front_matter);
    output.push_str(&rendered);
    Ok(Some(output))
  }

  /// Read, convert and write this document.
  ///
  /// # Errors
  ///
  /// Returns an error if the source cannot be read, the output cannot be
  /// written, or [`Document::transform`] fails.
  pub fn generate(
    &self,
    config: &Config,
    processor: &MarkdownProcessor,
  ) -> Result<Outcome, SwedenError> {
    if self.source_path.is_dir() {
      info!("{} is a directory, skipping", self.source_path.display());
      return Ok(Outcome::Skipped);
    }

    let source = fs::read(&self.source_path).map_err(|source| {
      SwedenError::Read {
        path: self.source_path.clone(),
        source,
      }
    })?;

    let Some(converted) = self.transform(&source, config, processor)? else {
      warn!(
        "{} does not start with a heading, skipping",
        self.source_path.display()
      );
      return Ok(Outcome::Skipped);
    };

    if !self.output_dir.as_os_str().is_empty() && !self.output_dir.exists() {
      fs::create_dir_all(&self.output_dir).map_err(|source| {
        SwedenError::Write {
          path: self.output_dir.clone(),
          source,
        }
      })?;
      debug!("Created directory: {}", self.output_dir.display());
    }

    let output_path = self.output_path();
    fs::write(&output_path, converted).map_err(|source| {
      SwedenError::Write {
        path: output_path.clone(),
        source,
      }
    })?;

    debug!(
      "Converted {} -> {}",
      self.source_path.display(),
      output_path.display()
    );
    Ok(Outcome::Written(output_path))
  }
}

/// Split off the first line, dropping its terminator (`\n` or `\r\n`).
fn split_first_line(source: &[u8]) -> (&[u8], &[u8]) {
  let (line, rest) = source
    .iter()
    .position(|&b| b == b'\n')
    .map_or((source, &source[source.len()..]), |nl| {
      (&source[..nl], &source[nl + 1..])
    });
  (line.strip_suffix(b"\r").unwrap_or(line), rest)
}

/// Re-join the remaining lines with plain newlines.
fn join_lines(body: &str) -> String {
  body.lines().collect::<Vec<_>>().join("\n")
}

/// Discover the documents below `target`.
///
/// A directory target yields every regular file beneath it, in file name order.
/// Each file takes the name of its containing directory as parent document
/// name and is written to the directory above that one. A file target yields a
/// single document without parent context, written next to itself.
///
/// `output_dir` replaces the computed output directory of every document.
///
/// # Errors
///
/// Returns an error if the directory tree cannot be walked.
pub fn collect_documents(
  target: &Path,
  category: &str,
  version: &str,
  output_dir: Option<&Path>,
) -> Result<Vec<Document>, SwedenError> {
  let make = |source_path: PathBuf,
              computed_dir: PathBuf,
              parent_name: Option<String>| {
    Document {
      source_path,
      output_dir: output_dir.map_or(computed_dir, Path::to_path_buf),
      category: category.to_owned(),
      version: version.to_owned(),
      parent_name,
    }
  };

  if !target.is_dir() {
    let dir = target.parent().map(Path::to_path_buf).unwrap_or_default();
    return Ok(vec![make(target.to_path_buf(), dir, None)]);
  }

  let mut documents = Vec::new();
  for entry in WalkDir::new(target).follow_links(true).sort_by_file_name() {
    let entry = entry.map_err(|source| {
      SwedenError::Walk {
        path: target.to_path_buf(),
        source,
      }
    })?;
    if !entry.path().is_file() {
      continue;
    }

    let path = entry.into_path();
    let parent = path.parent();
    let parent_name = parent
      .and_then(Path::file_name)
      .map(|name| name.to_string_lossy().into_owned());
    let grandparent = parent
      .and_then(Path::parent)
      .map(Path::to_path_buf)
      .unwrap_or_default();

    documents.push(make(path, grandparent, parent_name));
  }

  debug!(
    "Found {} file(s) to convert in {}",
    documents.len(),
    target.display()
  );
  Ok(documents)
}
