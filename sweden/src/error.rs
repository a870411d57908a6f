use std::{io, path::PathBuf};

use thiserror::Error;

/// Top-level error type for the sweden crate.
///
/// Every variant is fatal for a conversion run. Documents that are merely not
/// convertible (no heading on the first line) are reported as skips instead.
#[derive(Debug, Error)]
pub enum SwedenError {
  #[error("Failed to read {}: {source}", .path.display())]
  Read {
    path:   PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("Failed to write {}: {source}", .path.display())]
  Write {
    path:   PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("Failed to walk {}: {source}", .path.display())]
  Walk {
    path:   PathBuf,
    #[source]
    source: walkdir::Error,
  },

  #[error("{} is not valid UTF-8: {source}", .path.display())]
  Encoding {
    path:   PathBuf,
    #[source]
    source: std::string::FromUtf8Error,
  },

  #[error("Front matter serialization error: {0}")]
  FrontMatter(#[from] serde_yaml::Error),
}
