use std::{fs, path::Path, str::FromStr};

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Lookup table mapping documentation versions to their categories and
/// parent documents.
///
/// [`Config`] is loaded once per run and never mutated afterwards, so a shared
/// reference can be handed to every document conversion. Lookups that fail to
/// resolve return an empty identifier rather than an error; callers decide
/// whether an unresolved identifier matters to them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
  /// Documentation versions, scanned in order.
  #[serde(default, alias = "version")]
  pub versions: Vec<Version>,
}

/// A documentation branch on the hosted docs platform.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version {
  pub name: String,

  #[serde(default)]
  pub categories: Vec<Category>,
}

/// A category within a version, with the platform's stable identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
  pub name: String,
  pub id:   String,

  /// Parent documents that pages of this category may be nested under.
  #[serde(default)]
  pub parents: Vec<ParentDoc>,
}

/// A named parent document and its stable identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentDoc {
  pub name: String,
  pub id:   String,
}

impl Config {
  /// Load configuration from a file (YAML, JSON or TOML).
  ///
  /// The format is selected by the file extension: `yaml`/`yml`, `json` or
  /// `toml`.
  ///
  /// # Errors
  ///
  /// Returns an error if the file cannot be read or parsed, or if the format is
  /// unsupported.
  #[allow(
    clippy::option_if_let_else,
    reason = "Clearer with explicit match on extension"
  )]
  pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
      ConfigError::Config(format!(
        "Failed to read config file: {}: {}",
        path.display(),
        e
      ))
    })?;

    let config = match path.extension().and_then(|ext| ext.to_str()) {
      Some(ext) => {
        match ext.to_lowercase().as_str() {
          "yaml" | "yml" => {
            Self::from_yaml(&content).map_err(|e| {
              ConfigError::Config(format!(
                "Failed to parse YAML config from {}: {}",
                path.display(),
                e
              ))
            })
          },
          "json" => {
            serde_json::from_str(&content)
              .map_err(ConfigError::from)
              .map_err(|e| {
                ConfigError::Config(format!(
                  "Failed to parse JSON config from {}: {}",
                  path.display(),
                  e
                ))
              })
          },
          "toml" => {
            toml::from_str(&content)
              .map_err(ConfigError::from)
              .map_err(|e| {
                ConfigError::Config(format!(
                  "Failed to parse TOML config from {}: {}",
                  path.display(),
                  e
                ))
              })
          },
          _ => {
            Err(ConfigError::Config(format!(
              "Unsupported config file format: {}",
              path.display()
            )))
          },
        }
      },
      None => {
        Err(ConfigError::Config(format!(
          "Config file has no extension: {}",
          path.display()
        )))
      },
    }?;

    debug!(
      "Loaded {} version(s) from {}",
      config.versions.len(),
      path.display()
    );
    Ok(config)
  }

  /// Parse configuration from a YAML document.
  ///
  /// # Errors
  ///
  /// Returns an error if the document is not valid YAML or does not match the
  /// expected layout.
  pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
    Ok(serde_yaml::from_str(content)?)
  }

  /// Find the first version with the given name.
  #[must_use]
  pub fn find_version(&self, version: &str) -> Option<&Version> {
    self.versions.iter().find(|v| v.name == version)
  }

  /// Find the first category named `category` among the versions named
  /// `version`, in declaration order.
  #[must_use]
  pub fn find_category(
    &self,
    version: &str,
    category: &str,
  ) -> Option<&Category> {
    self
      .versions
      .iter()
      .filter(|v| v.name == version)
      .flat_map(|v| v.categories.iter())
      .find(|c| c.name == category)
  }

  /// Resolve the identifier of a category.
  ///
  /// Returns an empty string when either the version or the category is not
  /// configured.
  #[must_use]
  pub fn category_id(&self, version: &str, category: &str) -> &str {
    if let Some(found) = self.find_category(version, category) {
      trace!("Resolved category {version}/{category} to {}", found.id);
      found.id.as_str()
    } else {
      debug!("No category {category} configured for version {version}");
      ""
    }
  }

  /// Resolve the identifier of a parent document.
  ///
  /// Returns an empty string when the version, the category or the parent
  /// document is not configured.
  #[must_use]
  pub fn parent_doc_id(
    &self,
    version: &str,
    category: &str,
    parent: &str,
  ) -> &str {
    let found = self
      .find_category(version, category)
      .and_then(|c| c.parents.iter().find(|p| p.name == parent));

    if let Some(parent_doc) = found {
      trace!(
        "Resolved parent document {version}/{category}/{parent} to {}",
        parent_doc.id
      );
      parent_doc.id.as_str()
    } else {
      debug!(
        "No parent document {parent} configured for {version}/{category}"
      );
      ""
    }
  }
}

impl FromStr for Config {
  type Err = ConfigError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::from_yaml(s)
  }
}
