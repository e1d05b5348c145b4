//! Dependency lists emitted by MSBuild and the make-style rules derived from them.

mod rules;

use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub use rules::{format_rule, write_rule_if_changed};

#[derive(Debug, Error)]
pub enum DepsError {
  #[error("failed to read dependency list {}: {source}", path.display())]
  ReadList { path: PathBuf, source: io::Error },

  #[error("failed to read dependency file {}: {source}", path.display())]
  ReadRule { path: PathBuf, source: io::Error },

  #[error("failed to write dependency file {}: {source}", path.display())]
  WriteRule { path: PathBuf, source: io::Error },
}

/// Files a build output depends on, in the order the producing tool emitted them.
///
/// Entries are trimmed, non-empty and unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyList(Vec<String>);

impl DependencyList {
  /// Parses newline-separated paths, dropping blanks and later duplicates.
  ///
  /// `\n`, `\r\n` and a lone `\r` all end a line.
  pub fn parse(text: &str) -> Self {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut seen = HashSet::new();
    let entries = text
      .split(['\n', '\r'])
      .map(str::trim)
      .filter(|line| !line.is_empty() && seen.insert(*line))
      .map(str::to_string)
      .collect();
    Self(entries)
  }

  /// Reads and parses a list file.
  pub fn read(path: &Path) -> Result<Self, DepsError> {
    let text = std::fs::read_to_string(path).map_err(|source| DepsError::ReadList {
      path: path.to_path_buf(),
      source,
    })?;
    Ok(Self::parse(&text))
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn iter(&self) -> std::slice::Iter<'_, String> {
    self.0.iter()
  }

  pub fn as_slice(&self) -> &[String] {
    &self.0
  }
}

impl<'a> IntoIterator for &'a DependencyList {
  type Item = &'a String;
  type IntoIter = std::slice::Iter<'a, String>;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

impl<S: Into<String>> FromIterator<S> for DependencyList {
  /// Collects already-separated entries with the same filtering as [`DependencyList::parse`].
  fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
    let joined = iter.into_iter().map(Into::into).collect::<Vec<String>>().join("\n");
    Self::parse(&joined)
  }
}
