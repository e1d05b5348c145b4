use std::io;
use std::path::Path;

use tracing::debug;

use super::{DependencyList, DepsError};

/// Formats `<target>: <dep> <dep> ...` with spaces inside each dependency escaped.
pub fn format_rule(target: &str, deps: &DependencyList) -> String {
  let escaped = deps
    .iter()
    .map(|dep| dep.replace(' ', r"\ "))
    .collect::<Vec<_>>()
    .join(" ");
  format!("{}: {}\n", target, escaped)
}

/// Writes the rule to `depfile` unless the file already holds the same rule.
///
/// Surrounding whitespace is ignored in the comparison so an unchanged rule never
/// bumps the file's modification time. Returns whether the file was written.
pub fn write_rule_if_changed(depfile: &Path, target: &str, deps: &DependencyList) -> Result<bool, DepsError> {
  let rule = format_rule(target, deps);

  match std::fs::read_to_string(depfile) {
    Ok(previous) if previous.trim() == rule.trim() => {
      debug!(depfile = %depfile.display(), "dependency rule unchanged");
      return Ok(false);
    }
    Ok(_) => {}
    Err(err) if err.kind() == io::ErrorKind::NotFound => {}
    Err(source) => {
      return Err(DepsError::ReadRule {
        path: depfile.to_path_buf(),
        source,
      });
    }
  }

  std::fs::write(depfile, rule).map_err(|source| DepsError::WriteRule {
    path: depfile.to_path_buf(),
    source,
  })?;
  debug!(depfile = %depfile.display(), deps = deps.len(), "dependency rule written");
  Ok(true)
}
