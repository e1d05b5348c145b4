//! `PATH` scanning.

use std::path::{Path, PathBuf};

use tracing::trace;

use crate::platform::{Environment, is_executable};

/// Finds the first executable `<name><suffix>` in the directories listed in `PATH`.
///
/// Directories are visited in order and, within one directory, suffixes in the
/// order given. Quotes around an entry are ignored and empty entries skipped.
/// Returns `None` when `PATH` is unset or nothing matches.
pub fn search_path<E: Environment>(env: &E, name: &str, suffixes: &[&str]) -> Option<PathBuf> {
  let path_var = env.var("PATH")?;
  let path_var = path_var.to_string_lossy();

  path_var
    .split(env.os().path_list_separator())
    .map(|entry| entry.trim_matches('"'))
    .filter(|entry| !entry.is_empty())
    .find_map(|dir| find_in_dir(Path::new(dir), name, suffixes, is_executable))
}

/// Finds `<name><suffix>` in each hint directory, accepting any regular file.
pub fn search_hint_dirs<P: AsRef<Path>>(dirs: &[P], name: &str, suffixes: &[&str]) -> Option<PathBuf> {
  dirs
    .iter()
    .find_map(|dir| find_in_dir(dir.as_ref(), name, suffixes, Path::is_file))
}

fn find_in_dir(dir: &Path, name: &str, suffixes: &[&str], accept: impl Fn(&Path) -> bool) -> Option<PathBuf> {
  suffixes.iter().find_map(|suffix| {
    let candidate = dir.join(format!("{name}{suffix}"));
    trace!(candidate = %candidate.display(), "probing");
    accept(&candidate).then(|| absolute(candidate))
  })
}

fn absolute(path: PathBuf) -> PathBuf {
  std::path::absolute(&path).unwrap_or(path)
}
