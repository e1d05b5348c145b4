//! Glue version header.
//!
//! The version is the newest modification time among the glue's dependencies, so
//! touching any of them changes the constant and invalidates whatever embeds it.

use std::io;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

use thiserror::Error;
use tracing::debug;

use crate::deps::DependencyList;

#[derive(Debug, Error)]
pub enum VersionError {
  #[error("failed to read modification time of {}: {source}", path.display())]
  Metadata { path: PathBuf, source: io::Error },

  #[error("modification time {seconds} does not fit in an unsigned 32-bit version")]
  OutOfRange { seconds: u64 },

  #[error("failed to write version header {}: {source}", path.display())]
  Write { path: PathBuf, source: io::Error },
}

/// Newest modification time, in whole seconds since the Unix epoch, among `paths`.
///
/// An empty list, and times before the epoch, count as 0.
pub fn latest_mtime<I, P>(paths: I) -> Result<u64, VersionError>
where
  I: IntoIterator<Item = P>,
  P: AsRef<Path>,
{
  let mut latest = 0;
  for path in paths {
    let path = path.as_ref();
    let modified = std::fs::metadata(path)
      .and_then(|m| m.modified())
      .map_err(|source| VersionError::Metadata {
        path: path.to_path_buf(),
        source,
      })?;
    let seconds = modified.duration_since(UNIX_EPOCH).map(|d| d.as_secs()).unwrap_or(0);
    latest = latest.max(seconds);
  }
  Ok(latest)
}

/// The glue version for a dependency list.
pub fn glue_version(deps: &DependencyList) -> Result<u32, VersionError> {
  let seconds = latest_mtime(deps)?;
  u32::try_from(seconds).map_err(|_| VersionError::OutOfRange { seconds })
}

pub fn render_header(version: u32) -> String {
  format!(
    "/* THIS FILE IS GENERATED DO NOT EDIT */\n\
     #ifndef CS_GLUE_VERSION_H\n\
     #define CS_GLUE_VERSION_H\n\
     \n\
     #define CS_GLUE_VERSION UINT32_C({version})\n\
     \n\
     #endif // CS_GLUE_VERSION_H\n"
  )
}

/// Computes the version for `deps` and writes the header to `header`.
pub fn generate_header(header: &Path, deps: &DependencyList) -> Result<u32, VersionError> {
  let version = glue_version(deps)?;
  std::fs::write(header, render_header(version)).map_err(|source| VersionError::Write {
    path: header.to_path_buf(),
    source,
  })?;
  debug!(header = %header.display(), version, "wrote glue version header");
  Ok(version)
}
