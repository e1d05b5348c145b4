use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use csglue_lib::files::{copy_file, touch};

use super::EXIT_SUCCESS;

/// Copies a build artifact, creating the destination directory if needed, then
/// touches the stamp file when one is given.
pub fn cmd_copy_file(src: &Path, dst: &Path, stamp: Option<&Path>) -> Result<i32> {
  let written = copy_file(src, dst)?;
  debug!(src = %src.display(), dst = %written.display(), "copied");

  if let Some(stamp) = stamp {
    touch(stamp).context("Failed to update stamp file")?;
  }

  Ok(EXIT_SUCCESS)
}
