//! Implementation of the `csglue glue-version` command.
//!
//! Builds the glue project like `run-msbuild`, then writes the version header to
//! the stamp path. The header is the step's output, so it stands in for the stamp.

use anyhow::{Context, Result};
use tracing::info;

use csglue_lib::version::generate_header;

use super::run_msbuild::MsbuildArgs;

pub fn cmd_glue_version(args: &MsbuildArgs) -> Result<i32> {
  let result = args.run()?;
  if !result.success() {
    return Ok(result.exit_code);
  }

  let deplist = result.deplist.unwrap_or_default();
  let version = generate_header(&args.stamp, &deplist).context("Failed to generate glue version header")?;
  info!(version, header = %args.stamp.display(), "glue version updated");

  Ok(result.exit_code)
}
