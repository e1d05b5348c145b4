use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use csglue_lib::files::stream_file;

use super::EXIT_SUCCESS;

pub fn cmd_print_file(path: &Path) -> Result<i32> {
  let stdout = std::io::stdout();
  let mut out = stdout.lock();
  stream_file(path, &mut out)?;
  out.flush().context("Failed to flush stdout")?;
  Ok(EXIT_SUCCESS)
}
