use std::path::Path;

use anyhow::Result;

use csglue_lib::files::list_assemblies;

use super::EXIT_SUCCESS;

/// Prints the file name of every assembly directly inside `dir`, one per line.
pub fn cmd_list_assemblies(dir: &Path) -> Result<i32> {
  for name in list_assemblies(dir)? {
    println!("{}", name);
  }
  Ok(EXIT_SUCCESS)
}
