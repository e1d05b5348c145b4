pub mod env;
pub mod os;
#[cfg(windows)]
mod registry;

use std::path::Path;

pub use env::{Environment, RegistryView, SystemEnvironment};
pub use os::Os;

/// Returns true if `path` is a regular file the current user may execute.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
  use rustix::fs::{Access, access};

  path.is_file() && access(path, Access::EXEC_OK).is_ok()
}

/// Returns true if `path` is a regular file.
///
/// Windows has no execute bit; any file found by name is runnable.
#[cfg(not(unix))]
pub fn is_executable(path: &Path) -> bool {
  path.is_file()
}
