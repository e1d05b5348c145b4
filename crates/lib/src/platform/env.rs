//! Process environment access.
//!
//! Everything the tool locator reads from outside the filesystem (environment
//! variables, the Windows registry, the OS family) goes through [`Environment`]
//! so it can be replaced by fixtures.

use std::ffi::OsString;
use std::fmt;

use tracing::trace;

use super::os::Os;

/// Which WOW64 view of the registry to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegistryView {
  Bits32,
  Bits64,
}

impl RegistryView {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Bits32 => "32",
      Self::Bits64 => "64",
    }
  }
}

impl fmt::Display for RegistryView {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}-bit", self.as_str())
  }
}

pub trait Environment {
  /// The OS family probes should behave as.
  fn os(&self) -> Os;

  /// Value of an environment variable, `None` if unset.
  fn var(&self, name: &str) -> Option<OsString>;

  /// String value `value` under `HKEY_LOCAL_MACHINE\<subkey>`, `None` if the key or
  /// value is absent or registry access is unavailable on this platform.
  fn registry_string(&self, subkey: &str, value: &str, view: RegistryView) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
  fn os(&self) -> Os {
    Os::current()
  }

  fn var(&self, name: &str) -> Option<OsString> {
    std::env::var_os(name)
  }

  #[cfg(windows)]
  fn registry_string(&self, subkey: &str, value: &str, view: RegistryView) -> Option<String> {
    let result = super::registry::read_hklm_string(subkey, value, view);
    trace!(subkey, value, %view, found = result.is_some(), "registry query");
    result
  }

  #[cfg(not(windows))]
  fn registry_string(&self, subkey: &str, value: &str, view: RegistryView) -> Option<String> {
    trace!(subkey, value, %view, "registry unavailable on this platform");
    None
  }
}
