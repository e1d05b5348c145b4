use std::fmt;

/// Operating system families the tool locator distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Os {
  Linux,
  MacOs,
  Windows,
  /// Any other Unix-like system (BSDs, Haiku, ...)
  OtherUnix,
}

impl Os {
  /// Detect the current operating system at runtime
  pub fn current() -> Self {
    match std::env::consts::OS {
      "linux" => Self::Linux,
      "macos" => Self::MacOs,
      "windows" => Self::Windows,
      _ => Self::OtherUnix,
    }
  }

  /// Returns the lowercase string identifier for this OS
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Linux => "linux",
      Self::MacOs => "darwin",
      Self::Windows => "windows",
      Self::OtherUnix => "unix",
    }
  }

  pub fn is_windows(&self) -> bool {
    matches!(self, Self::Windows)
  }

  /// Separator used between entries of `PATH`
  pub fn path_list_separator(&self) -> char {
    if self.is_windows() { ';' } else { ':' }
  }

  /// Extensions tried, in order, when looking for an executable by bare name
  pub fn executable_suffixes(&self) -> &'static [&'static str] {
    if self.is_windows() { &["", ".exe"] } else { &[""] }
  }
}

impl fmt::Display for Os {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}
