//! Standalone MSBuild discovery through the Visual Studio installer's `vswhere.exe`.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use crate::consts::VSWHERE_REQUIRED_COMPONENT;
use crate::exec::{CommandRunner, CommandSpec};
use crate::platform::Environment;

/// Malformed `vswhere` output.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VsWhereError {
  #[error("value of `installationPath` entry is empty")]
  EmptyInstallationPath,

  #[error("cannot find `installationPath` entry")]
  MissingInstallationPath,
}

/// Expected location of `vswhere.exe`, from `PROGRAMFILES(X86)` or else `PROGRAMFILES`.
pub fn vswhere_path<E: Environment>(env: &E) -> Option<PathBuf> {
  let program_files = ["PROGRAMFILES(X86)", "PROGRAMFILES"]
    .into_iter()
    .filter_map(|name| env.var(name))
    .find(|value| !value.is_empty())?;

  Some(
    PathBuf::from(program_files)
      .join("Microsoft Visual Studio")
      .join("Installer")
      .join("vswhere.exe"),
  )
}

/// Extracts the first `installationPath: <dir>` entry from `vswhere` output.
pub fn parse_installation_path(stdout: &str) -> Result<PathBuf, VsWhereError> {
  for line in stdout.lines() {
    let Some((key, value)) = line.split_once(':') else {
      continue;
    };
    if key != "installationPath" {
      continue;
    }

    let value = value.trim();
    if value.is_empty() {
      return Err(VsWhereError::EmptyInstallationPath);
    }
    return Ok(PathBuf::from(value));
  }

  Err(VsWhereError::MissingInstallationPath)
}

/// MSBuild's bin directory inside a Visual Studio installation.
///
/// VS 2019 and later name it `Current`; VS 2017 uses `15.0`.
pub fn msbuild_bin_dir(installation: &Path) -> PathBuf {
  let current = installation.join("MSBuild").join("Current").join("Bin");
  if current.is_dir() {
    return current;
  }
  installation.join("MSBuild").join("15.0").join("Bin")
}

/// Locates `MSBuild.exe` from the latest Visual Studio installation that ships it.
///
/// Only meaningful on Windows. A missing `vswhere`, a failing `vswhere` and
/// unusable output all yield `None`; unusable output is additionally logged.
pub async fn find_msbuild_standalone<E, R>(env: &E, runner: &R) -> Option<PathBuf>
where
  E: Environment,
  R: CommandRunner,
{
  if !env.os().is_windows() {
    debug!("standalone MSBuild is only located on Windows");
    return None;
  }

  let vswhere = vswhere_path(env)?;
  let spec = CommandSpec::new(&vswhere).args(["-latest", "-products", "*", "-requires", VSWHERE_REQUIRED_COMPONENT]);

  let output = match runner.output(&spec).await {
    Ok(output) => output,
    Err(err) => {
      debug!(vswhere = %vswhere.display(), error = %err, "vswhere not available");
      return None;
    }
  };
  if !output.success() {
    debug!(vswhere = %vswhere.display(), code = output.code, "vswhere failed");
    return None;
  }

  match parse_installation_path(&output.stdout) {
    Ok(installation) => Some(msbuild_bin_dir(&installation).join("MSBuild.exe")),
    Err(err) => {
      warn!(error = %err, "error reading output from vswhere");
      None
    }
  }
}
