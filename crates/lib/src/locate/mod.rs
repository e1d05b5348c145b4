//! Build tool discovery.
//!
//! Each probe returns `Option<PathBuf>`: a missing tool, registry key or
//! installer is an expected outcome, never an error. The only error here is a
//! request that cannot be answered at all (Mono MSBuild without a prefix).

mod mono;
mod path_search;
mod vswhere;

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::exec::CommandRunner;
use crate::platform::Environment;

pub use mono::{MACOS_HINT_DIRS, find_mono_root_dir, find_msbuild_mono};
pub use path_search::{search_hint_dirs, search_path};
pub use vswhere::{VsWhereError, find_msbuild_standalone, msbuild_bin_dir, parse_installation_path, vswhere_path};

/// The build tools that can drive MSBuild projects, in preference order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolKind {
  DotnetCli,
  MsbuildStandalone,
  MsbuildMono,
}

impl ToolKind {
  pub const PREFERENCE_ORDER: [ToolKind; 3] = [Self::DotnetCli, Self::MsbuildStandalone, Self::MsbuildMono];

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::DotnetCli => "dotnet-cli",
      Self::MsbuildStandalone => "msbuild-standalone",
      Self::MsbuildMono => "msbuild-mono",
    }
  }
}

impl fmt::Display for ToolKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LocateError {
  #[error("a Mono prefix is required to locate {}", ToolKind::MsbuildMono)]
  MissingMonoPrefix,
}

/// Finds the `dotnet` executable on `PATH`.
pub fn find_dotnet_cli<E: Environment>(env: &E) -> Option<PathBuf> {
  search_path(env, "dotnet", env.os().executable_suffixes())
}

/// Locates one build tool.
///
/// `mono_prefix` is required for [`ToolKind::MsbuildMono`] and ignored otherwise.
pub async fn find_tool<E, R>(
  env: &E,
  runner: &R,
  kind: ToolKind,
  mono_prefix: Option<&Path>,
) -> Result<Option<PathBuf>, LocateError>
where
  E: Environment,
  R: CommandRunner,
{
  let found = match kind {
    ToolKind::DotnetCli => find_dotnet_cli(env),
    ToolKind::MsbuildStandalone => find_msbuild_standalone(env, runner).await,
    ToolKind::MsbuildMono => {
      let prefix = mono_prefix.ok_or(LocateError::MissingMonoPrefix)?;
      find_msbuild_mono(env, prefix)
    }
  };

  match &found {
    Some(path) => info!(tool = %kind, path = %path.display(), "located build tool"),
    None => debug!(tool = %kind, os = %env.os(), "build tool not found"),
  }

  Ok(found)
}
