//! Types for MSBuild invocation.

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::consts::PLATFORM_ENV_VAR;
use crate::deps::{DependencyList, DepsError};
use crate::exec::CommandSpec;
use crate::locate::ToolKind;

/// Errors that prevent an MSBuild run from starting or completing its bookkeeping.
///
/// A build that runs and fails is not an error; see [`BuildResult::exit_code`].
#[derive(Debug, Error)]
pub enum MsbuildError {
  #[error("path to MSBuild or dotnet CLI not provided")]
  NoTool,

  #[error("a stamp path is required to name the target of the dependency rule")]
  MissingStamp,

  #[error("failed to resolve absolute path of {}: {source}", path.display())]
  ResolvePath { path: PathBuf, source: io::Error },

  #[error("failed to remove stale dependency list {}: {source}", path.display())]
  RemoveStaleList { path: PathBuf, source: io::Error },

  #[error("failed to run {}: {source}", program.display())]
  Spawn { program: PathBuf, source: io::Error },

  #[error(transparent)]
  Deps(#[from] DepsError),
}

/// Paths to the available build tools, as handed over by the build system.
///
/// Empty paths count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolSet {
  pub dotnet_cli: Option<PathBuf>,
  pub msbuild_standalone: Option<PathBuf>,
  pub msbuild_mono: Option<PathBuf>,
  /// Mono's `bin` directory; holds the compiler wrappers Mono's MSBuild needs.
  pub mono_bin_dir: Option<PathBuf>,
}

fn non_empty(path: &Option<PathBuf>) -> Option<&Path> {
  path.as_deref().filter(|p| !p.as_os_str().is_empty())
}

impl ToolSet {
  /// Picks the preferred tool: dotnet CLI, then standalone MSBuild, then Mono's MSBuild.
  pub fn select(&self) -> Result<SelectedTool, MsbuildError> {
    if let Some(dotnet) = non_empty(&self.dotnet_cli) {
      return Ok(SelectedTool::DotnetCli(dotnet.to_path_buf()));
    }
    if let Some(msbuild) = non_empty(&self.msbuild_standalone) {
      return Ok(SelectedTool::Standalone(msbuild.to_path_buf()));
    }
    if let Some(msbuild) = non_empty(&self.msbuild_mono) {
      return Ok(SelectedTool::Mono {
        msbuild: msbuild.to_path_buf(),
        bin_dir: non_empty(&self.mono_bin_dir).map(Path::to_path_buf).unwrap_or_default(),
      });
    }
    Err(MsbuildError::NoTool)
  }
}

/// The tool an invocation will run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectedTool {
  DotnetCli(PathBuf),
  Standalone(PathBuf),
  Mono { msbuild: PathBuf, bin_dir: PathBuf },
}

impl SelectedTool {
  pub fn kind(&self) -> ToolKind {
    match self {
      Self::DotnetCli(_) => ToolKind::DotnetCli,
      Self::Standalone(_) => ToolKind::MsbuildStandalone,
      Self::Mono { .. } => ToolKind::MsbuildMono,
    }
  }

  /// The command up to (not including) the project argument, with its environment.
  ///
  /// `PLATFORM` is always removed. Mono's MSBuild additionally needs the
  /// `CscToolExe`/`VbcToolExe`/`FscToolExe` overrides so the compilers run under Mono.
  pub fn base_command(&self) -> CommandSpec {
    let spec = match self {
      Self::DotnetCli(dotnet) => CommandSpec::new(dotnet).arg("msbuild"),
      Self::Standalone(msbuild) => CommandSpec::new(msbuild),
      Self::Mono { msbuild, bin_dir } => CommandSpec::new(msbuild)
        .env("CscToolExe", bin_dir.join("csc.bat"))
        .env("VbcToolExe", bin_dir.join("vbc.bat"))
        .env("FscToolExe", bin_dir.join("fsharpc.bat")),
    };
    spec.env_remove(PLATFORM_ENV_VAR)
  }
}

/// One MSBuild run.
#[derive(Debug, Clone, Default)]
pub struct BuildRequest {
  /// Project or solution file.
  pub project: PathBuf,
  /// Where to keep the make-style dependency rule; enables dependency tracking.
  pub depfile: Option<PathBuf>,
  /// Target of the dependency rule. Required with `depfile`.
  pub stamp: Option<PathBuf>,
  pub targets: Vec<String>,
  /// Passed to MSBuild verbatim after the targets.
  pub msbuild_args: Vec<OsString>,
}

/// Outcome of a run that started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildResult {
  pub tool: ToolKind,
  /// MSBuild's own exit code; 0 is success.
  pub exit_code: i32,
  /// Present only when dependency tracking was requested and the build succeeded.
  pub deplist: Option<DependencyList>,
}

impl BuildResult {
  pub fn success(&self) -> bool {
    self.exit_code == 0
  }
}
