//! Implementation of the `csglue run-msbuild` command.
//!
//! Runs MSBuild on a project, refreshes the dependency rule and touches the stamp
//! file on success. MSBuild's exit code becomes the process exit code.

use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use csglue_lib::exec::ProcessRunner;
use csglue_lib::files::touch;
use csglue_lib::msbuild::{BuildRequest, BuildResult, ToolSet, run_msbuild};

use super::runtime;
use crate::output::{format_duration, print_error};

/// Arguments shared by every command that runs MSBuild.
#[derive(Debug, Clone, Args)]
pub struct MsbuildArgs {
  /// Solution or project file to build
  pub solution: PathBuf,

  /// Path to the dotnet CLI (preferred when set)
  #[arg(long)]
  pub tool_dotnet_cli: Option<PathBuf>,

  /// Path to a standalone MSBuild
  #[arg(long)]
  pub tool_msbuild_standalone: Option<PathBuf>,

  /// Path to Mono's MSBuild
  #[arg(long)]
  pub tool_msbuild_mono: Option<PathBuf>,

  /// Mono's bin directory, holding the compiler wrappers Mono's MSBuild needs
  #[arg(long)]
  pub mono_bin_dir: Option<PathBuf>,

  /// Make-style dependency file to keep up to date
  #[arg(long)]
  pub depfile: PathBuf,

  /// Stamp file touched after a successful build; also the target of the dependency rule
  #[arg(long)]
  pub stamp: PathBuf,

  /// MSBuild targets to build
  #[arg(long, num_args = 1..)]
  pub targets: Vec<String>,

  /// Extra arguments passed to MSBuild verbatim (after `--`)
  #[arg(last = true)]
  pub msbuild_args: Vec<OsString>,
}

impl MsbuildArgs {
  pub fn tool_set(&self) -> ToolSet {
    ToolSet {
      dotnet_cli: self.tool_dotnet_cli.clone(),
      msbuild_standalone: self.tool_msbuild_standalone.clone(),
      msbuild_mono: self.tool_msbuild_mono.clone(),
      mono_bin_dir: self.mono_bin_dir.clone(),
    }
  }

  pub fn request(&self) -> BuildRequest {
    BuildRequest {
      project: self.solution.clone(),
      depfile: Some(self.depfile.clone()),
      stamp: Some(self.stamp.clone()),
      targets: self.targets.clone(),
      msbuild_args: self.msbuild_args.clone(),
    }
  }

  /// Runs MSBuild and reports a failing build on stderr.
  pub fn run(&self) -> Result<BuildResult> {
    let start = Instant::now();

    let rt = runtime()?;
    let result = rt
      .block_on(run_msbuild(&ProcessRunner, &self.tool_set(), &self.request()))
      .context("MSBuild invocation failed")?;

    if result.success() {
      info!(elapsed = %format_duration(start.elapsed()), "MSBuild succeeded");
    } else {
      print_error(&format!("MSBuild failed with exit code {}", result.exit_code));
    }
    Ok(result)
  }
}

pub fn cmd_run_msbuild(args: &MsbuildArgs) -> Result<i32> {
  let result = args.run()?;

  if result.success() {
    touch(&args.stamp).context("Failed to update stamp file")?;
  }

  Ok(result.exit_code)
}
