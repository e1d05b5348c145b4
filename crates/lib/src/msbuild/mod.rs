//! MSBuild invocation with optional dependency tracking.
//!
//! When a depfile is requested, an extra target makes MSBuild write the list of
//! files the build read; after a successful build that list becomes a make-style
//! rule so the surrounding build system knows when to run MSBuild again.

mod types;

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::consts::{DEPLIST_PROPERTY, DEPLIST_SUFFIX, DEPLIST_TARGET};
use crate::deps::{DependencyList, write_rule_if_changed};
use crate::exec::CommandRunner;

pub use types::{BuildRequest, BuildResult, MsbuildError, SelectedTool, ToolSet};

/// Path MSBuild writes the dependency list to: the absolute depfile path plus `.list.txt`.
pub fn deplist_path(depfile: &Path) -> Result<PathBuf, MsbuildError> {
  let absolute = std::path::absolute(depfile).map_err(|source| MsbuildError::ResolvePath {
    path: depfile.to_path_buf(),
    source,
  })?;
  let mut path = absolute.into_os_string();
  path.push(DEPLIST_SUFFIX);
  Ok(PathBuf::from(path))
}

fn remove_stale_list(path: &Path) -> Result<(), MsbuildError> {
  match std::fs::remove_file(path) {
    Ok(()) => {
      debug!(path = %path.display(), "removed stale dependency list");
      Ok(())
    }
    Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
    Err(source) => Err(MsbuildError::RemoveStaleList {
      path: path.to_path_buf(),
      source,
    }),
  }
}

/// Runs MSBuild for `request` with the preferred tool from `tools`.
///
/// Fails before spawning anything if no tool is set. A build that runs is reported
/// through [`BuildResult::exit_code`]; the dependency rule is only refreshed when
/// it succeeded.
pub async fn run_msbuild<R: CommandRunner>(
  runner: &R,
  tools: &ToolSet,
  request: &BuildRequest,
) -> Result<BuildResult, MsbuildError> {
  let tool = tools.select()?;

  let mut targets = request.targets.clone();
  let mut msbuild_args = request.msbuild_args.clone();

  let tracking = match &request.depfile {
    Some(depfile) => {
      let stamp = request.stamp.as_deref().ok_or(MsbuildError::MissingStamp)?;
      let list_path = deplist_path(depfile)?;

      targets.push(DEPLIST_TARGET.to_string());
      let mut property = OsString::from(format!("/p:{}=", DEPLIST_PROPERTY));
      property.push(&list_path);
      msbuild_args.push(property);

      remove_stale_list(&list_path)?;
      Some((depfile.as_path(), stamp, list_path))
    }
    None => None,
  };

  let mut spec = tool.base_command().arg(&request.project);
  if !targets.is_empty() {
    spec = spec.arg(format!("/t:{}", targets.join(",")));
  }
  spec = spec.args(msbuild_args);

  info!(tool = %tool.kind(), "Running MSBuild: {}", spec.display_line());

  let exit_code = runner.status(&spec).await.map_err(|source| MsbuildError::Spawn {
    program: spec.program.clone(),
    source,
  })?;
  debug!(exit_code, "MSBuild exited");

  let deplist = match tracking {
    Some((depfile, stamp, list_path)) if exit_code == 0 => {
      let deps = DependencyList::read(&list_path)?;
      write_rule_if_changed(depfile, &stamp.to_string_lossy(), &deps)?;
      Some(deps)
    }
    _ => None,
  };

  Ok(BuildResult {
    tool: tool.kind(),
    exit_code,
    deplist,
  })
}
