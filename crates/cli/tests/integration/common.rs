//! Shared test helpers for CLI integration tests.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

/// Stand-in for MSBuild.
///
/// Appends its arguments to `args.log`, one per line, copies `deps.txt` (if present)
/// to the path given in `/p:MesonDepListPath=...` and exits with the code stored in
/// `exit_code` (0 when absent).
const FAKE_MSBUILD: &str = r#"#!/bin/sh
here=$(dirname "$0")
for arg in "$@"; do
  echo "$arg" >> "$here/args.log"
  case "$arg" in
    /p:MesonDepListPath=*)
      list="${arg#/p:MesonDepListPath=}"
      if [ -f "$here/deps.txt" ]; then cp "$here/deps.txt" "$list"; fi
      ;;
  esac
done
if [ -f "$here/exit_code" ]; then exit "$(cat "$here/exit_code")"; fi
exit 0
"#;

/// Isolated test environment.
///
/// Each test gets its own temporary directory holding the fake tool, the project
/// file and every build output.
pub struct TestEnv {
  pub temp: TempDir,
}

impl TestEnv {
  pub fn new() -> Self {
    let temp = TempDir::new().unwrap();
    let env = Self { temp };
    env.write_file("tools/msbuild", FAKE_MSBUILD);
    make_executable(&env.msbuild());
    env.write_file("glue/Glue.csproj", "<Project />\n");
    env
  }

  /// Write a file relative to the temp directory, returning its path.
  pub fn write_file(&self, relative_path: &str, content: &str) -> PathBuf {
    let path = self.path(relative_path);
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, content).unwrap();
    path
  }

  pub fn path(&self, relative_path: &str) -> PathBuf {
    self.temp.path().join(relative_path)
  }

  pub fn msbuild(&self) -> PathBuf {
    self.path("tools/msbuild")
  }

  pub fn project(&self) -> PathBuf {
    self.path("glue/Glue.csproj")
  }

  pub fn depfile(&self) -> PathBuf {
    self.path("glue.d")
  }

  pub fn stamp(&self) -> PathBuf {
    self.path("glue.stamp")
  }

  /// Makes the fake MSBuild report `paths` as the build's dependencies.
  pub fn set_deps(&self, paths: &[&Path]) {
    let lines: Vec<String> = paths.iter().map(|p| format!("{}\n", p.display())).collect();
    self.write_file("tools/deps.txt", &lines.concat());
  }

  /// Makes the fake MSBuild exit with `code`.
  pub fn set_exit_code(&self, code: i32) {
    self.write_file("tools/exit_code", &code.to_string());
  }

  /// Arguments the fake MSBuild received, across all runs.
  pub fn msbuild_args(&self) -> Vec<String> {
    std::fs::read_to_string(self.path("tools/args.log"))
      .unwrap_or_default()
      .lines()
      .map(str::to_string)
      .collect()
  }

  /// A `csglue <subcommand>` invocation wired to the fake MSBuild and this
  /// environment's project, depfile and stamp.
  pub fn msbuild_cmd(&self, subcommand: &str) -> Command {
    let mut cmd: Command = cargo_bin_cmd!("csglue");
    cmd
      .arg(subcommand)
      .arg(self.project())
      .arg("--tool-msbuild-standalone")
      .arg(self.msbuild())
      .arg("--depfile")
      .arg(self.depfile())
      .arg("--stamp")
      .arg(self.stamp());
    cmd
  }
}

fn make_executable(path: &Path) {
  use std::os::unix::fs::PermissionsExt;
  std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).unwrap();
}
