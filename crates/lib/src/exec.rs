//! External command execution.
//!
//! Build tools and `vswhere` are run through [`CommandRunner`] so callers can be
//! exercised without spawning real processes.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::io;
use std::path::PathBuf;
use std::process::{ExitStatus, Stdio};

use tokio::process::Command;
use tracing::{debug, warn};

/// Exit code reported when the child terminated without one (killed by a signal).
pub const NO_EXIT_CODE: i32 = 1;

/// A fully described command invocation.
///
/// The child inherits the parent environment, minus `env_remove`, plus `env_set`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
  pub program: PathBuf,
  pub args: Vec<OsString>,
  pub env_remove: Vec<String>,
  pub env_set: BTreeMap<String, OsString>,
}

impl CommandSpec {
  pub fn new(program: impl Into<PathBuf>) -> Self {
    Self {
      program: program.into(),
      args: Vec::new(),
      env_remove: Vec::new(),
      env_set: BTreeMap::new(),
    }
  }

  pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
    self.args.push(arg.into());
    self
  }

  pub fn args<I, S>(mut self, args: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
  {
    self.args.extend(args.into_iter().map(Into::into));
    self
  }

  pub fn env_remove(mut self, name: impl Into<String>) -> Self {
    self.env_remove.push(name.into());
    self
  }

  pub fn env(mut self, name: impl Into<String>, value: impl Into<OsString>) -> Self {
    self.env_set.insert(name.into(), value.into());
    self
  }

  /// The command line as a single POSIX-shell-quoted string, for logs.
  pub fn display_line(&self) -> String {
    std::iter::once(self.program.as_os_str())
      .chain(self.args.iter().map(OsString::as_os_str))
      .map(|part| shell_quote(&part.to_string_lossy()))
      .collect::<Vec<_>>()
      .join(" ")
  }

  fn to_command(&self) -> Command {
    let mut command = Command::new(&self.program);
    command.args(&self.args);
    for name in &self.env_remove {
      command.env_remove(name);
    }
    command.envs(&self.env_set);
    command
  }
}

fn shell_quote(part: &str) -> String {
  let safe = !part.is_empty()
    && part
      .chars()
      .all(|c| c.is_ascii_alphanumeric() || "@%+=:,./_-".contains(c));
  if safe {
    part.to_string()
  } else {
    format!("'{}'", part.replace('\'', r#"'"'"'"#))
  }
}

/// Captured result of a command run with [`CommandRunner::output`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
  pub code: i32,
  pub stdout: String,
}

impl CommandOutput {
  pub fn success(&self) -> bool {
    self.code == 0
  }
}

/// Runs external commands.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
  /// Runs the command with inherited stdio and returns its exit code.
  ///
  /// Only failures to start the process are errors.
  async fn status(&self, spec: &CommandSpec) -> io::Result<i32>;

  /// Runs the command capturing stdout (stderr is discarded).
  async fn output(&self, spec: &CommandSpec) -> io::Result<CommandOutput>;
}

/// Spawns real child processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
  async fn status(&self, spec: &CommandSpec) -> io::Result<i32> {
    debug!(program = %spec.program.display(), args = ?spec.args, "spawning process");
    let status = spec.to_command().status().await?;
    Ok(exit_code(status))
  }

  async fn output(&self, spec: &CommandSpec) -> io::Result<CommandOutput> {
    debug!(program = %spec.program.display(), args = ?spec.args, "spawning process");
    let output = spec
      .to_command()
      .stdin(Stdio::null())
      .stderr(Stdio::null())
      .output()
      .await?;

    Ok(CommandOutput {
      code: exit_code(output.status),
      stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
    })
  }
}

fn exit_code(status: ExitStatus) -> i32 {
  match status.code() {
    Some(code) => code,
    None => {
      warn!(%status, "process terminated without an exit code");
      NO_EXIT_CODE
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::util::testutil::{shell_cmd, shell_echo_env};

  fn spec_from((program, args): (&str, Vec<String>)) -> CommandSpec {
    CommandSpec::new(program).args(args)
  }

  #[test]
  fn display_line_quotes_unsafe_parts() {
    let spec = CommandSpec::new("/usr/bin/dotnet")
      .arg("msbuild")
      .arg("My Project.sln")
      .arg("/t:Build,WriteMesonDepList")
      .arg("it's");

    assert_eq!(
      spec.display_line(),
      r#"/usr/bin/dotnet msbuild 'My Project.sln' /t:Build,WriteMesonDepList 'it'"'"'s'"#
    );
  }

  #[test]
  fn display_line_quotes_empty_args() {
    let spec = CommandSpec::new("tool").arg("");
    assert_eq!(spec.display_line(), "tool ''");
  }

  #[tokio::test]
  async fn status_reports_exit_code() {
    let code = ProcessRunner.status(&spec_from(shell_cmd("exit 3"))).await.unwrap();
    assert_eq!(code, 3);
  }

  #[tokio::test]
  async fn output_captures_stdout() {
    let output = ProcessRunner
      .output(&spec_from(shell_echo_env("CSGLUE_EXEC_TEST")).env("CSGLUE_EXEC_TEST", "hello"))
      .await
      .unwrap();

    assert!(output.success());
    assert_eq!(output.stdout.trim(), "hello");
  }

  #[tokio::test]
  #[cfg(unix)]
  async fn removed_variables_are_not_inherited() {
    let spec = spec_from(shell_cmd("echo \"[${HOME:-unset}]\"")).env_remove("HOME");
    let output = ProcessRunner.output(&spec).await.unwrap();
    assert_eq!(output.stdout.trim(), "[unset]");
  }

  #[tokio::test]
  async fn missing_program_is_an_io_error() {
    let spec = CommandSpec::new("/definitely/not/a/real/program");
    let err = ProcessRunner.status(&spec).await.unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::NotFound);
  }
}
