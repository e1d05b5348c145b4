//! Test utilities for csglue-lib.
//!
//! Fixture implementations of [`Environment`] and [`CommandRunner`], plus
//! cross-platform helpers for tests that spawn real shell commands.

use std::cell::RefCell;
use std::collections::HashMap;
use std::ffi::OsString;
use std::io;
use std::path::Path;

use crate::consts::DEPLIST_PROPERTY;
use crate::exec::{CommandOutput, CommandRunner, CommandSpec};
use crate::platform::{Environment, Os, RegistryView};

/// Returns the shell command and args to echo an environment variable.
#[cfg(unix)]
pub fn shell_echo_env(var: &str) -> (&'static str, Vec<String>) {
  ("/bin/sh", vec!["-c".to_string(), format!("echo \"${}\"", var)])
}

#[cfg(windows)]
pub fn shell_echo_env(var: &str) -> (&'static str, Vec<String>) {
  ("cmd.exe", vec!["/C".to_string(), format!("echo %{}%", var)])
}

/// Returns the shell command and args to execute a shell script.
#[cfg(unix)]
pub fn shell_cmd(script: &str) -> (&'static str, Vec<String>) {
  ("/bin/sh", vec!["-c".to_string(), script.to_string()])
}

#[cfg(windows)]
pub fn shell_cmd(script: &str) -> (&'static str, Vec<String>) {
  ("cmd.exe", vec!["/C".to_string(), script.to_string()])
}

/// An [`Environment`] backed by in-memory tables.
#[derive(Debug, Clone)]
pub struct FixtureEnvironment {
  os: Os,
  vars: HashMap<String, OsString>,
  registry: HashMap<(String, String, RegistryView), String>,
}

impl FixtureEnvironment {
  pub fn new(os: Os) -> Self {
    Self {
      os,
      vars: HashMap::new(),
      registry: HashMap::new(),
    }
  }

  pub fn with_var(mut self, name: &str, value: impl Into<OsString>) -> Self {
    self.vars.insert(name.to_string(), value.into());
    self
  }

  /// Sets `PATH` to the given directories joined with the OS separator.
  pub fn with_path_dirs<P: AsRef<Path>>(self, dirs: &[P]) -> Self {
    let separator = self.os.path_list_separator().to_string();
    let joined = dirs
      .iter()
      .map(|d| d.as_ref().to_string_lossy().into_owned())
      .collect::<Vec<_>>()
      .join(&separator);
    self.with_var("PATH", joined)
  }

  pub fn with_registry(mut self, subkey: &str, value: &str, view: RegistryView, data: &str) -> Self {
    self
      .registry
      .insert((subkey.to_string(), value.to_string(), view), data.to_string());
    self
  }
}

impl Environment for FixtureEnvironment {
  fn os(&self) -> Os {
    self.os
  }

  fn var(&self, name: &str) -> Option<OsString> {
    self.vars.get(name).cloned()
  }

  fn registry_string(&self, subkey: &str, value: &str, view: RegistryView) -> Option<String> {
    self
      .registry
      .get(&(subkey.to_string(), value.to_string(), view))
      .cloned()
  }
}

/// How [`RecordingRunner::output`] responds.
#[derive(Debug, Clone)]
pub enum FakeOutput {
  Stdout { code: i32, stdout: String },
  /// The program could not be started.
  NotFound,
}

/// A [`CommandRunner`] that records every command instead of running it.
///
/// `status` optionally writes a dependency list to the path passed through the
/// `/p:MesonDepListPath=` argument, the way the MSBuild target does.
#[derive(Debug)]
pub struct RecordingRunner {
  pub calls: RefCell<Vec<CommandSpec>>,
  status: i32,
  deplist: Option<String>,
  output: FakeOutput,
}

impl RecordingRunner {
  pub fn exiting_with(status: i32) -> Self {
    Self {
      calls: RefCell::new(Vec::new()),
      status,
      deplist: None,
      output: FakeOutput::NotFound,
    }
  }

  pub fn writing_deplist(mut self, content: &str) -> Self {
    self.deplist = Some(content.to_string());
    self
  }

  pub fn with_output(mut self, output: FakeOutput) -> Self {
    self.output = output;
    self
  }

  pub fn last_call(&self) -> Option<CommandSpec> {
    self.calls.borrow().last().cloned()
  }

  pub fn call_count(&self) -> usize {
    self.calls.borrow().len()
  }
}

impl CommandRunner for RecordingRunner {
  async fn status(&self, spec: &CommandSpec) -> io::Result<i32> {
    self.calls.borrow_mut().push(spec.clone());

    if let Some(content) = &self.deplist {
      let prefix = format!("/p:{}=", DEPLIST_PROPERTY);
      let target = spec
        .args
        .iter()
        .filter_map(|arg| arg.to_str())
        .find_map(|arg| arg.strip_prefix(&prefix));
      if let Some(path) = target {
        std::fs::write(path, content)?;
      }
    }

    Ok(self.status)
  }

  async fn output(&self, spec: &CommandSpec) -> io::Result<CommandOutput> {
    self.calls.borrow_mut().push(spec.clone());

    match &self.output {
      FakeOutput::Stdout { code, stdout } => Ok(CommandOutput {
        code: *code,
        stdout: stdout.clone(),
      }),
      FakeOutput::NotFound => Err(io::Error::new(io::ErrorKind::NotFound, "program not found")),
    }
  }
}
