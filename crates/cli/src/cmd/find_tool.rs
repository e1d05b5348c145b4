//! Implementation of the `csglue find-tool` command.
//!
//! Prints the path of the requested build tool on stdout, or exits with 1 when it
//! cannot be found.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

use csglue_lib::exec::ProcessRunner;
use csglue_lib::locate::{ToolKind, find_tool};
use csglue_lib::platform::SystemEnvironment;

use super::{EXIT_FAILURE, EXIT_SUCCESS, runtime};
use crate::output::{OutputFormat, print_json, print_warning};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ToolArg {
  DotnetCli,
  MsbuildStandalone,
  MsbuildMono,
}

impl From<ToolArg> for ToolKind {
  fn from(arg: ToolArg) -> Self {
    match arg {
      ToolArg::DotnetCli => ToolKind::DotnetCli,
      ToolArg::MsbuildStandalone => ToolKind::MsbuildStandalone,
      ToolArg::MsbuildMono => ToolKind::MsbuildMono,
    }
  }
}

#[derive(Serialize)]
struct ToolReport<'a> {
  tool: ToolKind,
  path: Option<&'a Path>,
}

pub fn cmd_find_tool(tool: ToolArg, mono_prefix: Option<PathBuf>, output: OutputFormat) -> Result<i32> {
  let kind = ToolKind::from(tool);

  let rt = runtime()?;
  let found = rt
    .block_on(find_tool(&SystemEnvironment, &ProcessRunner, kind, mono_prefix.as_deref()))
    .context("Cannot locate build tool")?;

  if output.is_json() {
    print_json(&ToolReport {
      tool: kind,
      path: found.as_deref(),
    })?;
  } else if let Some(path) = &found {
    println!("{}", path.display());
  }

  match found {
    Some(_) => Ok(EXIT_SUCCESS),
    None => {
      if !output.is_json() {
        print_warning(&format!("{} not found", kind));
      }
      Ok(EXIT_FAILURE)
    }
  }
}
