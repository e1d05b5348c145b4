//! Implementation of the `csglue find-mono-root` command.

use anyhow::Result;
use clap::ValueEnum;

use csglue_lib::locate::find_mono_root_dir;
use csglue_lib::platform::{RegistryView, SystemEnvironment};

use super::{EXIT_FAILURE, EXIT_SUCCESS};
use crate::output::print_warning;

/// CPU family of the Mono installation being looked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CpuFamily {
  #[value(name = "x86")]
  X86,
  #[value(name = "x86_64")]
  X86_64,
}

impl CpuFamily {
  fn registry_view(self) -> RegistryView {
    match self {
      CpuFamily::X86 => RegistryView::Bits32,
      CpuFamily::X86_64 => RegistryView::Bits64,
    }
  }
}

/// Prints the Mono SDK install root recorded in the Windows registry.
pub fn cmd_find_mono_root(cpu_family: CpuFamily) -> Result<i32> {
  match find_mono_root_dir(&SystemEnvironment, cpu_family.registry_view()) {
    Some(root) => {
      println!("{}", root.display());
      Ok(EXIT_SUCCESS)
    }
    None => {
      print_warning(&format!(
        "No {} Mono installation found in the registry",
        cpu_family.registry_view()
      ));
      Ok(EXIT_FAILURE)
    }
  }
}
