mod copy_file;
mod find_mono_root;
mod find_tool;
mod glue_version;
mod list_assemblies;
mod print_env;
mod print_file;
mod run_msbuild;

pub use copy_file::cmd_copy_file;
pub use find_mono_root::{CpuFamily, cmd_find_mono_root};
pub use find_tool::{ToolArg, cmd_find_tool};
pub use glue_version::cmd_glue_version;
pub use list_assemblies::cmd_list_assemblies;
pub use print_env::cmd_print_env;
pub use print_file::cmd_print_file;
pub use run_msbuild::{MsbuildArgs, cmd_run_msbuild};

/// Process exit code for success.
pub const EXIT_SUCCESS: i32 = 0;

/// Process exit code when a tool or value could not be found, or a command failed
/// before producing a result of its own.
pub const EXIT_FAILURE: i32 = 1;

/// Builds the single-threaded runtime the async library calls are driven on.
fn runtime() -> anyhow::Result<tokio::runtime::Runtime> {
  use anyhow::Context;

  tokio::runtime::Builder::new_current_thread()
    .enable_all()
    .build()
    .context("Failed to create async runtime")
}
