mod cmd;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cmd::{
  CpuFamily, MsbuildArgs, ToolArg, cmd_copy_file, cmd_find_mono_root, cmd_find_tool, cmd_glue_version,
  cmd_list_assemblies, cmd_print_env, cmd_print_file, cmd_run_msbuild,
};
use output::{OutputFormat, print_error};

/// Build glue for C# projects: locates .NET/Mono tooling and drives MSBuild
#[derive(Parser)]
#[command(name = "csglue")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Locate a build tool and print its path
  FindTool {
    /// Which tool to look for
    #[arg(value_enum)]
    tool: ToolArg,

    /// Mono installation prefix (required for msbuild-mono)
    #[arg(long)]
    mono_prefix: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    output: OutputFormat,
  },

  /// Print the Mono install root recorded in the Windows registry (exits 1 when none is recorded)
  FindMonoRoot {
    /// CPU family of the target, selecting the registry view
    #[arg(value_enum)]
    cpu_family: CpuFamily,
  },

  /// Run MSBuild and keep a dependency file up to date
  RunMsbuild(MsbuildArgs),

  /// Run MSBuild on the glue project and write the glue version header
  GlueVersion(MsbuildArgs),

  /// Copy a file, creating the destination directory when missing
  CopyFile {
    /// Source file
    src: PathBuf,

    /// Destination file or directory
    dst: PathBuf,

    /// Stamp file to touch after copying
    #[arg(long)]
    stamp: Option<PathBuf>,
  },

  /// Print the value of an environment variable
  PrintEnv {
    /// Variable name
    name: String,
  },

  /// Print the contents of a file
  PrintFile {
    /// File to print
    path: PathBuf,
  },

  /// List the assemblies (*.dll) in a directory
  ListAssemblies {
    /// Directory to scan
    dir: PathBuf,
  },
}

fn main() {
  let cli = Cli::parse();

  let default_filter = if cli.verbose {
    "warn,csglue_lib=debug,csglue=debug"
  } else {
    "warn,csglue_lib=info,csglue=info"
  };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  let result = match cli.command {
    Commands::FindTool {
      tool,
      mono_prefix,
      output,
    } => cmd_find_tool(tool, mono_prefix, output),
    Commands::FindMonoRoot { cpu_family } => cmd_find_mono_root(cpu_family),
    Commands::RunMsbuild(args) => cmd_run_msbuild(&args),
    Commands::GlueVersion(args) => cmd_glue_version(&args),
    Commands::CopyFile { src, dst, stamp } => cmd_copy_file(&src, &dst, stamp.as_deref()),
    Commands::PrintEnv { name } => cmd_print_env(&name),
    Commands::PrintFile { path } => cmd_print_file(&path),
    Commands::ListAssemblies { dir } => cmd_list_assemblies(&dir),
  };

  let code = match result {
    Ok(code) => code,
    Err(err) => {
      print_error(&format!("{:#}", err));
      cmd::EXIT_FAILURE
    }
  };

  std::process::exit(code);
}
