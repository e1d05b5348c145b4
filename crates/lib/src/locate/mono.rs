//! Mono's MSBuild and the Mono SDK prefix.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::path_search::{search_hint_dirs, search_path};
use crate::platform::{Environment, Os, RegistryView};

const MSBUILD_SUFFIXES: &[&str] = &["", ".exe"];

/// Framework install locations checked before `PATH` on macOS.
pub const MACOS_HINT_DIRS: &[&str] = &[
  "/Library/Frameworks/Mono.framework/Versions/Current/bin",
  "/usr/local/var/homebrew/linked/mono/bin",
];

const MONO_KEY: &str = r"SOFTWARE\Mono";
const NOVELL_MONO_KEY: &str = r"SOFTWARE\Novell\Mono";

/// Locates Mono's MSBuild.
///
/// On Windows this is `<mono_prefix>\bin\msbuild.bat`. Elsewhere the prefix is not
/// consulted: the macOS framework directories are checked, then `PATH`.
pub fn find_msbuild_mono<E: Environment>(env: &E, mono_prefix: &Path) -> Option<PathBuf> {
  match env.os() {
    Os::Windows => find_msbuild_mono_windows(mono_prefix),
    os => {
      let hints: &[&str] = if os == Os::MacOs { MACOS_HINT_DIRS } else { &[] };
      find_msbuild_mono_unix(env, hints)
    }
  }
}

fn find_msbuild_mono_windows(mono_prefix: &Path) -> Option<PathBuf> {
  let candidate = mono_prefix.join("bin").join("msbuild.bat");
  debug!(candidate = %candidate.display(), "probing Mono MSBuild");
  candidate.is_file().then_some(candidate)
}

fn find_msbuild_mono_unix<E: Environment, P: AsRef<Path>>(env: &E, hint_dirs: &[P]) -> Option<PathBuf> {
  search_hint_dirs(hint_dirs, "msbuild", MSBUILD_SUFFIXES).or_else(|| search_path(env, "msbuild", MSBUILD_SUFFIXES))
}

/// Reads the Mono SDK install root from the registry.
///
/// Checks `SOFTWARE\Mono\SdkInstallRoot` first, then the older Novell layout where
/// `SOFTWARE\Novell\Mono\DefaultCLR` names the subkey holding `SdkInstallRoot`.
pub fn find_mono_root_dir<E: Environment>(env: &E, view: RegistryView) -> Option<PathBuf> {
  if let Some(root) = env.registry_string(MONO_KEY, "SdkInstallRoot", view) {
    return Some(PathBuf::from(root));
  }

  let default_clr = env
    .registry_string(NOVELL_MONO_KEY, "DefaultCLR", view)
    .filter(|clr| !clr.is_empty())?;
  let subkey = format!(r"{}\{}", NOVELL_MONO_KEY, default_clr);
  env.registry_string(&subkey, "SdkInstallRoot", view).map(PathBuf::from)
}
