//! Small filesystem helpers the build invokes directly: copying artifacts,
//! touching stamp files, listing assemblies.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use filetime::FileTime;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum FsError {
  #[error("failed to copy {} to {}: {source}", src.display(), dst.display())]
  Copy {
    src: PathBuf,
    dst: PathBuf,
    source: io::Error,
  },

  #[error("failed to create directory {}: {source}", path.display())]
  CreateDir { path: PathBuf, source: io::Error },

  #[error("failed to touch {}: {source}", path.display())]
  Touch { path: PathBuf, source: io::Error },

  #[error("failed to read directory {}: {source}", path.display())]
  ReadDir { path: PathBuf, source: io::Error },

  #[error("failed to read {}: {source}", path.display())]
  Read { path: PathBuf, source: io::Error },
}

/// Copies `src` to `dst`, keeping permissions and modification time.
///
/// If `dst` is an existing directory the file is copied into it. When the copy
/// fails because the destination's parent directory is missing, the directory is
/// created and the copy retried once. Returns the path written.
pub fn copy_file(src: &Path, dst: &Path) -> Result<PathBuf, FsError> {
  let dst = match src.file_name() {
    Some(name) if dst.is_dir() => dst.join(name),
    _ => dst.to_path_buf(),
  };

  match copy_with_times(src, &dst) {
    Ok(()) => return Ok(dst),
    Err(err) if err.kind() != io::ErrorKind::NotFound => {
      return Err(copy_error(src, &dst, err));
    }
    Err(err) => {
      // Only a missing destination directory is recoverable; a missing source is not.
      let parent = dst.parent().filter(|p| !p.as_os_str().is_empty() && !p.is_dir());
      let Some(parent) = parent else {
        return Err(copy_error(src, &dst, err));
      };
      debug!(dir = %parent.display(), "creating destination directory");
      fs::create_dir_all(parent).map_err(|source| FsError::CreateDir {
        path: parent.to_path_buf(),
        source,
      })?;
    }
  }

  copy_with_times(src, &dst).map_err(|err| copy_error(src, &dst, err))?;
  Ok(dst)
}

fn copy_with_times(src: &Path, dst: &Path) -> io::Result<()> {
  fs::copy(src, dst)?;
  let metadata = fs::metadata(src)?;
  let atime = FileTime::from_last_access_time(&metadata);
  let mtime = FileTime::from_last_modification_time(&metadata);
  filetime::set_file_times(dst, atime, mtime)
}

fn copy_error(src: &Path, dst: &Path, source: io::Error) -> FsError {
  FsError::Copy {
    src: src.to_path_buf(),
    dst: dst.to_path_buf(),
    source,
  }
}

/// Creates `path` if needed (never truncating it) and sets its access and
/// modification times to now.
pub fn touch(path: &Path) -> Result<(), FsError> {
  let touch_error = |source| FsError::Touch {
    path: path.to_path_buf(),
    source,
  };

  OpenOptions::new()
    .create(true)
    .append(true)
    .open(path)
    .map_err(touch_error)?;
  let now = FileTime::now();
  filetime::set_file_times(path, now, now).map_err(touch_error)
}

/// File names of the `*.dll` files directly inside `dir`, sorted.
///
/// Symlinks are followed; dangling ones are skipped along with hidden files and
/// directories. The extension match is case-insensitive on Windows only.
pub fn list_assemblies(dir: &Path) -> Result<Vec<String>, FsError> {
  let read_dir_error = |source| FsError::ReadDir {
    path: dir.to_path_buf(),
    source,
  };

  let mut names = Vec::new();
  for entry in fs::read_dir(dir).map_err(read_dir_error)? {
    let entry = entry.map_err(read_dir_error)?;
    let name = entry.file_name().to_string_lossy().into_owned();
    if name.starts_with('.') || !is_assembly_name(&name) {
      continue;
    }
    // Mono's framework directories are mostly symlinks into the GAC, so follow them.
    match fs::metadata(entry.path()) {
      Ok(metadata) if metadata.is_file() => names.push(name),
      Ok(_) => {}
      Err(err) => debug!(path = %entry.path().display(), error = %err, "skipping unreadable entry"),
    }
  }

  names.sort();
  Ok(names)
}

fn is_assembly_name(name: &str) -> bool {
  let Some((stem, ext)) = name.rsplit_once('.') else {
    return false;
  };
  if stem.is_empty() {
    return false;
  }
  if cfg!(windows) {
    ext.eq_ignore_ascii_case("dll")
  } else {
    ext == "dll"
  }
}

/// Streams the contents of `path` into `out`.
pub fn stream_file(path: &Path, out: &mut impl Write) -> Result<u64, FsError> {
  let read_error = |source| FsError::Read {
    path: path.to_path_buf(),
    source,
  };

  let mut file = fs::File::open(path).map_err(read_error)?;
  io::copy(&mut file, out).map_err(read_error)
}
