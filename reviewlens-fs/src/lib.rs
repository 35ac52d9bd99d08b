//! Filesystem helpers for reading review batches and writing analysis
//! artefacts, built on `cap-std` and `camino`.
#![forbid(unsafe_code)]

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};
use std::io;
use std::path::Component;

/// Open `path` for reading using ambient authority.
///
/// # Errors
/// Propagates the I/O error when the file cannot be opened.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Report whether `path` exists and is a regular file.
///
/// # Errors
/// Returns the I/O error raised while inspecting the path; a missing path
/// surfaces as [`io::ErrorKind::NotFound`].
pub fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let (dir, name) = parent_dir_and_name(path)?;
    dir.metadata(name.as_str()).map(|meta| meta.is_file())
}

/// Write `contents` to `path`, creating missing parent directories and
/// replacing any existing file.
///
/// # Errors
/// Returns the I/O error raised while creating directories or writing.
pub fn write_utf8_file(path: &Utf8Path, contents: &[u8]) -> io::Result<()> {
    ensure_parent_dir(path)?;
    let (dir, name) = parent_dir_and_name(path)?;
    dir.write(name.as_str(), contents)
}

/// Move `from` to `to`, replacing any existing file at `to`.
///
/// Both paths must lie on the same filesystem for the move to be atomic.
///
/// # Errors
/// Returns the I/O error raised while opening either parent or renaming.
pub fn rename_utf8_file(from: &Utf8Path, to: &Utf8Path) -> io::Result<()> {
    let (from_dir, from_name) = parent_dir_and_name(from)?;
    let (to_dir, to_name) = parent_dir_and_name(to)?;
    from_dir.rename(from_name.as_str(), &to_dir, to_name.as_str())
}

/// Delete the file at `path`.
///
/// # Errors
/// Returns the I/O error raised while removing the file.
pub fn remove_utf8_file(path: &Utf8Path) -> io::Result<()> {
    let (dir, name) = parent_dir_and_name(path)?;
    dir.remove_file(name.as_str())
}

/// Create the parent directory of `path` and any missing ancestors.
///
/// # Errors
/// Returns the I/O error raised while creating directories.
pub fn ensure_parent_dir(path: &Utf8Path) -> io::Result<()> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    if parent.as_str().is_empty() {
        return Ok(());
    }
    let (base, relative) = ambient_base(parent)?;
    if relative.as_str().is_empty() {
        return Ok(());
    }
    base.create_dir_all(&relative)
}

fn parent_dir_and_name(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, String)> {
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::other(format!("{path} does not name a file")))?
        .to_owned();
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, name))
}

/// Split `path` into an ambient root directory and the path relative to it.
///
/// Absolute paths resolve against the filesystem root (or the drive prefix on
/// Windows); relative paths against the current directory.
fn ambient_base(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, Utf8PathBuf)> {
    let std_path = path.as_std_path();
    let root = match std_path.components().next() {
        Some(Component::Prefix(prefix)) => {
            let prefix = prefix
                .as_os_str()
                .to_str()
                .ok_or_else(|| io::Error::other("non-UTF-8 path prefix"))?;
            Some(Utf8PathBuf::from(format!("{prefix}{}", std::path::MAIN_SEPARATOR)))
        }
        Some(Component::RootDir) => Some(Utf8PathBuf::from(std::path::MAIN_SEPARATOR.to_string())),
        _ => None,
    };

    let (base, relative) = match root {
        Some(root) => {
            let relative = path
                .strip_prefix(&root)
                .map_err(|_| io::Error::other(format!("failed to strip {root} from {path}")))?
                .to_path_buf();
            (root, relative)
        }
        None => (Utf8PathBuf::from("."), path.to_path_buf()),
    };

    let dir = fs_utf8::Dir::open_ambient_dir(&base, ambient_authority())?;
    Ok((dir, relative))
}
