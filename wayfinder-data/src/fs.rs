//! Capability-based file access on UTF-8 paths.

use std::io;

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};

/// Open `path` for reading using ambient authority.
///
/// # Errors
/// Returns the IO error raised while opening the file.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Whether `path` exists and is a regular file.
///
/// # Errors
/// Returns the IO error raised while inspecting the path, including
/// [`io::ErrorKind::NotFound`] when it does not exist.
pub fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::other("path should include a file name"))?;
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    dir.metadata(name).map(|meta| meta.is_file())
}
