//! Filesystem capability used by [`ScopedDir`](crate::ScopedDir).
//!
//! The handle never touches `std::fs` directly; it goes through a
//! [`Filesystem`] so callers can root directories elsewhere or observe the
//! calls made on their behalf.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Port for the directory operations a scoped directory needs.
pub trait Filesystem {
    /// Root under which new temporary directories are created.
    fn temp_root(&self) -> PathBuf;

    /// Create a directory and all missing parents. Existing directories are fine.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Create exactly one new directory. Fails with `AlreadyExists` if present.
    fn create_dir(&self, path: &Path) -> io::Result<()>;

    /// Remove a directory and all its contents. No-op if absent.
    fn remove_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Check whether a file or directory exists.
    fn exists(&self, path: &Path) -> bool;
}

/// [`Filesystem`] backed by `std::fs`.
///
/// Without an explicit root it uses [`std::env::temp_dir`], which honors
/// `TMPDIR` on unix.
#[derive(Debug, Clone, Default)]
pub struct StdFilesystem {
    root: Option<PathBuf>,
}

impl StdFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `root` instead of the system temp directory.
    pub fn rooted_at(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }
}

impl Filesystem for StdFilesystem {
    fn temp_root(&self) -> PathBuf {
        self.root.clone().unwrap_or_else(std::env::temp_dir)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn create_dir(&self, path: &Path) -> io::Result<()> {
        fs::create_dir(path)
    }

    fn remove_dir_all(&self, path: &Path) -> io::Result<()> {
        match fs::remove_dir_all(path) {
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

impl<F: Filesystem + ?Sized> Filesystem for &F {
    fn temp_root(&self) -> PathBuf {
        (**self).temp_root()
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        (**self).create_dir_all(path)
    }

    fn create_dir(&self, path: &Path) -> io::Result<()> {
        (**self).create_dir(path)
    }

    fn remove_dir_all(&self, path: &Path) -> io::Result<()> {
        (**self).remove_dir_all(path)
    }

    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }
}
