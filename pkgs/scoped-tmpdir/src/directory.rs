use crate::error::{Error, Result};
use crate::filesystem::{Filesystem, StdFilesystem};
use crate::name::NameHint;
use log::{debug, warn};
use std::mem;
use std::ops::Deref;
use std::path::{Path, PathBuf};

/// A uniquely named directory that is removed, with everything in it, when
/// the handle is dropped.
///
/// The handle is move-only. Moving it into another binding transfers the
/// directory; assigning over a handle that owns a directory removes that
/// directory first. Use [`ScopedDir::take`] (or `std::mem::take`) to move out
/// of a `&mut` and leave an unowned handle behind.
///
/// Handles cannot be duplicated:
///
/// ```compile_fail
/// let dir = scoped_tmpdir::ScopedDir::new("copy")?;
/// let twin = dir.clone();
/// # Ok::<(), scoped_tmpdir::Error>(())
/// ```
#[derive(Debug)]
pub struct ScopedDir<F: Filesystem = StdFilesystem> {
    path: PathBuf,
    owned: bool,
    fs: F,
}

impl ScopedDir {
    /// Create a directory under the system temp dir.
    ///
    /// `hint` is an optional relative path: its last component prefixes the
    /// directory name, any components before it are subdirectories of the
    /// temp dir that get created if missing. An empty hint uses
    /// [`DEFAULT_PREFIX`](crate::DEFAULT_PREFIX).
    ///
    /// ```no_run
    /// let dir = scoped_tmpdir::ScopedDir::new("build")?;
    /// std::fs::write(dir.join("out.txt"), "done")?;
    /// // `dir` and `out.txt` are removed here
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new(hint: &str) -> Result<Self> {
        Self::with_filesystem(StdFilesystem::new(), hint)
    }

    /// Like [`ScopedDir::new`], but under `root` instead of the system temp dir.
    pub fn new_in(root: impl Into<PathBuf>, hint: &str) -> Result<Self> {
        Self::with_filesystem(StdFilesystem::rooted_at(root), hint)
    }
}

impl<F: Filesystem> ScopedDir<F> {
    /// Create a directory under `fs.temp_root()` using `fs` for every
    /// filesystem operation, including the final removal.
    pub fn with_filesystem(fs: F, hint: &str) -> Result<Self> {
        let hint = NameHint::parse(hint)?;

        let mut parent = fs.temp_root();
        parent.extend(hint.parent());
        if let Err(source) = fs.create_dir_all(&parent) {
            return Err(Error::Creation {
                path: parent,
                source,
            });
        }

        // create_dir, not create_dir_all: never adopt a directory that already exists
        let path = parent.join(hint.unique_name());
        if let Err(source) = fs.create_dir(&path) {
            return Err(Error::Creation { path, source });
        }

        debug!("created temporary directory {}", path.display());
        Ok(Self {
            path,
            owned: true,
            fs,
        })
    }

    /// The owned directory, or an empty path once ownership is gone.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_owned(&self) -> bool {
        self.owned
    }

    /// Give up ownership without removing the directory.
    ///
    /// Returns the path, which the caller is now responsible for. Returns an
    /// empty path if the handle owned nothing.
    pub fn release(&mut self) -> PathBuf {
        self.owned = false;
        mem::take(&mut self.path)
    }

    /// Move the directory out into a new handle, leaving this one unowned
    /// with an empty path.
    pub fn take(&mut self) -> Self
    where
        F: Clone,
    {
        Self {
            path: mem::take(&mut self.path),
            owned: mem::replace(&mut self.owned, false),
            fs: self.fs.clone(),
        }
    }

    /// Remove the directory now and report failure instead of only logging it.
    pub fn close(mut self) -> Result<()> {
        self.remove()
    }

    fn remove(&mut self) -> Result<()> {
        if !self.owned {
            return Ok(());
        }
        self.owned = false;
        let path = mem::take(&mut self.path);
        match self.fs.remove_dir_all(&path) {
            Ok(()) => {
                debug!("removed temporary directory {}", path.display());
                Ok(())
            }
            Err(source) => Err(Error::Removal { path, source }),
        }
    }
}

impl<F: Filesystem> Drop for ScopedDir<F> {
    fn drop(&mut self) {
        // Best-effort cleanup; log errors so Drop never panics
        if let Err(err) = self.remove() {
            warn!("{err}");
        }
    }
}

impl<F: Filesystem + Default> Default for ScopedDir<F> {
    /// An unowned handle with an empty path. Dropping it does nothing.
    fn default() -> Self {
        Self {
            path: PathBuf::new(),
            owned: false,
            fs: F::default(),
        }
    }
}

impl<F: Filesystem> Deref for ScopedDir<F> {
    type Target = Path;

    fn deref(&self) -> &Path {
        &self.path
    }
}

impl<F: Filesystem> AsRef<Path> for ScopedDir<F> {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}
