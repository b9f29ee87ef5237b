//! Scoped temporary directories.
//!
//! [`ScopedDir`] creates a uniquely named directory under the system temp dir
//! and removes it, recursively, when the handle goes out of scope. Names are
//! `<prefix>.<random hex>`, so handles created concurrently with the same
//! prefix never collide.
//!
//! ```no_run
//! use scoped_tmpdir::ScopedDir;
//!
//! let workspace = ScopedDir::new("myapp/unpack")?;
//! let archive = workspace.join("archive.tar");
//! assert_eq!(archive.parent(), Some(workspace.path()));
//! # Ok::<(), scoped_tmpdir::Error>(())
//! ```

mod directory;
pub mod error;
pub mod filesystem;
mod name;

pub use directory::ScopedDir;
pub use error::{Error, Result};
pub use filesystem::{Filesystem, StdFilesystem};
pub use name::DEFAULT_PREFIX;
