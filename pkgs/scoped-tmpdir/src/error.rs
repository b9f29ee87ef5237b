use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to create temporary directory {}: {source}", .path.display())]
    Creation {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid directory prefix `{0}`: must be a relative path without `..` components")]
    InvalidPrefix(String),
    #[error("failed to remove temporary directory {}: {source}", .path.display())]
    Removal {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// The directory the failed operation was working on, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Error::Creation { path, .. } | Error::Removal { path, .. } => Some(path),
            Error::InvalidPrefix(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
