use crate::error::{Error, Result};
use std::ffi::{OsStr, OsString};
use std::path::{Component, Path, PathBuf};
use uuid::Uuid;

/// Prefix used when the caller gives no hint.
pub const DEFAULT_PREFIX: &str = "tmp";

/// A parsed name hint: the subdirectories to place the directory in, and the
/// prefix of the directory name itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NameHint {
    parent: PathBuf,
    prefix: OsString,
}

impl NameHint {
    /// Parse a caller hint such as `"build"` or `"myapp/cache"`.
    ///
    /// The last component becomes the name prefix, everything before it the
    /// parent. A hint ending in a separator names only a parent.
    pub(crate) fn parse(hint: &str) -> Result<Self> {
        let mut parts: Vec<&OsStr> = Vec::new();
        for component in Path::new(hint).components() {
            match component {
                Component::Normal(part) => parts.push(part),
                Component::CurDir => {}
                Component::RootDir | Component::Prefix(_) | Component::ParentDir => {
                    return Err(Error::InvalidPrefix(hint.to_string()));
                }
            }
        }

        let prefix = if hint.ends_with(std::path::is_separator) {
            None
        } else {
            parts.pop()
        };

        Ok(Self {
            parent: parts.into_iter().collect(),
            prefix: prefix
                .map(OsStr::to_os_string)
                .unwrap_or_else(|| OsString::from(DEFAULT_PREFIX)),
        })
    }

    /// Subdirectories (relative to the root) the directory lives in.
    pub(crate) fn parent(&self) -> &Path {
        &self.parent
    }

    /// `<prefix>.<32 hex chars>`; every call draws a fresh v4 UUID.
    pub(crate) fn unique_name(&self) -> OsString {
        let mut name = self.prefix.clone();
        name.push(".");
        name.push(Uuid::new_v4().simple().to_string());
        name
    }
}
