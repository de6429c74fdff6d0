//! Workspace-relative paths
//!
//! A [`NormalizedPath`] is a workspace root or a file below it, kept with
//! forward slashes so `.crew/tools.json` reads the same on every platform.
//! It is turned into a native `PathBuf` only when touching the disk.

use std::path::{Path, PathBuf};

use crate::constants::CrewPath;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedPath {
    inner: String,
}

impl NormalizedPath {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            inner: path.as_ref().to_string_lossy().replace('\\', "/"),
        }
    }

    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Append a segment, normalizing its separators.
    pub fn join(&self, segment: &str) -> Self {
        let segment = segment.replace('\\', "/");
        let base = self.inner.trim_end_matches('/');
        Self {
            inner: format!("{base}/{}", segment.trim_start_matches('/')),
        }
    }

    /// The `.crew` directory when `self` is a workspace root.
    pub fn crew_dir(&self) -> Self {
        self.join(CrewPath::CrewDir.as_str())
    }

    /// A file stored directly in the `.crew` directory.
    pub fn crew_file(&self, name: &str) -> Self {
        self.crew_dir().join(name)
    }

    /// Lower-cased extension of the last segment, used to pick a format.
    pub fn extension(&self) -> Option<String> {
        let name = self.inner.rsplit('/').next()?;
        match name.rfind('.') {
            Some(idx) if idx > 0 => Some(name[idx + 1..].to_ascii_lowercase()),
            _ => None,
        }
    }

    pub fn exists(&self) -> bool {
        self.to_native().exists()
    }
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.inner)
    }
}

impl From<&str> for NormalizedPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<PathBuf> for NormalizedPath {
    fn from(p: PathBuf) -> Self {
        Self::new(p)
    }
}

impl From<&Path> for NormalizedPath {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}
