use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Filesystem abstraction boundary for the explorer and the path helpers.
///
/// The launcher only ever asks whether a path exists, whether it is a
/// directory and what its absolute form is. Keeping the trait that narrow
/// lets tests pretend any layout exists without touching the disk.
pub trait FileSystem: Send + Sync {
    /// Returns the current time in wall-clock format.
    fn now(&self) -> SystemTime;

    /// Returns true when path exists (symlink-aware).
    fn exists(&self, path: &Path) -> bool;

    /// Returns true when path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Returns the absolute form of `path` without resolving symlinks.
    fn absolute(&self, path: &Path) -> PathBuf;
}

/// Default filesystem implementation backed by `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn absolute(&self, path: &Path) -> PathBuf {
        std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
    }
}
