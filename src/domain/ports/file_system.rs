//! FileSystem port - abstraction over file I/O operations
//!
//! The realization engine reads templates and writes artifacts only through
//! this trait, so it can run against the local disk or an in-memory tree.

use std::path::{Path, PathBuf};

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug, thiserror::Error)]
pub enum FsError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Content that cannot be handled as requested (e.g. a non UTF-8 template)
    #[error("{0}")]
    Other(String),
}

impl FsError {
    /// Classify an I/O error raised while touching `path`
    pub fn from_io(path: &Path, err: std::io::Error) -> Self {
        let path = path.to_path_buf();
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path),
            _ => FsError::Io { path, source: err },
        }
    }
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O with atomic writes
pub trait FileSystem {
    /// Read file content as string
    fn read(&self, path: &Path) -> FsResult<String>;

    /// Read file content as raw bytes
    fn read_bytes(&self, path: &Path) -> FsResult<Vec<u8>>;

    /// Write content to file, creating parent directories
    fn write(&self, path: &Path, content: &[u8]) -> FsResult<()>;

    /// Check if a file or directory exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if the path is a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Create directory and parents
    fn create_dir_all(&self, path: &Path) -> FsResult<()>;

    /// Direct children of a directory, sorted by path
    fn list_dir(&self, path: &Path) -> FsResult<Vec<PathBuf>>;

    /// Every file below `root`, relative to it, sorted
    fn walk_files(&self, root: &Path) -> FsResult<Vec<PathBuf>> {
        let mut files = Vec::new();
        let mut pending = vec![root.to_path_buf()];
        while let Some(dir) = pending.pop() {
            for entry in self.list_dir(&dir)? {
                if self.is_dir(&entry) {
                    pending.push(entry);
                } else if let Ok(relative) = entry.strip_prefix(root) {
                    files.push(relative.to_path_buf());
                }
            }
        }
        files.sort();
        Ok(files)
    }
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn read(&self, path: &Path) -> FsResult<String> {
        (**self).read(path)
    }

    fn read_bytes(&self, path: &Path) -> FsResult<Vec<u8>> {
        (**self).read_bytes(path)
    }

    fn write(&self, path: &Path, content: &[u8]) -> FsResult<()> {
        (**self).write(path, content)
    }

    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        (**self).is_dir(path)
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        (**self).create_dir_all(path)
    }

    fn list_dir(&self, path: &Path) -> FsResult<Vec<PathBuf>> {
        (**self).list_dir(path)
    }

    fn walk_files(&self, root: &Path) -> FsResult<Vec<PathBuf>> {
        (**self).walk_files(root)
    }
}
