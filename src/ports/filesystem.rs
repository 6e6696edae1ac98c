//! Filesystem operations used by the extraction pipeline.

use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Port for the filesystem side effects of an extraction run.
///
/// All paths are absolute or relative to the process working directory.
pub trait Filesystem {
    /// Create a single directory. Fails if it already exists.
    fn create_dir(&self, path: &Path) -> Result<(), AppError>;

    /// Rename a file or directory. Fails if `to` already exists.
    fn rename(&self, from: &Path, to: &Path) -> Result<(), AppError>;

    /// Read a file as raw bytes.
    fn read(&self, path: &Path) -> Result<Vec<u8>, AppError>;

    /// Create or overwrite a file.
    fn write(&self, path: &Path, content: &[u8]) -> Result<(), AppError>;

    /// Remove a file.
    fn remove_file(&self, path: &Path) -> Result<(), AppError>;

    /// List the entries of a directory, sorted by path.
    fn list_dir(&self, path: &Path) -> Result<Vec<PathBuf>, AppError>;

    /// Every file below `root`, recursively, sorted by path.
    fn walk_files(&self, root: &Path) -> Result<Vec<PathBuf>, AppError>;

    /// Check whether a file or directory exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check whether a path is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Undo recorded changes in reverse order and return how many were undone.
    ///
    /// A failed undo does not stop the remaining ones; the failures are
    /// reported together once every change has been attempted.
    ///
    /// Implementations that do not record changes return `Ok(0)`.
    fn rollback(&self) -> Result<usize, AppError>;
}
