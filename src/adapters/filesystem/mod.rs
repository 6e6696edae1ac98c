//! Local filesystem adapter for the `Filesystem` port.
//!
//! A journaled instance records every change it makes so that a failed run
//! can be undone with [`Filesystem::rollback`].

mod journal;

use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::domain::AppError;
use crate::ports::Filesystem;

use journal::Change;

/// `std::fs`-backed filesystem.
#[derive(Debug, Default)]
pub struct LocalFilesystem {
    journal: Option<RefCell<Vec<Change>>>,
}

impl LocalFilesystem {
    /// Filesystem that does not record changes.
    pub fn new() -> Self {
        Self { journal: None }
    }

    /// Filesystem that records changes for rollback.
    pub fn journaled() -> Self {
        Self { journal: Some(RefCell::new(Vec::new())) }
    }

    /// Number of changes recorded so far.
    pub fn recorded_changes(&self) -> usize {
        self.journal.as_ref().map_or(0, |journal| journal.borrow().len())
    }

    fn record(&self, change: Change) {
        if let Some(journal) = &self.journal {
            journal.borrow_mut().push(change);
        }
    }

    fn is_journaled(&self) -> bool {
        self.journal.is_some()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir(&self, path: &Path) -> Result<(), AppError> {
        fs::create_dir(path).map_err(AppError::at_path(path))?;
        self.record(Change::CreatedDir(path.to_path_buf()));
        Ok(())
    }

    fn rename(&self, from: &Path, to: &Path) -> Result<(), AppError> {
        if to.exists() {
            return Err(AppError::at_path(to)(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("cannot rename {} onto an existing path", from.display()),
            )));
        }
        fs::rename(from, to).map_err(AppError::at_path(from))?;
        self.record(Change::Renamed { from: from.to_path_buf(), to: to.to_path_buf() });
        Ok(())
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>, AppError> {
        fs::read(path).map_err(AppError::at_path(path))
    }

    fn write(&self, path: &Path, content: &[u8]) -> Result<(), AppError> {
        let previous = if self.is_journaled() && path.is_file() {
            Some(fs::read(path).map_err(AppError::at_path(path))?)
        } else {
            None
        };
        fs::write(path, content).map_err(AppError::at_path(path))?;
        self.record(Change::WroteFile { path: path.to_path_buf(), previous });
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> Result<(), AppError> {
        let contents = if self.is_journaled() {
            Some(fs::read(path).map_err(AppError::at_path(path))?)
        } else {
            None
        };
        fs::remove_file(path).map_err(AppError::at_path(path))?;
        if let Some(contents) = contents {
            self.record(Change::RemovedFile { path: path.to_path_buf(), contents });
        }
        Ok(())
    }

    fn list_dir(&self, path: &Path) -> Result<Vec<PathBuf>, AppError> {
        let entries = fs::read_dir(path).map_err(AppError::at_path(path))?;
        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(AppError::at_path(path))?;
            paths.push(entry.path());
        }
        paths.sort();
        Ok(paths)
    }

    fn walk_files(&self, root: &Path) -> Result<Vec<PathBuf>, AppError> {
        let mut files = Vec::new();
        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry.map_err(|err| AppError::at_path(root)(io::Error::from(err)))?;
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn rollback(&self) -> Result<usize, AppError> {
        let Some(journal) = &self.journal else {
            return Ok(0);
        };
        let mut changes = journal.borrow_mut();
        let mut undone = 0;
        let mut failures = Vec::new();
        while let Some(change) = changes.pop() {
            match change.undo() {
                Ok(()) => undone += 1,
                Err(err) => failures.push(err.to_string()),
            }
        }
        if failures.is_empty() {
            Ok(undone)
        } else {
            Err(AppError::RollbackIncomplete { undone, failures })
        }
    }
}
