//! Compensating actions for journaled filesystem changes.

use std::fs;
use std::path::PathBuf;

use crate::domain::AppError;

#[derive(Debug)]
pub(super) enum Change {
    CreatedDir(PathBuf),
    Renamed { from: PathBuf, to: PathBuf },
    WroteFile { path: PathBuf, previous: Option<Vec<u8>> },
    RemovedFile { path: PathBuf, contents: Vec<u8> },
}

impl Change {
    /// Apply the inverse of this change. Changes must be undone newest first.
    pub(super) fn undo(self) -> Result<(), AppError> {
        match self {
            Change::CreatedDir(path) => fs::remove_dir(&path).map_err(AppError::at_path(path)),
            Change::Renamed { from, to } => fs::rename(&to, &from).map_err(AppError::at_path(to)),
            Change::WroteFile { path, previous: Some(previous) } => {
                fs::write(&path, previous).map_err(AppError::at_path(path))
            }
            Change::WroteFile { path, previous: None } => {
                fs::remove_file(&path).map_err(AppError::at_path(path))
            }
            Change::RemovedFile { path, contents } => {
                fs::write(&path, contents).map_err(AppError::at_path(path))
            }
        }
    }
}
