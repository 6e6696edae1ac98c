//! Environment enumeration.

use std::path::Path;

use crate::domain::{AppError, MANIFEST_FILE};
use crate::ports::Filesystem;

/// Names of the environment directories of a project, sorted.
pub fn list<F: Filesystem>(filesystem: &F, project: &Path) -> Result<Vec<String>, AppError> {
    if !filesystem.exists(&project.join(MANIFEST_FILE)) {
        return Err(AppError::ProjectNotFound(project.to_path_buf()));
    }

    let mut names = Vec::new();
    for entry in filesystem.list_dir(project)? {
        if !filesystem.is_dir(&entry) {
            continue;
        }
        if let Some(name) = entry.file_name().and_then(|name| name.to_str()) {
            if !name.starts_with('.') {
                names.push(name.to_string());
            }
        }
    }
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::LocalFilesystem;
    use tempfile::TempDir;

    #[test]
    fn lists_subdirectories_only() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join(MANIFEST_FILE), "project-name=Demo\n").unwrap();
        for dir in ["Production", "Development", ".git"] {
            std::fs::create_dir(tmp.path().join(dir)).unwrap();
        }
        std::fs::write(tmp.path().join("notes.txt"), "").unwrap();

        let envs = list(&LocalFilesystem::new(), tmp.path()).unwrap();
        assert_eq!(envs, ["Development", "Production"]);
    }

    #[test]
    fn requires_manifest() {
        let tmp = TempDir::new().unwrap();
        let err = list(&LocalFilesystem::new(), tmp.path()).unwrap_err();
        assert!(matches!(err, AppError::ProjectNotFound(_)));
    }
}
