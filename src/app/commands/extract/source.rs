//! Paths inside a project export.

use std::path::{Path, PathBuf};

use crate::app::commands::environments;
use crate::domain::{AppError, DATA_DIR, ENVIRONMENT_FILE, MANIFEST_FILE, PROJECT_FILE};
use crate::ports::Filesystem;

/// Layout of one environment of a project export.
#[derive(Debug, Clone)]
pub struct SourceLayout {
    project: PathBuf,
    environment: String,
}

impl SourceLayout {
    pub fn new(project: &Path, environment: &str) -> Self {
        Self { project: project.to_path_buf(), environment: environment.to_string() }
    }

    pub fn project_root(&self) -> &Path {
        &self.project
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    pub fn manifest(&self) -> PathBuf {
        self.project.join(MANIFEST_FILE)
    }

    pub fn environment_dir(&self) -> PathBuf {
        self.project.join(&self.environment)
    }

    pub fn environment_properties(&self) -> PathBuf {
        self.environment_dir().join(ENVIRONMENT_FILE)
    }

    pub fn project_xml(&self) -> PathBuf {
        self.environment_dir().join(PROJECT_FILE)
    }

    /// Raw descriptors of one category.
    pub fn data_dir(&self, category: &str) -> PathBuf {
        self.environment_dir().join(DATA_DIR).join(category)
    }

    /// Check that the manifest and the environment directory exist.
    pub fn validate<F: Filesystem>(&self, filesystem: &F) -> Result<(), AppError> {
        if !filesystem.exists(&self.manifest()) {
            return Err(AppError::ProjectNotFound(self.project.clone()));
        }
        if self.environment.is_empty() || !filesystem.is_dir(&self.environment_dir()) {
            let available = environments::list(filesystem, &self.project)?;
            return Err(AppError::EnvironmentNotFound {
                name: self.environment.clone(),
                available: available.join(", "),
            });
        }
        Ok(())
    }
}
