//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::Path;

use crate::adapters::{FacadeLog, LocalFilesystem};
use crate::app::{AppContext, commands, config};

pub use crate::app::commands::extract::{
    CategorySummary, ExtractOptions, ExtractOutcome, ReferenceSummary,
};
pub use crate::domain::{AppError, ExtractConfig};

/// Create an `AppContext` backed by the local filesystem.
fn create_context(journaled: bool) -> AppContext<LocalFilesystem, FacadeLog> {
    let filesystem = if journaled { LocalFilesystem::journaled() } else { LocalFilesystem::new() };
    AppContext::new(filesystem, FacadeLog)
}

/// Extract one environment of a project export into `options.output`.
///
/// Filesystem changes are journaled only when `rollback_on_failure` is set.
pub fn extract(options: &ExtractOptions) -> Result<ExtractOutcome, AppError> {
    let ctx = create_context(options.config.rollback_on_failure);
    commands::extract::execute(&ctx, options)
}

/// List the environment directories of a project export.
pub fn environments(project: &Path) -> Result<Vec<String>, AppError> {
    commands::environments::list(&LocalFilesystem::new(), project)
}

/// Load an extraction config file, or the defaults when `path` is `None`.
pub fn load_config(path: Option<&Path>) -> Result<ExtractConfig, AppError> {
    config::load_config(path, &LocalFilesystem::new())
}
