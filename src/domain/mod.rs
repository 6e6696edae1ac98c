pub mod config;
pub mod descriptor;
pub mod dir_table;
pub mod error;
pub mod locator;
pub mod project;
pub mod properties;
pub mod reference;
pub mod sanitize;
pub mod wrapper;

pub use config::{CategoryConfig, ExtractConfig, PayloadKind, WrapperConfig};
pub use descriptor::EntityDescriptor;
pub use dir_table::{Created, DirTable, Phase, Renamed};
pub use error::AppError;
pub use locator::{Location, find, locate};
pub use project::{Category, EntityRef, Folder, FolderIdx, Project};
pub use reference::{CallKind, CallReference, Rewrite, reference_token, rewrite_references};
pub use sanitize::sanitize_file_name;
pub use wrapper::unwrap_block;

/// Manifest file that marks a project root.
pub const MANIFEST_FILE: &str = "manifest.jip";
/// Environment metadata inside each environment directory.
pub const ENVIRONMENT_FILE: &str = "environment.properties";
/// Project structure descriptor inside each environment directory.
pub const PROJECT_FILE: &str = "project.xml";
/// Raw entity descriptors, one subdirectory per category.
pub const DATA_DIR: &str = "Data";
/// Name of the copied manifest in the output tree.
pub const PROJECT_PROPERTIES_FILE: &str = "project.properties";
