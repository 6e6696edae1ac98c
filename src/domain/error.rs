use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for jbextract operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// I/O failure on a known path.
    #[error("{}: {source}", .path.display())]
    PathIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Malformed descriptor or configuration file.
    #[error("Failed to parse {what}: {details}")]
    Parse { what: String, details: String },

    /// An entity descriptor names an identifier missing from project.xml.
    #[error("Corrupted project.xml - {category} {id} was not found")]
    CorruptedProject { category: String, id: String },

    /// Two folders of one category share an identifier.
    #[error("Corrupted project.xml - folder {id} appears more than once in {category}")]
    DuplicateFolder { category: String, id: String },

    /// The source directory does not contain a project manifest.
    #[error("No project manifest (manifest.jip) found in {}", .0.display())]
    ProjectNotFound(PathBuf),

    /// The requested environment directory is missing.
    #[error("Environment '{name}' not found. Available: {available}")]
    EnvironmentNotFound { name: String, available: String },

    /// Some journaled changes could not be undone.
    #[error("Rollback incomplete: {undone} changes undone, {} failed: {}", .failures.len(), .failures.join("; "))]
    RollbackIncomplete { undone: usize, failures: Vec<String> },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub(crate) fn parse_error<W: Into<String>, D: ToString>(what: W, details: D) -> Self {
        AppError::Parse { what: what.into(), details: details.to_string() }
    }

    /// Attach a path to an `io::Error`.
    pub(crate) fn at_path<P: Into<PathBuf>>(path: P) -> impl FnOnce(io::Error) -> AppError {
        let path = path.into();
        move |source| AppError::PathIo { path, source }
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) | AppError::PathIo { source: err, .. } => err.kind(),
            AppError::Configuration(_)
            | AppError::Parse { .. }
            | AppError::TomlParseError(_)
            | AppError::CorruptedProject { .. }
            | AppError::DuplicateFolder { .. } => io::ErrorKind::InvalidData,
            AppError::ProjectNotFound(_) | AppError::EnvironmentNotFound { .. } => {
                io::ErrorKind::NotFound
            }
            AppError::RollbackIncomplete { .. } => io::ErrorKind::Other,
        }
    }
}
