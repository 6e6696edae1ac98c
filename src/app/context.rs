use crate::ports::{Filesystem, LogSink};

/// Application context holding dependencies for command execution.
pub struct AppContext<F: Filesystem, L: LogSink> {
    filesystem: F,
    log: L,
}

impl<F: Filesystem, L: LogSink> AppContext<F, L> {
    /// Create a new application context.
    pub fn new(filesystem: F, log: L) -> Self {
        Self { filesystem, log }
    }

    /// Get a reference to the filesystem.
    pub fn filesystem(&self) -> &F {
        &self.filesystem
    }

    /// Get a reference to the log sink.
    pub fn log(&self) -> &L {
        &self.log
    }
}
