//! `LogSink` adapter forwarding to the `log` facade.

use crate::ports::{LogLevel, LogSink};

/// Routes pipeline messages to whatever logger the binary installed.
#[derive(Debug, Clone, Copy, Default)]
pub struct FacadeLog;

impl LogSink for FacadeLog {
    fn log(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Info => log::info!(target: "jbextract", "{message}"),
            LogLevel::Warning => log::warn!(target: "jbextract", "{message}"),
            LogLevel::Error => log::error!(target: "jbextract", "{message}"),
        }
    }
}
