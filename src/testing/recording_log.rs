//! In-memory log sink for assertions on pipeline messages.

use std::cell::RefCell;

use crate::ports::{LogLevel, LogSink};

#[derive(Debug, Default)]
pub struct RecordingLog {
    entries: RefCell<Vec<(LogLevel, String)>>,
}

impl RecordingLog {
    fn messages(&self, level: LogLevel) -> Vec<String> {
        self.entries
            .borrow()
            .iter()
            .filter(|(entry_level, _)| *entry_level == level)
            .map(|(_, message)| message.clone())
            .collect()
    }

    pub fn infos(&self) -> Vec<String> {
        self.messages(LogLevel::Info)
    }

    pub fn warnings(&self) -> Vec<String> {
        self.messages(LogLevel::Warning)
    }

    pub fn errors(&self) -> Vec<String> {
        self.messages(LogLevel::Error)
    }
}

impl LogSink for RecordingLog {
    fn log(&self, level: LogLevel, message: &str) {
        self.entries.borrow_mut().push((level, message.to_string()));
    }
}
