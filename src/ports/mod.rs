mod filesystem;
mod log_sink;

pub use filesystem::Filesystem;
pub use log_sink::{LogLevel, LogSink};
