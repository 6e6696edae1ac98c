pub mod facade_log;
pub mod filesystem;

pub use facade_log::FacadeLog;
pub use filesystem::LocalFilesystem;
