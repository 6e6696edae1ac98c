mod project_fixture;
mod recording_log;

pub use project_fixture::{ProjectFixture, descriptor_xml};
pub use recording_log::RecordingLog;
