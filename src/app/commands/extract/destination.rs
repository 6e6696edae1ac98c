//! Destination directory and copied metadata.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use super::source::SourceLayout;
use crate::app::AppContext;
use crate::domain::{
    AppError, ENVIRONMENT_FILE, PROJECT_PROPERTIES_FILE, properties::property_value,
    sanitize_file_name,
};
use crate::ports::{Filesystem, LogSink};

/// Manifest and environment metadata of the extracted environment.
#[derive(Debug, Clone)]
pub struct Metadata {
    pub project_name: String,
    pub environment_name: String,
    manifest: Vec<u8>,
    environment: Vec<u8>,
}

/// Read project and environment names, falling back to directory names.
pub fn read_metadata<F: Filesystem, L: LogSink>(
    ctx: &AppContext<F, L>,
    layout: &SourceLayout,
) -> Result<Metadata, AppError> {
    let manifest = ctx.filesystem().read(&layout.manifest())?;
    let environment = ctx.filesystem().read(&layout.environment_properties())?;

    let project_name = match property_value(&String::from_utf8_lossy(&manifest), "project-name") {
        Some(name) => name,
        None => {
            ctx.log().warning("Corrupted manifest.jip, using the project directory name");
            dir_name(layout.project_root())
        }
    };

    let environment_name =
        match property_value(&String::from_utf8_lossy(&environment), "environment-name") {
            Some(name) => name,
            None => {
                ctx.log().warning("Corrupted environment.properties, using the directory name");
                layout.environment().to_string()
            }
        };

    Ok(Metadata { project_name, environment_name, manifest, environment })
}

/// Create `<output>/<Project> <Environment>`, adding a timestamp on collision.
pub fn prepare_destination<F: Filesystem, L: LogSink>(
    ctx: &AppContext<F, L>,
    output: &Path,
    metadata: &Metadata,
) -> Result<PathBuf, AppError> {
    let name = destination_name(&metadata.project_name, &metadata.environment_name);
    let mut destination = output.join(&name);
    if ctx.filesystem().exists(&destination) {
        let stamped = free_timestamped_name(ctx.filesystem(), output, &name, Local::now());
        ctx.log().warning(&format!(
            "{} already exists, extracting into '{stamped}'",
            destination.display()
        ));
        destination = output.join(stamped);
    }
    ctx.filesystem().create_dir(&destination)?;
    Ok(destination)
}

/// `<name> <timestamp>`, with `-2`, `-3`, ... appended while that is taken.
fn free_timestamped_name<F: Filesystem>(
    filesystem: &F,
    output: &Path,
    name: &str,
    now: DateTime<Local>,
) -> String {
    let stamped = timestamped(name, now);
    let mut candidate = stamped.clone();
    let mut counter = 1;
    while filesystem.exists(&output.join(&candidate)) {
        counter += 1;
        candidate = format!("{stamped}-{counter}");
    }
    candidate
}

/// Copy the manifest and environment properties into the destination.
pub fn copy_metadata<F: Filesystem>(
    filesystem: &F,
    destination: &Path,
    metadata: &Metadata,
) -> Result<(), AppError> {
    filesystem.write(&destination.join(PROJECT_PROPERTIES_FILE), &metadata.manifest)?;
    filesystem.write(&destination.join(ENVIRONMENT_FILE), &metadata.environment)?;
    Ok(())
}

fn destination_name(project: &str, environment: &str) -> String {
    sanitize_file_name(&format!("{project} {environment}"))
}

fn timestamped(name: &str, now: DateTime<Local>) -> String {
    format!("{name} {}", now.format("%Y%m%d-%H%M%S"))
}

fn dir_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "project".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::LocalFilesystem;
    use crate::testing::{ProjectFixture, RecordingLog};
    use chrono::TimeZone;
    use tempfile::TempDir;

    #[test]
    fn destination_name_is_sanitized() {
        assert_eq!(destination_name("Billing/Sync", "Prod"), "Billing_Sync Prod");
    }

    #[test]
    fn timestamp_suffix_sorts_lexically() {
        let now = Local.with_ymd_and_hms(2026, 3, 7, 9, 5, 1).unwrap();
        assert_eq!(timestamped("Demo Prod", now), "Demo Prod 20260307-090501");
    }

    #[test]
    fn taken_timestamp_gets_counter() {
        let tmp = TempDir::new().unwrap();
        let now = Local.with_ymd_and_hms(2026, 3, 7, 9, 5, 1).unwrap();
        for taken in ["Demo Prod 20260307-090501", "Demo Prod 20260307-090501-2"] {
            std::fs::create_dir(tmp.path().join(taken)).unwrap();
        }

        let name = free_timestamped_name(&LocalFilesystem::new(), tmp.path(), "Demo Prod", now);
        assert_eq!(name, "Demo Prod 20260307-090501-3");
    }

    #[test]
    fn free_timestamp_has_no_counter() {
        let tmp = TempDir::new().unwrap();
        let now = Local.with_ymd_and_hms(2026, 3, 7, 9, 5, 1).unwrap();
        let name = free_timestamped_name(&LocalFilesystem::new(), tmp.path(), "Demo Prod", now);
        assert_eq!(name, "Demo Prod 20260307-090501");
    }

    #[test]
    fn reads_names_from_metadata_files() {
        let tmp = TempDir::new().unwrap();
        let fixture = ProjectFixture::new(tmp.path(), "Billing Sync", "Production");
        let ctx = AppContext::new(LocalFilesystem::new(), RecordingLog::default());

        let metadata =
            read_metadata(&ctx, &SourceLayout::new(fixture.root(), fixture.environment())).unwrap();
        assert_eq!(metadata.project_name, "Billing Sync");
        assert_eq!(metadata.environment_name, "Production");
        assert!(ctx.log().warnings().is_empty());
    }

    #[test]
    fn corrupted_metadata_falls_back_to_directory_names() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("Demo Export");
        let fixture = ProjectFixture::new(&root, "ignored", "QA");
        std::fs::write(root.join("manifest.jip"), "format-version=3\r\n").unwrap();
        std::fs::write(root.join("QA").join("environment.properties"), "").unwrap();
        let ctx = AppContext::new(LocalFilesystem::new(), RecordingLog::default());

        let metadata =
            read_metadata(&ctx, &SourceLayout::new(fixture.root(), fixture.environment())).unwrap();
        assert_eq!(metadata.project_name, "Demo Export");
        assert_eq!(metadata.environment_name, "QA");
        assert_eq!(ctx.log().warnings().len(), 2);
    }

    #[test]
    fn existing_destination_gets_timestamp() {
        let tmp = TempDir::new().unwrap();
        let fixture = ProjectFixture::new(&tmp.path().join("project"), "Demo", "Prod");
        let output = tmp.path().join("out");
        std::fs::create_dir_all(output.join("Demo Prod")).unwrap();
        let ctx = AppContext::new(LocalFilesystem::new(), RecordingLog::default());

        let metadata =
            read_metadata(&ctx, &SourceLayout::new(fixture.root(), fixture.environment())).unwrap();
        let destination = prepare_destination(&ctx, &output, &metadata).unwrap();

        let name = destination.file_name().unwrap().to_str().unwrap().to_string();
        assert!(name.starts_with("Demo Prod 2"), "unexpected name {name}");
        assert!(destination.is_dir());
        assert_eq!(ctx.log().warnings().len(), 1);
    }

    #[test]
    fn copies_metadata_verbatim() {
        let tmp = TempDir::new().unwrap();
        let fixture = ProjectFixture::new(&tmp.path().join("project"), "Demo", "Prod");
        let output = tmp.path().join("out");
        std::fs::create_dir(&output).unwrap();
        let ctx = AppContext::new(LocalFilesystem::new(), RecordingLog::default());

        let metadata =
            read_metadata(&ctx, &SourceLayout::new(fixture.root(), fixture.environment())).unwrap();
        let destination = prepare_destination(&ctx, &output, &metadata).unwrap();
        copy_metadata(ctx.filesystem(), &destination, &metadata).unwrap();

        assert_eq!(
            std::fs::read(destination.join("project.properties")).unwrap(),
            std::fs::read(fixture.root().join("manifest.jip")).unwrap()
        );
        assert!(destination.join("environment.properties").is_file());
    }
}
