//! Entity payload materialization.

use std::collections::BTreeMap;
use std::path::Path;

use crate::app::AppContext;
use crate::domain::{
    AppError, Category, CategoryConfig, Created, DirTable, EntityDescriptor, PayloadKind, find,
    sanitize_file_name,
};
use crate::ports::{Filesystem, LogSink};

/// Write one output file per descriptor in `source_dir`.
///
/// Returns the sanitized file stem written for each entity identifier. A
/// descriptor whose identifier is absent from the project structure aborts
/// the run.
pub fn materialize_entities<F: Filesystem, L: LogSink>(
    ctx: &AppContext<F, L>,
    category: &Category,
    config: &CategoryConfig,
    dirs: &DirTable<Created>,
    root: &Path,
    source_dir: &Path,
) -> Result<BTreeMap<String, String>, AppError> {
    let filesystem = ctx.filesystem();
    let mut stems = BTreeMap::new();

    if !filesystem.is_dir(source_dir) {
        ctx.log().info(&format!(
            "[{}] No descriptors at {}",
            category.name(),
            source_dir.display()
        ));
        return Ok(stems);
    }

    for path in filesystem.list_dir(source_dir)? {
        if filesystem.is_dir(&path) || !is_descriptor(&path) {
            continue;
        }

        let raw = filesystem.read(&path)?;
        let source = path.display().to_string();
        let text = std::str::from_utf8(&raw).map_err(|e| AppError::parse_error(&source, e))?;
        let descriptor = EntityDescriptor::parse(text, &source)?;

        let (entity, dir) = find(category, &descriptor.header.id, dirs, root).ok_or_else(|| {
            AppError::CorruptedProject {
                category: category.name().to_string(),
                id: descriptor.header.id.clone(),
            }
        })?;

        let display_name =
            if descriptor.header.name.is_empty() { &entity.name } else { &descriptor.header.name };
        let stem = sanitize_file_name(display_name);
        let payload = match config.payload {
            PayloadKind::Script => descriptor.konga_string.as_bytes(),
            PayloadKind::Raw => raw.as_slice(),
        };
        filesystem.write(&dir.join(format!("{stem}.{}", config.extension)), payload)?;
        stems.insert(descriptor.header.id, stem);
    }

    ctx.log().info(&format!("[{}] Wrote {} entities", category.name(), stems.len()));
    Ok(stems)
}

fn is_descriptor(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("xml"))
}
