//! Cross-reference rewriting over the materialized output tree.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use path_slash::PathExt;
use serde::Serialize;

use crate::app::AppContext;
use crate::domain::{
    AppError, CallReference, Category, CategoryConfig, DirTable, Renamed, WrapperConfig, locate,
    reference_token, rewrite_references, sanitize_file_name, unwrap_block,
};
use crate::ports::{Filesystem, LogSink};

/// A category after materialization and renaming.
///
/// `category` is the logical structure used for lookup; `dirs` maps each
/// folder to its final directory.
#[derive(Debug)]
pub struct MaterializedCategory<'a> {
    pub config: &'a CategoryConfig,
    pub category: &'a Category,
    pub dirs: DirTable<Renamed>,
    pub root: PathBuf,
    /// File stem written for each entity identifier.
    pub stems: BTreeMap<String, String>,
}

impl MaterializedCategory<'_> {
    /// Token path (`<Plural>/<relative dir>/<name>`) of an entity, if known.
    pub fn token_path(&self, id: &str) -> Option<String> {
        let location = locate(self.category, id)?;
        let dir = location.directory(self.category, &self.dirs, &self.root)?;
        let relative = pathdiff::diff_paths(&dir, &self.root)?;
        let stem = self
            .stems
            .get(id)
            .cloned()
            .unwrap_or_else(|| sanitize_file_name(&location.entity.name));
        let relative = relative.join(stem);
        let relative = relative.to_slash_lossy();
        Some(format!("{}/{}", self.config.plural(), relative.trim_start_matches('/')))
    }
}

/// Counters reported by the resolution pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReferenceSummary {
    pub files_scanned: usize,
    pub files_rewritten: usize,
    pub references_rewritten: usize,
    pub references_unresolved: usize,
    pub files_unwrapped: usize,
}

/// Rewrite references and unwrap alternate-language files under `output_root`.
pub fn resolve_references<F: Filesystem, L: LogSink>(
    ctx: &AppContext<F, L>,
    output_root: &Path,
    categories: &[MaterializedCategory<'_>],
    wrapper: &WrapperConfig,
) -> Result<ReferenceSummary, AppError> {
    let filesystem = ctx.filesystem();
    let mut summary = ReferenceSummary::default();

    for path in filesystem.walk_files(output_root)? {
        let text = match String::from_utf8(filesystem.read(&path)?) {
            Ok(text) => text,
            Err(_) => {
                ctx.log().info(&format!("Skipping non-UTF-8 file {}", path.display()));
                continue;
            }
        };
        summary.files_scanned += 1;

        let rewrite = rewrite_references(&text, |reference| {
            resolve(categories, reference).map(|path| reference_token(&path))
        });
        for reference in &rewrite.unresolved {
            ctx.log().warning(&format!(
                "{}: unresolved {} reference {}",
                path.display(),
                reference.kind.category(),
                reference.id
            ));
        }
        summary.references_rewritten += rewrite.rewritten;
        summary.references_unresolved += rewrite.unresolved.len();

        if let Some(payload) = unwrap_block(&rewrite.text, &wrapper.open, &wrapper.close) {
            let unwrapped = path.with_extension(&wrapper.extension);
            filesystem.remove_file(&path)?;
            filesystem.write(&unwrapped, payload.as_bytes())?;
            summary.files_unwrapped += 1;
            if rewrite.changed() {
                summary.files_rewritten += 1;
            }
        } else if rewrite.changed() {
            filesystem.write(&path, rewrite.text.as_bytes())?;
            summary.files_rewritten += 1;
        }
    }

    ctx.log().info(&format!(
        "Rewrote {} references in {} files ({} unresolved, {} unwrapped)",
        summary.references_rewritten,
        summary.files_rewritten,
        summary.references_unresolved,
        summary.files_unwrapped
    ));
    Ok(summary)
}

fn resolve(categories: &[MaterializedCategory<'_>], reference: &CallReference) -> Option<String> {
    categories
        .iter()
        .find(|materialized| materialized.category.name() == reference.kind.category())
        .and_then(|materialized| materialized.token_path(&reference.id))
}
