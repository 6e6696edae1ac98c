//! Extraction pipeline.
//!
//! Stages run strictly in order, each completing before the next starts:
//! metadata and destination, project structure, identifier-named
//! directories and entity files per category, renaming per category, and
//! finally cross-reference rewriting over the whole output tree.

mod destination;
mod directories;
mod entities;
mod references;
mod source;

use std::path::PathBuf;

use serde::Serialize;

use crate::app::AppContext;
use crate::domain::{AppError, ExtractConfig, Project};
use crate::ports::{Filesystem, LogSink};

pub use directories::{create_dirs, rename_dirs};
pub use entities::materialize_entities;
pub use references::{MaterializedCategory, ReferenceSummary, resolve_references};
pub use source::SourceLayout;

/// Options for one extraction run.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Project root containing `manifest.jip`.
    pub project: PathBuf,
    /// Environment directory name inside the project root.
    pub environment: String,
    /// Directory receiving the extracted tree.
    pub output: PathBuf,
    pub config: ExtractConfig,
}

/// Per-category counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub name: String,
    pub folders: usize,
    pub entities: usize,
}

/// Result of a successful extraction.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractOutcome {
    pub destination: PathBuf,
    pub project_name: String,
    pub environment_name: String,
    pub categories: Vec<CategorySummary>,
    pub references: ReferenceSummary,
}

/// Execute the extraction.
///
/// On failure the error is logged and, when `rollback_on_failure` is set,
/// every recorded filesystem change is undone before the error is returned.
pub fn execute<F, L>(ctx: &AppContext<F, L>, options: &ExtractOptions) -> Result<ExtractOutcome, AppError>
where
    F: Filesystem,
    L: LogSink,
{
    options.config.validate()?;

    let result = run(ctx, options);
    if let Err(err) = &result {
        ctx.log().error(&err.to_string());
        if options.config.rollback_on_failure {
            match ctx.filesystem().rollback() {
                Ok(undone) => ctx.log().info(&format!("Rolled back {undone} filesystem changes")),
                Err(rollback_err) => ctx.log().error(&format!("Rollback failed: {rollback_err}")),
            }
        }
    }
    result
}

fn run<F, L>(ctx: &AppContext<F, L>, options: &ExtractOptions) -> Result<ExtractOutcome, AppError>
where
    F: Filesystem,
    L: LogSink,
{
    let filesystem = ctx.filesystem();
    let layout = SourceLayout::new(&options.project, &options.environment);
    layout.validate(filesystem)?;

    let metadata = destination::read_metadata(ctx, &layout)?;
    let destination = destination::prepare_destination(ctx, &options.output, &metadata)?;
    destination::copy_metadata(filesystem, &destination, &metadata)?;
    ctx.log().info(&format!("Extracting into {}", destination.display()));

    let project_xml = filesystem.read(&layout.project_xml())?;
    let project_xml = String::from_utf8(project_xml)
        .map_err(|e| AppError::parse_error(layout.project_xml().display().to_string(), e))?;
    let project = Project::parse(&project_xml)?;

    let mut staged = Vec::new();
    for config in &options.config.categories {
        let Some(category) = project.category(&config.name) else {
            ctx.log().warning(&format!("Project has no '{}' entity type, skipping", config.name));
            continue;
        };
        let root = destination.join(&config.name);
        let created = create_dirs(filesystem, category, &root)?;
        let stems = materialize_entities(
            ctx,
            category,
            config,
            &created,
            &root,
            &layout.data_dir(&config.name),
        )?;
        staged.push((config, category, created, root, stems));
    }

    let mut materialized = Vec::with_capacity(staged.len());
    let mut categories = Vec::with_capacity(staged.len());
    for (config, category, created, root, stems) in staged {
        let dirs = rename_dirs(filesystem, category, created, &root)?;
        if !dirs.is_empty() {
            ctx.log().info(&format!("[{}] Renamed {} folders", config.name, dirs.len()));
        }
        categories.push(CategorySummary {
            name: config.name.clone(),
            folders: dirs.len(),
            entities: stems.len(),
        });
        materialized.push(MaterializedCategory { config, category, dirs, root, stems });
    }

    let references =
        resolve_references(ctx, &destination, &materialized, &options.config.wrapper)?;

    Ok(ExtractOutcome {
        destination,
        project_name: metadata.project_name,
        environment_name: metadata.environment_name,
        categories,
        references,
    })
}
