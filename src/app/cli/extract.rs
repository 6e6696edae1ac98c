use std::io::{ErrorKind, IsTerminal};
use std::path::{Path, PathBuf};

use dialoguer::{Error as DialoguerError, Select};

use crate::app::api::{self, ExtractOptions, ExtractOutcome};
use crate::domain::AppError;

pub struct ExtractArgs {
    pub project: PathBuf,
    pub output: PathBuf,
    pub env: Option<String>,
    pub config: Option<PathBuf>,
    pub rollback: bool,
    pub json: bool,
}

pub fn run(args: ExtractArgs) -> Result<(), AppError> {
    let mut config = api::load_config(args.config.as_deref())?;
    if args.rollback {
        config.rollback_on_failure = true;
    }

    let environment = match args.env {
        Some(env) => env,
        None => match resolve_environment(&args.project)? {
            Some(env) => env,
            None => return Ok(()),
        },
    };

    let outcome = api::extract(&ExtractOptions {
        project: args.project,
        environment,
        output: args.output,
        config,
    })?;

    if args.json {
        let rendered = serde_json::to_string_pretty(&outcome).map_err(std::io::Error::from)?;
        println!("{rendered}");
    } else {
        print_summary(&outcome);
    }
    Ok(())
}

fn resolve_environment(project: &Path) -> Result<Option<String>, AppError> {
    let mut names = api::environments(project)?;
    match names.len() {
        0 => Err(AppError::config_error(format!(
            "No environments found in {}",
            project.display()
        ))),
        1 => Ok(names.pop()),
        _ if std::io::stdin().is_terminal() => prompt_environment(&names),
        _ => Err(AppError::config_error(format!(
            "Several environments found, pass one with --env: {}",
            names.join(", ")
        ))),
    }
}

fn prompt_environment(names: &[String]) -> Result<Option<String>, AppError> {
    match Select::new().with_prompt("Select environment").items(names).default(0).interact_opt() {
        Ok(selection) => Ok(selection.map(|index| names[index].clone())),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::config_error(format!("Failed to select environment: {}", err))),
    }
}

fn print_summary(outcome: &ExtractOutcome) {
    println!(
        "✅ Extracted {} ({}) into {}",
        outcome.project_name,
        outcome.environment_name,
        outcome.destination.display()
    );
    for category in &outcome.categories {
        println!("  {}: {} folder(s), {} entities", category.name, category.folders, category.entities);
    }
    let references = &outcome.references;
    println!(
        "  References: {} rewritten, {} unresolved; {} file(s) unwrapped",
        references.references_rewritten, references.references_unresolved, references.files_unwrapped
    );
}
