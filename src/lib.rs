//! jbextract: Convert integration-platform project exports into readable,
//! version-control-friendly directory trees.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    AppError, CategorySummary, ExtractConfig, ExtractOptions, ExtractOutcome, ReferenceSummary,
    environments, extract, load_config,
};
