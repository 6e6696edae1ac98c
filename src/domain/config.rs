//! Extraction configuration, optionally loaded from a TOML file.

use std::collections::HashSet;

use serde::Deserialize;

use super::AppError;

/// How a category's descriptor turns into an output file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayloadKind {
    /// Write the embedded script text.
    Script,
    /// Copy the descriptor file verbatim.
    #[default]
    Raw,
}

/// One category to materialize.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CategoryConfig {
    /// Entity type name as used in `project.xml` and `Data/`.
    pub name: String,
    /// Output file extension, without the dot.
    pub extension: String,
    #[serde(default)]
    pub payload: PayloadKind,
    /// Prefix used in reference tokens; defaults to `name` + `s`.
    #[serde(default)]
    pub plural: Option<String>,
}

impl CategoryConfig {
    pub fn new(name: &str, extension: &str, payload: PayloadKind) -> Self {
        Self { name: name.to_string(), extension: extension.to_string(), payload, plural: None }
    }

    pub fn plural(&self) -> String {
        self.plural.clone().unwrap_or_else(|| format!("{}s", self.name))
    }
}

/// Alternate-language block markers and the extension for unwrapped files.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WrapperConfig {
    #[serde(default = "default_wrapper_open")]
    pub open: String,
    #[serde(default = "default_wrapper_close")]
    pub close: String,
    #[serde(default = "default_wrapper_extension")]
    pub extension: String,
}

impl Default for WrapperConfig {
    fn default() -> Self {
        Self {
            open: default_wrapper_open(),
            close: default_wrapper_close(),
            extension: default_wrapper_extension(),
        }
    }
}

fn default_wrapper_open() -> String {
    "<javascript>".to_string()
}

fn default_wrapper_close() -> String {
    "</javascript>".to_string()
}

fn default_wrapper_extension() -> String {
    "js".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExtractConfig {
    /// Undo every filesystem change when a run fails.
    #[serde(default)]
    pub rollback_on_failure: bool,
    #[serde(default = "default_categories")]
    pub categories: Vec<CategoryConfig>,
    #[serde(default)]
    pub wrapper: WrapperConfig,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            rollback_on_failure: false,
            categories: default_categories(),
            wrapper: WrapperConfig::default(),
        }
    }
}

fn default_categories() -> Vec<CategoryConfig> {
    vec![
        CategoryConfig::new("Script", "jb", PayloadKind::Script),
        CategoryConfig::new("Operation", "xml", PayloadKind::Raw),
    ]
}

impl ExtractConfig {
    /// Parse and validate TOML configuration content.
    pub fn parse(content: &str) -> Result<Self, AppError> {
        let config: ExtractConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.categories.is_empty() {
            return Err(AppError::config_error("At least one category must be configured"));
        }

        let mut seen = HashSet::new();
        for category in &self.categories {
            if category.name.trim().is_empty() || category.extension.trim().is_empty() {
                return Err(AppError::config_error(
                    "Category name and extension must not be empty",
                ));
            }
            if category.name.contains(['/', '\\']) {
                return Err(AppError::config_error(format!(
                    "Category name '{}' must not contain path separators",
                    category.name
                )));
            }
            if !seen.insert(category.name.as_str()) {
                return Err(AppError::config_error(format!(
                    "Category '{}' is configured more than once",
                    category.name
                )));
            }
        }

        if self.wrapper.open.is_empty() || self.wrapper.close.is_empty() {
            return Err(AppError::config_error("Wrapper markers must not be empty"));
        }
        Ok(())
    }
}
