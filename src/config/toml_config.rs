use crate::domain::ports::ConfigProvider;
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_positive_number, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub catalog: CatalogSection,
    pub export: ExportConfig,
    pub menu: MenuConfig,
    pub input: InputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSection {
    pub title: String,
}

impl Default for CatalogSection {
    fn default() -> Self {
        Self {
            title: "snow activity management system".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub output_dir: String,
    pub default_file: Option<String>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: ".".to_string(),
            default_file: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    pub confirm_return: bool,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            confirm_return: true,
        }
    }
}

/// Longest accepted input per prompt, in characters. Longer input is cut.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub max_name_length: usize,
    pub max_text_length: usize,
    pub max_file_name_length: usize,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            max_name_length: 25,
            max_text_length: 100,
            max_file_name_length: 49,
        }
    }
}

impl CatalogConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CatalogError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CatalogError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the variable's value; unknown variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CatalogError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl Validate for CatalogConfig {
    fn validate(&self) -> Result<()> {
        validate_path("export.output_dir", &self.export.output_dir)?;
        if let Some(file) = &self.export.default_file {
            validate_path("export.default_file", file)?;
        }
        validate_non_empty_string("catalog.title", &self.catalog.title).map_err(|_| {
            CatalogError::InvalidConfigValueError {
                field: "catalog.title".to_string(),
                value: self.catalog.title.clone(),
                reason: "Title cannot be empty".to_string(),
            }
        })?;
        validate_positive_number("input.max_name_length", self.input.max_name_length, 1)?;
        validate_positive_number("input.max_text_length", self.input.max_text_length, 1)?;
        validate_positive_number(
            "input.max_file_name_length",
            self.input.max_file_name_length,
            1,
        )?;
        Ok(())
    }
}

impl ConfigProvider for CatalogConfig {
    fn title(&self) -> &str {
        &self.catalog.title
    }

    fn output_dir(&self) -> &str {
        &self.export.output_dir
    }

    fn default_export_file(&self) -> Option<&str> {
        self.export.default_file.as_deref()
    }

    fn confirm_return(&self) -> bool {
        self.menu.confirm_return
    }

    fn max_name_length(&self) -> usize {
        self.input.max_name_length
    }

    fn max_text_length(&self) -> usize {
        self.input.max_text_length
    }

    fn max_file_name_length(&self) -> usize {
        self.input.max_file_name_length
    }
}
