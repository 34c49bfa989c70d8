use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use cars_parser::ParseOptions;
use serde::Deserialize;

use crate::error::{Result, TransformError};

/// Settings for one run. `Default` reads `raw/` and writes `cars.json`
/// relative to the working directory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TransformConfig {
    pub input_dir: PathBuf,
    pub output_path: PathBuf,
    pub extension: String,
    pub make_overrides: BTreeMap<String, String>,
    pub integer_fields: Vec<String>,
    pub pretty: bool,
}

impl Default for TransformConfig {
    fn default() -> Self {
        let parse = ParseOptions::default();
        Self {
            input_dir: PathBuf::from("raw"),
            output_path: PathBuf::from("cars.json"),
            extension: parse.extension,
            make_overrides: parse.make_overrides,
            integer_fields: parse.integer_fields,
            pretty: false,
        }
    }
}

impl TransformConfig {
    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|source| TransformError::io(path, source))?;
        Self::from_toml_str(&content).map_err(|err| TransformError::Config {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
    }

    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            extension: self.extension.clone(),
            make_overrides: self.make_overrides.clone(),
            integer_fields: self.integer_fields.clone(),
        }
    }
}
