use std::env;
use std::path::PathBuf;

use crate::error::{FlowFieldError, Result};

const OUTPUT_DIR_VAR: &str = "FLOW_FIELD_OUTPUT_DIR";
const DEFAULT_OUTPUT_DIR: &str = "fields";

/// Runtime settings for the generator binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl Config {
    /// Reads settings from the environment, falling back to defaults.
    /// An unset or blank variable selects the default directory.
    pub fn from_env() -> Result<Self> {
        Self::resolve(env::var(OUTPUT_DIR_VAR).ok().as_deref())
    }

    fn resolve(raw: Option<&str>) -> Result<Self> {
        if let Some(value) = raw
            && !value.trim().is_empty()
        {
            let output_dir = PathBuf::from(value);

            // a path that exists but is not a directory is rejected early
            if output_dir.exists() && !output_dir.is_dir() {
                return Err(FlowFieldError::InvalidConfiguration(format!(
                    "Output path is not a directory: {}",
                    output_dir.display()
                )));
            }
            Ok(Self { output_dir })
        } else {
            Ok(Self::default())
        }
    }
}
