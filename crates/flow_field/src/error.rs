use std::{io, path::PathBuf};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, FlowFieldError>;

#[derive(Debug, Error)]
pub enum FlowFieldError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Invalid scenario: {0}")]
    InvalidScenario(String),

    #[error("Wall ({x}, {y}) is outside the {width}x{height} map")]
    WallOutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("Target ({x}, {y}) is outside the {width}x{height} map")]
    TargetOutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("At least one target is required")]
    NoTargets,

    #[error("Failed to create directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to create file {}", path.display())]
    CreateFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl From<toml::de::Error> for FlowFieldError {
    fn from(err: toml::de::Error) -> Self {
        FlowFieldError::InvalidScenario(format!("TOML parse error: {}", err))
    }
}
