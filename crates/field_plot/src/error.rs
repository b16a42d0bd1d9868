use thiserror::Error;

pub type Result<T> = std::result::Result<T, FieldPlotError>;

#[derive(Debug, Error)]
pub enum FieldPlotError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Field file contains no cells")]
    EmptyField,

    #[error("Invalid CSV row {row}: expected {expected} columns, got {got}")]
    RaggedRow {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("Invalid angle at row {row}, column {col}: {value}")]
    AngleParse {
        row: usize,
        col: usize,
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    #[error(transparent)]
    Image(#[from] image::ImageError),
}
