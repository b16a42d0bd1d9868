use crate::error::{FieldPlotError, Result};

use csv::{ReaderBuilder, Trim};
use itertools::Itertools;
use std::io::Read;
use std::path::Path;

/// Row-major grid of radian angles read from a field CSV.
#[derive(Debug, Clone, PartialEq)]
pub struct AngleGrid {
    cols: usize,
    values: Vec<f64>,
}

impl AngleGrid {
    #[inline]
    pub fn rows(&self) -> usize {
        self.values.len() / self.cols
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.cols + col]
    }

    /// Iterates cells in row-major order as `(row, col, angle)`.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        (0..self.rows())
            .cartesian_product(0..self.cols)
            .map(|(row, col)| (row, col, self.get(row, col)))
    }
}

/// Reads a direction-field CSV.
///
/// # Arguments
/// * `path` - Path to a headerless CSV of radian angles
///
/// # Errors
/// Returns an error if the file cannot be read, a row has a different
/// number of columns than the first row, or a cell is not a number.
pub fn read_angle_grid<P: AsRef<Path>>(path: P) -> Result<AngleGrid> {
    let file = std::fs::File::open(path)?;
    read_angle_grid_from_reader(file)
}

/// Reads a headerless CSV of radian angles, one field row per line.
/// - Whitespace around cells is ignored
/// - Lines that trim down to nothing are skipped
/// - `nan` and `inf` parse as their floating-point counterparts
pub fn read_angle_grid_from_reader<R: Read>(reader: R) -> Result<AngleGrid> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut cols = 0;
    let mut values = Vec::new();

    for (i, result) in rdr.records().enumerate() {
        let rec = result?;
        let row = i + 1; // CSV rows are 1-indexed

        // a line of bare whitespace shows up as a single empty field
        if rec.len() == 1 && rec[0].is_empty() {
            continue;
        }

        if cols == 0 {
            cols = rec.len();
        } else if rec.len() != cols {
            return Err(FieldPlotError::RaggedRow {
                row,
                expected: cols,
                got: rec.len(),
            });
        }

        for (col, field) in rec.iter().enumerate() {
            let angle = field
                .parse::<f64>()
                .map_err(|source| FieldPlotError::AngleParse {
                    row,
                    col: col + 1,
                    value: field.to_string(),
                    source,
                })?;
            values.push(angle);
        }
    }

    if values.is_empty() {
        return Err(FieldPlotError::EmptyField);
    }

    Ok(AngleGrid { cols, values })
}
