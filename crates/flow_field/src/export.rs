use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::error::{FlowFieldError, Result};
use crate::flow::DirectionField;

/// Writes a direction field to `<output_dir>/field_<timestamp>.csv` and
/// returns the path. The directory is created when missing.
pub fn export_field_csv(field: &DirectionField, output_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(output_dir).map_err(|source| FlowFieldError::CreateDir {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let timestamp = Local::now().format("%Y-%m-%d_%H-%M-%S");
    let path = output_dir.join(format!("field_{timestamp}.csv"));
    let file = File::create(&path).map_err(|source| FlowFieldError::CreateFile {
        path: path.clone(),
        source,
    })?;

    write_field(BufWriter::new(file), field)?;
    Ok(path)
}

/// Writes the field as headerless CSV, one row of radian angles per
/// grid row.
pub fn write_field<W: Write>(writer: W, field: &DirectionField) -> Result<()> {
    #[cfg(windows)]
    let mut csv_writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer);
    #[cfg(not(windows))]
    let mut csv_writer = csv::WriterBuilder::new().from_writer(writer);

    for row in field.rows() {
        csv_writer.write_record(row.iter().map(|angle| format!("{angle:.6}")))?;
    }
    csv_writer.flush()?;

    Ok(())
}
