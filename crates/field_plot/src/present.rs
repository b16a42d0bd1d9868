use crate::error::Result;

use log::info;
use std::path::Path;

/// Hands the rendered plot to the platform image viewer.
///
/// The plot file is already on disk when this runs; a missing viewer
/// still fails the run, with the path in the log for manual opening.
pub fn show(path: &Path) -> Result<()> {
    info!("Opening {}", path.display());
    open::that(path)?;
    Ok(())
}
