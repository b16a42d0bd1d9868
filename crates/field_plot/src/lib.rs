pub mod constants;
pub mod error;
pub mod loader;
pub mod present;
pub mod quiver;
pub mod render;

pub use error::{FieldPlotError, Result};
pub use loader::{AngleGrid, read_angle_grid};
pub use quiver::{Arrow, field_arrows};
pub use render::{CanvasLayout, PlotRenderer, render_field};
