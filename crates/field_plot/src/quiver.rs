use crate::constants::ARROW_SCALE;
use crate::loader::AngleGrid;

/// One plot arrow: the anchor is the cell's `(col, row)` coordinate and
/// the direction components span half a cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arrow {
    pub x: f64,
    pub y: f64,
    pub dx: f64,
    pub dy: f64,
}

impl Arrow {
    /// True when both direction components are finite.
    #[inline]
    pub fn is_drawable(&self) -> bool {
        self.dx.is_finite() && self.dy.is_finite()
    }
}

/// Expands a field into arrows, one per cell in row-major order.
///
/// The direction is `(cos(angle), -sin(angle))` scaled by half a cell,
/// so with the row axis drawn top-down an angle of `pi/2` points at the
/// row below and `-pi/2` at the row above.
pub fn field_arrows(field: &AngleGrid) -> Vec<Arrow> {
    field
        .cells()
        .map(|(row, col, angle)| Arrow {
            x: col as f64,
            y: row as f64,
            dx: ARROW_SCALE * angle.cos(),
            dy: -ARROW_SCALE * angle.sin(),
        })
        .collect()
}
