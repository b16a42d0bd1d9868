/// Arrow geometry (grid units)
pub const ARROW_SCALE: f64 = 0.5; // arrow length as a fraction of one cell

/// Canvas layout (pixels)
pub const CELL_PX: f32 = 60.0; // cell -> px
pub const MARGIN_PX: f32 = 48.0; // border around the plot area
pub const TICK_LEN_PX: f32 = 6.0;
pub const FONT_SIZE: f32 = 16.0; // tick label size

/// Arrow head (pixels)
pub const HEAD_LEN_PX: f32 = 9.0;
pub const HEAD_HALF_WIDTH_PX: f32 = 4.0;
