use crate::constants::{
    CELL_PX, FONT_SIZE, HEAD_HALF_WIDTH_PX, HEAD_LEN_PX, MARGIN_PX, TICK_LEN_PX,
};
use crate::error::Result;
use crate::quiver::Arrow;

use ab_glyph::{FontVec, PxScale};
use font_kit::{family_name::FamilyName, properties::Properties, source::SystemSource};
use image::{ImageBuffer, Rgb, RgbImage};
use imageproc::{
    drawing::{draw_hollow_rect_mut, draw_line_segment_mut, draw_polygon_mut, draw_text_mut},
    point::Point,
    rect::Rect,
};
use log::warn;
use std::path::Path;

/// Maps grid coordinates onto the pixel canvas.
///
/// Row 0 sits at the top of the canvas: raster y grows downward, which
/// matches a field whose row index grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasLayout {
    cols: usize,
    rows: usize,
}

impl CanvasLayout {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self { cols, rows }
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn width_px(&self) -> u32 {
        (2.0 * MARGIN_PX + self.cols as f32 * CELL_PX) as u32
    }

    #[inline]
    pub fn height_px(&self) -> u32 {
        (2.0 * MARGIN_PX + self.rows as f32 * CELL_PX) as u32
    }

    /// Grid coordinate to the pixel at the cell center.
    #[inline]
    pub fn to_px(&self, x: f64, y: f64) -> (f32, f32) {
        (
            MARGIN_PX + (x as f32 + 0.5) * CELL_PX,
            MARGIN_PX + (y as f32 + 0.5) * CELL_PX,
        )
    }

    /// Tick positions along the column axis as `(label, pixel x)`.
    pub fn x_ticks(&self) -> Vec<(usize, f32)> {
        (0..self.cols)
            .map(|col| (col, self.to_px(col as f64, 0.0).0))
            .collect()
    }

    /// Tick positions down the row axis as `(label, pixel y)`, row 0
    /// first and topmost.
    pub fn y_ticks(&self) -> Vec<(usize, f32)> {
        (0..self.rows)
            .map(|row| (row, self.to_px(0.0, row as f64).1))
            .collect()
    }

    fn plot_rect(&self) -> Rect {
        let width = (self.cols as f32 * CELL_PX) as u32;
        let height = (self.rows as f32 * CELL_PX) as u32;
        Rect::at(MARGIN_PX as i32, MARGIN_PX as i32).of_size(width.max(1), height.max(1))
    }
}

/// Color definitions
pub struct Colors;

impl Colors {
    pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
    pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
}

/// Drawing context for one quiver plot.
pub struct PlotRenderer {
    pub image: RgbImage,
    pub layout: CanvasLayout,
    font: Option<FontVec>,
}

impl PlotRenderer {
    /// Creates a white canvas sized for the layout. When no system font
    /// can be loaded the plot is still drawn, without tick labels.
    pub fn new(layout: CanvasLayout) -> Self {
        let image = ImageBuffer::from_pixel(layout.width_px(), layout.height_px(), Colors::WHITE);

        let font = load_system_font();
        if font.is_none() {
            warn!("No usable system font found, tick labels will be omitted");
        }

        Self {
            image,
            layout,
            font,
        }
    }

    /// Draws the plot frame and one labelled tick per column and row.
    pub fn draw_axes(&mut self) {
        draw_hollow_rect_mut(&mut self.image, self.layout.plot_rect(), Colors::BLACK);

        let bottom = MARGIN_PX + self.layout.rows() as f32 * CELL_PX;
        for (label, x) in self.layout.x_ticks() {
            draw_line_segment_mut(
                &mut self.image,
                (x, bottom),
                (x, bottom + TICK_LEN_PX),
                Colors::BLACK,
            );
            let text = label.to_string();
            let text_x = x - 0.28 * FONT_SIZE * text.chars().count() as f32;
            self.draw_text(&text, text_x, bottom + TICK_LEN_PX + 4.0);
        }

        for (label, y) in self.layout.y_ticks() {
            draw_line_segment_mut(
                &mut self.image,
                (MARGIN_PX - TICK_LEN_PX, y),
                (MARGIN_PX, y),
                Colors::BLACK,
            );
            let text = label.to_string();
            let text_x =
                MARGIN_PX - TICK_LEN_PX - 4.0 - 0.55 * FONT_SIZE * text.chars().count() as f32;
            self.draw_text(&text, text_x, y - FONT_SIZE / 2.0);
        }
    }

    /// Draws every drawable arrow. Cells with non-finite components are
    /// skipped and counted in a single warning.
    pub fn draw_arrows(&mut self, arrows: &[Arrow]) {
        let mut skipped = 0usize;
        for arrow in arrows {
            if arrow.is_drawable() {
                self.draw_arrow(arrow);
            } else {
                skipped += 1;
            }
        }

        if skipped > 0 {
            warn!("Skipped {skipped} cells with non-finite directions");
        }
    }

    /// Draws one arrow as a shaft plus a filled head.
    fn draw_arrow(&mut self, arrow: &Arrow) {
        let (x0, y0) = self.layout.to_px(arrow.x, arrow.y);
        // raster y grows downward, so a positive dy points up the canvas
        let tip_x = x0 + arrow.dx as f32 * CELL_PX;
        let tip_y = y0 - arrow.dy as f32 * CELL_PX;

        draw_line_segment_mut(&mut self.image, (x0, y0), (tip_x, tip_y), Colors::BLACK);

        let len = ((tip_x - x0).powi(2) + (tip_y - y0).powi(2)).sqrt();
        if len < 1.0 {
            return;
        }
        let ux = (tip_x - x0) / len;
        let uy = (tip_y - y0) / len;

        let base_x = tip_x - HEAD_LEN_PX * ux;
        let base_y = tip_y - HEAD_LEN_PX * uy;
        let head = [
            Point::new(tip_x as i32, tip_y as i32),
            Point::new(
                (base_x - HEAD_HALF_WIDTH_PX * uy) as i32,
                (base_y + HEAD_HALF_WIDTH_PX * ux) as i32,
            ),
            Point::new(
                (base_x + HEAD_HALF_WIDTH_PX * uy) as i32,
                (base_y - HEAD_HALF_WIDTH_PX * ux) as i32,
            ),
        ];

        // draw_polygon_mut rejects a closed point list
        if head[0] != head[1] && head[0] != head[2] {
            draw_polygon_mut(&mut self.image, &head, Colors::BLACK);
        }
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32) {
        if let Some(font) = &self.font {
            let scale = PxScale::from(FONT_SIZE);
            draw_text_mut(
                &mut self.image,
                Colors::BLACK,
                x as i32,
                y as i32,
                scale,
                font,
                text,
            );
        }
    }

    /// Saves the canvas as an image file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.image.save(path)?;
        Ok(())
    }
}

/// Renders arrows over labelled axes and saves the plot.
pub fn render_field<P: AsRef<Path>>(
    arrows: &[Arrow],
    layout: CanvasLayout,
    output_path: P,
) -> Result<()> {
    let mut renderer = PlotRenderer::new(layout);
    renderer.draw_axes();
    renderer.draw_arrows(arrows);
    renderer.save(output_path)?;
    Ok(())
}

/// Loads a system font for tick labels.
fn load_system_font() -> Option<FontVec> {
    let source = SystemSource::new();

    let font_families = vec![
        FamilyName::Title("DejaVu Sans".to_string()),
        FamilyName::Title("Arial".to_string()),
        FamilyName::Title("Helvetica".to_string()),
        FamilyName::SansSerif,
    ];

    for family in font_families {
        if let Ok(handle) = source.select_best_match(&[family], &Properties::new())
            && let Ok(font_kit_font) = handle.load()
            && let Some(font_bytes) = font_kit_font.copy_font_data()
            && let Ok(font) = FontVec::try_from_vec(font_bytes.to_vec())
        {
            return Some(font);
        }
    }

    None
}
