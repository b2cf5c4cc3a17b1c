// Copyright 2019-2020 PolkaX. Licensed under MIT or Apache-2.0.

//! Grid rendering of a classified token.

use entropy_classify::Parsed;
use log::debug;

use crate::colors::{self, Rgb};
use crate::layout::{Cell, Point, Rect, Size};
use crate::shapes::Canvas;

const CELL_WIDTH: f64 = 64.0;
const CELL_HEIGHT: f64 = 32.0;

/// Nucleus colors, indexed by the high nibble of a core byte.
const PALETTE: [Rgb; 16] = [
    (26, 28, 44),
    (93, 39, 93),
    (177, 62, 83),
    (239, 125, 87),
    (255, 205, 117),
    (167, 240, 112),
    (56, 183, 100),
    (37, 113, 121),
    (41, 54, 111),
    (59, 93, 201),
    (65, 166, 246),
    (115, 239, 247),
    (244, 244, 244),
    (148, 176, 194),
    (86, 108, 134),
    (51, 60, 87),
];

/// Knobs for [`render`].
pub struct RenderOptions {
    /// Target width:height proportion of the cell grid.
    pub aspect_ratio: (u32, u32),
    /// Caption font size in points.
    pub font_size: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            aspect_ratio: (1, 1),
            font_size: 12,
        }
    }
}

/// Render a classified token as an SVG document.
///
/// One cell per byte of the normalized core: the nucleus color encodes the
/// high nibble, the six edge rects encode the low six bits. The format
/// label is drawn as a caption under the grid.
pub fn render(parsed: &Parsed, options: &RenderOptions) -> String {
    let bytes = parsed.core.as_bytes();
    let columns = grid_columns(bytes.len(), options.aspect_ratio);
    let rows = (bytes.len() + columns - 1) / columns.max(1);
    debug!(
        "rendering {} core bytes as a {}x{} grid",
        bytes.len(),
        columns,
        rows
    );

    let caption_height = f64::from(options.font_size) * 2.0;
    let size = Size::new(
        columns as f64 * CELL_WIDTH,
        rows as f64 * CELL_HEIGHT + caption_height,
    );
    let mut canvas = Canvas::new(size);
    canvas.rect(&Rect::new(Point::new(0.0, 0.0), size), "white");

    for (i, &byte) in bytes.iter().enumerate() {
        let col = i % columns;
        let row = i / columns;
        let cell = Cell::new(
            Point::new(col as f64 * CELL_WIDTH, row as f64 * CELL_HEIGHT),
            Size::new(CELL_WIDTH, CELL_HEIGHT),
        );
        draw_cell(&mut canvas, &cell, byte);
    }

    let caption_at = Point::new(
        size.width / 2.0,
        rows as f64 * CELL_HEIGHT + caption_height / 2.0,
    );
    canvas.text(caption_at, options.font_size, "black", &parsed.label);
    canvas.finish()
}

fn draw_cell(canvas: &mut Canvas, cell: &Cell, byte: u8) {
    let nucleus = PALETTE[(byte >> 4) as usize];
    canvas.rect(&cell.nucleus(), &colors::to_hex(nucleus));
    let edge_color = colors::to_hex(colors::contrast_color(nucleus));
    for edge in 0..6 {
        if byte & (1 << edge) != 0 {
            canvas.rect(&cell.edge_rect(edge), &edge_color);
        }
    }
}

/// Pick a column count so the grid approximates the requested proportion,
/// accounting for cells being twice as wide as tall.
fn grid_columns(count: usize, (ar_width, ar_height): (u32, u32)) -> usize {
    if count == 0 {
        return 1;
    }
    let ideal = (count as f64 * f64::from(ar_width) / (2.0 * f64::from(ar_height))).sqrt();
    (ideal.round() as usize).max(1).min(count)
}
