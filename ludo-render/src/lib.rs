//! Raster rendering of a Ludo board snapshot.
//!
//! Consumes [`BoardSnapshot`] values from `ludo-core` and produces an RGBA
//! pixmap: one colored square per cell, gray grid strokes, and a filled
//! circle per piece. Encoding is deterministic for the same input.

use ludo_core::{BoardSnapshot, Color, BOARD_SIZE, CELL_COUNT, cell_col, cell_row};
use png::{BitDepth, ColorType, Compression, Encoder, FilterType};
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Rect, Stroke, Transform};

/// Default edge length of one cell, in pixels.
pub const DEFAULT_CELL_PX: u32 = 40;

const GRID_GRAY: (u8, u8, u8) = (128, 128, 128);
const GRID_STROKE_WIDTH: f32 = 0.5;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("snapshot has {got} cells, expected {expected}")]
    BadSnapshot { expected: usize, got: usize },

    #[error("failed to allocate a {width}x{height} pixmap")]
    PixmapAlloc { width: u32, height: u32 },

    #[error("cell geometry degenerate at cell size {cell_px}")]
    Geometry { cell_px: u32 },

    #[error("PNG encoding failed: {0}")]
    Encode(#[from] png::EncodingError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn rgb(color: Color) -> (u8, u8, u8) {
    // CSS named-color values, matching how the cells have always been drawn.
    match color {
        Color::Green => (0, 128, 0),
        Color::Red => (255, 0, 0),
        Color::Yellow => (255, 255, 0),
        Color::Blue => (0, 0, 255),
        Color::Black => (0, 0, 0),
        Color::White => (255, 255, 255),
    }
}

fn solid_paint(color: (u8, u8, u8), anti_alias: bool) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.0, color.1, color.2, 255);
    paint.anti_alias = anti_alias;
    paint
}

/// Rasterize a full board snapshot at `cell_px` pixels per cell.
pub fn render(snapshot: &BoardSnapshot, cell_px: u32) -> Result<Pixmap, RenderError> {
    if snapshot.cells.len() != CELL_COUNT as usize {
        return Err(RenderError::BadSnapshot {
            expected: CELL_COUNT as usize,
            got: snapshot.cells.len(),
        });
    }
    let side = BOARD_SIZE as u32 * cell_px;
    let mut pixmap = Pixmap::new(side, side).ok_or(RenderError::PixmapAlloc {
        width: side,
        height: side,
    })?;

    let cell = cell_px as f32;
    let grid_paint = solid_paint(GRID_GRAY, false);
    let stroke = Stroke {
        width: GRID_STROKE_WIDTH,
        ..Stroke::default()
    };

    for (i, &color) in snapshot.cells.iter().enumerate() {
        let idx = i as u16 + 1;
        let x = cell_col(idx) as f32 * cell;
        let y = cell_row(idx) as f32 * cell;
        let rect =
            Rect::from_xywh(x, y, cell, cell).ok_or(RenderError::Geometry { cell_px })?;
        pixmap.fill_rect(
            rect,
            &solid_paint(rgb(color), false),
            Transform::identity(),
            None,
        );
        pixmap.stroke_path(
            &PathBuilder::from_rect(rect),
            &grid_paint,
            &stroke,
            Transform::identity(),
            None,
        );
    }

    for piece in &snapshot.pieces {
        let cx = cell_col(piece.position) as f32 * cell + cell / 2.0;
        let cy = cell_row(piece.position) as f32 * cell + cell / 2.0;
        let circle = PathBuilder::from_circle(cx, cy, cell / 4.0)
            .ok_or(RenderError::Geometry { cell_px })?;
        pixmap.fill_path(
            &circle,
            &solid_paint(rgb(piece.color), true),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }

    Ok(pixmap)
}

/// RGBA pixmap -> PNG bytes with fixed encoder settings, so equal snapshots
/// encode to equal bytes.
pub fn encode_png(pixmap: &Pixmap) -> Result<Vec<u8>, RenderError> {
    let mut buf = Vec::new();
    {
        let mut enc = Encoder::new(&mut buf, pixmap.width(), pixmap.height());
        enc.set_color(ColorType::Rgba);
        enc.set_depth(BitDepth::Eight);
        enc.set_filter(FilterType::NoFilter);
        enc.set_compression(Compression::Default);
        let mut writer = enc.write_header()?;
        writer.write_image_data(pixmap.data())?;
    }
    Ok(buf)
}

/// Overwrite `path` with the PNG encoding of `pixmap`. The single output
/// file is the whole persistence story; no history is kept.
pub fn write_png(pixmap: &Pixmap, path: &str) -> Result<(), RenderError> {
    let bytes = encode_png(pixmap)?;
    std::fs::write(path, bytes)?;
    Ok(())
}
