//! Secondary outputs: PNG rasterization and JSON tile export.

use std::fs;

use resvg::usvg;
use serde::Serialize;
use tiny_skia::Pixmap;

use penrose::{PenroseTiling, Point, SeedShape, Tile};

/// Rasterize an SVG document at `scale` pixels per user unit.
///
/// Returns the pixel dimensions written.
pub fn write_png(svg: &str, png_path: &str, scale: f64) -> Result<(u32, u32), String> {
    let tree = usvg::Tree::from_str(svg, &usvg::Options::default())
        .map_err(|e| format!("Failed to parse SVG for PNG: {}", e))?;

    let size = tree.size();
    let width = (size.width() as f64 * scale).ceil() as u32;
    let height = (size.height() as f64 * scale).ceil() as u32;

    // Transparent background.
    let mut pixmap = Pixmap::new(width, height)
        .ok_or_else(|| format!("Could not create a {}x{} pixmap", width, height))?;

    let transform = tiny_skia::Transform::from_scale(scale as f32, scale as f32);
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    pixmap
        .save_png(png_path)
        .map_err(|e| format!("Failed to write {}: {}", png_path, e))?;
    Ok((width, height))
}

/// JSON export of a built tiling.
#[derive(Debug, Serialize)]
pub struct TilingExport {
    pub generated_at: String,
    pub shape: &'static str,
    pub generations: u32,
    pub scale: f64,
    pub tile_count: usize,
    pub tiles: Vec<TileRecord>,
}

/// One tile: its kind and vertices as `[x, y]` pairs.
#[derive(Debug, Serialize)]
pub struct TileRecord {
    pub kind: &'static str,
    pub a: [f64; 2],
    pub b: [f64; 2],
    pub c: [f64; 2],
}

impl From<&Tile> for TileRecord {
    fn from(tile: &Tile) -> Self {
        let xy = |p: Point| [p.x, p.y];
        let t = tile.triangle();
        Self {
            kind: tile.kind().name(),
            a: xy(t.a),
            b: xy(t.b),
            c: xy(t.c),
        }
    }
}

impl TilingExport {
    pub fn new(tiling: &PenroseTiling, shape: SeedShape) -> Self {
        Self {
            generated_at: chrono::Utc::now().to_rfc3339(),
            shape: shape.name(),
            generations: tiling.ngen(),
            scale: tiling.scale(),
            tile_count: tiling.len(),
            tiles: tiling.tiles().iter().map(TileRecord::from).collect(),
        }
    }
}

pub fn write_json(export: &TilingExport, path: &str) -> Result<(), String> {
    let json = serde_json::to_string_pretty(export).map_err(|e| format!("Failed to serialize tiles: {}", e))?;
    fs::write(path, json).map_err(|e| format!("Failed to write {}: {}", path, e))
}

// ============================================================================
// TESTS
// ============================================================================
