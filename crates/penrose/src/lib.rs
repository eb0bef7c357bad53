//! # penrose
//!
//! Penrose P3 (rhombus) tilings by Robinson-triangle inflation, rendered to SVG.
//!
//! ```no_run
//! use penrose::{Config, PenroseTiling, SeedShape};
//!
//! let mut tiling = PenroseTiling::new(100.0, 5, Config::default())?;
//! tiling.set_initial_tiles(SeedShape::Star.tiles(100.0))?;
//! tiling.build()?;
//! let svg = tiling.render()?;
//! # Ok::<(), penrose::TilingError>(())
//! ```
//!
//! ## Rust Lesson #7: Modules
//!
//! Every module is declared explicitly below. `pub use` re-exports the
//! everyday types at the crate root so callers can write `penrose::Tile`
//! instead of `penrose::tile::Tile`.

pub mod config;
pub mod error;
pub mod geometry;
pub mod seeds;
pub mod svg;
pub mod tile;
pub mod tiling;
pub mod triangle;

#[cfg(test)]
mod testutil;

// Re-export common types at crate root for convenience.
pub use config::{ColourFn, Config, TileColour};
pub use error::TilingError;
pub use geometry::{Point, PHI, PSI, TOL};
pub use seeds::SeedShape;
pub use svg::render_svg;
pub use tile::{Tile, TileKind};
pub use tiling::PenroseTiling;
pub use triangle::{ArcSegment, Triangle};
