//! Standard seed ensembles.
//!
//! Both seeds are half-figures centred on the origin: they rely on the
//! x-axis reflection (`reflect-x`, on by default) to become the full
//! five-fold symmetric figure.

use std::f64::consts::PI;

use crate::geometry::{Point, PSI};
use crate::tile::Tile;

/// Available seed figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedShape {
    /// Five thick rhombuses meeting at the origin.
    Star,
    /// Ten thin half-rhombuses forming a decagon.
    Sun,
}

impl SeedShape {
    /// Get all available seed shapes.
    pub fn all() -> &'static [SeedShape] {
        &[SeedShape::Star, SeedShape::Sun]
    }

    pub fn name(&self) -> &'static str {
        match self {
            SeedShape::Star => "star",
            SeedShape::Sun => "sun",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SeedShape::Star => "Five thick rhombuses around the origin (large tiles)",
            SeedShape::Sun => "Decagon of ten thin half-rhombuses (small tiles)",
        }
    }

    /// Parse a seed shape from its name.
    pub fn from_name(name: &str) -> Option<SeedShape> {
        match name.to_lowercase().as_str() {
            "star" | "large" => Some(SeedShape::Star),
            "sun" | "decagon" | "small" => Some(SeedShape::Sun),
            _ => None,
        }
    }

    /// Seed tiles for a figure of radius `scale`.
    pub fn tiles(&self, scale: f64) -> Vec<Tile> {
        match self {
            SeedShape::Star => star(scale),
            SeedShape::Sun => sun(scale),
        }
    }
}

/// Five large tiles, one half of each star rhombus.
///
/// Tile `k` has `A` at the origin, its far vertex `C` at `scale` along angle
/// `72k°` and its apex `B` at `ψ·scale` along angle `72k° + 36°`.
pub fn star(scale: f64) -> Vec<Tile> {
    let step = 2.0 * PI / 5.0;
    (0..5)
        .map(|k| {
            let theta = step * k as f64;
            Tile::large(
                Point::ZERO,
                Point::from_polar(scale * PSI, theta + step / 2.0),
                Point::from_polar(scale, theta),
            )
        })
        .collect()
}

/// Five small tiles with their apex at the origin, covering the upper half plane.
///
/// Base vertices sit on the circle of radius `scale` at multiples of 36°.
/// Neighbours share a leg and alternate their winding, as a thin rhombus
/// pair would.
pub fn sun(scale: f64) -> Vec<Tile> {
    let rot = Point::unit(PI / 5.0);
    let a1 = Point::new(scale, 0.0);
    let c1 = a1 * rot;
    let a2 = c1 * rot;
    let c3 = a2 * rot;
    let a4 = c3 * rot;
    let c5 = -a1;

    vec![
        Tile::small(a1, Point::ZERO, c1),
        Tile::small(a2, Point::ZERO, c1),
        Tile::small(a2, Point::ZERO, c3),
        Tile::small(a4, Point::ZERO, c3),
        Tile::small(a4, Point::ZERO, c5),
    ]
}
