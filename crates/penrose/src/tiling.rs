//! The tiling engine: owns the tile ensemble and drives the build pipeline.
//!
//! Lifecycle: construct → seed ([`PenroseTiling::set_initial_tiles`]) →
//! [`PenroseTiling::build`] → [`PenroseTiling::render`]. The individual
//! steps are public too, for callers that want a different pipeline.
//!
//! ## Rust Lesson #12: `&mut self` vs `&self`
//!
//! `inflate`, `rotate` and friends take `&mut self`: they rewrite the
//! ensemble in place. `render` only takes `&self`, so the borrow checker
//! guarantees rendering can never change the tiles it draws.

use std::cmp::Ordering;

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::TilingError;
use crate::geometry::{Point, TOL};
use crate::svg::render_svg;
use crate::tile::Tile;

/// Generation counts above this get a warning: tile counts grow by about φ² per generation.
const DEEP_GENERATIONS: u32 = 10;

/// A Penrose P3 tiling under construction.
#[derive(Debug, Clone)]
pub struct PenroseTiling {
    scale: f64,
    ngen: u32,
    config: Config,
    tiles: Vec<Tile>,
}

impl PenroseTiling {
    /// Create an engine for a figure of size `scale`, inflated `ngen` times.
    pub fn new(scale: f64, ngen: u32, config: Config) -> Result<Self, TilingError> {
        if !(scale.is_finite() && scale > 0.0) {
            return Err(TilingError::InvalidScale(scale));
        }
        config.validate()?;
        if ngen > DEEP_GENERATIONS {
            warn!(ngen, "deep generation count, expect a very large tile ensemble");
        }

        Ok(Self {
            scale,
            ngen,
            config,
            tiles: Vec::new(),
        })
    }

    /// Replace the ensemble with caller-supplied seed tiles.
    ///
    /// Only finiteness is checked; the seed's geometric consistency is up to
    /// the caller.
    pub fn set_initial_tiles<I>(&mut self, tiles: I) -> Result<(), TilingError>
    where
        I: IntoIterator<Item = Tile>,
    {
        let tiles: Vec<Tile> = tiles.into_iter().collect();
        if let Some(index) = tiles.iter().position(|t| !t.triangle().is_finite()) {
            return Err(TilingError::NonFiniteVertex { index });
        }
        self.tiles = tiles;
        Ok(())
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn ngen(&self) -> u32 {
        self.ngen
    }

    /// One generation: every tile is replaced by its children, in order.
    pub fn inflate(&mut self) {
        let mut next = Vec::with_capacity(self.tiles.len() * 3);
        for tile in &self.tiles {
            next.extend(tile.inflate());
        }
        self.tiles = next;
    }

    /// Drop tiles whose rhombus is already represented.
    ///
    /// Tiles are sorted by centre (x first, y when the x values are within
    /// [`TOL`]) and a tile is kept only if its centre is more than `TOL`
    /// from the last kept one. Only neighbours in sort order are compared.
    pub fn remove_duplicates(&mut self) {
        let before = self.tiles.len();
        let sorted = merge_sort_by(std::mem::take(&mut self.tiles), &compare_centres);

        let mut kept: Vec<Tile> = Vec::with_capacity(sorted.len());
        for tile in sorted {
            match kept.last() {
                Some(last) if tile.centre().distance(last.centre()) <= TOL => {}
                _ => kept.push(tile),
            }
        }
        self.tiles = kept;
        debug!(before, after = self.tiles.len(), "removed duplicate tiles");
    }

    /// Append the mirror image (about the x-axis) of every tile.
    pub fn add_conjugate_elements(&mut self) {
        let mirrored: Vec<Tile> = self.tiles.iter().map(Tile::conjugate).collect();
        self.tiles.extend(mirrored);
    }

    /// Rotate the whole figure counter-clockwise about the origin by `theta` radians.
    pub fn rotate(&mut self, theta: f64) {
        let rotation = Point::unit(theta);
        self.transform(|p| p * rotation);
        debug!(theta, "rotated");
    }

    /// Flip about the y-axis (negate every x).
    pub fn flip_y(&mut self) {
        self.transform(|p| Point::new(-p.x, p.y));
        debug!("flipped about the y-axis");
    }

    /// Flip about the x-axis (conjugate every vertex).
    pub fn flip_x(&mut self) {
        self.transform(|p| p.conjugate());
        debug!("flipped about the x-axis");
    }

    fn transform<F>(&mut self, f: F)
    where
        F: Fn(Point) -> Point,
    {
        for tile in &mut self.tiles {
            *tile = tile.map(&f);
        }
    }

    /// Run the full pipeline on the seeded ensemble.
    ///
    /// `ngen` inflations, then (in this order, each when configured):
    /// rhombus dedup, reflection plus dedup, rotation, y-flip, x-flip.
    pub fn build(&mut self) -> Result<(), TilingError> {
        if self.tiles.is_empty() {
            return Err(TilingError::EmptyEnsemble);
        }

        for generation in 1..=self.ngen {
            self.inflate();
            debug!(generation, tiles = self.tiles.len(), "inflated");
        }

        if self.config.draw_rhombuses {
            self.remove_duplicates();
        }
        if self.config.reflect_x {
            self.add_conjugate_elements();
            self.remove_duplicates();
        }
        if self.config.rotate != 0.0 {
            self.rotate(self.config.rotate);
        }
        if self.config.flip_y {
            self.flip_y();
        }
        if self.config.flip_x {
            self.flip_x();
        }

        info!(ngen = self.ngen, tiles = self.tiles.len(), "built tiling");
        Ok(())
    }

    /// Serialize the current ensemble as an SVG document.
    ///
    /// Deterministic unless `random-tile-colours` is set without a `colour-seed`.
    pub fn render(&self) -> Result<String, TilingError> {
        render_svg(&self.tiles, &self.config, self.scale, self.ngen)
    }
}

/// Order by centre: x, then y for x values within [`TOL`]; ties only when both are.
fn compare_centres(a: &Tile, b: &Tile) -> Ordering {
    let (p, q) = (a.centre(), b.centre());
    if (p.x - q.x).abs() >= TOL {
        return p.x.total_cmp(&q.x);
    }
    if (p.y - q.y).abs() >= TOL {
        return p.y.total_cmp(&q.y);
    }
    Ordering::Equal
}

// The tolerance comparator is not transitive, and std's sorts may panic on
// an inconsistent order, so a plain stable merge sort is used instead.
fn merge_sort_by<T, F>(mut items: Vec<T>, compare: &F) -> Vec<T>
where
    T: Copy,
    F: Fn(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return items;
    }

    let right = merge_sort_by(items.split_off(items.len() / 2), compare);
    let left = merge_sort_by(items, compare);

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        if compare(&right[j], &left[i]) == Ordering::Less {
            merged.push(right[j]);
            j += 1;
        } else {
            merged.push(left[i]);
            i += 1;
        }
    }
    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);
    merged
}

// ============================================================================
// TESTS
// ============================================================================
