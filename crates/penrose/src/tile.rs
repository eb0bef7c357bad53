//! The two P3 tile variants and their inflation (substitution) rules.
//!
//! ## Rust Lesson #9: Enums with Data
//!
//! A JS version would use two classes and `instanceof` to pick a rule.
//! Here `Tile` is a sum type: each variant carries its triangle, and a
//! `match` picks the rule. The compiler rejects a `match` that forgets a
//! variant, so a third tile kind could never be silently ignored.

use crate::geometry::{Point, PSI, PSI2};
use crate::triangle::{ArcSegment, Triangle};

/// Which Robinson triangle a tile is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKind {
    /// Obtuse 1:1:φ triangle (apex 108°), half of a thick rhombus.
    Large,
    /// Acute 1:1:ψ triangle (apex 36°), half of a thin rhombus.
    Small,
}

impl TileKind {
    pub fn name(&self) -> &'static str {
        match self {
            TileKind::Large => "large",
            TileKind::Small => "small",
        }
    }
}

/// A tile of the ensemble: a Robinson triangle tagged with its variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tile {
    Large(Triangle),
    Small(Triangle),
}

impl Tile {
    /// Large tile with base vertices `a`, `c` and apex `b`.
    #[inline]
    pub fn large(a: Point, b: Point, c: Point) -> Self {
        Tile::Large(Triangle::new(a, b, c))
    }

    /// Small tile with base vertices `a`, `c` and apex `b`.
    #[inline]
    pub fn small(a: Point, b: Point, c: Point) -> Self {
        Tile::Small(Triangle::new(a, b, c))
    }

    #[inline]
    pub fn kind(&self) -> TileKind {
        match self {
            Tile::Large(_) => TileKind::Large,
            Tile::Small(_) => TileKind::Small,
        }
    }

    #[inline]
    pub fn triangle(&self) -> &Triangle {
        match self {
            Tile::Large(t) | Tile::Small(t) => t,
        }
    }

    /// Rhombus centre, used as the deduplication key.
    #[inline]
    pub fn centre(&self) -> Point {
        self.triangle().centre()
    }

    #[inline]
    pub fn path(&self, as_rhombus: bool) -> String {
        self.triangle().path(as_rhombus)
    }

    #[inline]
    pub fn arcs(&self, half_arc: bool) -> [ArcSegment; 2] {
        self.triangle().arcs(half_arc)
    }

    /// Same variant, mirrored about the x-axis.
    #[inline]
    pub fn conjugate(&self) -> Self {
        self.map(|p| p.conjugate())
    }

    /// Same variant with `f` applied to every vertex.
    #[inline]
    pub fn map<F>(&self, f: F) -> Self
    where
        F: Fn(Point) -> Point,
    {
        match self {
            Tile::Large(t) => Tile::Large(t.map(f)),
            Tile::Small(t) => Tile::Small(t.map(f)),
        }
    }

    /// Subdivide into the next generation of (smaller) tiles.
    ///
    /// Large → `Large(D, E, A)`, `Small(E, D, B)`, `Large(C, D, B)` with
    /// `D = ψ²A + ψC`, `E = ψ²A + ψB`.
    ///
    /// Small → `Small(D, C, A)`, `Large(C, D, B)` with `D = ψA + ψ²B`.
    ///
    /// Child order and vertex order are part of the rule: they keep every
    /// child's winding consistent for further inflation and arc placement.
    pub fn inflate(&self) -> Vec<Tile> {
        match *self {
            Tile::Large(Triangle { a, b, c }) => {
                let d = PSI2 * a + PSI * c;
                let e = PSI2 * a + PSI * b;
                vec![Tile::large(d, e, a), Tile::small(e, d, b), Tile::large(c, d, b)]
            }
            Tile::Small(Triangle { a, b, c }) => {
                let d = PSI * a + PSI2 * b;
                vec![Tile::small(d, c, a), Tile::large(c, d, b)]
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn large() -> Tile {
        Tile::large(
            Point::ZERO,
            Point::from_polar(1.0, PI / 5.0),
            Point::new(2.0 * (PI / 5.0).cos(), 0.0),
        )
    }

    fn small() -> Tile {
        Tile::small(Point::new(1.0, 0.0), Point::ZERO, Point::unit(PI / 5.0))
    }

    fn assert_angles(tile: &Tile) {
        let [a, b, c] = tile.triangle().interior_angles().map(f64::to_degrees);
        let (base, apex) = match tile.kind() {
            TileKind::Large => (36.0, 108.0),
            TileKind::Small => (72.0, 36.0),
        };
        assert_relative_eq!(a, base, epsilon = 1e-6);
        assert_relative_eq!(b, apex, epsilon = 1e-6);
        assert_relative_eq!(c, base, epsilon = 1e-6);
    }

    #[test]
    fn large_inflates_into_three() {
        let children = large().inflate();
        let kinds: Vec<_> = children.iter().map(Tile::kind).collect();
        assert_eq!(kinds, [TileKind::Large, TileKind::Small, TileKind::Large]);
    }

    #[test]
    fn small_inflates_into_two() {
        let children = small().inflate();
        let kinds: Vec<_> = children.iter().map(Tile::kind).collect();
        assert_eq!(kinds, [TileKind::Small, TileKind::Large]);
    }

    #[test]
    fn inflation_preserves_area() {
        for parent in [large(), small()] {
            let total: f64 = parent.inflate().iter().map(|t| t.triangle().area()).sum();
            assert_relative_eq!(total, parent.triangle().area(), epsilon = 1e-12);
        }
    }

    #[test]
    fn children_reuse_parent_vertices() {
        let Tile::Large(p) = large() else { unreachable!() };
        let children = large().inflate();
        assert_eq!(children[0].triangle().c, p.a);
        assert_eq!(children[1].triangle().c, p.b);
        assert_eq!(children[2].triangle().a, p.c);
        assert_eq!(children[2].triangle().c, p.b);
    }

    #[test]
    fn repeated_inflation_keeps_shapes() {
        for seed in [large(), small()] {
            let mut tiles = vec![seed];
            for _ in 0..5 {
                tiles = tiles.iter().flat_map(Tile::inflate).collect();
                tiles.iter().for_each(assert_angles);
            }
        }
    }

    #[test]
    fn child_legs_shrink_by_psi() {
        // Every rhombus edge in one generation has the same length.
        let leg = |t: &Tile| t.triangle().a.distance(t.triangle().b);
        for parent in [large(), small()] {
            for child in parent.inflate() {
                assert_relative_eq!(leg(&child), leg(&parent) * PSI, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn conjugate_keeps_variant() {
        assert_eq!(large().conjugate().kind(), TileKind::Large);
        assert_eq!(small().conjugate().kind(), TileKind::Small);
    }
}
