//! Robinson triangles: the geometric half of every rhombus tile.
//!
//! A triangle stores its vertices in a fixed order: `a` and `c` sit at the
//! two equal base angles and `b` at the apex. The ordering (and therefore
//! the winding) is what later inflation and arc placement rely on, so no
//! operation here ever reorders vertices.

use crate::geometry::Point;

/// An oriented triangle `A, B, C` with apex `B`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub a: Point,
    pub b: Point,
    pub c: Point,
}

/// A circular arc between two sides of a tile, as drawn by SVG `A`.
///
/// The arc is always the minor arc, swept clockwise in the y-up sense
/// (SVG flags `large-arc = 0`, `sweep = 0`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSegment {
    pub start: Point,
    pub radius: f64,
    pub end: Point,
}

impl ArcSegment {
    /// SVG path data: `M x y A r r 0 0 0 x2 y2`.
    pub fn path_data(&self) -> String {
        format!(
            "M {} {} A {} {} 0 0 0 {} {}",
            self.start.x, self.start.y, self.radius, self.radius, self.end.x, self.end.y
        )
    }
}

impl Triangle {
    #[inline]
    pub const fn new(a: Point, b: Point, c: Point) -> Self {
        Self { a, b, c }
    }

    /// Midpoint of the base `A`–`C`.
    ///
    /// A triangle and its mirror image across the base share this point,
    /// so it identifies the rhombus they form.
    #[inline]
    pub fn centre(&self) -> Point {
        self.a.midpoint(self.c)
    }

    /// The fourth rhombus vertex `D = A - B + C` (B reflected through the centre).
    #[inline]
    pub fn opposite_apex(&self) -> Point {
        self.a - self.b + self.c
    }

    /// Outline as relative SVG path data.
    ///
    /// With `as_rhombus` the outline covers this triangle and its
    /// base-mirrored twin: `m A l (B-A) l (C-B) l (A-B) z`. Otherwise it is
    /// the bare triangle `m A l (B-A) l (C-B) z`.
    pub fn path(&self, as_rhombus: bool) -> String {
        let ab = self.b - self.a;
        let bc = self.c - self.b;

        let mut d = format!("m{},{} l{},{} l{},{}", self.a.x, self.a.y, ab.x, ab.y, bc.x, bc.y);
        if as_rhombus {
            d.push_str(&format!(" l{},{}", -ab.x, -ab.y));
        }
        d.push('z');
        d
    }

    /// Arc about vertex `u` between sides `u→v` and `u→w`.
    ///
    /// Starts at the midpoint of `UV` and ends at the midpoint of `UW`, with
    /// radius `|V - U| / 2`. With `half_arc` the end point is moved onto the
    /// bisector direction `V + W - 2U`, which is the arc's extent inside a
    /// single triangle rather than a whole rhombus. Endpoints are swapped
    /// when needed so the arc always sweeps clockwise through the minor angle.
    pub fn arc(u: Point, v: Point, w: Point, half_arc: bool) -> ArcSegment {
        let mut start = u.midpoint(v);
        let mut end = u.midpoint(w);
        let radius = ((v - u) / 2.0).magnitude();

        if half_arc {
            let bisector = v + w - u * 2.0;
            end = u + bisector * (radius / bisector.magnitude());
        }

        if (start - u).cross(end - u) > 0.0 {
            std::mem::swap(&mut start, &mut end);
        }

        ArcSegment { start, radius, end }
    }

    /// The two matching-rule arcs, anchored at `A` and at `C`.
    pub fn arcs(&self, half_arc: bool) -> [ArcSegment; 2] {
        let d = self.opposite_apex();
        [
            Self::arc(self.a, self.b, d, half_arc),
            Self::arc(self.c, self.b, d, half_arc),
        ]
    }

    /// Mirror image about the x-axis (every vertex conjugated).
    #[inline]
    pub fn conjugate(&self) -> Self {
        self.map(|p| p.conjugate())
    }

    /// Apply `f` to every vertex, keeping the vertex order.
    #[inline]
    pub fn map<F>(&self, f: F) -> Self
    where
        F: Fn(Point) -> Point,
    {
        Self::new(f(self.a), f(self.b), f(self.c))
    }

    /// Unsigned area.
    pub fn area(&self) -> f64 {
        ((self.b - self.a).cross(self.c - self.a) / 2.0).abs()
    }

    /// Interior angles at `A`, `B` and `C`, in radians.
    pub fn interior_angles(&self) -> [f64; 3] {
        let angle = |at: Point, p: Point, q: Point| {
            let u = p - at;
            let v = q - at;
            u.cross(v).abs().atan2(u.x * v.x + u.y * v.y)
        };
        [
            angle(self.a, self.b, self.c),
            angle(self.b, self.c, self.a),
            angle(self.c, self.a, self.b),
        ]
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.a.is_finite() && self.b.is_finite() && self.c.is_finite()
    }
}

// ============================================================================
// TESTS
// ============================================================================
