//! Planar point arithmetic for penrose.
//!
//! Tile vertices live in the complex plane: a `Point` is `x + iy`, so
//! rotating the whole figure is a single complex multiplication.
//!
//! ## Rust Lesson #3: Operator Overloading
//!
//! In JS you'd write `a.add(b).scale(0.5)`.
//! In Rust, implementing the `std::ops` traits (`Add`, `Sub`, `Mul`, ...)
//! lets you write `(a + b) * 0.5` and the compiler calls your impls.
//! Because `Point` is `Copy`, operands are copied, never moved away.

use std::ops::{Add, Div, Mul, Neg, Sub};

/// Tolerance for every "same point" / "same centre" comparison.
pub const TOL: f64 = 1e-5;

/// The golden ratio, `(1 + √5) / 2`.
pub const PHI: f64 = 1.618_033_988_749_895;

/// Reciprocal golden ratio, `(√5 - 1) / 2`. Scale factor between generations.
pub const PSI: f64 = 0.618_033_988_749_895;

/// `ψ² = 1 - ψ`.
pub const PSI2: f64 = 1.0 - PSI;

/// A 2D point, treated as the complex number `x + iy`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// The origin.
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at distance `r` from the origin, at angle `theta` (radians).
    #[inline]
    pub fn from_polar(r: f64, theta: f64) -> Self {
        Self::new(r * theta.cos(), r * theta.sin())
    }

    /// The unit complex number `cos θ + i sin θ`.
    #[inline]
    pub fn unit(theta: f64) -> Self {
        Self::from_polar(1.0, theta)
    }

    /// Modulus `sqrt(x² + y²)`.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Complex conjugate: reflection about the x-axis.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(self.x, -self.y)
    }

    /// Midpoint of the segment to `other`.
    #[inline]
    pub fn midpoint(&self, other: Point) -> Self {
        (*self + other) / 2.0
    }

    /// 2D cross product `a.x * b.y - a.y * b.x`.
    ///
    /// Positive when `other` lies counter-clockwise of `self`.
    #[inline]
    pub fn cross(&self, other: Point) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance(&self, other: Point) -> f64 {
        (*self - other).magnitude()
    }

    /// True when both points agree to within [`TOL`].
    #[inline]
    pub fn approx_eq(&self, other: Point) -> bool {
        self.distance(other) < TOL
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point {
    type Output = Point;

    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Point {
    type Output = Point;

    #[inline]
    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    #[inline]
    fn mul(self, k: f64) -> Point {
        Point::new(self.x * k, self.y * k)
    }
}

impl Mul<Point> for f64 {
    type Output = Point;

    #[inline]
    fn mul(self, p: Point) -> Point {
        p * self
    }
}

/// Complex multiplication: `(a+bi)(c+di) = (ac-bd) + (ad+bc)i`.
impl Mul for Point {
    type Output = Point;

    #[inline]
    fn mul(self, rhs: Point) -> Point {
        Point::new(
            self.x * rhs.x - self.y * rhs.y,
            self.x * rhs.y + self.y * rhs.x,
        )
    }
}

impl Div<f64> for Point {
    type Output = Point;

    #[inline]
    fn div(self, k: f64) -> Point {
        Point::new(self.x / k, self.y / k)
    }
}

/// Complex division `p / c = p·conj(c) / |c|²`.
///
/// Dividing by the origin yields non-finite coordinates.
impl Div for Point {
    type Output = Point;

    #[inline]
    fn div(self, rhs: Point) -> Point {
        let norm_sq = rhs.x * rhs.x + rhs.y * rhs.y;
        (self * rhs.conjugate()) / norm_sq
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

    #[test]
    fn golden_ratio_constants() {
        assert_relative_eq!(PSI, (5f64.sqrt() - 1.0) / 2.0);
        assert_relative_eq!(PHI, 1.0 / PSI, epsilon = 1e-12);
        assert_relative_eq!(PSI2, PSI * PSI, epsilon = 1e-12);
    }

    #[test]
    fn point_distance() {
        let p1 = Point::new(0.0, 0.0);
        let p2 = Point::new(3.0, 4.0);
        assert_eq!(p1.distance(p2), 5.0); // 3-4-5 triangle
    }

    #[test]
    fn vector_arithmetic() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(3.0, -1.0);
        assert_eq!(a + b, Point::new(4.0, 1.0));
        assert_eq!(a - b, Point::new(-2.0, 3.0));
        assert_eq!(-a, Point::new(-1.0, -2.0));
        assert_eq!(a * 2.0, Point::new(2.0, 4.0));
        assert_eq!(0.5 * b, Point::new(1.5, -0.5));
        assert_eq!(a.midpoint(b), Point::new(2.0, 0.5));
    }

    #[test]
    fn complex_multiplication() {
        // (1+2i)(3+4i) = 3 + 4i + 6i + 8i² = -5 + 10i
        let p = Point::new(1.0, 2.0) * Point::new(3.0, 4.0);
        assert_eq!(p, Point::new(-5.0, 10.0));
    }

    #[test]
    fn complex_division_inverts_multiplication() {
        let a = Point::new(1.5, -2.0);
        let c = Point::new(0.3, 0.7);
        let back = (a * c) / c;
        assert_relative_eq!(back.x, a.x, epsilon = 1e-12);
        assert_relative_eq!(back.y, a.y, epsilon = 1e-12);
    }

    #[test]
    fn division_by_origin_is_not_finite() {
        let p = Point::new(1.0, 1.0) / Point::ZERO;
        assert!(!p.is_finite());
    }

    #[test]
    fn unit_rotation() {
        let p = Point::new(2.0, 0.0) * Point::unit(PI / 2.0);
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn magnitude_and_conjugate() {
        let p = Point::new(-3.0, 4.0);
        assert_eq!(p.magnitude(), 5.0);
        assert_eq!(p.conjugate(), Point::new(-3.0, -4.0));
    }

    #[test]
    fn cross_sign_follows_orientation() {
        let x = Point::new(1.0, 0.0);
        let y = Point::new(0.0, 1.0);
        assert_eq!(x.cross(y), 1.0);
        assert_eq!(y.cross(x), -1.0);
        assert_eq!(x.cross(x * 3.0), 0.0);
    }

    #[test]
    fn approx_eq_uses_tolerance() {
        let p = Point::new(1.0, 1.0);
        assert!(p.approx_eq(Point::new(1.0 + TOL / 10.0, 1.0)));
        assert!(!p.approx_eq(Point::new(1.0 + TOL * 10.0, 1.0)));
    }
}
