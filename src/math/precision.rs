//! Software double-double arithmetic and the exact-ish predicates built on it.
//!
//! Based on Dekker's splitting and the error-free transformations described by
//! Muller (Elementary Functions) and Li et al. (extended precision BLAS).

use std::ops::{Add, Mul, Neg, Sub};

use super::{Vector2, Vector3};

/// A value represented as the unevaluated sum `high + low`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DoublePrecision {
    high: f64,
    low: f64,
}

impl DoublePrecision {
    /// Veltkamp splitting constant `2^(p - floor(p / 2)) + 1`.
    pub const SPLITTER: f64 = ((1u64 << (f64::MANTISSA_DIGITS - f64::MANTISSA_DIGITS / 2)) + 1) as f64;

    /// Splits `value` into a head and tail of half the mantissa each.
    #[must_use]
    pub fn new(value: f64) -> Self {
        let (high, low) = Self::split(value);
        Self { high, low }
    }

    /// Veltkamp split of `value` into `(high, low)` with `high + low == value`.
    #[must_use]
    pub fn split(value: f64) -> (f64, f64) {
        let t = Self::SPLITTER * value;
        let high = t - (t - value);
        (high, value - high)
    }

    /// Error-free sum, requires `|x| >= |y|`.
    #[must_use]
    pub fn fast_two_sum(x: f64, y: f64) -> Self {
        let s = x + y;
        let e = y - (s - x);
        Self { high: s, low: e }
    }

    /// Error-free sum.
    #[must_use]
    pub fn two_sum(x: f64, y: f64) -> Self {
        let s = x + y;
        let v = s - x;
        let e = (x - (s - v)) + (y - v);
        Self { high: s, low: e }
    }

    /// Error-free product.
    #[must_use]
    pub fn two_product(x: f64, y: f64) -> Self {
        let p = x * y;
        let e = x.mul_add(y, -p);
        Self { high: p, low: e }
    }

    /// Leading component.
    #[must_use]
    pub fn high(&self) -> f64 {
        self.high
    }

    /// Rounding error carried along with [`high`](Self::high).
    #[must_use]
    pub fn low(&self) -> f64 {
        self.low
    }

    /// Rounds the value back to a single `f64`.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.high + self.low
    }
}

impl Add for DoublePrecision {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let s = Self::two_sum(self.high, rhs.high);
        let t = Self::two_sum(self.low, rhs.low);
        let v = Self::fast_two_sum(s.high, s.low + t.high);
        Self::fast_two_sum(v.high, v.low + t.low)
    }
}

impl Neg for DoublePrecision {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            high: -self.high,
            low: -self.low,
        }
    }
}

impl Sub for DoublePrecision {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

impl Mul for DoublePrecision {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let c = Self::two_product(self.high, rhs.high);
        let cc = (self.high * rhs.low + self.low * rhs.high) + c.low;
        Self::fast_two_sum(c.high, cc)
    }
}

/// Orientation of the 2D triangle `(a, b, c)`: twice its signed area,
/// evaluated in double-double precision.
///
/// Ref: J.R. Shewchuk, Lecture Notes on Geometric Robustness.
#[must_use]
pub fn orient2d(a: &Vector2, b: &Vector2, c: &Vector2) -> f64 {
    let ax = DoublePrecision::new(a.x);
    let ay = DoublePrecision::new(a.y);
    let bx = DoublePrecision::new(b.x);
    let by = DoublePrecision::new(b.y);
    let cx = DoublePrecision::new(c.x);
    let cy = DoublePrecision::new(c.y);

    ((ax - cx) * (by - cy) - (ay - cy) * (bx - cx)).value()
}

/// Unit normal of the triangle `(a, b, c)` assembled from the three
/// coordinate-plane orientations.
#[must_use]
pub fn triangle_normal(a: &Vector3, b: &Vector3, c: &Vector3) -> Vector3 {
    let xy = orient2d(&a.xy(), &b.xy(), &c.xy());
    let yz = orient2d(
        &Vector2::new(a.y, a.z),
        &Vector2::new(b.y, b.z),
        &Vector2::new(c.y, c.z),
    );
    let zx = orient2d(
        &Vector2::new(a.z, a.x),
        &Vector2::new(b.z, b.x),
        &Vector2::new(c.z, c.x),
    );

    Vector3::new(yz, zx, xy).normalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn split_is_exact() {
        let value = std::f64::consts::PI;
        let (high, low) = DoublePrecision::split(value);
        assert_eq!(high + low, value);
        assert!(low.abs() < high.abs() * 1e-7);
    }

    #[test]
    fn two_sum_recovers_rounding_error() {
        let sum = DoublePrecision::two_sum(1.0, 1e-17);
        assert_eq!(sum.high(), 1.0);
        assert_eq!(sum.low(), 1e-17);
    }

    #[test]
    fn two_product_keeps_low_part() {
        let x = 1.0 + f64::EPSILON;
        let p = DoublePrecision::two_product(x, x);
        // (1 + e)^2 = 1 + 2e + e^2, the e^2 term lives in the tail
        assert_eq!(p.high(), 1.0 + 2.0 * f64::EPSILON);
        assert_eq!(p.low(), f64::EPSILON * f64::EPSILON);
    }

    #[test]
    fn difference_of_products() {
        let a = DoublePrecision::new(3.0);
        let b = DoublePrecision::new(0.1);
        let c = DoublePrecision::new(0.3);
        let d = DoublePrecision::new(1.0);
        assert!((a * b - c * d).value().abs() < 1e-16);
    }

    #[test]
    fn orient2d_sign() {
        let a = Vector2::new(0.0, 0.0);
        let b = Vector2::new(1.0, 0.0);
        let c = Vector2::new(0.0, 1.0);
        assert_relative_eq!(orient2d(&a, &b, &c), 1.0);
        assert_relative_eq!(orient2d(&a, &c, &b), -1.0);
        assert_eq!(orient2d(&a, &b, &Vector2::new(2.0, 0.0)), 0.0);
    }

    #[test]
    fn orient2d_nearly_collinear() {
        let a = Vector2::new(0.5, 0.5);
        let b = Vector2::new(12.0, 12.0);
        let c = Vector2::new(24.0, 24.0 + 1e-14);
        assert!(orient2d(&a, &b, &c) > 0.0);
    }

    #[test]
    fn triangle_normal_of_xy_triangle() {
        let n = triangle_normal(
            &Vector3::new(0.0, 0.0, 0.0),
            &Vector3::new(1.0, 0.0, 0.0),
            &Vector3::new(0.0, 1.0, 0.0),
        );
        assert_relative_eq!(n, Vector3::z());
    }
}
