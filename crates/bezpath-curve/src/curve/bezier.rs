//! Quadratic and cubic Bezier curves.
//!
//! Both are evaluated with the Bernstein form per coordinate axis, so the
//! z component is carried through unchanged in meaning even when callers
//! only work in the XY plane.

use bezpath_math::{Point3, Vector3};
use serde::{Deserialize, Serialize};

use super::Curve;

/// A quadratic Bezier curve: starts at `p0`, pulled toward `p1`, ends at `p2`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuadraticBezier {
    pub p0: Point3,
    pub p1: Point3,
    pub p2: Point3,
}

impl QuadraticBezier {
    pub fn new(p0: Point3, p1: Point3, p2: Point3) -> Self {
        Self { p0, p1, p2 }
    }
}

impl Curve for QuadraticBezier {
    /// `B(t) = (1-t)^2 P0 + 2(1-t)t P1 + t^2 P2`
    fn point_at(&self, t: f64) -> Point3 {
        let mt = 1.0 - t;
        mt.powi(2) * self.p0 + 2.0 * mt * t * self.p1 + t.powi(2) * self.p2
    }

    fn tangent_at(&self, t: f64) -> Vector3 {
        let mt = 1.0 - t;
        2.0 * (mt * (self.p1 - self.p0) + t * (self.p2 - self.p1))
    }
}

/// A cubic Bezier curve from `p0` to `p3` with handles `p1` and `p2`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicBezier {
    pub p0: Point3,
    pub p1: Point3,
    pub p2: Point3,
    pub p3: Point3,
}

impl CubicBezier {
    pub fn new(p0: Point3, p1: Point3, p2: Point3, p3: Point3) -> Self {
        Self { p0, p1, p2, p3 }
    }
}

impl Curve for CubicBezier {
    /// `B(t) = (1-t)^3 P0 + 3(1-t)^2 t P1 + 3(1-t) t^2 P2 + t^3 P3`
    fn point_at(&self, t: f64) -> Point3 {
        let mt = 1.0 - t;
        mt.powi(3) * self.p0
            + 3.0 * mt.powi(2) * t * self.p1
            + 3.0 * mt * t.powi(2) * self.p2
            + t.powi(3) * self.p3
    }

    fn tangent_at(&self, t: f64) -> Vector3 {
        let mt = 1.0 - t;
        3.0 * mt.powi(2) * (self.p1 - self.p0)
            + 6.0 * mt * t * (self.p2 - self.p1)
            + 3.0 * t.powi(2) * (self.p3 - self.p2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use bezpath_math::dvec3;

    fn assert_point_eq(a: Point3, b: Point3) {
        assert!((a - b).length() < 1e-10, "{:?} != {:?}", a, b);
    }

    #[test]
    fn test_quadratic_endpoints() {
        let q = QuadraticBezier::new(
            dvec3(0.0, 0.0, 0.0),
            dvec3(1.0, 2.0, 0.0),
            dvec3(2.0, 0.0, 0.0),
        );
        assert_point_eq(q.point_at(0.0), q.p0);
        assert_point_eq(q.point_at(1.0), q.p2);
    }

    #[test]
    fn test_quadratic_midpoint() {
        let q = QuadraticBezier::new(
            dvec3(0.0, 0.0, 0.0),
            dvec3(1.0, 2.0, 0.0),
            dvec3(2.0, 0.0, 0.0),
        );
        // 0.25 * p0 + 0.5 * p1 + 0.25 * p2
        assert_point_eq(q.point_at(0.5), dvec3(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_cubic_endpoints_and_midpoint() {
        let c = CubicBezier::new(
            dvec3(0.0, 0.0, 0.0),
            dvec3(0.0, 1.0, 0.0),
            dvec3(1.0, 1.0, 0.0),
            dvec3(1.0, 0.0, 0.0),
        );
        assert_point_eq(c.point_at(0.0), c.p0);
        assert_point_eq(c.point_at(1.0), c.p3);
        // 0.125 * p0 + 0.375 * p1 + 0.375 * p2 + 0.125 * p3
        assert_point_eq(c.point_at(0.5), dvec3(0.5, 0.75, 0.0));
    }

    #[test]
    fn test_z_is_carried() {
        let c = CubicBezier::new(
            dvec3(0.0, 0.0, 2.0),
            dvec3(1.0, 0.0, 2.0),
            dvec3(2.0, 0.0, 2.0),
            dvec3(3.0, 0.0, 2.0),
        );
        for i in 0..=10 {
            assert_abs_diff_eq!(c.point_at(i as f64 / 10.0).z, 2.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_tangents_at_ends() {
        let c = CubicBezier::new(
            dvec3(0.0, 0.0, 0.0),
            dvec3(1.0, 0.0, 0.0),
            dvec3(2.0, 1.0, 0.0),
            dvec3(2.0, 2.0, 0.0),
        );
        assert_point_eq(c.tangent_at(0.0), 3.0 * (c.p1 - c.p0));
        assert_point_eq(c.tangent_at(1.0), 3.0 * (c.p3 - c.p2));

        let q = QuadraticBezier::new(c.p0, c.p1, c.p2);
        assert_point_eq(q.tangent_at(0.0), 2.0 * (q.p1 - q.p0));
        assert_point_eq(q.tangent_at(1.0), 2.0 * (q.p2 - q.p1));
    }
}
