//! Curve traits and implementations.

mod bezier;
mod line;

use bezpath_math::{Point3, Vector3};
use serde::{Deserialize, Serialize};

pub use bezier::{CubicBezier, QuadraticBezier};
pub use line::Line;

/// Trait for parametric curves in 3D space.
pub trait Curve: Send + Sync {
    /// Evaluate the curve at parameter `t`.
    fn point_at(&self, t: f64) -> Point3;

    /// Evaluate the tangent vector at parameter `t`.
    fn tangent_at(&self, t: f64) -> Vector3;

    /// Return the parameter domain `(t_min, t_max)`.
    fn domain(&self) -> (f64, f64) {
        (0.0, 1.0)
    }
}

/// One piece of a piecewise Bezier path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BezierSegment {
    Quadratic(QuadraticBezier),
    Cubic(CubicBezier),
}

impl BezierSegment {
    pub fn start(&self) -> Point3 {
        match self {
            Self::Quadratic(q) => q.p0,
            Self::Cubic(c) => c.p0,
        }
    }

    pub fn end(&self) -> Point3 {
        match self {
            Self::Quadratic(q) => q.p2,
            Self::Cubic(c) => c.p3,
        }
    }
}

impl Curve for BezierSegment {
    fn point_at(&self, t: f64) -> Point3 {
        match self {
            Self::Quadratic(q) => q.point_at(t),
            Self::Cubic(c) => c.point_at(t),
        }
    }

    fn tangent_at(&self, t: f64) -> Vector3 {
        match self {
            Self::Quadratic(q) => q.tangent_at(t),
            Self::Cubic(c) => c.tangent_at(t),
        }
    }
}
