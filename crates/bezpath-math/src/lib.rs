pub mod aabb;

pub use aabb::Aabb3;
pub use glam::{dvec2, dvec3, DVec2, DVec3};

pub type Point2 = DVec2;
pub type Point3 = DVec3;
pub type Vector3 = DVec3;

/// Component-wise average of two points.
pub fn midpoint(a: Point3, b: Point3) -> Point3 {
    (a + b) * 0.5
}

/// Euclidean distance between two points.
pub fn distance(a: Point3, b: Point3) -> f64 {
    (b - a).length()
}

/// Distance between two points projected onto the XY plane.
pub fn planar_distance(a: Point3, b: Point3) -> f64 {
    (b.truncate() - a.truncate()).length()
}
