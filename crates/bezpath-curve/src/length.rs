//! Arc length of polylines and paths.

use bezpath_math::{distance, Point3};

use crate::builder::MIN_PIECEWISE_CONTROLS;

/// Sum of distances between consecutive points; `0` for fewer than two points.
pub fn polyline_length(points: &[Point3]) -> f64 {
    points.windows(2).map(|w| distance(w[0], w[1])).sum()
}

/// Length of the path described by `controls`.
///
/// Short paths have no built polyline, so their length is measured over the
/// raw control points; otherwise `polyline` (the output of
/// [`build`](crate::build) for the same controls) is measured.
pub fn path_length(controls: &[Point3], polyline: &[Point3]) -> f64 {
    if controls.len() < MIN_PIECEWISE_CONTROLS {
        polyline_length(controls)
    } else {
        polyline_length(polyline)
    }
}
