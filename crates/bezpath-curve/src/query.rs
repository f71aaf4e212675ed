//! Point lookup along a polyline by arc length.
//!
//! Both queries take the polyline together with its precomputed length, as the
//! caller caches both between edits.

use bezpath_core::{PathError, Result};
use bezpath_math::{distance, Point3};

/// Point at `frac` of the way along `points`, with `frac` clamped to `[0, 1]`.
pub fn point_at_fraction(points: &[Point3], length: f64, frac: f64) -> Result<Point3> {
    let frac = frac.clamp(0.0, 1.0);
    point_at_position(points, length, frac * length)
}

/// Point at arc-length `pos` along `points`, with `pos` clamped to `[0, length]`.
///
/// The containing segment is the first one whose cumulative length reaches
/// `pos`. Within it the point is found as `a + (1 - t) * (b - a)` where
/// `t = (next_length - pos) / n` is the remaining fraction measured from the
/// far end `b`.
pub fn point_at_position(points: &[Point3], length: f64, pos: f64) -> Result<Point3> {
    let (&first, rest) = points.split_first().ok_or(PathError::EmptyPath)?;
    let Some(&last) = rest.last() else {
        return Ok(first);
    };

    let pos = pos.min(length).max(0.0);
    let mut travelled = 0.0;

    for w in points.windows(2) {
        let (a, b) = (w[0], w[1]);
        let n = distance(a, b);
        let next_length = travelled + n;

        if next_length >= pos {
            // Zero-length segment reached exactly at its start.
            if n == 0.0 {
                return Ok(a);
            }
            let t = (next_length - pos) / n;
            return Ok(a + (1.0 - t) * (b - a));
        }

        travelled = next_length;
    }

    // Only reachable when `length` exceeds the measured polyline.
    Ok(last)
}
