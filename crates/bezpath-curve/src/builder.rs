//! Piecewise Bezier construction from a flat control-point sequence.
//!
//! Control points are consumed two at a time. Each odd-indexed point becomes a
//! handle, and the midpoints between neighbouring controls become the segment
//! joints, so consecutive segments meet with a continuous tangent. A trailing
//! group of three expanded points yields a quadratic segment instead of a cubic.

use bezpath_core::config::MAX_SAMPLES_PER_SEGMENT;
use bezpath_core::{PathError, Result};
use bezpath_math::{midpoint, Point3};

use crate::curve::{BezierSegment, CubicBezier, Curve, QuadraticBezier};

/// Fewer controls than this are drawn directly by the caller.
pub const MIN_PIECEWISE_CONTROLS: usize = 4;

/// Expand `controls` into joint/handle points for the segment walk.
///
/// For each window `(i-1, i, i+1)` with odd `i` this emits the midpoint of
/// `i-1` and `i`, then `controls[i]` and `controls[i+1]`; when another window
/// follows, the midpoint bridging to it is emitted as well.
pub fn expand_controls(controls: &[Point3]) -> Vec<Point3> {
    if controls.len() < MIN_PIECEWISE_CONTROLS {
        return Vec::new();
    }

    let last = controls.len() - 1;
    let mut expanded = Vec::with_capacity(controls.len() * 2);
    for i in (1..last).step_by(2) {
        expanded.push(midpoint(controls[i - 1], controls[i]));
        expanded.push(controls[i]);
        expanded.push(controls[i + 1]);

        if i + 2 < last {
            expanded.push(midpoint(controls[i + 1], controls[i + 2]));
        }
    }
    expanded
}

/// Group the expanded control set into Bezier segments.
///
/// Groups start every 4 expanded points; a group with a 4th point is cubic,
/// otherwise quadratic.
pub fn segments(controls: &[Point3]) -> Vec<BezierSegment> {
    let expanded = expand_controls(controls);

    let mut segments = Vec::with_capacity(expanded.len() / 4 + 1);
    let mut i = 0;
    while i + 2 < expanded.len() {
        let (a0, a1, a2) = (expanded[i], expanded[i + 1], expanded[i + 2]);
        let segment = match expanded.get(i + 3) {
            Some(&a3) => BezierSegment::Cubic(CubicBezier::new(a0, a1, a2, a3)),
            None => BezierSegment::Quadratic(QuadraticBezier::new(a0, a1, a2)),
        };
        log::trace!("segment {}: {:?}", segments.len(), segment);
        segments.push(segment);
        i += 4;
    }
    segments
}

/// Parameters `0, step, 2*step, ...` strictly below 1.
///
/// Values are produced by repeated addition, so accumulated rounding can add
/// one sample just below 1 (e.g. ten additions of `0.1`). Steps that would
/// need more than [`MAX_SAMPLES_PER_SEGMENT`] samples are rejected.
pub fn sample_parameters(step: f64) -> Result<Vec<f64>> {
    check_step(step)?;

    // Bounded by the check above, so the cast cannot saturate.
    let mut params = Vec::with_capacity((1.0 / step).ceil() as usize + 1);
    let mut t: f64 = 0.0;
    while t < 1.0 {
        params.push(t);
        let next = t + step;
        if next <= t {
            return Err(PathError::InvalidStep(step));
        }
        t = next;
    }
    Ok(params)
}

/// Build the polyline for `controls` sampled every `step` in parameter space.
///
/// Returns [`PathError::InvalidStep`] unless `0 < step <= 1`. Fewer than
/// [`MIN_PIECEWISE_CONTROLS`] controls produce an empty polyline.
pub fn build(controls: &[Point3], step: f64) -> Result<Vec<Point3>> {
    let params = sample_parameters(step)?;
    let segments = segments(controls);

    let mut points = Vec::with_capacity(segments.len() * params.len());
    for segment in &segments {
        points.extend(params.iter().map(|&t| segment.point_at(t)));
    }
    log::debug!(
        "built {} points from {} controls ({} segments, step {})",
        points.len(),
        controls.len(),
        segments.len(),
        step
    );
    Ok(points)
}

fn check_step(step: f64) -> Result<()> {
    // Written so that NaN fails as well.
    if step > 0.0 && step <= 1.0 && 1.0 / step <= MAX_SAMPLES_PER_SEGMENT as f64 {
        Ok(())
    } else {
        Err(PathError::InvalidStep(step))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bezpath_math::dvec3;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point3> {
        coords.iter().map(|&(x, y)| dvec3(x, y, 0.0)).collect()
    }

    #[test]
    fn test_expand_short_input_is_empty() {
        assert!(expand_controls(&[]).is_empty());
        assert!(expand_controls(&pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)])).is_empty());
    }

    #[test]
    fn test_expand_four_controls() {
        let controls = pts(&[(0.0, 0.0), (2.0, 2.0), (4.0, 0.0), (6.0, 2.0)]);
        let expanded = expand_controls(&controls);
        assert_eq!(expanded, pts(&[(1.0, 1.0), (2.0, 2.0), (4.0, 0.0)]));
    }

    #[test]
    fn test_expand_five_controls_bridges_windows() {
        let controls = pts(&[(0.0, 0.0), (2.0, 2.0), (4.0, 0.0), (6.0, 2.0), (8.0, 0.0)]);
        let expanded = expand_controls(&controls);
        assert_eq!(
            expanded,
            pts(&[
                (1.0, 1.0),
                (2.0, 2.0),
                (4.0, 0.0),
                (5.0, 1.0),
                (5.0, 1.0),
                (6.0, 2.0),
                (8.0, 0.0),
            ])
        );
    }

    #[test]
    fn test_segments_cubic_then_quadratic() {
        let controls = pts(&[(0.0, 0.0), (2.0, 2.0), (4.0, 0.0), (6.0, 2.0), (8.0, 0.0)]);
        let segs = segments(&controls);
        assert_eq!(segs.len(), 2);
        assert!(matches!(segs[0], BezierSegment::Cubic(_)));
        assert!(matches!(segs[1], BezierSegment::Quadratic(_)));
        // Joined at the bridging midpoint
        assert_eq!(segs[0].end(), segs[1].start());
    }

    #[test]
    fn test_sample_parameters() {
        assert_eq!(sample_parameters(0.5).unwrap(), vec![0.0, 0.5]);
        assert_eq!(sample_parameters(1.0).unwrap(), vec![0.0]);
        let params = sample_parameters(0.25).unwrap();
        assert_eq!(params, vec![0.0, 0.25, 0.5, 0.75]);
        assert!(sample_parameters(0.1).unwrap().iter().all(|&t| t < 1.0));
    }

    #[test]
    fn test_sample_parameters_accumulated_rounding() {
        // Ten additions of 0.1 stay just below 1, adding an 11th sample.
        let params = sample_parameters(0.1).unwrap();
        assert_eq!(params.len(), 11);
        let last = params[10];
        assert!(last > 0.99 && last < 1.0, "last = {}", last);

        assert_eq!(sample_parameters(0.01).unwrap().len(), 100);
        assert_eq!(sample_parameters(0.001).unwrap().len(), 1000);
    }

    #[test]
    fn test_tiny_steps_are_rejected() {
        for step in [1e-300, 1e-17, f64::MIN_POSITIVE, 1e-9] {
            assert!(
                matches!(sample_parameters(step), Err(PathError::InvalidStep(_))),
                "step {}",
                step
            );
        }
    }

    #[test]
    fn test_smallest_accepted_step() {
        let step = 1.0 / MAX_SAMPLES_PER_SEGMENT as f64;
        let params = sample_parameters(step).unwrap();
        assert_eq!(params.len(), MAX_SAMPLES_PER_SEGMENT);
    }

    #[test]
    fn test_invalid_step() {
        for step in [0.0, -0.1, 1.5, f64::NAN, f64::INFINITY] {
            let err = build(&pts(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]), step);
            assert!(matches!(err, Err(PathError::InvalidStep(_))), "step {}", step);
        }
    }

    #[test]
    fn test_invalid_step_checked_before_short_input() {
        assert!(matches!(build(&[], 0.0), Err(PathError::InvalidStep(_))));
    }

    #[test]
    fn test_build_short_input_is_empty() {
        assert!(build(&pts(&[(0.0, 0.0), (1.0, 1.0)]), 0.1).unwrap().is_empty());
    }

    #[test]
    fn test_build_sample_count() {
        let controls = pts(&[(0.0, 0.0), (2.0, 2.0), (4.0, 0.0), (6.0, 2.0), (8.0, 0.0)]);
        let points = build(&controls, 0.25).unwrap();
        assert_eq!(points.len(), 2 * 4);
        assert_eq!(points[0], dvec3(1.0, 1.0, 0.0));
        assert_eq!(points[4], dvec3(5.0, 1.0, 0.0));
    }
}
