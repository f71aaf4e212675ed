//! bezpath curve engine: piecewise Bezier paths through user-edited control points.
//!
//! The free functions ([`build`], [`polyline_length`], [`point_at_position`], ...)
//! are pure and keep no state between calls. [`PathModel`] wraps them for callers
//! that edit a point list and want the polyline and length kept in sync.

pub mod builder;
pub mod curve;
pub mod length;
pub mod model;
pub mod query;

pub use builder::{build, expand_controls, sample_parameters, segments, MIN_PIECEWISE_CONTROLS};
pub use curve::{BezierSegment, CubicBezier, Curve, Line, QuadraticBezier};
pub use length::{path_length, polyline_length};
pub use model::{PathDocument, PathModel, PathShape};
pub use query::{point_at_fraction, point_at_position};
