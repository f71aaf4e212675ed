//! Editable path: control points plus the derived polyline and length.

use bezpath_core::traits::{BoundingBox, Validate};
use bezpath_core::{PathConfig, PathError, Result};
use bezpath_math::{dvec3, planar_distance, Aabb3, Point3, Vector3};
use serde::{Deserialize, Serialize};

use crate::builder::{build, segments, MIN_PIECEWISE_CONTROLS};
use crate::curve::{Curve, Line, QuadraticBezier};
use crate::length::path_length;
use crate::query::{point_at_fraction, point_at_position};

/// How a path should be drawn, depending on its control-point count.
#[derive(Debug, Clone, PartialEq)]
pub enum PathShape<'a> {
    Empty,
    Point(Point3),
    Line(Line),
    Quadratic(QuadraticBezier),
    Polyline(&'a [Point3]),
}

/// Serialized form of a [`PathModel`]: only the user-owned inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathDocument {
    #[serde(default)]
    pub config: PathConfig,
    pub points: Vec<Point3>,
    #[serde(default)]
    pub step: Option<f64>,
}

/// A user-edited path.
///
/// Every mutation rebuilds the polyline and length before returning, so the
/// derived data always matches the current points and step.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "PathDocument", into = "PathDocument")]
pub struct PathModel {
    config: PathConfig,
    points: Vec<Point3>,
    step: f64,
    polyline: Vec<Point3>,
    length: f64,
}

impl PathModel {
    /// Create an empty path. Fails if `config` is inconsistent.
    pub fn new(config: PathConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            points: Vec::new(),
            step: config.default_step,
            polyline: Vec::new(),
            length: 0.0,
        })
    }

    /// Create a path from existing control points; `step` is clamped by `config`.
    pub fn with_points(config: PathConfig, points: Vec<Point3>, step: f64) -> Result<Self> {
        let mut model = Self::new(config)?;
        model.points = points;
        model.step = config.clamp_step(step);
        model.recompute()?;
        Ok(model)
    }

    /// Load a path from its JSON document form.
    pub fn from_json(text: &str) -> Result<Self> {
        let doc: PathDocument =
            serde_json::from_str(text).map_err(|e| PathError::Parse(e.to_string()))?;
        Self::try_from(doc)
    }

    pub fn config(&self) -> &PathConfig {
        &self.config
    }

    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    pub fn point(&self, index: usize) -> Option<Point3> {
        self.points.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn polyline(&self) -> &[Point3] {
        &self.polyline
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn push(&mut self, point: Point3) -> Result<()> {
        self.points.push(point);
        self.recompute()
    }

    pub fn insert(&mut self, index: usize, point: Point3) -> Result<()> {
        if index > self.points.len() {
            return Err(self.out_of_range(index));
        }
        self.points.insert(index, point);
        self.recompute()
    }

    pub fn remove(&mut self, index: usize) -> Result<Point3> {
        if index >= self.points.len() {
            return Err(self.out_of_range(index));
        }
        let removed = self.points.remove(index);
        self.recompute()?;
        Ok(removed)
    }

    /// Move a point in the XY plane, keeping its z.
    pub fn move_point(&mut self, index: usize, x: f64, y: f64) -> Result<()> {
        let z = self.point(index).ok_or_else(|| self.out_of_range(index))?.z;
        self.points[index] = dvec3(x, y, z);
        self.recompute()
    }

    pub fn clear(&mut self) {
        self.points.clear();
        self.polyline.clear();
        self.length = 0.0;
    }

    /// Set the sampling step, clamped into the configured range.
    ///
    /// Returns the step actually used.
    pub fn set_step(&mut self, step: f64) -> Result<f64> {
        self.step = self.config.clamp_step(step);
        self.recompute()?;
        Ok(self.step)
    }

    /// Index of the first control point within the pick radius of `(x, y)`.
    pub fn pick(&self, x: f64, y: f64) -> Option<usize> {
        let target = dvec3(x, y, 0.0);
        self.points
            .iter()
            .position(|&p| planar_distance(p, target) <= self.config.pick_radius)
    }

    pub fn shape(&self) -> PathShape<'_> {
        match self.points.as_slice() {
            [] => PathShape::Empty,
            [p] => PathShape::Point(*p),
            [a, b] => PathShape::Line(Line::new(*a, *b)),
            [a, b, c] => PathShape::Quadratic(QuadraticBezier::new(*a, *b, *c)),
            _ => PathShape::Polyline(&self.polyline),
        }
    }

    /// Tangent directions where the drawn path starts and ends.
    ///
    /// `None` when fewer than two control points exist.
    pub fn end_tangents(&self) -> Option<(Vector3, Vector3)> {
        fn ends(curve: &dyn Curve) -> (Vector3, Vector3) {
            let (t0, t1) = curve.domain();
            (curve.tangent_at(t0), curve.tangent_at(t1))
        }

        match self.shape() {
            PathShape::Empty | PathShape::Point(_) => None,
            PathShape::Line(line) => Some(ends(&line)),
            PathShape::Quadratic(quad) => Some(ends(&quad)),
            PathShape::Polyline(_) => {
                let segs = segments(&self.points);
                let (first, last) = (segs.first()?, segs.last()?);
                Some((ends(first).0, ends(last).1))
            }
        }
    }

    /// Points walked by the position queries.
    ///
    /// Short paths have no polyline, so the raw control points are used,
    /// matching how [`path_length`] measures them.
    pub fn traversal_points(&self) -> &[Point3] {
        if self.points.len() < MIN_PIECEWISE_CONTROLS {
            &self.points
        } else {
            &self.polyline
        }
    }

    pub fn point_at_fraction(&self, frac: f64) -> Result<Point3> {
        point_at_fraction(self.traversal_points(), self.length, frac)
    }

    pub fn point_at_position(&self, pos: f64) -> Result<Point3> {
        point_at_position(self.traversal_points(), self.length, pos)
    }

    /// Rebuild polyline and length from the current points and step.
    pub fn recompute(&mut self) -> Result<()> {
        self.polyline = build(&self.points, self.step)?;
        self.length = path_length(&self.points, &self.polyline);
        log::debug!(
            "path recomputed: {} controls, {} polyline points, length {:.4}",
            self.points.len(),
            self.polyline.len(),
            self.length
        );
        Ok(())
    }

    fn out_of_range(&self, index: usize) -> PathError {
        PathError::IndexOutOfRange {
            index,
            len: self.points.len(),
        }
    }
}

impl TryFrom<PathDocument> for PathModel {
    type Error = PathError;

    fn try_from(doc: PathDocument) -> Result<Self> {
        let step = doc.step.unwrap_or(doc.config.default_step);
        Self::with_points(doc.config, doc.points, step)
    }
}

impl From<PathModel> for PathDocument {
    fn from(model: PathModel) -> Self {
        Self {
            config: model.config,
            points: model.points,
            step: Some(model.step),
        }
    }
}

impl BoundingBox for PathModel {
    type Point = Point3;

    fn bounding_box(&self) -> Option<(Point3, Point3)> {
        Aabb3::from_points(self.traversal_points()).map(|b| (b.min, b.max))
    }
}
