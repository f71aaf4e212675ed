//! Loading a path document and reporting on it.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use bezpath_core::traits::BoundingBox;
use bezpath_core::PathConfig;
use bezpath_curve::{PathDocument, PathModel, PathShape};
use bezpath_math::{Aabb3, Point3};

/// Where along the path to place the marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Query {
    Fraction(f64),
    Position(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub input: PathBuf,
    pub config: Option<PathBuf>,
    pub step: Option<f64>,
    pub query: Option<Query>,
    pub print_points: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    Run(Options),
}

pub fn parse_args(args: &[String]) -> Result<Command> {
    let mut input = None;
    let mut config = None;
    let mut step = None;
    let mut query = None;
    let mut print_points = false;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(Command::Help),
            "--summary" => {}
            "--points" => print_points = true,
            "--step" => step = Some(parse_number(iter.next(), "--step")?),
            "--config" => {
                let value = iter.next().context("--config requires a file path")?;
                config = Some(PathBuf::from(value));
            }
            "--fraction" | "--position" => {
                if query.is_some() {
                    bail!("--fraction and --position are mutually exclusive");
                }
                let value = parse_number(iter.next(), arg)?;
                query = Some(if arg == "--fraction" {
                    Query::Fraction(value)
                } else {
                    Query::Position(value)
                });
            }
            flag if flag.starts_with("--") => bail!("Unknown option {}", flag),
            path => {
                if input.is_some() {
                    bail!("Unexpected extra argument {}", path);
                }
                input = Some(PathBuf::from(path));
            }
        }
    }

    let input = input.context("Missing required argument <path.json>")?;
    Ok(Command::Run(Options {
        input,
        config,
        step,
        query,
        print_points,
    }))
}

fn parse_number(value: Option<&String>, flag: &str) -> Result<f64> {
    let value = value.with_context(|| format!("{} requires a value", flag))?;
    value
        .parse::<f64>()
        .with_context(|| format!("{} expects a number, got {:?}", flag, value))
}

pub fn load_config(path: &Path) -> Result<PathConfig> {
    PathConfig::from_file(path)
        .with_context(|| format!("Failed to load config {}", path.display()))
}

/// Read the path document and apply command-line overrides.
pub fn load_model(options: &Options) -> Result<PathModel> {
    let text = std::fs::read_to_string(&options.input)
        .with_context(|| format!("Failed to read {}", options.input.display()))?;
    let mut doc: PathDocument = serde_json::from_str(&text)
        .with_context(|| format!("Invalid path JSON in {}", options.input.display()))?;

    if let Some(config_path) = &options.config {
        doc.config = load_config(config_path)?;
    }
    if options.step.is_some() {
        doc.step = options.step;
    }

    log::info!(
        "Loaded {} control points from {}",
        doc.points.len(),
        options.input.display()
    );
    Ok(PathModel::try_from(doc)?)
}

fn fmt_point(p: Point3) -> String {
    format!("({:.4}, {:.4}, {:.4})", p.x, p.y, p.z)
}

pub fn report(model: &PathModel, options: &Options) -> Result<String> {
    let mut out = String::new();

    let shape = match model.shape() {
        PathShape::Empty => "empty",
        PathShape::Point(_) => "point",
        PathShape::Line(_) => "line",
        PathShape::Quadratic(_) => "quadratic",
        PathShape::Polyline(_) => "piecewise bezier",
    };
    writeln!(out, "Control points: {}", model.len())?;
    writeln!(out, "Shape:          {}", shape)?;
    writeln!(out, "Step:           {}", model.step())?;
    writeln!(out, "Polyline:       {} points", model.polyline().len())?;
    writeln!(out, "Path length:    {:.4}", model.length())?;
    if let Some((min, max)) = model.bounding_box() {
        let bounds = Aabb3::new(min, max);
        writeln!(out, "Bounds:         {} .. {}", fmt_point(min), fmt_point(max))?;
        writeln!(out, "Center:         {}", fmt_point(bounds.center()))?;
        writeln!(out, "Extents:        {}", fmt_point(bounds.extents()))?;
    }
    if let Some((start, end)) = model.end_tangents() {
        writeln!(out, "Start tangent:  {}", fmt_point(start))?;
        writeln!(out, "End tangent:    {}", fmt_point(end))?;
    }

    if options.print_points {
        writeln!(out)?;
        for (i, p) in model.polyline().iter().enumerate() {
            writeln!(out, "{:>6}  {}", i, fmt_point(*p))?;
        }
    }

    if let Some(query) = options.query {
        let (label, point) = match query {
            Query::Fraction(f) => (format!("fraction {}", f), model.point_at_fraction(f)?),
            Query::Position(p) => (format!("position {}", p), model.point_at_position(p)?),
        };
        writeln!(out)?;
        writeln!(out, "Point at {}: {}", label, fmt_point(point))?;
    }

    Ok(out)
}
