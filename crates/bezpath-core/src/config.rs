use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PathError, Result};
use crate::traits::Validate;

/// Upper bound on samples taken from one curve segment.
///
/// Steps below `1 / MAX_SAMPLES_PER_SEGMENT` are rejected by the builder, and
/// a config whose `min_step` falls below it does not validate.
pub const MAX_SAMPLES_PER_SEGMENT: usize = 1 << 20;

/// Editing parameters for a path: step range and hit-test radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathConfig {
    /// Smallest step the editor accepts
    pub min_step: f64,
    /// Largest step the editor accepts
    pub max_step: f64,
    /// Step used when none (or NaN) is given
    pub default_step: f64,
    /// Radius within which a click selects a control point
    pub pick_radius: f64,
}

impl PathConfig {
    pub const DEFAULT_MIN_STEP: f64 = 0.001;
    pub const DEFAULT_MAX_STEP: f64 = 0.5;
    pub const DEFAULT_STEP: f64 = 0.1;
    pub const DEFAULT_PICK_RADIUS: f64 = 4.0;

    pub fn new(min_step: f64, max_step: f64, default_step: f64, pick_radius: f64) -> Self {
        Self {
            min_step,
            max_step,
            default_step,
            pick_radius,
        }
    }

    /// Parse a JSON config; missing fields take their defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(text).map_err(|e| PathError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Clamp a requested step into `[min_step, max_step]`.
    pub fn clamp_step(&self, step: f64) -> f64 {
        if step.is_nan() {
            log::warn!("NaN step requested, using default {}", self.default_step);
            return self.default_step;
        }
        let clamped = step.max(self.min_step).min(self.max_step);
        if clamped != step {
            log::warn!("Step {} clamped to {}", step, clamped);
        }
        clamped
    }
}

impl Default for PathConfig {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_MIN_STEP,
            Self::DEFAULT_MAX_STEP,
            Self::DEFAULT_STEP,
            Self::DEFAULT_PICK_RADIUS,
        )
    }
}

impl Validate for PathConfig {
    fn validate(&self) -> Result<()> {
        let fields = [
            ("min_step", self.min_step),
            ("max_step", self.max_step),
            ("default_step", self.default_step),
            ("pick_radius", self.pick_radius),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(PathError::InvalidConfig(format!(
                    "{} must be finite, got {}",
                    name, value
                )));
            }
        }

        if self.min_step <= 0.0 || self.max_step > 1.0 || self.min_step > self.max_step {
            return Err(PathError::InvalidConfig(format!(
                "step range [{}, {}] must satisfy 0 < min <= max <= 1",
                self.min_step, self.max_step
            )));
        }

        if self.min_step < 1.0 / MAX_SAMPLES_PER_SEGMENT as f64 {
            return Err(PathError::InvalidConfig(format!(
                "min_step {} would need more than {} samples per segment",
                self.min_step, MAX_SAMPLES_PER_SEGMENT
            )));
        }

        if self.default_step < self.min_step || self.default_step > self.max_step {
            return Err(PathError::InvalidConfig(format!(
                "default_step {} outside [{}, {}]",
                self.default_step, self.min_step, self.max_step
            )));
        }

        if self.pick_radius < 0.0 {
            return Err(PathError::InvalidConfig(format!(
                "pick_radius {} must not be negative",
                self.pick_radius
            )));
        }

        Ok(())
    }
}
