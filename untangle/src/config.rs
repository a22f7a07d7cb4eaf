use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::geometry::limits;

/// Orb count range for the generator.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub min_orbs: u32,
    pub max_orbs: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self { Self { min_orbs: limits::MIN_ORBS, max_orbs: limits::MAX_ORBS } }
}

/// Canvas and spacing for the placer. Positions land in
/// `[margin, width - margin] x [margin, height - margin]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
    pub min_distance: f32,
    /// Samples per vertex before a too-close position is accepted anyway
    pub max_attempts: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            width: limits::CANVAS_WIDTH,
            height: limits::CANVAS_HEIGHT,
            margin: limits::MARGIN,
            min_distance: limits::MIN_DISTANCE,
            max_attempts: limits::PLACEMENT_ATTEMPTS,
        }
    }
}

/// Bounds for the search for a tangled starting layout.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShuffleConfig {
    /// Random swaps tried on one layout before regenerating
    pub max_swaps: u32,
    pub max_regenerations: u32,
}

impl Default for ShuffleConfig {
    fn default() -> Self { Self { max_swaps: limits::SHUFFLE_SWAPS, max_regenerations: limits::REGENERATIONS } }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PuzzleConfig {
    pub generation: GenerationConfig,
    pub layout: LayoutConfig,
    pub shuffle: ShuffleConfig,
}

impl PuzzleConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.generation.validate()?;
        self.layout.validate()?;
        self.shuffle.validate()
    }
}

impl GenerationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_orbs < limits::MIN_ORBS {
            return Err(ConfigError::TooFewOrbs(self.min_orbs));
        }
        if self.min_orbs > self.max_orbs || !limits::in_orb_bounds(self.max_orbs) {
            return Err(ConfigError::OrbRange { min: self.min_orbs, max: self.max_orbs });
        }
        Ok(())
    }
}

impl LayoutConfig {
    /// Inclusive integer ranges `(x, y)` that stay inside the margins.
    pub fn pixel_bounds(&self) -> ((i32, i32), (i32, i32)) {
        let lo = self.margin.ceil() as i32;
        ((lo, (self.width - self.margin).floor() as i32), (lo, (self.height - self.margin).floor() as i32))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, v) in [("width", self.width), ("height", self.height), ("margin", self.margin), ("min_distance", self.min_distance)] {
            if !v.is_finite() { return Err(ConfigError::NonFinite(name)); }
        }
        let ((lo_x, hi_x), (lo_y, hi_y)) = self.pixel_bounds();
        if lo_x > hi_x || lo_y > hi_y {
            return Err(ConfigError::CanvasTooSmall { width: self.width, height: self.height, margin: self.margin });
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::ZeroAttempts("max_attempts"));
        }
        Ok(())
    }
}

impl ShuffleConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_swaps == 0 { return Err(ConfigError::ZeroAttempts("max_swaps")); }
        if self.max_regenerations == 0 { return Err(ConfigError::ZeroAttempts("max_regenerations")); }
        Ok(())
    }
}
