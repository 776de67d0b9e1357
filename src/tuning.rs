//! Data-driven game balance
//!
//! Every field defaults to the value in [`crate::consts`], so a JSON document
//! only needs to name what it overrides.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Balance knobs for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub block_height: f32,
    pub base_width_ratio: f32,
    pub start_speed: f32,
    pub speed_step: f32,
    /// Points between difficulty steps
    pub speed_up_every: u32,
    pub max_speed: f32,
    pub scroll_ratio: f32,
    pub fragment_velocity_y: (f32, f32),
    pub fragment_velocity_x: (f32, f32),
    pub fragment_rotation_speed: (f32, f32),
    pub fragment_gravity: (f32, f32),
    pub offscreen_margin: f32,
    pub autoplay_tolerance: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            block_height: BLOCK_HEIGHT,
            base_width_ratio: BASE_WIDTH_RATIO,
            start_speed: START_SPEED,
            speed_step: SPEED_STEP,
            speed_up_every: SPEED_UP_EVERY,
            max_speed: MAX_SPEED,
            scroll_ratio: SCROLL_RATIO,
            fragment_velocity_y: FRAGMENT_VELOCITY_Y,
            fragment_velocity_x: FRAGMENT_VELOCITY_X,
            fragment_rotation_speed: FRAGMENT_ROTATION_SPEED,
            fragment_gravity: FRAGMENT_GRAVITY,
            offscreen_margin: FRAGMENT_OFFSCREEN_MARGIN,
            autoplay_tolerance: AUTOPLAY_TOLERANCE,
        }
    }
}

/// Why a tuning document was rejected
#[derive(Debug)]
pub enum TuningError {
    Parse(serde_json::Error),
    Invalid(&'static str),
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::Parse(e) => write!(f, "malformed tuning JSON: {e}"),
            TuningError::Invalid(what) => write!(f, "invalid tuning: {what}"),
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TuningError::Parse(e) => Some(e),
            TuningError::Invalid(_) => None,
        }
    }
}

impl From<serde_json::Error> for TuningError {
    fn from(e: serde_json::Error) -> Self {
        TuningError::Parse(e)
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), TuningError> {
        if !(self.block_height > 0.0) {
            return Err(TuningError::Invalid("block_height must be positive"));
        }
        if !(self.base_width_ratio > 0.0 && self.base_width_ratio <= 1.0) {
            return Err(TuningError::Invalid("base_width_ratio must be in (0, 1]"));
        }
        if !(self.scroll_ratio > 0.0 && self.scroll_ratio <= 1.0) {
            return Err(TuningError::Invalid("scroll_ratio must be in (0, 1]"));
        }
        if !(self.start_speed > 0.0) || self.speed_step < 0.0 {
            return Err(TuningError::Invalid("speeds must be positive"));
        }
        if self.max_speed < self.start_speed {
            return Err(TuningError::Invalid("max_speed is below start_speed"));
        }
        if self.speed_up_every == 0 {
            return Err(TuningError::Invalid("speed_up_every must be at least 1"));
        }
        let ranges = [
            self.fragment_velocity_y,
            self.fragment_velocity_x,
            self.fragment_rotation_speed,
            self.fragment_gravity,
        ];
        if ranges.iter().any(|(lo, hi)| lo > hi) {
            return Err(TuningError::Invalid("fragment range has min above max"));
        }
        // Fragments must accelerate downward or they never leave the view
        if !(self.fragment_gravity.0 > 0.0) {
            return Err(TuningError::Invalid("fragment gravity must be positive"));
        }
        if self.offscreen_margin < 0.0 || self.autoplay_tolerance < 0.0 {
            return Err(TuningError::Invalid("margins must not be negative"));
        }
        Ok(())
    }

    /// Difficulty after reaching `score`, given the current speed
    pub fn speed_after(&self, score: u32, speed: f32) -> f32 {
        if score > 0 && score % self.speed_up_every == 0 {
            (speed + self.speed_step).min(self.max_speed)
        } else {
            speed
        }
    }
}
