// KeyFrame - A single control point on a sync track

use serde::{Deserialize, Serialize};

/// How the curve travels from one key frame to the next
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Interpolation {
    /// Hold the value until the next key
    #[default]
    Step,
    /// Straight line to the next key
    Linear,
    /// Smoothstep (ease in and out)
    Smooth,
    /// Quadratic ease in
    Ramp,
}

impl Interpolation {
    /// Shape a normalized position `t` in [0, 1] according to this interpolation
    pub fn shape(self, t: f32) -> f32 {
        match self {
            Interpolation::Step => 0.0,
            Interpolation::Linear => t,
            Interpolation::Smooth => t * t * (3.0 - 2.0 * t),
            Interpolation::Ramp => t * t,
        }
    }
}

/// A (value, interpolation) pair stored at a row
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeyFrame {
    pub value: f32,
    pub interpolation: Interpolation,
}

impl KeyFrame {
    pub fn new(value: f32) -> Self {
        Self {
            value,
            interpolation: Interpolation::default(),
        }
    }

    pub fn with_interpolation(value: f32, interpolation: Interpolation) -> Self {
        Self {
            value,
            interpolation,
        }
    }
}
