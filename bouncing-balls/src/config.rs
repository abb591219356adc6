// Copyright 2025 John Brosnihan
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Simulation constants
//!
//! All physics parameters are fixed. [`SimulationConfig`] only bundles them
//! so they travel through the integrator and spawner as one value instead of
//! being read from globals.

use crate::error::{Result, SimulationError};

/// Gravitational acceleration added to the vertical axis (internal units/s²)
pub const GRAVITY: f64 = 9.81;

/// Scale of the velocity-squared damping term (negative: opposes motion)
pub const DRAG_COEFFICIENT: f64 = -0.0009;

/// Maps internal distance units to pixels
pub const DISTANCE_SCALE: f64 = 100.0;

/// Fixed timestep in seconds (40 frames per second)
pub const FRAME_INTERVAL: f64 = 1.0 / 40.0;

/// Mass shared by every ball
pub const BALL_MASS: f64 = 0.4;

/// Radius shared by every ball, in pixels
pub const BALL_RADIUS: f64 = 8.0;

/// Velocity multiplier applied on wall contact
pub const BALL_RESTITUTION: f64 = -0.7;

/// Inclusive lower bound of the spawn velocity range, per axis
pub const SPAWN_VELOCITY_MIN: i32 = -20;

/// Exclusive upper bound of the spawn velocity range, per axis
pub const SPAWN_VELOCITY_MAX: i32 = 20;

/// Which velocity-squared damping formula the integrator applies
///
/// Two variants of the drag term exist. `AreaScaled` multiplies by the
/// ball's radius squared, as a crude frontal-area term; `Unscaled` leaves
/// it out, which damps far less for the default radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragModel {
    /// `c × r² × v × |v| / m`
    #[default]
    AreaScaled,
    /// `c × v × |v| / m`
    Unscaled,
}

impl DragModel {
    /// Acceleration contributed by drag for one velocity component
    pub fn acceleration(self, coefficient: f64, radius: f64, mass: f64, velocity: f64) -> f64 {
        let area = match self {
            DragModel::AreaScaled => radius * radius,
            DragModel::Unscaled => 1.0,
        };
        coefficient * area * velocity * velocity.abs() / mass
    }
}

/// Bundle of the fixed simulation constants
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    /// Vertical acceleration
    pub gravity: f64,
    /// Drag term scale
    pub drag_coefficient: f64,
    /// Drag formula
    pub drag_model: DragModel,
    /// Internal units to pixels
    pub distance_scale: f64,
    /// Seconds per tick
    pub timestep: f64,
    /// Ball mass
    pub mass: f64,
    /// Ball radius in pixels
    pub radius: f64,
    /// Negative bounce multiplier
    pub restitution: f64,
    /// Spawn velocity lower bound (inclusive)
    pub spawn_velocity_min: i32,
    /// Spawn velocity upper bound (exclusive)
    pub spawn_velocity_max: i32,
}

impl SimulationConfig {
    /// Check the bundle for values the integrator cannot work with
    pub fn validate(&self) -> Result<()> {
        if !(self.mass > 0.0 && self.mass.is_finite()) {
            return Err(SimulationError::InvalidConfig(format!(
                "mass must be positive and finite, got {}",
                self.mass
            )));
        }
        if !(self.radius > 0.0 && self.radius.is_finite()) {
            return Err(SimulationError::InvalidConfig(format!(
                "radius must be positive and finite, got {}",
                self.radius
            )));
        }
        if !(self.restitution < 0.0 && self.restitution > -1.0) {
            return Err(SimulationError::InvalidConfig(format!(
                "restitution must lie in (-1, 0), got {}",
                self.restitution
            )));
        }
        if self.spawn_velocity_min >= self.spawn_velocity_max {
            return Err(SimulationError::InvalidConfig(format!(
                "spawn velocity range {}..{} is empty",
                self.spawn_velocity_min, self.spawn_velocity_max
            )));
        }
        if !(self.timestep > 0.0 && self.timestep.is_finite()) {
            return Err(SimulationError::InvalidTimestep(self.timestep));
        }
        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            gravity: GRAVITY,
            drag_coefficient: DRAG_COEFFICIENT,
            drag_model: DragModel::default(),
            distance_scale: DISTANCE_SCALE,
            timestep: FRAME_INTERVAL,
            mass: BALL_MASS,
            radius: BALL_RADIUS,
            restitution: BALL_RESTITUTION,
            spawn_velocity_min: SPAWN_VELOCITY_MIN,
            spawn_velocity_max: SPAWN_VELOCITY_MAX,
        }
    }
}
