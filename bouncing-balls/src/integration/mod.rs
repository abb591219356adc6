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
//! Per-ball numerical integration
//!
//! A step advances a single ball by one fixed timestep: acceleration from
//! gravity and drag updates the velocity, the new velocity moves the
//! position, and the boundary pass clamps the ball back inside the viewport.
//!
//! # Timestep Guidelines
//!
//! - The default cadence is 1/40 s, matching a 40 Hz frame timer
//! - Larger timesteps let a ball overshoot further before the clamp snaps it
//!   back; the clamp still guarantees the ball ends inside the bounds

use crate::ball::{Ball, Bounds};
use crate::error::{Result, SimulationError};

mod boundary;
mod euler;

pub use boundary::{resolve_axis, AxisContact, BoundaryContact};
pub use euler::SemiImplicitEulerIntegrator;

/// Calculate kinetic energy for a single ball
///
/// KE = 0.5 * m * v²
pub fn calculate_kinetic_energy(ball: &Ball) -> f64 {
    let v = ball.velocity.magnitude();
    0.5 * ball.mass() * v * v
}

/// Calculate total kinetic energy over a collection of balls
pub fn calculate_total_kinetic_energy<'a, I>(balls: I) -> f64
where
    I: IntoIterator<Item = &'a Ball>,
{
    balls.into_iter().map(calculate_kinetic_energy).sum()
}

/// Trait for numerical integration methods
///
/// Implementors must be pure with respect to the ball: the same ball, bounds
/// and timestep always produce the same result. This is what lets a tick
/// integrate balls in any order, or in parallel.
pub trait Integrator: Send + Sync {
    /// Get the name of this integrator
    fn name(&self) -> &str;

    /// Get the timestep used by this integrator
    fn timestep(&self) -> f64;

    /// Set the timestep for this integrator
    ///
    /// # Panics
    ///
    /// Panics if timestep is non-positive, NaN, or infinite
    fn set_timestep(&mut self, dt: f64);

    /// Validate the timestep for stability
    ///
    /// Extremely small timesteps lose precision in the position update;
    /// timesteps over a second let balls cross most of the viewport in one
    /// step.
    fn validate_timestep(&self) -> Result<()> {
        let dt = self.timestep();

        if dt <= 0.0 || !dt.is_finite() {
            return Err(SimulationError::InvalidTimestep(dt));
        }

        if dt < 1e-9 {
            return Err(SimulationError::SuspiciousTimestep {
                dt,
                reason: "extremely small and may cause precision loss",
            });
        }

        if dt > 1.0 {
            return Err(SimulationError::SuspiciousTimestep {
                dt,
                reason: "large and may cause visible tunnelling before the clamp",
            });
        }

        Ok(())
    }

    /// Advance one ball by one timestep inside `bounds`
    ///
    /// Returns which walls the ball touched during the step.
    fn step(&self, ball: &mut Ball, bounds: &Bounds) -> BoundaryContact;
}
