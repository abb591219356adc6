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
//! Semi-implicit Euler integrator with wall clamping
//!
//! # Algorithm
//!
//! For each axis, with `c` the drag coefficient and `s` the distance scale:
//!
//! ```text
//! a = c * r² * v * |v| / m        (+ g on the vertical axis)
//! v(t + dt) = v(t) + a * dt
//! p(t + dt) = p(t) + v(t + dt) * dt * s
//! ```
//!
//! followed by the boundary clamp. Updating velocity before position makes
//! this the symplectic (semi-implicit) variant of Euler's method.
//!
//! Gravity is an acceleration and is not divided by mass; only the drag
//! force is.

use log::{debug, warn};

use super::boundary::{resolve_axis, BoundaryContact};
use super::Integrator;
use crate::ball::{Ball, Bounds};
use crate::config::{DragModel, SimulationConfig, DISTANCE_SCALE, DRAG_COEFFICIENT, GRAVITY};

/// Fixed-timestep integrator for bouncing balls
///
/// # Example
///
/// ```
/// use bouncing_balls::integration::{Integrator, SemiImplicitEulerIntegrator};
///
/// let integrator = SemiImplicitEulerIntegrator::new(1.0 / 40.0);
/// assert_eq!(integrator.timestep(), 0.025);
/// ```
#[derive(Debug, Clone)]
pub struct SemiImplicitEulerIntegrator {
    timestep: f64,
    gravity: f64,
    drag_coefficient: f64,
    drag_model: DragModel,
    distance_scale: f64,
}

impl SemiImplicitEulerIntegrator {
    /// Create an integrator with the default physics constants
    ///
    /// # Panics
    ///
    /// Panics if timestep is non-positive, NaN, or infinite
    pub fn new(timestep: f64) -> Self {
        assert!(
            timestep > 0.0 && timestep.is_finite(),
            "Timestep must be positive and finite"
        );
        SemiImplicitEulerIntegrator {
            timestep,
            gravity: GRAVITY,
            drag_coefficient: DRAG_COEFFICIENT,
            drag_model: DragModel::default(),
            distance_scale: DISTANCE_SCALE,
        }
    }

    /// Create an integrator from a constant bundle
    ///
    /// # Panics
    ///
    /// Panics if the configured timestep is non-positive, NaN, or infinite
    pub fn from_config(config: &SimulationConfig) -> Self {
        let mut integrator = SemiImplicitEulerIntegrator::new(config.timestep);
        integrator.gravity = config.gravity;
        integrator.drag_coefficient = config.drag_coefficient;
        integrator.drag_model = config.drag_model;
        integrator.distance_scale = config.distance_scale;
        integrator
    }

    /// Switch the drag formula
    pub fn with_drag_model(mut self, drag_model: DragModel) -> Self {
        self.drag_model = drag_model;
        self
    }

    /// Drag formula in use
    pub fn drag_model(&self) -> DragModel {
        self.drag_model
    }
}

impl Integrator for SemiImplicitEulerIntegrator {
    fn name(&self) -> &str {
        "Semi-implicit Euler"
    }

    fn timestep(&self) -> f64 {
        self.timestep
    }

    fn set_timestep(&mut self, dt: f64) {
        assert!(
            dt > 0.0 && dt.is_finite(),
            "Timestep must be positive and finite"
        );
        self.timestep = dt;
    }

    fn step(&self, ball: &mut Ball, bounds: &Bounds) -> BoundaryContact {
        let dt = self.timestep;
        let (mass, radius, restitution) = (ball.mass(), ball.radius(), ball.restitution());

        let ax = self
            .drag_model
            .acceleration(self.drag_coefficient, radius, mass, ball.velocity.dx());
        let ay = self.gravity
            + self
                .drag_model
                .acceleration(self.drag_coefficient, radius, mass, ball.velocity.dy());

        let dx = ball.velocity.dx() + ax * dt;
        let dy = ball.velocity.dy() + ay * dt;
        let x = ball.position.x() + dx * dt * self.distance_scale;
        let y = ball.position.y() + dy * dt * self.distance_scale;

        let (x, dx, contact_x) = resolve_axis(x, dx, radius, bounds.width(), restitution);
        let (y, dy, contact_y) = resolve_axis(y, dy, radius, bounds.height(), restitution);

        ball.position.set_x(x);
        ball.position.set_y(y);
        ball.velocity.set_dx(dx);
        ball.velocity.set_dy(dy);

        let contact = BoundaryContact { x: contact_x, y: contact_y };
        if contact.any() {
            debug!("{} bounced {:?} at ({:.1}, {:.1})", ball.id(), contact, x, y);
        }
        if !ball.is_valid() {
            warn!("Integration produced invalid state for {}", ball.id());
        }

        contact
    }
}
