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
//! Ball records and viewport bounds

use std::fmt;

use crate::components::{Position, Velocity};
use crate::config::SimulationConfig;

/// Unique identifier handed out at spawn time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BallId(u64);

impl BallId {
    /// Create a new BallId from a raw u64 value
    pub fn new(id: u64) -> Self {
        BallId(id)
    }

    /// Get the raw u64 value
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for BallId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ball({})", self.0)
    }
}

/// A single bouncing ball
///
/// Plain data: the integrator mutates position and velocity each tick,
/// everything else is fixed at spawn.
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    id: BallId,
    /// Center in canvas pixels
    pub position: Position,
    /// Velocity in internal units per second
    pub velocity: Velocity,
    mass: f64,
    radius: f64,
    restitution: f64,
}

impl Ball {
    /// Create a ball with explicit physical properties
    pub fn new(
        id: BallId,
        position: Position,
        velocity: Velocity,
        mass: f64,
        radius: f64,
        restitution: f64,
    ) -> Self {
        Ball {
            id,
            position,
            velocity,
            mass,
            radius,
            restitution,
        }
    }

    /// Create a ball carrying the shared mass, radius and restitution
    pub fn with_config(
        id: BallId,
        position: Position,
        velocity: Velocity,
        config: &SimulationConfig,
    ) -> Self {
        Ball::new(id, position, velocity, config.mass, config.radius, config.restitution)
    }

    /// Identifier assigned at spawn
    pub fn id(&self) -> BallId {
        self.id
    }

    /// Mass
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Radius in pixels
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Negative velocity multiplier applied on wall contact
    pub fn restitution(&self) -> f64 {
        self.restitution
    }

    /// Position and velocity are both finite
    pub fn is_valid(&self) -> bool {
        self.position.is_valid() && self.velocity.is_valid()
    }

    /// Whether the center lies within `[r, dim - r]` on both axes
    pub fn is_within(&self, bounds: &Bounds) -> bool {
        let r = self.radius;
        let (x, y) = (self.position.x(), self.position.y());
        x >= r && x <= bounds.width() - r && y >= r && y <= bounds.height() - r
    }
}

/// Viewport dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    width: f64,
    height: f64,
}

impl Bounds {
    /// Create bounds for a `width` by `height` viewport
    pub fn new(width: f64, height: f64) -> Self {
        Bounds { width, height }
    }

    /// Viewport width
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Viewport height
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Whether a ball of `radius` fits on both axes
    pub fn fits(&self, radius: f64) -> bool {
        self.width.is_finite()
            && self.height.is_finite()
            && self.width >= 2.0 * radius
            && self.height >= 2.0 * radius
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
