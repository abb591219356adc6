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
//! Planar kinematic components
//!
//! Position is measured in canvas pixels with the origin at the top-left
//! corner and y growing downwards. Velocity is in internal units per second;
//! the integrator converts it to pixels with the distance scale.

/// 2D position in canvas pixels
///
/// # Examples
///
/// ```
/// use bouncing_balls::components::Position;
///
/// let pos = Position::new(640.0, 360.0);
/// assert_eq!(pos.x(), 640.0);
/// assert!(pos.is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    x: f64,
    y: f64,
}

impl Position {
    /// Create a new position with the given coordinates
    pub fn new(x: f64, y: f64) -> Self {
        Position { x, y }
    }

    /// Create a position at the canvas origin
    pub fn zero() -> Self {
        Position::new(0.0, 0.0)
    }

    /// Get the x coordinate
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Get the y coordinate
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Set the x coordinate
    pub fn set_x(&mut self, x: f64) {
        self.x = x;
    }

    /// Set the y coordinate
    pub fn set_y(&mut self, y: f64) {
        self.y = y;
    }

    /// Check if both coordinates are finite (not NaN or infinite)
    pub fn is_valid(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Get the position as an array
    pub fn as_array(&self) -> [f64; 2] {
        [self.x, self.y]
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::zero()
    }
}

/// 2D velocity in internal units per second
///
/// # Examples
///
/// ```
/// use bouncing_balls::components::Velocity;
///
/// let vel = Velocity::new(-5.0, 12.0);
/// assert!(vel.is_valid());
/// assert_eq!(vel.magnitude(), 13.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Velocity {
    dx: f64,
    dy: f64,
}

impl Velocity {
    /// Create a new velocity with the given components
    pub fn new(dx: f64, dy: f64) -> Self {
        Velocity { dx, dy }
    }

    /// Create a zero velocity (at rest)
    pub fn zero() -> Self {
        Velocity::new(0.0, 0.0)
    }

    /// Get the x component
    pub fn dx(&self) -> f64 {
        self.dx
    }

    /// Get the y component
    pub fn dy(&self) -> f64 {
        self.dy
    }

    /// Set the x component
    pub fn set_dx(&mut self, dx: f64) {
        self.dx = dx;
    }

    /// Set the y component
    pub fn set_dy(&mut self, dy: f64) {
        self.dy = dy;
    }

    /// Check if both components are finite (not NaN or infinite)
    pub fn is_valid(&self) -> bool {
        self.dx.is_finite() && self.dy.is_finite()
    }

    /// Get the velocity as an array
    pub fn as_array(&self) -> [f64; 2] {
        [self.dx, self.dy]
    }

    /// Calculate the magnitude (speed) of the velocity vector
    pub fn magnitude(&self) -> f64 {
        (self.dx * self.dx + self.dy * self.dy).sqrt()
    }
}

impl Default for Velocity {
    fn default() -> Self {
        Velocity::zero()
    }
}
