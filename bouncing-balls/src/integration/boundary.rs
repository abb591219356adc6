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
//! Wall contact resolution
//!
//! Runs after the position update. A ball that overshoots a wall during the
//! step is snapped onto the wall (hard clamp, not a mirrored reflection) and
//! its velocity on that axis is multiplied by the restitution coefficient.
//! Touching the wall exactly is not a contact.

/// Which side of an axis a ball hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AxisContact {
    /// Stayed inside
    #[default]
    None,
    /// Crossed `radius` (left or top wall)
    Low,
    /// Crossed `extent - radius` (right or bottom wall)
    High,
}

impl AxisContact {
    /// Whether any wall was hit
    pub fn hit(self) -> bool {
        self != AxisContact::None
    }
}

/// Walls touched by one ball during one step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoundaryContact {
    /// Left (`Low`) or right (`High`) wall
    pub x: AxisContact,
    /// Top (`Low`) or bottom (`High`) wall
    pub y: AxisContact,
}

impl BoundaryContact {
    /// Whether the ball bounced on either axis
    pub fn any(&self) -> bool {
        self.x.hit() || self.y.hit()
    }
}

/// Clamp one axis of a ball against `[radius, extent - radius]`
///
/// Returns the corrected position and velocity along with the contact.
pub fn resolve_axis(
    position: f64,
    velocity: f64,
    radius: f64,
    extent: f64,
    restitution: f64,
) -> (f64, f64, AxisContact) {
    let low = radius;
    let high = extent - radius;

    if position < low {
        (low, velocity * restitution, AxisContact::Low)
    } else if position > high {
        (high, velocity * restitution, AxisContact::High)
    } else {
        (position, velocity, AxisContact::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inside_untouched() {
        let (p, v, c) = resolve_axis(50.0, 3.0, 8.0, 100.0, -0.7);
        assert_eq!((p, v, c), (50.0, 3.0, AxisContact::None));
    }

    #[test]
    fn test_exactly_on_wall_is_not_contact() {
        let (p, v, c) = resolve_axis(92.0, 3.0, 8.0, 100.0, -0.7);
        assert_eq!((p, v, c), (92.0, 3.0, AxisContact::None));
    }

    #[test]
    fn test_overshoot_low_clamps_and_flips() {
        let (p, v, c) = resolve_axis(-4.0, -5.0, 8.0, 100.0, -0.7);
        assert_eq!(p, 8.0);
        assert!((v - 3.5).abs() < 1e-12);
        assert_eq!(c, AxisContact::Low);
    }

    #[test]
    fn test_overshoot_high_clamps_and_flips() {
        let (p, v, c) = resolve_axis(130.0, 10.0, 8.0, 100.0, -0.7);
        assert_eq!(p, 92.0);
        assert!((v + 7.0).abs() < 1e-12);
        assert_eq!(c, AxisContact::High);
    }

    #[test]
    fn test_contact_any() {
        let mut contact = BoundaryContact::default();
        assert!(!contact.any());
        contact.y = AxisContact::High;
        assert!(contact.any());
    }
}
