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
//! Error types for the simulation glue
//!
//! The numeric core never fails. Errors only surface where the host feeds
//! values in: timesteps, viewport sizes and the constant bundle.

/// Errors reported by validation at the edges of the simulation
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// Timestep is non-positive, NaN or infinite
    #[error("Invalid timestep: {0}. Must be positive and finite.")]
    InvalidTimestep(f64),

    /// Timestep is usable but likely to misbehave
    #[error("Warning: Timestep {dt} is {reason}")]
    SuspiciousTimestep {
        /// The offending timestep
        dt: f64,
        /// Short description of the problem
        reason: &'static str,
    },

    /// Viewport cannot hold a single ball
    #[error("Invalid bounds {width}x{height}: must be finite and at least one ball diameter per side")]
    InvalidBounds {
        /// Requested width in pixels
        width: f64,
        /// Requested height in pixels
        height: f64,
    },

    /// Constant bundle is internally inconsistent
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, SimulationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SimulationError::InvalidTimestep(-1.0);
        assert!(err.to_string().contains("Must be positive and finite"));

        let err = SimulationError::InvalidBounds { width: 4.0, height: 600.0 };
        assert!(err.to_string().contains("4x600"));
    }
}
