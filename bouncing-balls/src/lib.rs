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
//! # Bouncing Balls
//!
//! A small fixed-timestep simulation of balls falling under gravity inside a
//! rectangular viewport, damped by a velocity-squared drag term and
//! rebounding off the walls with energy loss.
//!
//! ## Features
//!
//! - **Semi-implicit Euler**: velocity first, then position, then a hard
//!   clamp against the walls
//! - **Explicit state**: one [`Simulation`] owns the balls and the bounds
//! - **Host seams**: [`render::Canvas`] for drawing, [`driver::InputEvent`]
//!   for pointer and resize input
//! - **Parallelization**: optional Rayon integration for large ball counts
//!
//! ## Example
//!
//! ```rust
//! use bouncing_balls::Simulation;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut sim = Simulation::new(640.0, 480.0).unwrap();
//! let mut rng = StdRng::seed_from_u64(1);
//! let id = sim.spawn(320.0, 100.0, &mut rng);
//!
//! for _ in 0..40 {
//!     sim.tick();
//! }
//! assert!(sim.get(id).unwrap().is_within(&sim.bounds()));
//! ```

#![warn(missing_docs)]

/// Ball records and viewport bounds
pub mod ball;

/// Planar position and velocity
pub mod components;

/// Fixed physics constants
pub mod config;

/// Frame loop glue for hosts
pub mod driver;

/// Error types
pub mod error;

/// Numerical integration
pub mod integration;

/// Drawing collaborator
pub mod render;

/// Ball spawning
pub mod spawner;

/// Tick system
pub mod systems;

/// Simulation state
pub mod world;

pub use ball::{Ball, BallId, Bounds};
pub use error::SimulationError;
pub use world::Simulation;
