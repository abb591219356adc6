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
//! Frame driver
//!
//! Glue between a host's event loop and the simulation. The host forwards
//! pointer and resize events through [`FrameDriver::handle_event`] and calls
//! [`FrameDriver::frame`] on its fixed-interval timer, or
//! [`FrameDriver::advance`] with measured wall time when it has no such
//! timer.
//!
//! # Example
//!
//! ```
//! use bouncing_balls::driver::{FrameDriver, InputEvent};
//! use bouncing_balls::render::AsciiCanvas;
//! use bouncing_balls::world::Simulation;
//!
//! let simulation = Simulation::new(320.0, 240.0).unwrap();
//! let mut driver = FrameDriver::with_seed(simulation, 42);
//! let mut canvas = AsciiCanvas::new(32, 24, 10.0);
//!
//! driver.handle_event(InputEvent::Click { x: 160.0, y: 40.0 }, &mut canvas).unwrap();
//! driver.frame(&mut canvas);
//! assert_eq!(driver.frame_count(), 1);
//! ```

use std::time::Duration;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::ball::BallId;
use crate::error::Result;
use crate::integration::Integrator;
use crate::render::{draw_ball, render, Canvas};
use crate::systems::TickStats;
use crate::world::Simulation;

/// Most frames [`FrameDriver::advance`] runs in one call before dropping
/// the backlog
pub const MAX_CATCH_UP_FRAMES: usize = 8;

/// Host input forwarded to the simulation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer click or touch at canvas coordinates
    Click {
        /// Horizontal pixel coordinate
        x: f64,
        /// Vertical pixel coordinate
        y: f64,
    },
    /// Viewport changed size
    Resize {
        /// New width in pixels
        width: f64,
        /// New height in pixels
        height: f64,
    },
}

/// Fixed-cadence loop around a [`Simulation`]
pub struct FrameDriver<R: Rng = StdRng> {
    simulation: Simulation,
    rng: R,
    accumulator: f64,
    frame_count: u64,
}

impl FrameDriver<StdRng> {
    /// Drive `simulation` with an entropy-seeded random source
    pub fn new(simulation: Simulation) -> Self {
        FrameDriver::with_rng(simulation, StdRng::from_entropy())
    }

    /// Drive `simulation` with a reproducible random source
    pub fn with_seed(simulation: Simulation, seed: u64) -> Self {
        FrameDriver::with_rng(simulation, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> FrameDriver<R> {
    /// Drive `simulation` with a caller-supplied random source
    pub fn with_rng(simulation: Simulation, rng: R) -> Self {
        FrameDriver {
            simulation,
            rng,
            accumulator: 0.0,
            frame_count: 0,
        }
    }

    /// Apply one input event
    ///
    /// A click spawns a ball and draws it right away, before the next frame.
    /// Returns the id of the spawned ball, if any.
    pub fn handle_event<C: Canvas + ?Sized>(
        &mut self,
        event: InputEvent,
        canvas: &mut C,
    ) -> Result<Option<BallId>> {
        match event {
            InputEvent::Click { x, y } => {
                let id = self.simulation.spawn(x, y, &mut self.rng);
                if let Some(ball) = self.simulation.get(id) {
                    draw_ball(ball, canvas);
                }
                Ok(Some(id))
            }
            InputEvent::Resize { width, height } => {
                self.simulation.resize(width, height)?;
                Ok(None)
            }
        }
    }

    /// Run one frame: clear, tick, draw
    ///
    /// With no balls the frame stops after clearing.
    pub fn frame<C: Canvas + ?Sized>(&mut self, canvas: &mut C) -> TickStats {
        self.frame_count += 1;
        canvas.clear(&self.simulation.bounds());

        if self.simulation.is_empty() {
            return TickStats::default();
        }

        let stats = self.simulation.tick();
        render(self.simulation.balls(), canvas);
        stats
    }

    /// Run as many fixed frames as fit into `elapsed` plus the carried
    /// remainder
    ///
    /// Returns the number of frames run. At most [`MAX_CATCH_UP_FRAMES`]
    /// run per call; any further backlog is discarded.
    pub fn advance<C: Canvas + ?Sized>(&mut self, elapsed: Duration, canvas: &mut C) -> usize {
        let dt = self.simulation.integrator().timestep();
        self.accumulator += elapsed.as_secs_f64();

        let mut frames = 0;
        while self.accumulator >= dt {
            if frames == MAX_CATCH_UP_FRAMES {
                debug!(
                    "Dropping {:.3}s of simulation backlog after {} frames",
                    self.accumulator, frames
                );
                self.accumulator = 0.0;
                break;
            }
            self.frame(canvas);
            self.accumulator -= dt;
            frames += 1;
        }
        frames
    }

    /// Fixed interval between frames
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(self.simulation.integrator().timestep())
    }

    /// Frames run so far
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Driven simulation
    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }

    /// Give the simulation back to the caller
    pub fn into_simulation(self) -> Simulation {
        self.simulation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ball::Bounds;
    use crate::components::Position;
    use crate::error::SimulationError;

    #[derive(Default)]
    struct CountingCanvas {
        clears: usize,
        circles: usize,
    }

    impl Canvas for CountingCanvas {
        fn clear(&mut self, _bounds: &Bounds) {
            self.clears += 1;
        }

        fn draw_circle(&mut self, _center: Position, _radius: f64) {
            self.circles += 1;
        }
    }

    fn driver() -> FrameDriver {
        FrameDriver::with_seed(Simulation::new(640.0, 480.0).unwrap(), 11)
    }

    #[test]
    fn test_click_spawns_and_draws() {
        let mut driver = driver();
        let mut canvas = CountingCanvas::default();

        let id = driver
            .handle_event(InputEvent::Click { x: 100.0, y: 50.0 }, &mut canvas)
            .unwrap();

        assert_eq!(id, Some(BallId::new(0)));
        assert_eq!(driver.simulation().len(), 1);
        assert_eq!(canvas.circles, 1);
    }

    #[test]
    fn test_resize_event() {
        let mut driver = driver();
        let mut canvas = CountingCanvas::default();

        driver
            .handle_event(InputEvent::Resize { width: 800.0, height: 600.0 }, &mut canvas)
            .unwrap();
        assert_eq!(driver.simulation().bounds(), Bounds::new(800.0, 600.0));

        let err = driver
            .handle_event(InputEvent::Resize { width: 0.0, height: 600.0 }, &mut canvas)
            .unwrap_err();
        assert!(matches!(err, SimulationError::InvalidBounds { .. }));
    }

    #[test]
    fn test_empty_frame_only_clears() {
        let mut driver = driver();
        let mut canvas = CountingCanvas::default();

        let stats = driver.frame(&mut canvas);

        assert_eq!(stats.integrated, 0);
        assert_eq!(canvas.clears, 1);
        assert_eq!(canvas.circles, 0);
        assert_eq!(driver.frame_count(), 1);
    }

    #[test]
    fn test_frame_clears_ticks_and_draws() {
        let mut driver = driver();
        let mut canvas = CountingCanvas::default();
        driver.handle_event(InputEvent::Click { x: 100.0, y: 50.0 }, &mut canvas).unwrap();
        driver.handle_event(InputEvent::Click { x: 200.0, y: 50.0 }, &mut canvas).unwrap();

        let stats = driver.frame(&mut canvas);

        assert_eq!(stats.integrated, 2);
        assert_eq!(canvas.clears, 1);
        assert_eq!(canvas.circles, 4);
    }

    #[test]
    fn test_advance_runs_fixed_frames() {
        let mut driver = driver();
        let mut canvas = CountingCanvas::default();

        assert_eq!(driver.advance(Duration::from_millis(60), &mut canvas), 2);
        // 10ms carried over, 20ms more completes the third frame
        assert_eq!(driver.advance(Duration::from_millis(20), &mut canvas), 1);
        assert_eq!(driver.frame_count(), 3);
    }

    #[test]
    fn test_advance_caps_backlog() {
        let mut driver = driver();
        let mut canvas = CountingCanvas::default();

        let frames = driver.advance(Duration::from_secs(5), &mut canvas);
        assert_eq!(frames, MAX_CATCH_UP_FRAMES);
        assert_eq!(driver.advance(Duration::ZERO, &mut canvas), 0);
    }

    #[test]
    fn test_frame_interval() {
        assert_eq!(driver().frame_interval(), Duration::from_millis(25));
    }
}
