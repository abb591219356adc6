//! Simulation state
//!
//! The Simulation is the single context object that owns every ball and the
//! current viewport bounds. Hosts hold it and thread it through their input,
//! timer and render callbacks instead of sharing global state.

use log::{info, warn};
use rand::Rng;

use crate::ball::{Ball, BallId, Bounds};
use crate::config::SimulationConfig;
use crate::error::{Result, SimulationError};
use crate::integration::{Integrator, SemiImplicitEulerIntegrator};
use crate::spawner::spawn_ball;
use crate::systems::{tick_with, TickStats};

/// Owner of the ball collection and viewport bounds
pub struct Simulation {
    balls: Vec<Ball>,
    bounds: Bounds,
    config: SimulationConfig,
    integrator: SemiImplicitEulerIntegrator,
    next_ball_id: u64,
}

impl Simulation {
    /// Create an empty simulation with the default constants
    pub fn new(width: f64, height: f64) -> Result<Self> {
        Self::with_config(SimulationConfig::default(), width, height)
    }

    /// Create an empty simulation with an explicit constant bundle
    pub fn with_config(config: SimulationConfig, width: f64, height: f64) -> Result<Self> {
        config.validate()?;
        let bounds = Bounds::new(width, height);
        if !bounds.fits(config.radius) {
            return Err(SimulationError::InvalidBounds { width, height });
        }

        let integrator = SemiImplicitEulerIntegrator::from_config(&config);
        if let Err(e) = integrator.validate_timestep() {
            warn!("{}", e);
        }

        Ok(Simulation {
            balls: Vec::new(),
            bounds,
            config,
            integrator,
            next_ball_id: 0,
        })
    }

    /// Spawn a ball at pointer coordinates with a random velocity
    pub fn spawn<R: Rng + ?Sized>(&mut self, x: f64, y: f64, rng: &mut R) -> BallId {
        let id = BallId::new(self.next_ball_id);
        self.next_ball_id += 1;
        spawn_ball(&mut self.balls, id, x, y, rng, &self.config)
    }

    /// Store new viewport bounds for subsequent ticks
    ///
    /// Existing balls are not moved here; the next tick clamps them. Bounds
    /// that cannot hold one ball are rejected and the previous ones kept.
    pub fn resize(&mut self, width: f64, height: f64) -> Result<()> {
        let bounds = Bounds::new(width, height);
        if !bounds.fits(self.config.radius) {
            warn!("Ignoring resize to {}: smaller than one ball", bounds);
            return Err(SimulationError::InvalidBounds { width, height });
        }
        info!("Viewport resized from {} to {}", self.bounds, bounds);
        self.bounds = bounds;
        Ok(())
    }

    /// Advance every ball by one fixed timestep
    pub fn tick(&mut self) -> TickStats {
        tick_with(&self.integrator, &mut self.balls, &self.bounds)
    }

    /// Balls in spawn order
    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    /// Look up a ball by id
    pub fn get(&self, id: BallId) -> Option<&Ball> {
        // Ids are assigned sequentially and balls are never removed
        self.balls.get(id.raw() as usize).filter(|b| b.id() == id)
    }

    /// Number of balls
    pub fn len(&self) -> usize {
        self.balls.len()
    }

    /// Whether no ball has been spawned yet
    pub fn is_empty(&self) -> bool {
        self.balls.is_empty()
    }

    /// Current viewport bounds
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Constant bundle
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Integrator applied on every tick
    pub fn integrator(&self) -> &SemiImplicitEulerIntegrator {
        &self.integrator
    }
}
