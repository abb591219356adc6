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
//! Ball spawning
//!
//! A spawned ball starts exactly at the pointer coordinates with an integer
//! velocity drawn uniformly per axis. The random source is injected so that
//! hosts can seed it.

use log::debug;
use rand::Rng;

use crate::ball::{Ball, BallId};
use crate::components::{Position, Velocity};
use crate::config::SimulationConfig;

/// Draw an initial velocity from the configured integer range
pub fn random_velocity<R: Rng + ?Sized>(rng: &mut R, config: &SimulationConfig) -> Velocity {
    let range = config.spawn_velocity_min..config.spawn_velocity_max;
    let dx = rng.gen_range(range.clone());
    let dy = rng.gen_range(range);
    Velocity::new(f64::from(dx), f64::from(dy))
}

/// Create a ball at `(x, y)` and append it to `balls`
///
/// No deduplication and no cap; the collection grows with every call.
pub fn spawn_ball<R: Rng + ?Sized>(
    balls: &mut Vec<Ball>,
    id: BallId,
    x: f64,
    y: f64,
    rng: &mut R,
    config: &SimulationConfig,
) -> BallId {
    let velocity = random_velocity(rng, config);
    let ball = Ball::with_config(id, Position::new(x, y), velocity, config);
    debug!(
        "Spawned {} at ({:.1}, {:.1}) with velocity ({}, {})",
        id,
        x,
        y,
        velocity.dx(),
        velocity.dy()
    );
    balls.push(ball);
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_spawn_appends_at_pointer() {
        let mut rng = StdRng::seed_from_u64(42);
        let config = SimulationConfig::default();
        let mut balls = Vec::new();

        spawn_ball(&mut balls, BallId::new(0), 640.0, 360.0, &mut rng, &config);
        spawn_ball(&mut balls, BallId::new(1), 640.0, 360.0, &mut rng, &config);

        assert_eq!(balls.len(), 2);
        assert_eq!(balls[0].position, Position::new(640.0, 360.0));
        assert_eq!(balls[1].id(), BallId::new(1));
    }

    #[test]
    fn test_random_velocity_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let config = SimulationConfig::default();
        for _ in 0..1000 {
            let v = random_velocity(&mut rng, &config);
            assert!(v.dx() >= -20.0 && v.dx() < 20.0);
            assert!(v.dy() >= -20.0 && v.dy() < 20.0);
            assert_eq!(v.dx().fract(), 0.0);
            assert_eq!(v.dy().fract(), 0.0);
        }
    }

    #[test]
    fn test_same_seed_same_velocity() {
        let config = SimulationConfig::default();
        let a = random_velocity(&mut StdRng::seed_from_u64(99), &config);
        let b = random_velocity(&mut StdRng::seed_from_u64(99), &config);
        assert_eq!(a, b);
    }
}
