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
//! Drag and wall contacts only ever remove energy

use bouncing_balls::config::SimulationConfig;
use bouncing_balls::integration::{calculate_kinetic_energy, calculate_total_kinetic_energy};
use bouncing_balls::Simulation;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn weightless() -> SimulationConfig {
    SimulationConfig {
        gravity: 0.0,
        ..Default::default()
    }
}

#[test]
fn test_kinetic_energy_never_grows_without_gravity() {
    let mut rng = StdRng::seed_from_u64(12);
    let mut sim = Simulation::with_config(weightless(), 640.0, 480.0).unwrap();
    for _ in 0..30 {
        let x = rng.gen_range(8.0..632.0);
        let y = rng.gen_range(8.0..472.0);
        sim.spawn(x, y, &mut rng);
    }

    let mut previous = calculate_total_kinetic_energy(sim.balls());
    for _ in 0..1000 {
        sim.tick();
        let current = calculate_total_kinetic_energy(sim.balls());
        assert!(current <= previous, "energy grew from {} to {}", previous, current);
        previous = current;
    }
}

#[test]
fn test_each_ball_loses_energy_over_time() {
    let mut rng = StdRng::seed_from_u64(8);
    let mut sim = Simulation::with_config(weightless(), 300.0, 300.0).unwrap();
    for _ in 0..10 {
        sim.spawn(150.0, 150.0, &mut rng);
    }
    let initial: Vec<f64> = sim.balls().iter().map(calculate_kinetic_energy).collect();

    for _ in 0..400 {
        sim.tick();
    }

    for (ball, start) in sim.balls().iter().zip(initial) {
        let end = calculate_kinetic_energy(ball);
        assert!(end <= start);
        if start > 0.0 {
            assert!(end < start * 0.5, "{} kept too much energy", ball.id());
        }
    }
}
