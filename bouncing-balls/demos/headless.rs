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
//! Headless bouncing balls
//!
//! Drives the frame loop without a window: a handful of scripted clicks and
//! one resize, rendered to the terminal as ASCII art every few frames.
//!
//! Run with `RUST_LOG=debug` to see spawns, resizes and wall contacts.

use bouncing_balls::driver::{FrameDriver, InputEvent};
use bouncing_balls::integration::calculate_total_kinetic_energy;
use bouncing_balls::render::AsciiCanvas;
use bouncing_balls::{Bounds, Simulation, SimulationError};

const CELL_SIZE: f64 = 10.0;

fn main() -> Result<(), SimulationError> {
    env_logger::init();

    println!("Bouncing Balls - Headless Example");
    println!("=================================\n");

    let simulation = Simulation::new(640.0, 320.0)?;
    let mut driver = FrameDriver::with_seed(simulation, 2025);
    let mut canvas = AsciiCanvas::for_bounds(&driver.simulation().bounds(), CELL_SIZE);

    let clicks = [(120.0, 40.0), (320.0, 60.0), (500.0, 30.0), (600.0, 200.0)];
    for (x, y) in clicks {
        let id = driver.handle_event(InputEvent::Click { x, y }, &mut canvas)?;
        if let Some(id) = id {
            println!("Spawned {} at ({:.0}, {:.0})", id, x, y);
        }
    }

    let interval = driver.frame_interval();
    println!("\nFrame interval: {:?}", interval);

    for second in 0..4 {
        // One second of wall time, delivered in timer-sized slices
        for _ in 0..40 {
            driver.advance(interval, &mut canvas);
        }

        println!(
            "\nt = {}s, frames = {}, kinetic energy = {:.3}",
            second + 1,
            driver.frame_count(),
            calculate_total_kinetic_energy(driver.simulation().balls())
        );
        print!("{}", canvas);

        if second == 1 {
            let bounds = Bounds::new(400.0, 200.0);
            driver.handle_event(
                InputEvent::Resize {
                    width: bounds.width(),
                    height: bounds.height(),
                },
                &mut canvas,
            )?;
            canvas = AsciiCanvas::for_bounds(&bounds, CELL_SIZE);
            println!("\nResized viewport to {}", bounds);
        }
    }

    println!(
        "\nExample completed ({} balls, {}ms cadence)",
        driver.simulation().len(),
        interval.as_millis()
    );
    Ok(())
}
