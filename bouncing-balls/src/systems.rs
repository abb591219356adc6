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
//! Tick system
//!
//! Applies an integrator to every ball. Balls never interact, so the order
//! of integration is irrelevant and, with the `parallel` feature, the work
//! is split across the Rayon thread pool. Each ball's result depends only on
//! its own state, so parallel and sequential ticks agree bit for bit.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use log::trace;

use crate::ball::{Ball, Bounds};
use crate::integration::{Integrator, SemiImplicitEulerIntegrator};

/// Summary of one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickStats {
    /// Balls integrated
    pub integrated: usize,
    /// Balls that touched at least one wall
    pub contacts: usize,
}

/// Advance every ball by `dt` with the default physics constants
///
/// # Panics
///
/// Panics if `dt` is non-positive, NaN, or infinite
pub fn tick(balls: &mut [Ball], dt: f64, bounds: &Bounds) -> TickStats {
    let integrator = SemiImplicitEulerIntegrator::new(dt);
    tick_with(&integrator, balls, bounds)
}

/// Advance every ball by one step of `integrator`
///
/// Uses the Rayon thread pool when the `parallel` feature is enabled.
#[cfg(feature = "parallel")]
pub fn tick_with<I: Integrator>(integrator: &I, balls: &mut [Ball], bounds: &Bounds) -> TickStats {
    let contacts = balls
        .par_iter_mut()
        .map(|ball| integrator.step(ball, bounds))
        .filter(|contact| contact.any())
        .count();
    finish(balls.len(), contacts)
}

/// Advance every ball by one step of `integrator`
///
/// Sequential fallback when the `parallel` feature is disabled.
#[cfg(not(feature = "parallel"))]
pub fn tick_with<I: Integrator>(integrator: &I, balls: &mut [Ball], bounds: &Bounds) -> TickStats {
    tick_sequential(integrator, balls, bounds)
}

/// Advance every ball on the calling thread, in insertion order
pub fn tick_sequential<I: Integrator>(
    integrator: &I,
    balls: &mut [Ball],
    bounds: &Bounds,
) -> TickStats {
    let contacts = balls
        .iter_mut()
        .map(|ball| integrator.step(ball, bounds))
        .filter(|contact| contact.any())
        .count();
    finish(balls.len(), contacts)
}

fn finish(integrated: usize, contacts: usize) -> TickStats {
    trace!("Tick integrated {} balls, {} wall contacts", integrated, contacts);
    TickStats { integrated, contacts }
}
