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
//! Drawing collaborator
//!
//! The crate never talks to a real graphics API. Hosts implement [`Canvas`]
//! over whatever surface they have; [`AsciiCanvas`] is a terminal-friendly
//! implementation used by the headless demo and by tests.

use std::fmt;

use crate::ball::{Ball, Bounds};
use crate::components::Position;

/// Surface that balls are drawn onto
pub trait Canvas {
    /// Wipe the whole viewport
    fn clear(&mut self, bounds: &Bounds);

    /// Draw a filled and stroked circle
    fn draw_circle(&mut self, center: Position, radius: f64);
}

/// Draw a single ball
pub fn draw_ball<C: Canvas + ?Sized>(ball: &Ball, canvas: &mut C) {
    canvas.draw_circle(ball.position, ball.radius());
}

/// Draw every ball in spawn order
pub fn render<C: Canvas + ?Sized>(balls: &[Ball], canvas: &mut C) {
    for ball in balls {
        draw_ball(ball, canvas);
    }
}

/// Character-grid canvas
///
/// Each cell covers `cell_size` pixels square. A circle marks every cell
/// whose center lies inside it, and always marks the cell under its center.
pub struct AsciiCanvas {
    columns: usize,
    rows: usize,
    cell_size: f64,
    cells: Vec<char>,
}

impl AsciiCanvas {
    /// Create a blank canvas of `columns` by `rows` cells
    ///
    /// # Panics
    ///
    /// Panics if `cell_size` is non-positive or not finite
    pub fn new(columns: usize, rows: usize, cell_size: f64) -> Self {
        assert!(
            cell_size > 0.0 && cell_size.is_finite(),
            "Cell size must be positive and finite"
        );
        AsciiCanvas {
            columns,
            rows,
            cell_size,
            cells: vec![' '; columns * rows],
        }
    }

    /// Create a canvas sized to cover `bounds`
    pub fn for_bounds(bounds: &Bounds, cell_size: f64) -> Self {
        let columns = (bounds.width() / cell_size).ceil().max(0.0) as usize;
        let rows = (bounds.height() / cell_size).ceil().max(0.0) as usize;
        AsciiCanvas::new(columns, rows, cell_size)
    }

    /// Character at a cell, if inside the grid
    pub fn cell(&self, column: usize, row: usize) -> Option<char> {
        if column < self.columns && row < self.rows {
            Some(self.cells[row * self.columns + column])
        } else {
            None
        }
    }

    /// Number of marked cells
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|&&c| c != ' ').count()
    }

    fn mark(&mut self, column: usize, row: usize, c: char) {
        if column < self.columns && row < self.rows {
            self.cells[row * self.columns + column] = c;
        }
    }
}

impl Canvas for AsciiCanvas {
    fn clear(&mut self, _bounds: &Bounds) {
        self.cells.iter_mut().for_each(|c| *c = ' ');
    }

    fn draw_circle(&mut self, center: Position, radius: f64) {
        if !center.is_valid() || center.x() < 0.0 || center.y() < 0.0 {
            return;
        }
        let size = self.cell_size;
        let r_sq = radius * radius;

        let min_col = ((center.x() - radius) / size).floor().max(0.0) as usize;
        let max_col = ((center.x() + radius) / size).floor().max(0.0) as usize;
        let min_row = ((center.y() - radius) / size).floor().max(0.0) as usize;
        let max_row = ((center.y() + radius) / size).floor().max(0.0) as usize;

        for row in min_row..=max_row.min(self.rows.saturating_sub(1)) {
            for col in min_col..=max_col.min(self.columns.saturating_sub(1)) {
                let cx = (col as f64 + 0.5) * size - center.x();
                let cy = (row as f64 + 0.5) * size - center.y();
                if cx * cx + cy * cy <= r_sq {
                    self.mark(col, row, 'o');
                }
            }
        }

        let col = (center.x() / size) as usize;
        let row = (center.y() / size) as usize;
        self.mark(col, row, '@');
    }
}

impl fmt::Display for AsciiCanvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.columns.max(1)) {
            let line: String = row.iter().collect();
            writeln!(f, "|{}|", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ball::BallId;
    use crate::components::Velocity;
    use crate::config::SimulationConfig;

    #[derive(Default)]
    struct RecordingCanvas {
        clears: usize,
        circles: Vec<(Position, f64)>,
    }

    impl Canvas for RecordingCanvas {
        fn clear(&mut self, _bounds: &Bounds) {
            self.clears += 1;
        }

        fn draw_circle(&mut self, center: Position, radius: f64) {
            self.circles.push((center, radius));
        }
    }

    #[test]
    fn test_render_draws_each_ball_once() {
        let config = SimulationConfig::default();
        let balls: Vec<Ball> = (0..3)
            .map(|i| {
                Ball::with_config(
                    BallId::new(i),
                    Position::new(10.0 * i as f64 + 8.0, 20.0),
                    Velocity::zero(),
                    &config,
                )
            })
            .collect();

        let mut canvas = RecordingCanvas::default();
        render(&balls, &mut canvas);

        assert_eq!(canvas.circles.len(), 3);
        assert_eq!(canvas.circles[2], (Position::new(28.0, 20.0), 8.0));
        assert_eq!(canvas.clears, 0);
    }

    #[test]
    fn test_ascii_canvas_marks_center() {
        let mut canvas = AsciiCanvas::new(10, 10, 10.0);
        canvas.draw_circle(Position::new(55.0, 35.0), 8.0);
        assert_eq!(canvas.cell(5, 3), Some('@'));
        assert!(canvas.filled() >= 1);

        canvas.clear(&Bounds::new(100.0, 100.0));
        assert_eq!(canvas.filled(), 0);
    }

    #[test]
    fn test_ascii_canvas_ignores_offscreen() {
        let mut canvas = AsciiCanvas::new(4, 4, 10.0);
        canvas.draw_circle(Position::new(500.0, 500.0), 8.0);
        assert_eq!(canvas.filled(), 0);
    }

    #[test]
    fn test_ascii_canvas_display() {
        let canvas = AsciiCanvas::for_bounds(&Bounds::new(30.0, 20.0), 10.0);
        assert_eq!(canvas.to_string(), "|   |\n|   |\n");
    }
}
