//! A version of the Game of Life with floating point cells.
//!
//! The state of a cell is its "activation", a number between 0 and 1.
//! The rule compares the total activation of the neighbors with the
//! neighbor counts of the Game of Life:
//!
//! * If the total is less than 2 or greater than 3, the activation of the
//!   cell decreases by 15% (underpopulation and overpopulation).
//! * If the total is within 0.15 of 3, the activation becomes 1
//!   (reproduction).
//! * Otherwise the cell stays the same.

use crate::{
    cells::{Cell, Color},
    error::Error,
    neighborhood::{Neighbor, Neighborhood},
    world::World,
};

/// Factor of the decay of an underpopulated or overpopulated cell.
const DECAY: f64 = 0.85;

/// How close to 3 the total activation must be for a cell to be born.
const TOLERANCE: f64 = 0.15;

/// Hue of a cell with activation 0, in degrees.
const START_HUE: f64 = 230.0;

/// Hue of a cell with activation 1, in degrees.
const END_HUE: f64 = 320.0;

/// An oval ring, which is a nice starting point.
const RING: [[u8; 8]; 8] = [
    [0, 0, 1, 1, 1, 1, 0, 0],
    [0, 1, 0, 0, 0, 0, 1, 0],
    [1, 1, 0, 0, 0, 0, 1, 1],
    [1, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 1],
    [1, 1, 0, 0, 0, 0, 1, 1],
    [0, 1, 0, 0, 0, 0, 1, 0],
    [0, 0, 1, 1, 1, 1, 0, 0],
];

/// A cell of the floating point Game of Life.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FloatingCell(pub f64);

impl FloatingCell {
    /// The activation of the cell.
    pub fn activation(self) -> f64 {
        self.0
    }

    /// An empty world with the Moore neighborhood.
    pub fn world(rows: usize, cols: usize) -> Result<World<FloatingCell>, Error> {
        World::new(FloatingCell(0.0), Neighborhood::moore(), rows, cols)
    }

    /// An oval ring of fully activated cells, row by row.
    pub fn ring() -> Vec<Vec<FloatingCell>> {
        RING.iter()
            .map(|row| row.iter().map(|&a| FloatingCell(a as f64)).collect())
            .collect()
    }
}

impl Cell for FloatingCell {
    const NAME: &'static str = "floating life";

    fn update(&self, neighbors: &[Neighbor<'_, Self>]) -> Self {
        let total: f64 = neighbors.iter().map(|n| n.cell.0).sum();
        if !(2.0..=3.0).contains(&total) {
            FloatingCell(self.0 * DECAY)
        } else if (total - 3.0).abs() < TOLERANCE {
            FloatingCell(1.0)
        } else {
            *self
        }
    }

    fn activate(&self) -> Self {
        FloatingCell(1.0)
    }

    fn color(&self) -> Color {
        let activation = self.0.clamp(0.0, 1.0);
        Color::from_hsv(START_HUE + (END_HUE - START_HUE) * activation, 1.0, 0.8)
    }

    fn text(&self) -> Option<String> {
        Some(format!("{:.2}", self.0))
    }

    fn symbol(&self) -> char {
        match self.0 {
            a if a < 0.1 => '.',
            a if a < 0.4 => ':',
            a if a < 0.7 => 'o',
            _ => 'O',
        }
    }
}
