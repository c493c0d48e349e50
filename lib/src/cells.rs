//! Cells in the cellular automaton.

use crate::{
    error::Error,
    neighborhood::{Neighbor, Neighborhood},
};
use std::fmt::{self, Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The state of a cell in a state-indexed automaton.
///
/// For the loop automata a state is a single base-8 digit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct State(pub u8);

/// The quiescent state.
pub const QUIESCENT: State = State(0);

impl Display for State {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The relative position `(dx, dy)` of a neighbor.
///
/// `dx` moves along the columns and `dy` along the rows,
/// so `(0, -1)` is the cell right above.
pub type Offset = (i32, i32);

/// The color of a cell, as handed to the display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    Black,
    Blue,
    Red,
    Green,
    Yellow,
    Magenta,
    White,
    Cyan,
    /// An arbitrary color.
    Rgb(u8, u8, u8),
}

impl Color {
    /// The `(r, g, b)` components of the color.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Color::Black => (0, 0, 0),
            Color::Blue => (0, 0, 255),
            Color::Red => (255, 0, 0),
            Color::Green => (0, 128, 0),
            Color::Yellow => (255, 255, 0),
            Color::Magenta => (255, 0, 255),
            Color::White => (255, 255, 255),
            Color::Cyan => (0, 255, 255),
            Color::Rgb(r, g, b) => (r, g, b),
        }
    }

    /// Converts a color in the HSV model.
    ///
    /// `hue` is in degrees, `saturation` and `value` are in `[0, 1]`.
    pub fn from_hsv(hue: f64, saturation: f64, value: f64) -> Self {
        let h = (hue / 360.0).rem_euclid(1.0) * 6.0;
        let sector = h.floor();
        let f = h - sector;
        let p = value * (1.0 - saturation);
        let q = value * (1.0 - saturation * f);
        let t = value * (1.0 - saturation * (1.0 - f));
        let (r, g, b) = match sector as u8 {
            0 => (value, t, p),
            1 => (q, value, p),
            2 => (p, value, t),
            3 => (p, q, value),
            4 => (t, p, value),
            _ => (value, p, q),
        };
        let channel = |c: f64| (c.clamp(0.0, 1.0) * 255.0) as u8;
        Color::Rgb(channel(r), channel(g), channel(b))
    }
}

/// Named colors are displayed by their names, others as `#rrggbb`.
impl Display for Color {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let s = match self {
            Color::Black => "black",
            Color::Blue => "blue",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Magenta => "magenta",
            Color::White => "white",
            Color::Cyan => "cyan",
            Color::Rgb(r, g, b) => return write!(f, "#{:02x}{:02x}{:02x}", r, g, b),
        };
        write!(f, "{}", s)
    }
}

/// A cell of a grid automaton.
///
/// Cells are values: every transition returns a new cell,
/// and the world replaces the old one with it.
pub trait Cell: Clone {
    /// A short name of the cell kind, used in error messages.
    const NAME: &'static str;

    /// The cell in the next generation, given the neighbors
    /// in the current generation.
    fn update(&self, neighbors: &[Neighbor<'_, Self>]) -> Self;

    /// The cell after a manual edit.
    fn activate(&self) -> Self;

    /// The cell after the mouse is dragged over it.
    fn paint(&self) -> Self {
        self.activate()
    }

    /// The color to display.
    fn color(&self) -> Color;

    /// An optional label to display.
    fn text(&self) -> Option<String> {
        None
    }

    /// A single character representing the cell in plaintext dumps.
    fn symbol(&self) -> char;

    /// Checks whether this kind of cell can interpret the neighbors
    /// enumerated by `neighborhood`.
    ///
    /// The world calls this once when it is created.
    fn check_neighborhood(_neighborhood: &Neighborhood) -> Result<(), Error> {
        Ok(())
    }
}
