//! A trait for running automata.
use crate::{
    cells::{Cell, Color},
    error::Error,
    rules::Elementary,
    world::World,
};

/// A trait for running automata.
///
/// So that we can switch between different kinds of cells using trait objects.
/// This is everything a display needs: it advances the automaton, edits
/// single cells, and reads the colors to draw.
pub trait Simulation {
    /// Advances the automaton by one generation.
    fn step(&mut self);

    /// Activates the cell at `(i, j)`.
    ///
    /// Returns an error if the position is outside the grid.
    fn activate(&mut self, i: usize, j: usize) -> Result<(), Error>;

    /// Edits the cell at `(i, j)` while the mouse is dragged over it.
    ///
    /// The same as [`activate`](Simulation::activate) unless the cell
    /// says otherwise.
    fn paint(&mut self, i: usize, j: usize) -> Result<(), Error> {
        self.activate(i, j)
    }

    /// Resets the automaton to its default cells.
    fn clear(&mut self);

    /// Whether the generations should advance automatically.
    fn is_running(&self) -> bool;

    /// Pauses or resumes.
    fn set_running(&mut self, running: bool);

    /// Switches between running and paused.
    fn toggle_running(&mut self) {
        let running = self.is_running();
        self.set_running(!running);
    }

    /// Number of columns to display.
    fn cols(&self) -> usize;

    /// Number of rows to display.
    fn rows(&self) -> usize;

    /// Number of generations since the automaton was created or cleared.
    fn generation(&self) -> u64;

    /// The color of the cell at `(i, j)`, if there is such a cell.
    fn color(&self, i: usize, j: usize) -> Option<Color>;

    /// The label of the cell at `(i, j)`, if it has one.
    fn text(&self, i: usize, j: usize) -> Option<String>;

    /// The symbol of the cell at `(i, j)`, if there is such a cell.
    fn symbol(&self, i: usize, j: usize) -> Option<char>;

    /// Displays the whole automaton, one line per row.
    ///
    /// Missing cells are represented by spaces.
    fn plaintext(&self) -> String {
        let mut str = String::with_capacity((self.cols() + 1) * self.rows());
        for j in 0..self.rows() {
            for i in 0..self.cols() {
                str.push(self.symbol(i, j).unwrap_or(' '));
            }
            str.push('\n');
        }
        str
    }
}

/// The `Simulation` trait is implemented for every `World`.
impl<C: Cell> Simulation for World<C> {
    fn step(&mut self) {
        self.step()
    }

    fn activate(&mut self, i: usize, j: usize) -> Result<(), Error> {
        self.activate(i, j)
    }

    fn paint(&mut self, i: usize, j: usize) -> Result<(), Error> {
        self.paint(i, j)
    }

    fn clear(&mut self) {
        self.clear()
    }

    fn is_running(&self) -> bool {
        self.is_running()
    }

    fn set_running(&mut self, running: bool) {
        self.set_running(running)
    }

    fn cols(&self) -> usize {
        self.cols()
    }

    fn rows(&self) -> usize {
        self.rows()
    }

    fn generation(&self) -> u64 {
        self.generation()
    }

    fn color(&self, i: usize, j: usize) -> Option<Color> {
        self.cell(i, j).map(Cell::color)
    }

    fn text(&self, i: usize, j: usize) -> Option<String> {
        self.cell(i, j).and_then(Cell::text)
    }

    fn symbol(&self, i: usize, j: usize) -> Option<char> {
        self.cell(i, j).map(Cell::symbol)
    }

    fn plaintext(&self) -> String {
        self.plaintext()
    }
}

/// Rows are the generations in the history. Activating any cell of
/// a column within the depth flips the current cell of that column.
impl Simulation for Elementary {
    fn step(&mut self) {
        self.step()
    }

    fn activate(&mut self, i: usize, j: usize) -> Result<(), Error> {
        if j >= self.depth() {
            return Err(Error::OutOfRange(i, j, self.cols(), self.depth()));
        }
        self.toggle(i)
    }

    fn clear(&mut self) {
        self.clear()
    }

    fn is_running(&self) -> bool {
        self.world().is_running()
    }

    fn set_running(&mut self, running: bool) {
        self.world_mut().set_running(running)
    }

    fn cols(&self) -> usize {
        self.cols()
    }

    fn rows(&self) -> usize {
        self.depth()
    }

    fn generation(&self) -> u64 {
        self.world().generation()
    }

    fn color(&self, i: usize, j: usize) -> Option<Color> {
        self.cell(i, j).map(Cell::color)
    }

    fn text(&self, i: usize, j: usize) -> Option<String> {
        self.cell(i, j).and_then(Cell::text)
    }

    fn symbol(&self, i: usize, j: usize) -> Option<char> {
        self.cell(i, j).map(Cell::symbol)
    }

    fn plaintext(&self) -> String {
        self.plaintext()
    }
}
