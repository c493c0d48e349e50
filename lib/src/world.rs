//! The world.

use crate::{
    cells::Cell,
    error::Error,
    neighborhood::{Neighbor, Neighborhood},
};
use log::{debug, trace};
use std::ops::Index;

/// A rectangular array of cells, addressed by `(column, row)`.
///
/// Cells are stored column by column, so `grid[(i, j)]` is the cell
/// in the `i`-th column and the `j`-th row.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<C> {
    cols: usize,
    rows: usize,
    cells: Vec<C>,
}

impl<C> Grid<C> {
    /// Creates a grid, filling position `(i, j)` with `f(i, j)`.
    ///
    /// The function is called column by column.
    pub fn new<F: FnMut(usize, usize) -> C>(cols: usize, rows: usize, mut f: F) -> Self {
        let mut cells = Vec::with_capacity(cols * rows);
        for i in 0..cols {
            for j in 0..rows {
                cells.push(f(i, j));
            }
        }
        Grid { cols, rows, cells }
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    fn index_of(&self, i: usize, j: usize) -> Option<usize> {
        if i < self.cols && j < self.rows {
            Some(i * self.rows + j)
        } else {
            None
        }
    }

    fn wrapping_index_of(&self, i: isize, j: isize) -> usize {
        let i = i.rem_euclid(self.cols as isize) as usize;
        let j = j.rem_euclid(self.rows as isize) as usize;
        i * self.rows + j
    }

    /// The cell at `(i, j)`, or `None` if it is outside the grid.
    pub fn get(&self, i: usize, j: usize) -> Option<&C> {
        self.index_of(i, j).map(|index| &self.cells[index])
    }

    pub(crate) fn get_mut(&mut self, i: usize, j: usize) -> Option<&mut C> {
        self.index_of(i, j).map(move |index| &mut self.cells[index])
    }

    /// The cell at `(i, j)`, where both coordinates wrap around the edges.
    ///
    /// # Panics
    ///
    /// Panics if the grid is empty.
    pub fn wrapping_get(&self, i: isize, j: isize) -> &C {
        &self.cells[self.wrapping_index_of(i, j)]
    }

    pub(crate) fn wrapping_get_mut(&mut self, i: isize, j: isize) -> &mut C {
        let index = self.wrapping_index_of(i, j);
        &mut self.cells[index]
    }

    /// Iterates over all cells with their positions, column by column.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), &C)> {
        let rows = self.rows;
        self.cells
            .iter()
            .enumerate()
            .map(move |(index, cell)| ((index / rows, index % rows), cell))
    }
}

impl<C> Index<(usize, usize)> for Grid<C> {
    type Output = C;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        match self.get(i, j) {
            Some(cell) => cell,
            None => panic!(
                "cell ({}, {}) is outside the {}x{} grid",
                i, j, self.cols, self.rows
            ),
        }
    }
}

/// A grid automaton.
///
/// The world owns a grid of cells on a torus. Each generation is computed
/// into a new grid from the previous one, which then replaces it,
/// so every cell sees the previous generation of all its neighbors.
#[derive(Clone, Debug)]
pub struct World<C: Cell> {
    /// The neighborhood of every cell.
    neighborhood: Neighborhood,

    /// The default cell, which fills the grid when it is created or cleared.
    blank: C,

    /// The current generation.
    grid: Grid<C>,

    /// Whether the generations should advance automatically.
    ///
    /// The world itself never looks at it; it is for whoever drives the world.
    running: bool,

    /// Number of steps since the world was created or cleared.
    generation: u64,
}

impl<C: Cell> World<C> {
    /// Creates a new world of `rows × cols` copies of `blank`.
    ///
    /// Returns an error if the size is zero, or if the cells cannot be used
    /// with the neighborhood.
    pub fn new(
        blank: C,
        neighborhood: Neighborhood,
        rows: usize,
        cols: usize,
    ) -> Result<Self, Error> {
        if rows == 0 || cols == 0 {
            return Err(Error::NonPositiveError);
        }
        C::check_neighborhood(&neighborhood)?;
        debug!(
            "creating a {}x{} world of {} cells, {} neighborhood of radius {}",
            cols,
            rows,
            C::NAME,
            neighborhood.kind(),
            neighborhood.radius()
        );
        let grid = Grid::new(cols, rows, |_, _| blank.clone());
        Ok(World {
            neighborhood,
            blank,
            grid,
            running: true,
            generation: 0,
        })
    }

    /// Advances the world by one generation.
    pub fn step(&mut self) {
        let next = {
            let grid = &self.grid;
            let neighborhood = &self.neighborhood;
            let mut neighbors = Vec::with_capacity(neighborhood.offsets().len());
            Grid::new(grid.cols(), grid.rows(), |i, j| {
                neighborhood.fill(grid, i, j, &mut neighbors);
                grid[(i, j)].update(&neighbors)
            })
        };
        self.grid = next;
        self.generation += 1;
        trace!("{} world: generation {}", C::NAME, self.generation);
    }

    /// Advances the world by `n` generations.
    pub fn steps(&mut self, n: u64) {
        for _ in 0..n {
            self.step();
        }
    }

    /// Replaces the cell at `(i, j)` with its activated version.
    pub fn activate(&mut self, i: usize, j: usize) -> Result<(), Error> {
        let (cols, rows) = (self.cols(), self.rows());
        let cell = self
            .grid
            .get_mut(i, j)
            .ok_or(Error::OutOfRange(i, j, cols, rows))?;
        *cell = cell.activate();
        Ok(())
    }

    /// Replaces the cell at `(i, j)` with its painted version.
    pub fn paint(&mut self, i: usize, j: usize) -> Result<(), Error> {
        let (cols, rows) = (self.cols(), self.rows());
        let cell = self
            .grid
            .get_mut(i, j)
            .ok_or(Error::OutOfRange(i, j, cols, rows))?;
        *cell = cell.paint();
        Ok(())
    }

    /// Replaces the cell at `(i, j)`.
    pub fn set_cell(&mut self, i: usize, j: usize, cell: C) -> Result<(), Error> {
        let (cols, rows) = (self.cols(), self.rows());
        let old = self
            .grid
            .get_mut(i, j)
            .ok_or(Error::OutOfRange(i, j, cols, rows))?;
        *old = cell;
        Ok(())
    }

    /// Places a pattern, given row by row, with its top left corner at `(x, y)`.
    ///
    /// Positions wrap around the edges of the grid.
    pub fn place<P, R>(&mut self, x: isize, y: isize, pattern: P)
    where
        P: IntoIterator<Item = R>,
        R: IntoIterator<Item = C>,
    {
        for (dy, row) in pattern.into_iter().enumerate() {
            for (dx, cell) in row.into_iter().enumerate() {
                *self
                    .grid
                    .wrapping_get_mut(x + dx as isize, y + dy as isize) = cell;
            }
        }
    }

    /// Places a pattern, given row by row, around the center of the grid.
    ///
    /// Both coordinates of the top left corner are shifted back from the
    /// center by half the number of rows of the pattern.
    pub fn place_centered(&mut self, pattern: Vec<Vec<C>>) {
        let half = (pattern.len() / 2) as isize;
        let x = (self.cols() / 2) as isize - half;
        let y = (self.rows() / 2) as isize - half;
        self.place(x, y, pattern);
    }

    /// Resets every cell to the default cell.
    pub fn clear(&mut self) {
        let blank = &self.blank;
        self.grid = Grid::new(self.grid.cols(), self.grid.rows(), |_, _| blank.clone());
        self.generation = 0;
        debug!("cleared the {} world", C::NAME);
    }

    /// The neighbors of the cell at `(i, j)` in the current generation.
    pub fn neighbours(&self, i: usize, j: usize) -> Vec<Neighbor<'_, C>> {
        self.neighborhood.get_neighbours(&self.grid, i, j)
    }

    /// The cell at `(i, j)`.
    pub fn cell(&self, i: usize, j: usize) -> Option<&C> {
        self.grid.get(i, j)
    }

    /// The current generation.
    pub fn grid(&self) -> &Grid<C> {
        &self.grid
    }

    /// The default cell.
    pub fn blank(&self) -> &C {
        &self.blank
    }

    pub fn neighborhood(&self) -> &Neighborhood {
        &self.neighborhood
    }

    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    /// Number of steps since the world was created or cleared.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    pub fn toggle_running(&mut self) {
        self.running = !self.running;
    }

    /// Displays the current generation, one line per row,
    /// one [`symbol`](Cell::symbol) per cell.
    pub fn plaintext(&self) -> String {
        let mut str = String::with_capacity((self.cols() + 1) * self.rows());
        for j in 0..self.rows() {
            for i in 0..self.cols() {
                str.push(self.grid[(i, j)].symbol());
            }
            str.push('\n');
        }
        str
    }
}
