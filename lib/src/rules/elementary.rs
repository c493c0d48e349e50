//! Elementary cellular automata.
//!
//! One-dimensional automata with two states, where the next state of a cell
//! depends on itself and its left and right neighbors. The 8 possible
//! neighborhoods `(left, center, right)`, read as binary numbers, select the
//! bits of the rule number, so there are 256 rules.
//!
//! See [Elementary cellular automaton](https://en.wikipedia.org/wiki/Elementary_cellular_automaton).

use crate::{
    cells::{Cell, Color},
    error::Error,
    neighborhood::{Neighbor, Neighborhood},
    world::World,
};
use std::collections::VecDeque;

/// A cell of an elementary cellular automaton.
///
/// Every cell carries the rule number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ElementaryCell {
    alive: bool,
    rule: u8,
}

impl ElementaryCell {
    /// A dead cell.
    pub fn new(rule: u8) -> Self {
        ElementaryCell { alive: false, rule }
    }

    pub fn is_alive(self) -> bool {
        self.alive
    }

    pub fn rule(self) -> u8 {
        self.rule
    }
}

impl Cell for ElementaryCell {
    const NAME: &'static str = "elementary";

    fn update(&self, neighbors: &[Neighbor<'_, Self>]) -> Self {
        let (mut left, mut right) = (false, false);
        for neighbor in neighbors {
            match neighbor.offset {
                Some((-1, 0)) => left = neighbor.cell.alive,
                Some((1, 0)) => right = neighbor.cell.alive,
                _ => (),
            }
        }
        let index = (left as u8) << 2 | (self.alive as u8) << 1 | right as u8;
        ElementaryCell {
            alive: self.rule >> index & 1 == 1,
            rule: self.rule,
        }
    }

    fn activate(&self) -> Self {
        ElementaryCell {
            alive: !self.alive,
            rule: self.rule,
        }
    }

    fn color(&self) -> Color {
        if self.alive {
            Color::Black
        } else {
            Color::White
        }
    }

    fn symbol(&self) -> char {
        if self.alive {
            'o'
        } else {
            '.'
        }
    }

    /// Requires a positional neighborhood of radius 1.
    fn check_neighborhood(neighborhood: &Neighborhood) -> Result<(), Error> {
        if neighborhood.is_positional() && neighborhood.radius() == 1 {
            Ok(())
        } else {
            Err(Error::NeighborhoodError(Self::NAME))
        }
    }
}

/// An elementary cellular automaton, with the last few generations kept
/// for display.
///
/// The automaton is a world of a single row. Each generation becomes
/// a row of the history, the oldest at the top.
#[derive(Clone, Debug)]
pub struct Elementary {
    world: World<ElementaryCell>,

    /// The recent generations, oldest first.
    history: VecDeque<Vec<ElementaryCell>>,

    /// Maximal length of the history.
    depth: usize,
}

impl Elementary {
    /// Creates an automaton of `cols` dead cells, which keeps
    /// `depth` generations.
    ///
    /// It is not running when created.
    pub fn new(rule: u8, cols: usize, depth: usize) -> Result<Self, Error> {
        if depth == 0 {
            return Err(Error::NonPositiveError);
        }
        let neighborhood = Neighborhood::von_neumann().set_positional(true);
        let mut world = World::new(ElementaryCell::new(rule), neighborhood, 1, cols)?;
        world.set_running(false);
        let mut elementary = Elementary {
            world,
            history: VecDeque::with_capacity(depth + 1),
            depth,
        };
        elementary.reset_history();
        Ok(elementary)
    }

    fn current_row(&self) -> Vec<ElementaryCell> {
        (0..self.cols()).map(|i| self.world.grid()[(i, 0)]).collect()
    }

    fn reset_history(&mut self) {
        self.history.clear();
        self.history.push_back(self.current_row());
    }

    /// Computes the next generation and appends it to the history.
    pub fn step(&mut self) {
        self.world.step();
        self.history.push_back(self.current_row());
        while self.history.len() > self.depth {
            self.history.pop_front();
        }
    }

    /// Flips the cell in the `i`-th column.
    ///
    /// The history starts over from the edited generation.
    pub fn toggle(&mut self, i: usize) -> Result<(), Error> {
        self.world.activate(i, 0)?;
        self.reset_history();
        Ok(())
    }

    /// Sets a single living cell in the middle.
    pub fn set_center(&mut self) {
        self.world.clear();
        let center = self.cols() / 2;
        let alive = ElementaryCell::new(self.rule()).activate();
        self.world.place(center as isize, 0, [[alive]]);
        self.reset_history();
    }

    /// Kills all cells and forgets the history.
    pub fn clear(&mut self) {
        self.world.clear();
        self.reset_history();
    }

    /// The cell in the `i`-th column, `j` generations after the oldest
    /// generation in the history.
    pub fn cell(&self, i: usize, j: usize) -> Option<&ElementaryCell> {
        self.history.get(j).and_then(|row| row.get(i))
    }

    /// The recent generations, oldest first.
    pub fn history(&self) -> &VecDeque<Vec<ElementaryCell>> {
        &self.history
    }

    /// The underlying one-row world.
    pub fn world(&self) -> &World<ElementaryCell> {
        &self.world
    }

    pub(crate) fn world_mut(&mut self) -> &mut World<ElementaryCell> {
        &mut self.world
    }

    pub fn rule(&self) -> u8 {
        self.world.blank().rule()
    }

    pub fn cols(&self) -> usize {
        self.world.cols()
    }

    /// Maximal number of generations kept.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Displays the history, one generation per line.
    pub fn plaintext(&self) -> String {
        let mut str = String::with_capacity((self.cols() + 1) * self.history.len());
        for row in &self.history {
            str.extend(row.iter().map(ElementaryCell::symbol));
            str.push('\n');
        }
        str
    }
}
