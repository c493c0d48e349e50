//! Conway's Game of Life.

use crate::{
    cells::{Cell, Color},
    error::Error,
    neighborhood::{Neighbor, Neighborhood},
    world::World,
};

/// A cell of Conway's Game of Life.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LifeCell {
    alive: bool,
}

impl LifeCell {
    pub const DEAD: LifeCell = LifeCell { alive: false };
    pub const ALIVE: LifeCell = LifeCell { alive: true };

    pub fn is_alive(self) -> bool {
        self.alive
    }

    /// An empty world with the Moore neighborhood.
    pub fn world(rows: usize, cols: usize) -> Result<World<LifeCell>, Error> {
        World::new(LifeCell::DEAD, Neighborhood::moore(), rows, cols)
    }
}

/// `B3/S23`: a dead cell with exactly three living neighbors is born,
/// a living cell with two or three living neighbors survives.
impl Cell for LifeCell {
    const NAME: &'static str = "life";

    fn update(&self, neighbors: &[Neighbor<'_, Self>]) -> Self {
        let alives = neighbors.iter().filter(|n| n.cell.alive).count();
        LifeCell {
            alive: matches!((self.alive, alives), (false, 3) | (true, 2) | (true, 3)),
        }
    }

    fn activate(&self) -> Self {
        LifeCell { alive: !self.alive }
    }

    fn paint(&self) -> Self {
        LifeCell::ALIVE
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
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(world: &mut World<LifeCell>, x: isize, y: isize, pattern: &str) {
        world.place(
            x,
            y,
            pattern.lines().map(|line| {
                line.chars()
                    .map(|c| if c == 'o' { LifeCell::ALIVE } else { LifeCell::DEAD })
                    .collect::<Vec<_>>()
            }),
        );
    }

    #[test]
    fn blinker() -> Result<(), Error> {
        let mut world = LifeCell::world(5, 5)?;
        parse(&mut world, 1, 2, "ooo");
        world.step();
        assert_eq!(world.plaintext(), ".....\n..o..\n..o..\n..o..\n.....\n");
        world.step();
        assert_eq!(world.plaintext(), ".....\n.....\n.ooo.\n.....\n.....\n");
        Ok(())
    }

    #[test]
    fn painting_keeps_cells_alive() -> Result<(), Error> {
        let mut world = LifeCell::world(1, 3)?;
        world.activate(0, 0)?;
        world.paint(0, 0)?;
        world.paint(1, 0)?;
        assert_eq!(world.plaintext(), "oo.\n");
        world.activate(0, 0)?;
        assert_eq!(world.plaintext(), ".o.\n");
        Ok(())
    }

    #[test]
    fn block() -> Result<(), Error> {
        let mut world = LifeCell::world(4, 4)?;
        parse(&mut world, 1, 1, "oo\noo");
        let before = world.plaintext();
        world.steps(5);
        assert_eq!(world.plaintext(), before);
        Ok(())
    }

    #[test]
    fn glider_wraps() -> Result<(), Error> {
        let mut world = LifeCell::world(6, 6)?;
        parse(&mut world, 0, 0, ".o.\n..o\nooo");
        let start = world.grid().clone();
        // A glider moves by one cell diagonally every four generations.
        world.steps(24);
        assert_eq!(world.grid(), &start);
        world.steps(4);
        assert_eq!(world.grid().get(2, 1), Some(&LifeCell::ALIVE));
        assert_eq!(world.grid().get(1, 0), Some(&LifeCell::DEAD));
        Ok(())
    }

    #[test]
    fn toggles() {
        assert_eq!(LifeCell::DEAD.activate(), LifeCell::ALIVE);
        assert_eq!(LifeCell::ALIVE.activate(), LifeCell::DEAD);
    }
}
