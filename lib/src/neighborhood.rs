//! Neighborhoods on a toroidal grid.

use crate::{cells::Offset, error::Error, world::Grid};
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The shape of a neighborhood.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum NeighborhoodKind {
    /// All cells within Chebyshev distance `radius`.
    ///
    /// ```plaintext
    /// ###
    /// #.#
    /// ###
    /// ```
    Moore,

    /// All cells within Manhattan distance `radius`.
    ///
    /// ```plaintext
    /// .#.
    /// #.#
    /// .#.
    /// ```
    VonNeumann,
}

impl FromStr for NeighborhoodKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "moore" | "M" => Ok(NeighborhoodKind::Moore),
            "von-neumann" | "N" => Ok(NeighborhoodKind::VonNeumann),
            _ => Err(String::from("invalid NeighborhoodKind")),
        }
    }
}

impl Display for NeighborhoodKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let s = match self {
            NeighborhoodKind::Moore => "moore",
            NeighborhoodKind::VonNeumann => "von-neumann",
        };
        write!(f, "{}", s)
    }
}

/// The four directions of the von Neumann neighborhood of radius 1,
/// in the order used to encode a neighborhood.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up = 0,
    Right = 1,
    Down = 2,
    Left = 3,
}

impl Direction {
    /// All directions, clockwise from `Up`.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// The unit offset pointing in this direction.
    pub fn offset(self) -> Offset {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }

    /// The direction of a unit offset, if it is one.
    pub fn from_offset(offset: Offset) -> Option<Self> {
        match offset {
            (0, -1) => Some(Direction::Up),
            (1, 0) => Some(Direction::Right),
            (0, 1) => Some(Direction::Down),
            (-1, 0) => Some(Direction::Left),
            _ => None,
        }
    }
}

/// A neighbor of a cell.
#[derive(Debug)]
pub struct Neighbor<'a, C> {
    /// The neighboring cell in the current generation.
    pub cell: &'a C,

    /// Its offset from the center.
    ///
    /// `None` unless the neighborhood is positional.
    pub offset: Option<Offset>,
}

impl<'a, C> Clone for Neighbor<'a, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, C> Copy for Neighbor<'a, C> {}

/// A neighborhood: a shape, a radius, and whether neighbors
/// are tagged with their offsets.
///
/// It is immutable once built, and shared by all cells in all generations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Neighborhood {
    kind: NeighborhoodKind,
    radius: u32,
    positional: bool,

    /// All offsets in the neighborhood, `dx` ascending, then `dy` ascending.
    offsets: Vec<Offset>,
}

impl Neighborhood {
    /// Creates a neighborhood with the given shape and radius,
    /// without positional tagging.
    pub fn new(kind: NeighborhoodKind, radius: u32) -> Result<Self, Error> {
        if radius == 0 {
            return Err(Error::NonPositiveError);
        }
        let r = radius as i32;
        let mut offsets = Vec::new();
        for dx in -r..=r {
            for dy in -r..=r {
                if dx == 0 && dy == 0 {
                    continue;
                }
                if kind == NeighborhoodKind::VonNeumann && dx.abs() + dy.abs() > r {
                    continue;
                }
                offsets.push((dx, dy));
            }
        }
        Ok(Neighborhood {
            kind,
            radius,
            positional: false,
            offsets,
        })
    }

    /// The Moore neighborhood of radius 1.
    pub fn moore() -> Self {
        Neighborhood {
            kind: NeighborhoodKind::Moore,
            radius: 1,
            positional: false,
            offsets: vec![
                (-1, -1),
                (-1, 0),
                (-1, 1),
                (0, -1),
                (0, 1),
                (1, -1),
                (1, 0),
                (1, 1),
            ],
        }
    }

    /// The von Neumann neighborhood of radius 1.
    pub fn von_neumann() -> Self {
        Neighborhood {
            kind: NeighborhoodKind::VonNeumann,
            radius: 1,
            positional: false,
            offsets: vec![(-1, 0), (0, -1), (0, 1), (1, 0)],
        }
    }

    /// Sets whether neighbors are tagged with their offsets.
    pub fn set_positional(mut self, positional: bool) -> Self {
        self.positional = positional;
        self
    }

    /// The shape of the neighborhood.
    pub fn kind(&self) -> NeighborhoodKind {
        self.kind
    }

    /// The radius of the neighborhood.
    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Whether neighbors are tagged with their offsets.
    pub fn is_positional(&self) -> bool {
        self.positional
    }

    /// All offsets in the neighborhood, in enumeration order.
    pub fn offsets(&self) -> &[Offset] {
        &self.offsets
    }

    /// Whether this is the positional von Neumann neighborhood of radius 1,
    /// where every neighbor lies in one of the four [`Direction`]s.
    pub fn is_directional(&self) -> bool {
        self.kind == NeighborhoodKind::VonNeumann && self.radius == 1 && self.positional
    }

    /// The neighbors of the cell at `(i, j)`.
    ///
    /// Coordinates wrap around the edges of the grid.
    /// If the radius is not smaller than the size of the grid,
    /// the same cell may appear more than once.
    pub fn get_neighbours<'a, C>(
        &self,
        grid: &'a Grid<C>,
        i: usize,
        j: usize,
    ) -> Vec<Neighbor<'a, C>> {
        let mut neighbors = Vec::with_capacity(self.offsets.len());
        self.fill(grid, i, j, &mut neighbors);
        neighbors
    }

    /// Same as [`get_neighbours`](Self::get_neighbours),
    /// but writes into a buffer, so that it can be reused for every cell.
    pub(crate) fn fill<'a, C>(
        &self,
        grid: &'a Grid<C>,
        i: usize,
        j: usize,
        buf: &mut Vec<Neighbor<'a, C>>,
    ) {
        buf.clear();
        for &(dx, dy) in &self.offsets {
            let cell = grid.wrapping_get(i as isize + dx as isize, j as isize + dy as isize);
            let offset = if self.positional { Some((dx, dy)) } else { None };
            buf.push(Neighbor { cell, offset });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radius_one() -> Result<(), Error> {
        assert_eq!(
            Neighborhood::new(NeighborhoodKind::Moore, 1)?,
            Neighborhood::moore()
        );
        assert_eq!(
            Neighborhood::new(NeighborhoodKind::VonNeumann, 1)?,
            Neighborhood::von_neumann()
        );
        Ok(())
    }

    #[test]
    fn sizes() -> Result<(), Error> {
        for r in 1..5 {
            let moore = Neighborhood::new(NeighborhoodKind::Moore, r)?;
            let von_neumann = Neighborhood::new(NeighborhoodKind::VonNeumann, r)?;
            let r = r as usize;
            assert_eq!(moore.offsets().len(), (2 * r + 1) * (2 * r + 1) - 1);
            assert_eq!(von_neumann.offsets().len(), 2 * r * (r + 1));
        }
        Ok(())
    }

    #[test]
    fn zero_radius() {
        assert_eq!(
            Neighborhood::new(NeighborhoodKind::Moore, 0),
            Err(Error::NonPositiveError)
        );
    }

    #[test]
    fn directions() {
        for dir in Direction::ALL {
            assert_eq!(Direction::from_offset(dir.offset()), Some(dir));
        }
        assert_eq!(Direction::from_offset((1, 1)), None);
        assert!(Neighborhood::von_neumann().set_positional(true).is_directional());
        assert!(!Neighborhood::von_neumann().is_directional());
        assert!(!Neighborhood::moore().set_positional(true).is_directional());
    }

    #[test]
    fn wrap_around() {
        let grid = Grid::new(3, 3, |i, j| (i, j));
        let nbhd = Neighborhood::von_neumann().set_positional(true);
        let neighbors = nbhd.get_neighbours(&grid, 0, 0);
        let found: Vec<_> = neighbors
            .iter()
            .map(|n| (*n.cell, n.offset.unwrap()))
            .collect();
        assert_eq!(
            found,
            vec![
                ((2, 0), (-1, 0)),
                ((0, 2), (0, -1)),
                ((0, 1), (0, 1)),
                ((1, 0), (1, 0)),
            ]
        );
    }

    #[test]
    fn non_positional() {
        let grid = Grid::new(4, 2, |i, j| i * 10 + j);
        let neighbors = Neighborhood::moore().get_neighbours(&grid, 3, 1);
        assert!(neighbors.iter().all(|n| n.offset.is_none()));
        let cells: Vec<_> = neighbors.iter().map(|n| *n.cell).collect();
        assert_eq!(cells, vec![20, 21, 20, 30, 30, 0, 1, 0]);
    }

    #[test]
    fn duplicates() -> Result<(), Error> {
        let grid = Grid::new(1, 1, |_, _| ());
        let nbhd = Neighborhood::new(NeighborhoodKind::Moore, 2)?;
        assert_eq!(nbhd.get_neighbours(&grid, 0, 0).len(), 24);
        Ok(())
    }
}
