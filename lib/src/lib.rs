//! __Grid automata__ on a torus.
//!
//! A [`World`] is a rectangular grid of [`Cell`]s whose edges wrap around.
//! Every generation, each cell computes its next state from its own state
//! and the states of its neighbors, as given by a [`Neighborhood`].
//!
//! The [`rules`] module contains the Game of Life, a floating point version
//! of it, elementary automata, and self-replicating loops driven by
//! rotationally symmetric rule tables.
//!
//! A [`Config`] describes an automaton, and builds it as a [`Simulation`]
//! trait object, which is all a display needs.
//!
//! # Example
//!
//! ```rust
//! use gridca_lib::{Automaton, Config};
//!
//! // Langton's loops on a 40 × 40 torus, with the seed loop in the middle.
//! let config = Config::new(Automaton::LangtonLoops, 40, 40);
//! let mut world = config.world().unwrap();
//!
//! world.step();
//! assert_eq!(world.generation(), 1);
//! ```

mod cells;
mod config;
mod error;
mod neighborhood;
pub mod rules;
mod traits;
mod world;

pub use cells::{Cell, Color, Offset, State, QUIESCENT};
pub use config::{Automaton, Config};
pub use error::Error;
pub use neighborhood::{Direction, Neighbor, Neighborhood, NeighborhoodKind};
pub use traits::Simulation;
pub use world::{Grid, World};
