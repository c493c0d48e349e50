//! Cellular automata rules.
//!
//! Each rule is a kind of [`Cell`](crate::Cell), which knows how to compute
//! its next generation from its neighbors:
//! - [`LifeCell`]: Conway's Game of Life.
//! - [`FloatingCell`]: a floating point version of the Game of Life.
//! - [`ElementaryCell`]: one-dimensional elementary automata.
//! - [`LoopCell`]: self-replicating loops driven by a [`RuleTable`].

mod elementary;
mod floating;
mod life;
mod loops;

pub use elementary::{Elementary, ElementaryCell};
pub use floating::FloatingCell;
pub use life::LifeCell;
pub use loops::{LoopCell, LoopRule, RuleKey, RuleTable, LOOP_STATES};
