//! World configuration.

use crate::{
    error::Error,
    rules::{Elementary, FloatingCell, LifeCell, LoopCell, LoopRule, RuleTable},
    traits::Simulation,
    world::World,
};
use educe::Educe;
use log::debug;
use std::sync::Arc;

mod automaton;

pub use automaton::Automaton;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// World configuration.
///
/// The world will be generated from this configuration.
#[derive(Clone, Debug, Educe, PartialEq, Eq)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// The kind of automaton.
    pub automaton: Automaton,

    /// Number of rows.
    ///
    /// For elementary automata, this is the number of generations shown.
    #[educe(Default = 88)]
    pub rows: usize,

    /// Number of columns.
    #[educe(Default = 88)]
    pub cols: usize,

    /// Rule number of an elementary automaton.
    #[educe(Default = 110)]
    pub rule: u8,

    /// Generations per second.
    ///
    /// `None` means that it depends on the automaton.
    pub frame_rate: Option<u32>,

    /// Whether to start with the initial pattern of the automaton.
    ///
    /// Loops start with their seed loop, the floating point Game of Life
    /// with an oval ring, and elementary automata with a single living cell.
    /// The Game of Life has no initial pattern.
    #[educe(Default = true)]
    pub seeded: bool,

    /// Whether to start paused.
    pub paused: bool,

    /// A rule table replacing the built-in table of a loop automaton,
    /// in the text format of [`RuleTable`].
    ///
    /// Ignored by other automata.
    pub rule_table: Option<String>,
}

impl Config {
    /// Sets up a new configuration with given automaton and size.
    pub fn new(automaton: Automaton, rows: usize, cols: usize) -> Self {
        Config {
            automaton,
            rows,
            cols,
            ..Config::default()
        }
    }

    /// Sets the kind of automaton.
    pub fn set_automaton(mut self, automaton: Automaton) -> Self {
        self.automaton = automaton;
        self
    }

    /// Sets the size.
    pub fn set_size(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    /// Sets the rule number of elementary automata.
    pub fn set_rule(mut self, rule: u8) -> Self {
        self.rule = rule;
        self
    }

    /// Sets the number of generations per second.
    pub fn set_frame_rate<T: Into<Option<u32>>>(mut self, frame_rate: T) -> Self {
        self.frame_rate = frame_rate.into();
        self
    }

    /// Sets whether to start with the initial pattern.
    pub fn set_seeded(mut self, seeded: bool) -> Self {
        self.seeded = seeded;
        self
    }

    /// Sets whether to start paused.
    pub fn set_paused(mut self, paused: bool) -> Self {
        self.paused = paused;
        self
    }

    /// Sets the custom rule table.
    pub fn set_rule_table<T: Into<Option<String>>>(mut self, rule_table: T) -> Self {
        self.rule_table = rule_table.into();
        self
    }

    /// Generations per second, falling back to the default of the automaton.
    pub fn frame_rate(&self) -> u32 {
        self.frame_rate
            .unwrap_or_else(|| self.automaton.default_frame_rate())
    }

    /// Creates a new world from the configuration.
    ///
    /// Returns an error if the size is zero, the frame rate is zero,
    /// or the custom rule table is invalid.
    pub fn world(&self) -> Result<Box<dyn Simulation>, Error> {
        if self.rows == 0 || self.cols == 0 || self.frame_rate == Some(0) {
            return Err(Error::NonPositiveError);
        }
        debug!("building a {} world from {:?}", self.automaton, self);
        let mut world: Box<dyn Simulation> = match self.automaton {
            Automaton::Conway => Box::new(LifeCell::world(self.rows, self.cols)?),
            Automaton::FloatingConway => {
                let mut world = FloatingCell::world(self.rows, self.cols)?;
                if self.seeded {
                    world.place_centered(FloatingCell::ring());
                }
                Box::new(world)
            }
            Automaton::Elementary => {
                let mut elementary = Elementary::new(self.rule, self.cols, self.rows)?;
                if self.seeded {
                    elementary.set_center();
                }
                Box::new(elementary)
            }
            Automaton::LangtonLoops => Box::new(self.loop_world(LoopRule::Langton)?),
            Automaton::ChouReggiaLoops => Box::new(self.loop_world(LoopRule::ChouReggia)?),
        };
        world.set_running(!self.paused && self.automaton.starts_running());
        Ok(world)
    }

    fn loop_world(&self, rule: LoopRule) -> Result<World<LoopCell>, Error> {
        let table = self
            .rule_table
            .as_deref()
            .map(|text| text.parse::<RuleTable>().map(Arc::new))
            .transpose()?;
        rule.world(self.rows, self.cols, table, self.seeded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.automaton, Automaton::LangtonLoops);
        assert_eq!((config.rows, config.cols), (88, 88));
        assert_eq!(config.rule, 110);
        assert!(config.seeded);
        assert!(!config.paused);
        assert_eq!(config.frame_rate(), 25);
        assert_eq!(config.set_frame_rate(3).frame_rate(), 3);
    }

    #[test]
    fn running() -> Result<(), Error> {
        assert!(Config::default().world()?.is_running());
        assert!(!Config::default().set_paused(true).world()?.is_running());
        let elementary = Config::new(Automaton::Elementary, 4, 9).world()?;
        assert!(!elementary.is_running());
        assert_eq!(elementary.plaintext(), "....o....\n");
        Ok(())
    }
}
