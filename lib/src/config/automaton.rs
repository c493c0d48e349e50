//! The kinds of automata.

use crate::{error::Error, rules::LoopRule};
use educe::Educe;
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The kinds of automata.
#[derive(Clone, Copy, Debug, Educe, PartialEq, Eq, Hash)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Automaton {
    /// `conway`.
    ///
    /// Conway's Game of Life.
    #[cfg_attr(feature = "serde", serde(rename = "conway", alias = "life"))]
    Conway,

    /// `floating`.
    ///
    /// The Game of Life with floating point cells.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "floating", alias = "floating-conway")
    )]
    FloatingConway,

    /// `elementary`.
    ///
    /// A one-dimensional elementary automaton.
    /// Its generations are shown from top to bottom.
    #[cfg_attr(feature = "serde", serde(rename = "elementary"))]
    Elementary,

    /// `langton`.
    ///
    /// Langton's loops.
    #[educe(Default)]
    #[cfg_attr(feature = "serde", serde(rename = "langton", alias = "langton-loops"))]
    LangtonLoops,

    /// `chou-reggia`.
    ///
    /// Chou-Reggia loops.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "chou-reggia", alias = "chou-reggia-loops")
    )]
    ChouReggiaLoops,
}

impl Automaton {
    /// All kinds of automata.
    pub const ALL: [Automaton; 5] = [
        Automaton::Conway,
        Automaton::FloatingConway,
        Automaton::Elementary,
        Automaton::LangtonLoops,
        Automaton::ChouReggiaLoops,
    ];

    /// The short name, as accepted by [`from_str`](FromStr::from_str).
    pub fn name(self) -> &'static str {
        match self {
            Automaton::Conway => "conway",
            Automaton::FloatingConway => "floating",
            Automaton::Elementary => "elementary",
            Automaton::LangtonLoops => "langton",
            Automaton::ChouReggiaLoops => "chou-reggia",
        }
    }

    /// The loop family, if this is a loop automaton.
    pub fn loop_rule(self) -> Option<LoopRule> {
        match self {
            Automaton::LangtonLoops => Some(LoopRule::Langton),
            Automaton::ChouReggiaLoops => Some(LoopRule::ChouReggia),
            _ => None,
        }
    }

    /// Generations per second when nothing else is specified.
    pub fn default_frame_rate(self) -> u32 {
        if self.loop_rule().is_some() {
            25
        } else {
            10
        }
    }

    /// Whether the automaton is running when created.
    ///
    /// Elementary automata wait for the user to draw the first generation.
    pub fn starts_running(self) -> bool {
        self != Automaton::Elementary
    }
}

impl FromStr for Automaton {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        let automaton = match lower.as_str() {
            "conway" | "life" => Automaton::Conway,
            "floating" | "floating-conway" => Automaton::FloatingConway,
            "elementary" => Automaton::Elementary,
            "langton" | "langton-loops" => Automaton::LangtonLoops,
            "chou-reggia" | "chou-reggia-loops" => Automaton::ChouReggiaLoops,
            _ => return Err(Error::ParseAutomatonError(s.to_owned())),
        };
        Ok(automaton)
    }
}

impl Display for Automaton {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names() -> Result<(), Error> {
        for automaton in Automaton::ALL {
            assert_eq!(automaton.to_string().parse::<Automaton>()?, automaton);
        }
        assert_eq!("Life".parse::<Automaton>()?, Automaton::Conway);
        assert_eq!(
            "brain".parse::<Automaton>(),
            Err(Error::ParseAutomatonError(String::from("brain")))
        );
        Ok(())
    }

    #[test]
    #[cfg(feature = "serde")]
    fn serde_names() -> Result<(), serde_json::Error> {
        for automaton in Automaton::ALL {
            let json = serde_json::to_string(&automaton)?;
            assert_eq!(json, format!("\"{}\"", automaton));
            assert_eq!(serde_json::from_str::<Automaton>(&json)?, automaton);
        }
        assert_eq!(
            serde_json::from_str::<Automaton>("\"langton-loops\"")?,
            Automaton::LangtonLoops
        );
        Ok(())
    }

    #[test]
    fn frame_rates() {
        assert_eq!(Automaton::LangtonLoops.default_frame_rate(), 25);
        assert_eq!(Automaton::ChouReggiaLoops.default_frame_rate(), 25);
        assert_eq!(Automaton::Conway.default_frame_rate(), 10);
        assert!(!Automaton::Elementary.starts_running());
        assert!(Automaton::FloatingConway.starts_running());
    }
}
