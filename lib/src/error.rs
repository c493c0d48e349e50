//! All kinds of errors in this crate.

use displaydoc::Display;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum Error {
    /// Cell ({0}, {1}) is outside the {2}x{3} grid.
    OutOfRange(usize, usize, usize, usize),
    /// Rows / columns / neighborhood radius should be positive.
    NonPositiveError,
    /// {0} cells cannot be used with this neighborhood.
    NeighborhoodError(&'static str),
    /// State {0} is out of range; states must be less than {1}.
    InvalidState(u8, u8),
    /// Invalid rule table at line {0}: {1}.
    ParseRuleTableError(usize, String),
    /// Invalid automaton: {0:?}.
    ParseAutomatonError(String),
}
