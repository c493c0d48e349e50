//! Rotationally symmetric rule tables, and the self-replicating loops
//! built on them.
//!
//! A loop cell looks at its four orthogonal neighbors. The neighborhood is
//! encoded as the states `up, right, down, left`, and a rule written for one
//! orientation also matches the three other rotations of the same
//! neighborhood.

mod chou_reggia;
mod langton;

use crate::{
    cells::{Cell, Color, State, QUIESCENT},
    error::Error,
    neighborhood::{Direction, Neighbor, Neighborhood},
    world::World,
};
use once_cell::sync::Lazy;
use std::{collections::HashMap, str::FromStr, sync::Arc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of states of a loop cell.
pub const LOOP_STATES: u8 = 8;

/// Checks that a state is a single octal digit.
fn check_state(state: State) -> Result<State, Error> {
    if state.0 < LOOP_STATES {
        Ok(state)
    } else {
        Err(Error::InvalidState(state.0, LOOP_STATES))
    }
}

/// The key of a rule: the state of a cell and the states of its neighbors
/// up, right, down and left.
///
/// It is packed as five octal digits, so the key of the rule usually
/// written as `"00710"` is `0o00710`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RuleKey(u16);

impl RuleKey {
    /// Packs a key. Only the lowest three bits of each state are kept,
    /// so states should be less than [`LOOP_STATES`].
    pub fn new(state: State, neighbors: [State; 4]) -> Self {
        let key = neighbors
            .iter()
            .fold(state.0 as u16 & 0o7, |key, s| key << 3 | (s.0 as u16 & 0o7));
        RuleKey(key)
    }

    /// The state of the cell itself.
    pub fn state(self) -> State {
        State((self.0 >> 12) as u8 & 0o7)
    }

    /// The states of the neighbors up, right, down and left.
    pub fn neighbors(self) -> [State; 4] {
        let digit = |shift: u16| State((self.0 >> shift) as u8 & 0o7);
        [digit(9), digit(6), digit(3), digit(0)]
    }
}

/// A sparse table of transitions, matched up to rotation.
///
/// The table does not have to be total: a neighborhood that matches no rule
/// leaves the cell unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuleTable {
    rules: HashMap<RuleKey, State>,
}

impl RuleTable {
    /// An empty table.
    pub fn new() -> Self {
        RuleTable::default()
    }

    /// Builds a table from packed keys. The data must be valid.
    fn from_packed(rules: &[(u16, u8)]) -> Self {
        RuleTable {
            rules: rules
                .iter()
                .map(|&(key, result)| (RuleKey(key), State(result)))
                .collect(),
        }
    }

    /// The Langton's loops table.
    pub fn langton() -> Arc<RuleTable> {
        static LANGTON: Lazy<Arc<RuleTable>> =
            Lazy::new(|| Arc::new(RuleTable::from_packed(&langton::RULES)));
        Arc::clone(&LANGTON)
    }

    /// The Chou-Reggia loops table.
    pub fn chou_reggia() -> Arc<RuleTable> {
        static CHOU_REGGIA: Lazy<Arc<RuleTable>> =
            Lazy::new(|| Arc::new(RuleTable::from_packed(&chou_reggia::RULES)));
        Arc::clone(&CHOU_REGGIA)
    }

    /// Adds a rule, returning the result of the rule it replaces, if any.
    pub fn insert(
        &mut self,
        state: State,
        neighbors: [State; 4],
        result: State,
    ) -> Result<Option<State>, Error> {
        check_state(state)?;
        for &neighbor in &neighbors {
            check_state(neighbor)?;
        }
        check_state(result)?;
        Ok(self.rules.insert(RuleKey::new(state, neighbors), result))
    }

    /// The rule written for exactly this orientation.
    pub fn get(&self, state: State, neighbors: [State; 4]) -> Option<State> {
        self.rules.get(&RuleKey::new(state, neighbors)).copied()
    }

    /// Finds the rule for a cell, trying the neighbors as given,
    /// then rotated left by one, two and three places.
    ///
    /// The first rotation that has a rule wins.
    pub fn lookup(&self, state: State, neighbors: [State; 4]) -> Option<State> {
        let mut rotation = neighbors;
        for _ in 0..4 {
            if let Some(result) = self.get(state, rotation) {
                return Some(result);
            }
            rotation.rotate_left(1);
        }
        None
    }

    /// The state of a cell in the next generation.
    ///
    /// A cell with no matching rule keeps its state.
    pub fn transition(&self, state: State, neighbors: [State; 4]) -> State {
        self.lookup(state, neighbors).unwrap_or(state)
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterates over all rules, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (RuleKey, State)> + '_ {
        self.rules.iter().map(|(&key, &result)| (key, result))
    }
}

/// Parses a table with one rule per line.
///
/// A rule is six octal digits: the state, the neighbors up, right, down
/// and left, and the result. The digits may be separated by spaces, `:`,
/// `->` or `,`, and quoted, so `00710 4`, `00710:4`, `"00710": 4,` and
/// `007104` are the same rule. Everything after a `#` is a comment.
impl FromStr for RuleTable {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut table = RuleTable::new();
        for (n, line) in s.lines().enumerate() {
            let line = line.split('#').next().unwrap_or_default().trim();
            if line.is_empty() {
                continue;
            }
            let digits = line
                .chars()
                .filter(|c| !c.is_whitespace() && !matches!(c, ':' | '-' | '>' | ',' | '"'))
                .map(|c| {
                    c.to_digit(LOOP_STATES as u32)
                        .map(|d| State(d as u8))
                        .ok_or_else(|| {
                            Error::ParseRuleTableError(n + 1, format!("{:?} is not a state", c))
                        })
                })
                .collect::<Result<Vec<_>, _>>()?;
            match digits[..] {
                [state, up, right, down, left, result] => {
                    table.insert(state, [up, right, down, left], result)?;
                }
                _ => {
                    return Err(Error::ParseRuleTableError(
                        n + 1,
                        format!("expected 6 states, found {}", digits.len()),
                    ))
                }
            }
        }
        Ok(table)
    }
}

/// A cell of a loop automaton.
///
/// The only datum of the cell is its state; the rule table is shared by
/// all cells of the world.
#[derive(Clone, Debug)]
pub struct LoopCell {
    state: State,
    table: Arc<RuleTable>,
}

impl LoopCell {
    /// A quiescent cell.
    pub fn new(table: Arc<RuleTable>) -> Self {
        LoopCell {
            state: QUIESCENT,
            table,
        }
    }

    /// A cell with the given state.
    pub fn with_state(state: State, table: Arc<RuleTable>) -> Result<Self, Error> {
        Ok(LoopCell {
            state: check_state(state)?,
            table,
        })
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn table(&self) -> &Arc<RuleTable> {
        &self.table
    }

    /// The states of the neighbors up, right, down and left.
    ///
    /// Neighbors without a unit offset are ignored.
    pub fn directional_states(neighbors: &[Neighbor<'_, Self>]) -> [State; 4] {
        let mut states = [QUIESCENT; 4];
        for neighbor in neighbors {
            if let Some(dir) = neighbor.offset.and_then(Direction::from_offset) {
                states[dir as usize] = neighbor.cell.state;
            }
        }
        states
    }
}

/// Two cells are equal if they have the same state and equal tables.
impl PartialEq for LoopCell {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
            && (Arc::ptr_eq(&self.table, &other.table) || self.table == other.table)
    }
}

impl Cell for LoopCell {
    const NAME: &'static str = "loop";

    fn update(&self, neighbors: &[Neighbor<'_, Self>]) -> Self {
        let around = LoopCell::directional_states(neighbors);
        LoopCell {
            state: self.table.transition(self.state, around),
            table: Arc::clone(&self.table),
        }
    }

    fn activate(&self) -> Self {
        LoopCell {
            state: State((self.state.0 + 1) % LOOP_STATES),
            table: Arc::clone(&self.table),
        }
    }

    fn color(&self) -> Color {
        match self.state.0 {
            0 => Color::Black,
            1 => Color::Blue,
            2 => Color::Red,
            3 => Color::Green,
            4 => Color::Yellow,
            5 => Color::Magenta,
            6 => Color::White,
            _ => Color::Cyan,
        }
    }

    fn symbol(&self) -> char {
        char::from_digit(self.state.0 as u32, LOOP_STATES as u32).unwrap_or('?')
    }

    fn check_neighborhood(neighborhood: &Neighborhood) -> Result<(), Error> {
        if neighborhood.is_directional() {
            Ok(())
        } else {
            Err(Error::NeighborhoodError(Self::NAME))
        }
    }
}

/// The families of loop automata.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LoopRule {
    /// [Langton's loops](https://en.wikipedia.org/wiki/Langton%27s_loops).
    Langton,
    /// Chou-Reggia loops, which start from a seed of six cells.
    ChouReggia,
}

impl LoopRule {
    /// The rule table of the family.
    pub fn table(self) -> Arc<RuleTable> {
        match self {
            LoopRule::Langton => RuleTable::langton(),
            LoopRule::ChouReggia => RuleTable::chou_reggia(),
        }
    }

    /// The initial pattern, row by row.
    pub fn seed(self) -> Vec<Vec<State>> {
        fn rows<const N: usize>(seed: &[[u8; N]]) -> Vec<Vec<State>> {
            seed.iter()
                .map(|row| row.iter().map(|&s| State(s)).collect())
                .collect()
        }
        match self {
            LoopRule::Langton => rows(&langton::SEED),
            LoopRule::ChouReggia => rows(&chou_reggia::SEED),
        }
    }

    /// Creates a world of this family, using `table` instead of the
    /// built-in table if given, and places the initial pattern at the
    /// center if `seeded`.
    pub fn world(
        self,
        rows: usize,
        cols: usize,
        table: Option<Arc<RuleTable>>,
        seeded: bool,
    ) -> Result<World<LoopCell>, Error> {
        let table = table.unwrap_or_else(|| self.table());
        let neighborhood = Neighborhood::von_neumann().set_positional(true);
        let blank = LoopCell::new(Arc::clone(&table));
        let mut world = World::new(blank, neighborhood, rows, cols)?;
        if seeded {
            let pattern = self
                .seed()
                .into_iter()
                .map(|row| {
                    row.into_iter()
                        .map(|state| LoopCell::with_state(state, Arc::clone(&table)))
                        .collect()
                })
                .collect::<Result<Vec<Vec<_>>, _>>()?;
            world.place_centered(pattern);
        }
        Ok(world)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn states(digits: &str) -> [State; 4] {
        let mut states = [QUIESCENT; 4];
        for (state, c) in states.iter_mut().zip(digits.chars()) {
            *state = State(c.to_digit(8).unwrap() as u8);
        }
        states
    }

    #[test]
    fn packing() {
        let key = RuleKey::new(State(0), states("0710"));
        assert_eq!(key, RuleKey(0o00710));
        assert_eq!(key.state(), State(0));
        assert_eq!(key.neighbors(), states("0710"));
        let key = RuleKey::new(State(7), states("1234"));
        assert_eq!(key, RuleKey(0o71234));
        assert_eq!(key.state(), State(7));
        assert_eq!(key.neighbors(), states("1234"));
    }

    #[test]
    fn digits_do_not_overflow() -> Result<(), Error> {
        let eight = [State(8), QUIESCENT, QUIESCENT, QUIESCENT];
        let key = RuleKey::new(State(0), eight);
        assert_eq!(key.state(), State(0));
        assert_eq!(key, RuleKey::new(State(0), states("0000")));
        let table: RuleTable = "10000 5".parse()?;
        assert_eq!(table.lookup(State(0), eight), None);
        assert_eq!(table.transition(State(0), eight), State(0));
        Ok(())
    }

    #[test]
    fn rotations() -> Result<(), Error> {
        let table: RuleTable = "00710 4".parse()?;
        for neighbors in ["0710", "7100", "1007", "0071"] {
            assert_eq!(table.lookup(State(0), states(neighbors)), Some(State(4)));
        }
        // Reflections are not rotations.
        assert_eq!(table.lookup(State(0), states("0170")), None);
        assert_eq!(table.lookup(State(1), states("0710")), None);
        Ok(())
    }

    #[test]
    fn first_rotation_wins() -> Result<(), Error> {
        let table: RuleTable = "01200 3\n00012 5".parse()?;
        assert_eq!(table.lookup(State(0), states("1200")), Some(State(3)));
        assert_eq!(table.lookup(State(0), states("0012")), Some(State(5)));
        // `0120` is `1200` rotated by one place, and `0012` by three.
        assert_eq!(table.lookup(State(0), states("0120")), Some(State(3)));
        // `2001` is `0012` rotated by one place, and `1200` by three.
        assert_eq!(table.lookup(State(0), states("2001")), Some(State(5)));
        Ok(())
    }

    #[test]
    fn fallback() {
        let table = RuleTable::new();
        for s in 0..LOOP_STATES {
            assert_eq!(table.transition(State(s), states("1234")), State(s));
        }
    }

    #[test]
    fn parse_formats() -> Result<(), Error> {
        let table: RuleTable = "# a comment\n\
                                00710 4\n\
                                \n\
                                10001:1   # trailing comment\n\
                                \"20007\": 3,\n\
                                30001 -> 3\n\
                                700077"
            .parse()?;
        assert_eq!(table.len(), 5);
        assert_eq!(table.get(State(0), states("0710")), Some(State(4)));
        assert_eq!(table.get(State(1), states("0001")), Some(State(1)));
        assert_eq!(table.get(State(2), states("0007")), Some(State(3)));
        assert_eq!(table.get(State(3), states("0001")), Some(State(3)));
        assert_eq!(table.get(State(7), states("0007")), Some(State(7)));
        Ok(())
    }

    #[test]
    fn parse_errors() {
        assert!(matches!(
            "00000 0\n0071 4".parse::<RuleTable>(),
            Err(Error::ParseRuleTableError(2, _))
        ));
        assert!(matches!(
            "00810 4".parse::<RuleTable>(),
            Err(Error::ParseRuleTableError(1, _))
        ));
        assert!(matches!(
            "00710 4 1".parse::<RuleTable>(),
            Err(Error::ParseRuleTableError(1, _))
        ));
    }

    #[test]
    fn invalid_states() {
        let mut table = RuleTable::new();
        assert_eq!(
            table.insert(State(8), states("0000"), State(0)),
            Err(Error::InvalidState(8, LOOP_STATES))
        );
        assert_eq!(
            table.insert(State(0), states("0000"), State(9)),
            Err(Error::InvalidState(9, LOOP_STATES))
        );
        assert!(LoopCell::with_state(State(8), Arc::new(table)).is_err());
    }

    #[test]
    fn builtin_tables() {
        let langton = RuleTable::langton();
        assert_eq!(langton.len(), 219);
        assert_eq!(langton.get(State(0), states("0001")), Some(State(2)));
        assert_eq!(langton.get(State(7), states("0272")), Some(State(0)));
        assert!(Arc::ptr_eq(&langton, &RuleTable::langton()));

        let chou_reggia = RuleTable::chou_reggia();
        assert_eq!(chou_reggia.len(), 65);
        assert_eq!(chou_reggia.get(State(0), states("0710")), Some(State(4)));
        assert!(chou_reggia
            .iter()
            .all(|(key, result)| key.state().0 < LOOP_STATES && result.0 < LOOP_STATES));
    }

    #[test]
    fn activate_cycles() {
        let mut cell = LoopCell::new(Arc::new(RuleTable::new()));
        for s in 1..=16 {
            cell = cell.activate();
            assert_eq!(cell.state(), State(s % LOOP_STATES));
        }
    }

    #[test]
    fn palette() {
        let table = Arc::new(RuleTable::new());
        let colors: Vec<_> = (0..LOOP_STATES)
            .map(|s| LoopCell::with_state(State(s), Arc::clone(&table)).unwrap().color())
            .collect();
        assert_eq!(
            colors,
            vec![
                Color::Black,
                Color::Blue,
                Color::Red,
                Color::Green,
                Color::Yellow,
                Color::Magenta,
                Color::White,
                Color::Cyan,
            ]
        );
    }
}
