//! The followpos relation and the terminal-position index.

use crate::types::{PosSet, Position};
use core::fmt;
use std::collections::BTreeMap;

/// Maps each position to the positions which may immediately follow it.
/// The table only ever grows: entries are unioned, never removed.
#[derive(Debug, Clone, Default)]
pub struct FollowPos {
    // Indexed by position.
    table: Vec<PosSet>,
}

impl FollowPos {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate an (empty) entry for a freshly created position.
    pub(crate) fn add_position(&mut self, pos: Position) {
        debug_assert_eq!(pos, self.table.len(), "Positions must be dense");
        self.table.push(PosSet::new());
    }

    /// For every position in \p from, union \p to into its followpos.
    pub(crate) fn link(&mut self, from: &PosSet, to: &PosSet) {
        if to.is_empty() {
            return;
        }
        for &pos in from {
            self.table[pos].extend(to.iter().copied());
        }
    }

    /// \return the followpos set of \p pos.
    pub fn get(&self, pos: Position) -> &PosSet {
        &self.table[pos]
    }

    /// \return the number of positions.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Position, &PosSet)> + '_ {
        self.table.iter().enumerate()
    }
}

/// Maps each alphabet symbol to the leaf positions labeled with it.
#[derive(Debug, Clone, Default)]
pub struct TerminalIndex {
    positions: BTreeMap<char, PosSet>,
}

impl TerminalIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, symbol: char, pos: Position) {
        self.positions.entry(symbol).or_default().insert(pos);
    }

    /// \return the positions labeled with \p symbol, if any.
    pub fn positions(&self, symbol: char) -> Option<&PosSet> {
        self.positions.get(&symbol)
    }

    /// \return the symbol at \p pos, or None for the end marker.
    pub fn symbol_at(&self, pos: Position) -> Option<char> {
        self.positions
            .iter()
            .find_map(|(&symbol, set)| set.contains(&pos).then_some(symbol))
    }
}

/// Write a position set as `{0, 1, 2}`.
pub(crate) fn write_pos_set(f: &mut fmt::Formatter<'_>, set: &PosSet) -> fmt::Result {
    f.write_str("{")?;
    for (idx, pos) in set.iter().enumerate() {
        if idx > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", pos)?;
    }
    f.write_str("}")
}

impl fmt::Display for FollowPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (pos, follow) in self.iter() {
            write!(f, "followpos({}) = ", pos)?;
            write_pos_set(f, follow)?;
            writeln!(f)?;
        }
        Ok(())
    }
}
