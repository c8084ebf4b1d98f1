//! The input alphabet of an expression.

use crate::types::{OPERATORS, TRIVIAL_SYMBOL};
use core::fmt;
use std::collections::BTreeSet;

/// The distinct literal symbols of an expression, in ascending order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Alphabet {
    symbols: BTreeSet<char>,
}

/// \return whether \p c may appear as a literal symbol.
/// Operators, whitespace and control characters are never literals.
#[inline]
pub fn is_literal(c: char) -> bool {
    !OPERATORS.contains(&c) && !c.is_whitespace() && !c.is_control()
}

impl Alphabet {
    /// Collect the literal symbols of the raw expression \p pattern.
    pub fn new(pattern: &str) -> Self {
        Self {
            symbols: pattern.chars().filter(|&c| is_literal(c)).collect(),
        }
    }

    /// The one-symbol alphabet of the automaton accepting only the empty string.
    pub fn trivial() -> Self {
        Self {
            symbols: BTreeSet::from([TRIVIAL_SYMBOL]),
        }
    }

    /// \return whether \p c is a literal symbol of this alphabet.
    #[inline]
    pub fn has_char(&self, c: char) -> bool {
        self.symbols.contains(&c)
    }

    /// Iterate over the symbols in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.symbols.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (idx, c) in self.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "'{}'", c)?;
        }
        f.write_str("}")
    }
}
