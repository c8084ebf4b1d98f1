use crate::explore;
use crate::parse;

use core::str::FromStr;

pub use crate::alphabet::Alphabet;
pub use crate::dfa::{Dfa, State};
pub use crate::error::Error;
pub use crate::types::{PosSet, Position, StateHandle};

/// Options used to control DFA construction.
/// The default options place no limit on the number of states.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// If set, the maximum number of DFA states.
    /// Subset construction may produce exponentially many states; exceeding
    /// the budget is reported as [`Error::BudgetExceeded`].
    pub state_budget: Option<usize>,
}

impl Options {
    /// Construct Options limiting the DFA to \p budget states.
    #[inline]
    pub fn with_state_budget(budget: usize) -> Self {
        Self {
            state_budget: Some(budget),
        }
    }
}

/// Compile \p pattern to a DFA using default options.
///
/// ```rust
/// let dfa = re2dfa::compile("(a|b)*abb").unwrap();
/// assert!(dfa.accepts("babb"));
/// assert!(!dfa.accepts("abba"));
/// ```
#[inline]
pub fn compile(pattern: &str) -> Result<Dfa, Error> {
    compile_with_options(pattern, Options::default())
}

/// Compile \p pattern to a DFA using the given \p options.
pub fn compile_with_options(pattern: &str, options: Options) -> Result<Dfa, Error> {
    if pattern.is_empty() {
        return Ok(explore::accept_empty());
    }
    let alphabet = Alphabet::new(pattern);
    let syntax = parse::try_parse(pattern, &alphabet)?;
    explore::explore(syntax, alphabet, &options)
}

impl Dfa {
    /// Compile \p pattern to a DFA, equivalent to [`compile`].
    #[inline]
    pub fn new(pattern: &str) -> Result<Dfa, Error> {
        compile(pattern)
    }
}

impl FromStr for Dfa {
    type Err = Error;

    /// Attempts to compile a string into a DFA.
    #[inline]
    fn from_str(s: &str) -> Result<Self, Error> {
        Self::new(s)
    }
}

// The individual construction phases, for diagnostics and testing.
#[doc(hidden)]
pub mod backends {
    pub use crate::explore::{accept_empty, explore, state_name};
    pub use crate::followpos::{FollowPos, TerminalIndex};
    pub use crate::parse::try_parse;
    pub use crate::syntax::{Node, Syntax, Tree};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_pattern_accepts_empty_string() {
        let dfa = compile("").unwrap();
        assert_eq!(dfa.len(), 1);
        assert!(dfa.accepts(""));
        assert!(!dfa.accepts("@"));
    }

    #[test]
    fn from_str() {
        let dfa: Dfa = "ab*".parse().unwrap();
        assert!(dfa.accepts("abbb"));
        assert!("a)".parse::<Dfa>().is_err());
    }

    #[test]
    fn options() {
        assert_eq!(Options::default().state_budget, None);
        let err = compile_with_options("(a|b)*abb", Options::with_state_budget(1)).unwrap_err();
        assert_eq!(err, Error::BudgetExceeded { budget: 1 });
        assert_eq!(err.offset(), None);
    }
}
