use core::fmt;

/// Represents an error encountered while compiling an expression.
/// Syntax errors are reported before any DFA state is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A `(` without its `)`, or a `)` without its `(`.
    /// The offset is that of the unmatched parenthesis.
    UnbalancedParenthesis { offset: usize },

    /// A `*` with no operand to repeat.
    NothingToRepeat { offset: usize },

    /// A character which is neither an operator nor a literal symbol.
    UnrecognizedSymbol { symbol: char, offset: usize },

    /// Groups nested more deeply than the parser allows.
    /// The offset is that of the first `(` past the limit.
    NestingLimitExceeded { offset: usize },

    /// The DFA would have more states than the configured budget.
    BudgetExceeded { budget: usize },
}

impl Error {
    /// \return the byte offset into the pattern, for syntax errors.
    pub fn offset(&self) -> Option<usize> {
        match *self {
            Error::UnbalancedParenthesis { offset }
            | Error::NothingToRepeat { offset }
            | Error::UnrecognizedSymbol { offset, .. }
            | Error::NestingLimitExceeded { offset } => Some(offset),
            Error::BudgetExceeded { .. } => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::UnbalancedParenthesis { offset } => {
                write!(f, "Unbalanced parenthesis at offset {}", offset)
            }
            Error::NothingToRepeat { offset } => {
                write!(f, "Nothing to repeat at offset {}", offset)
            }
            Error::UnrecognizedSymbol { symbol, offset } => {
                write!(
                    f,
                    "Unrecognized symbol {:?} at offset {}",
                    symbol, offset
                )
            }
            Error::NestingLimitExceeded { offset } => {
                write!(f, "Group nesting limit exceeded at offset {}", offset)
            }
            Error::BudgetExceeded { budget } => {
                write!(f, "Budget exceeded (more than {} states)", budget)
            }
        }
    }
}

impl std::error::Error for Error {}
