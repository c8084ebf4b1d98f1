//! Parser from patterns to the attributed syntax tree.
//!
//! This is a Pratt parser over a three-level precedence table. Alternation and
//! concatenation are left-associative binary operators; concatenation is
//! implicit between adjacent operands. `*` is postfix and binds tightest.

use crate::alphabet::Alphabet;
use crate::error::Error;
use crate::syntax::{Builder, Syntax, Tree};
use crate::types::MAX_GROUP_DEPTH;
use std::iter::Peekable;
use std::str::CharIndices;

/// Binding strength of the binary operators. Higher binds tighter.
/// An open group is the weakest boundary.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum Precedence {
    Group = 0,
    Alternation = 1,
    Concatenation = 2,
}

/// Represents the state used to parse a pattern.
struct Parser<'a> {
    /// The remaining input, with byte offsets.
    input: Peekable<CharIndices<'a>>,

    /// The literal symbols.
    alphabet: &'a Alphabet,

    /// Produces nodes and the position tables.
    builder: Builder,

    /// The number of currently open groups.
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Peek at the next character and its offset.
    fn peek(&mut self) -> Option<(usize, char)> {
        self.input.peek().copied()
    }

    /// \return the next character and its offset.
    fn next(&mut self) -> Option<(usize, char)> {
        self.input.next()
    }

    fn try_parse(mut self) -> Result<Syntax, Error> {
        let body = self.parse_expr(Precedence::Group)?;
        // The expression loop only stops early at a closing paren.
        if let Some((offset, c)) = self.peek() {
            debug_assert_eq!(c, ')');
            return Err(Error::UnbalancedParenthesis { offset });
        }
        Ok(self.builder.finish(body))
    }

    /// Parse an expression whose binary operators all bind tighter than \p min.
    fn parse_expr(&mut self, min: Precedence) -> Result<Tree, Error> {
        let mut lhs = self.parse_operand()?;
        while let Some((_, c)) = self.peek() {
            match c {
                ')' => break,
                '*' => {
                    self.next();
                    lhs = self.builder.star(lhs);
                }
                '|' => {
                    if Precedence::Alternation <= min {
                        break;
                    }
                    self.next();
                    let rhs = self.parse_expr(Precedence::Alternation)?;
                    lhs = self.builder.alt(lhs, rhs);
                }
                _ => {
                    // An operand follows an operand: implicit concatenation.
                    if Precedence::Concatenation <= min {
                        break;
                    }
                    let rhs = self.parse_expr(Precedence::Concatenation)?;
                    lhs = self.builder.concat(lhs, rhs);
                }
            }
        }
        Ok(lhs)
    }

    /// Parse a literal or a group.
    /// An operand missing before `|`, `)` or the end is the empty string.
    fn parse_operand(&mut self) -> Result<Tree, Error> {
        let (offset, c) = match self.peek() {
            None => return Ok(self.builder.epsilon()),
            Some(nc) => nc,
        };
        match c {
            '|' | ')' => Ok(self.builder.epsilon()),
            '*' => Err(Error::NothingToRepeat { offset }),
            '(' => {
                if self.depth >= MAX_GROUP_DEPTH {
                    return Err(Error::NestingLimitExceeded { offset });
                }
                self.next();
                self.depth += 1;
                let contents = self.parse_expr(Precedence::Group)?;
                self.depth -= 1;
                match self.next() {
                    Some((_, ')')) => Ok(contents),
                    _ => Err(Error::UnbalancedParenthesis { offset }),
                }
            }
            c if self.alphabet.has_char(c) => {
                self.next();
                Ok(self.builder.leaf(c))
            }
            symbol => Err(Error::UnrecognizedSymbol { symbol, offset }),
        }
    }
}

/// Try parsing \p pattern into an augmented syntax tree.
/// Literal symbols are those of \p alphabet.
pub fn try_parse(pattern: &str, alphabet: &Alphabet) -> Result<Syntax, Error> {
    let parser = Parser {
        input: pattern.char_indices().peekable(),
        alphabet,
        builder: Builder::new(),
        depth: 0,
    };
    parser.try_parse()
}
