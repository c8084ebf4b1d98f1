use std::collections::BTreeSet;

/// A leaf position in the augmented syntax tree.
/// Positions are assigned in left-to-right order starting at 0.
pub type Position = usize;

/// An ordered set of positions. The ordering makes state names canonical.
pub type PosSet = BTreeSet<Position>;

/// A handle to a state in the DFA.
/// This is an index into the dense state table, in registration order.
pub type StateHandle = usize;

/// The characters which are operators rather than literal symbols.
pub const OPERATORS: [char; 4] = ['|', '*', '(', ')'];

/// The single symbol of the alphabet used when the expression is empty.
pub const TRIVIAL_SYMBOL: char = '@';

/// The name of the single state of the empty-expression automaton.
pub const EMPTY_STATE_NAME: &str = "0";

/// Separator between positions in a canonical state name.
pub const STATE_NAME_SEPARATOR: char = ',';

/// The maximum depth of nested groups.
pub const MAX_GROUP_DEPTH: usize = 128;
