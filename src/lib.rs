/*!

# re2dfa - regular expressions directly to DFAs

This crate converts a regular expression over a finite alphabet into a
deterministic finite automaton, without building an NFA first. It uses the
classical followpos construction (also known as the Berry-Sethi or
McNaughton-Yamada construction).

# Example: compile and run

```rust
use re2dfa::Dfa;
let dfa = Dfa::new("(a|b)*abb").unwrap();
assert!(dfa.accepts("aababb"));
assert!(!dfa.accepts("abab"));
```

# Example: inspecting the automaton

DFA states are named by the set of syntax-tree positions they represent.
The start state is always the first state.

```rust
let dfa = re2dfa::compile("a|b").unwrap();
let start = dfa.start().unwrap();
let after_a = dfa.transition(start, 'a').unwrap();
assert_eq!(dfa.transition(start, 'b'), Some(after_a));
assert!(dfa.at(after_a).accepting);
assert_eq!(dfa.name(after_a), "2");
println!("{}", dfa.to_readable_string());
```

# Supported Syntax

- Any character other than `|`, `*`, `(`, `)`, whitespace and control
  characters is a literal symbol.
- `xy` is concatenation, `x|y` is alternation, `x*` is Kleene closure, and
  `(x)` groups.
- Empty branches and groups match the empty string: `a|` matches `a` or the
  empty string, and `()` matches only the empty string.
- The empty pattern produces a single accepting state.

There are no escapes, character classes, anchors or bounded repetitions. The
alphabet of a DFA is exactly the set of symbols appearing in its pattern, and
input containing any other character is rejected.

# Errors

Malformed patterns are reported before any automaton is built:

```rust
use re2dfa::{compile, Error};
assert_eq!(compile("(ab").unwrap_err(), Error::UnbalancedParenthesis { offset: 0 });
assert_eq!(compile("a|*").unwrap_err(), Error::NothingToRepeat { offset: 2 });
```

Groups may be nested at most 128 deep; deeper nesting is reported as
[`Error::NestingLimitExceeded`]. Long patterns are otherwise unrestricted.

Because subset construction may produce exponentially many states, a state
budget may be given through [`Options`].

# Architecture

A Pratt parser builds the syntax tree augmented with an end marker, computing
`nullable`, `firstpos` and `lastpos` for every node and the followpos table as
a side effect of each reduction. The subset explorer then walks position sets
breadth first, emitting one DFA state per distinct set. The individual phases
are available in the hidden `backends` module.

*/

#![warn(clippy::all)]

pub use crate::api::*;

mod alphabet;
mod api;
mod dfa;
mod error;
mod explore;
mod followpos;
mod parse;
mod syntax;
mod types;
