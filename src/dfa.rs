//! Deterministic finite automata.

use crate::alphabet::Alphabet;
use crate::types::StateHandle;
use core::fmt;
use indexmap::IndexMap;
use std::collections::BTreeMap;

/// A DFA state. Its name is the key under which it was registered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    pub accepting: bool,

    // Transitions to other states, keyed by symbol.
    // A missing symbol rejects.
    pub transitions: BTreeMap<char, StateHandle>,
}

/// A DFA over an alphabet, accumulating named states and transitions.
/// The first registered state is the start state.
#[derive(Debug, Clone)]
pub struct Dfa {
    alphabet: Alphabet,

    // States by name. The handle of a state is its index here.
    states: IndexMap<String, State>,
}

impl Dfa {
    /// Construct an automaton with no states over \p alphabet.
    pub fn with_alphabet(alphabet: Alphabet) -> Self {
        Self {
            alphabet,
            states: IndexMap::new(),
        }
    }

    /// Register a state named \p name, returning its handle.
    /// Registering a name which already exists does nothing and returns the
    /// existing handle.
    pub fn create_state(&mut self, name: &str, accepting: bool) -> StateHandle {
        if let Some(handle) = self.states.get_index_of(name) {
            debug_assert_eq!(
                self.states[handle].accepting, accepting,
                "State {} re-registered with a different accepting flag",
                name
            );
            return handle;
        }
        let (handle, _) = self.states.insert_full(
            name.to_string(),
            State {
                accepting,
                transitions: BTreeMap::new(),
            },
        );
        handle
    }

    /// \return whether a state named \p name exists.
    pub fn has_state(&self, name: &str) -> bool {
        self.states.contains_key(name)
    }

    /// \return the handle of the state named \p name.
    pub fn state_named(&self, name: &str) -> Option<StateHandle> {
        self.states.get_index_of(name)
    }

    /// Record a transition from \p from to \p to on \p symbol.
    /// This replaces any earlier transition from \p from on \p symbol.
    ///
    /// # Panics
    ///
    /// Panics if \p from is not a state of this DFA.
    pub fn set_trans(&mut self, from: StateHandle, symbol: char, to: StateHandle) {
        debug_assert!(to < self.states.len(), "Invalid target state");
        debug_assert!(self.alphabet.has_char(symbol), "Symbol not in alphabet");
        self.states[from].transitions.insert(symbol, to);
    }

    /// \return the start state, or None if no state was registered.
    pub fn start(&self) -> Option<StateHandle> {
        (!self.states.is_empty()).then_some(0)
    }

    /// \return the state \p handle.
    ///
    /// # Panics
    ///
    /// Panics if \p handle is not a state of this DFA. Use
    /// [`Dfa::transition`] to follow a transition without panicking.
    pub fn at(&self, handle: StateHandle) -> &State {
        &self.states[handle]
    }

    /// \return the name of the state \p handle.
    ///
    /// # Panics
    ///
    /// Panics if \p handle is not a state of this DFA.
    pub fn name(&self, handle: StateHandle) -> &str {
        match self.states.get_index(handle) {
            Some((name, _)) => name.as_str(),
            None => panic!("Invalid state handle {}", handle),
        }
    }

    /// Iterate over (name, state) pairs in handle order.
    pub fn states(&self) -> impl Iterator<Item = (&str, &State)> + '_ {
        self.states.iter().map(|(name, state)| (name.as_str(), state))
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// \return the successor of \p from on \p symbol, if any.
    pub fn transition(&self, from: StateHandle, symbol: char) -> Option<StateHandle> {
        self.states
            .get_index(from)
            .and_then(|(_, state)| state.transitions.get(&symbol).copied())
    }

    /// \return whether the automaton accepts all of \p input.
    pub fn accepts(&self, input: &str) -> bool {
        let mut cursor = match self.start() {
            Some(start) => start,
            None => return false,
        };
        for c in input.chars() {
            match self.transition(cursor, c) {
                Some(next) => cursor = next,
                None => return false,
            }
        }
        self.at(cursor).accepting
    }

    /// Generate a human-readable representation of the DFA.
    pub fn to_readable_string(&self) -> String {
        let mut result = String::new();
        result.push_str("DFA States:\n");
        result.push_str("===========\n\n");
        result.push_str(&format!("Alphabet: {}\n\n", self.alphabet));

        for (idx, (name, state)) in self.states.iter().enumerate() {
            let mut markers = Vec::new();
            if Some(idx) == self.start() {
                markers.push("START");
            }
            if state.accepting {
                markers.push("ACCEPT");
            }
            let marker = if markers.is_empty() {
                String::new()
            } else {
                format!(" ({})", markers.join(", "))
            };
            result.push_str(&format!("State {} [{}]{}\n", idx, name, marker));

            if state.transitions.is_empty() {
                result.push_str("  (no transitions)\n");
            }
            for (&symbol, &target) in &state.transitions {
                result.push_str(&format!(
                    "    '{}' ──> {} [{}]\n",
                    symbol,
                    target,
                    self.name(target)
                ));
            }
            result.push('\n');
        }
        result
    }
}

impl fmt::Display for Dfa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "DFA({} states)", self.states.len())?;
        for (idx, state) in self.states.values().enumerate() {
            let marker = match (Some(idx) == self.start(), state.accepting) {
                (true, true) => "SA",
                (true, false) => "S ",
                (false, true) => " A",
                (false, false) => "  ",
            };
            write!(f, "[{}{}]", marker, idx)?;
            for (symbol, target) in &state.transitions {
                write!(f, " {}→{}", symbol, target)?;
            }
            if idx < self.states.len() - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
