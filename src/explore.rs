//! Subset construction over position sets.

use crate::alphabet::Alphabet;
use crate::api::Options;
use crate::dfa::Dfa;
use crate::error::Error;
use crate::followpos::{FollowPos, TerminalIndex};
use crate::syntax::Syntax;
use crate::types::{PosSet, StateHandle, EMPTY_STATE_NAME, STATE_NAME_SEPARATOR};
use std::collections::VecDeque;

/// \return the canonical name of the state for \p positions, like `0,1,2`.
pub fn state_name(positions: &PosSet) -> String {
    let mut name = String::new();
    for (idx, pos) in positions.iter().enumerate() {
        if idx > 0 {
            name.push(STATE_NAME_SEPARATOR);
        }
        name.push_str(&pos.to_string());
    }
    name
}

/// The automaton for the empty expression: a single accepting state, with no
/// transitions, over the trivial alphabet.
pub fn accept_empty() -> Dfa {
    let mut dfa = Dfa::with_alphabet(Alphabet::trivial());
    dfa.create_state(EMPTY_STATE_NAME, true);
    dfa
}

/// \return the union of followpos(p) for every p in \p positions labeled
/// \p symbol.
fn successor(
    positions: &PosSet,
    symbol: char,
    terminals: &TerminalIndex,
    followpos: &FollowPos,
) -> PosSet {
    let mut next = PosSet::new();
    if let Some(labeled) = terminals.positions(symbol) {
        for &pos in labeled.intersection(positions) {
            next.extend(followpos.get(pos).iter().copied());
        }
    }
    next
}

/// Explore the position sets reachable from the initial one, breadth first,
/// emitting a DFA state per distinct set.
/// \return the DFA, or an error if the state budget is exceeded.
pub fn explore(syntax: Syntax, alphabet: Alphabet, options: &Options) -> Result<Dfa, Error> {
    let Syntax {
        root,
        end_marker,
        followpos,
        terminals,
    } = syntax;
    // Only the initial positions are needed from the tree.
    let initial = root.into_firstpos();

    let symbols: Vec<char> = alphabet.iter().collect();
    let mut dfa = Dfa::with_alphabet(alphabet);
    let make_state = |dfa: &mut Dfa, name: &str, positions: &PosSet| {
        if let Some(budget) = options.state_budget {
            if dfa.len() >= budget {
                return Err(Error::BudgetExceeded { budget });
            }
        }
        Ok(dfa.create_state(name, positions.contains(&end_marker)))
    };

    // Every set in the work list has already been registered.
    let mut work_list: VecDeque<(PosSet, StateHandle)> = VecDeque::new();
    let start = make_state(&mut dfa, &state_name(&initial), &initial)?;
    work_list.push_back((initial, start));

    while let Some((positions, from)) = work_list.pop_front() {
        for &symbol in &symbols {
            let next = successor(&positions, symbol, &terminals, &followpos);
            if next.is_empty() {
                continue;
            }
            let name = state_name(&next);
            let to = match dfa.state_named(&name) {
                Some(existing) => existing,
                None => {
                    let created = make_state(&mut dfa, &name, &next)?;
                    work_list.push_back((next, created));
                    created
                }
            };
            dfa.set_trans(from, symbol, to);
        }
    }
    Ok(dfa)
}
