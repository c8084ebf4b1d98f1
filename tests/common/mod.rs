#![allow(clippy::uninlined_format_args)]

use re2dfa::Dfa;

/// The symbols used to enumerate inputs.
pub const SYMBOLS: &[char] = &['a', 'b', 'c'];

/// Test that \p pattern fails to compile.
#[track_caller]
pub fn test_parse_fails(pattern: &str) {
    let res = re2dfa::compile(pattern);
    assert!(res.is_err(), "Pattern should not have parsed: {}", pattern);
}

/// Compile \p pattern, panicking on failure.
#[track_caller]
pub fn compile(pattern: &str) -> TestDfa {
    match re2dfa::compile(pattern) {
        Ok(dfa) => TestDfa {
            dfa,
            pattern: pattern.to_string(),
        },
        Err(err) => panic!("Failed to compile {}: {}", pattern, err),
    }
}

/// Translate a pattern into JavaScript syntax, anchored at both ends.
/// Groups become non-capturing. Patterns may not contain `**`, which is a
/// syntax error in JavaScript.
pub fn to_js_syntax(pattern: &str) -> String {
    assert!(!pattern.contains("**"), "Cannot translate {}", pattern);
    format!("^(?:{})$", pattern.replace('(', "(?:"))
}

/// A backtracking matcher for a JavaScript-syntax pattern, which must match
/// the entire input.
pub struct Reference {
    re: regress::Regex,
}

impl Reference {
    #[track_caller]
    pub fn new(js_pattern: &str) -> Self {
        match regress::Regex::new(js_pattern) {
            Ok(re) => Self { re },
            Err(err) => panic!("Reference failed to parse {}: {}", js_pattern, err),
        }
    }

    pub fn matches(&self, input: &str) -> bool {
        self.re.find(input).is_some()
    }
}

/// \return every string over \p symbols of length at most \p max_len,
/// shortest first.
pub fn enumerate_strings(symbols: &[char], max_len: usize) -> Vec<String> {
    let mut result = vec![String::new()];
    let mut frontier = vec![String::new()];
    for _ in 0..max_len {
        let mut next = Vec::with_capacity(frontier.len() * symbols.len());
        for prefix in &frontier {
            for &c in symbols {
                let mut s = prefix.clone();
                s.push(c);
                next.push(s);
            }
        }
        result.extend(next.iter().cloned());
        frontier = next;
    }
    result
}

/// A compiled DFA which remembers its pattern.
#[derive(Debug, Clone)]
pub struct TestDfa {
    pub dfa: Dfa,
    pub pattern: String,
}

impl TestDfa {
    /// Test that the DFA accepts each of \p inputs.
    #[track_caller]
    pub fn test_accepts(&self, inputs: &[&str]) -> &Self {
        for input in inputs {
            assert!(
                self.dfa.accepts(input),
                "Pattern {} should have accepted {:?}",
                self.pattern,
                input
            );
        }
        self
    }

    /// Test that the DFA rejects each of \p inputs.
    #[track_caller]
    pub fn test_rejects(&self, inputs: &[&str]) -> &Self {
        for input in inputs {
            assert!(
                !self.dfa.accepts(input),
                "Pattern {} should have rejected {:?}",
                self.pattern,
                input
            );
        }
        self
    }

    /// Test that the DFA agrees with \p reference on every string up to
    /// \p max_len symbols.
    #[track_caller]
    pub fn test_language(&self, reference: &Reference, max_len: usize) -> &Self {
        for input in enumerate_strings(SYMBOLS, max_len) {
            assert_eq!(
                self.dfa.accepts(&input),
                reference.matches(&input),
                "Pattern {} disagrees with the reference on {:?}\n{}",
                self.pattern,
                input,
                self.dfa.to_readable_string()
            );
        }
        self
    }

    /// Test the structural invariants of the DFA: every transition is on an
    /// alphabet symbol and targets a valid state, and every state is reachable
    /// from the start.
    #[track_caller]
    pub fn test_well_formed(&self) -> &Self {
        let dfa = &self.dfa;
        let start = dfa.start().expect("DFA has no start state");
        let mut reached = vec![false; dfa.len()];
        let mut stack = vec![start];
        reached[start] = true;
        while let Some(handle) = stack.pop() {
            for (&symbol, &target) in &dfa.at(handle).transitions {
                assert!(dfa.alphabet().has_char(symbol));
                assert!(target < dfa.len(), "Invalid target {}", target);
                if !reached[target] {
                    reached[target] = true;
                    stack.push(target);
                }
            }
        }
        for (handle, was_reached) in reached.iter().enumerate() {
            assert!(
                *was_reached,
                "State {} of {} is unreachable",
                dfa.name(handle),
                self.pattern
            );
        }
        self
    }
}
