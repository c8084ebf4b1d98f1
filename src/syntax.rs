//! The augmented, attributed syntax tree.
//!
//! Every node carries its `nullable`, `firstpos` and `lastpos` attributes,
//! computed bottom-up as the parser reduces operands. Reductions which link
//! positions (concatenation and star) extend the followpos table as a side
//! effect, so once the tree is complete the followpos relation is too.

use crate::followpos::{write_pos_set, FollowPos, TerminalIndex};
use crate::types::{PosSet, Position};
use core::fmt;
use core::mem;

/// The node types of the syntax tree.
#[derive(Debug)]
pub enum Node {
    /// A literal symbol at a leaf position.
    Leaf { symbol: char, pos: Position },

    /// Matches the empty string; produced for empty branches and groups.
    Epsilon,

    /// The synthetic end marker. Its position is the last one.
    EndMarker(Position),

    /// Kleene closure.
    Star(Box<Tree>),

    /// Concatenation of two subexpressions.
    Concat(Box<Tree>, Box<Tree>),

    /// Alternation like a|b.
    Alt(Box<Tree>, Box<Tree>),
}

/// A node together with its attributes.
/// A Tree owns its children; reductions move operands into the parent.
/// Trees may be as deep as the pattern is long, so they are dropped and
/// displayed without recursion.
#[derive(Debug)]
pub struct Tree {
    pub node: Node,
    pub nullable: bool,
    pub firstpos: PosSet,
    pub lastpos: PosSet,
}

impl Tree {
    /// Release the tree, keeping only its firstpos set.
    pub fn into_firstpos(mut self) -> PosSet {
        mem::take(&mut self.firstpos)
    }

    /// \return the children of this node, left to right.
    fn children(&self) -> impl DoubleEndedIterator<Item = &Tree> {
        let (first, second) = match &self.node {
            Node::Leaf { .. } | Node::Epsilon | Node::EndMarker(_) => (None, None),
            Node::Star(child) => (Some(child.as_ref()), None),
            Node::Concat(left, right) | Node::Alt(left, right) => {
                (Some(left.as_ref()), Some(right.as_ref()))
            }
        };
        first.into_iter().chain(second)
    }

    /// Move the children of this node onto \p out, leaving it childless.
    fn detach_children(&mut self, out: &mut Vec<Box<Tree>>) {
        match mem::replace(&mut self.node, Node::Epsilon) {
            Node::Star(child) => out.push(child),
            Node::Concat(left, right) | Node::Alt(left, right) => {
                out.push(left);
                out.push(right);
            }
            Node::Leaf { .. } | Node::Epsilon | Node::EndMarker(_) => {}
        }
    }
}

impl Drop for Tree {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        // Each popped child is childless by the time it is dropped.
        while let Some(mut child) = pending.pop() {
            child.detach_children(&mut pending);
        }
    }
}

/// The result of parsing: the augmented tree and its position tables.
#[derive(Debug)]
pub struct Syntax {
    /// The root, which is the concatenation of the expression with the end marker.
    pub root: Tree,

    /// The position of the end marker.
    pub end_marker: Position,

    pub followpos: FollowPos,

    pub terminals: TerminalIndex,
}

impl Syntax {
    /// The position set of the initial DFA state.
    pub fn initial_positions(&self) -> &PosSet {
        &self.root.firstpos
    }
}

/// Builds attributed nodes and the position tables.
/// Positions are handed out in the order leaves are created.
#[derive(Debug, Default)]
pub(crate) struct Builder {
    followpos: FollowPos,
    terminals: TerminalIndex,
    next_pos: Position,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next unused position.
    fn make_pos(&mut self) -> Position {
        let pos = self.next_pos;
        self.next_pos += 1;
        self.followpos.add_position(pos);
        pos
    }

    /// Create a leaf for the literal \p symbol.
    pub fn leaf(&mut self, symbol: char) -> Tree {
        let pos = self.make_pos();
        self.terminals.insert(symbol, pos);
        Tree {
            node: Node::Leaf { symbol, pos },
            nullable: false,
            firstpos: PosSet::from([pos]),
            lastpos: PosSet::from([pos]),
        }
    }

    pub fn epsilon(&mut self) -> Tree {
        Tree {
            node: Node::Epsilon,
            nullable: true,
            firstpos: PosSet::new(),
            lastpos: PosSet::new(),
        }
    }

    fn end_marker(&mut self) -> Tree {
        let pos = self.make_pos();
        Tree {
            node: Node::EndMarker(pos),
            nullable: false,
            firstpos: PosSet::from([pos]),
            lastpos: PosSet::from([pos]),
        }
    }

    /// Reduce \p operand to its Kleene closure.
    /// Each last position may be followed by each first position.
    pub fn star(&mut self, operand: Tree) -> Tree {
        self.followpos.link(&operand.lastpos, &operand.firstpos);
        Tree {
            nullable: true,
            firstpos: operand.firstpos.clone(),
            lastpos: operand.lastpos.clone(),
            node: Node::Star(Box::new(operand)),
        }
    }

    /// Reduce \p left followed by \p right.
    pub fn concat(&mut self, left: Tree, right: Tree) -> Tree {
        self.followpos.link(&left.lastpos, &right.firstpos);

        let mut firstpos = left.firstpos.clone();
        if left.nullable {
            firstpos.extend(right.firstpos.iter().copied());
        }
        let mut lastpos = right.lastpos.clone();
        if right.nullable {
            lastpos.extend(left.lastpos.iter().copied());
        }
        Tree {
            nullable: left.nullable && right.nullable,
            firstpos,
            lastpos,
            node: Node::Concat(Box::new(left), Box::new(right)),
        }
    }

    /// Reduce the alternation \p left | \p right.
    pub fn alt(&mut self, left: Tree, right: Tree) -> Tree {
        Tree {
            nullable: left.nullable || right.nullable,
            firstpos: left.firstpos.union(&right.firstpos).copied().collect(),
            lastpos: left.lastpos.union(&right.lastpos).copied().collect(),
            node: Node::Alt(Box::new(left), Box::new(right)),
        }
    }

    /// Augment \p body with the end marker and hand over the tables.
    pub fn finish(mut self, body: Tree) -> Syntax {
        let end = self.end_marker();
        let end_marker = self.next_pos - 1;
        let root = self.concat(body, end);
        Syntax {
            root,
            end_marker,
            followpos: self.followpos,
            terminals: self.terminals,
        }
    }
}

fn display_node(tree: &Tree, depth: usize, f: &mut fmt::Formatter) -> fmt::Result {
    for _ in 0..depth {
        write!(f, "..")?;
    }
    match &tree.node {
        Node::Leaf { symbol, pos } => write!(f, "'{}' @{}", symbol, pos)?,
        Node::Epsilon => write!(f, "Epsilon")?,
        Node::EndMarker(pos) => write!(f, "End @{}", pos)?,
        Node::Star(..) => write!(f, "Star")?,
        Node::Concat(..) => write!(f, "Concat")?,
        Node::Alt(..) => write!(f, "Alt")?,
    }
    if tree.nullable {
        write!(f, " nullable")?;
    }
    write!(f, " first=")?;
    write_pos_set(f, &tree.firstpos)?;
    write!(f, " last=")?;
    write_pos_set(f, &tree.lastpos)?;
    writeln!(f)
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // Preorder, with children pushed right to left.
        let mut stack = vec![(self, 0)];
        while let Some((tree, depth)) = stack.pop() {
            display_node(tree, depth, f)?;
            stack.extend(tree.children().rev().map(|child| (child, depth + 1)));
        }
        Ok(())
    }
}

impl fmt::Display for Syntax {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.root)?;
        for (pos, follow) in self.followpos.iter() {
            match self.terminals.symbol_at(pos) {
                Some(symbol) => write!(f, "followpos({}) '{}' = ", pos, symbol)?,
                None => write!(f, "followpos({}) End = ", pos)?,
            }
            write_pos_set(f, follow)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concat_attributes() {
        // a*b
        let mut b = Builder::new();
        let a = b.leaf('a');
        let star = b.star(a);
        let bb = b.leaf('b');
        let cat = b.concat(star, bb);
        assert!(!cat.nullable);
        assert_eq!(cat.firstpos, PosSet::from([0, 1]));
        assert_eq!(cat.lastpos, PosSet::from([1]));

        let syntax = b.finish(cat);
        assert_eq!(syntax.end_marker, 2);
        assert_eq!(syntax.followpos.get(0), &PosSet::from([0, 1]));
        assert_eq!(syntax.followpos.get(1), &PosSet::from([2]));
        assert!(syntax.followpos.get(2).is_empty());
        assert_eq!(syntax.initial_positions(), &PosSet::from([0, 1]));
    }

    #[test]
    fn alt_with_epsilon() {
        // a|
        let mut b = Builder::new();
        let a = b.leaf('a');
        let eps = b.epsilon();
        let alt = b.alt(a, eps);
        assert!(alt.nullable);
        assert_eq!(alt.firstpos, PosSet::from([0]));

        let syntax = b.finish(alt);
        assert_eq!(syntax.initial_positions(), &PosSet::from([0, 1]));
        assert_eq!(syntax.followpos.get(0), &PosSet::from([1]));
    }

    #[test]
    fn display_tree() {
        let mut b = Builder::new();
        let a = b.leaf('a');
        let star = b.star(a);
        let syntax = b.finish(star);
        assert_eq!(
            syntax.to_string(),
            "Concat first={0, 1} last={1}\n\
             ..Star nullable first={0} last={0}\n\
             ....'a' @0 first={0} last={0}\n\
             ..End @1 first={1} last={1}\n\
             followpos(0) 'a' = {0, 1}\n\
             followpos(1) End = {}\n"
        );
    }

    #[test]
    fn deep_trees() {
        // A long literal is a left-deep chain of concatenations.
        let mut b = Builder::new();
        let mut tree = b.leaf('a');
        for _ in 1..200_000 {
            let next = b.leaf('a');
            tree = b.concat(tree, next);
        }
        let syntax = b.finish(tree);
        assert_eq!(syntax.end_marker, 200_000);
        assert_eq!(syntax.root.into_firstpos(), PosSet::from([0]));

        // A run of stars is a chain of single children.
        let mut b = Builder::new();
        let mut tree = b.leaf('a');
        for _ in 0..200_000 {
            tree = b.star(tree);
        }
        assert!(tree.nullable);
        drop(tree);
    }

    #[test]
    fn display_deep_tree() {
        let mut b = Builder::new();
        let mut tree = b.leaf('a');
        for _ in 0..3_000 {
            tree = b.star(tree);
        }
        let dump = tree.to_string();
        assert_eq!(dump.lines().count(), 3_001);
        let innermost = format!("{}'a' @0 first={{0}} last={{0}}\n", "..".repeat(3_000));
        assert!(dump.ends_with(&innermost));
    }
}
