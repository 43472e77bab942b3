// Formula tree definitions for the propositional-logic validator

use rustc_hash::FxHashSet;
use std::fmt;

/// Binary connectives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    And,
    Or,
    Implies,
}

impl BinOp {
    /// Canonical symbol used when rendering a formula.
    pub fn symbol(self) -> char {
        match self {
            BinOp::And => '∧',
            BinOp::Or => '∨',
            BinOp::Implies => '⇒',
        }
    }
}

/// A well-formed formula of propositional logic.
///
/// Built exclusively by the validator. A `Binary` node corresponds to exactly
/// one parenthesized group in the surface string, so a tree renders back to a
/// canonical fully-parenthesized form with no implicit precedence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Formula {
    /// A single propositional variable (one letter, lowercase).
    Atom(char),
    /// Negation of the next complete sub-formula.
    Not(Box<Formula>),
    /// A binary connective applied to two sub-formulas.
    Binary {
        op: BinOp,
        left: Box<Formula>,
        right: Box<Formula>,
    },
}

impl Formula {
    /// Collect the distinct propositional variables appearing in the formula.
    pub fn atoms(&self) -> FxHashSet<char> {
        let mut set = FxHashSet::default();
        self.collect_atoms(&mut set);
        set
    }

    fn collect_atoms(&self, set: &mut FxHashSet<char>) {
        match self {
            Formula::Atom(name) => {
                set.insert(*name);
            }
            Formula::Not(sub) => sub.collect_atoms(set),
            Formula::Binary { left, right, .. } => {
                left.collect_atoms(set);
                right.collect_atoms(set);
            }
        }
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Formula::Atom(name) => write!(f, "{}", name),
            Formula::Not(sub) => write!(f, "¬{}", sub),
            Formula::Binary { op, left, right } => {
                write!(f, "({} {} {})", left, op.symbol(), right)
            }
        }
    }
}
