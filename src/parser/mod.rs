//! Propositional formula syntax
//!
//! This module transforms formula text into a [`ast::Formula`] tree:
//! - [`lexer`]: tokenization (text → tokens)
//! - [`parser`]: grammar validation (tokens → formula tree)
//! - [`ast`]: formula tree definitions
//!
//! # Grammar
//!
//! ```text
//! Formula := Atom
//!          | Not Formula
//!          | '(' Formula BinOp Formula ')'
//! BinOp   := And | Or | Implies
//! ```
//!
//! Strict parenthesization: every binary connective requires its own
//! parenthesized group, and no group may wrap anything but
//! `Formula BinOp Formula`. There is no operator precedence to infer.
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser. No external parser generator
//! dependencies.

pub mod ast;
pub mod lexer;
pub mod parser;
