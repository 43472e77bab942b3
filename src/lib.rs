//! # Introduction
//!
//! wffcheck decides whether a string is a well-formed formula (WFF) of
//! propositional logic: atoms (single letters), unary negation, and the
//! binary connectives conjunction, disjunction, and implication under strict
//! parenthesization. Acceptance produces the parsed formula tree; rejection
//! produces one reason from a closed diagnostic set.
//!
//! ## Validation pipeline
//!
//! ```text
//! Input → Lexer → Tokens → Grammar Validator → Formula | ValidationError
//! ```
//!
//! 1. [`parser::lexer`] — tokenizes the input, skipping whitespace and
//!    reading multi-character connective spellings greedily.
//! 2. [`parser::parser`] — recursive descent over the token sequence; every
//!    rejection is a structural consequence of the grammar.
//! 3. [`diagnostics`] — the closed [`ValidationError`] set and its
//!    human-readable rendering.
//!
//! ## Usage
//!
//! ```
//! use wffcheck::{validate, Formula, ValidationError};
//!
//! let formula = validate("(p and q)").unwrap();
//! assert_eq!(formula.to_string(), "(p ∧ q)");
//!
//! assert_eq!(validate("(p)").unwrap_err(), ValidationError::RedundantParens);
//! ```
//!
//! Validation is a pure function of the input: no shared state, no I/O.
//! Semantic evaluation, equivalence checking, and proof search are out of
//! scope; the returned [`Formula`] tree is the caller's to reuse for those.

pub mod diagnostics;
pub mod parser;

pub use diagnostics::ValidationError;
pub use parser::ast::{BinOp, Formula};
pub use parser::parser::validate;
