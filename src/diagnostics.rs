//! Diagnostics for formula validation
//!
//! This module defines [`ValidationError`], the closed set of reasons a
//! string can fail to be a well-formed formula. Variants are returned by
//! value and mapped to human-readable messages only here, at the boundary
//! (e.g. the CLI); the validator itself never consumes them.
//!
//! Every rejection is definitive: there is no recovery or retry, and the set
//! is exhaustive. Adding a new rule to the language means adding a grammar
//! production or a variant here, not a new pattern check.

use crate::parser::lexer::LexError;
use std::fmt;

/// Every way a string can fail validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The input contained no tokens at all.
    EmptyInput,

    /// A character or sequence matching no token class.
    UnknownToken { offset: usize },

    /// A token that cannot appear where it did.
    UnexpectedToken {
        expected: &'static str,
        found: String,
        offset: usize,
    },

    /// Parenthesis nesting was never closed, or a ')' appeared where a
    /// formula was expected.
    UnbalancedParens,

    /// A complete formula was parsed but input remained.
    TrailingTokens { offset: usize },

    /// Parentheses wrapping a single already-complete formula.
    RedundantParens,
}

impl ValidationError {
    /// Character offset of the offending token, where one exists.
    pub fn offset(&self) -> Option<usize> {
        match self {
            ValidationError::UnknownToken { offset }
            | ValidationError::UnexpectedToken { offset, .. }
            | ValidationError::TrailingTokens { offset } => Some(*offset),
            ValidationError::EmptyInput
            | ValidationError::UnbalancedParens
            | ValidationError::RedundantParens => None,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyInput => {
                write!(f, "empty input: expected a formula")
            }
            ValidationError::UnknownToken { offset } => {
                write!(f, "unknown token at offset {}", offset)
            }
            ValidationError::UnexpectedToken {
                expected,
                found,
                offset,
            } => {
                write!(
                    f,
                    "unexpected {} at offset {}: expected {}",
                    found, offset, expected
                )
            }
            ValidationError::UnbalancedParens => {
                write!(f, "unbalanced parentheses")
            }
            ValidationError::TrailingTokens { offset } => {
                write!(
                    f,
                    "trailing tokens after a complete formula, starting at offset {}",
                    offset
                )
            }
            ValidationError::RedundantParens => {
                write!(f, "redundant parentheses around a complete formula")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<LexError> for ValidationError {
    fn from(err: LexError) -> Self {
        ValidationError::UnknownToken { offset: err.offset }
    }
}
