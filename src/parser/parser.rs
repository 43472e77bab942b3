//! Grammar validator for propositional-logic formulas
//!
//! A recursive descent parser over the token stream implementing
//!
//! ```text
//! Formula := Atom
//!          | Not Formula
//!          | '(' Formula BinOp Formula ')'
//! BinOp   := And | Or | Implies
//! ```
//!
//! Every rejection is a structural consequence of the grammar rather than an
//! enumerated pattern: operator adjacency, atom juxtaposition, dangling
//! operands, and redundant outer parentheses are each caught in the one place
//! the grammar leaves for them.

use crate::diagnostics::ValidationError;
use crate::parser::ast::{BinOp, Formula};
use crate::parser::lexer::{Lexer, Token};

/// Validate a formula string.
///
/// The single entry point: tokenizes the input, runs the grammar validator,
/// and returns either the parsed [`Formula`] tree (owned by the caller
/// thereafter) or one [`ValidationError`] from the closed set. Pure and
/// synchronous; concurrent calls on different inputs need no coordination.
pub fn validate(input: &str) -> Result<Formula, ValidationError> {
    let tokens = Lexer::new(input).tokenize()?;
    let mut parser = Parser::new(tokens, input.chars().count());

    match parser.parse() {
        Ok(formula) => {
            log::debug!("accepted {:?} as {}", input, formula);
            Ok(formula)
        }
        Err(err) => {
            log::debug!("rejected {:?}: {}", input, err);
            Err(err)
        }
    }
}

/// Recursive descent validator for the propositional grammar.
pub struct Parser {
    tokens: Vec<Token>,
    position: usize,
    /// Open parenthesis groups the cursor is currently inside. Running out of
    /// tokens with `depth > 0` is an unbalanced input, not a generic
    /// unexpected end.
    depth: usize,
    /// Character offset one past the last input character, reported when the
    /// input ends where a token was required.
    end: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>, end: usize) -> Self {
        Self {
            tokens,
            position: 0,
            depth: 0,
            end,
        }
    }

    /// Parse the token sequence as a single complete formula.
    pub fn parse(&mut self) -> Result<Formula, ValidationError> {
        if self.tokens.is_empty() {
            return Err(ValidationError::EmptyInput);
        }

        let formula = self.parse_formula()?;

        // The grammar derives exactly one formula; anything left over (a
        // mismatched trailing ')', a second formula) cannot belong to it.
        match self.peek() {
            Some(token) => Err(ValidationError::TrailingTokens {
                offset: token.offset(),
            }),
            None => Ok(formula),
        }
    }

    /// Parse one `Formula` production starting at the cursor.
    fn parse_formula(&mut self) -> Result<Formula, ValidationError> {
        match self.peek() {
            // Negation binds to exactly the next well-formed sub-formula.
            Some(Token::Not(_)) => {
                self.advance();
                let sub = self.parse_formula()?;
                Ok(Formula::Not(Box::new(sub)))
            }

            // An atom terminates the production: whatever follows it must be
            // explained by an enclosing group, never by juxtaposition.
            Some(&Token::Atom(name, _)) => {
                self.advance();
                Ok(Formula::Atom(name))
            }

            // '(' Formula BinOp Formula ')' — both operand slots are filled
            // structurally, so a dangling operand is a parse failure here,
            // not a post-hoc token count.
            Some(Token::LParen(_)) => {
                self.advance();
                self.depth += 1;

                let left = self.parse_formula()?;
                let op = self.expect_binary_op()?;
                let right = self.parse_formula()?;
                self.expect_rparen()?;

                self.depth -= 1;
                Ok(Formula::Binary {
                    op,
                    left: Box::new(left),
                    right: Box::new(right),
                })
            }

            // A stray close paren where a formula should start.
            Some(Token::RParen(_)) => Err(ValidationError::UnbalancedParens),

            // A binary connective in formula position, or the input ended.
            Some(_) | None => Err(self.unexpected("an atom, a negation, or '('")),
        }
    }

    /// Require exactly one binary connective at the cursor.
    fn expect_binary_op(&mut self) -> Result<BinOp, ValidationError> {
        let op = match self.peek() {
            Some(Token::And(_)) => Some(BinOp::And),
            Some(Token::Or(_)) => Some(BinOp::Or),
            Some(Token::Implies(_)) => Some(BinOp::Implies),

            // '(' Formula ')' is not a production: a ')' in the mandatory
            // BinOp slot means the pair wrapped a single formula that was
            // already complete on its own.
            Some(Token::RParen(_)) => {
                return Err(ValidationError::RedundantParens);
            }

            _ => None,
        };

        match op {
            Some(op) => {
                self.advance();
                Ok(op)
            }
            None => Err(self.unexpected("a binary connective")),
        }
    }

    /// Require the close paren of the current group.
    fn expect_rparen(&mut self) -> Result<(), ValidationError> {
        match self.peek() {
            Some(Token::RParen(_)) => {
                self.advance();
                Ok(())
            }
            _ => Err(self.unexpected("')'")),
        }
    }

    // ===== Helper methods =====

    /// Diagnostic for a token (or end of input) that the grammar cannot
    /// accept at the cursor.
    fn unexpected(&self, expected: &'static str) -> ValidationError {
        match self.peek() {
            Some(token) => ValidationError::UnexpectedToken {
                expected,
                found: token.to_string(),
                offset: token.offset(),
            },
            None if self.depth > 0 => ValidationError::UnbalancedParens,
            None => ValidationError::UnexpectedToken {
                expected,
                found: "end of input".to_string(),
                offset: self.end,
            },
        }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    fn advance(&mut self) {
        if self.position < self.tokens.len() {
            self.position += 1;
        }
    }
}
