//! Lexer (tokenizer) for propositional-logic formulas
//!
//! Converts raw text into a flat [`Token`] stream consumed by the grammar
//! validator. Whitespace is skipped; everything else must belong to a token
//! class. Multi-character connective spellings (`and`, `implies`, LaTeX names
//! such as `\wedge`) are recognized greedily as single tokens, never as runs
//! of individual letters.

use std::fmt;

/// All token variants produced by the lexer.
///
/// Every variant carries its character offset in the input so that parse
/// errors can report an accurate position without a separate token→offset
/// table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// A single propositional variable, normalized to lowercase.
    Atom(char, usize),
    Not(usize),
    And(usize),
    Or(usize),
    Implies(usize),
    LParen(usize),
    RParen(usize),
}

impl Token {
    /// Returns the character offset where this token starts.
    pub fn offset(&self) -> usize {
        match self {
            Token::Atom(_, offset)
            | Token::Not(offset)
            | Token::And(offset)
            | Token::Or(offset)
            | Token::Implies(offset)
            | Token::LParen(offset)
            | Token::RParen(offset) => *offset,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Atom(name, _) => write!(f, "atom '{}'", name),
            Token::Not(_) => write!(f, "'¬'"),
            Token::And(_) => write!(f, "'∧'"),
            Token::Or(_) => write!(f, "'∨'"),
            Token::Implies(_) => write!(f, "'⇒'"),
            Token::LParen(_) => write!(f, "'('"),
            Token::RParen(_) => write!(f, "')'"),
        }
    }
}

/// Lexer error: a character or sequence matching no token class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexError {
    pub offset: usize,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown token at offset {}", self.offset)
    }
}

impl std::error::Error for LexError {}

#[derive(Debug, Clone, Copy)]
enum Connective {
    Not,
    And,
    Or,
    Implies,
}

/// Connective spellings, longest first so that the greedy match always reads
/// a keyword as one token. Matching is ASCII-case-insensitive.
const CONNECTIVES: &[(&str, Connective)] = &[
    ("\\rightarrow", Connective::Implies),
    ("implies", Connective::Implies),
    ("\\wedge", Connective::And),
    ("\\lnot", Connective::Not),
    ("\\vee", Connective::Or),
    ("and", Connective::And),
    ("not", Connective::Not),
    ("->", Connective::Implies),
    ("=>", Connective::Implies),
    ("or", Connective::Or),
    ("¬", Connective::Not),
    ("!", Connective::Not),
    ("~", Connective::Not),
    ("∧", Connective::And),
    ("&", Connective::And),
    ("∨", Connective::Or),
    ("⇒", Connective::Implies),
    ("→", Connective::Implies),
];

/// Lexer for formula text. A pure function of its input: tokenizing the same
/// string twice yields the same stream.
pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    /// Create a new lexer for the given input string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
        }
    }

    /// Tokenize the entire input.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace();

            if self.is_at_end() {
                break;
            }

            let token = self.next_token()?;
            log::trace!("lexed {} at offset {}", token, token.offset());
            tokens.push(token);
        }

        Ok(tokens)
    }

    /// Get next token
    fn next_token(&mut self) -> Result<Token, LexError> {
        let offset = self.position;

        // Connective keywords take priority over atoms, so "and" is a
        // conjunction rather than the atoms a, n, d.
        if let Some(connective) = self.match_connective() {
            return Ok(match connective {
                Connective::Not => Token::Not(offset),
                Connective::And => Token::And(offset),
                Connective::Or => Token::Or(offset),
                Connective::Implies => Token::Implies(offset),
            });
        }

        match self.peek() {
            Some('(') => {
                self.advance();
                Ok(Token::LParen(offset))
            }
            Some(')') => {
                self.advance();
                Ok(Token::RParen(offset))
            }
            Some(ch) if ch.is_ascii_alphabetic() => {
                self.advance();
                Ok(Token::Atom(ch.to_ascii_lowercase(), offset))
            }
            _ => Err(LexError { offset }),
        }
    }

    /// Greedy keyword recognition: the longest spelling matching at the
    /// cursor wins, and the cursor moves past it.
    fn match_connective(&mut self) -> Option<Connective> {
        for (spelling, connective) in CONNECTIVES {
            if self.matches_keyword(spelling) {
                self.position += spelling.chars().count();
                return Some(*connective);
            }
        }
        None
    }

    /// Check whether the given keyword starts at the cursor, ignoring ASCII
    /// case. Does not consume.
    fn matches_keyword(&self, keyword: &str) -> bool {
        let mut pos = self.position;
        for expected in keyword.chars() {
            match self.input.get(pos) {
                Some(ch) if ch.eq_ignore_ascii_case(&expected) => pos += 1,
                _ => return false,
            }
        }
        true
    }

    /// Skip whitespace
    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(ch) if ch.is_whitespace()) {
            self.advance();
        }
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Advance to next character
    fn advance(&mut self) {
        if self.position < self.input.len() {
            self.position += 1;
        }
    }

    /// Check if at end of input
    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }
}
