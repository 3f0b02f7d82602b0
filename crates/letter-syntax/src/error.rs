// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the Letter front end.

use thiserror::Error;

use crate::lexer::TokenKind;

/// Result type for tokenizing and parsing.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while turning source text into a tree.
///
/// Both lexical and syntax errors abort the whole parse; no partial tree
/// is ever returned alongside them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No lexical rule matches at the cursor.
    #[error("LexicalError: Unexpected token: \"{character}\" at offset {offset}")]
    Lexical {
        /// The first character that no rule accepts
        character: char,
        /// Byte offset of that character
        offset: usize,
    },

    /// The token stream does not fit the grammar.
    #[error("SyntaxError: {0}")]
    Syntax(#[from] SyntaxError),

    /// A configuration value could not be understood.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// Returns true if this is a lexical error.
    pub fn is_lexical(&self) -> bool {
        matches!(self, Error::Lexical { .. })
    }

    /// Returns true if this is a syntax error.
    pub fn is_syntax(&self) -> bool {
        matches!(self, Error::Syntax(_))
    }
}

/// The ways a token stream can violate the grammar.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    /// Input ended where a token was still required.
    #[error("Unexpected end of input, expected: \"{expected}\"")]
    UnexpectedEndOfInput {
        /// The kind the grammar required
        expected: TokenKind,
    },

    /// The lookahead has a different kind than the grammar requires.
    #[error("Unexpected token: \"{found}\", expected: \"{expected}\" at offset {offset}")]
    UnexpectedToken {
        /// Text of the offending token
        found: String,
        /// The kind the grammar required
        expected: TokenKind,
        /// Byte offset of the offending token
        offset: usize,
    },

    /// The left side of `=` or a compound assignment is not assignable.
    #[error("Invalid left-hand side in assignment expression")]
    InvalidAssignmentTarget,

    /// No primary expression starts with the lookahead.
    #[error("Unexpected primary expression: {}", found.as_deref().unwrap_or("end of input"))]
    UnexpectedPrimaryExpression {
        /// Text of the offending token, `None` at end of input
        found: Option<String>,
    },

    /// Statements or expressions are nested deeper than the parser allows.
    #[error("Nesting deeper than {limit} levels")]
    NestingTooDeep {
        /// The maximum nesting depth
        limit: usize,
    },

    /// An operator token whose text has no operator meaning.
    #[error("Unknown operator: \"{lexeme}\"")]
    UnknownOperator {
        /// The operator text
        lexeme: String,
    },
}
