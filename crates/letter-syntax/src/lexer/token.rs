// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Token definitions for the Letter lexer.

use std::fmt;

/// A span in the source code, representing a range of bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl Span {
    /// Creates a new span.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length of this span in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if this span is empty.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The kind of token
    pub kind: TokenKind,
    /// The exact matched lexeme, quotes included for strings
    pub text: String,
    /// The span in the source code
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }
}

/// The closed set of token kinds in Letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Punctuation
    /// `;`
    Semicolon,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,

    // Keywords
    /// `let`
    Let,
    /// `if`
    If,
    /// `else`
    Else,
    /// `true`
    True,
    /// `false`
    False,
    /// `null`
    Null,
    /// `while`
    While,
    /// `do`
    Do,
    /// `for`
    For,
    /// `def`
    Def,
    /// `return`
    Return,
    /// `class`
    Class,
    /// `extends`
    Extends,
    /// `super`
    Super,
    /// `new`
    New,
    /// `this`
    This,

    // Literals and names
    /// A run of decimal digits
    Number,
    /// A run of word characters that is not a keyword
    Identifier,
    /// A double- or single-quoted string
    String,

    // Operators
    /// `==` `!=`
    EqualityOperator,
    /// `=`
    SimpleAssign,
    /// `*=` `/=` `+=` `-=`
    ComplexAssign,
    /// `+` `-`
    AdditiveOperator,
    /// `*` `/`
    MultiplicativeOperator,
    /// `>` `>=` `<` `<=`
    RelationalOperator,
    /// `&&`
    LogicalAnd,
    /// `||`
    LogicalOr,
    /// `!`
    LogicalNot,
}

impl TokenKind {
    /// The canonical name of this kind, as reported in diagnostics.
    ///
    /// Symbols and keywords are named by their spelling; the remaining
    /// classes use upper-case names (`NUMBER`, `IDENTIFIER`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Semicolon => ";",
            TokenKind::LeftBrace => "{",
            TokenKind::RightBrace => "}",
            TokenKind::LeftParen => "(",
            TokenKind::RightParen => ")",
            TokenKind::Comma => ",",
            TokenKind::Dot => ".",
            TokenKind::LeftBracket => "[",
            TokenKind::RightBracket => "]",
            TokenKind::Let => "let",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::Null => "null",
            TokenKind::While => "while",
            TokenKind::Do => "do",
            TokenKind::For => "for",
            TokenKind::Def => "def",
            TokenKind::Return => "return",
            TokenKind::Class => "class",
            TokenKind::Extends => "extends",
            TokenKind::Super => "super",
            TokenKind::New => "new",
            TokenKind::This => "this",
            TokenKind::Number => "NUMBER",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::String => "STRING",
            TokenKind::EqualityOperator => "EQUALITY_OPERATOR",
            TokenKind::SimpleAssign => "SIMPLE_ASSIGN",
            TokenKind::ComplexAssign => "COMPLEX_ASSIGN",
            TokenKind::AdditiveOperator => "ADDITIVE_OPERATOR",
            TokenKind::MultiplicativeOperator => "MULTIPLICATIVE_OPERATOR",
            TokenKind::RelationalOperator => "RELATIONAL_OPERATOR",
            TokenKind::LogicalAnd => "LOGICAL_AND",
            TokenKind::LogicalOr => "LOGICAL_OR",
            TokenKind::LogicalNot => "LOGICAL_NOT",
        }
    }

    /// Returns true for `true`, `false`, `null`, numbers and strings.
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            TokenKind::Number
                | TokenKind::String
                | TokenKind::True
                | TokenKind::False
                | TokenKind::Null
        )
    }

    /// Returns true for `=` and the compound assignment operators.
    pub fn is_assignment_operator(&self) -> bool {
        matches!(self, TokenKind::SimpleAssign | TokenKind::ComplexAssign)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
