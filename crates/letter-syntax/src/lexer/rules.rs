// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The ordered lexical rule table.
//!
//! Each rule is a pattern anchored at the start of the remaining input.
//! The tokenizer tries rules strictly in table order and takes the first
//! match, so order is part of the grammar:
//!
//! | Must precede | Because |
//! |--------------|---------|
//! | comments | `/` operators |
//! | keywords | the identifier rule |
//! | `==` `!=` | `=` and `!` |
//! | `=` | nothing that could start with `=` |
//! | `+=` `-=` `*=` `/=` | `+` `-` `*` `/` |
//!
//! `\w` and `\d` are spelled as ASCII classes; whitespace is Unicode.

use super::TokenKind;

/// A single entry of the table. `kind == None` marks input to skip.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    /// Regex source, anchored with `^`
    pub pattern: &'static str,
    /// Token kind produced, or `None` for whitespace and comments
    pub kind: Option<TokenKind>,
}

const fn skip(pattern: &'static str) -> Rule {
    Rule {
        pattern,
        kind: None,
    }
}

const fn rule(pattern: &'static str, kind: TokenKind) -> Rule {
    Rule {
        pattern,
        kind: Some(kind),
    }
}

/// The rule table, in priority order.
pub static RULES: &[Rule] = &[
    // Whitespace and comments
    skip(r"^\s+"),
    skip(r"^//.*"),
    skip(r"^/\*[\s\S]*?\*/"),
    // Symbols, delimiters
    rule(r"^;", TokenKind::Semicolon),
    rule(r"^\{", TokenKind::LeftBrace),
    rule(r"^\}", TokenKind::RightBrace),
    rule(r"^\(", TokenKind::LeftParen),
    rule(r"^\)", TokenKind::RightParen),
    rule(r"^,", TokenKind::Comma),
    rule(r"^\.", TokenKind::Dot),
    rule(r"^\[", TokenKind::LeftBracket),
    rule(r"^\]", TokenKind::RightBracket),
    // Keywords
    rule(r"^let\b", TokenKind::Let),
    rule(r"^if\b", TokenKind::If),
    rule(r"^else\b", TokenKind::Else),
    rule(r"^true\b", TokenKind::True),
    rule(r"^false\b", TokenKind::False),
    rule(r"^null\b", TokenKind::Null),
    rule(r"^while\b", TokenKind::While),
    rule(r"^do\b", TokenKind::Do),
    rule(r"^for\b", TokenKind::For),
    rule(r"^def\b", TokenKind::Def),
    rule(r"^return\b", TokenKind::Return),
    rule(r"^class\b", TokenKind::Class),
    rule(r"^extends\b", TokenKind::Extends),
    rule(r"^super\b", TokenKind::Super),
    rule(r"^new\b", TokenKind::New),
    rule(r"^this\b", TokenKind::This),
    // Numbers and identifiers
    rule(r"^[0-9]+", TokenKind::Number),
    rule(r"^[A-Za-z0-9_]+", TokenKind::Identifier),
    // Equality before assignment
    rule(r"^[=!]=", TokenKind::EqualityOperator),
    // Assignment: =, *=, /=, +=, -=
    rule(r"^=", TokenKind::SimpleAssign),
    rule(r"^[*/+\-]=", TokenKind::ComplexAssign),
    // Math: +, -, *, /
    rule(r"^[+\-]", TokenKind::AdditiveOperator),
    rule(r"^[*/]", TokenKind::MultiplicativeOperator),
    // Relational: >, >=, <, <=
    rule(r"^[><]=?", TokenKind::RelationalOperator),
    // Logical: &&, ||, !
    rule(r"^&&", TokenKind::LogicalAnd),
    rule(r"^\|\|", TokenKind::LogicalOr),
    rule(r"^!", TokenKind::LogicalNot),
    // Strings, quotes included
    rule(r#"^"[^"]*""#, TokenKind::String),
    rule(r"^'[^']*'", TokenKind::String),
];
