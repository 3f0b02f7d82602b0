// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The main parser implementation.

use super::builder::{AstBuilder, TreeBuilder};
use crate::error::{Result, SyntaxError};
use crate::lexer::{Token, TokenKind, Tokenizer};

/// Deepest nesting of statements and expressions a parse accepts.
pub const MAX_NESTING_DEPTH: usize = 64;

/// A recursive descent parser for Letter.
///
/// The parser pulls one token at a time from its [`Tokenizer`] and decides
/// every production from the kind of the single lookahead token. Nodes are
/// created through the builder `B`.
pub struct Parser<'a, B: AstBuilder = TreeBuilder> {
    pub(super) builder: B,
    tokenizer: Tokenizer<'a>,
    lookahead: Option<Token>,
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Creates a parser that builds the typed tree.
    pub fn new() -> Self {
        Self::with_builder(TreeBuilder)
    }
}

impl Default for Parser<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, B: AstBuilder> Parser<'a, B> {
    /// Creates a parser that builds nodes with `builder`.
    pub fn with_builder(builder: B) -> Self {
        Self {
            builder,
            tokenizer: Tokenizer::default(),
            lookahead: None,
            depth: 0,
        }
    }

    /// Returns the builder used by this parser.
    pub fn builder(&self) -> &B {
        &self.builder
    }

    /// Parses `source` into a program.
    ///
    /// The tokenizer and lookahead are reset first, so one parser can be
    /// reused for any number of sequential inputs.
    #[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
    pub fn parse(&mut self, source: &'a str) -> Result<B::Program> {
        self.tokenizer.init(source);
        self.lookahead = None;
        self.depth = 0;

        let result = self.advance().and_then(|()| self.program());
        if let Err(err) = &result {
            tracing::debug!(error = %err, offset = self.tokenizer.cursor(), "parse failed");
        }
        result
    }

    // Helper methods

    /// Replaces the lookahead with the next token from the tokenizer.
    fn advance(&mut self) -> Result<()> {
        self.lookahead = self.tokenizer.next_token()?;
        Ok(())
    }

    /// Consumes the lookahead if it has kind `kind`.
    pub(super) fn eat(&mut self, kind: TokenKind) -> Result<Token> {
        let token = match self.lookahead.take() {
            None => return Err(SyntaxError::UnexpectedEndOfInput { expected: kind }.into()),
            Some(token) if token.kind != kind => {
                let err = SyntaxError::UnexpectedToken {
                    found: token.text.clone(),
                    expected: kind,
                    offset: token.span.start,
                };
                self.lookahead = Some(token);
                return Err(err.into());
            }
            Some(token) => token,
        };

        self.advance()?;
        Ok(token)
    }

    /// Runs `production` one nesting level deeper.
    pub(super) fn nested<T>(&mut self, production: fn(&mut Self) -> Result<T>) -> Result<T> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(SyntaxError::NestingTooDeep {
                limit: MAX_NESTING_DEPTH,
            }
            .into());
        }

        self.depth += 1;
        let result = production(self);
        self.depth -= 1;
        result
    }

    pub(super) fn check(&self, kind: TokenKind) -> bool {
        self.lookahead_kind() == Some(kind)
    }

    pub(super) fn lookahead_kind(&self) -> Option<TokenKind> {
        self.lookahead.as_ref().map(|token| token.kind)
    }

    pub(super) fn lookahead_text(&self) -> Option<&str> {
        self.lookahead.as_ref().map(|token| token.text.as_str())
    }

    pub(super) fn is_at_end(&self) -> bool {
        self.lookahead.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::*;
    use crate::error::Error;

    // Helper to parse and get first statement
    fn parse_stmt(src: &str) -> Statement {
        let mut parser = Parser::new();
        let program = parser.parse(src).unwrap();
        program.body.into_iter().next().unwrap()
    }

    // Helper to parse and check it fails
    fn parse_err(src: &str) -> Error {
        let mut parser = Parser::new();
        parser.parse(src).unwrap_err()
    }

    #[test]
    fn test_parse_empty_program() {
        let mut parser = Parser::new();
        assert_eq!(parser.parse("").unwrap(), Program::default());
        assert_eq!(parser.parse("  // nothing\n").unwrap(), Program::default());
    }

    #[test]
    fn test_parse_numeric_literal() {
        assert_eq!(
            parse_stmt("42;"),
            Statement::expression(Expression::number(42.0))
        );
    }

    #[test]
    fn test_parser_reuse() {
        let mut parser = Parser::new();
        let first = parser.parse("x;").unwrap();
        assert!(parser.parse("let = 1;").is_err());
        let second = parser.parse("x;").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_eat_reports_expected_kind() {
        assert_eq!(
            parse_err("x"),
            Error::Syntax(SyntaxError::UnexpectedEndOfInput {
                expected: TokenKind::Semicolon
            })
        );
        assert_eq!(
            parse_err("x y"),
            Error::Syntax(SyntaxError::UnexpectedToken {
                found: "y".into(),
                expected: TokenKind::Semicolon,
                offset: 2,
            })
        );
    }

    #[test]
    fn test_lexical_errors_propagate() {
        let err = parse_err("let x = 1 # 2;");
        assert!(err.is_lexical());
    }

    #[test]
    fn test_deep_parentheses_are_an_error() {
        let depth = 10_000;
        let source = format!("{}1{};", "(".repeat(depth), ")".repeat(depth));
        assert_eq!(
            parse_err(&source),
            Error::Syntax(SyntaxError::NestingTooDeep {
                limit: MAX_NESTING_DEPTH
            })
        );
    }

    #[test]
    fn test_deep_unary_and_blocks_are_errors() {
        let unary = format!("{}1;", "- ".repeat(10_000));
        assert!(matches!(
            parse_err(&unary),
            Error::Syntax(SyntaxError::NestingTooDeep { .. })
        ));

        let blocks = format!("{}{}", "{".repeat(10_000), "}".repeat(10_000));
        assert!(matches!(
            parse_err(&blocks),
            Error::Syntax(SyntaxError::NestingTooDeep { .. })
        ));

        let news = format!("{}A();", "new ".repeat(10_000));
        assert!(matches!(
            parse_err(&news),
            Error::Syntax(SyntaxError::NestingTooDeep { .. })
        ));
    }

    #[test]
    fn test_nesting_within_limit_parses() {
        let depth = MAX_NESTING_DEPTH / 2;
        let source = format!("{}1{};", "(".repeat(depth), ")".repeat(depth));
        assert_eq!(parse_stmt(&source), Statement::expression(Expression::number(1.0)));

        // the depth is reset between inputs
        let unclosed = "(".repeat(10_000);
        let mut parser = Parser::new();
        assert!(parser.parse(&unclosed).is_err());
        assert!(parser.parse(&source).is_ok());
    }

    #[test]
    fn test_lexical_error_in_first_token() {
        let err = parse_err("#");
        assert_eq!(
            err,
            Error::Lexical {
                character: '#',
                offset: 0
            }
        );
    }
}
