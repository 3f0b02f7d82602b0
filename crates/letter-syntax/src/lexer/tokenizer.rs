// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The tokenizer that lazily pulls tokens from source text.

use std::sync::LazyLock;

use regex::Regex;

use super::rules::{RULES, Rule};
use super::{Span, Token, TokenKind};
use crate::error::{Error, Result};

/// Compiled form of the rule table, built on first use.
static COMPILED: LazyLock<Vec<(Regex, Option<TokenKind>)>> = LazyLock::new(|| {
    RULES
        .iter()
        .map(|Rule { pattern, kind }| {
            let regex = Regex::new(pattern).expect("lexical rule patterns are valid regexes");
            (regex, *kind)
        })
        .collect()
});

/// A tokenizer over an immutable source buffer.
///
/// Tokens are produced on demand; the only state is the cursor, so an
/// instance can be re-pointed at new input with [`Tokenizer::init`].
#[derive(Debug, Clone, Default)]
pub struct Tokenizer<'a> {
    source: &'a str,
    cursor: usize,
}

impl<'a> Tokenizer<'a> {
    /// Creates a tokenizer positioned at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self { source, cursor: 0 }
    }

    /// Resets the tokenizer onto a new input.
    pub fn init(&mut self, source: &'a str) {
        self.source = source;
        self.cursor = 0;
    }

    /// Whether the cursor has reached the end of input.
    pub fn is_eof(&self) -> bool {
        self.cursor == self.source.len()
    }

    /// Whether unread input remains. Trailing whitespace counts as input.
    pub fn has_more_tokens(&self) -> bool {
        self.cursor < self.source.len()
    }

    /// Current byte offset into the source.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the next token, or `None` once the input is exhausted.
    ///
    /// Whitespace and comments are skipped. The first rule in table order
    /// that matches a prefix of the remaining input wins.
    pub fn next_token(&mut self) -> Result<Option<Token>> {
        while self.has_more_tokens() {
            let rest = &self.source[self.cursor..];
            let start = self.cursor;

            let Some((kind, len)) = match_rule(rest) else {
                return Err(Error::Lexical {
                    character: rest.chars().next().unwrap_or_default(),
                    offset: start,
                });
            };
            self.cursor += len;

            // skip rule
            let Some(kind) = kind else {
                continue;
            };

            let token = Token::new(kind, &rest[..len], Span::new(start, self.cursor));
            tracing::trace!(kind = %token.kind, text = %token.text, offset = start, "token");
            return Ok(Some(token));
        }

        Ok(None)
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Result<Token>;

    /// Yields tokens until the end of input. After an error the cursor is
    /// moved to the end, so the iterator is fused.
    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok(token) => token.map(Ok),
            Err(err) => {
                self.cursor = self.source.len();
                Some(Err(err))
            }
        }
    }
}

/// Tokenizes a whole input eagerly.
pub fn tokenize(source: &str) -> Result<Vec<Token>> {
    Tokenizer::new(source).collect()
}

/// Finds the first rule matching a prefix of `rest`, returning its kind and
/// the match length.
fn match_rule(rest: &str) -> Option<(Option<TokenKind>, usize)> {
    COMPILED
        .iter()
        .find_map(|(regex, kind)| regex.find(rest).map(|m| (*kind, m.end())))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source)
            .unwrap()
            .into_iter()
            .map(|token| token.kind)
            .collect()
    }

    #[test]
    fn test_simple_tokens() {
        assert_eq!(
            kinds("; { } ( ) , . [ ]"),
            vec![
                TokenKind::Semicolon,
                TokenKind::LeftBrace,
                TokenKind::RightBrace,
                TokenKind::LeftParen,
                TokenKind::RightParen,
                TokenKind::Comma,
                TokenKind::Dot,
                TokenKind::LeftBracket,
                TokenKind::RightBracket,
            ]
        );
    }

    #[test]
    fn test_keywords_before_identifiers() {
        assert_eq!(
            kinds("let letter class classy this thisOne"),
            vec![
                TokenKind::Let,
                TokenKind::Identifier,
                TokenKind::Class,
                TokenKind::Identifier,
                TokenKind::This,
                TokenKind::Identifier,
            ]
        );
    }

    #[test]
    fn test_all_keywords() {
        let source = "let if else true false null while do for def return class extends super new this";
        let tokens = tokenize(source).unwrap();
        assert_eq!(tokens.len(), 16);
        for token in tokens {
            assert_eq!(token.kind.as_str(), token.text);
        }
    }

    #[test]
    fn test_numbers_and_identifiers() {
        let tokens = tokenize("42 foo_1 _bar 7x").unwrap();
        let pairs: Vec<_> = tokens.iter().map(|t| (t.kind, t.text.as_str())).collect();
        assert_eq!(
            pairs,
            vec![
                (TokenKind::Number, "42"),
                (TokenKind::Identifier, "foo_1"),
                (TokenKind::Identifier, "_bar"),
                (TokenKind::Number, "7"),
                (TokenKind::Identifier, "x"),
            ]
        );
    }

    #[test]
    fn test_equality_before_assignment() {
        assert_eq!(
            kinds("== != = += -= *= /="),
            vec![
                TokenKind::EqualityOperator,
                TokenKind::EqualityOperator,
                TokenKind::SimpleAssign,
                TokenKind::ComplexAssign,
                TokenKind::ComplexAssign,
                TokenKind::ComplexAssign,
                TokenKind::ComplexAssign,
            ]
        );
    }

    #[test]
    fn test_operators() {
        assert_eq!(
            kinds("+ - * / > >= < <= && || !"),
            vec![
                TokenKind::AdditiveOperator,
                TokenKind::AdditiveOperator,
                TokenKind::MultiplicativeOperator,
                TokenKind::MultiplicativeOperator,
                TokenKind::RelationalOperator,
                TokenKind::RelationalOperator,
                TokenKind::RelationalOperator,
                TokenKind::RelationalOperator,
                TokenKind::LogicalAnd,
                TokenKind::LogicalOr,
                TokenKind::LogicalNot,
            ]
        );
    }

    #[test]
    fn test_strings_keep_quotes() {
        let tokens = tokenize(r#""hello" 'world' "it's""#).unwrap();
        let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec![r#""hello""#, "'world'", r#""it's""#]);
        assert!(tokens.iter().all(|t| t.kind == TokenKind::String));
    }

    #[test]
    fn test_comments_are_skipped() {
        assert_eq!(
            kinds("1 // line comment\n2 /* block\ncomment */ 3"),
            vec![TokenKind::Number, TokenKind::Number, TokenKind::Number]
        );
    }

    #[test]
    fn test_block_comment_is_not_greedy() {
        assert_eq!(
            kinds("/* a */ x /* b */"),
            vec![TokenKind::Identifier]
        );
    }

    #[test]
    fn test_division_vs_comment() {
        assert_eq!(
            kinds("6 / 2"),
            vec![
                TokenKind::Number,
                TokenKind::MultiplicativeOperator,
                TokenKind::Number
            ]
        );
    }

    #[test]
    fn test_spans() {
        let tokens = tokenize("  let x").unwrap();
        assert_eq!(tokens[0].span, Span::new(2, 5));
        assert_eq!(tokens[1].span, Span::new(6, 7));
    }

    #[test]
    fn test_eof_sentinel() {
        let mut tokenizer = Tokenizer::new("x   ");
        assert!(tokenizer.next_token().unwrap().is_some());
        assert!(tokenizer.has_more_tokens());
        assert_eq!(tokenizer.next_token().unwrap(), None);
        assert!(tokenizer.is_eof());
        assert_eq!(tokenizer.next_token().unwrap(), None);
    }

    #[test]
    fn test_empty_input() {
        let mut tokenizer = Tokenizer::new("");
        assert!(tokenizer.is_eof());
        assert!(!tokenizer.has_more_tokens());
        assert_eq!(tokenizer.next_token().unwrap(), None);
    }

    #[test]
    fn test_reinit() {
        let mut tokenizer = Tokenizer::new("a b c");
        tokenizer.next_token().unwrap();
        tokenizer.init("42");
        assert_eq!(tokenizer.cursor(), 0);
        let token = tokenizer.next_token().unwrap().unwrap();
        assert_eq!(token.kind, TokenKind::Number);
    }

    #[test]
    fn test_lexical_error() {
        let err = tokenize("let x = 1 @ 2;").unwrap_err();
        assert_eq!(
            err,
            Error::Lexical {
                character: '@',
                offset: 10
            }
        );
    }

    #[test]
    fn test_iterator_is_fused_after_error() {
        let mut tokenizer = Tokenizer::new("a # b");
        assert!(matches!(tokenizer.next(), Some(Ok(_))));
        assert!(matches!(tokenizer.next(), Some(Err(_))));
        assert!(tokenizer.next().is_none());
    }

    #[test]
    fn test_span_covers_lexeme() {
        let source = r#"let s = "two words"; // tail"#;
        for token in tokenize(source).unwrap() {
            assert!(!token.span.is_empty());
            assert_eq!(token.span.len(), token.text.len());
            assert_eq!(&source[token.span.start..token.span.end], token.text);
        }
        assert!(Span::default().is_empty());
        assert_eq!(Span::new(3, 7).len(), 4);
    }
}
