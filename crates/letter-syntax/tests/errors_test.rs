// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Lexical and syntax errors.

use letter_macros::*;
use letter_syntax::lexer::TokenKind;
use letter_syntax::{Error, SyntaxError};

#[test]
fn test_unknown_character() {
    let err = assert_parse_error!("let x = 1 % 2;");
    assert_eq!(
        err,
        Error::Lexical {
            character: '%',
            offset: 10
        }
    );
    assert_eq!(
        err.to_string(),
        "LexicalError: Unexpected token: \"%\" at offset 10"
    );
}

#[test]
fn test_unterminated_string_is_lexical() {
    assert_parse_error!(r#"let s = "open;"#, Error::Lexical { character: '"', .. });
}

#[test]
fn test_missing_initializer() {
    assert_parse_error!(
        "let x = ;",
        Error::Syntax(SyntaxError::UnexpectedPrimaryExpression { found: Some(_) })
    );
}

#[test]
fn test_invalid_assignment_targets() {
    for source in ["1 = 2;", "this = 1;", "f() = 1;", "(a + b) = c;"] {
        assert_parse_error!(source, Error::Syntax(SyntaxError::InvalidAssignmentTarget));
    }
}

#[test]
fn test_missing_semicolon() {
    assert_parse_error!(
        "x",
        Error::Syntax(SyntaxError::UnexpectedEndOfInput {
            expected: TokenKind::Semicolon
        })
    );
    assert_parse_error!(
        "let x = 1 let y;",
        Error::Syntax(SyntaxError::UnexpectedToken {
            expected: TokenKind::Semicolon,
            offset: 10,
            ..
        })
    );
}

#[test]
fn test_unclosed_constructs() {
    assert_parse_error!("{ 1;", Error::Syntax(SyntaxError::UnexpectedEndOfInput { .. }));
    assert_parse_error!("foo(x;", Error::Syntax(SyntaxError::UnexpectedToken { .. }));
    assert_parse_error!("if (x { }", Error::Syntax(SyntaxError::UnexpectedToken { .. }));
    assert_parse_error!("def f(x,) {}", Error::Syntax(SyntaxError::UnexpectedToken { .. }));
}

#[test]
fn test_bare_super_is_rejected() {
    assert_parse_error!("super.x;", Error::Syntax(SyntaxError::UnexpectedToken { .. }));
}

#[test]
fn test_class_body_requires_block() {
    assert_parse_error!(
        "class A extends { }",
        Error::Syntax(SyntaxError::UnexpectedToken {
            expected: TokenKind::Identifier,
            ..
        })
    );
}

#[test]
fn test_unexpected_token_message() {
    let err = assert_parse_error!("let 1 = x;");
    assert_eq!(
        err.to_string(),
        "SyntaxError: Unexpected token: \"1\", expected: \"IDENTIFIER\" at offset 4"
    );
}

#[test]
fn test_deeply_nested_input_is_rejected() {
    let source = format!("let x = {}1;", "(".repeat(5_000));
    let err = assert_parse_error!(&source);
    assert_eq!(
        err,
        Error::Syntax(SyntaxError::NestingTooDeep {
            limit: letter_syntax::parser::MAX_NESTING_DEPTH
        })
    );
    assert_eq!(
        err.to_string(),
        "SyntaxError: Nesting deeper than 64 levels"
    );
}
