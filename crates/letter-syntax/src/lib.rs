// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! # letter-syntax
//!
//! Front end for Letter, a small JavaScript-like language with `let`
//! bindings, `def` functions and single-inheritance classes.
//!
//! ## Overview
//!
//! This crate turns source text into a tree:
//! - A rule-table tokenizer producing one token at a time
//! - A recursive descent parser with a single token of lookahead
//! - Two output forms: a typed ESTree-style tree and S-expressions
//!
//! ## Quick Start
//!
//! ```rust
//! use letter_syntax::ast::{Expression, Statement};
//!
//! let program = letter_syntax::parse("2 + 2 * 3;").unwrap();
//! assert!(matches!(
//!     &program.body[0],
//!     Statement::Expression(stmt) if matches!(stmt.expression, Expression::Binary(_))
//! ));
//!
//! let json = serde_json::to_value(&program).unwrap();
//! assert_eq!(json["type"], "Program");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ast;
pub mod config;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod sexpr;

use serde::Serialize;

pub use ast::Program;
pub use config::{OutputForm, ParserConfig};
pub use error::{Error, Result, SyntaxError};
pub use parser::{AstBuilder, Parser, TreeBuilder};
pub use sexpr::{SExpr, SExpressionBuilder};

/// Parses `source` into the typed tree.
pub fn parse(source: &str) -> Result<Program> {
    Parser::new().parse(source)
}

/// Parses `source` into the output form selected by `config`.
pub fn parse_with_config(source: &str, config: &ParserConfig) -> Result<Ast> {
    match config.output {
        OutputForm::Tree => parse(source).map(Ast::Tree),
        OutputForm::SExpression => Parser::with_builder(SExpressionBuilder)
            .parse(source)
            .map(Ast::SExpression),
    }
}

/// A parsed program in either output form.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Ast {
    /// Typed tree
    Tree(Program),
    /// Nested lists
    SExpression(SExpr),
}

impl Ast {
    /// Returns the output form of this program.
    pub fn form(&self) -> OutputForm {
        match self {
            Ast::Tree(_) => OutputForm::Tree,
            Ast::SExpression(_) => OutputForm::SExpression,
        }
    }

    /// Serializes the program as compact JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Serializes the program as indented JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_default_config() {
        let ast = parse_with_config("x;", &ParserConfig::default()).unwrap();
        assert_eq!(ast.form(), OutputForm::Tree);
        assert_eq!(
            ast.to_json().unwrap(),
            r#"{"type":"Program","body":[{"type":"ExpressionStatement","expression":{"type":"Identifier","name":"x"}}]}"#
        );
    }

    #[test]
    fn test_parse_with_sexpression_config() {
        let config = ParserConfig {
            output: OutputForm::SExpression,
        };
        let ast = parse_with_config("let x = 1;", &config).unwrap();
        assert_eq!(ast.form(), OutputForm::SExpression);
        assert_eq!(ast.to_json().unwrap(), r#"["begin",["let",["x",1]]]"#);
    }

    #[test]
    fn test_errors_are_returned_in_either_form() {
        let config = ParserConfig {
            output: OutputForm::SExpression,
        };
        assert!(parse_with_config("let = 1;", &config).unwrap_err().is_syntax());
        assert!(parse("@").unwrap_err().is_lexical());
    }

    #[test]
    fn test_pretty_json_is_indented() {
        let ast = Ast::Tree(parse("").unwrap());
        assert_eq!(
            ast.to_json_pretty().unwrap(),
            "{\n  \"type\": \"Program\",\n  \"body\": []\n}"
        );
    }
}
