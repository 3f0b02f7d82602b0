// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! S-expression output form.
//!
//! An alternative to the typed tree: every node becomes an atom or a list
//! headed by a symbol naming the construct.
//!
//! ```text
//! let x = 1 + 2;        (begin (let (x (+ 1 2))))
//! if (a) b(); else {}   (begin (if a (call b) (begin)))
//! this.x = x;           (begin (= (prop this x) x))
//! ```
//!
//! Missing optional parts (an absent `else`, an empty `for` clause, no
//! super class) are written as the empty list `()`.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::ast::{
    AssignmentOperator, BinaryOperator, LogicalOperator, MAX_SAFE_INTEGER, UnaryOperator,
};
use crate::parser::AstBuilder;

/// Symbols produced for keywords. Any other symbol is an identifier.
const RESERVED_SYMBOLS: &[&str] = &["this", "super", "null", "true", "false"];

/// A node of the S-expression form.
#[derive(Debug, Clone, PartialEq)]
pub enum SExpr {
    /// Numeric atom
    Number(f64),
    /// String atom, unquoted
    String(String),
    /// Bare word: identifiers, keywords and list heads
    Symbol(String),
    /// Parenthesized list
    List(Vec<SExpr>),
}

impl SExpr {
    /// Creates a symbol.
    pub fn symbol(name: impl Into<String>) -> Self {
        SExpr::Symbol(name.into())
    }

    /// Creates a list.
    pub fn list(items: Vec<SExpr>) -> Self {
        SExpr::List(items)
    }

    /// The empty list `()`.
    pub fn nil() -> Self {
        SExpr::List(Vec::new())
    }

    /// A list headed by the symbol `head`.
    pub fn form(head: &str, rest: impl IntoIterator<Item = SExpr>) -> Self {
        SExpr::List(std::iter::once(SExpr::symbol(head)).chain(rest).collect())
    }

    /// Returns true for the empty list.
    pub fn is_nil(&self) -> bool {
        matches!(self, SExpr::List(items) if items.is_empty())
    }

    /// Returns the head symbol of a list.
    pub fn head(&self) -> Option<&str> {
        match self {
            SExpr::List(items) => match items.first() {
                Some(SExpr::Symbol(head)) => Some(head.as_str()),
                _ => None,
            },
            _ => None,
        }
    }

    fn is_identifier(&self) -> bool {
        matches!(self, SExpr::Symbol(name) if !RESERVED_SYMBOLS.contains(&name.as_str()))
    }

    fn is_member(&self) -> bool {
        matches!(self.head(), Some("prop" | "index"))
    }
}

impl fmt::Display for SExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SExpr::Number(value) => write!(f, "{value}"),
            SExpr::String(value) => write!(f, "{value:?}"),
            SExpr::Symbol(name) => f.write_str(name),
            SExpr::List(items) => {
                f.write_str("(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str(")")
            }
        }
    }
}

/// Lists become arrays; strings keep their quotes to stay distinct from
/// symbols.
impl Serialize for SExpr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SExpr::Number(value) if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER => {
                serializer.serialize_i64(*value as i64)
            }
            SExpr::Number(value) => serializer.serialize_f64(*value),
            SExpr::String(value) => serializer.serialize_str(&format!("\"{value}\"")),
            SExpr::Symbol(name) => serializer.serialize_str(name),
            SExpr::List(items) => items.serialize(serializer),
        }
    }
}

fn optional(expr: Option<SExpr>) -> SExpr {
    expr.unwrap_or_else(SExpr::nil)
}

/// Builds [`SExpr`] output.
#[derive(Debug, Clone, Copy, Default)]
pub struct SExpressionBuilder;

impl AstBuilder for SExpressionBuilder {
    type Program = SExpr;
    type Statement = SExpr;
    type Expression = SExpr;
    type Identifier = SExpr;
    type Block = SExpr;
    type Declaration = SExpr;
    type Target = SExpr;
    type ForInit = SExpr;

    fn program(&self, body: Vec<SExpr>) -> SExpr {
        SExpr::form("begin", body)
    }

    fn block(&self, body: Vec<SExpr>) -> SExpr {
        SExpr::form("begin", body)
    }

    fn block_statement(&self, block: SExpr) -> SExpr {
        block
    }

    fn empty_statement(&self) -> SExpr {
        SExpr::nil()
    }

    fn expression_statement(&self, expression: SExpr) -> SExpr {
        expression
    }

    fn variable_declaration(&self, id: SExpr, init: Option<SExpr>) -> SExpr {
        SExpr::list(std::iter::once(id).chain(init).collect())
    }

    fn variable_statement(&self, declarations: Vec<SExpr>) -> SExpr {
        SExpr::form("let", declarations)
    }

    fn if_statement(&self, test: SExpr, consequent: SExpr, alternate: Option<SExpr>) -> SExpr {
        SExpr::form("if", [test, consequent].into_iter().chain(alternate))
    }

    fn while_statement(&self, test: SExpr, body: SExpr) -> SExpr {
        SExpr::form("while", [test, body])
    }

    fn do_while_statement(&self, body: SExpr, test: SExpr) -> SExpr {
        SExpr::form("do-while", [body, test])
    }

    fn for_init_variables(&self, declarations: Vec<SExpr>) -> SExpr {
        SExpr::form("let", declarations)
    }

    fn for_init_expression(&self, expression: SExpr) -> SExpr {
        expression
    }

    fn for_statement(
        &self,
        init: Option<SExpr>,
        test: Option<SExpr>,
        update: Option<SExpr>,
        body: SExpr,
    ) -> SExpr {
        SExpr::form(
            "for",
            [optional(init), optional(test), optional(update), body],
        )
    }

    fn function_declaration(&self, name: SExpr, params: Vec<SExpr>, body: SExpr) -> SExpr {
        SExpr::form("def", [name, SExpr::list(params), body])
    }

    fn return_statement(&self, argument: Option<SExpr>) -> SExpr {
        SExpr::form("return", argument)
    }

    fn class_declaration(&self, id: SExpr, super_class: Option<SExpr>, body: SExpr) -> SExpr {
        SExpr::form("class", [id, optional(super_class), body])
    }

    fn identifier(&self, name: String) -> SExpr {
        SExpr::Symbol(name)
    }

    fn identifier_expression(&self, id: SExpr) -> SExpr {
        id
    }

    fn numeric_literal(&self, value: f64) -> SExpr {
        SExpr::Number(value)
    }

    fn string_literal(&self, value: String) -> SExpr {
        SExpr::String(value)
    }

    fn boolean_literal(&self, value: bool) -> SExpr {
        SExpr::symbol(if value { "true" } else { "false" })
    }

    fn null_literal(&self) -> SExpr {
        SExpr::symbol("null")
    }

    fn this_expression(&self) -> SExpr {
        SExpr::symbol("this")
    }

    fn super_expression(&self) -> SExpr {
        SExpr::symbol("super")
    }

    fn new_expression(&self, callee: SExpr, arguments: Vec<SExpr>) -> SExpr {
        SExpr::form("new", std::iter::once(callee).chain(arguments))
    }

    fn call_expression(&self, callee: SExpr, arguments: Vec<SExpr>) -> SExpr {
        SExpr::form("call", std::iter::once(callee).chain(arguments))
    }

    fn member_expression(&self, object: SExpr, property: SExpr) -> SExpr {
        SExpr::form("prop", [object, property])
    }

    fn computed_member_expression(&self, object: SExpr, property: SExpr) -> SExpr {
        SExpr::form("index", [object, property])
    }

    fn assignment_target(&self, expression: SExpr) -> Option<SExpr> {
        (expression.is_identifier() || expression.is_member()).then_some(expression)
    }

    fn assignment_expression(
        &self,
        operator: AssignmentOperator,
        left: SExpr,
        right: SExpr,
    ) -> SExpr {
        SExpr::form(operator.as_str(), [left, right])
    }

    fn binary_expression(&self, operator: BinaryOperator, left: SExpr, right: SExpr) -> SExpr {
        SExpr::form(operator.as_str(), [left, right])
    }

    fn logical_expression(&self, operator: LogicalOperator, left: SExpr, right: SExpr) -> SExpr {
        SExpr::form(operator.as_str(), [left, right])
    }

    fn unary_expression(&self, operator: UnaryOperator, argument: SExpr) -> SExpr {
        SExpr::form(operator.as_str(), [argument])
    }
}
