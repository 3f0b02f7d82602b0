// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Reading the canonical JSON shape back into the tree.
//!
//! The sum types dispatch on the `"type"` tag of the node object and hand
//! the whole object to the payload struct, mirroring how they serialize.

use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::{
    AssignmentTarget, Expression, ForInit, Identifier, Literal, MemberExpression, MemberProperty,
    Statement,
};

const STATEMENT_TAGS: &[&str] = &[
    "BlockStatement",
    "EmptyStatement",
    "ExpressionStatement",
    "VariableStatement",
    "IfStatement",
    "WhileStatement",
    "DoWhileStatement",
    "ForStatement",
    "FunctionDeclaration",
    "ReturnStatement",
    "ClassDeclaration",
];

const EXPRESSION_TAGS: &[&str] = &[
    "Identifier",
    "NumericLiteral",
    "StringLiteral",
    "BooleanLiteral",
    "NullLiteral",
    "ThisExpression",
    "Super",
    "NewExpression",
    "CallExpression",
    "MemberExpression",
    "AssignmentExpression",
    "BinaryExpression",
    "LogicalExpression",
    "UnaryExpression",
];

const LITERAL_TAGS: &[&str] = &["NumericLiteral", "StringLiteral", "BooleanLiteral", "NullLiteral"];

type JsonResult<T> = serde_json::Result<T>;

fn node_tag(value: &Value) -> JsonResult<String> {
    value
        .get("type")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| de::Error::missing_field("type"))
}

fn node<T: DeserializeOwned>(value: Value) -> JsonResult<T> {
    serde_json::from_value(value)
}

fn field<T: DeserializeOwned>(value: &mut Value, name: &'static str) -> JsonResult<T> {
    match value.get_mut(name).map(Value::take) {
        Some(inner) => node(inner),
        None => Err(de::Error::missing_field(name)),
    }
}

fn statement(value: Value) -> JsonResult<Statement> {
    let statement = match node_tag(&value)?.as_str() {
        "BlockStatement" => Statement::Block(node(value)?),
        "EmptyStatement" => Statement::Empty,
        "ExpressionStatement" => Statement::Expression(node(value)?),
        "VariableStatement" => Statement::Variable(node(value)?),
        "IfStatement" => Statement::If(node(value)?),
        "WhileStatement" => Statement::While(node(value)?),
        "DoWhileStatement" => Statement::DoWhile(node(value)?),
        "ForStatement" => Statement::For(node(value)?),
        "FunctionDeclaration" => Statement::FunctionDeclaration(node(value)?),
        "ReturnStatement" => Statement::Return(node(value)?),
        "ClassDeclaration" => Statement::ClassDeclaration(node(value)?),
        other => return Err(de::Error::unknown_variant(other, STATEMENT_TAGS)),
    };
    Ok(statement)
}

fn expression(value: Value) -> JsonResult<Expression> {
    let expression = match node_tag(&value)?.as_str() {
        "Identifier" => Expression::Identifier(node(value)?),
        "NumericLiteral" | "StringLiteral" | "BooleanLiteral" | "NullLiteral" => {
            Expression::Literal(literal(value)?)
        }
        "ThisExpression" => Expression::This,
        "Super" => Expression::Super,
        "NewExpression" => Expression::New(node(value)?),
        "CallExpression" => Expression::Call(node(value)?),
        "MemberExpression" => Expression::Member(node(value)?),
        "AssignmentExpression" => Expression::Assignment(node(value)?),
        "BinaryExpression" => Expression::Binary(node(value)?),
        "LogicalExpression" => Expression::Logical(node(value)?),
        "UnaryExpression" => Expression::Unary(node(value)?),
        other => return Err(de::Error::unknown_variant(other, EXPRESSION_TAGS)),
    };
    Ok(expression)
}

fn literal(mut value: Value) -> JsonResult<Literal> {
    let literal = match node_tag(&value)?.as_str() {
        "NumericLiteral" => Literal::Numeric(field(&mut value, "value")?),
        "StringLiteral" => Literal::String(field(&mut value, "value")?),
        "BooleanLiteral" => Literal::Boolean(field(&mut value, "value")?),
        "NullLiteral" => Literal::Null,
        other => return Err(de::Error::unknown_variant(other, LITERAL_TAGS)),
    };
    Ok(literal)
}

/// A `let` list is told apart from an expression by its tag alone.
fn for_init(value: Value) -> JsonResult<ForInit> {
    if node_tag(&value)? == "VariableStatement" {
        Ok(ForInit::Variables(node(value)?))
    } else {
        expression(value).map(ForInit::Expression)
    }
}

#[derive(Deserialize)]
struct RawMember {
    object: Box<Expression>,
    property: Value,
    computed: bool,
}

fn member(raw: RawMember) -> JsonResult<MemberExpression> {
    let property = if raw.computed {
        MemberProperty::Computed(Box::new(expression(raw.property)?))
    } else {
        if node_tag(&raw.property)? != "Identifier" {
            return Err(de::Error::custom(
                "non-computed member property must be an Identifier",
            ));
        }
        MemberProperty::Static(node::<Identifier>(raw.property)?)
    };

    Ok(MemberExpression {
        object: raw.object,
        property,
    })
}

/// Implements `Deserialize` by buffering the node as JSON and handing it to
/// the reader above.
macro_rules! from_json_value {
    ($($ty:ty => $read:ident,)+) => {
        $(
            impl<'de> Deserialize<'de> for $ty {
                fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                    let value = Value::deserialize(deserializer)?;
                    $read(value).map_err(de::Error::custom)
                }
            }
        )+
    };
}

from_json_value! {
    Statement => statement,
    Expression => expression,
    Literal => literal,
    ForInit => for_init,
}

impl<'de> Deserialize<'de> for MemberExpression {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawMember::deserialize(deserializer)?;
        member(raw).map_err(de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for AssignmentTarget {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let expression = Expression::deserialize(deserializer)?;
        AssignmentTarget::try_from(expression).map_err(|_| {
            de::Error::custom("assignment target must be an Identifier or MemberExpression")
        })
    }
}
