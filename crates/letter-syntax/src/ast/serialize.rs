// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Canonical serialization for the sum types of the tree.
//!
//! Node structs carry their own `"type"` tag, so the enums delegate to the
//! payload instead of adding a second tag. Payload-free variants and
//! literals are written out by hand.

use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};

use super::{AssignmentTarget, Expression, ForInit, Literal, MemberExpression, MemberProperty, Statement};

/// Largest integer an `f64` holds exactly.
pub(crate) const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

fn tag_only<S: Serializer>(serializer: S, tag: &'static str) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(1))?;
    map.serialize_entry("type", tag)?;
    map.end()
}

fn tagged_value<S: Serializer, T: Serialize + ?Sized>(
    serializer: S,
    tag: &'static str,
    value: &T,
) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(2))?;
    map.serialize_entry("type", tag)?;
    map.serialize_entry("value", value)?;
    map.end()
}

impl Serialize for Statement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Statement::Block(node) => node.serialize(serializer),
            Statement::Empty => tag_only(serializer, "EmptyStatement"),
            Statement::Expression(node) => node.serialize(serializer),
            Statement::Variable(node) => node.serialize(serializer),
            Statement::If(node) => node.serialize(serializer),
            Statement::While(node) => node.serialize(serializer),
            Statement::DoWhile(node) => node.serialize(serializer),
            Statement::For(node) => node.serialize(serializer),
            Statement::FunctionDeclaration(node) => node.serialize(serializer),
            Statement::Return(node) => node.serialize(serializer),
            Statement::ClassDeclaration(node) => node.serialize(serializer),
        }
    }
}

impl Serialize for Expression {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Expression::Identifier(node) => node.serialize(serializer),
            Expression::Literal(literal) => literal.serialize(serializer),
            Expression::This => tag_only(serializer, "ThisExpression"),
            Expression::Super => tag_only(serializer, "Super"),
            Expression::New(node) => node.serialize(serializer),
            Expression::Call(node) => node.serialize(serializer),
            Expression::Member(node) => node.serialize(serializer),
            Expression::Assignment(node) => node.serialize(serializer),
            Expression::Binary(node) => node.serialize(serializer),
            Expression::Logical(node) => node.serialize(serializer),
            Expression::Unary(node) => node.serialize(serializer),
        }
    }
}

impl Serialize for Literal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            // integral values are written as JSON integers
            Literal::Numeric(value) if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER => {
                tagged_value(serializer, "NumericLiteral", &(*value as i64))
            }
            Literal::Numeric(value) => tagged_value(serializer, "NumericLiteral", value),
            Literal::String(value) => tagged_value(serializer, "StringLiteral", value),
            Literal::Boolean(value) => tagged_value(serializer, "BooleanLiteral", value),
            Literal::Null => tag_only(serializer, "NullLiteral"),
        }
    }
}

impl Serialize for ForInit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ForInit::Variables(node) => node.serialize(serializer),
            ForInit::Expression(node) => node.serialize(serializer),
        }
    }
}

impl Serialize for MemberExpression {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("MemberExpression", 4)?;
        state.serialize_field("type", "MemberExpression")?;
        state.serialize_field("object", &self.object)?;
        state.serialize_field("property", &self.property)?;
        state.serialize_field("computed", &self.computed())?;
        state.end()
    }
}

impl Serialize for MemberProperty {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            MemberProperty::Static(id) => id.serialize(serializer),
            MemberProperty::Computed(expression) => expression.serialize(serializer),
        }
    }
}

impl Serialize for AssignmentTarget {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AssignmentTarget::Identifier(id) => id.serialize(serializer),
            AssignmentTarget::Member(member) => member.serialize(serializer),
        }
    }
}
