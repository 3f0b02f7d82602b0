// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Tree literal macros.
//!
//! Shorthand for writing expected `letter_syntax::ast` trees in tests.
//! The expansions name `::letter_syntax` directly, so the calling crate must
//! depend on it.
//!
//! ```ignore
//! use letter_macros::*;
//!
//! let expected = program![expr_stmt!(binary!("+", num!(1), ident!("x")))];
//! assert_eq!(letter_syntax::parse("1 + x;").unwrap(), expected);
//! ```

/// A `Program` holding the given statements.
#[macro_export]
macro_rules! program {
    ($($stmt:expr),* $(,)?) => {
        ::letter_syntax::ast::Program { body: vec![$($stmt),*] }
    };
}

/// A block statement holding the given statements.
#[macro_export]
macro_rules! block {
    ($($stmt:expr),* $(,)?) => {
        ::letter_syntax::ast::Statement::block(vec![$($stmt),*])
    };
}

/// An expression statement.
#[macro_export]
macro_rules! expr_stmt {
    ($expr:expr) => {
        ::letter_syntax::ast::Statement::expression($expr)
    };
}

/// An identifier in expression position.
#[macro_export]
macro_rules! ident {
    ($name:expr) => {
        ::letter_syntax::ast::Expression::identifier($name)
    };
}

/// A numeric literal.
#[macro_export]
macro_rules! num {
    ($value:expr) => {
        ::letter_syntax::ast::Expression::number($value as f64)
    };
}

/// A string literal, without quotes.
#[macro_export]
macro_rules! string {
    ($value:expr) => {
        ::letter_syntax::ast::Expression::string($value)
    };
}

/// A binary expression from its operator spelling, such as `"+"` or `"<="`.
#[macro_export]
macro_rules! binary {
    ($op:literal, $left:expr, $right:expr) => {
        ::letter_syntax::ast::Expression::binary(
            ::letter_syntax::ast::BinaryOperator::from_lexeme($op)
                .expect(concat!("not a binary operator: ", $op)),
            $left,
            $right,
        )
    };
}

/// A logical expression, `"&&"` or `"||"`.
#[macro_export]
macro_rules! logical {
    ($op:literal, $left:expr, $right:expr) => {
        ::letter_syntax::ast::Expression::logical(
            ::letter_syntax::ast::LogicalOperator::from_lexeme($op)
                .expect(concat!("not a logical operator: ", $op)),
            $left,
            $right,
        )
    };
}

/// An assignment. The target is given as an identifier or member expression.
#[macro_export]
macro_rules! assign {
    ($op:literal, $target:expr, $value:expr) => {
        ::letter_syntax::ast::Expression::assignment(
            ::letter_syntax::ast::AssignmentOperator::from_lexeme($op)
                .expect(concat!("not an assignment operator: ", $op)),
            ::letter_syntax::ast::AssignmentTarget::try_from($target)
                .expect("not an assignment target"),
            $value,
        )
    };
}

/// A non-computed member expression, `object.name`.
#[macro_export]
macro_rules! member {
    ($object:expr, $name:expr) => {
        ::letter_syntax::ast::Expression::member(
            $object,
            ::letter_syntax::ast::Identifier::new($name),
        )
    };
}

/// A computed member expression, `object[property]`.
#[macro_export]
macro_rules! index {
    ($object:expr, $property:expr) => {
        ::letter_syntax::ast::Expression::computed_member($object, $property)
    };
}

/// A call expression.
#[macro_export]
macro_rules! call {
    ($callee:expr $(, $arg:expr)* $(,)?) => {
        ::letter_syntax::ast::Expression::call($callee, vec![$($arg),*])
    };
}
