// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Shared helpers for the integration tests.

#![allow(dead_code)]

use letter_syntax::ast::{Expression, Program, Statement};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Installs a log subscriber once. Output is shown with `RUST_LOG=letter_syntax=trace`.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

/// Parses `source`, panicking with the error on failure.
pub fn parse_ok(source: &str) -> Program {
    init_tracing();
    match letter_syntax::parse(source) {
        Ok(program) => program,
        Err(e) => panic!("failed to parse {source:?}: {e}"),
    }
}

/// Parses a single expression statement and returns its expression.
pub fn parse_expr(source: &str) -> Expression {
    let mut body = parse_ok(source).body;
    assert_eq!(body.len(), 1, "expected one statement in {source:?}");
    match body.remove(0) {
        Statement::Expression(stmt) => stmt.expression,
        other => panic!("expected an expression statement, got {other:?}"),
    }
}

/// Parses `source` and returns its serialized tree.
pub fn parse_json(source: &str) -> serde_json::Value {
    serde_json::to_value(parse_ok(source)).expect("tree serializes")
}
