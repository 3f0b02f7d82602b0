// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Statement lists, blocks, declarations and control flow.

mod common;

use common::parse_ok;
use letter_macros::*;
use letter_syntax::ast::*;

fn first(source: &str) -> Statement {
    let mut body = parse_ok(source).body;
    assert!(!body.is_empty(), "no statements in {source:?}");
    body.remove(0)
}

fn declaration(name: &str, init: Option<Expression>) -> VariableDeclaration {
    VariableDeclaration {
        id: Identifier::new(name),
        init,
    }
}

fn function(name: &str, params: &[&str], body: Vec<Statement>) -> Statement {
    Statement::FunctionDeclaration(FunctionDeclaration {
        name: Identifier::new(name),
        params: params.iter().copied().map(Identifier::new).collect(),
        body: BlockStatement { body },
    })
}

fn ret(argument: Option<Expression>) -> Statement {
    Statement::Return(ReturnStatement { argument })
}

// ============================================================================
// Statement lists and blocks
// ============================================================================

#[test]
fn test_statement_list_with_comments() {
    let source = r#"
        /**
         * Documentation comment:
         */
        "hello";
        // Number:
        42;
    "#;
    assert_eq!(
        parse_ok(source),
        program![expr_stmt!(string!("hello")), expr_stmt!(num!(42))]
    );
}

#[test]
fn test_block() {
    assert_eq!(
        parse_ok(r#"{ 42; "hello"; }"#),
        program![block![expr_stmt!(num!(42)), expr_stmt!(string!("hello"))]]
    );
}

#[test]
fn test_nested_blocks() {
    assert_eq!(
        parse_ok(r#"{ 42; { "hello"; } }"#),
        program![block![expr_stmt!(num!(42)), block![expr_stmt!(string!("hello"))]]]
    );
}

#[test]
fn test_empty_block_and_statement() {
    assert_eq!(parse_ok("{ // empty block\n }"), program![block![]]);
    assert_eq!(parse_ok(";;"), program![Statement::Empty, Statement::Empty]);
}

// ============================================================================
// Variables
// ============================================================================

#[test]
fn test_variable_with_initializer() {
    assert_eq!(
        first("let x = 42;"),
        Statement::Variable(VariableStatement {
            declarations: vec![declaration("x", Some(num!(42)))],
        })
    );
}

#[test]
fn test_variable_without_initializer() {
    assert_eq!(
        first("let x;"),
        Statement::Variable(VariableStatement {
            declarations: vec![declaration("x", None)],
        })
    );
}

#[test]
fn test_multiple_variables() {
    assert_eq!(
        first("let x, y = 42;"),
        Statement::Variable(VariableStatement {
            declarations: vec![declaration("x", None), declaration("y", Some(num!(42)))],
        })
    );
}

#[test]
fn test_variable_with_chained_assignment() {
    assert_eq!(
        first("let x = y = 42;"),
        Statement::Variable(VariableStatement {
            declarations: vec![declaration(
                "x",
                Some(assign!("=", ident!("y"), num!(42)))
            )],
        })
    );
}

// ============================================================================
// If
// ============================================================================

#[test]
fn test_if_else() {
    assert_eq!(
        first("if (x) { x = 1; } else { x = 2; }"),
        Statement::If(IfStatement {
            test: ident!("x"),
            consequent: Box::new(block![expr_stmt!(assign!("=", ident!("x"), num!(1)))]),
            alternate: Some(Box::new(block![expr_stmt!(assign!(
                "=",
                ident!("x"),
                num!(2)
            ))])),
        })
    );
}

#[test]
fn test_if_without_else() {
    assert_eq!(
        first("if (x) { x = 1; }"),
        Statement::If(IfStatement {
            test: ident!("x"),
            consequent: Box::new(block![expr_stmt!(assign!("=", ident!("x"), num!(1)))]),
            alternate: None,
        })
    );
}

#[test]
fn test_nested_if_else_pairs() {
    assert_eq!(
        first("if (x) if (1) { } else {} else {}"),
        Statement::If(IfStatement {
            test: ident!("x"),
            consequent: Box::new(Statement::If(IfStatement {
                test: num!(1),
                consequent: Box::new(block![]),
                alternate: Some(Box::new(block![])),
            })),
            alternate: Some(Box::new(block![])),
        })
    );
}

#[test]
fn test_dangling_else_binds_to_nearest_if() {
    let Statement::If(outer) = first("if (a) if (b) x; else y;") else {
        panic!("expected if statement");
    };
    assert_eq!(outer.alternate, None);
    assert_matches!(*outer.consequent, Statement::If(ref inner) if inner.alternate.is_some());
}

// ============================================================================
// Loops
// ============================================================================

#[test]
fn test_while() {
    assert_eq!(
        first("while (x > 10) { x -= 1; }"),
        Statement::While(WhileStatement {
            test: binary!(">", ident!("x"), num!(10)),
            body: Box::new(block![expr_stmt!(assign!("-=", ident!("x"), num!(1)))]),
        })
    );
}

#[test]
fn test_do_while() {
    assert_eq!(
        first("do { x -= 1; } while (x > 10);"),
        Statement::DoWhile(DoWhileStatement {
            body: Box::new(block![expr_stmt!(assign!("-=", ident!("x"), num!(1)))]),
            test: binary!(">", ident!("x"), num!(10)),
        })
    );
}

#[test]
fn test_for() {
    assert_eq!(
        first("for (let i = 0; i < 10; i += 1) { x += i; }"),
        Statement::For(ForStatement {
            init: Some(ForInit::Variables(VariableStatement {
                declarations: vec![declaration("i", Some(num!(0)))],
            })),
            test: Some(binary!("<", ident!("i"), num!(10))),
            update: Some(assign!("+=", ident!("i"), num!(1))),
            body: Box::new(block![expr_stmt!(assign!("+=", ident!("x"), ident!("i")))]),
        })
    );
}

#[test]
fn test_for_with_empty_clauses() {
    assert_eq!(
        first("for (;;) {}"),
        Statement::For(ForStatement {
            init: None,
            test: None,
            update: None,
            body: Box::new(block![]),
        })
    );
}

#[test]
fn test_for_with_expression_init() {
    let Statement::For(stmt) = first("for (i = 0; i < 1;) i += 1;") else {
        panic!("expected for statement");
    };
    assert_eq!(
        stmt.init,
        Some(ForInit::Expression(assign!("=", ident!("i"), num!(0))))
    );
    assert_eq!(stmt.update, None);
}

// ============================================================================
// Functions
// ============================================================================

#[test]
fn test_function_declaration() {
    assert_eq!(
        first("def square(x) { return x * x; }"),
        function(
            "square",
            &["x"],
            vec![ret(Some(binary!("*", ident!("x"), ident!("x"))))]
        )
    );
}

#[test]
fn test_function_without_params() {
    assert_eq!(first("def empty() { }"), function("empty", &[], vec![]));
    assert_eq!(first("def empty(x, y) { }"), function("empty", &["x", "y"], vec![]));
}

#[test]
fn test_bare_return() {
    assert_eq!(parse_ok("return;"), program![ret(None)]);
}

// ============================================================================
// Classes
// ============================================================================

#[test]
fn test_class_without_superclass() {
    let source = r#"
        class Point {
            def constructor(x, y) {
                this.x = x;
                this.y = y;
            }
            def calc() {
                return this.x + this.y;
            }
        }
    "#;
    assert_eq!(
        first(source),
        Statement::ClassDeclaration(ClassDeclaration {
            id: Identifier::new("Point"),
            super_class: None,
            body: BlockStatement {
                body: vec![
                    function(
                        "constructor",
                        &["x", "y"],
                        vec![
                            expr_stmt!(assign!("=", member!(Expression::This, "x"), ident!("x"))),
                            expr_stmt!(assign!("=", member!(Expression::This, "y"), ident!("y"))),
                        ]
                    ),
                    function(
                        "calc",
                        &[],
                        vec![ret(Some(binary!(
                            "+",
                            member!(Expression::This, "x"),
                            member!(Expression::This, "y")
                        )))]
                    ),
                ],
            },
        })
    );
}

#[test]
fn test_class_with_superclass() {
    let source = r#"
        class Point3D extends Point {
            def constructor(x, y, z) {
                super(x, y);
                this.z = z;
            }
            def calc() {
                return super() + this.z;
            }
        }
        let p = new Point3D(10, 20, 30);
        p.calc();
    "#;
    let program = parse_ok(source);
    assert_eq!(program.body.len(), 3);

    let Statement::ClassDeclaration(class) = &program.body[0] else {
        panic!("expected class declaration");
    };
    assert_eq!(class.id, Identifier::new("Point3D"));
    assert_eq!(class.super_class, Some(Identifier::new("Point")));

    let Statement::FunctionDeclaration(constructor) = &class.body.body[0] else {
        panic!("expected constructor");
    };
    assert_eq!(
        constructor.body.body[0],
        expr_stmt!(call!(Expression::Super, ident!("x"), ident!("y")))
    );

    assert_eq!(
        program.body[2],
        expr_stmt!(call!(member!(ident!("p"), "calc")))
    );
}
