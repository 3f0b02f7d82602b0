// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Node construction strategies.
//!
//! The parser never builds nodes itself; it hands the pieces of every
//! production to an [`AstBuilder`]. [`TreeBuilder`] produces the typed
//! [`ast`](crate::ast); [`SExpressionBuilder`](crate::sexpr::SExpressionBuilder)
//! produces nested lists.

use crate::ast::{
    AssignmentOperator, AssignmentTarget, BinaryOperator, BlockStatement, ClassDeclaration,
    DoWhileStatement, Expression, ForInit, ForStatement, FunctionDeclaration, Identifier,
    IfStatement, LogicalOperator, Program, ReturnStatement, Statement, UnaryOperator,
    VariableDeclaration, VariableStatement, WhileStatement,
};

/// Builds output nodes for each grammar production.
///
/// The associated types let a builder keep the distinctions the grammar
/// relies on (a function body is always a block, an assignment target is
/// always assignable) or collapse them into a single type.
pub trait AstBuilder {
    /// Root of the output
    type Program;
    /// Statement node
    type Statement;
    /// Expression node
    type Expression;
    /// Identifier node
    type Identifier;
    /// Block node, as used by functions and classes
    type Block;
    /// A single `let` declaration
    type Declaration;
    /// Left side of an assignment
    type Target;
    /// Initializer clause of a `for` loop
    type ForInit;

    /// `Program`
    fn program(&self, body: Vec<Self::Statement>) -> Self::Program;

    /// `BlockStatement` in function and class position
    fn block(&self, body: Vec<Self::Statement>) -> Self::Block;

    /// `BlockStatement` in statement position
    fn block_statement(&self, block: Self::Block) -> Self::Statement;

    /// `EmptyStatement`
    fn empty_statement(&self) -> Self::Statement;

    /// `ExpressionStatement`
    fn expression_statement(&self, expression: Self::Expression) -> Self::Statement;

    /// `VariableDeclaration`
    fn variable_declaration(
        &self,
        id: Self::Identifier,
        init: Option<Self::Expression>,
    ) -> Self::Declaration;

    /// `VariableStatement`
    fn variable_statement(&self, declarations: Vec<Self::Declaration>) -> Self::Statement;

    /// `IfStatement`
    fn if_statement(
        &self,
        test: Self::Expression,
        consequent: Self::Statement,
        alternate: Option<Self::Statement>,
    ) -> Self::Statement;

    /// `WhileStatement`
    fn while_statement(&self, test: Self::Expression, body: Self::Statement) -> Self::Statement;

    /// `DoWhileStatement`
    fn do_while_statement(&self, body: Self::Statement, test: Self::Expression)
    -> Self::Statement;

    /// A `let` list used as a `for` initializer
    fn for_init_variables(&self, declarations: Vec<Self::Declaration>) -> Self::ForInit;

    /// An expression used as a `for` initializer
    fn for_init_expression(&self, expression: Self::Expression) -> Self::ForInit;

    /// `ForStatement`
    fn for_statement(
        &self,
        init: Option<Self::ForInit>,
        test: Option<Self::Expression>,
        update: Option<Self::Expression>,
        body: Self::Statement,
    ) -> Self::Statement;

    /// `FunctionDeclaration`
    fn function_declaration(
        &self,
        name: Self::Identifier,
        params: Vec<Self::Identifier>,
        body: Self::Block,
    ) -> Self::Statement;

    /// `ReturnStatement`
    fn return_statement(&self, argument: Option<Self::Expression>) -> Self::Statement;

    /// `ClassDeclaration`
    fn class_declaration(
        &self,
        id: Self::Identifier,
        super_class: Option<Self::Identifier>,
        body: Self::Block,
    ) -> Self::Statement;

    /// `Identifier` in binding position
    fn identifier(&self, name: String) -> Self::Identifier;

    /// `Identifier` in expression position
    fn identifier_expression(&self, id: Self::Identifier) -> Self::Expression;

    /// `NumericLiteral`
    fn numeric_literal(&self, value: f64) -> Self::Expression;

    /// `StringLiteral`, quotes already stripped
    fn string_literal(&self, value: String) -> Self::Expression;

    /// `BooleanLiteral`
    fn boolean_literal(&self, value: bool) -> Self::Expression;

    /// `NullLiteral`
    fn null_literal(&self) -> Self::Expression;

    /// `ThisExpression`
    fn this_expression(&self) -> Self::Expression;

    /// `Super`
    fn super_expression(&self) -> Self::Expression;

    /// `NewExpression`
    fn new_expression(
        &self,
        callee: Self::Expression,
        arguments: Vec<Self::Expression>,
    ) -> Self::Expression;

    /// `CallExpression`
    fn call_expression(
        &self,
        callee: Self::Expression,
        arguments: Vec<Self::Expression>,
    ) -> Self::Expression;

    /// Non-computed `MemberExpression`
    fn member_expression(
        &self,
        object: Self::Expression,
        property: Self::Identifier,
    ) -> Self::Expression;

    /// Computed `MemberExpression`
    fn computed_member_expression(
        &self,
        object: Self::Expression,
        property: Self::Expression,
    ) -> Self::Expression;

    /// Converts an already parsed expression into an assignment target.
    ///
    /// Returns `None` unless the expression is an identifier or a member
    /// expression.
    fn assignment_target(&self, expression: Self::Expression) -> Option<Self::Target>;

    /// `AssignmentExpression`
    fn assignment_expression(
        &self,
        operator: AssignmentOperator,
        left: Self::Target,
        right: Self::Expression,
    ) -> Self::Expression;

    /// `BinaryExpression`
    fn binary_expression(
        &self,
        operator: BinaryOperator,
        left: Self::Expression,
        right: Self::Expression,
    ) -> Self::Expression;

    /// `LogicalExpression`
    fn logical_expression(
        &self,
        operator: LogicalOperator,
        left: Self::Expression,
        right: Self::Expression,
    ) -> Self::Expression;

    /// `UnaryExpression`
    fn unary_expression(
        &self,
        operator: UnaryOperator,
        argument: Self::Expression,
    ) -> Self::Expression;
}

/// Builds the typed tree from [`crate::ast`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeBuilder;

impl AstBuilder for TreeBuilder {
    type Program = Program;
    type Statement = Statement;
    type Expression = Expression;
    type Identifier = Identifier;
    type Block = BlockStatement;
    type Declaration = VariableDeclaration;
    type Target = AssignmentTarget;
    type ForInit = ForInit;

    fn program(&self, body: Vec<Statement>) -> Program {
        Program { body }
    }

    fn block(&self, body: Vec<Statement>) -> BlockStatement {
        BlockStatement { body }
    }

    fn block_statement(&self, block: BlockStatement) -> Statement {
        Statement::Block(block)
    }

    fn empty_statement(&self) -> Statement {
        Statement::Empty
    }

    fn expression_statement(&self, expression: Expression) -> Statement {
        Statement::expression(expression)
    }

    fn variable_declaration(&self, id: Identifier, init: Option<Expression>) -> VariableDeclaration {
        VariableDeclaration { id, init }
    }

    fn variable_statement(&self, declarations: Vec<VariableDeclaration>) -> Statement {
        Statement::Variable(VariableStatement { declarations })
    }

    fn if_statement(
        &self,
        test: Expression,
        consequent: Statement,
        alternate: Option<Statement>,
    ) -> Statement {
        Statement::If(IfStatement {
            test,
            consequent: Box::new(consequent),
            alternate: alternate.map(Box::new),
        })
    }

    fn while_statement(&self, test: Expression, body: Statement) -> Statement {
        Statement::While(WhileStatement {
            test,
            body: Box::new(body),
        })
    }

    fn do_while_statement(&self, body: Statement, test: Expression) -> Statement {
        Statement::DoWhile(DoWhileStatement {
            body: Box::new(body),
            test,
        })
    }

    fn for_init_variables(&self, declarations: Vec<VariableDeclaration>) -> ForInit {
        ForInit::Variables(VariableStatement { declarations })
    }

    fn for_init_expression(&self, expression: Expression) -> ForInit {
        ForInit::Expression(expression)
    }

    fn for_statement(
        &self,
        init: Option<ForInit>,
        test: Option<Expression>,
        update: Option<Expression>,
        body: Statement,
    ) -> Statement {
        Statement::For(ForStatement {
            init,
            test,
            update,
            body: Box::new(body),
        })
    }

    fn function_declaration(
        &self,
        name: Identifier,
        params: Vec<Identifier>,
        body: BlockStatement,
    ) -> Statement {
        Statement::FunctionDeclaration(FunctionDeclaration { name, params, body })
    }

    fn return_statement(&self, argument: Option<Expression>) -> Statement {
        Statement::Return(ReturnStatement { argument })
    }

    fn class_declaration(
        &self,
        id: Identifier,
        super_class: Option<Identifier>,
        body: BlockStatement,
    ) -> Statement {
        Statement::ClassDeclaration(ClassDeclaration {
            id,
            super_class,
            body,
        })
    }

    fn identifier(&self, name: String) -> Identifier {
        Identifier { name }
    }

    fn identifier_expression(&self, id: Identifier) -> Expression {
        Expression::Identifier(id)
    }

    fn numeric_literal(&self, value: f64) -> Expression {
        Expression::number(value)
    }

    fn string_literal(&self, value: String) -> Expression {
        Expression::string(value)
    }

    fn boolean_literal(&self, value: bool) -> Expression {
        Expression::boolean(value)
    }

    fn null_literal(&self) -> Expression {
        Expression::null()
    }

    fn this_expression(&self) -> Expression {
        Expression::This
    }

    fn super_expression(&self) -> Expression {
        Expression::Super
    }

    fn new_expression(&self, callee: Expression, arguments: Vec<Expression>) -> Expression {
        Expression::new_instance(callee, arguments)
    }

    fn call_expression(&self, callee: Expression, arguments: Vec<Expression>) -> Expression {
        Expression::call(callee, arguments)
    }

    fn member_expression(&self, object: Expression, property: Identifier) -> Expression {
        Expression::member(object, property)
    }

    fn computed_member_expression(&self, object: Expression, property: Expression) -> Expression {
        Expression::computed_member(object, property)
    }

    fn assignment_target(&self, expression: Expression) -> Option<AssignmentTarget> {
        AssignmentTarget::try_from(expression).ok()
    }

    fn assignment_expression(
        &self,
        operator: AssignmentOperator,
        left: AssignmentTarget,
        right: Expression,
    ) -> Expression {
        Expression::assignment(operator, left, right)
    }

    fn binary_expression(
        &self,
        operator: BinaryOperator,
        left: Expression,
        right: Expression,
    ) -> Expression {
        Expression::binary(operator, left, right)
    }

    fn logical_expression(
        &self,
        operator: LogicalOperator,
        left: Expression,
        right: Expression,
    ) -> Expression {
        Expression::logical(operator, left, right)
    }

    fn unary_expression(&self, operator: UnaryOperator, argument: Expression) -> Expression {
        Expression::unary(operator, argument)
    }
}
