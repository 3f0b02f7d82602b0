// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Abstract Syntax Tree (AST) definitions for Letter.
//!
//! These structures serialize to an ESTree-like shape: every node is an
//! object carrying a `"type"` discriminant plus its own fields, and read
//! back from the same shape. The tree is strictly owned; nodes hold their
//! children by value or `Box`.

mod deserialize;
mod serialize;

pub(crate) use serialize::MAX_SAFE_INTEGER;

use serde::{Deserialize, Serialize};

/// A complete Letter program.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type")]
pub struct Program {
    /// The statements in the program
    pub body: Vec<Statement>,
}

/// An identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub struct Identifier {
    /// The name of the identifier
    pub name: String,
}

impl Identifier {
    /// Creates a new identifier.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A Letter statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// Block statement { ... }
    Block(BlockStatement),
    /// Empty statement (;)
    Empty,
    /// Expression statement
    Expression(ExpressionStatement),
    /// `let` declaration list
    Variable(VariableStatement),
    /// If statement
    If(IfStatement),
    /// While statement
    While(WhileStatement),
    /// Do-while statement
    DoWhile(DoWhileStatement),
    /// For statement
    For(ForStatement),
    /// Function declaration
    FunctionDeclaration(FunctionDeclaration),
    /// Return statement
    Return(ReturnStatement),
    /// Class declaration
    ClassDeclaration(ClassDeclaration),
}

impl Statement {
    /// Wraps an expression in an expression statement.
    pub fn expression(expression: Expression) -> Self {
        Statement::Expression(ExpressionStatement { expression })
    }

    /// Creates a block statement.
    pub fn block(body: Vec<Statement>) -> Self {
        Statement::Block(BlockStatement { body })
    }
}

/// A block statement.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type")]
pub struct BlockStatement {
    /// The statements in the block
    pub body: Vec<Statement>,
}

/// An expression statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub struct ExpressionStatement {
    /// The expression
    pub expression: Expression,
}

/// A `let` statement declaring one or more variables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub struct VariableStatement {
    /// The declarations, in source order
    pub declarations: Vec<VariableDeclaration>,
}

/// A single variable declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub struct VariableDeclaration {
    /// The identifier being declared
    pub id: Identifier,
    /// Optional initializer expression
    pub init: Option<Expression>,
}

/// An if statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub struct IfStatement {
    /// The condition
    pub test: Expression,
    /// The then branch
    pub consequent: Box<Statement>,
    /// The optional else branch
    pub alternate: Option<Box<Statement>>,
}

/// A while statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub struct WhileStatement {
    /// The condition
    pub test: Expression,
    /// The loop body
    pub body: Box<Statement>,
}

/// A do-while statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub struct DoWhileStatement {
    /// The loop body
    pub body: Box<Statement>,
    /// The condition
    pub test: Expression,
}

/// A for statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub struct ForStatement {
    /// The initializer
    pub init: Option<ForInit>,
    /// The condition
    pub test: Option<Expression>,
    /// The update expression
    pub update: Option<Expression>,
    /// The loop body
    pub body: Box<Statement>,
}

/// For loop initializer.
#[derive(Debug, Clone, PartialEq)]
pub enum ForInit {
    /// `let` declarations without their trailing `;`
    Variables(VariableStatement),
    /// Expression
    Expression(Expression),
}

/// A function declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub struct FunctionDeclaration {
    /// The function name
    pub name: Identifier,
    /// The parameters
    pub params: Vec<Identifier>,
    /// The function body
    pub body: BlockStatement,
}

/// A return statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub struct ReturnStatement {
    /// The returned value, if any
    pub argument: Option<Expression>,
}

/// A class declaration. Its body holds the methods as function declarations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct ClassDeclaration {
    /// The class name
    pub id: Identifier,
    /// The parent class, if the class `extends` one
    pub super_class: Option<Identifier>,
    /// The class body
    pub body: BlockStatement,
}

/// A Letter expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// Identifier reference
    Identifier(Identifier),
    /// Literal value
    Literal(Literal),
    /// `this`
    This,
    /// `super`, only ever the callee of a call
    Super,
    /// `new` expression
    New(NewExpression),
    /// Function call
    Call(CallExpression),
    /// Member access (`a.b` or `a[b]`)
    Member(MemberExpression),
    /// Assignment (`=` and compound forms)
    Assignment(AssignmentExpression),
    /// Arithmetic, equality or relational operation
    Binary(BinaryExpression),
    /// `&&` or `||`
    Logical(LogicalExpression),
    /// Prefix `+`, `-` or `!`
    Unary(UnaryExpression),
}

impl Expression {
    /// Identifier reference.
    pub fn identifier(name: impl Into<String>) -> Self {
        Expression::Identifier(Identifier::new(name))
    }

    /// Numeric literal.
    pub fn number(value: f64) -> Self {
        Expression::Literal(Literal::Numeric(value))
    }

    /// String literal, without quotes.
    pub fn string(value: impl Into<String>) -> Self {
        Expression::Literal(Literal::String(value.into()))
    }

    /// Boolean literal.
    pub fn boolean(value: bool) -> Self {
        Expression::Literal(Literal::Boolean(value))
    }

    /// `null` literal.
    pub fn null() -> Self {
        Expression::Literal(Literal::Null)
    }

    /// Binary operation.
    pub fn binary(operator: BinaryOperator, left: Expression, right: Expression) -> Self {
        Expression::Binary(BinaryExpression {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    /// Logical operation.
    pub fn logical(operator: LogicalOperator, left: Expression, right: Expression) -> Self {
        Expression::Logical(LogicalExpression {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    /// Prefix unary operation.
    pub fn unary(operator: UnaryOperator, argument: Expression) -> Self {
        Expression::Unary(UnaryExpression {
            operator,
            argument: Box::new(argument),
        })
    }

    /// Assignment to an already validated target.
    pub fn assignment(
        operator: AssignmentOperator,
        left: AssignmentTarget,
        right: Expression,
    ) -> Self {
        Expression::Assignment(AssignmentExpression {
            operator,
            left,
            right: Box::new(right),
        })
    }

    /// Non-computed member access, `object.property`.
    pub fn member(object: Expression, property: Identifier) -> Self {
        Expression::Member(MemberExpression {
            object: Box::new(object),
            property: MemberProperty::Static(property),
        })
    }

    /// Computed member access, `object[property]`.
    pub fn computed_member(object: Expression, property: Expression) -> Self {
        Expression::Member(MemberExpression {
            object: Box::new(object),
            property: MemberProperty::Computed(Box::new(property)),
        })
    }

    /// Function call.
    pub fn call(callee: Expression, arguments: Vec<Expression>) -> Self {
        Expression::Call(CallExpression {
            callee: Box::new(callee),
            arguments,
        })
    }

    /// Object construction with `new`.
    pub fn new_instance(callee: Expression, arguments: Vec<Expression>) -> Self {
        Expression::New(NewExpression {
            callee: Box::new(callee),
            arguments,
        })
    }
}

/// Literal values.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// Number literal
    Numeric(f64),
    /// String literal, quotes stripped
    String(String),
    /// Boolean literal
    Boolean(bool),
    /// `null`
    Null,
}

/// A `new` expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub struct NewExpression {
    /// The constructor being invoked
    pub callee: Box<Expression>,
    /// The arguments
    pub arguments: Vec<Expression>,
}

/// A call expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub struct CallExpression {
    /// The function being called
    pub callee: Box<Expression>,
    /// The arguments
    pub arguments: Vec<Expression>,
}

/// A member expression.
///
/// Serializes with a `computed` flag derived from the property kind.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberExpression {
    /// The object
    pub object: Box<Expression>,
    /// The property
    pub property: MemberProperty,
}

impl MemberExpression {
    /// Whether the property is written in brackets.
    pub fn computed(&self) -> bool {
        matches!(self.property, MemberProperty::Computed(_))
    }
}

/// Member property.
#[derive(Debug, Clone, PartialEq)]
pub enum MemberProperty {
    /// `object.name`
    Static(Identifier),
    /// `object[expression]`
    Computed(Box<Expression>),
}

/// An assignment expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub struct AssignmentExpression {
    /// The operator
    pub operator: AssignmentOperator,
    /// The assigned place
    pub left: AssignmentTarget,
    /// The value
    pub right: Box<Expression>,
}

/// The places an assignment may write to.
#[derive(Debug, Clone, PartialEq)]
pub enum AssignmentTarget {
    /// A variable
    Identifier(Identifier),
    /// A property
    Member(MemberExpression),
}

impl TryFrom<Expression> for AssignmentTarget {
    type Error = Expression;

    /// Accepts identifiers and member expressions, handing anything else back.
    fn try_from(expression: Expression) -> Result<Self, Self::Error> {
        match expression {
            Expression::Identifier(id) => Ok(AssignmentTarget::Identifier(id)),
            Expression::Member(member) => Ok(AssignmentTarget::Member(member)),
            other => Err(other),
        }
    }
}

impl From<AssignmentTarget> for Expression {
    fn from(target: AssignmentTarget) -> Self {
        match target {
            AssignmentTarget::Identifier(id) => Expression::Identifier(id),
            AssignmentTarget::Member(member) => Expression::Member(member),
        }
    }
}

/// A binary expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub struct BinaryExpression {
    /// The operator
    pub operator: BinaryOperator,
    /// Left operand
    pub left: Box<Expression>,
    /// Right operand
    pub right: Box<Expression>,
}

/// A logical expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub struct LogicalExpression {
    /// The operator
    pub operator: LogicalOperator,
    /// Left operand
    pub left: Box<Expression>,
    /// Right operand
    pub right: Box<Expression>,
}

/// A unary expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub struct UnaryExpression {
    /// The operator
    pub operator: UnaryOperator,
    /// The operand
    pub argument: Box<Expression>,
}

/// Declares an operator enum whose variants serialize as their spelling.
macro_rules! operators {
    ($(#[$meta:meta])* $name:ident { $($(#[$vmeta:meta])* $variant:ident => $text:literal,)+ }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $text)]
                $variant,
            )+
        }

        impl $name {
            /// The source spelling of the operator.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }

            /// Maps operator text to the operator, if it is one.
            pub fn from_lexeme(text: &str) -> Option<Self> {
                match text {
                    $($text => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

operators! {
    /// Operators of [`BinaryExpression`].
    BinaryOperator {
        /// `+`
        Add => "+",
        /// `-`
        Subtract => "-",
        /// `*`
        Multiply => "*",
        /// `/`
        Divide => "/",
        /// `==`
        Equal => "==",
        /// `!=`
        NotEqual => "!=",
        /// `<`
        Less => "<",
        /// `<=`
        LessEqual => "<=",
        /// `>`
        Greater => ">",
        /// `>=`
        GreaterEqual => ">=",
    }
}

operators! {
    /// Operators of [`LogicalExpression`].
    LogicalOperator {
        /// `&&`
        And => "&&",
        /// `||`
        Or => "||",
    }
}

operators! {
    /// Operators of [`UnaryExpression`].
    UnaryOperator {
        /// `+`
        Plus => "+",
        /// `-`
        Minus => "-",
        /// `!`
        Not => "!",
    }
}

operators! {
    /// Operators of [`AssignmentExpression`].
    AssignmentOperator {
        /// `=`
        Assign => "=",
        /// `+=`
        AddAssign => "+=",
        /// `-=`
        SubtractAssign => "-=",
        /// `*=`
        MultiplyAssign => "*=",
        /// `/=`
        DivideAssign => "/=",
    }
}
