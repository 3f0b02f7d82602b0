// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Statement parsing.
//!
//! ## Grammar
//!
//! ```text
//! Program            : StatementList ;
//! StatementList      : Statement | StatementList Statement ;
//! Statement          : EmptyStatement | BlockStatement | VariableStatement
//!                    | FunctionDeclaration | ClassDeclaration | ReturnStatement
//!                    | IfStatement | IterationStatement | ExpressionStatement ;
//! BlockStatement     : '{' StatementList? '}' ;
//! VariableStatement  : 'let' VariableDeclarationList ';' ;
//! VariableDeclaration: IDENTIFIER ('=' AssignmentExpression)? ;
//! IfStatement        : 'if' '(' Expression ')' Statement ('else' Statement)? ;
//! IterationStatement : 'while' '(' Expression ')' Statement
//!                    | 'do' Statement 'while' '(' Expression ')' ';'
//!                    | 'for' '(' ForInit? ';' Expression? ';' Expression? ')' Statement ;
//! ForInit            : 'let' VariableDeclarationList | Expression ;
//! FunctionDeclaration: 'def' IDENTIFIER '(' FormalParameterList? ')' BlockStatement ;
//! ReturnStatement    : 'return' Expression? ';' ;
//! ClassDeclaration   : 'class' IDENTIFIER ('extends' IDENTIFIER)? BlockStatement ;
//! ```

use super::builder::AstBuilder;
use super::parser::Parser;
use crate::error::Result;
use crate::lexer::TokenKind;

impl<B: AstBuilder> Parser<'_, B> {
    pub(super) fn program(&mut self) -> Result<B::Program> {
        let body = self.statement_list(None)?;
        tracing::debug!(statements = body.len(), "parsed program");
        Ok(self.builder.program(body))
    }

    /// Parses statements until end of input or until the lookahead is `stop`.
    fn statement_list(&mut self, stop: Option<TokenKind>) -> Result<Vec<B::Statement>> {
        let mut statements = Vec::new();

        while !self.is_at_end() && self.lookahead_kind() != stop {
            statements.push(self.statement()?);
        }

        Ok(statements)
    }

    fn statement(&mut self) -> Result<B::Statement> {
        self.nested(Self::statement_by_keyword)
    }

    fn statement_by_keyword(&mut self) -> Result<B::Statement> {
        match self.lookahead_kind() {
            Some(TokenKind::Semicolon) => self.empty_statement(),
            Some(TokenKind::LeftBrace) => {
                let block = self.block()?;
                Ok(self.builder.block_statement(block))
            }
            Some(TokenKind::Let) => self.variable_statement(),
            Some(TokenKind::Def) => self.function_declaration(),
            Some(TokenKind::Class) => self.class_declaration(),
            Some(TokenKind::Return) => self.return_statement(),
            Some(TokenKind::If) => self.if_statement(),
            Some(TokenKind::While) => self.while_statement(),
            Some(TokenKind::Do) => self.do_while_statement(),
            Some(TokenKind::For) => self.for_statement(),
            _ => self.expression_statement(),
        }
    }

    fn empty_statement(&mut self) -> Result<B::Statement> {
        self.eat(TokenKind::Semicolon)?;
        Ok(self.builder.empty_statement())
    }

    fn block(&mut self) -> Result<B::Block> {
        self.eat(TokenKind::LeftBrace)?;
        let body = if self.check(TokenKind::RightBrace) {
            Vec::new()
        } else {
            self.statement_list(Some(TokenKind::RightBrace))?
        };
        self.eat(TokenKind::RightBrace)?;

        Ok(self.builder.block(body))
    }

    fn variable_statement(&mut self) -> Result<B::Statement> {
        let declarations = self.variable_declarations()?;
        self.eat(TokenKind::Semicolon)?;
        Ok(self.builder.variable_statement(declarations))
    }

    /// `let` and its declaration list, without a trailing `;`.
    fn variable_declarations(&mut self) -> Result<Vec<B::Declaration>> {
        self.eat(TokenKind::Let)?;

        let mut declarations = Vec::new();
        loop {
            declarations.push(self.variable_declaration()?);
            if !self.check(TokenKind::Comma) {
                break;
            }
            self.eat(TokenKind::Comma)?;
        }

        Ok(declarations)
    }

    fn variable_declaration(&mut self) -> Result<B::Declaration> {
        let id = self.binding_identifier()?;
        let init = if self.check(TokenKind::Semicolon) || self.check(TokenKind::Comma) {
            None
        } else {
            self.eat(TokenKind::SimpleAssign)?;
            Some(self.assignment_expression()?)
        };

        Ok(self.builder.variable_declaration(id, init))
    }

    fn if_statement(&mut self) -> Result<B::Statement> {
        self.eat(TokenKind::If)?;
        self.eat(TokenKind::LeftParen)?;
        let test = self.expression()?;
        self.eat(TokenKind::RightParen)?;
        let consequent = self.statement()?;

        // `else` binds to the nearest `if` still waiting for one
        let alternate = if self.check(TokenKind::Else) {
            self.eat(TokenKind::Else)?;
            Some(self.statement()?)
        } else {
            None
        };

        Ok(self.builder.if_statement(test, consequent, alternate))
    }

    fn while_statement(&mut self) -> Result<B::Statement> {
        self.eat(TokenKind::While)?;
        self.eat(TokenKind::LeftParen)?;
        let test = self.expression()?;
        self.eat(TokenKind::RightParen)?;
        let body = self.statement()?;

        Ok(self.builder.while_statement(test, body))
    }

    fn do_while_statement(&mut self) -> Result<B::Statement> {
        self.eat(TokenKind::Do)?;
        let body = self.statement()?;
        self.eat(TokenKind::While)?;
        self.eat(TokenKind::LeftParen)?;
        let test = self.expression()?;
        self.eat(TokenKind::RightParen)?;
        self.eat(TokenKind::Semicolon)?;

        Ok(self.builder.do_while_statement(body, test))
    }

    fn for_statement(&mut self) -> Result<B::Statement> {
        self.eat(TokenKind::For)?;
        self.eat(TokenKind::LeftParen)?;

        let init = if self.check(TokenKind::Semicolon) {
            None
        } else {
            Some(self.for_init()?)
        };
        self.eat(TokenKind::Semicolon)?;

        let test = if self.check(TokenKind::Semicolon) {
            None
        } else {
            Some(self.expression()?)
        };
        self.eat(TokenKind::Semicolon)?;

        let update = if self.check(TokenKind::RightParen) {
            None
        } else {
            Some(self.expression()?)
        };
        self.eat(TokenKind::RightParen)?;

        let body = self.statement()?;
        Ok(self.builder.for_statement(init, test, update, body))
    }

    fn for_init(&mut self) -> Result<B::ForInit> {
        if self.check(TokenKind::Let) {
            let declarations = self.variable_declarations()?;
            return Ok(self.builder.for_init_variables(declarations));
        }

        let expression = self.expression()?;
        Ok(self.builder.for_init_expression(expression))
    }

    fn function_declaration(&mut self) -> Result<B::Statement> {
        self.eat(TokenKind::Def)?;
        let name = self.binding_identifier()?;

        self.eat(TokenKind::LeftParen)?;
        let params = if self.check(TokenKind::RightParen) {
            Vec::new()
        } else {
            self.formal_parameters()?
        };
        self.eat(TokenKind::RightParen)?;

        let body = self.block()?;
        Ok(self.builder.function_declaration(name, params, body))
    }

    fn formal_parameters(&mut self) -> Result<Vec<B::Identifier>> {
        let mut params = Vec::new();

        loop {
            params.push(self.binding_identifier()?);
            if !self.check(TokenKind::Comma) {
                break;
            }
            self.eat(TokenKind::Comma)?;
        }

        Ok(params)
    }

    fn return_statement(&mut self) -> Result<B::Statement> {
        self.eat(TokenKind::Return)?;
        let argument = if self.check(TokenKind::Semicolon) {
            None
        } else {
            Some(self.expression()?)
        };
        self.eat(TokenKind::Semicolon)?;

        Ok(self.builder.return_statement(argument))
    }

    fn class_declaration(&mut self) -> Result<B::Statement> {
        self.eat(TokenKind::Class)?;
        let id = self.binding_identifier()?;

        let super_class = if self.check(TokenKind::Extends) {
            self.eat(TokenKind::Extends)?;
            Some(self.binding_identifier()?)
        } else {
            None
        };

        let body = self.block()?;
        Ok(self.builder.class_declaration(id, super_class, body))
    }

    fn expression_statement(&mut self) -> Result<B::Statement> {
        let expression = self.expression()?;
        self.eat(TokenKind::Semicolon)?;
        Ok(self.builder.expression_statement(expression))
    }
}
