// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Expression parsing.
//!
//! Each binary level folds the next tighter level to the left. Assignment
//! is the only right-associative level.

use super::builder::AstBuilder;
use super::parser::Parser;
use crate::ast::{AssignmentOperator, BinaryOperator, LogicalOperator, UnaryOperator};
use crate::error::{Result, SyntaxError};
use crate::lexer::TokenKind;

type Level<P, E> = fn(&mut P) -> Result<E>;

fn unknown_operator(lexeme: &str) -> SyntaxError {
    SyntaxError::UnknownOperator {
        lexeme: lexeme.to_string(),
    }
}

impl<B: AstBuilder> Parser<'_, B> {
    pub(super) fn expression(&mut self) -> Result<B::Expression> {
        self.assignment_expression()
    }

    pub(super) fn assignment_expression(&mut self) -> Result<B::Expression> {
        self.nested(Self::assignment)
    }

    fn assignment(&mut self) -> Result<B::Expression> {
        let left = self.logical_or()?;

        let kind = match self.lookahead_kind() {
            Some(kind) if kind.is_assignment_operator() => kind,
            _ => return Ok(left),
        };

        let target = self
            .builder
            .assignment_target(left)
            .ok_or(SyntaxError::InvalidAssignmentTarget)?;
        let token = self.eat(kind)?;
        let operator = AssignmentOperator::from_lexeme(&token.text)
            .ok_or_else(|| unknown_operator(&token.text))?;
        let right = self.assignment_expression()?;

        Ok(self.builder.assignment_expression(operator, target, right))
    }

    fn logical_or(&mut self) -> Result<B::Expression> {
        self.logical_level(TokenKind::LogicalOr, Self::logical_and)
    }

    fn logical_and(&mut self) -> Result<B::Expression> {
        self.logical_level(TokenKind::LogicalAnd, Self::equality)
    }

    fn equality(&mut self) -> Result<B::Expression> {
        self.binary_level(TokenKind::EqualityOperator, Self::relational)
    }

    fn relational(&mut self) -> Result<B::Expression> {
        self.binary_level(TokenKind::RelationalOperator, Self::additive)
    }

    fn additive(&mut self) -> Result<B::Expression> {
        self.binary_level(TokenKind::AdditiveOperator, Self::multiplicative)
    }

    fn multiplicative(&mut self) -> Result<B::Expression> {
        self.binary_level(TokenKind::MultiplicativeOperator, Self::unary)
    }

    fn binary_level(
        &mut self,
        kind: TokenKind,
        operand: Level<Self, B::Expression>,
    ) -> Result<B::Expression> {
        let mut left = operand(self)?;

        while self.check(kind) {
            let token = self.eat(kind)?;
            let operator = BinaryOperator::from_lexeme(&token.text)
                .ok_or_else(|| unknown_operator(&token.text))?;
            let right = operand(self)?;
            left = self.builder.binary_expression(operator, left, right);
        }

        Ok(left)
    }

    fn logical_level(
        &mut self,
        kind: TokenKind,
        operand: Level<Self, B::Expression>,
    ) -> Result<B::Expression> {
        let mut left = operand(self)?;

        while self.check(kind) {
            let token = self.eat(kind)?;
            let operator = LogicalOperator::from_lexeme(&token.text)
                .ok_or_else(|| unknown_operator(&token.text))?;
            let right = operand(self)?;
            left = self.builder.logical_expression(operator, left, right);
        }

        Ok(left)
    }

    /// The operand of a unary operator is a whole expression, so `-a + b`
    /// negates `a + b`.
    fn unary(&mut self) -> Result<B::Expression> {
        let kind = match self.lookahead_kind() {
            Some(kind @ (TokenKind::AdditiveOperator | TokenKind::LogicalNot)) => kind,
            _ => return self.left_hand_side(),
        };

        let token = self.eat(kind)?;
        let operator =
            UnaryOperator::from_lexeme(&token.text).ok_or_else(|| unknown_operator(&token.text))?;
        let argument = self.expression()?;

        Ok(self.builder.unary_expression(operator, argument))
    }

    fn left_hand_side(&mut self) -> Result<B::Expression> {
        if self.check(TokenKind::Super) {
            self.eat(TokenKind::Super)?;
            let callee = self.builder.super_expression();
            return self.call_chain(callee);
        }

        let member = self.member_expression()?;
        if self.check(TokenKind::LeftParen) {
            return self.call_chain(member);
        }

        Ok(member)
    }

    /// Applies one argument list to `callee`, then one more for each `(`
    /// that immediately follows.
    fn call_chain(&mut self, callee: B::Expression) -> Result<B::Expression> {
        let arguments = self.arguments()?;
        let mut call = self.builder.call_expression(callee, arguments);

        while self.check(TokenKind::LeftParen) {
            let arguments = self.arguments()?;
            call = self.builder.call_expression(call, arguments);
        }

        Ok(call)
    }

    fn arguments(&mut self) -> Result<Vec<B::Expression>> {
        self.eat(TokenKind::LeftParen)?;

        let mut arguments = Vec::new();
        if !self.check(TokenKind::RightParen) {
            loop {
                arguments.push(self.assignment_expression()?);
                if !self.check(TokenKind::Comma) {
                    break;
                }
                self.eat(TokenKind::Comma)?;
            }
        }

        self.eat(TokenKind::RightParen)?;
        Ok(arguments)
    }

    fn member_expression(&mut self) -> Result<B::Expression> {
        let mut object = self.primary()?;

        loop {
            match self.lookahead_kind() {
                Some(TokenKind::Dot) => {
                    self.eat(TokenKind::Dot)?;
                    let property = self.binding_identifier()?;
                    object = self.builder.member_expression(object, property);
                }
                Some(TokenKind::LeftBracket) => {
                    self.eat(TokenKind::LeftBracket)?;
                    let property = self.expression()?;
                    self.eat(TokenKind::RightBracket)?;
                    object = self.builder.computed_member_expression(object, property);
                }
                _ => return Ok(object),
            }
        }
    }

    fn primary(&mut self) -> Result<B::Expression> {
        match self.lookahead_kind() {
            Some(kind) if kind.is_literal() => self.literal(),
            Some(TokenKind::LeftParen) => self.parenthesized_expression(),
            Some(TokenKind::Identifier) => {
                let id = self.binding_identifier()?;
                Ok(self.builder.identifier_expression(id))
            }
            Some(TokenKind::This) => {
                self.eat(TokenKind::This)?;
                Ok(self.builder.this_expression())
            }
            Some(TokenKind::New) => self.nested(Self::new_expression),
            _ => Err(SyntaxError::UnexpectedPrimaryExpression {
                found: self.lookahead_text().map(str::to_string),
            }
            .into()),
        }
    }

    fn parenthesized_expression(&mut self) -> Result<B::Expression> {
        self.eat(TokenKind::LeftParen)?;
        let expression = self.expression()?;
        self.eat(TokenKind::RightParen)?;
        Ok(expression)
    }

    fn literal(&mut self) -> Result<B::Expression> {
        match self.lookahead_kind() {
            Some(TokenKind::Number) => {
                let token = self.eat(TokenKind::Number)?;
                let value = token.text.parse::<f64>().map_err(|_| {
                    SyntaxError::UnexpectedPrimaryExpression {
                        found: Some(token.text.clone()),
                    }
                })?;
                Ok(self.builder.numeric_literal(value))
            }
            Some(TokenKind::String) => {
                let token = self.eat(TokenKind::String)?;
                // the token always carries both quotes
                let value = token.text[1..token.text.len() - 1].to_string();
                Ok(self.builder.string_literal(value))
            }
            Some(TokenKind::True) => {
                self.eat(TokenKind::True)?;
                Ok(self.builder.boolean_literal(true))
            }
            Some(TokenKind::False) => {
                self.eat(TokenKind::False)?;
                Ok(self.builder.boolean_literal(false))
            }
            Some(TokenKind::Null) => {
                self.eat(TokenKind::Null)?;
                Ok(self.builder.null_literal())
            }
            _ => Err(SyntaxError::UnexpectedPrimaryExpression {
                found: self.lookahead_text().map(str::to_string),
            }
            .into()),
        }
    }

    fn new_expression(&mut self) -> Result<B::Expression> {
        self.eat(TokenKind::New)?;
        let callee = self.member_expression()?;
        let arguments = self.arguments()?;
        Ok(self.builder.new_expression(callee, arguments))
    }

    pub(super) fn binding_identifier(&mut self) -> Result<B::Identifier> {
        let token = self.eat(TokenKind::Identifier)?;
        Ok(self.builder.identifier(token.text))
    }
}
