//! Statement parsing implementation
//!
//! # Grammar
//!
//! ```text
//! block            ::= "{" statement "}"
//! statement        ::= return-statement
//! return-statement ::= "return" expression ";"
//! ```
//!
//! A block currently holds exactly one statement.

use crate::parser::ast::*;
use crate::parser::error::ParseError;
use crate::parser::parse::Parser;
use crate::parser::token::TokenKind;
use std::io::BufRead;
use tracing::trace;

impl<R: BufRead> Parser<R> {
    pub fn parse_block(&mut self) -> Result<Block, ParseError> {
        let lbrace = self.expect_position(TokenKind::LBrace, "not found LBrace.")?;
        let statement = self.parse_statement()?;
        let rbrace = self.expect_position(TokenKind::RBrace, "not found RBrace.")?;

        Ok(Block {
            lbrace,
            statements: vec![statement],
            rbrace,
        })
    }

    pub fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        let kind = self.peek_kind()?;
        trace!(%kind, "statement");
        match kind {
            TokenKind::Return => Ok(Statement::Return(self.parse_return_statement()?)),
            _ => self.unexpected("not found statement."),
        }
    }

    pub fn parse_return_statement(&mut self) -> Result<ReturnStatement, ParseError> {
        let return_keyword = self.expect_position(TokenKind::Return, "not found return keyword.")?;
        let expression = self.parse_expression()?;
        let semicolon = self.expect_position(TokenKind::Semicolon, "not found semicolon.")?;

        Ok(ReturnStatement {
            return_keyword,
            expression,
            semicolon,
        })
    }
}
