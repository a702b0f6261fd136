//! Type name parsing
//!
//! Only elementary type names are recognised: `address`, `bool`, `string`,
//! `bytes`/`bytesN`, `byte`, `int`/`intN`, `uint`/`uintN`, `fixed`,
//! `ufixed` and their sized forms. `address payable` is folded into one
//! two-token name.

use crate::parser::ast::*;
use crate::parser::error::ParseError;
use crate::parser::parse::Parser;
use crate::parser::token::TokenKind;
use std::io::BufRead;
use tracing::trace;

impl<R: BufRead> Parser<R> {
    pub fn parse_type_name(&mut self) -> Result<TypeName, ParseError> {
        let kind = self.peek_kind()?;
        trace!(%kind, "type name");
        if kind.is_elementary_type() {
            return Ok(TypeName::Elementary(self.parse_elementary_type_name()?));
        }
        self.unexpected("not found type-name.")
    }

    pub fn parse_elementary_type_name(&mut self) -> Result<ElementaryTypeName, ParseError> {
        let name = self.scan()?;
        if !name.kind.is_elementary_type() {
            return Err(ParseError::at(
                name.position,
                "not found elementary type name keyword.",
            ));
        }

        let payable = if name.kind == TokenKind::Address {
            self.accept(TokenKind::Payable)?
        } else {
            None
        };

        Ok(ElementaryTypeName { name, payable })
    }

    /// One or more comma-separated parameters. A trailing comma is an error.
    pub fn parse_parameter_list(&mut self) -> Result<ParameterList, ParseError> {
        let mut parameters = vec![self.parse_parameter()?];
        let mut commas = Vec::new();
        while let Some(comma) = self.accept(TokenKind::Comma)? {
            commas.push(comma.position);
            parameters.push(self.parse_parameter()?);
        }
        Ok(ParameterList { parameters, commas })
    }

    pub fn parse_parameter(&mut self) -> Result<Parameter, ParseError> {
        let type_name = self.parse_type_name()?;
        Ok(Parameter { type_name })
    }
}
