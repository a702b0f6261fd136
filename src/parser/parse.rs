//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct, the token helpers every
//! production relies on, and the top-level [`Parser::parse`] entry point.
//!
//! # Parser Architecture
//!
//! The Parser is a recursive descent parser with one token of lookahead:
//! - This module: Parser struct, helper methods, and top-level dispatch
//! - `declarations`: pragma, import, contract and function definitions
//! - `types`: type names and parameter lists
//! - `statements`: blocks and statements
//! - `expressions`: expressions, literals and call arguments
//!
//! # Implementation
//!
//! Parser methods are split across multiple files using `impl Parser` blocks,
//! allowing each module to extend the Parser with related functionality while
//! maintaining access to the shared lexer. Every production is public so a
//! fragment of source can be parsed on its own with a fresh parser.

use crate::parser::ast::*;
use crate::parser::error::ParseError;
use crate::parser::lexer::Lexer;
use crate::parser::token::{Token, TokenKind};
use std::io::BufRead;
use tracing::{debug, trace};

/// Recursive descent parser for a Solidity subset
pub struct Parser<R> {
    lexer: Lexer<R>,
}

impl<'a> Parser<&'a [u8]> {
    pub fn new(source: &'a str) -> Self {
        Self::from_reader(source.as_bytes())
    }
}

impl<R: BufRead> Parser<R> {
    /// Parse from any buffered reader. The input is consumed strictly
    /// forward, one token at a time.
    pub fn from_reader(reader: R) -> Self {
        Self {
            lexer: Lexer::from_reader(reader),
        }
    }

    /// Parse a whole source unit.
    ///
    /// Stops at the first error; no partial tree is returned.
    pub fn parse(&mut self) -> Result<SourceUnit, ParseError> {
        let mut unit = SourceUnit::new();

        loop {
            let token = self.peek()?;
            let (kind, position) = (token.kind, token.position);
            trace!(%kind, %position, "top-level dispatch");

            match kind {
                TokenKind::Eos => return Ok(unit),
                TokenKind::Pragma => {
                    let directive = self.parse_pragma_directive()?;
                    store(&mut unit.pragma_directive, directive, "pragma directive");
                }
                TokenKind::Import => {
                    let directive = self.parse_import_directive()?;
                    store(&mut unit.import_directive, directive, "import directive");
                }
                TokenKind::Abstract | TokenKind::Contract => {
                    let contract = self.parse_contract_definition()?;
                    store(&mut unit.contract_definition, contract, "contract definition");
                }
                TokenKind::Function => {
                    let function = self.parse_function_definition()?;
                    store(&mut unit.function_definition, function, "function definition");
                }
                _ => return Err(ParseError::at(position, "invalid token.")),
            }
        }
    }

    // ===== Helper methods =====

    pub(crate) fn peek(&mut self) -> Result<&Token, ParseError> {
        self.lexer.peek()
    }

    pub(crate) fn peek_kind(&mut self) -> Result<TokenKind, ParseError> {
        Ok(self.lexer.peek()?.kind)
    }

    pub(crate) fn scan(&mut self) -> Result<Token, ParseError> {
        self.lexer.scan()
    }

    pub(crate) fn check(&mut self, kind: TokenKind) -> Result<bool, ParseError> {
        Ok(self.peek_kind()? == kind)
    }

    /// Consume the next token if it has the given kind.
    pub(crate) fn accept(&mut self, kind: TokenKind) -> Result<Option<Token>, ParseError> {
        if self.check(kind)? {
            self.scan().map(Some)
        } else {
            Ok(None)
        }
    }

    /// Consume the next token, failing at its position unless it has the
    /// expected kind.
    pub(crate) fn expect(&mut self, kind: TokenKind, message: &str) -> Result<Token, ParseError> {
        let token = self.scan()?;
        if token.kind == kind {
            Ok(token)
        } else {
            Err(ParseError::at(token.position, message))
        }
    }

    pub(crate) fn expect_position(
        &mut self,
        kind: TokenKind,
        message: &str,
    ) -> Result<Position, ParseError> {
        Ok(self.expect(kind, message)?.position)
    }

    /// Error positioned at the next (unconsumed) token.
    pub(crate) fn unexpected<T>(&mut self, message: &str) -> Result<T, ParseError> {
        let position = self.peek()?.position;
        Err(ParseError::at(position, message))
    }
}

/// Keep the latest top-level construct of a kind.
fn store<T: Node>(slot: &mut Option<T>, node: T, what: &str) {
    debug!(pos = %node.pos(), end = %node.end(), "parsed {}", what);
    if let Some(previous) = slot.replace(node) {
        debug!(pos = %previous.pos(), "replaced earlier {}", what);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::error::PosError;
    use pretty_assertions::assert_eq;

    fn pos(line: usize, column: usize) -> Position {
        Position::new(line, column)
    }

    fn parse_error(source: &str) -> PosError {
        match Parser::new(source).parse() {
            Err(ParseError::Syntax(err)) => err,
            other => panic!("expected a syntax error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_empty_source() {
        assert_eq!(Parser::new("").parse().unwrap(), SourceUnit::new());
        assert_eq!(Parser::new(" \n\t ").parse().unwrap(), SourceUnit::new());
    }

    #[test]
    fn test_parse_all_top_level_constructs() {
        let source = concat!(
            "pragma solidity ^0.8.13;\n",
            "import \"lib.sol\";\n",
            "contract A { function f() { return true; } }\n",
            "function g() pure { return 1; }\n",
        );
        let unit = Parser::new(source).parse().unwrap();

        assert_eq!(unit.pragma_directive.unwrap().pos(), pos(1, 1));
        assert_eq!(unit.import_directive.unwrap().pos(), pos(2, 1));
        assert_eq!(unit.contract_definition.unwrap().identifier.text, "A");
        let function = unit.function_definition.unwrap();
        assert_eq!(function.descriptor.text, "g");
        assert_eq!(function.pos(), pos(4, 1));
    }

    #[test]
    fn test_later_construct_replaces_earlier() {
        let unit = Parser::new("pragma a;\npragma b;").parse().unwrap();
        let pragma = unit.pragma_directive.unwrap();
        assert_eq!(pragma.pos(), pos(2, 1));
        assert_eq!(pragma.tokens[0].text, "b");
    }

    #[test]
    fn test_invalid_top_level_token() {
        assert_eq!(parse_error("return;"), PosError::new(pos(1, 1), "invalid token."));
        assert_eq!(
            parse_error("pragma a;\n  }"),
            PosError::new(pos(2, 3), "invalid token.")
        );
    }

    #[test]
    fn test_lexical_error_propagates() {
        assert_eq!(parse_error("pragma \"abc"), PosError::new(pos(1, 12), "not found quote"));
    }

    #[test]
    fn test_expect_reports_offending_token() {
        let mut parser = Parser::new("foo ;");
        let err = parser.expect(TokenKind::LBrace, "not found left brace.").unwrap_err();
        assert_eq!(err.position(), Some(pos(1, 1)));
        assert_eq!(parser.expect(TokenKind::Semicolon, "x").unwrap().position, pos(1, 5));
    }

    #[test]
    fn test_accept() {
        let mut parser = Parser::new("abstract contract");
        assert_eq!(parser.accept(TokenKind::Contract).unwrap(), None);
        assert!(parser.accept(TokenKind::Abstract).unwrap().is_some());
        assert!(parser.check(TokenKind::Contract).unwrap());
    }
}
