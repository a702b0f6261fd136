//! Expression parsing implementation
//!
//! Expressions are limited to literals and plain identifiers:
//!
//! - String literals: `"..."`, `'...'`, `unicode"..."`, `hex"..."`
//! - Boolean literals: `true`, `false`
//! - Number literals
//! - Identifiers
//!
//! Call argument lists are either positional (`(a, "b")`) or named
//! (`({a: 1, b: "x"})`).

use crate::parser::ast::*;
use crate::parser::error::ParseError;
use crate::parser::parse::Parser;
use crate::parser::token::TokenKind;
use std::io::BufRead;
use tracing::trace;

impl<R: BufRead> Parser<R> {
    pub fn parse_expression(&mut self) -> Result<Expression, ParseError> {
        let kind = self.peek_kind()?;
        trace!(%kind, "expression");

        if is_literal(kind) {
            return Ok(Expression::Literal(self.parse_literal()?));
        }
        if kind.is_identifier_like() {
            return Ok(Expression::Identifier(self.parse_identifier()?));
        }
        self.unexpected("not found expression.")
    }

    /// Parse a string, boolean or number literal.
    ///
    /// A string literal's end is the position of its closing quote, which
    /// may sit on a later line than its opening quote.
    pub fn parse_literal(&mut self) -> Result<Literal, ParseError> {
        let token = self.scan()?;
        match token.kind {
            kind if kind.is_string_literal() => Ok(Literal::String(StringLiteral {
                kind,
                start: token.position,
                end: token.end(),
                value: token.text,
            })),
            TokenKind::True | TokenKind::False => Ok(Literal::Boolean(BooleanLiteral { token })),
            TokenKind::Number => Ok(Literal::Number(NumberLiteral { token })),
            _ => Err(ParseError::at(token.position, "not found string literal quote")),
        }
    }

    /// `()`, `(expr, ...)` or `({name: expr, ...})`
    pub fn parse_call_argument_list(&mut self) -> Result<CallArgumentList, ParseError> {
        let lparen = self.expect_position(TokenKind::LParen, "not found LParen.")?;

        let arguments = match self.peek_kind()? {
            TokenKind::RParen => CallArguments::Empty,
            TokenKind::LBrace => CallArguments::Named(self.parse_named_arguments()?),
            _ => CallArguments::Positional(self.parse_positional_arguments()?),
        };

        let rparen = self.expect_position(TokenKind::RParen, "not found RParen.")?;

        Ok(CallArgumentList {
            lparen,
            arguments,
            rparen,
        })
    }

    fn parse_positional_arguments(&mut self) -> Result<Vec<PositionalArgument>, ParseError> {
        let mut arguments = Vec::new();
        loop {
            let expression = self.parse_expression()?;
            let comma = self.accept(TokenKind::Comma)?.map(|token| token.position);
            let more = comma.is_some();
            arguments.push(PositionalArgument { expression, comma });
            if !more {
                return Ok(arguments);
            }
        }
    }

    fn parse_named_arguments(&mut self) -> Result<NamedArguments, ParseError> {
        let lbrace = self.expect_position(TokenKind::LBrace, "not found LBrace.")?;

        let mut arguments = Vec::new();
        loop {
            let name = self.parse_identifier()?;
            let colon = self.expect_position(TokenKind::Colon, "not found Colon.")?;
            let expression = self.parse_expression()?;
            let comma = self.accept(TokenKind::Comma)?.map(|token| token.position);
            let more = comma.is_some();
            arguments.push(NamedArgument {
                name,
                colon,
                expression,
                comma,
            });
            if !more {
                break;
            }
        }

        let rbrace = self.expect_position(TokenKind::RBrace, "not found RBrace.")?;

        Ok(NamedArguments {
            lbrace,
            arguments,
            rbrace,
        })
    }
}

fn is_literal(kind: TokenKind) -> bool {
    kind.is_string_literal() || matches!(kind, TokenKind::True | TokenKind::False | TokenKind::Number)
}

#[cfg(test)]
mod tests {
    use crate::parser::ast::*;
    use crate::parser::error::{ParseError, PosError};
    use crate::parser::parse::Parser;
    use crate::parser::token::{Token, TokenKind};
    use pretty_assertions::assert_eq;

    fn pos(line: usize, column: usize) -> Position {
        Position::new(line, column)
    }

    fn syntax_error<T: std::fmt::Debug>(result: Result<T, ParseError>) -> PosError {
        match result {
            Err(ParseError::Syntax(err)) => err,
            other => panic!("expected a syntax error, got {:?}", other),
        }
    }

    fn string_literal(source: &str) -> StringLiteral {
        match Parser::new(source).parse_literal().unwrap() {
            Literal::String(lit) => lit,
            other => panic!("expected a string literal, got {:?}", other),
        }
    }

    #[test]
    fn test_string_literal_same_line() {
        let lit = string_literal("\"Hello World!!\";");
        assert_eq!(
            lit,
            StringLiteral {
                kind: TokenKind::NonEmptyStringLiteral,
                value: "\"Hello World!!\"".to_string(),
                start: pos(1, 1),
                end: pos(1, 15),
            }
        );
    }

    #[test]
    fn test_string_literal_across_lines() {
        let lit = string_literal("\"Hello \nWorld!!\";");
        assert_eq!(lit.start, pos(1, 1));
        assert_eq!(lit.end, pos(2, 8));

        let lit = string_literal("  'a\n\nbc'");
        assert_eq!(lit.start, pos(1, 3));
        assert_eq!(lit.end, pos(3, 3));
    }

    #[test]
    fn test_empty_and_prefixed_string_literals() {
        assert_eq!(string_literal("''").kind, TokenKind::EmptyStringLiteral);
        assert_eq!(string_literal("\"\"").end, pos(1, 2));

        let lit = string_literal("unicode\"Hi 😃\"");
        assert_eq!(lit.kind, TokenKind::UnicodeStringLiteral);
        assert_eq!(lit.end, pos(1, 13));

        let lit = string_literal("hex\"deadbeef\"");
        assert_eq!(lit.kind, TokenKind::HexStringLiteral);
        assert_eq!(lit.value, "hex\"deadbeef\"");
    }

    #[test]
    fn test_boolean_and_number_literals() {
        match Parser::new("true").parse_literal().unwrap() {
            Literal::Boolean(lit) => assert!(lit.value()),
            other => panic!("expected a boolean literal, got {:?}", other),
        }
        match Parser::new("false").parse_literal().unwrap() {
            Literal::Boolean(lit) => assert!(!lit.value()),
            other => panic!("expected a boolean literal, got {:?}", other),
        }
        match Parser::new("42").parse_literal().unwrap() {
            Literal::Number(lit) => assert_eq!(lit.token, Token::new(TokenKind::Number, "42", pos(1, 1))),
            other => panic!("expected a number literal, got {:?}", other),
        }
    }

    #[test]
    fn test_literal_error() {
        assert_eq!(
            syntax_error(Parser::new("foo").parse_literal()),
            PosError::new(pos(1, 1), "not found string literal quote")
        );
    }

    #[test]
    fn test_parse_expression() {
        let expr = Parser::new("owner").parse_expression().unwrap();
        assert_eq!(
            expr,
            Expression::Identifier(Token::new(TokenKind::Identifier, "owner", pos(1, 1)))
        );
        assert!(matches!(
            Parser::new("'x'").parse_expression().unwrap(),
            Expression::Literal(Literal::String(_))
        ));
        assert_eq!(
            syntax_error(Parser::new("  ;").parse_expression()),
            PosError::new(pos(1, 3), "not found expression.")
        );
    }

    #[test]
    fn test_empty_call_arguments() {
        let list = Parser::new("( )").parse_call_argument_list().unwrap();
        assert_eq!(list.arguments, CallArguments::Empty);
        assert_eq!(list.pos(), pos(1, 1));
        assert_eq!(list.end(), pos(1, 3));
    }

    #[test]
    fn test_positional_call_arguments() {
        let list = Parser::new("(1, \"x\", y)").parse_call_argument_list().unwrap();
        let CallArguments::Positional(arguments) = &list.arguments else {
            panic!("expected positional arguments");
        };
        let commas: Vec<_> = arguments.iter().map(|arg| arg.comma).collect();
        assert_eq!(commas, [Some(pos(1, 3)), Some(pos(1, 8)), None]);
        assert_eq!(arguments[2].expression.pos(), pos(1, 10));
        assert_eq!(list.rparen, pos(1, 11));
    }

    #[test]
    fn test_named_call_arguments() {
        let list = Parser::new("({a: 1, b: \"x\"})").parse_call_argument_list().unwrap();
        let CallArguments::Named(named) = &list.arguments else {
            panic!("expected named arguments");
        };
        assert_eq!(named.lbrace, pos(1, 2));
        assert_eq!(named.rbrace, pos(1, 15));
        assert_eq!(named.arguments.len(), 2);
        assert_eq!(named.arguments[0].name.text, "a");
        assert_eq!(named.arguments[0].colon, pos(1, 4));
        assert_eq!(named.arguments[0].comma, Some(pos(1, 7)));
        assert_eq!(named.arguments[1].name.text, "b");
        assert_eq!(named.arguments[1].comma, None);
        assert_eq!(list.rparen, pos(1, 16));
    }

    #[test]
    fn test_call_argument_errors() {
        let cases = [
            ("1)", PosError::new(pos(1, 1), "not found LParen.")),
            ("(1 2)", PosError::new(pos(1, 4), "not found RParen.")),
            ("(1,)", PosError::new(pos(1, 4), "not found expression.")),
            ("({})", PosError::new(pos(1, 3), "keyword is not available as identifier.")),
            ("({a 1})", PosError::new(pos(1, 5), "not found Colon.")),
            ("({a: 1 b: 2})", PosError::new(pos(1, 8), "not found RBrace.")),
        ];
        for (source, want) in cases {
            assert_eq!(syntax_error(Parser::new(source).parse_call_argument_list()), want, "{}", source);
        }
    }
}
