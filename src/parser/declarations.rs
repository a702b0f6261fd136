//! Declaration parsing implementation
//!
//! This module handles the top-level constructs of a source unit and the
//! names they are built from:
//!
//! - Pragma directives: `pragma <tokens> ;`
//! - Import directives in their three shapes
//! - Contract definitions, with optional `abstract` and inheritance list
//! - Function definitions and their modifiers
//! - Identifiers and identifier paths
//!
//! # Grammar
//!
//! ```text
//! pragma-directive   ::= "pragma" token+ ";"
//! import-directive   ::= "import" ( path [alias]
//!                                 | symbol-aliases "from" path
//!                                 | "*" alias "from" path ) ";"
//! symbol-aliases     ::= "{" identifier [alias] ( "," identifier [alias] )* "}"
//! alias              ::= "as" identifier
//! contract-def       ::= ["abstract"] "contract" identifier [inheritance]
//!                        "{" function-def* "}"
//! inheritance        ::= "is" inheritance-spec ( "," inheritance-spec )*
//! inheritance-spec   ::= identifier-path [call-argument-list]
//! function-def       ::= "function" descriptor "(" ")" modifier*
//!                        ["returns" "(" parameter-list ")"] block
//! modifier           ::= visibility | state-mutability
//! identifier-path    ::= identifier ( "." identifier )*
//! ```
//!
//! All parsing methods are implemented as public methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::error::ParseError;
use crate::parser::parse::Parser;
use crate::parser::token::{Token, TokenKind};
use std::io::BufRead;
use tracing::trace;

impl<R: BufRead> Parser<R> {
    // ===== Pragma =====

    /// Parse `pragma <tokens> ;`. The tokens between the keyword and the
    /// semicolon are kept raw.
    pub fn parse_pragma_directive(&mut self) -> Result<PragmaDirective, ParseError> {
        let pragma = self.expect_position(TokenKind::Pragma, "not found pragma keyword.")?;

        let mut tokens = Vec::new();
        loop {
            let token = self.scan()?;
            match token.kind {
                TokenKind::Semicolon | TokenKind::Eos if tokens.is_empty() => {
                    return Err(ParseError::at(token.position, "not found pragma tokens."));
                }
                TokenKind::Semicolon => {
                    return Ok(PragmaDirective {
                        pragma,
                        tokens,
                        semicolon: token.position,
                    });
                }
                TokenKind::Eos => {
                    return Err(ParseError::at(token.position, "not found Semicolon."));
                }
                _ => tokens.push(token),
            }
        }
    }

    // ===== Import =====

    pub fn parse_import_directive(&mut self) -> Result<ImportDirective, ParseError> {
        let import = self.expect_position(TokenKind::Import, "not found import keyword.")?;

        let kind = self.peek_kind()?;
        trace!(%kind, "import element");
        let element = match kind {
            TokenKind::NonEmptyStringLiteral => {
                ImportDirectiveElement::Path(self.parse_import_directive_path_element()?)
            }
            TokenKind::LBrace => ImportDirectiveElement::SymbolAliases(
                self.parse_import_directive_symbol_aliases_element()?,
            ),
            TokenKind::Mul => {
                ImportDirectiveElement::Wildcard(self.parse_import_directive_wildcard_element()?)
            }
            _ => return self.unexpected("not found import path, symbol aliases or asterisk."),
        };

        let semicolon = self.expect_position(TokenKind::Semicolon, "not found Semicolon.")?;

        Ok(ImportDirective {
            import,
            element,
            semicolon,
        })
    }

    /// `"path" [as identifier]`
    pub fn parse_import_directive_path_element(&mut self) -> Result<ImportPathElement, ParseError> {
        let path = self.parse_path()?;
        let alias = self.parse_optional_alias()?;
        Ok(ImportPathElement { path, alias })
    }

    /// `{ ... } from "path"`
    pub fn parse_import_directive_symbol_aliases_element(
        &mut self,
    ) -> Result<ImportSymbolAliasesElement, ParseError> {
        let symbol_aliases = self.parse_symbol_aliases()?;
        let from = self.expect_position(TokenKind::From, "not found from keyword.")?;
        let path = self.parse_path()?;
        Ok(ImportSymbolAliasesElement {
            symbol_aliases,
            from,
            path,
        })
    }

    /// `* as identifier from "path"`
    pub fn parse_import_directive_wildcard_element(
        &mut self,
    ) -> Result<ImportWildcardElement, ParseError> {
        let mul = self.expect_position(TokenKind::Mul, "not found asterisk.")?;
        let as_keyword = self.expect_position(TokenKind::As, "not found as keyword.")?;
        let identifier = self.parse_identifier()?;
        let from = self.expect_position(TokenKind::From, "not found from keyword.")?;
        let path = self.parse_path()?;
        Ok(ImportWildcardElement {
            mul,
            as_keyword,
            identifier,
            from,
            path,
        })
    }

    /// Import path: a non-empty string literal.
    pub fn parse_path(&mut self) -> Result<Path, ParseError> {
        self.expect(
            TokenKind::NonEmptyStringLiteral,
            "not found non-empty-string-literal.",
        )
    }

    pub fn parse_symbol_aliases(&mut self) -> Result<SymbolAliases, ParseError> {
        let lbrace = self.expect_position(TokenKind::LBrace, "not found LBrace.")?;

        let mut aliases = vec![self.parse_symbol_alias()?];
        let mut commas = Vec::new();
        while let Some(comma) = self.accept(TokenKind::Comma)? {
            commas.push(comma.position);
            aliases.push(self.parse_symbol_alias()?);
        }

        let rbrace = self.expect_position(TokenKind::RBrace, "not found RBrace.")?;

        Ok(SymbolAliases {
            lbrace,
            aliases,
            commas,
            rbrace,
        })
    }

    pub fn parse_symbol_alias(&mut self) -> Result<SymbolAlias, ParseError> {
        let symbol = self.parse_identifier()?;
        let alias = self.parse_optional_alias()?;
        Ok(SymbolAlias { symbol, alias })
    }

    fn parse_optional_alias(&mut self) -> Result<Option<Alias>, ParseError> {
        let Some(as_keyword) = self.accept(TokenKind::As)? else {
            return Ok(None);
        };
        let identifier = self.parse_identifier()?;
        Ok(Some(Alias {
            as_keyword: as_keyword.position,
            identifier,
        }))
    }

    // ===== Names =====

    /// Parse an identifier, or one of the keywords the language allows as
    /// a name (`from`, `error`, `revert`, `global`). Every other token,
    /// punctuation and end of source included, is a keyword error.
    pub fn parse_identifier(&mut self) -> Result<Identifier, ParseError> {
        let token = self.scan()?;
        if token.kind.is_identifier_like() {
            Ok(token)
        } else {
            Err(ParseError::at(token.position, "keyword is not available as identifier."))
        }
    }

    /// `a.b.c`
    pub fn parse_identifier_path(&mut self) -> Result<IdentifierPath, ParseError> {
        let mut elements = vec![IdentifierPathElement {
            identifier: self.parse_identifier()?,
            period: None,
        }];

        while let Some(period) = self.accept(TokenKind::Period)? {
            if let Some(last) = elements.last_mut() {
                last.period = Some(period.position);
            }
            elements.push(IdentifierPathElement {
                identifier: self.parse_identifier()?,
                period: None,
            });
        }

        Ok(IdentifierPath { elements })
    }

    // ===== Contract =====

    pub fn parse_contract_definition(&mut self) -> Result<ContractDefinition, ParseError> {
        let abstract_keyword = self.accept(TokenKind::Abstract)?.map(|token| token.position);
        let contract = self.expect_position(TokenKind::Contract, "not found contract keyword.")?;
        let identifier = self.parse_identifier()?;

        let inheritance = if self.check(TokenKind::Is)? {
            Some(self.parse_inheritance()?)
        } else {
            None
        };

        let lbrace = self.expect_position(TokenKind::LBrace, "not found left brace.")?;

        let mut body = Vec::new();
        let rbrace = loop {
            match self.peek_kind()? {
                TokenKind::RBrace => break self.scan()?.position,
                TokenKind::Function => {
                    body.push(ContractBodyElement::Function(self.parse_function_definition()?));
                }
                TokenKind::Eos => return self.unexpected("not found right brace."),
                _ => return self.unexpected("not found function keyword."),
            }
        };

        Ok(ContractDefinition {
            abstract_keyword,
            contract,
            identifier,
            inheritance,
            lbrace,
            body,
            rbrace,
        })
    }

    fn parse_inheritance(&mut self) -> Result<Inheritance, ParseError> {
        let is_keyword = self.expect_position(TokenKind::Is, "not found is keyword.")?;

        let mut specifiers = vec![self.parse_inheritance_specifier()?];
        let mut commas = Vec::new();
        while let Some(comma) = self.accept(TokenKind::Comma)? {
            commas.push(comma.position);
            specifiers.push(self.parse_inheritance_specifier()?);
        }

        Ok(Inheritance {
            is_keyword,
            specifiers,
            commas,
        })
    }

    /// `Base` or `Base(args)`
    pub fn parse_inheritance_specifier(&mut self) -> Result<InheritanceSpecifier, ParseError> {
        let identifier_path = self.parse_identifier_path()?;
        let arguments = if self.check(TokenKind::LParen)? {
            Some(self.parse_call_argument_list()?)
        } else {
            None
        };
        Ok(InheritanceSpecifier {
            identifier_path,
            arguments,
        })
    }

    // ===== Function =====

    pub fn parse_function_definition(&mut self) -> Result<FunctionDefinition, ParseError> {
        let function = self.expect_position(TokenKind::Function, "not found function keyword.")?;
        let descriptor = self.parse_function_descriptor()?;

        // Arguments are not supported yet: the parentheses must be empty.
        let lparen = self.expect_position(TokenKind::LParen, "not found LParen.")?;
        let rparen = self.expect_position(TokenKind::RParen, "not found RParen.")?;

        let modifiers = self.parse_modifier_list()?;

        let returns = if self.check(TokenKind::Returns)? {
            Some(self.parse_function_returns()?)
        } else {
            None
        };

        let body = self.parse_block()?;

        Ok(FunctionDefinition {
            function,
            descriptor,
            lparen,
            rparen,
            modifiers,
            returns,
            body,
        })
    }

    fn parse_function_descriptor(&mut self) -> Result<Token, ParseError> {
        match self.peek_kind()? {
            TokenKind::Fallback | TokenKind::Receive => self.scan(),
            _ => self.parse_identifier(),
        }
    }

    /// Visibility and state-mutability keywords in any order. A repeated
    /// kind overwrites the earlier one.
    fn parse_modifier_list(&mut self) -> Result<ModifierList, ParseError> {
        let mut modifiers = ModifierList::default();
        loop {
            let kind = self.peek_kind()?;
            if kind.is_visibility() {
                modifiers.visibility = Some(self.parse_visibility()?);
            } else if kind.is_state_mutability() {
                modifiers.state_mutability = Some(self.parse_state_mutability()?);
            } else {
                return Ok(modifiers);
            }
        }
    }

    fn parse_function_returns(&mut self) -> Result<FunctionReturns, ParseError> {
        let returns = self.expect_position(TokenKind::Returns, "not found returns keyword.")?;
        let lparen = self.expect_position(TokenKind::LParen, "not found LParen.")?;
        let parameters = self.parse_parameter_list()?;
        let rparen = self.expect_position(TokenKind::RParen, "not found RParen.")?;
        Ok(FunctionReturns {
            returns,
            lparen,
            parameters,
            rparen,
        })
    }

    pub fn parse_visibility(&mut self) -> Result<Visibility, ParseError> {
        let token = self.scan()?;
        if token.kind.is_visibility() {
            Ok(token)
        } else {
            Err(ParseError::at(token.position, "not found visibility keyword."))
        }
    }

    pub fn parse_state_mutability(&mut self) -> Result<StateMutability, ParseError> {
        let token = self.scan()?;
        if token.kind.is_state_mutability() {
            Ok(token)
        } else {
            Err(ParseError::at(token.position, "not found state-mutability keyword."))
        }
    }
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

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_parse_pragma_directive() {
        let pragma = Parser::new("pragma solidity ^0.8.13;").parse_pragma_directive().unwrap();
        assert_eq!(pragma.pragma, pos(1, 1));
        assert_eq!(texts(&pragma.tokens), ["solidity", "^", "0.8.13"]);
        assert_eq!(pragma.semicolon, pos(1, 24));
        assert_eq!(pragma.end(), pos(1, 24));
    }

    #[test]
    fn test_parse_pragma_directive_errors() {
        let cases = [
            ("pragma", PosError::new(pos(1, 7), "not found pragma tokens.")),
            ("pragma ;", PosError::new(pos(1, 8), "not found pragma tokens.")),
            ("pragma solidity", PosError::new(pos(1, 16), "not found Semicolon.")),
            ("solidity ^0.8.13;", PosError::new(pos(1, 1), "not found pragma keyword.")),
        ];
        for (source, want) in cases {
            assert_eq!(syntax_error(Parser::new(source).parse_pragma_directive()), want);
        }
    }

    #[test]
    fn test_parse_import_path() {
        let import = Parser::new("import \"a.sol\" as A;").parse_import_directive().unwrap();
        assert_eq!(import.import, pos(1, 1));
        assert_eq!(import.semicolon, pos(1, 20));
        match import.element {
            ImportDirectiveElement::Path(element) => {
                assert_eq!(element.path.text, "\"a.sol\"");
                assert_eq!(element.path.end(), pos(1, 14));
                let alias = element.alias.unwrap();
                assert_eq!(alias.as_keyword, pos(1, 16));
                assert_eq!(alias.identifier.text, "A");
            }
            other => panic!("expected a path element, got {:?}", other),
        }

        let import = Parser::new("import 'b.sol';").parse_import_directive().unwrap();
        match import.element {
            ImportDirectiveElement::Path(element) => assert_eq!(element.alias, None),
            other => panic!("expected a path element, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_import_symbol_aliases() {
        let source = "import {symbol1, symbol2 as alias1} from \"test.sol\";";
        let import = Parser::new(source).parse_import_directive().unwrap();
        let ImportDirectiveElement::SymbolAliases(element) = import.element else {
            panic!("expected symbol aliases");
        };

        let aliases = &element.symbol_aliases;
        assert_eq!(aliases.lbrace, pos(1, 8));
        assert_eq!(aliases.rbrace, pos(1, 35));
        assert_eq!(aliases.commas, [pos(1, 16)]);
        assert_eq!(aliases.aliases.len(), 2);
        assert_eq!(aliases.aliases[0].symbol.text, "symbol1");
        assert_eq!(aliases.aliases[0].alias, None);
        assert_eq!(aliases.aliases[1].symbol.text, "symbol2");
        assert_eq!(aliases.aliases[1].alias.as_ref().unwrap().identifier.text, "alias1");
        assert_eq!(element.from, pos(1, 37));
        assert_eq!(element.path.text, "\"test.sol\"");
        assert_eq!(import.semicolon, pos(1, 52));
    }

    #[test]
    fn test_parse_import_wildcard() {
        let source = "import * as Lib from \"lib.sol\";";
        let import = Parser::new(source).parse_import_directive().unwrap();
        assert_eq!(
            import.element,
            ImportDirectiveElement::Wildcard(ImportWildcardElement {
                mul: pos(1, 8),
                as_keyword: pos(1, 10),
                identifier: Token::new(TokenKind::Identifier, "Lib", pos(1, 13)),
                from: pos(1, 17),
                path: Token::new(TokenKind::NonEmptyStringLiteral, "\"lib.sol\"", pos(1, 22)),
            })
        );
        assert_eq!(import.semicolon, pos(1, 31));
    }

    #[test]
    fn test_parse_import_errors() {
        let cases = [
            ("import ;", PosError::new(pos(1, 8), "not found import path, symbol aliases or asterisk.")),
            ("import \"\";", PosError::new(pos(1, 8), "not found import path, symbol aliases or asterisk.")),
            ("import {a} \"x\";", PosError::new(pos(1, 12), "not found from keyword.")),
            ("import {a b} from \"x\";", PosError::new(pos(1, 11), "not found RBrace.")),
            ("import * from \"x\";", PosError::new(pos(1, 10), "not found as keyword.")),
            ("import \"x\"", PosError::new(pos(1, 11), "not found Semicolon.")),
        ];
        for (source, want) in cases {
            assert_eq!(syntax_error(Parser::new(source).parse_import_directive()), want, "{}", source);
        }
    }

    #[test]
    fn test_parse_path() {
        assert_eq!(
            syntax_error(Parser::new("''").parse_path()),
            PosError::new(pos(1, 1), "not found non-empty-string-literal.")
        );
        assert_eq!(Parser::new("'x'").parse_path().unwrap().text, "'x'");
    }

    #[test]
    fn test_parse_identifier() {
        for word in ["foo", "from", "error", "revert", "global"] {
            assert_eq!(Parser::new(word).parse_identifier().unwrap().text, word);
        }
        assert_eq!(
            syntax_error(Parser::new("contract").parse_identifier()),
            PosError::new(pos(1, 1), "keyword is not available as identifier.")
        );
        for (source, at) in [(" {", pos(1, 2)), ("", pos(1, 1)), ("\"x\"", pos(1, 1))] {
            assert_eq!(
                syntax_error(Parser::new(source).parse_identifier()),
                PosError::new(at, "keyword is not available as identifier."),
                "{:?}",
                source
            );
        }
    }

    #[test]
    fn test_parse_identifier_path() {
        let path = Parser::new("a.b.c").parse_identifier_path().unwrap();
        let periods: Vec<_> = path.elements.iter().map(|el| el.period).collect();
        assert_eq!(periods, [Some(pos(1, 2)), Some(pos(1, 4)), None]);
        assert_eq!(path.pos(), pos(1, 1));
        assert_eq!(path.end(), pos(1, 5));

        assert_eq!(
            syntax_error(Parser::new("a.").parse_identifier_path()),
            PosError::new(pos(1, 3), "keyword is not available as identifier.")
        );
    }

    #[test]
    fn test_parse_contract_definition() {
        let source = "contract HelloWorld { function hello() public pure returns (string) { return \"Hello World!!\"; } }";
        let contract = Parser::new(source).parse_contract_definition().unwrap();

        assert_eq!(contract.abstract_keyword, None);
        assert_eq!(contract.contract, pos(1, 1));
        assert_eq!(contract.identifier.text, "HelloWorld");
        assert_eq!(contract.lbrace, pos(1, 21));
        assert_eq!(contract.rbrace, pos(1, 97));
        assert_eq!(contract.body.len(), 1);

        let ContractBodyElement::Function(function) = &contract.body[0];
        assert_eq!(function.descriptor.text, "hello");
        assert_eq!(function.modifiers.visibility.as_ref().unwrap().text, "public");
        assert_eq!(function.modifiers.state_mutability.as_ref().unwrap().text, "pure");
    }

    #[test]
    fn test_parse_abstract_contract() {
        let source = "abstract contract Foo { function bar() { return \"x\"; } }";
        let contract = Parser::new(source).parse_contract_definition().unwrap();
        assert_eq!(contract.abstract_keyword, Some(pos(1, 1)));
        assert_eq!(contract.contract, pos(1, 10));
        assert_eq!(contract.pos(), pos(1, 1));
    }

    #[test]
    fn test_parse_empty_contract() {
        let contract = Parser::new("contract A {}").parse_contract_definition().unwrap();
        assert!(contract.body.is_empty());
        assert_eq!(contract.end(), pos(1, 13));
    }

    #[test]
    fn test_parse_contract_inheritance() {
        let source = "contract B is A, Base.Inner(1, \"x\") {}";
        let contract = Parser::new(source).parse_contract_definition().unwrap();
        let inheritance = contract.inheritance.unwrap();

        assert_eq!(inheritance.is_keyword, pos(1, 12));
        assert_eq!(inheritance.commas, [pos(1, 16)]);
        assert_eq!(inheritance.specifiers.len(), 2);
        assert_eq!(inheritance.specifiers[0].arguments, None);
        assert_eq!(inheritance.specifiers[0].end(), pos(1, 15));

        let second = &inheritance.specifiers[1];
        assert_eq!(second.identifier_path.elements.len(), 2);
        let arguments = second.arguments.as_ref().unwrap();
        assert_eq!(arguments.lparen, pos(1, 28));
        assert_eq!(arguments.rparen, pos(1, 35));
        assert_eq!(inheritance.end(), pos(1, 35));
        assert_eq!(contract.lbrace, pos(1, 37));
    }

    #[test]
    fn test_parse_contract_errors() {
        let cases = [
            ("contract HelloWorld function", PosError::new(pos(1, 21), "not found left brace.")),
            ("abstract function", PosError::new(pos(1, 10), "not found contract keyword.")),
            ("contract function {}", PosError::new(pos(1, 10), "keyword is not available as identifier.")),
            (
                "contract {\n    function hello() public pure returns (string) {\n        return \"Hello World!!\";\n    }\n}",
                PosError::new(pos(1, 10), "keyword is not available as identifier."),
            ),
            ("contract A { return }", PosError::new(pos(1, 14), "not found function keyword.")),
            ("contract A {", PosError::new(pos(1, 13), "not found right brace.")),
            (
                "contract HelloWorld {\n    function hello() public pure returns (string) {\n        return \"Hello World!!\";\n    }",
                PosError::new(pos(4, 6), "not found right brace."),
            ),
        ];
        for (source, want) in cases {
            assert_eq!(syntax_error(Parser::new(source).parse_contract_definition()), want, "{}", source);
        }
    }

    #[test]
    fn test_parse_function_definition() {
        let source = "function hello() public pure returns (string) { return \"Hello World!!\"; }";
        let function = Parser::new(source).parse_function_definition().unwrap();

        assert_eq!(function.function, pos(1, 1));
        assert_eq!(function.descriptor, Token::new(TokenKind::Identifier, "hello", pos(1, 10)));
        assert_eq!(function.lparen, pos(1, 15));
        assert_eq!(function.rparen, pos(1, 16));

        let returns = function.returns.as_ref().unwrap();
        assert_eq!(returns.returns, pos(1, 30));
        assert_eq!(returns.lparen, pos(1, 38));
        assert_eq!(returns.rparen, pos(1, 45));
        let TypeName::Elementary(name) = &returns.parameters.parameters[0].type_name;
        assert_eq!(name.name.text, "string");

        assert_eq!(function.body.lbrace, pos(1, 47));
        assert_eq!(function.end(), pos(1, 73));
    }

    #[test]
    fn test_parse_function_descriptors() {
        for name in ["fallback", "receive", "from", "error"] {
            let source = format!("function {}() {{ return 1; }}", name);
            let function = Parser::new(&source).parse_function_definition().unwrap();
            assert_eq!(function.descriptor.text, name);
        }
    }

    #[test]
    fn test_modifiers_last_one_wins() {
        let source = "function f() public view external pure { return x; }";
        let function = Parser::new(source).parse_function_definition().unwrap();
        assert_eq!(function.modifiers.visibility.unwrap().text, "external");
        assert_eq!(function.modifiers.state_mutability.unwrap().text, "pure");
        assert_eq!(function.returns, None);
    }

    #[test]
    fn test_parse_function_errors() {
        let cases = [
            ("function f(uint a) { return 1; }", PosError::new(pos(1, 12), "not found RParen.")),
            ("function f { return 1; }", PosError::new(pos(1, 12), "not found LParen.")),
            ("function f() public", PosError::new(pos(1, 20), "not found LBrace.")),
            ("function f() returns string { return 1; }", PosError::new(pos(1, 22), "not found LParen.")),
            ("function return() {}", PosError::new(pos(1, 10), "keyword is not available as identifier.")),
        ];
        for (source, want) in cases {
            assert_eq!(syntax_error(Parser::new(source).parse_function_definition()), want, "{}", source);
        }
    }

    #[test]
    fn test_parse_visibility_and_state_mutability() {
        assert_eq!(Parser::new("internal").parse_visibility().unwrap().kind, TokenKind::Internal);
        assert_eq!(Parser::new("view").parse_state_mutability().unwrap().kind, TokenKind::View);
        assert_eq!(
            syntax_error(Parser::new("pure").parse_visibility()),
            PosError::new(pos(1, 1), "not found visibility keyword.")
        );
        assert_eq!(
            syntax_error(Parser::new("public").parse_state_mutability()),
            PosError::new(pos(1, 1), "not found state-mutability keyword.")
        );
    }
}
