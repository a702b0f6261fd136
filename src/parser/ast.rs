// AST (Abstract Syntax Tree) definitions for the Solidity subset

use crate::parser::token::{Token, TokenKind};
use std::fmt;

/// Line/column position of a rune in the source.
///
/// Both fields are 1-based. The all-zero value (also [`Position::default`])
/// is the "unknown" sentinel; see [`Position::is_valid`]. Ordering is
/// lexicographic on line, then column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    pub fn is_valid(&self) -> bool {
        self.line > 0 && self.column > 0
    }

    /// Position of the rune that follows `ch` when `ch` sits at `self`.
    pub fn after(self, ch: char) -> Self {
        if ch == '\n' {
            Position::new(self.line + 1, 1)
        } else {
            Position::new(self.line, self.column + 1)
        }
    }

    /// Inclusive position of the last rune of `text` when it starts at `self`.
    ///
    /// Empty text ends where it starts.
    pub fn last_rune_of(self, text: &str) -> Self {
        let mut end = self;
        let mut chars = text.chars().peekable();
        while let Some(ch) = chars.next() {
            if chars.peek().is_none() {
                break;
            }
            end = end.after(ch);
        }
        end
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_valid() {
            return write!(f, "-");
        }
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Every tree node spans a source range from [`Node::pos`] to [`Node::end`].
///
/// Both ends are inclusive: `end` is the position of the last rune that
/// belongs to the node.
pub trait Node {
    fn pos(&self) -> Position;
    fn end(&self) -> Position;
}

impl Node for Token {
    fn pos(&self) -> Position {
        self.position
    }

    fn end(&self) -> Position {
        Token::end(self)
    }
}

/// An identifier is a token whose kind is accepted in identifier position.
pub type Identifier = Token;

/// An import path is a non-empty string literal token.
pub type Path = Token;

/// Visibility modifier (`public`, `private`, `internal`, `external`).
pub type Visibility = Token;

/// State-mutability modifier (`pure`, `view`, `payable`).
pub type StateMutability = Token;

/// Root of a parsed source file.
///
/// Each top-level construct appears at most once; a later construct of the
/// same kind replaces the earlier one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SourceUnit {
    pub pragma_directive: Option<PragmaDirective>,
    pub import_directive: Option<ImportDirective>,
    pub contract_definition: Option<ContractDefinition>,
    pub function_definition: Option<FunctionDefinition>,
}

impl SourceUnit {
    pub fn new() -> Self {
        SourceUnit::default()
    }
}

// ===== Directives =====

/// `pragma <tokens...> ;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PragmaDirective {
    pub pragma: Position,
    pub tokens: Vec<Token>, // never empty
    pub semicolon: Position,
}

impl Node for PragmaDirective {
    fn pos(&self) -> Position {
        self.pragma
    }

    fn end(&self) -> Position {
        self.semicolon
    }
}

/// `as <identifier>` suffix used by imports and symbol aliases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alias {
    pub as_keyword: Position,
    pub identifier: Identifier,
}

impl Node for Alias {
    fn pos(&self) -> Position {
        self.as_keyword
    }

    fn end(&self) -> Position {
        self.identifier.end()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportDirective {
    pub import: Position,
    pub element: ImportDirectiveElement,
    pub semicolon: Position,
}

impl Node for ImportDirective {
    fn pos(&self) -> Position {
        self.import
    }

    fn end(&self) -> Position {
        self.semicolon
    }
}

/// The three mutually exclusive shapes of an import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportDirectiveElement {
    /// `"path" [as alias]`
    Path(ImportPathElement),
    /// `{a, b as c} from "path"`
    SymbolAliases(ImportSymbolAliasesElement),
    /// `* as alias from "path"`
    Wildcard(ImportWildcardElement),
}

impl Node for ImportDirectiveElement {
    fn pos(&self) -> Position {
        match self {
            ImportDirectiveElement::Path(el) => el.pos(),
            ImportDirectiveElement::SymbolAliases(el) => el.pos(),
            ImportDirectiveElement::Wildcard(el) => el.pos(),
        }
    }

    fn end(&self) -> Position {
        match self {
            ImportDirectiveElement::Path(el) => el.end(),
            ImportDirectiveElement::SymbolAliases(el) => el.end(),
            ImportDirectiveElement::Wildcard(el) => el.end(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportPathElement {
    pub path: Path,
    pub alias: Option<Alias>,
}

impl Node for ImportPathElement {
    fn pos(&self) -> Position {
        self.path.pos()
    }

    fn end(&self) -> Position {
        match &self.alias {
            Some(alias) => alias.end(),
            None => self.path.end(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSymbolAliasesElement {
    pub symbol_aliases: SymbolAliases,
    pub from: Position,
    pub path: Path,
}

impl Node for ImportSymbolAliasesElement {
    fn pos(&self) -> Position {
        self.symbol_aliases.pos()
    }

    fn end(&self) -> Position {
        self.path.end()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportWildcardElement {
    pub mul: Position,
    pub as_keyword: Position,
    pub identifier: Identifier,
    pub from: Position,
    pub path: Path,
}

impl Node for ImportWildcardElement {
    fn pos(&self) -> Position {
        self.mul
    }

    fn end(&self) -> Position {
        self.path.end()
    }
}

/// `{ symbol [as alias], ... }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolAliases {
    pub lbrace: Position,
    pub aliases: Vec<SymbolAlias>, // never empty
    pub commas: Vec<Position>,     // aliases.len() - 1 entries
    pub rbrace: Position,
}

impl Node for SymbolAliases {
    fn pos(&self) -> Position {
        self.lbrace
    }

    fn end(&self) -> Position {
        self.rbrace
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolAlias {
    pub symbol: Identifier,
    pub alias: Option<Alias>,
}

impl Node for SymbolAlias {
    fn pos(&self) -> Position {
        self.symbol.pos()
    }

    fn end(&self) -> Position {
        match &self.alias {
            Some(alias) => alias.end(),
            None => self.symbol.end(),
        }
    }
}

// ===== Contracts =====

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractDefinition {
    pub abstract_keyword: Option<Position>,
    pub contract: Position,
    pub identifier: Identifier,
    pub inheritance: Option<Inheritance>,
    pub lbrace: Position,
    pub body: Vec<ContractBodyElement>,
    pub rbrace: Position,
}

impl Node for ContractDefinition {
    fn pos(&self) -> Position {
        self.abstract_keyword.unwrap_or(self.contract)
    }

    fn end(&self) -> Position {
        self.rbrace
    }
}

/// `is A, B(args), ...`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inheritance {
    pub is_keyword: Position,
    pub specifiers: Vec<InheritanceSpecifier>, // never empty
    pub commas: Vec<Position>,
}

impl Node for Inheritance {
    fn pos(&self) -> Position {
        self.is_keyword
    }

    fn end(&self) -> Position {
        self.specifiers
            .last()
            .map(Node::end)
            .unwrap_or(self.is_keyword)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InheritanceSpecifier {
    pub identifier_path: IdentifierPath,
    pub arguments: Option<CallArgumentList>,
}

impl Node for InheritanceSpecifier {
    fn pos(&self) -> Position {
        self.identifier_path.pos()
    }

    fn end(&self) -> Position {
        match &self.arguments {
            Some(arguments) => arguments.end(),
            None => self.identifier_path.end(),
        }
    }
}

/// Dotted name such as `Base.Inner`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierPath {
    pub elements: Vec<IdentifierPathElement>, // never empty
}

impl Node for IdentifierPath {
    fn pos(&self) -> Position {
        self.elements
            .first()
            .map(|el| el.identifier.pos())
            .unwrap_or_default()
    }

    fn end(&self) -> Position {
        self.elements
            .last()
            .map(|el| el.identifier.end())
            .unwrap_or_default()
    }
}

/// One segment of an [`IdentifierPath`]; every segment but the last carries
/// the position of the period that follows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierPathElement {
    pub identifier: Identifier,
    pub period: Option<Position>,
}

/// Members of a contract body. Only functions are recognised so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractBodyElement {
    Function(FunctionDefinition),
}

impl Node for ContractBodyElement {
    fn pos(&self) -> Position {
        match self {
            ContractBodyElement::Function(function) => function.pos(),
        }
    }

    fn end(&self) -> Position {
        match self {
            ContractBodyElement::Function(function) => function.end(),
        }
    }
}

// ===== Functions =====

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDefinition {
    pub function: Position,
    /// Function name, or one of `fallback`/`receive` and the permitted
    /// identifier-like keywords.
    pub descriptor: Token,
    pub lparen: Position,
    pub rparen: Position,
    pub modifiers: ModifierList,
    pub returns: Option<FunctionReturns>,
    pub body: Block,
}

impl Node for FunctionDefinition {
    fn pos(&self) -> Position {
        self.function
    }

    fn end(&self) -> Position {
        self.body.end()
    }
}

/// Modifiers that follow the argument list. The last one of each kind wins.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModifierList {
    pub visibility: Option<Visibility>,
    pub state_mutability: Option<StateMutability>,
}

/// `returns ( parameter-list )`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionReturns {
    pub returns: Position,
    pub lparen: Position,
    pub parameters: ParameterList,
    pub rparen: Position,
}

impl Node for FunctionReturns {
    fn pos(&self) -> Position {
        self.returns
    }

    fn end(&self) -> Position {
        self.rparen
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterList {
    pub parameters: Vec<Parameter>, // never empty
    pub commas: Vec<Position>,
}

impl Node for ParameterList {
    fn pos(&self) -> Position {
        self.parameters.first().map(Node::pos).unwrap_or_default()
    }

    fn end(&self) -> Position {
        self.parameters.last().map(Node::end).unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub type_name: TypeName,
}

impl Node for Parameter {
    fn pos(&self) -> Position {
        self.type_name.pos()
    }

    fn end(&self) -> Position {
        self.type_name.end()
    }
}

// ===== Types =====

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeName {
    Elementary(ElementaryTypeName),
}

impl Node for TypeName {
    fn pos(&self) -> Position {
        match self {
            TypeName::Elementary(name) => name.pos(),
        }
    }

    fn end(&self) -> Position {
        match self {
            TypeName::Elementary(name) => name.end(),
        }
    }
}

/// Built-in type keyword; `payable` is only ever present after `address`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementaryTypeName {
    pub name: Token,
    pub payable: Option<Token>,
}

impl ElementaryTypeName {
    /// The one or two tokens that make up the type name, in source order.
    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        std::iter::once(&self.name).chain(self.payable.as_ref())
    }

    pub fn is_address_payable(&self) -> bool {
        self.name.kind == TokenKind::Address && self.payable.is_some()
    }
}

impl Node for ElementaryTypeName {
    fn pos(&self) -> Position {
        self.name.pos()
    }

    fn end(&self) -> Position {
        self.payable.as_ref().unwrap_or(&self.name).end()
    }
}

// ===== Statements =====

/// `{ statement }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub lbrace: Position,
    pub statements: Vec<Statement>,
    pub rbrace: Position,
}

impl Node for Block {
    fn pos(&self) -> Position {
        self.lbrace
    }

    fn end(&self) -> Position {
        self.rbrace
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Return(ReturnStatement),
}

impl Node for Statement {
    fn pos(&self) -> Position {
        match self {
            Statement::Return(stmt) => stmt.pos(),
        }
    }

    fn end(&self) -> Position {
        match self {
            Statement::Return(stmt) => stmt.end(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnStatement {
    pub return_keyword: Position,
    pub expression: Expression,
    pub semicolon: Position,
}

impl Node for ReturnStatement {
    fn pos(&self) -> Position {
        self.return_keyword
    }

    fn end(&self) -> Position {
        self.semicolon
    }
}

// ===== Expressions =====

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Literal(Literal),
    Identifier(Identifier),
}

impl Node for Expression {
    fn pos(&self) -> Position {
        match self {
            Expression::Literal(literal) => literal.pos(),
            Expression::Identifier(identifier) => identifier.pos(),
        }
    }

    fn end(&self) -> Position {
        match self {
            Expression::Literal(literal) => literal.end(),
            Expression::Identifier(identifier) => identifier.end(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    String(StringLiteral),
    Boolean(BooleanLiteral),
    Number(NumberLiteral),
}

impl Node for Literal {
    fn pos(&self) -> Position {
        match self {
            Literal::String(lit) => lit.pos(),
            Literal::Boolean(lit) => lit.pos(),
            Literal::Number(lit) => lit.pos(),
        }
    }

    fn end(&self) -> Position {
        match self {
            Literal::String(lit) => lit.end(),
            Literal::Boolean(lit) => lit.end(),
            Literal::Number(lit) => lit.end(),
        }
    }
}

/// Quoted literal, including `unicode"..."` and `hex"..."` forms.
///
/// `value` is the source text with its quotes (and prefix, if any).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringLiteral {
    pub kind: TokenKind,
    pub value: String,
    pub start: Position,
    pub end: Position,
}

impl Node for StringLiteral {
    fn pos(&self) -> Position {
        self.start
    }

    fn end(&self) -> Position {
        self.end
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BooleanLiteral {
    pub token: Token,
}

impl BooleanLiteral {
    pub fn value(&self) -> bool {
        self.token.kind == TokenKind::True
    }
}

impl Node for BooleanLiteral {
    fn pos(&self) -> Position {
        self.token.pos()
    }

    fn end(&self) -> Position {
        self.token.end()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberLiteral {
    pub token: Token,
}

impl Node for NumberLiteral {
    fn pos(&self) -> Position {
        self.token.pos()
    }

    fn end(&self) -> Position {
        self.token.end()
    }
}

// ===== Call arguments =====

/// `( )`, `( expr, ... )` or `( { name: expr, ... } )`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallArgumentList {
    pub lparen: Position,
    pub arguments: CallArguments,
    pub rparen: Position,
}

impl Node for CallArgumentList {
    fn pos(&self) -> Position {
        self.lparen
    }

    fn end(&self) -> Position {
        self.rparen
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallArguments {
    Empty,
    Positional(Vec<PositionalArgument>),
    Named(NamedArguments),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionalArgument {
    pub expression: Expression,
    pub comma: Option<Position>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedArguments {
    pub lbrace: Position,
    pub arguments: Vec<NamedArgument>, // never empty
    pub rbrace: Position,
}

impl Node for NamedArguments {
    fn pos(&self) -> Position {
        self.lbrace
    }

    fn end(&self) -> Position {
        self.rbrace
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedArgument {
    pub name: Identifier,
    pub colon: Position,
    pub expression: Expression,
    pub comma: Option<Position>,
}
