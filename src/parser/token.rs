//! Token kinds and the canonical keyword table
//!
//! Every reserved word, punctuation glyph and operator has exactly one entry
//! in [`TABLE`]. The lexer classifies fragments through [`TokenKind::lookup`]
//! and nothing else, so the keyword set cannot drift between layers.

use super::ast::Position;
use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::LazyLock;

macro_rules! token_kinds {
    ($($variant:ident => $text:literal,)*) => {
        /// Classification of a [`Token`].
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum TokenKind {
            /// End of source. Its token text is empty.
            Eos,
            /// Any bare word that is not reserved: identifiers, version
            /// strings and other raw text.
            Identifier,
            /// Bare word starting with an ASCII digit.
            Number,
            /// `""` or `''`
            EmptyStringLiteral,
            /// Quoted literal with at least one rune between the quotes.
            NonEmptyStringLiteral,
            /// `unicode"..."`
            UnicodeStringLiteral,
            /// `hex"..."`
            HexStringLiteral,
            $($variant,)*
        }

        /// Every fixed spelling, reserved words and punctuation alike.
        pub const TABLE: &[(&str, TokenKind)] = &[
            $(($text, TokenKind::$variant),)*
        ];
    };
}

token_kinds! {
    // Punctuation
    LParen => "(",
    RParen => ")",
    LBrack => "[",
    RBrack => "]",
    LBrace => "{",
    RBrace => "}",
    Colon => ":",
    Semicolon => ";",
    Period => ".",
    Comma => ",",
    Conditional => "?",
    DoubleArrow => "=>",
    RightArrow => "->",

    // Assignment
    Assign => "=",
    AssignBitOr => "|=",
    AssignBitXor => "^=",
    AssignBitAnd => "&=",
    AssignShl => "<<=",
    AssignSar => ">>=",
    AssignShr => ">>>=",
    AssignAdd => "+=",
    AssignSub => "-=",
    AssignMul => "*=",
    AssignDiv => "/=",
    AssignMod => "%=",

    // Binary and unary operators
    Or => "||",
    And => "&&",
    BitOr => "|",
    BitXor => "^",
    BitAnd => "&",
    BitNot => "~",
    Shl => "<<",
    Sar => ">>",
    Shr => ">>>",
    Add => "+",
    Sub => "-",
    Mul => "*",
    Div => "/",
    Mod => "%",
    Exp => "**",
    Equal => "==",
    NotEqual => "!=",
    LessThan => "<",
    GreaterThan => ">",
    LessThanOrEqual => "<=",
    GreaterThanOrEqual => ">=",
    LessMinus => "<-",
    GreaterMinus => ">-",
    Not => "!",
    Inc => "++",
    Dec => "--",

    // Reserved for future use
    After => "after",
    Alias => "alias",
    Apply => "apply",
    Auto => "auto",
    Byte => "byte",
    Case => "case",
    Copyof => "copyof",
    Default => "default",
    Define => "define",
    Final => "final",
    Implements => "implements",
    In => "in",
    Inline => "inline",
    Let => "let",
    Macro => "macro",
    Match => "match",
    Mutable => "mutable",
    Null => "null",
    Of => "of",
    Partial => "partial",
    Promise => "promise",
    Reference => "reference",
    Relocatable => "relocatable",
    Sealed => "sealed",
    Sizeof => "sizeof",
    Static => "static",
    Supports => "supports",
    Switch => "switch",
    Typedef => "typedef",
    Typeof => "typeof",
    Var => "var",

    // Keywords
    Abstract => "abstract",
    Address => "address",
    Anonymous => "anonymous",
    As => "as",
    Assembly => "assembly",
    Bool => "bool",
    Break => "break",
    Bytes => "bytes",
    Calldata => "calldata",
    Catch => "catch",
    Constant => "constant",
    Constructor => "constructor",
    Continue => "continue",
    Contract => "contract",
    Delete => "delete",
    Do => "do",
    Else => "else",
    Emit => "emit",
    Enum => "enum",
    Error => "error",
    Event => "event",
    External => "external",
    Fallback => "fallback",
    False => "false",
    Fixed => "fixed",
    For => "for",
    From => "from",
    Function => "function",
    Global => "global",
    Hex => "hex",
    If => "if",
    Immutable => "immutable",
    Import => "import",
    Indexed => "indexed",
    Int => "int",
    Interface => "interface",
    Internal => "internal",
    Is => "is",
    Library => "library",
    Mapping => "mapping",
    Memory => "memory",
    Modifier => "modifier",
    New => "new",
    Override => "override",
    Payable => "payable",
    Pragma => "pragma",
    Private => "private",
    Public => "public",
    Pure => "pure",
    Receive => "receive",
    Return => "return",
    Returns => "returns",
    Revert => "revert",
    Storage => "storage",
    String => "string",
    Struct => "struct",
    True => "true",
    Try => "try",
    Type => "type",
    Ufixed => "ufixed",
    Uint => "uint",
    Unchecked => "unchecked",
    Unicode => "unicode",
    Using => "using",
    View => "view",
    Virtual => "virtual",
    While => "while",
}

static LOOKUP: LazyLock<FxHashMap<&'static str, TokenKind>> =
    LazyLock::new(|| TABLE.iter().copied().collect());

impl TokenKind {
    /// Exact-match lookup of a fixed spelling.
    pub fn lookup(text: &str) -> Option<TokenKind> {
        LOOKUP.get(text).copied()
    }

    /// Classify a bare word or operator fragment.
    ///
    /// Reserved spellings map to their own kind; sized elementary types
    /// (`uint256`, `bytes32`, `fixed128x18`) map to their family kind;
    /// words starting with a digit are numbers; everything else is an
    /// identifier.
    pub fn classify(text: &str) -> TokenKind {
        if let Some(kind) = TokenKind::lookup(text) {
            return kind;
        }
        if let Some(kind) = sized_elementary_kind(text) {
            return kind;
        }
        if text.starts_with(|ch: char| ch.is_ascii_digit()) {
            return TokenKind::Number;
        }
        TokenKind::Identifier
    }

    /// The fixed spelling of this kind, if it has one.
    pub fn as_str(&self) -> Option<&'static str> {
        TABLE
            .iter()
            .find(|(_, kind)| kind == self)
            .map(|(text, _)| *text)
    }

    /// Kinds accepted wherever an identifier is expected.
    pub fn is_identifier_like(&self) -> bool {
        matches!(
            self,
            TokenKind::Identifier
                | TokenKind::From
                | TokenKind::Error
                | TokenKind::Revert
                | TokenKind::Global
        )
    }

    pub fn is_elementary_type(&self) -> bool {
        matches!(
            self,
            TokenKind::Address
                | TokenKind::Bool
                | TokenKind::String
                | TokenKind::Bytes
                | TokenKind::Byte
                | TokenKind::Int
                | TokenKind::Uint
                | TokenKind::Fixed
                | TokenKind::Ufixed
        )
    }

    pub fn is_visibility(&self) -> bool {
        matches!(
            self,
            TokenKind::Public | TokenKind::Private | TokenKind::Internal | TokenKind::External
        )
    }

    pub fn is_state_mutability(&self) -> bool {
        matches!(self, TokenKind::Pure | TokenKind::View | TokenKind::Payable)
    }

    /// Kinds produced for quoted literals.
    pub fn is_string_literal(&self) -> bool {
        matches!(
            self,
            TokenKind::EmptyStringLiteral
                | TokenKind::NonEmptyStringLiteral
                | TokenKind::UnicodeStringLiteral
                | TokenKind::HexStringLiteral
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Eos => write!(f, "end of source"),
            TokenKind::Identifier => write!(f, "identifier"),
            TokenKind::Number => write!(f, "number"),
            TokenKind::EmptyStringLiteral => write!(f, "empty-string-literal"),
            TokenKind::NonEmptyStringLiteral => write!(f, "non-empty-string-literal"),
            TokenKind::UnicodeStringLiteral => write!(f, "unicode-string-literal"),
            TokenKind::HexStringLiteral => write!(f, "hex-string-literal"),
            kind => match kind.as_str() {
                Some(text) => write!(f, "'{}'", text),
                None => write!(f, "{:?}", kind),
            },
        }
    }
}

/// `intN`, `uintN`, `bytesN`, `fixedMxN` and `ufixedMxN`.
fn sized_elementary_kind(text: &str) -> Option<TokenKind> {
    let bits = |digits: &str| match digits.parse::<u32>() {
        Ok(n) => (8..=256).contains(&n) && n % 8 == 0 && !digits.starts_with('0'),
        Err(_) => false,
    };
    let fixed = |suffix: &str| match suffix.split_once('x') {
        Some((m, n)) => {
            bits(m)
                && matches!(n.parse::<u32>(), Ok(d) if d <= 80)
                && (n == "0" || !n.starts_with('0'))
        }
        None => false,
    };

    if let Some(digits) = text.strip_prefix("uint") {
        return bits(digits).then_some(TokenKind::Uint);
    }
    if let Some(digits) = text.strip_prefix("int") {
        return bits(digits).then_some(TokenKind::Int);
    }
    if let Some(digits) = text.strip_prefix("bytes") {
        let valid = matches!(digits.parse::<u32>(), Ok(n) if (1..=32).contains(&n))
            && !digits.starts_with('0');
        return valid.then_some(TokenKind::Bytes);
    }
    if let Some(suffix) = text.strip_prefix("ufixed") {
        return fixed(suffix).then_some(TokenKind::Ufixed);
    }
    if let Some(suffix) = text.strip_prefix("fixed") {
        return fixed(suffix).then_some(TokenKind::Fixed);
    }
    None
}

/// A classified, positioned lexical unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub position: Position,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, position: Position) -> Self {
        Self {
            kind,
            text: text.into(),
            position,
        }
    }

    /// Classify `text` and position it.
    pub fn classified(text: impl Into<String>, position: Position) -> Self {
        let text = text.into();
        Self {
            kind: TokenKind::classify(&text),
            text,
            position,
        }
    }

    pub fn eos(position: Position) -> Self {
        Self::new(TokenKind::Eos, "", position)
    }

    pub fn is_eos(&self) -> bool {
        self.kind == TokenKind::Eos
    }

    /// Inclusive position of the last rune of this token.
    pub fn end(&self) -> Position {
        self.position.last_rune_of(&self.text)
    }
}
