//! # Introduction
//!
//! `solparser` turns Solidity source text into a syntax tree in which every
//! node knows the exact line and column range it was parsed from. It is
//! meant for tooling (linters, formatters, analyzers) that needs to point
//! back into the source.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Scanner → Lexer → Parser → AST
//! ```
//!
//! 1. [`parser::scanner`] splits the byte stream into positioned fragments.
//! 2. [`parser::lexer`] classifies fragments into tokens and assembles
//!    quoted literals.
//! 3. [`parser::parse`] drives the lexer one token at a time and builds
//!    the tree; each grammar production is a public method on [`Parser`].
//! 4. [`parser::ast`] holds the node types; all implement [`Node`].
//!
//! Parsing stops at the first error, which carries the position of the
//! offending token:
//!
//! ```
//! use solparser::Parser;
//!
//! let err = Parser::new("contract HelloWorld function").parse().unwrap_err();
//! assert_eq!(err.to_string(), "1:21: not found left brace.");
//! ```
//!
//! The crate logs through [`tracing`] but never installs a subscriber.

pub mod parser;

pub use parser::ast::{Node, Position, SourceUnit};
pub use parser::error::{ParseError, PosError};
pub use parser::lexer::Lexer;
pub use parser::parse::Parser;
pub use parser::scanner::Scanner;
pub use parser::token::{Token, TokenKind};
