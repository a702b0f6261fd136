//! Solidity source code parser
//!
//! This module transforms Solidity source text into a positioned Abstract
//! Syntax Tree (AST):
//! - [`scanner`]: Rune classification and raw fragments (text → fragments)
//! - [`lexer`]: Tokenization (fragments → tokens)
//! - [`parse`]: Parsing (tokens → AST), extended by the production modules
//! - [`ast`]: AST node definitions and source positions
//! - [`token`]: Token kinds and the keyword table
//! - [`error`]: Positioned errors
//!
//! # Supported Solidity Subset
//!
//! - Top level: `pragma`, `import` (all three shapes), `contract` and free
//!   `function` definitions
//! - Contracts: `abstract`, inheritance lists, function members
//! - Functions: empty argument list, visibility and state-mutability
//!   modifiers, `returns (...)` with elementary types, a one-statement body
//! - Statements: `return <expression>;`
//! - Expressions: string, boolean and number literals, identifiers
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser with one token of lookahead.
//! No external parser generator dependencies.

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parse;
pub mod scanner;
pub mod token;

mod declarations;
mod expressions;
mod statements;
mod types;
