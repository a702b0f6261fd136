//! Error types shared by the lexer and the parser

use super::ast::Position;
use std::io;
use thiserror::Error;

/// A lexical or syntactic error at a source position.
///
/// The position is the one of the offending token, not of the production
/// that was being parsed. An invalid position is left out of the message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}{}", location(.position), .message)]
pub struct PosError {
    pub position: Position,
    pub message: String,
}

impl PosError {
    pub fn new(position: Position, message: impl Into<String>) -> Self {
        Self {
            position,
            message: message.into(),
        }
    }
}

fn location(position: &Position) -> String {
    if position.is_valid() {
        format!("{}: ", position)
    } else {
        String::new()
    }
}

/// Error returned by every lexer and parser operation.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("{0}")]
    Syntax(#[from] PosError),
    /// The underlying reader failed; carries no source position.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl ParseError {
    pub(crate) fn at(position: Position, message: impl Into<String>) -> Self {
        ParseError::Syntax(PosError::new(position, message))
    }

    pub fn position(&self) -> Option<Position> {
        self.as_pos_error().map(|err| err.position)
    }

    pub fn as_pos_error(&self) -> Option<&PosError> {
        match self {
            ParseError::Syntax(err) => Some(err),
            ParseError::Io(_) => None,
        }
    }
}
