//! Lexer (tokenizer) for Solidity source code
//!
//! Pulls raw fragments from the [`Scanner`], drops whitespace, and turns the
//! rest into classified [`Token`]s. Quoted literals span several fragments:
//! once an opening quote is seen the lexer keeps scanning until the matching
//! quote comes back, so a string literal reaches the parser as one token.
//!
//! The lexer is permissive: any bare word that is not reserved becomes an
//! [`TokenKind::Identifier`] (or [`TokenKind::Number`]), and the parser
//! decides whether it is acceptable where it appears.

use super::ast::Position;
use super::error::ParseError;
use super::scanner::{Fragment, Scanner};
use super::token::{Token, TokenKind};
use std::io::BufRead;

/// Tokenizer with a single token of lookahead.
pub struct Lexer<R> {
    scanner: Scanner<R>,
    peeked: Option<Token>,
}

impl<'a> Lexer<&'a [u8]> {
    /// Create a lexer for the given source string.
    pub fn new(source: &'a str) -> Self {
        Self::from_reader(source.as_bytes())
    }
}

impl<R: BufRead> Lexer<R> {
    pub fn from_reader(reader: R) -> Self {
        Self {
            scanner: Scanner::from_reader(reader),
            peeked: None,
        }
    }

    /// Consume the next token. At end of source this keeps returning an
    /// [`TokenKind::Eos`] token rather than an error.
    pub fn scan(&mut self) -> Result<Token, ParseError> {
        if let Some(token) = self.peeked.take() {
            return Ok(token);
        }
        self.next_token()
    }

    /// Look at the next token without consuming it.
    pub fn peek(&mut self) -> Result<&Token, ParseError> {
        let token = match self.peeked.take() {
            Some(token) => token,
            None => self.next_token()?,
        };
        Ok(self.peeked.insert(token))
    }

    /// Tokenize the rest of the input, including the final `Eos` token.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, ParseError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.scan()?;
            let done = token.is_eos();
            tokens.push(token);
            if done {
                return Ok(tokens);
            }
        }
    }

    fn next_token(&mut self) -> Result<Token, ParseError> {
        let fragment = loop {
            match self.scanner.scan()? {
                None => return Ok(Token::eos(self.scanner.position())),
                Some(fragment) if fragment.is_blank() => continue,
                Some(fragment) => break fragment,
            }
        };

        if fragment.is_quote() {
            return self.string_literal(fragment);
        }

        match fragment.text.as_str() {
            "\\" => Err(ParseError::at(fragment.position, "unexpected backslash.")),
            "unicode" => self.prefixed_literal(fragment, TokenKind::UnicodeStringLiteral),
            "hex" => self.prefixed_literal(fragment, TokenKind::HexStringLiteral),
            _ => Ok(Token::classified(fragment.text, fragment.position)),
        }
    }

    /// Plain `"..."` or `'...'` literal.
    fn string_literal(&mut self, open: Fragment) -> Result<Token, ParseError> {
        let position = open.position;
        let text = self.quoted(open)?;
        let kind = if text.chars().count() == 2 {
            TokenKind::EmptyStringLiteral
        } else {
            TokenKind::NonEmptyStringLiteral
        };
        Ok(Token::new(kind, text, position))
    }

    /// `unicode"..."` or `hex"..."`; the quote must touch the prefix.
    ///
    /// A prefix that is not followed by a quote at all is an ordinary word.
    fn prefixed_literal(&mut self, prefix: Fragment, kind: TokenKind) -> Result<Token, ParseError> {
        let next = self
            .scanner
            .peek()?
            .map(|fragment| (fragment.position, fragment.is_quote(), fragment.is_blank()));

        let open = match next {
            Some((position, true, _)) if position == prefix.next_position() => self.expect_fragment()?,
            Some((blank, _, true)) => {
                while self.scanner.peek()?.is_some_and(Fragment::is_blank) {
                    self.scanner.scan()?;
                }
                if self.scanner.peek()?.is_some_and(Fragment::is_quote) {
                    return Err(ParseError::at(
                        blank,
                        format!("not found quote right after {}.", prefix.text),
                    ));
                }
                return Ok(Token::classified(prefix.text, prefix.position));
            }
            _ => return Ok(Token::classified(prefix.text, prefix.position)),
        };
        let quote_position = open.position;
        let body = self.quoted(open)?;

        if kind == TokenKind::HexStringLiteral && !is_hex_body(&body[1..body.len() - 1]) {
            return Err(ParseError::at(quote_position, "invalid HexString format"));
        }

        Ok(Token::new(kind, prefix.text + &body, prefix.position))
    }

    /// Collect fragments from an opening quote up to and including the
    /// matching closing quote. A backslash takes the next fragment verbatim.
    fn quoted(&mut self, open: Fragment) -> Result<String, ParseError> {
        if !open.is_quote() {
            return Err(ParseError::at(open.position, "not found \" or '"));
        }

        let quote = open.text.clone();
        let mut text = open.text;
        loop {
            let fragment = self.expect_fragment()?;
            text.push_str(&fragment.text);
            if fragment.text == "\\" {
                let escaped = self.expect_fragment()?;
                text.push_str(&escaped.text);
            } else if fragment.text == quote {
                return Ok(text);
            }
        }
    }

    fn expect_fragment(&mut self) -> Result<Fragment, ParseError> {
        match self.scanner.scan()? {
            Some(fragment) => Ok(fragment),
            None => Err(ParseError::at(self.scanner.position(), "not found quote")),
        }
    }

    /// Position where the next token will start scanning from.
    pub fn position(&self) -> Position {
        match &self.peeked {
            Some(token) => token.position,
            None => self.scanner.position(),
        }
    }
}

/// Even-length runs of hex digits, optionally joined by single underscores.
fn is_hex_body(body: &str) -> bool {
    body.is_empty()
        || body.split('_').all(|pair| {
            !pair.is_empty() && pair.len() % 2 == 0 && pair.chars().all(|ch| ch.is_ascii_hexdigit())
        })
}
