//! Character scanner
//!
//! Splits a UTF-8 byte stream into positioned raw [`Fragment`]s:
//!
//! - a single operator glyph, merged greedily with the runes that follow it
//!   when they form a multi-character operator (`>>>=`, `=>`, `+=`, ...)
//! - a single newline
//! - a maximal run of other whitespace
//! - a maximal run of word runes (identifiers, numbers, version strings)
//!
//! The scanner never classifies anything; that is the lexer's job. It pulls
//! runes from the reader only as far as the current fragment requires.

use super::ast::Position;
use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Unicode white space, excluding the newline which is always its own
/// fragment.
pub fn is_space(ch: char) -> bool {
    if ch <= '\u{00FF}' {
        return matches!(
            ch,
            ' ' | '\t' | '\u{000B}' | '\u{000C}' | '\r' | '\u{0085}' | '\u{00A0}'
        );
    }
    if ('\u{2000}'..='\u{200A}').contains(&ch) {
        return true;
    }
    matches!(
        ch,
        '\u{1680}' | '\u{2028}' | '\u{2029}' | '\u{202F}' | '\u{205F}' | '\u{3000}'
    )
}

/// Runes that always end a word, even without surrounding whitespace.
pub fn is_split_symbol(ch: char) -> bool {
    matches!(
        ch,
        '(' | ')'
            | '['
            | ']'
            | '{'
            | '}'
            | ':'
            | ';'
            | '?'
            | '='
            | '|'
            | '^'
            | '&'
            | '<'
            | '>'
            | '+'
            | '-'
            | '*'
            | '/'
            | '%'
            | ','
            | '!'
            | '~'
            | '"'
            | '\''
            | '\\'
    )
}

/// Split symbols that may start an operator of two or more runes.
pub fn is_multi_length_operator_symbol(ch: char) -> bool {
    matches!(
        ch,
        '=' | '|' | '^' | '&' | '+' | '-' | '*' | '/' | '%' | '<' | '>' | '!'
    )
}

fn is_word_rune(ch: char) -> bool {
    ch != '\n' && !is_split_symbol(ch) && !is_space(ch)
}

/// A raw lexeme and the position of its first rune.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub position: Position,
    pub text: String,
}

impl Fragment {
    pub fn new(position: Position, text: impl Into<String>) -> Self {
        Self {
            position,
            text: text.into(),
        }
    }

    pub fn is_newline(&self) -> bool {
        self.text == "\n"
    }

    /// A whitespace run; never a newline.
    pub fn is_space(&self) -> bool {
        self.text.chars().next().is_some_and(is_space)
    }

    /// Whitespace of either kind, which the lexer discards.
    pub fn is_blank(&self) -> bool {
        self.is_newline() || self.is_space()
    }

    pub fn is_quote(&self) -> bool {
        self.text == "\"" || self.text == "'"
    }

    /// Position of the rune right after this fragment.
    pub fn next_position(&self) -> Position {
        self.text.chars().fold(self.position, Position::after)
    }
}

/// Pull-based fragment scanner with one fragment of lookahead.
pub struct Scanner<R> {
    reader: R,
    /// Runes decoded but not yet consumed by a fragment.
    pending: VecDeque<char>,
    /// Position of `pending[0]` (or of end of input).
    position: Position,
    peeked: Option<Fragment>,
}

impl<'a> Scanner<&'a [u8]> {
    /// Create a scanner over an in-memory source string.
    pub fn new(source: &'a str) -> Self {
        Self::from_reader(source.as_bytes())
    }
}

impl<R: BufRead> Scanner<R> {
    pub fn from_reader(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            position: Position::new(1, 1),
            peeked: None,
        }
    }

    /// Position where the next fragment starts, or the end-of-input
    /// position once everything has been consumed.
    pub fn position(&self) -> Position {
        match &self.peeked {
            Some(fragment) => fragment.position,
            None => self.position,
        }
    }

    /// Consume the next fragment. `Ok(None)` signals end of input.
    pub fn scan(&mut self) -> io::Result<Option<Fragment>> {
        if let Some(fragment) = self.peeked.take() {
            return Ok(Some(fragment));
        }
        self.next_fragment()
    }

    /// Look at the next fragment without consuming it.
    pub fn peek(&mut self) -> io::Result<Option<&Fragment>> {
        if self.peeked.is_none() {
            self.peeked = self.next_fragment()?;
        }
        Ok(self.peeked.as_ref())
    }

    fn next_fragment(&mut self) -> io::Result<Option<Fragment>> {
        let Some(first) = self.peek_char(0)? else {
            return Ok(None);
        };
        let start = self.position;

        let mut text = String::new();
        if is_split_symbol(first) {
            let len = self.operator_length(first)?;
            for _ in 0..len {
                self.bump_into(&mut text);
            }
        } else if first == '\n' || first == '.' {
            self.bump_into(&mut text);
        } else if is_space(first) {
            while self.peek_char(0)?.is_some_and(is_space) {
                self.bump_into(&mut text);
            }
        } else {
            // Identifier-like words stop at a period so that paths such as
            // `a.b` split; numbers and version strings keep their dots.
            let dotted = first.is_ascii_digit();
            while let Some(ch) = self.peek_char(0)? {
                if !is_word_rune(ch) || (ch == '.' && !dotted) {
                    break;
                }
                self.bump_into(&mut text);
            }
        }

        Ok(Some(Fragment::new(start, text)))
    }

    /// Length in runes of the longest operator starting with `first`.
    fn operator_length(&mut self, first: char) -> io::Result<usize> {
        if !is_multi_length_operator_symbol(first) {
            return Ok(1);
        }
        let Some(second) = self.peek_char(1)? else {
            return Ok(1);
        };

        let len = match (first, second) {
            ('<', '<') => match self.peek_char(2)? {
                Some('=') => 3,
                _ => 2,
            },
            ('>', '>') => match self.peek_char(2)? {
                Some('=') => 3,
                Some('>') => match self.peek_char(3)? {
                    Some('=') => 4,
                    _ => 3,
                },
                _ => 2,
            },
            ('=', '>' | '=')
            | ('-', '>' | '=' | '-')
            | ('|', '=' | '|')
            | ('^', '=')
            | ('&', '=' | '&')
            | ('+', '=' | '+')
            | ('*', '=' | '*')
            | ('/', '=')
            | ('%', '=')
            | ('!', '=')
            | ('<', '=' | '-')
            | ('>', '=' | '-') => 2,
            _ => 1,
        };
        Ok(len)
    }

    fn bump_into(&mut self, text: &mut String) {
        if let Some(ch) = self.pending.pop_front() {
            self.position = self.position.after(ch);
            text.push(ch);
        }
    }

    /// The rune `n` places ahead of the current one, decoding as needed.
    fn peek_char(&mut self, n: usize) -> io::Result<Option<char>> {
        while self.pending.len() <= n {
            match self.read_char()? {
                Some(ch) => self.pending.push_back(ch),
                None => return Ok(None),
            }
        }
        Ok(self.pending.get(n).copied())
    }

    fn read_char(&mut self) -> io::Result<Option<char>> {
        let mut bytes = [0u8; 4];
        let mut len = 0;
        let mut width = 1;

        while len < width {
            let buf = match self.reader.fill_buf() {
                Ok(buf) => buf,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(err),
            };
            if buf.is_empty() {
                if len == 0 {
                    return Ok(None);
                }
                return Err(invalid_utf8());
            }
            if len == 0 {
                width = utf8_width(buf[0]).ok_or_else(invalid_utf8)?;
            }
            let take = (width - len).min(buf.len());
            bytes[len..len + take].copy_from_slice(&buf[..take]);
            self.reader.consume(take);
            len += take;
        }

        std::str::from_utf8(&bytes[..width])
            .ok()
            .and_then(|s| s.chars().next())
            .map(Some)
            .ok_or_else(invalid_utf8)
    }
}

fn utf8_width(first: u8) -> Option<usize> {
    match first {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}

fn invalid_utf8() -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, "source is not valid UTF-8")
}
