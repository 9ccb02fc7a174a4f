//! Token scanning.
//!
//! The [`Scanner`] walks an input string and yields [`Segment`]s: literal
//! text between tokens, parsed tokens, or a single [`Segment::Malformed`]
//! marker when the input contains a token that cannot be completed.

use crate::util::split_fields;

/// Separates the code list from the styled text inside a token.
pub const CODE_TEXT_SEPARATOR: char = ' ';

/// A parsed `<codes> <text>` payload, borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// The raw, comma-separated code list.
    pub codes: &'a str,
    /// The text to style.
    pub text: &'a str,
}

impl<'a> Token<'a> {
    /// Parses a token payload, splitting on the first separator.
    ///
    /// Returns `None` when there is no separator, i.e. no text to style.
    pub fn parse(payload: &'a str) -> Option<Self> {
        payload
            .split_once(CODE_TEXT_SEPARATOR)
            .map(|(codes, text)| Token { codes, text })
    }

    /// The individual code names, in declaration order.
    pub fn names(&self) -> Vec<&'a str> {
        split_fields(self.codes, ',')
    }
}

/// A piece of scanned input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Literal text outside of any token.
    Text(&'a str),
    /// A complete token. `raw` spans the delimiters too.
    Token { raw: &'a str, token: Token<'a> },
    /// A begin token without a usable end token or payload. Scanning stops.
    Malformed,
}

/// Left-to-right, first-match scanner for delimited tokens.
pub struct Scanner<'a> {
    input: &'a str,
    begin: &'a str,
    end: &'a str,
    pos: usize,
    done: bool,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner. Both delimiters must be non-empty.
    pub fn new(input: &'a str, begin: &'a str, end: &'a str) -> Self {
        Self {
            input,
            begin,
            end,
            pos: 0,
            done: false,
        }
    }

    /// Parses the token whose begin delimiter starts at `self.pos`.
    fn token_at_cursor(&mut self) -> Segment<'a> {
        let start = self.pos;
        let payload_start = start + self.begin.len();

        // The end token is searched from the start of the begin token, so an
        // end delimiter overlapping the begin delimiter is possible.
        let end_pos = match self.input[start..].find(self.end) {
            Some(offset) if start + offset >= payload_start => start + offset,
            _ => return self.malformed(),
        };

        match Token::parse(&self.input[payload_start..end_pos]) {
            Some(token) => {
                self.pos = end_pos + self.end.len();
                Segment::Token {
                    raw: &self.input[start..self.pos],
                    token,
                }
            }
            None => self.malformed(),
        }
    }

    fn malformed(&mut self) -> Segment<'a> {
        self.done = true;
        Segment::Malformed
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.pos >= self.input.len() {
            return None;
        }

        let remaining = &self.input[self.pos..];

        match remaining.find(self.begin) {
            Some(0) => Some(self.token_at_cursor()),
            Some(offset) => {
                self.pos += offset;
                Some(Segment::Text(&remaining[..offset]))
            }
            None => {
                self.pos = self.input.len();
                Some(Segment::Text(remaining))
            }
        }
    }
}
