//! Lexer (tokenizer) for C++ source code
//!
//! Converts raw source text into a flat [`Token`] stream consumed by the parser.
//!
//! The scanner tries its checks in a fixed priority order and commits to the
//! first one that matches at the current position. The order matters:
//! floats are scanned before integers so `3.14` stays whole, `<<`/`>>` are
//! scanned before the relational operators, and the two-character operators
//! (`==`, `!=`, `<=`, `>=`, `++`, `--`) before their one-character prefixes.

use super::ast::SourceLocation;
use log::debug;
use rustc_hash::FxHashSet;
use std::fmt;
use thiserror::Error;

/// Reserved words; identifiers spelled like these become [`TokenKind::Keyword`].
pub const KEYWORDS: [&str; 12] = [
    "int",
    "float",
    "double",
    "char",
    "if",
    "else",
    "for",
    "while",
    "return",
    "void",
    "using",
    "namespace",
];

/// Token classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Keyword,
    Identifier,
    Number,
    Float,
    String,
    Operator,
    Delimiter,
    /// `<<` and `>>`, only meaningful after `cout`/`cin`
    ShiftOp,
    /// A whole `#include ...` line
    Include,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Keyword => "keyword",
            TokenKind::Identifier => "identifier",
            TokenKind::Number => "number",
            TokenKind::Float => "float",
            TokenKind::String => "string literal",
            TokenKind::Operator => "operator",
            TokenKind::Delimiter => "delimiter",
            TokenKind::ShiftOp => "shift operator",
            TokenKind::Include => "include directive",
        };
        f.write_str(name)
    }
}

/// A classified lexeme with the position it started at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub location: SourceLocation,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            location,
        }
    }

    pub fn line(&self) -> usize {
        self.location.line
    }

    /// True when this token has the given kind and exact text.
    pub fn is(&self, kind: TokenKind, lexeme: &str) -> bool {
        self.kind == kind && self.lexeme == lexeme
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}'", self.kind, self.lexeme)
    }
}

/// Lexer error: a character no lexical rule accepts
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "Lexer error at line {}, column {}: unexpected character '{}'",
    .location.line,
    .location.column,
    .character.escape_debug()
)]
pub struct LexError {
    pub character: char,
    pub location: SourceLocation,
}

impl LexError {
    pub fn line(&self) -> usize {
        self.location.line
    }
}

/// Lexer for C++ source code
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
    keywords: FxHashSet<&'static str>,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
            keywords: KEYWORDS.iter().copied().collect(),
        }
    }

    /// Tokenize the entire input
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace_and_comments()?;

            let Some(ch) = self.peek() else {
                break;
            };

            tokens.push(self.next_token(ch)?);
        }

        debug!(
            "tokenized {} tokens over {} line(s)",
            tokens.len(),
            self.line
        );
        Ok(tokens)
    }

    /// Scan the token starting with `ch` (not yet consumed)
    fn next_token(&mut self, ch: char) -> Result<Token, LexError> {
        let loc = self.current_location();

        match ch {
            '#' => self.include_directive(),

            '"' => self.string_literal(),

            '0'..='9' => Ok(self.number_literal()),

            '<' | '>' if self.peek_ahead(1) == Some(ch) => {
                Ok(Token::new(TokenKind::ShiftOp, self.take(2), loc))
            }

            '=' | '!' | '<' | '>' if self.peek_ahead(1) == Some('=') => {
                Ok(Token::new(TokenKind::Operator, self.take(2), loc))
            }
            '+' | '-' if self.peek_ahead(1) == Some(ch) => {
                Ok(Token::new(TokenKind::Operator, self.take(2), loc))
            }
            '+' | '-' | '*' | '/' | '%' | '=' | '<' | '>' => {
                Ok(Token::new(TokenKind::Operator, self.take(1), loc))
            }

            ';' | ',' | '(' | ')' | '{' | '}' => {
                Ok(Token::new(TokenKind::Delimiter, self.take(1), loc))
            }

            'a'..='z' | 'A'..='Z' | '_' => Ok(self.identifier_or_keyword()),

            _ => Err(LexError {
                character: ch,
                location: loc,
            }),
        }
    }

    /// `#include ...` up to (not including) the end of the line
    fn include_directive(&mut self) -> Result<Token, LexError> {
        let loc = self.current_location();
        let rest: String = self.input[self.position..]
            .iter()
            .take_while(|&&c| c != '\n')
            .collect();

        if !rest.starts_with("#include") {
            return Err(LexError {
                character: '#',
                location: loc,
            });
        }

        let lexeme = self.take(rest.chars().count());
        Ok(Token::new(TokenKind::Include, lexeme.trim_end(), loc))
    }

    /// Parse string literal; the lexeme keeps its quotes and escapes verbatim
    fn string_literal(&mut self) -> Result<Token, LexError> {
        let loc = self.current_location();
        let unterminated = LexError {
            character: '"',
            location: loc,
        };

        let mut literal = String::new();
        literal.push('"');
        self.advance(); // opening quote

        loop {
            match self.peek() {
                None | Some('\n') => return Err(unterminated),
                Some('"') => {
                    self.advance();
                    literal.push('"');
                    return Ok(Token::new(TokenKind::String, literal, loc));
                }
                Some('\\') => {
                    self.advance();
                    literal.push('\\');
                    match self.peek() {
                        None | Some('\n') => return Err(unterminated),
                        Some(escaped) => {
                            self.advance();
                            literal.push(escaped);
                        }
                    }
                }
                Some(c) => {
                    self.advance();
                    literal.push(c);
                }
            }
        }
    }

    /// Parse numeric literal: `digits.digits` as a float, else `digits`
    fn number_literal(&mut self) -> Token {
        let loc = self.current_location();
        let mut text = self.take_while(|c| c.is_ascii_digit());

        let has_fraction = self.peek() == Some('.')
            && self.peek_ahead(1).is_some_and(|c| c.is_ascii_digit());
        if !has_fraction {
            return Token::new(TokenKind::Number, text, loc);
        }

        text.push_str(&self.take(1));
        text.push_str(&self.take_while(|c| c.is_ascii_digit()));
        Token::new(TokenKind::Float, text, loc)
    }

    /// Parse identifier or keyword
    fn identifier_or_keyword(&mut self) -> Token {
        let loc = self.current_location();
        let ident = self.take_while(|c| c.is_ascii_alphanumeric() || c == '_');

        let kind = if self.keywords.contains(ident.as_str()) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };
        Token::new(kind, ident, loc)
    }

    /// Skip whitespace and comments
    fn skip_whitespace_and_comments(&mut self) -> Result<(), LexError> {
        loop {
            match self.peek() {
                Some(' ') | Some('\t') | Some('\r') | Some('\n') => {
                    self.advance();
                }
                Some('/') => {
                    if self.peek_ahead(1) == Some('/') {
                        self.skip_line_comment();
                    } else if self.peek_ahead(1) == Some('*') {
                        self.skip_block_comment()?;
                    } else {
                        break;
                    }
                }
                _ => break,
            }
        }
        Ok(())
    }

    /// Skip single-line comment (// ...), leaving the newline
    fn skip_line_comment(&mut self) {
        while let Some(ch) = self.peek() {
            if ch == '\n' {
                break;
            }
            self.advance();
        }
    }

    /// Skip multi-line comment (/* ... */)
    fn skip_block_comment(&mut self) -> Result<(), LexError> {
        let start_loc = self.current_location();
        self.advance(); // skip '/'
        self.advance(); // skip '*'

        while !self.is_at_end() {
            if self.peek() == Some('*') && self.peek_ahead(1) == Some('/') {
                self.advance();
                self.advance();
                return Ok(());
            }
            self.advance();
        }

        Err(LexError {
            character: '/',
            location: start_loc,
        })
    }

    /// Consume exactly `n` characters
    fn take(&mut self, n: usize) -> String {
        (0..n).filter_map(|_| self.advance()).collect()
    }

    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> String {
        let mut out = String::new();
        while let Some(ch) = self.peek() {
            if !pred(ch) {
                break;
            }
            out.push(ch);
            self.advance();
        }
        out
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Peek ahead n characters
    fn peek_ahead(&self, n: usize) -> Option<char> {
        self.input.get(self.position + n).copied()
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    /// Check if at end of input
    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Get current source location
    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }
}

/// Tokenize a whole source text.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).tokenize()
}
