// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Seqgrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Seqgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use memchr::memchr2;
use smol_str::SmolStr;

use crate::config::CommentNewline;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Word,
    Arrow,
    Colon,
    Semicolon,
    Newline,
    Space,
    Eof,
}

impl TokenKind {
    /// `;`, a line break, or the end of input.
    pub fn is_statement_end(self) -> bool {
        matches!(self, Self::Semicolon | Self::Newline | Self::Eof)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    text: SmolStr,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<SmolStr>) -> Self {
        Self { kind, text: text.into() }
    }

    pub fn eof() -> Self {
        Self::new(TokenKind::Eof, "")
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_word(&self, word: &str) -> bool {
        self.kind == TokenKind::Word && self.text == word
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => f.write_str("<eof>"),
            TokenKind::Newline => f.write_str("<newline>"),
            _ => f.write_str(&self.text),
        }
    }
}

pub(crate) fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

fn line_terminator_len(rest: &[u8]) -> usize {
    match rest {
        [b'\r', b'\n', ..] => 2,
        _ => 1,
    }
}

/// Tokenizes `input` with the default comment behaviour.
pub fn tokenize(input: &str) -> Vec<Token> {
    tokenize_with(input, CommentNewline::default())
}

/// Splits `input` into tokens. Never fails: characters without a token kind of their own become
/// one-character `Word` tokens, and the result always ends with a single `Eof` token.
///
/// Whitespace is not collapsed; each space or tab is its own `Space` token.
pub fn tokenize_with(input: &str, comment_newline: CommentNewline) -> Vec<Token> {
    let bytes = input.as_bytes();
    let mut tokens = Vec::<Token>::new();
    let mut pos = 0usize;

    while let Some(ch) = input[pos..].chars().next() {
        match ch {
            '/' if bytes.get(pos + 1) == Some(&b'/') => {
                let body_start = pos + 2;
                let Some(offset) = memchr2(b'\n', b'\r', &bytes[body_start..]) else {
                    pos = input.len();
                    continue;
                };
                let term = body_start + offset;
                let term_len = line_terminator_len(&bytes[term..]);
                if comment_newline == CommentNewline::Keep {
                    tokens.push(Token::new(TokenKind::Newline, &input[term..term + term_len]));
                }
                pos = term + term_len;
            }
            '\n' | '\r' => {
                let len = line_terminator_len(&bytes[pos..]);
                tokens.push(Token::new(TokenKind::Newline, &input[pos..pos + len]));
                pos += len;
            }
            ' ' | '\t' => {
                tokens.push(Token::new(TokenKind::Space, &input[pos..pos + 1]));
                pos += 1;
            }
            ':' => {
                tokens.push(Token::new(TokenKind::Colon, ":"));
                pos += 1;
            }
            ';' => {
                tokens.push(Token::new(TokenKind::Semicolon, ";"));
                pos += 1;
            }
            '-' if bytes.get(pos + 1) == Some(&b'>') => {
                tokens.push(Token::new(TokenKind::Arrow, "->"));
                pos += 2;
            }
            ch if is_word_char(ch) => {
                let end = input[pos..]
                    .char_indices()
                    .find(|&(_, c)| !is_word_char(c))
                    .map_or(input.len(), |(idx, _)| pos + idx);
                tokens.push(Token::new(TokenKind::Word, &input[pos..end]));
                pos = end;
            }
            other => {
                let len = other.len_utf8();
                tokens.push(Token::new(TokenKind::Word, &input[pos..pos + len]));
                pos += len;
            }
        }
    }

    tokens.push(Token::eof());
    tokens
}
