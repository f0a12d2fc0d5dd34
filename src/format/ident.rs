// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Seqgrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Seqgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use super::token::is_word_char;

/// Words that can never name a participant.
pub const RESERVED_KEYWORDS: [&str; 5] = ["alt", "opt", "loop", "note", "space"];

/// Block keywords that are recognized but cannot be laid out.
pub const UNSUPPORTED_BLOCK_KEYWORDS: [&str; 3] = ["alt", "opt", "loop"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentError {
    Empty,
    InvalidChar { ch: char },
    Reserved { keyword: &'static str },
}

impl fmt::Display for IdentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("must not be empty"),
            Self::InvalidChar { ch } => write!(f, "contains invalid character: '{ch}'"),
            Self::Reserved { keyword } => write!(f, "'{keyword}' is a reserved keyword"),
        }
    }
}

impl std::error::Error for IdentError {}

pub(super) fn reserved_keyword(word: &str) -> Option<&'static str> {
    RESERVED_KEYWORDS.iter().copied().find(|keyword| *keyword == word)
}

pub(super) fn validate_ident(ident: &str) -> Result<(), IdentError> {
    if ident.is_empty() {
        return Err(IdentError::Empty);
    }
    if let Some(ch) = ident.chars().find(|c| !is_word_char(*c)) {
        return Err(IdentError::InvalidChar { ch });
    }
    if let Some(keyword) = reserved_keyword(ident) {
        return Err(IdentError::Reserved { keyword });
    }
    Ok(())
}
