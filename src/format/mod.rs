// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Seqgrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Seqgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Source format: lexer and parser for the sequence description language.

mod ident;
pub mod sequence;
pub mod token;

pub use ident::{IdentError, RESERVED_KEYWORDS, UNSUPPORTED_BLOCK_KEYWORDS};
pub use sequence::{parse_sequence, parse_sequence_with, parse_tokens, ParseError};
pub use token::{tokenize, tokenize_with, Token, TokenKind};
