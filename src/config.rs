// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Seqgrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Seqgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

/// What happens to the line terminator that ends a `//` comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommentNewline {
    /// The terminator is consumed with the comment, so the commented line runs into the next one
    /// unless a `;` ends it. Existing diagrams depend on this.
    #[default]
    Swallow,
    /// The terminator is still emitted as a `newline` token.
    Keep,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CompileOptions {
    pub comment_newline: CommentNewline,
}

impl CompileOptions {
    pub fn with_comment_newline(mut self, comment_newline: CommentNewline) -> Self {
        self.comment_newline = comment_newline;
        self
    }
}

/// Serialization used by the CLI for a finished grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
    Json,
}

impl OutputFormat {
    pub fn parse(raw: &str) -> Result<Self, UnknownOutputFormat> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "html" => Ok(Self::Html),
            "json" => Ok(Self::Json),
            _ => Err(UnknownOutputFormat { raw: raw.to_owned() }),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Html => "html",
            Self::Json => "json",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOutputFormat {
    pub raw: String,
}

impl fmt::Display for UnknownOutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown output format '{}' (expected text, html or json)", self.raw)
    }
}

impl std::error::Error for UnknownOutputFormat {}
