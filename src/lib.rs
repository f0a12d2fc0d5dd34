// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Seqgrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Seqgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Seqgrid: compiles a small sequence-diagram language into a fixed-size ASCII character grid.
//!
//! The pipeline is `tokenize` → `parse_tokens` → `layout_sequence` → `render_sequence`; each stage
//! is public so callers can stop at any intermediate form. [`compile`] runs all of them.

use std::fmt;

use tracing::debug_span;

pub mod config;
pub mod format;
pub mod layout;
pub mod model;
pub mod render;

pub use config::{CommentNewline, CompileOptions, OutputFormat};
pub use format::ParseError;
pub use layout::SequenceLayout;
pub use model::Program;
pub use render::{Canvas, CanvasError};

/// Coarse classification of a [`CompileError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompileErrorKind {
    /// Reserved: the lexer accepts every input, so this is never produced.
    LexicalAnomaly,
    SyntaxError,
    UnsupportedConstruct,
    /// The layout produced geometry the canvas could not hold.
    Internal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    Parse(ParseError),
    Canvas(CanvasError),
}

impl CompileError {
    pub fn kind(&self) -> CompileErrorKind {
        match self {
            Self::Parse(ParseError::UnsupportedConstruct { .. }) => {
                CompileErrorKind::UnsupportedConstruct
            }
            Self::Parse(_) => CompileErrorKind::SyntaxError,
            Self::Canvas(_) => CompileErrorKind::Internal,
        }
    }
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "{err}"),
            Self::Canvas(err) => write!(f, "render failed: {err}"),
        }
    }
}

impl std::error::Error for CompileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Canvas(err) => Some(err),
        }
    }
}

impl From<ParseError> for CompileError {
    fn from(err: ParseError) -> Self {
        Self::Parse(err)
    }
}

impl From<CanvasError> for CompileError {
    fn from(err: CanvasError) -> Self {
        Self::Canvas(err)
    }
}

/// Every intermediate form of one compilation.
#[derive(Debug, Clone)]
pub struct CompiledDiagram {
    program: Program,
    layout: SequenceLayout,
    canvas: Canvas,
}

impl CompiledDiagram {
    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn layout(&self) -> &SequenceLayout {
        &self.layout
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn into_canvas(self) -> Canvas {
        self.canvas
    }
}

/// Runs the whole pipeline and keeps the program and layout alongside the grid.
pub fn compile_diagram(input: &str, options: &CompileOptions) -> Result<CompiledDiagram, CompileError> {
    let span = debug_span!("compile", bytes = input.len());
    let _guard = span.enter();

    let program = format::parse_sequence_with(input, options)?;
    let layout = layout::layout_sequence(&program);
    let canvas = render::render_sequence(&program, &layout)?;
    Ok(CompiledDiagram { program, layout, canvas })
}

/// Compiles `input` with the given options. Either the whole grid is produced or an error is.
pub fn compile_with_options(input: &str, options: &CompileOptions) -> Result<Canvas, CompileError> {
    compile_diagram(input, options).map(CompiledDiagram::into_canvas)
}

/// Compiles `input` with default options.
pub fn compile(input: &str) -> Result<Canvas, CompileError> {
    compile_with_options(input, &CompileOptions::default())
}

/// Compiles `input` and serializes the grid as full-width rows joined by `\n`.
pub fn render_text(input: &str) -> Result<String, CompileError> {
    compile(input).map(|canvas| render::canvas_to_string(&canvas))
}
