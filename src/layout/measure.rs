// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Seqgrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Seqgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Pure measurements shared by the layout engine and the grid renderer.
//!
//! Everything that decides how much room a glyph needs lives here, so placement and drawing can
//! never disagree about sizes.

use crate::model::seq_ast::StatementKind;

/// Rows taken by the participant boxes above the first statement.
pub const HEADER_ROWS: usize = 3;
/// Rows of lifeline left below the last statement.
pub const TRAILER_ROWS: usize = 1;
/// Columns a note frame adds around its longest line: `|`, a blank on each side, `|`.
pub const NOTE_MARGIN: usize = 4;
/// Columns a message adds around its longest line.
pub const MESSAGE_MARGIN: usize = 2;

const MESSAGE_EXTRA_ROWS: usize = 2;
const SELF_MESSAGE_EXTRA_ROWS: usize = 4;
const NOTE_EXTRA_ROWS: usize = 2;

pub fn text_len(text: &str) -> usize {
    text.chars().count()
}

/// Lines of a message or note body, each trimmed. An empty body has no lines.
pub fn text_lines(text: &str) -> impl Iterator<Item = &str> {
    let lines = if text.is_empty() { None } else { Some(text.split('\n').map(str::trim)) };
    lines.into_iter().flatten()
}

pub fn line_count(text: &str) -> usize {
    text_lines(text).count()
}

pub fn longest_line(text: &str) -> usize {
    text_lines(text).map(text_len).max().unwrap_or(0)
}

/// Width of a participant's name box. Always odd so the lifeline sits on a center column.
pub fn box_width(name: &str) -> usize {
    let len = text_len(name);
    if len % 2 == 1 {
        len + 4
    } else {
        len + 5
    }
}

/// Offset of the lifeline from the box's left edge.
pub fn lifeline_offset(box_width: usize) -> usize {
    (box_width - 1) / 2
}

/// Width of a note frame, not counting the leader that joins it to the lifeline.
pub fn note_width(text: &str) -> usize {
    longest_line(text) + NOTE_MARGIN
}

pub fn message_width(text: &str) -> usize {
    longest_line(text) + MESSAGE_MARGIN
}

pub fn message_height(text: &str, is_self_message: bool) -> usize {
    let extra = if is_self_message { SELF_MESSAGE_EXTRA_ROWS } else { MESSAGE_EXTRA_ROWS };
    extra + line_count(text)
}

pub fn note_height(text: &str) -> usize {
    NOTE_EXTRA_ROWS + line_count(text)
}

/// Rows a statement occupies in the vertical sweep.
pub fn statement_height(kind: &StatementKind) -> usize {
    match kind {
        StatementKind::ObjectDeclaration(_) => 0,
        StatementKind::Message(msg) => message_height(msg.text(), msg.is_self_message()),
        StatementKind::Note(note) => note_height(note.text()),
        StatementKind::Space(space) => space.gap() as usize,
    }
}
