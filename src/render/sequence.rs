// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Seqgrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Seqgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use tracing::debug;

use super::{
    Canvas, CanvasError, ARROW_LEFT, ARROW_RIGHT, BOX_CORNER, BOX_HORIZONTAL, BOX_VERTICAL,
    NOTE_FOLD_LEFT, NOTE_FOLD_RIGHT,
};
use crate::layout::measure::{message_width, note_width, text_len, text_lines, HEADER_ROWS};
use crate::layout::{ParticipantLayout, SequenceLayout, StatementLayout};
use crate::model::seq_ast::{MessageStatement, NoteSide, NoteStatement, Program, StatementKind};

/// Draws `program` with the geometry computed by [`layout_sequence`](crate::layout::layout_sequence).
///
/// Drawing order is boxes, then lifelines, then statements in source order, so statement glyphs
/// sit on top of lifelines they cross.
pub fn render_sequence(program: &Program, layout: &SequenceLayout) -> Result<Canvas, CanvasError> {
    let mut canvas = Canvas::new(layout.width(), layout.height())?;

    for participant in layout.participants() {
        draw_participant_box(&mut canvas, participant)?;
    }

    if layout.height() > HEADER_ROWS {
        for participant in layout.participants() {
            canvas.draw_vline(
                participant.lifeline_x(),
                HEADER_ROWS,
                layout.height() - 1,
                BOX_VERTICAL,
            )?;
        }
    }

    for stmt in program.statements() {
        let geometry = layout.statement(stmt.id()).expect("layout covers every statement");
        match stmt.kind() {
            StatementKind::Message(msg) => draw_message(&mut canvas, layout, geometry, msg)?,
            StatementKind::Note(note) => draw_note(&mut canvas, layout, geometry, note)?,
            StatementKind::ObjectDeclaration(_) | StatementKind::Space(_) => {}
        }
    }

    debug!(width = canvas.width(), height = canvas.height(), "rendered sequence grid");
    Ok(canvas)
}

fn participant<'a>(layout: &'a SequenceLayout, name: &str) -> &'a ParticipantLayout {
    layout.participant(name).expect("participant registered by layout")
}

fn draw_participant_box(canvas: &mut Canvas, p: &ParticipantLayout) -> Result<(), CanvasError> {
    canvas.draw_box(p.box_x1(), 0, p.box_x2() - 1, HEADER_ROWS - 1)?;
    let name_x = p.box_x1() + (p.box_width() - text_len(p.name())) / 2;
    canvas.write_str(name_x, 1, p.name())
}

fn draw_message(
    canvas: &mut Canvas,
    layout: &SequenceLayout,
    geometry: &StatementLayout,
    msg: &MessageStatement,
) -> Result<(), CanvasError> {
    let sender = participant(layout, msg.sender()).lifeline_x();
    let receiver = participant(layout, msg.receiver()).lifeline_x();
    // The first row of every message block is a spacer.
    let text_y = geometry.y1() + 1;

    if msg.is_self_message() {
        return draw_self_message(canvas, sender, text_y, msg.text());
    }

    let arrow_y = geometry.y2() - 1;
    if sender < receiver {
        for (offset, line) in text_lines(msg.text()).enumerate() {
            canvas.write_str(sender + 2, text_y + offset, line)?;
        }
        canvas.draw_hline(sender + 1, receiver - 1, arrow_y, BOX_HORIZONTAL)?;
        canvas.set(receiver - 1, arrow_y, ARROW_RIGHT)?;
    } else {
        for (offset, line) in text_lines(msg.text()).enumerate() {
            canvas.write_str(sender - 1 - text_len(line), text_y + offset, line)?;
        }
        canvas.draw_hline(receiver + 1, sender - 1, arrow_y, BOX_HORIZONTAL)?;
        canvas.set(receiver + 1, arrow_y, ARROW_LEFT)?;
    }

    Ok(())
}

/// Draws text, an underline, a connector and a return arrow to the right of `lifeline`.
///
/// ```text
/// | ping
/// |------
/// |     |
/// |<-----
/// ```
fn draw_self_message(
    canvas: &mut Canvas,
    lifeline: usize,
    text_y: usize,
    text: &str,
) -> Result<(), CanvasError> {
    let width = message_width(text);
    let mut y = text_y;
    for line in text_lines(text) {
        canvas.write_str(lifeline + 2, y, line)?;
        y += 1;
    }

    let loop_x = lifeline + width;
    canvas.draw_hline(lifeline + 1, loop_x, y, BOX_HORIZONTAL)?;
    canvas.set(loop_x, y + 1, BOX_VERTICAL)?;
    canvas.draw_hline(lifeline + 1, loop_x, y + 2, BOX_HORIZONTAL)?;
    canvas.set(lifeline + 1, y + 2, ARROW_LEFT)
}

/// Draws a framed note next to its participant's lifeline, joined by a one-column leader.
///
/// The corner closest to the lifeline is folded:
///
/// ```text
/// |  /-----------+      +-----------\  |
/// |-| note text |      | note text |-|
/// |  +-----------+      +-----------+  |
/// ```
fn draw_note(
    canvas: &mut Canvas,
    layout: &SequenceLayout,
    geometry: &StatementLayout,
    note: &NoteStatement,
) -> Result<(), CanvasError> {
    let lifeline = participant(layout, note.participant()).lifeline_x();
    let width = note_width(note.text());
    let (frame_x1, leader_x) = match note.side() {
        NoteSide::Right => (lifeline + 2, lifeline + 1),
        NoteSide::Left => (lifeline - 1 - width, lifeline - 1),
    };
    let frame_x2 = frame_x1 + width - 1;
    let top = geometry.y1();
    let bottom = geometry.y2() - 1;

    canvas.draw_box(frame_x1, top, frame_x2, bottom)?;
    match note.side() {
        NoteSide::Right => canvas.set(frame_x1, top, NOTE_FOLD_RIGHT)?,
        NoteSide::Left => canvas.set(frame_x2, top, NOTE_FOLD_LEFT)?,
    }
    debug_assert_eq!(canvas.get(frame_x1, bottom), Ok(Some(BOX_CORNER)));

    for (offset, line) in text_lines(note.text()).enumerate() {
        canvas.write_str(frame_x1 + 2, top + 1 + offset, line.trim_start())?;
    }
    canvas.set(leader_x, (top + 1).min(bottom), BOX_HORIZONTAL)
}
