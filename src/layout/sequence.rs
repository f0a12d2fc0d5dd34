// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Seqgrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Seqgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use smallvec::SmallVec;
use smol_str::SmolStr;
use tracing::debug;

use super::measure::{
    box_width, lifeline_offset, message_width, note_width, statement_height, HEADER_ROWS,
    TRAILER_ROWS,
};
use crate::model::ids::NodeId;
use crate::model::seq_ast::{NoteSide, Program, StatementKind};

/// Final geometry of one participant. Columns are canvas columns; `*_x2` bounds are exclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantLayout {
    name: SmolStr,
    index: usize,
    box_x1: usize,
    box_x2: usize,
    lifeline_x: usize,
    span_x1: usize,
    span_x2: usize,
    notes: SmallVec<[NodeId; 4]>,
    messages: SmallVec<[NodeId; 4]>,
}

impl ParticipantLayout {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// First-occurrence order of the participant.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn box_x1(&self) -> usize {
        self.box_x1
    }

    pub fn box_x2(&self) -> usize {
        self.box_x2
    }

    pub fn box_width(&self) -> usize {
        self.box_x2 - self.box_x1
    }

    pub fn lifeline_x(&self) -> usize {
        self.lifeline_x
    }

    /// Full horizontal footprint `[x1, x2)`, including attached notes and self-messages.
    pub fn span(&self) -> (usize, usize) {
        (self.span_x1, self.span_x2)
    }

    /// Notes attached to this participant, in source order.
    pub fn notes(&self) -> &[NodeId] {
        &self.notes
    }

    /// Messages whose lower-index endpoint is this participant, in source order.
    pub fn messages(&self) -> &[NodeId] {
        &self.messages
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowDirection {
    LeftToRight,
    RightToLeft,
    SelfLoop,
}

/// What a statement is anchored to, with participants resolved to their indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Declaration,
    Message { sender: usize, receiver: usize },
    Note { participant: usize, side: NoteSide },
    Space,
}

impl Placement {
    pub fn arrow_direction(self) -> Option<ArrowDirection> {
        match self {
            Self::Message { sender, receiver } if sender == receiver => {
                Some(ArrowDirection::SelfLoop)
            }
            Self::Message { sender, receiver } if sender < receiver => {
                Some(ArrowDirection::LeftToRight)
            }
            Self::Message { .. } => Some(ArrowDirection::RightToLeft),
            _ => None,
        }
    }
}

/// Vertical extent `[y1, y2)` of a statement plus its resolved anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatementLayout {
    id: NodeId,
    y1: usize,
    y2: usize,
    placement: Placement,
}

impl StatementLayout {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn y1(&self) -> usize {
        self.y1
    }

    pub fn y2(&self) -> usize {
        self.y2
    }

    pub fn height(&self) -> usize {
        self.y2 - self.y1
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }
}

/// Geometry for a whole program, computed once and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceLayout {
    participants: Vec<ParticipantLayout>,
    index_by_name: BTreeMap<SmolStr, usize>,
    statements: BTreeMap<NodeId, StatementLayout>,
    width: usize,
    height: usize,
}

impl SequenceLayout {
    /// Participants in index order.
    pub fn participants(&self) -> &[ParticipantLayout] {
        &self.participants
    }

    pub fn participant(&self, name: &str) -> Option<&ParticipantLayout> {
        self.index_by_name.get(name).map(|&idx| &self.participants[idx])
    }

    pub fn statements(&self) -> &BTreeMap<NodeId, StatementLayout> {
        &self.statements
    }

    pub fn statement(&self, id: NodeId) -> Option<&StatementLayout> {
        self.statements.get(&id)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }
}

#[derive(Debug, Clone, Copy)]
struct NoteRef {
    id: NodeId,
    side: NoteSide,
    width: i64,
}

#[derive(Debug, Clone, Copy)]
struct MessageRef {
    id: NodeId,
    right: usize,
    is_self: bool,
    width: i64,
}

#[derive(Debug, Clone)]
struct Entry {
    name: SmolStr,
    notes: SmallVec<[NoteRef; 4]>,
    messages: SmallVec<[MessageRef; 4]>,
}

/// Participants in first-occurrence order, built by the collection pass.
#[derive(Debug, Default)]
struct Registry {
    entries: Vec<Entry>,
    index_by_name: BTreeMap<SmolStr, usize>,
}

impl Registry {
    fn ensure(&mut self, name: &str) -> usize {
        if let Some(&idx) = self.index_by_name.get(name) {
            return idx;
        }
        let idx = self.entries.len();
        let name = SmolStr::new(name);
        self.entries.push(Entry {
            name: name.clone(),
            notes: SmallVec::new(),
            messages: SmallVec::new(),
        });
        self.index_by_name.insert(name, idx);
        idx
    }

    fn index_of(&self, name: &str) -> usize {
        *self.index_by_name.get(name).expect("participant registered by the collection pass")
    }
}

/// Box and span of one participant before the global shift; may be negative on the left.
#[derive(Debug, Clone, Copy)]
struct Placed {
    x1: i64,
    x2: i64,
    lifeline: i64,
    span_x1: i64,
    span_x2: i64,
}

/// State threaded through the layout passes.
#[derive(Debug, Default)]
struct LayoutContext {
    registry: Registry,
    placements: BTreeMap<NodeId, Placement>,
    placed: Vec<Placed>,
    y: usize,
    statements: BTreeMap<NodeId, StatementLayout>,
}

impl LayoutContext {
    /// Pass 1: registers participants at first reference and attaches notes and messages.
    fn collect(&mut self, program: &Program) {
        for stmt in program.statements() {
            for name in stmt.participant_refs() {
                self.registry.ensure(name);
            }

            let placement = match stmt.kind() {
                StatementKind::ObjectDeclaration(_) => Placement::Declaration,
                StatementKind::Space(_) => Placement::Space,
                StatementKind::Message(msg) => {
                    let sender = self.registry.index_of(msg.sender());
                    let receiver = self.registry.index_of(msg.receiver());
                    let (left, right) = (sender.min(receiver), sender.max(receiver));
                    self.registry.entries[left].messages.push(MessageRef {
                        id: stmt.id(),
                        right,
                        is_self: msg.is_self_message(),
                        width: message_width(msg.text()) as i64,
                    });
                    Placement::Message { sender, receiver }
                }
                StatementKind::Note(note) => {
                    let participant = self.registry.index_of(note.participant());
                    self.registry.entries[participant].notes.push(NoteRef {
                        id: stmt.id(),
                        side: note.side(),
                        width: note_width(note.text()) as i64,
                    });
                    Placement::Note { participant, side: note.side() }
                }
            };
            self.placements.insert(stmt.id(), placement);
        }
    }

    /// Lowest left edge for participant `idx` that leaves room for everything drawn between its
    /// lifeline and the previous participant's.
    fn min_left_edge(&self, idx: usize, half_box: i64) -> i64 {
        let Some(prev) = idx.checked_sub(1).map(|prev| self.placed[prev]) else {
            return 0;
        };
        let prev_entry = &self.registry.entries[idx - 1];
        let entry = &self.registry.entries[idx];
        let mut x1 = prev.x2 + 1;

        for note in entry.notes.iter().filter(|note| note.side == NoteSide::Left) {
            x1 = x1.max(prev.lifeline + 1 + note.width + 1 - half_box);
        }
        for note in prev_entry.notes.iter().filter(|note| note.side == NoteSide::Right) {
            x1 = x1.max(prev.lifeline + 1 + note.width);
        }
        for (left_idx, left) in self.registry.entries[..idx].iter().enumerate() {
            for msg in left.messages.iter().filter(|msg| !msg.is_self && msg.right == idx) {
                x1 = x1.max(self.placed[left_idx].lifeline + 1 + msg.width);
            }
        }
        for msg in prev_entry.messages.iter().filter(|msg| msg.is_self) {
            x1 = x1.max(prev.lifeline + 1 + msg.width);
        }

        x1
    }

    /// Pass 2: places participants left to right in index order.
    fn place_horizontally(&mut self) {
        for idx in 0..self.registry.entries.len() {
            let width = box_width(&self.registry.entries[idx].name) as i64;
            let half_box = lifeline_offset(width as usize) as i64;
            let x1 = self.min_left_edge(idx, half_box);
            let x2 = x1 + width;
            let lifeline = x1 + half_box;

            let mut span_x1 = x1;
            let mut span_x2 = x2;
            let entry = &self.registry.entries[idx];
            for note in &entry.notes {
                match note.side {
                    NoteSide::Left => span_x1 = span_x1.min(lifeline - 1 - note.width),
                    NoteSide::Right => span_x2 = span_x2.max(lifeline + 2 + note.width),
                }
            }
            for msg in entry.messages.iter().filter(|msg| msg.is_self) {
                span_x2 = span_x2.max(lifeline + 1 + msg.width);
            }

            self.placed.push(Placed { x1, x2, lifeline, span_x1, span_x2 });
        }
    }

    /// Single top-to-bottom sweep assigning contiguous row ranges in source order.
    fn place_vertically(&mut self, program: &Program) {
        self.y = HEADER_ROWS;
        for stmt in program.statements() {
            let height = statement_height(stmt.kind());
            let placement = self.placements[&stmt.id()];
            let y1 = self.y;
            self.y += height;
            self.statements.insert(
                stmt.id(),
                StatementLayout { id: stmt.id(), y1, y2: self.y, placement },
            );
        }
    }

    fn finish(self) -> SequenceLayout {
        let min_x = self.placed.iter().map(|p| p.span_x1).min().unwrap_or(0);
        let max_x = self.placed.iter().map(|p| p.span_x2).max().unwrap_or(0);
        let shift = |x: i64| -> usize {
            usize::try_from(x - min_x).expect("coordinates are non-negative after the shift")
        };

        let participants = self
            .registry
            .entries
            .into_iter()
            .zip(&self.placed)
            .enumerate()
            .map(|(index, (entry, placed))| ParticipantLayout {
                name: entry.name,
                index,
                box_x1: shift(placed.x1),
                box_x2: shift(placed.x2),
                lifeline_x: shift(placed.lifeline),
                span_x1: shift(placed.span_x1),
                span_x2: shift(placed.span_x2),
                notes: entry.notes.iter().map(|note| note.id).collect(),
                messages: entry.messages.iter().map(|msg| msg.id).collect(),
            })
            .collect::<Vec<_>>();

        SequenceLayout {
            participants,
            index_by_name: self.registry.index_by_name,
            statements: self.statements,
            width: shift(max_x),
            height: self.y + TRAILER_ROWS,
        }
    }
}

/// Computes participant columns and statement rows for `program`.
///
/// Participants are ordered by first reference (declaration, message endpoint or note target).
/// Boxes never overlap: each left edge is at least one column past the previous box's right
/// edge and is pushed further right to make room for notes and message labels.
pub fn layout_sequence(program: &Program) -> SequenceLayout {
    let mut ctx = LayoutContext::default();
    ctx.collect(program);
    ctx.place_horizontally();
    ctx.place_vertically(program);
    let layout = ctx.finish();
    debug!(
        participants = layout.participants.len(),
        statements = layout.statements.len(),
        width = layout.width,
        height = layout.height,
        "laid out sequence program"
    );
    layout
}
