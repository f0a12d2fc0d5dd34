// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Seqgrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Seqgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use smol_str::SmolStr;

use super::ids::{NodeId, TokenSpan};

/// Root of a parsed diagram source.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    span: TokenSpan,
    statements: StatementList,
}

impl Program {
    pub fn new(span: TokenSpan, statements: StatementList) -> Self {
        Self { span, statements }
    }

    pub fn span(&self) -> TokenSpan {
        self.span
    }

    pub fn statement_list(&self) -> &StatementList {
        &self.statements
    }

    pub fn statements(&self) -> &[Statement] {
        self.statements.statements()
    }

    pub fn statement(&self, id: NodeId) -> Option<&Statement> {
        self.statements.statements().get(id.index())
    }

    pub fn is_empty(&self) -> bool {
        self.statements.statements().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatementList {
    span: TokenSpan,
    statements: Vec<Statement>,
}

impl StatementList {
    pub fn new(span: TokenSpan, statements: Vec<Statement>) -> Self {
        debug_assert!(
            statements.iter().enumerate().all(|(idx, stmt)| stmt.id().index() == idx),
            "statement ids must be dense and in source order"
        );
        Self { span, statements }
    }

    pub fn span(&self) -> TokenSpan {
        self.span
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    id: NodeId,
    span: TokenSpan,
    kind: StatementKind,
}

impl Statement {
    pub fn new(id: NodeId, span: TokenSpan, kind: StatementKind) -> Self {
        Self { id, span, kind }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn span(&self) -> TokenSpan {
        self.span
    }

    pub fn kind(&self) -> &StatementKind {
        &self.kind
    }

    /// Participant names referenced by this statement, in the order they appear in the source.
    pub fn participant_refs(&self) -> Vec<&str> {
        match &self.kind {
            StatementKind::ObjectDeclaration(decl) => {
                decl.names().iter().map(SmolStr::as_str).collect()
            }
            StatementKind::Message(msg) => vec![msg.sender(), msg.receiver()],
            StatementKind::Note(note) => vec![note.participant()],
            StatementKind::Space(_) => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatementKind {
    ObjectDeclaration(ObjectDeclaration),
    Message(MessageStatement),
    Note(NoteStatement),
    Space(SpaceStatement),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectDeclaration {
    names: Vec<SmolStr>,
}

impl ObjectDeclaration {
    pub fn new(names: Vec<SmolStr>) -> Self {
        debug_assert!(!names.is_empty(), "object declarations name at least one participant");
        Self { names }
    }

    pub fn names(&self) -> &[SmolStr] {
        &self.names
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageStatement {
    sender: SmolStr,
    receiver: SmolStr,
    text: String,
}

impl MessageStatement {
    pub fn new(sender: impl Into<SmolStr>, receiver: impl Into<SmolStr>, text: impl Into<String>) -> Self {
        Self { sender: sender.into(), receiver: receiver.into(), text: text.into() }
    }

    pub fn sender(&self) -> &str {
        &self.sender
    }

    pub fn receiver(&self) -> &str {
        &self.receiver
    }

    /// Message body; lines are separated by `'\n'`.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_self_message(&self) -> bool {
        self.sender == self.receiver
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoteSide {
    Left,
    Right,
}

impl NoteSide {
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteStatement {
    participant: SmolStr,
    side: NoteSide,
    text: String,
}

impl NoteStatement {
    pub fn new(participant: impl Into<SmolStr>, side: NoteSide, text: impl Into<String>) -> Self {
        Self { participant: participant.into(), side, text: text.into() }
    }

    pub fn participant(&self) -> &str {
        &self.participant
    }

    pub fn side(&self) -> NoteSide {
        self.side
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpaceStatement {
    gap: u32,
}

impl SpaceStatement {
    pub fn new(gap: u32) -> Self {
        Self { gap }
    }

    pub fn gap(&self) -> u32 {
        self.gap
    }
}
