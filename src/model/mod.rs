// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Seqgrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Seqgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model: the statement AST and the ids used to key layout results.

pub mod ids;
pub mod seq_ast;

pub use ids::{NodeId, TokenSpan};
pub use seq_ast::{
    MessageStatement, NoteSide, NoteStatement, ObjectDeclaration, Program, SpaceStatement,
    Statement, StatementKind, StatementList,
};
