// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Seqgrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Seqgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

/// Identity of a statement node inside one parsed [`Program`](super::seq_ast::Program).
///
/// Ids are dense and allocated in source order, so `NodeId(k)` is the `k`-th statement. Layout
/// results are keyed by this id instead of being attached to the tree itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s:{:04}", self.0)
    }
}

/// Source extent of a node, measured in tokens: `start` is the index of the first token and
/// `len` the number of tokens the node consumed (including its terminator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TokenSpan {
    pub start: usize,
    pub len: usize,
}

impl TokenSpan {
    pub fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// Index one past the last token of the span.
    pub fn end(self) -> usize {
        self.start + self.len
    }
}
