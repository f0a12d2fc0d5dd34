// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Seqgrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Seqgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Layout for sequence programs.
//!
//! This module computes participant columns and statement rows; drawing lives in `render`.

pub mod measure;
pub mod sequence;

pub use sequence::{
    layout_sequence, ArrowDirection, ParticipantLayout, Placement, SequenceLayout,
    StatementLayout,
};
