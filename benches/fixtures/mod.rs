// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Seqgrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Seqgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use std::fmt::Write as _;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Params {
    pub participants: usize,
    pub statements: usize,
    pub long_text: bool,
}

impl Params {
    pub const fn new(participants: usize, statements: usize, long_text: bool) -> Self {
        Self { participants, statements, long_text }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Small,
    Medium,
    LargeLongText,
}

impl Case {
    pub const ALL: [Case; 3] = [Case::Small, Case::Medium, Case::LargeLongText];

    pub const fn id(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::LargeLongText => "large_long_text",
        }
    }

    pub const fn params(self) -> Params {
        match self {
            Self::Small => Params::new(8, 40, false),
            Self::Medium => Params::new(20, 200, false),
            Self::LargeLongText => Params::new(40, 800, true),
        }
    }
}

fn participant_name(idx: usize) -> String {
    format!("P{idx:03}")
}

fn ascii_repeat_to_len(prefix: &str, fill: char, target_len: usize) -> String {
    let mut out = String::with_capacity(target_len.max(prefix.len()));
    out.push_str(prefix);
    while out.len() < target_len {
        out.push(fill);
    }
    out
}

fn body_text(idx: usize, long_text: bool) -> String {
    if !long_text {
        return format!("m{idx:04}");
    }

    // Three lines joined by the in-body line-break marker.
    let line = |n: usize| ascii_repeat_to_len(&format!("msg_{idx:06}_{n}_"), 'y', 40);
    format!("{}\\n{}\\n{}", line(0), line(1), line(2))
}

/// Source text mixing every statement kind: forward, backward and self messages, notes on both
/// sides and explicit gaps.
pub fn source(params: Params) -> String {
    assert!(params.participants >= 2, "participants must be >= 2");

    let mut out = String::new();
    out.push_str("object");
    for idx in 0..params.participants {
        let _ = write!(out, " {}", participant_name(idx));
    }
    out.push_str(";\n");

    for idx in 0..params.statements {
        let here = participant_name(idx % params.participants);
        let next = participant_name((idx + 1) % params.participants);
        let text = body_text(idx, params.long_text);
        let _ = match idx % 6 {
            0 | 1 => writeln!(out, "{here}->{next}: {text}"),
            2 => writeln!(out, "{next}->{here}: {text}"),
            3 => writeln!(out, "{here}->{here}: {text}"),
            4 => writeln!(out, "right of {here}: {text}"),
            _ if idx % 12 == 5 => writeln!(out, "space 2;"),
            _ => writeln!(out, "left of {next}: {text}"),
        };
    }

    out
}

pub fn fixture(case: Case) -> String {
    source(case.params())
}
