// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Seqgrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Seqgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use rstest::rstest;
use seqgrid::format::parse_sequence;
use seqgrid::layout::layout_sequence;
use seqgrid::layout::measure::{statement_height, HEADER_ROWS, TRAILER_ROWS};
use seqgrid::{compile, render_text};

const SOURCES: [&str; 6] = [
    "object A;",
    "A->B: hi",
    "object Alice Bob Carol;\nCarol->Alice: long way back\nBob->Bob: self\nright of Alice: wide note here",
    "left of X: first\nX->Y: a\\nb\\nc\nspace 3;\nY->X\nleft of Y: tucked in",
    "Web->Api: GET /items\nApi->Db: select\nDb->Api: rows\nApi->Web: 200 OK // reply\nobject Cache;",
    "object P Q R S;\nP->S: across\nS->P: back\nright of Q: q\nleft of R: r",
];

#[rstest]
fn compiling_twice_yields_identical_grids(#[values(0, 1, 2, 3, 4, 5)] idx: usize) {
    let src = SOURCES[idx];
    assert_eq!(compile(src).expect("compile"), compile(src).expect("compile"));
    assert_eq!(render_text(src).expect("render"), render_text(src).expect("render"));
}

#[rstest]
fn boxes_never_overlap(#[values(0, 1, 2, 3, 4, 5)] idx: usize) {
    let program = parse_sequence(SOURCES[idx]).expect("parse");
    let layout = layout_sequence(&program);
    for pair in layout.participants().windows(2) {
        assert!(
            pair[0].box_x2() < pair[1].box_x1(),
            "{} overlaps {}",
            pair[0].name(),
            pair[1].name()
        );
    }
}

#[rstest]
fn height_is_header_plus_statements_plus_trailer(#[values(0, 1, 2, 3, 4, 5)] idx: usize) {
    let program = parse_sequence(SOURCES[idx]).expect("parse");
    let body = program.statements().iter().map(|stmt| statement_height(stmt.kind())).sum::<usize>();
    let canvas = compile(SOURCES[idx]).expect("compile");
    assert_eq!(canvas.height(), HEADER_ROWS + body + TRAILER_ROWS);
}

#[test]
fn participant_indices_follow_first_occurrence() {
    let program = parse_sequence("B->A: x\nobject C A;\nC->B: y\nright of D: z").expect("parse");
    let layout = layout_sequence(&program);
    let names = layout.participants().iter().map(|p| p.name().to_string()).collect::<Vec<_>>();
    assert_eq!(names, vec!["B", "A", "C", "D"]);
    for (idx, participant) in layout.participants().iter().enumerate() {
        assert_eq!(participant.index(), idx);
    }
}

#[test]
fn notes_declare_their_participant() {
    for src in ["left of A: note text", "right of A: note text"] {
        let program = parse_sequence(src).expect("parse");
        let layout = layout_sequence(&program);
        assert_eq!(layout.participants().len(), 1);
        assert_eq!(layout.participants()[0].name(), "A");
    }
}

#[test]
fn right_note_pushes_the_next_participant() {
    let program = parse_sequence("object A B;\nright of A: note text").expect("parse");
    let layout = layout_sequence(&program);
    let a = layout.participant("A").expect("A");
    let b = layout.participant("B").expect("B");
    // Lifeline, leader, then the 13-column frame.
    assert!(b.box_x1() >= a.lifeline_x() + 13 + 1);
}

#[test]
fn left_note_does_not_move_later_participants() {
    let plain = layout_sequence(&parse_sequence("object A B;").expect("parse"));
    let noted = layout_sequence(&parse_sequence("object A B;\nleft of A: note text").expect("parse"));

    let gap = |layout: &seqgrid::SequenceLayout| {
        layout.participant("B").expect("B").box_x1() - layout.participant("A").expect("A").box_x1()
    };
    assert_eq!(gap(&plain), gap(&noted));
}
