// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Seqgrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Seqgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::Serialize;

use super::Canvas;

/// Full-width rows joined by `\n`, without a trailing newline.
pub fn canvas_to_string(canvas: &Canvas) -> String {
    canvas.rows().collect::<Vec<_>>().join("\n")
}

/// Rows with trailing blanks removed and empty trailing rows dropped.
pub fn canvas_to_string_trimmed(canvas: &Canvas) -> String {
    let mut lines = canvas
        .rows()
        .map(|row| row.trim_end_matches(' ').to_owned())
        .collect::<Vec<_>>();

    while matches!(lines.last(), Some(line) if line.is_empty()) {
        lines.pop();
    }

    lines.join("\n")
}

/// The grid wrapped in a `<pre class="seqgrid">` block with HTML metacharacters escaped.
pub fn canvas_to_html(canvas: &Canvas) -> String {
    let body = canvas_to_string(canvas);
    let mut out = String::with_capacity(body.len() + 32);
    out.push_str("<pre class=\"seqgrid\">");
    for ch in body.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out.push_str("</pre>");
    out
}

/// Serializable snapshot of a grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridDocument {
    pub width: usize,
    pub height: usize,
    pub rows: Vec<String>,
}

impl GridDocument {
    pub fn from_canvas(canvas: &Canvas) -> Self {
        Self { width: canvas.width(), height: canvas.height(), rows: canvas.rows().collect() }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
