// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Seqgrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Seqgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Rendering of laid-out sequence programs into character grids, plus serialization of those
//! grids for display.

use std::fmt;

pub mod sequence;
pub mod text;

pub use sequence::render_sequence;
pub use text::{canvas_to_html, canvas_to_string, canvas_to_string_trimmed, GridDocument};

pub const BOX_CORNER: char = '+';
pub const BOX_HORIZONTAL: char = '-';
pub const BOX_VERTICAL: char = '|';
pub const ARROW_RIGHT: char = '>';
pub const ARROW_LEFT: char = '<';
pub const NOTE_FOLD_RIGHT: char = '/';
pub const NOTE_FOLD_LEFT: char = '\\';

/// Upper bound on `width * height`; a larger grid is refused instead of allocated.
pub const MAX_CANVAS_CELLS: usize = 1 << 26;

/// A fixed-size, bounds-checked character grid.
///
/// Every cell starts blank (`None`). Writing a glyph overwrites whatever was there; writing text
/// never blanks a cell, since spaces inside text are skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<Option<char>>,
}

impl Canvas {
    /// Creates a blank canvas.
    pub fn new(width: usize, height: usize) -> Result<Self, CanvasError> {
        let len = width
            .checked_mul(height)
            .ok_or(CanvasError::AreaOverflow { width, height })?;
        if len > MAX_CANVAS_CELLS {
            return Err(CanvasError::TooLarge { width, height, max_cells: MAX_CANVAS_CELLS });
        }

        Ok(Self { width, height, cells: vec![None; len] })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Returns the cell at `(x, y)`; `None` means blank.
    pub fn get(&self, x: usize, y: usize) -> Result<Option<char>, CanvasError> {
        let idx = self.index_of(x, y)?;
        Ok(self.cells[idx])
    }

    /// Sets the cell at `(x, y)`.
    pub fn set(&mut self, x: usize, y: usize, ch: char) -> Result<(), CanvasError> {
        let idx = self.index_of(x, y)?;
        self.cells[idx] = Some(ch);
        Ok(())
    }

    /// Writes `text` left-to-right starting at `(x, y)`, leaving cells under spaces untouched.
    ///
    /// Text that would run past the right edge is an error and nothing is written.
    pub fn write_str(&mut self, x: usize, y: usize, text: &str) -> Result<(), CanvasError> {
        let len = text.chars().count();
        if len == 0 {
            return Ok(());
        }
        self.index_of(x + len - 1, y)?;

        for (offset, ch) in text.chars().enumerate() {
            if ch != ' ' {
                self.set(x + offset, y, ch)?;
            }
        }

        Ok(())
    }

    /// Fills `x0..=x1` on row `y` with `ch`.
    pub fn draw_hline(&mut self, x0: usize, x1: usize, y: usize, ch: char) -> Result<(), CanvasError> {
        let (min_x, max_x) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        self.index_of(min_x, y)?;
        self.index_of(max_x, y)?;

        for x in min_x..=max_x {
            self.set(x, y, ch)?;
        }

        Ok(())
    }

    /// Fills `y0..=y1` in column `x` with `ch`.
    pub fn draw_vline(&mut self, x: usize, y0: usize, y1: usize, ch: char) -> Result<(), CanvasError> {
        let (min_y, max_y) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
        self.index_of(x, min_y)?;
        self.index_of(x, max_y)?;

        for y in min_y..=max_y {
            self.set(x, y, ch)?;
        }

        Ok(())
    }

    /// Draws an ASCII frame with corners at `(x0, y0)` and `(x1, y1)`, both inclusive.
    pub fn draw_box(&mut self, x0: usize, y0: usize, x1: usize, y1: usize) -> Result<(), CanvasError> {
        let (min_x, max_x) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        let (min_y, max_y) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
        self.index_of(max_x, max_y)?;

        if min_x == max_x {
            return self.draw_vline(min_x, min_y, max_y, BOX_VERTICAL);
        }
        if min_y == max_y {
            return self.draw_hline(min_x, max_x, min_y, BOX_HORIZONTAL);
        }

        self.draw_hline(min_x, max_x, min_y, BOX_HORIZONTAL)?;
        self.draw_hline(min_x, max_x, max_y, BOX_HORIZONTAL)?;
        self.draw_vline(min_x, min_y, max_y, BOX_VERTICAL)?;
        self.draw_vline(max_x, min_y, max_y, BOX_VERTICAL)?;

        self.set(min_x, min_y, BOX_CORNER)?;
        self.set(max_x, min_y, BOX_CORNER)?;
        self.set(min_x, max_y, BOX_CORNER)?;
        self.set(max_x, max_y, BOX_CORNER)?;

        Ok(())
    }

    /// Rows top to bottom, blanks rendered as spaces.
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.height).map(move |y| {
            let row = &self.cells[y * self.width..(y + 1) * self.width];
            row.iter().map(|cell| cell.unwrap_or(' ')).collect()
        })
    }

    fn index_of(&self, x: usize, y: usize) -> Result<usize, CanvasError> {
        if !self.in_bounds(x, y) {
            return Err(CanvasError::OutOfBounds { x, y, width: self.width, height: self.height });
        }

        Ok((y * self.width) + x)
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use std::fmt::Write as _;

        for y in 0..self.height {
            for x in 0..self.width {
                let idx = (y * self.width) + x;
                f.write_char(self.cells[idx].unwrap_or(' '))?;
            }

            if y + 1 < self.height {
                f.write_char('\n')?;
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanvasError {
    AreaOverflow { width: usize, height: usize },
    TooLarge { width: usize, height: usize, max_cells: usize },
    OutOfBounds { x: usize, y: usize, width: usize, height: usize },
}

impl fmt::Display for CanvasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AreaOverflow { width, height } => {
                write!(f, "canvas area overflow: {width}*{height}")
            }
            Self::TooLarge { width, height, max_cells } => {
                write!(f, "canvas too large: {width}x{height} exceeds {max_cells} cells")
            }
            Self::OutOfBounds { x, y, width, height } => {
                write!(f, "out of bounds: ({x},{y}) for {width}x{height} canvas")
            }
        }
    }
}

impl std::error::Error for CanvasError {}

#[cfg(test)]
mod tests {
    use super::{Canvas, CanvasError, MAX_CANVAS_CELLS};

    #[test]
    fn set_and_get_in_bounds() {
        let mut c = Canvas::new(3, 2).expect("canvas");
        assert_eq!(c.get(1, 0).unwrap(), None);
        c.set(1, 0, 'X').unwrap();
        assert_eq!(c.get(1, 0).unwrap(), Some('X'));
        assert_eq!(c.to_string(), " X \n   ");
    }

    #[test]
    fn set_out_of_bounds_errors() {
        let mut c = Canvas::new(2, 2).expect("canvas");
        let err = c.set(2, 0, 'X').unwrap_err();
        assert_eq!(err, CanvasError::OutOfBounds { x: 2, y: 0, width: 2, height: 2 });
    }

    #[test]
    fn write_str_skips_spaces() {
        let mut c = Canvas::new(5, 1).expect("canvas");
        c.draw_hline(0, 4, 0, '-').unwrap();
        c.write_str(0, 0, "a b c").unwrap();
        assert_eq!(c.to_string(), "a-b-c");
    }

    #[test]
    fn write_str_past_the_edge_is_not_partial() {
        let mut c = Canvas::new(4, 1).expect("canvas");
        let err = c.write_str(2, 0, "abc").unwrap_err();
        assert_eq!(err, CanvasError::OutOfBounds { x: 4, y: 0, width: 4, height: 1 });
        assert_eq!(c.to_string(), "    ");
    }

    #[test]
    fn rejects_area_overflow_and_huge_grids() {
        assert_eq!(
            Canvas::new(usize::MAX, 2).unwrap_err(),
            CanvasError::AreaOverflow { width: usize::MAX, height: 2 }
        );
        assert!(matches!(
            Canvas::new(MAX_CANVAS_CELLS, 2).unwrap_err(),
            CanvasError::TooLarge { .. }
        ));
    }

    #[test]
    fn draw_box_draws_ascii_corners_and_edges() {
        let mut c = Canvas::new(6, 5).expect("canvas");
        c.draw_box(1, 1, 4, 3).unwrap();
        assert_eq!(c.to_string(), "      \n +--+ \n |  | \n +--+ \n      ");
    }

    #[test]
    fn draw_box_out_of_bounds_is_not_partial() {
        let mut c = Canvas::new(4, 3).expect("canvas");
        let err = c.draw_box(0, 0, 4, 2).unwrap_err();
        assert_eq!(err, CanvasError::OutOfBounds { x: 4, y: 2, width: 4, height: 3 });
        assert_eq!(c.to_string(), "    \n    \n    ");
    }

    #[test]
    fn later_glyphs_overwrite_earlier_ones() {
        let mut c = Canvas::new(5, 3).expect("canvas");
        c.draw_vline(2, 0, 2, '|').unwrap();
        c.draw_hline(0, 4, 1, '-').unwrap();
        assert_eq!(c.to_string(), "  |  \n-----\n  |  ");
    }

    #[test]
    fn rows_pad_blanks_with_spaces() {
        let mut c = Canvas::new(3, 2).expect("canvas");
        c.set(0, 1, 'z').unwrap();
        assert_eq!(c.rows().collect::<Vec<_>>(), vec!["   ".to_owned(), "z  ".to_owned()]);
    }

    #[test]
    fn zero_width_canvas_has_empty_rows() {
        let c = Canvas::new(0, 2).expect("canvas");
        assert_eq!(c.to_string(), "\n");
    }
}
