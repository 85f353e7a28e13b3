//! Board module - the grid of locked cells
//!
//! The board is a `height` x `width` grid where each cell is empty or tagged
//! with the kind that filled it. Storage is a flat row-major vector sized once
//! at construction; the dimensions never change afterwards.
//!
//! Coordinates are `(row, col)` with row 0 at the top. Every accessor treats an
//! out-of-range coordinate as a caller bug and panics. Bounds decisions for
//! moving pieces belong to [`collides`](crate::collision::collides), not here.

use crate::game_state::Position;
use crate::shape::Shape;
use crate::types::{Cell, PieceKind};

/// The locked-cell grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (row * width + col)
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board
    pub fn new(width: u8, height: u8) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    /// Empty every cell
    pub fn reset(&mut self) {
        self.cells.fill(None);
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.height as usize && col < self.width as usize,
            "cell ({row}, {col}) outside {}x{} board",
            self.height,
            self.width
        );
        row * self.width as usize + col
    }

    /// Cell at (`row`, `col`)
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    /// Overwrite the cell at (`row`, `col`)
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        let idx = self.index(row, col);
        self.cells[idx] = cell;
    }

    /// Whether (`row`, `col`) holds a locked cell
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some()
    }

    /// One row of cells, left to right
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = self.index(row, 0);
        &self.cells[start..start + self.width as usize]
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        self.row(row).iter().all(|cell| cell.is_some())
    }

    /// All cells, row-major
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Write `kind` into every filled cell of `shape` placed at `position`.
    ///
    /// No legality check is made; callers ask the collision oracle first.
    /// Cells still above the top edge are dropped, since those rows are not
    /// part of the grid. Any other cell outside the grid panics.
    pub fn lock(&mut self, shape: &Shape, kind: PieceKind, position: Position) {
        for (dx, dy) in shape.cells() {
            let col = position.x as i16 + dx as i16;
            let row = position.y as i16 + dy as i16;
            if row < 0 {
                continue;
            }
            assert!(col >= 0, "locking cell ({row}, {col}) outside the board");
            self.set(row as usize, col as usize, Some(kind));
        }
    }

    /// Remove every full row and return how many were removed.
    ///
    /// Remaining rows keep their order and settle at the bottom; the freed rows
    /// at the top are emptied, so the height is unchanged.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = self.width as usize;
        let height = self.height as usize;
        let mut cleared = 0;
        let mut write_row = height;

        // Scan bottom to top, compacting kept rows downwards.
        for read_row in (0..height).rev() {
            if self.is_row_full(read_row) {
                cleared += 1;
                continue;
            }
            write_row -= 1;
            if write_row != read_row {
                let src = read_row * width;
                self.cells.copy_within(src..src + width, write_row * width);
            }
        }

        self.cells[..write_row * width].fill(None);
        cleared
    }

    /// Build a board from text rows for tests: `.` is empty, a piece letter is
    /// a cell of that kind.
    #[cfg(test)]
    pub fn from_ascii(rows: &[&str]) -> Self {
        let height = rows.len();
        let width = rows[0].len();
        let mut board = Self::new(width as u8, height as u8);
        for (r, line) in rows.iter().enumerate() {
            assert_eq!(line.len(), width, "ragged board row {r}");
            for (c, ch) in line.chars().enumerate() {
                if ch != '.' {
                    board.set(r, c, PieceKind::from_str(&ch.to_string()));
                }
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(crate::types::BOARD_WIDTH, crate::types::BOARD_HEIGHT)
    }
}
