//! Read model handed to renderers after every engine call.

use crate::game_state::ActivePiece;
use crate::pieces::Piece;
use crate::shape::Shape;
use crate::types::{Cell, PieceKind};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl From<&ActivePiece> for ActiveSnapshot {
    fn from(value: &ActivePiece) -> Self {
        Self {
            kind: value.piece.kind,
            shape: value.piece.shape.clone(),
            x: value.position.x,
            y: value.position.y,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub width: u8,
    pub height: u8,
    /// Locked cells, row-major
    pub board: Vec<Cell>,
    pub active: Option<ActiveSnapshot>,
    /// Landing row of the active piece
    pub ghost_y: Option<i8>,
    pub next: Option<Piece>,
    pub score: u32,
    pub running: bool,
}

impl GameSnapshot {
    /// Locked cell at (`row`, `col`), `None` when empty or off the board
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        if row >= self.height as usize || col >= self.width as usize {
            return None;
        }
        self.board[row * self.width as usize + col]
    }

    pub fn game_over(&self) -> bool {
        !self.running
    }
}
