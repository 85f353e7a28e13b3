//! Collision module - the single legality check for piece placement
//!
//! Every move, rotation, spawn and drop decision goes through [`collides`].
//! Nothing else in the crate reasons about walls or the floor.

use crate::board::Board;
use crate::game_state::Position;
use crate::shape::Shape;

/// Would `shape`, placed at `position` shifted by (`dx`, `dy`), be illegal?
///
/// A filled cell blocks when its column is left of 0 or at/after the width,
/// when its row is at/below the floor, or when it lands on an occupied grid
/// cell. Rows above the top edge are never blocked, so tall shapes may poke
/// out over the board.
pub fn collides(board: &Board, position: Position, shape: &Shape, dx: i8, dy: i8) -> bool {
    let width = board.width() as i16;
    let height = board.height() as i16;

    shape.cells().any(|(cx, cy)| {
        let x = position.x as i16 + cx as i16 + dx as i16;
        let y = position.y as i16 + cy as i16 + dy as i16;

        if x < 0 || x >= width || y >= height {
            return true;
        }
        // No `y < 0` guard on purpose: only on-grid rows can be occupied.
        y >= 0 && board.is_occupied(y as usize, x as usize)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::base_shape;
    use crate::types::PieceKind;

    fn at(x: i8, y: i8) -> Position {
        Position { x, y }
    }

    #[test]
    fn empty_board_interior_is_free() {
        let board = Board::new(10, 20);
        let o = base_shape(PieceKind::O);
        assert!(!collides(&board, at(3, 0), &o, 0, 0));
        assert!(!collides(&board, at(8, 18), &o, 0, 0));
    }

    #[test]
    fn walls_and_floor_block() {
        let board = Board::new(10, 20);
        let o = base_shape(PieceKind::O);
        assert!(collides(&board, at(0, 5), &o, -1, 0));
        assert!(collides(&board, at(8, 5), &o, 1, 0));
        assert!(collides(&board, at(3, 18), &o, 0, 1));
    }

    #[test]
    fn rows_above_top_are_open() {
        let board = Board::new(10, 20);
        let bar = base_shape(PieceKind::I).rotated();
        assert!(!collides(&board, at(4, -3), &bar, 0, 0));
        assert!(!collides(&board, at(4, 0), &bar, 0, -2));
    }

    #[test]
    fn locked_cells_block() {
        let mut board = Board::new(10, 20);
        board.set(19, 4, Some(PieceKind::Z));
        let o = base_shape(PieceKind::O);
        assert!(!collides(&board, at(3, 17), &o, 0, 0));
        assert!(collides(&board, at(3, 17), &o, 0, 1));
    }

    #[test]
    fn shape_gaps_do_not_collide() {
        let mut board = Board::new(10, 20);
        board.set(18, 4, Some(PieceKind::Z));
        board.set(18, 6, Some(PieceKind::Z));
        let t = base_shape(PieceKind::T);
        assert!(!collides(&board, at(4, 18), &t, 0, 0));
    }

    #[test]
    fn offsets_are_relative_to_position() {
        let mut board = Board::new(10, 20);
        board.set(10, 6, Some(PieceKind::L));
        let i = base_shape(PieceKind::I);
        assert!(!collides(&board, at(0, 10), &i, 0, 0));
        assert!(collides(&board, at(0, 10), &i, 3, 0));
        assert!(collides(&board, at(3, 9), &i, 0, 1));
    }
}
