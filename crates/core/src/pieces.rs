//! Pieces module - the fixed catalog of seven tetrominoes
//!
//! Each kind has one base orientation. Pieces handed out by the catalog are
//! independent copies, so rotating a piece never alters the catalog.

use crate::shape::Shape;
use crate::types::PieceKind;

/// Base occupancy matrix for a piece kind
pub fn base_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => Shape::from_rows(&[&[1, 1, 1, 1]]),
        PieceKind::O => Shape::from_rows(&[&[1, 1], &[1, 1]]),
        PieceKind::T => Shape::from_rows(&[&[0, 1, 0], &[1, 1, 1]]),
        PieceKind::S => Shape::from_rows(&[&[0, 1, 1], &[1, 1, 0]]),
        PieceKind::Z => Shape::from_rows(&[&[1, 1, 0], &[0, 1, 1]]),
        PieceKind::J => Shape::from_rows(&[&[1, 0, 0], &[1, 1, 1]]),
        PieceKind::L => Shape::from_rows(&[&[0, 0, 1], &[1, 1, 1]]),
    }
}

/// A piece instance: its color tag and its current orientation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
}

impl Piece {
    /// Fresh piece in its base orientation
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            shape: base_shape(kind),
        }
    }

    /// Same piece turned 90° clockwise
    pub fn rotated(&self) -> Self {
        Self {
            kind: self.kind,
            shape: self.shape.rotated(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_has_four_cells() {
        for kind in PieceKind::ALL {
            assert_eq!(base_shape(kind).cells().count(), 4, "{kind:?}");
        }
    }

    #[test]
    fn dimensions_are_not_padded() {
        let dims = |k| {
            let s = base_shape(k);
            (s.height(), s.width())
        };
        assert_eq!(dims(PieceKind::I), (1, 4));
        assert_eq!(dims(PieceKind::O), (2, 2));
        for kind in [PieceKind::T, PieceKind::S, PieceKind::Z, PieceKind::J, PieceKind::L] {
            assert_eq!(dims(kind), (2, 3));
        }
    }

    #[test]
    fn rotating_a_piece_leaves_catalog_intact() {
        let piece = Piece::new(PieceKind::L);
        let turned = piece.rotated();
        assert_ne!(turned.shape, piece.shape);
        assert_eq!(Piece::new(PieceKind::L).shape, base_shape(PieceKind::L));
        assert_eq!(turned.kind, PieceKind::L);
    }
}
