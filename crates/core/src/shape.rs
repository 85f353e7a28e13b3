//! Shape module - occupancy matrices and the rotation transform
//!
//! A shape is a small row-major matrix of filled/empty flags. Dimensions are
//! per shape (1x4, 2x2, 2x3, ...) and never padded to a common box.
//! Rotation builds a new matrix; shapes are never mutated in place.

use arrayvec::ArrayVec;

/// Largest supported side of a shape matrix
pub const MAX_SHAPE_SIDE: usize = 4;

/// Offset of a filled cell from the shape's top-left corner, as `(x, y)`
pub type CellOffset = (i8, i8);

/// Immutable occupancy matrix
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    /// Row-major flags (`row * cols + col`)
    cells: ArrayVec<bool, { MAX_SHAPE_SIDE * MAX_SHAPE_SIDE }>,
}

impl Shape {
    /// Build a shape from 0/1 rows.
    ///
    /// # Panics
    ///
    /// Panics if the matrix is empty, ragged or larger than 4x4.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        assert!(
            !rows.is_empty() && rows.len() <= MAX_SHAPE_SIDE,
            "shape must have 1..={MAX_SHAPE_SIDE} rows, got {}",
            rows.len()
        );
        let cols = rows[0].len();
        assert!(
            cols > 0 && cols <= MAX_SHAPE_SIDE,
            "shape must have 1..={MAX_SHAPE_SIDE} columns, got {cols}"
        );

        let mut cells = ArrayVec::new();
        for row in rows {
            assert_eq!(row.len(), cols, "ragged shape row");
            cells.extend(row.iter().map(|&v| v != 0));
        }

        Self {
            rows: rows.len() as u8,
            cols: cols as u8,
            cells,
        }
    }

    /// Number of rows
    pub fn height(&self) -> u8 {
        self.rows
    }

    /// Number of columns
    pub fn width(&self) -> u8 {
        self.cols
    }

    /// Whether the matrix cell at (`row`, `col`) is filled.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate lies outside the matrix.
    pub fn is_filled(&self, row: u8, col: u8) -> bool {
        assert!(
            row < self.rows && col < self.cols,
            "({row}, {col}) outside {}x{} shape",
            self.rows,
            self.cols
        );
        self.cells[row as usize * self.cols as usize + col as usize]
    }

    /// Offsets of filled cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = CellOffset> + '_ {
        let cols = self.cols as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &filled)| filled)
            .map(move |(i, _)| ((i % cols) as i8, (i / cols) as i8))
    }

    /// Rotate 90° clockwise.
    ///
    /// Transpose then reverse each row: an R x C input gives a C x R output
    /// with `out[i][j] = in[R - 1 - j][i]`.
    pub fn rotated(&self) -> Self {
        let (r, c) = (self.rows as usize, self.cols as usize);
        let mut cells = ArrayVec::new();
        for i in 0..c {
            for j in 0..r {
                cells.push(self.cells[(r - 1 - j) * c + i]);
            }
        }

        Self {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_keeps_dimensions() {
        let bar = Shape::from_rows(&[&[1, 1, 1, 1]]);
        assert_eq!((bar.height(), bar.width()), (1, 4));

        let t = Shape::from_rows(&[&[0, 1, 0], &[1, 1, 1]]);
        assert_eq!((t.height(), t.width()), (2, 3));
        assert!(!t.is_filled(0, 0));
        assert!(t.is_filled(0, 1));
        assert!(t.is_filled(1, 2));
    }

    #[test]
    fn cells_are_x_y_offsets() {
        let t = Shape::from_rows(&[&[0, 1, 0], &[1, 1, 1]]);
        let cells: Vec<_> = t.cells().collect();
        assert_eq!(cells, vec![(1, 0), (0, 1), (1, 1), (2, 1)]);
    }

    #[test]
    fn rotation_swaps_dimensions() {
        let bar = Shape::from_rows(&[&[1, 1, 1, 1]]);
        let upright = bar.rotated();
        assert_eq!((upright.height(), upright.width()), (4, 1));
        assert_eq!(upright, Shape::from_rows(&[&[1], &[1], &[1], &[1]]));
    }

    #[test]
    fn rotation_is_clockwise() {
        // J: [1,0,0]    rotated: [1,1]
        //    [1,1,1]             [1,0]
        //                        [1,0]
        let j = Shape::from_rows(&[&[1, 0, 0], &[1, 1, 1]]);
        assert_eq!(
            j.rotated(),
            Shape::from_rows(&[&[1, 1], &[1, 0], &[1, 0]])
        );
    }

    #[test]
    fn rotation_does_not_touch_source() {
        let s = Shape::from_rows(&[&[0, 1, 1], &[1, 1, 0]]);
        let copy = s.clone();
        let _ = s.rotated();
        assert_eq!(s, copy);
    }

    #[test]
    #[should_panic(expected = "ragged")]
    fn ragged_rows_panic() {
        Shape::from_rows(&[&[1, 1], &[1]]);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn out_of_range_query_panics() {
        let o = Shape::from_rows(&[&[1, 1], &[1, 1]]);
        o.is_filled(2, 0);
    }
}
