//! Pieces module - shape catalog, piece geometry, and rotation
//!
//! Each of the seven piece kinds has a square base geometry matrix (2x2, 3x3,
//! or 4x4) and a fixed display color. A piece instance pairs a matrix with an
//! anchor position; rotation is a 90° clockwise index transform of the matrix,
//! with a fixed wall-kick fallback sequence when the rotated position is
//! blocked.

use arrayvec::ArrayVec;

use crate::types::{PieceKind, BOARD_WIDTH};

/// Backing grid side for the largest shape (the I piece)
const MAX_SHAPE_SIZE: usize = 4;

/// Spawn anchor for new pieces (x, y); y starts above the visible board
pub const SPAWN_POSITION: (i8, i8) = (BOARD_WIDTH as i8 / 2 - 1, -1);

/// Kick offsets tried, in order, when a rotation is blocked at its anchor
pub const WALL_KICKS: [(i8, i8); 5] = [(1, 0), (-1, 0), (0, -1), (1, -1), (-1, -1)];

/// Square 0/1 geometry matrix of a piece
///
/// The logical side length is 2, 3, or 4; the backing grid is fixed at 4x4 so
/// the value stays `Copy` and rotation allocates nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    size: usize,
    grid: [[u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl Shape {
    /// Logical side length of the matrix
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the matrix cell at (row, col) is occupied
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size && self.grid[row][col] != 0
    }

    /// Apply the 90° clockwise transform: `new[j][n-1-i] = old[i][j]`
    ///
    /// Closes after exactly 4 applications for every catalog shape.
    pub fn rotated_cw(&self) -> Shape {
        let n = self.size;
        let mut grid = [[0u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (i, row) in self.grid.iter().enumerate().take(n) {
            for (j, &cell) in row.iter().enumerate().take(n) {
                grid[j][n - 1 - i] = cell;
            }
        }
        Shape { size: n, grid }
    }

    fn from_2x2(rows: [[u8; 2]; 2]) -> Shape {
        let mut grid = [[0u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (i, row) in rows.iter().enumerate() {
            grid[i][..2].copy_from_slice(row);
        }
        Shape { size: 2, grid }
    }

    fn from_3x3(rows: [[u8; 3]; 3]) -> Shape {
        let mut grid = [[0u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (i, row) in rows.iter().enumerate() {
            grid[i][..3].copy_from_slice(row);
        }
        Shape { size: 3, grid }
    }

    fn from_4x4(rows: [[u8; 4]; 4]) -> Shape {
        Shape { size: 4, grid: rows }
    }
}

/// Get the base (spawn orientation) geometry matrix for a piece kind
pub fn base_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => Shape::from_4x4([
            [0, 0, 0, 0],
            [1, 1, 1, 1],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ]),
        PieceKind::O => Shape::from_2x2([
            [1, 1],
            [1, 1],
        ]),
        PieceKind::T => Shape::from_3x3([
            [0, 1, 0],
            [1, 1, 1],
            [0, 0, 0],
        ]),
        PieceKind::S => Shape::from_3x3([
            [0, 1, 1],
            [1, 1, 0],
            [0, 0, 0],
        ]),
        PieceKind::Z => Shape::from_3x3([
            [1, 1, 0],
            [0, 1, 1],
            [0, 0, 0],
        ]),
        PieceKind::J => Shape::from_3x3([
            [1, 0, 0],
            [1, 1, 1],
            [0, 0, 0],
        ]),
        PieceKind::L => Shape::from_3x3([
            [0, 0, 1],
            [1, 1, 1],
            [0, 0, 0],
        ]),
    }
}

/// Get the display color for a piece kind
pub fn color_of(kind: PieceKind) -> &'static str {
    match kind {
        PieceKind::I => "#00f0f0",
        PieceKind::O => "#f0f000",
        PieceKind::T => "#a000f0",
        PieceKind::S => "#00f000",
        PieceKind::Z => "#f00000",
        PieceKind::J => "#0000f0",
        PieceKind::L => "#f0a000",
    }
}

/// A piece instance: geometry matrix plus anchor position
///
/// Plain `Copy` data, replaced wholesale on every mutation. The anchor y may
/// be negative while the piece is still above the visible board during spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl Tetromino {
    /// Create a piece of the given kind at the given anchor, in base orientation
    pub fn new(kind: PieceKind, x: i8, y: i8) -> Self {
        Self {
            kind,
            shape: base_shape(kind),
            x,
            y,
        }
    }

    /// Create a piece at the canonical spawn anchor
    pub fn spawn(kind: PieceKind) -> Self {
        Self::new(kind, SPAWN_POSITION.0, SPAWN_POSITION.1)
    }

    /// Display color of this piece
    pub fn color(&self) -> &'static str {
        color_of(self.kind)
    }

    /// Absolute board coordinates of every occupied matrix cell
    ///
    /// Row-major order (top-to-bottom, left-to-right), recomputed on demand.
    pub fn blocks(&self) -> ArrayVec<(i8, i8), 16> {
        let mut blocks = ArrayVec::new();
        let n = self.shape.size();
        for row in 0..n {
            for col in 0..n {
                if self.shape.is_filled(row, col) {
                    blocks.push((self.x + col as i8, self.y + row as i8));
                }
            }
        }
        blocks
    }

    /// A copy of this piece rotated 90° clockwise, same anchor
    pub fn rotated_cw(&self) -> Tetromino {
        Tetromino {
            shape: self.shape.rotated_cw(),
            ..*self
        }
    }
}

/// Try to rotate a piece clockwise with wall-kick fallback
///
/// The rotated piece is tried at the unchanged anchor first, then at each
/// [`WALL_KICKS`] offset in order. Returns the first candidate accepted by the
/// validity predicate, or `None` if every candidate is rejected (the caller
/// keeps the pre-rotation piece in that case).
pub fn try_rotate(
    piece: &Tetromino,
    is_valid: impl Fn(&Tetromino) -> bool,
) -> Option<Tetromino> {
    let rotated = piece.rotated_cw();
    if is_valid(&rotated) {
        return Some(rotated);
    }

    for &(dx, dy) in WALL_KICKS.iter() {
        let kicked = Tetromino {
            x: rotated.x + dx,
            y: rotated.y + dy,
            ..rotated
        };
        if is_valid(&kicked) {
            return Some(kicked);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_cells(shape: &Shape) -> Vec<(usize, usize)> {
        let n = shape.size();
        let mut cells = Vec::new();
        for row in 0..n {
            for col in 0..n {
                if shape.is_filled(row, col) {
                    cells.push((row, col));
                }
            }
        }
        cells
    }

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(base_shape(PieceKind::I).size(), 4);
        assert_eq!(base_shape(PieceKind::O).size(), 2);
        for kind in [
            PieceKind::T,
            PieceKind::S,
            PieceKind::Z,
            PieceKind::J,
            PieceKind::L,
        ] {
            assert_eq!(base_shape(kind).size(), 3, "{:?} should be 3x3", kind);
        }
    }

    #[test]
    fn test_every_shape_has_four_blocks() {
        for kind in [
            PieceKind::I,
            PieceKind::O,
            PieceKind::T,
            PieceKind::S,
            PieceKind::Z,
            PieceKind::J,
            PieceKind::L,
        ] {
            assert_eq!(filled_cells(&base_shape(kind)).len(), 4);
        }
    }

    #[test]
    fn test_i_base_shape() {
        let shape = base_shape(PieceKind::I);
        assert_eq!(filled_cells(&shape), vec![(1, 0), (1, 1), (1, 2), (1, 3)]);
    }

    #[test]
    fn test_t_base_shape() {
        let shape = base_shape(PieceKind::T);
        assert_eq!(filled_cells(&shape), vec![(0, 1), (1, 0), (1, 1), (1, 2)]);
    }

    #[test]
    fn test_rotation_transform() {
        // T rotated once points right: column 2 of the old top row lands at
        // (1, 2), the old (1, 0) at (0, 1), etc.
        let rotated = base_shape(PieceKind::T).rotated_cw();
        assert_eq!(filled_cells(&rotated), vec![(0, 1), (1, 1), (1, 2), (2, 1)]);
    }

    #[test]
    fn test_rotation_closure_after_four_turns() {
        for kind in [
            PieceKind::I,
            PieceKind::O,
            PieceKind::T,
            PieceKind::S,
            PieceKind::Z,
            PieceKind::J,
            PieceKind::L,
        ] {
            let base = base_shape(kind);
            let mut shape = base;
            for _ in 0..4 {
                shape = shape.rotated_cw();
            }
            assert_eq!(shape, base, "{:?} should close after 4 rotations", kind);
        }
    }

    #[test]
    fn test_o_rotation_is_invariant() {
        let base = base_shape(PieceKind::O);
        assert_eq!(base.rotated_cw(), base);
    }

    #[test]
    fn test_blocks_row_major_order() {
        let piece = Tetromino::new(PieceKind::T, 3, 5);
        let blocks: Vec<(i8, i8)> = piece.blocks().into_iter().collect();
        assert_eq!(blocks, vec![(4, 5), (3, 6), (4, 6), (5, 6)]);
    }

    #[test]
    fn test_blocks_with_negative_anchor() {
        let piece = Tetromino::spawn(PieceKind::O);
        let blocks: Vec<(i8, i8)> = piece.blocks().into_iter().collect();
        assert_eq!(blocks, vec![(4, -1), (5, -1), (4, 0), (5, 0)]);
    }

    #[test]
    fn test_spawn_position() {
        assert_eq!(SPAWN_POSITION, (4, -1));
        let piece = Tetromino::spawn(PieceKind::L);
        assert_eq!((piece.x, piece.y), SPAWN_POSITION);
    }

    #[test]
    fn test_rotated_piece_keeps_anchor_and_kind() {
        let piece = Tetromino::new(PieceKind::S, 2, 7);
        let rotated = piece.rotated_cw();
        assert_eq!(rotated.kind, PieceKind::S);
        assert_eq!((rotated.x, rotated.y), (2, 7));
        assert_ne!(rotated.shape, piece.shape);
    }

    #[test]
    fn test_try_rotate_unkicked_position_wins() {
        let piece = Tetromino::new(PieceKind::T, 3, 5);
        let result = try_rotate(&piece, |_| true).unwrap();
        assert_eq!((result.x, result.y), (3, 5));
    }

    #[test]
    fn test_try_rotate_first_accepted_kick_wins() {
        // Reject everything except anchors shifted one column right.
        let piece = Tetromino::new(PieceKind::T, 3, 5);
        let result = try_rotate(&piece, |candidate| candidate.x == 4).unwrap();
        assert_eq!((result.x, result.y), (4, 5));
    }

    #[test]
    fn test_try_rotate_all_candidates_rejected() {
        let piece = Tetromino::new(PieceKind::T, 3, 5);
        assert!(try_rotate(&piece, |_| false).is_none());
    }

    #[test]
    fn test_colors_are_distinct() {
        let kinds = [
            PieceKind::I,
            PieceKind::O,
            PieceKind::T,
            PieceKind::S,
            PieceKind::Z,
            PieceKind::J,
            PieceKind::L,
        ];
        for a in kinds.iter() {
            for b in kinds.iter() {
                if a != b {
                    assert_ne!(color_of(*a), color_of(*b));
                }
            }
        }
    }
}
