//! Pieces module - tetromino catalog and matrix rotation
//!
//! Every piece is a small shape matrix: `0` marks an empty slot, any other value is
//! the color tag of the piece kind occupying it. Rotation turns the matrix 90°
//! clockwise around its bounding box; the origin stays where it is and there are no
//! wall kicks. A rotation that ends up colliding is simply rejected by the caller.

use arrayvec::ArrayVec;

use crate::types::PieceKind;

/// Largest side of a shape matrix
pub const MAX_SHAPE_SIDE: usize = 4;

/// Occupied offsets of a shape, relative to the piece origin: `(dx, dy)`
pub type ShapeOffsets = ArrayVec<(i16, i16), { MAX_SHAPE_SIDE * MAX_SHAPE_SIDE }>;

/// A shape matrix of at most 4x4 cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    width: u8,
    height: u8,
    /// Row-major, only `[..height][..width]` is meaningful
    cells: [[u8; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE],
}

impl Shape {
    /// Build a shape from rows of color tags.
    ///
    /// Returns `None` when the matrix is empty, ragged, larger than 4x4, has no
    /// occupied cell, or uses a tag that belongs to no piece kind.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first()?.as_ref().len();
        if height == 0 || width == 0 || height > MAX_SHAPE_SIDE || width > MAX_SHAPE_SIDE {
            return None;
        }

        let mut cells = [[0u8; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE];
        let mut occupied = false;
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return None;
            }
            for (c, &tag) in row.iter().enumerate() {
                if tag != 0 {
                    PieceKind::from_color_tag(tag)?;
                    occupied = true;
                }
                cells[r][c] = tag;
            }
        }
        if !occupied {
            return None;
        }

        Some(Self {
            width: width as u8,
            height: height as u8,
            cells,
        })
    }

    /// Width of the bounding box
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Height of the bounding box
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Color tag at `(col, row)`, `0` if empty or outside the box
    pub fn tag_at(&self, col: usize, row: usize) -> u8 {
        if col >= self.width as usize || row >= self.height as usize {
            return 0;
        }
        self.cells[row][col]
    }

    /// The matrix as nested rows of tags
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..self.height as usize)
            .map(|r| self.cells[r][..self.width as usize].to_vec())
            .collect()
    }

    /// Occupied offsets `(dx, dy)` in row-major order
    pub fn offsets(&self) -> ShapeOffsets {
        let mut out = ShapeOffsets::new();
        for r in 0..self.height as usize {
            for c in 0..self.width as usize {
                if self.cells[r][c] != 0 {
                    out.push((c as i16, r as i16));
                }
            }
        }
        out
    }

    /// Occupied offsets with the kind each one is colored by
    pub fn minos(&self) -> ArrayVec<(i16, i16, PieceKind), { MAX_SHAPE_SIDE * MAX_SHAPE_SIDE }> {
        let mut out = ArrayVec::new();
        for r in 0..self.height as usize {
            for c in 0..self.width as usize {
                if let Some(kind) = PieceKind::from_color_tag(self.cells[r][c]) {
                    out.push((c as i16, r as i16, kind));
                }
            }
        }
        out
    }

    /// Kind of the first occupied cell (row-major)
    pub fn kind(&self) -> Option<PieceKind> {
        self.minos().first().map(|&(_, _, kind)| kind)
    }

    /// Rotate 90° clockwise
    pub fn rotate_cw(&self) -> Self {
        let (w, h) = (self.width as usize, self.height as usize);
        let mut cells = [[0u8; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE];
        // new[r][c] = old[h - 1 - c][r], new box is h wide and w tall
        for r in 0..w {
            for c in 0..h {
                cells[r][c] = self.cells[h - 1 - c][r];
            }
        }
        Self {
            width: self.height,
            height: self.width,
            cells,
        }
    }

    /// Rotate 90° counter-clockwise
    pub fn rotate_ccw(&self) -> Self {
        self.rotate_cw().rotate_cw().rotate_cw()
    }
}

/// Base shape for a piece kind (spawn orientation)
pub fn base_shape(kind: PieceKind) -> Shape {
    let t = kind.color_tag();
    let (width, height, layout): (u8, u8, [[bool; MAX_SHAPE_SIDE]; 2]) = match kind {
        PieceKind::I => (4, 1, [[true, true, true, true], [false; 4]]),
        PieceKind::O => (2, 2, [[true, true, false, false], [true, true, false, false]]),
        PieceKind::T => (3, 2, [[false, true, false, false], [true, true, true, false]]),
        PieceKind::S => (3, 2, [[false, true, true, false], [true, true, false, false]]),
        PieceKind::Z => (3, 2, [[true, true, false, false], [false, true, true, false]]),
        PieceKind::J => (3, 2, [[true, false, false, false], [true, true, true, false]]),
        PieceKind::L => (3, 2, [[false, false, true, false], [true, true, true, false]]),
    };

    let mut cells = [[0u8; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE];
    for (r, row) in layout.iter().enumerate() {
        for (c, &filled) in row.iter().enumerate() {
            if filled {
                cells[r][c] = t;
            }
        }
    }

    Shape {
        width,
        height,
        cells,
    }
}

/// A piece on the board: a shape matrix anchored at an origin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub shape: Shape,
    pub x: i16,
    pub y: i16,
}

impl Piece {
    /// Create a piece from an arbitrary shape at `(x, y)`
    pub fn new(shape: Shape, x: i16, y: i16) -> Self {
        Self { shape, x, y }
    }

    /// Create a catalog piece at its spawn position on a board `columns` wide
    pub fn spawn(kind: PieceKind, columns: u16) -> Self {
        let shape = base_shape(kind);
        let (x, y) = spawn_position(&shape, columns);
        Self { shape, x, y }
    }

    /// Kind used for logging and previews
    pub fn kind(&self) -> Option<PieceKind> {
        self.shape.kind()
    }

    /// Absolute board cells covered by the piece, with their kinds
    ///
    /// Cells whose coordinates overflow `i16` are skipped; they can never be on a board.
    pub fn cells(&self) -> impl Iterator<Item = (i16, i16, PieceKind)> + '_ {
        self.shape.minos().into_iter().filter_map(move |(dx, dy, kind)| {
            let (x, y) = offset(self.x, self.y, dx, dy)?;
            Some((x, y, kind))
        })
    }

    /// Same piece shifted by `(dx, dy)`, or `None` if the origin would overflow
    pub fn shifted(&self, dx: i16, dy: i16) -> Option<Self> {
        let (x, y) = offset(self.x, self.y, dx, dy)?;
        Some(Self { x, y, ..*self })
    }

    /// Same piece with its shape rotated clockwise, origin unchanged
    pub fn rotated(&self) -> Self {
        Self {
            shape: self.shape.rotate_cw(),
            ..*self
        }
    }
}

/// `(x + dx, y + dy)`, or `None` on overflow
pub fn offset(x: i16, y: i16, dx: i16, dy: i16) -> Option<(i16, i16)> {
    Some((x.checked_add(dx)?, y.checked_add(dy)?))
}

/// Spawn origin: horizontally centered, top row
pub fn spawn_position(shape: &Shape, columns: u16) -> (i16, i16) {
    let x = (columns as i16 - shape.width() as i16) / 2;
    (x, 0)
}

/// Try to rotate a piece clockwise in place (no wall kicks)
/// Returns the rotated piece if every mino is valid at the current origin
pub fn try_rotate(piece: &Piece, is_valid: impl Fn(i16, i16) -> bool) -> Option<Piece> {
    let candidate = piece.rotated();
    let fits = candidate
        .shape
        .offsets()
        .iter()
        .all(|&(dx, dy)| {
            offset(candidate.x, candidate.y, dx, dy).is_some_and(|(x, y)| is_valid(x, y))
        });

    fits.then_some(candidate)
}
