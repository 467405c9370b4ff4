//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data with no external dependencies, making them usable
//! in any context (core simulation, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! Default playfield dimensions:
//!
//! - **Height**: 24 rows (indexed 0-23, row 0 is the top)
//! - **Width**: 10 columns (indexed 0-9)
//! - **Spawn position**: row 0, column `(width - 1) / 2`
//!
//! Coordinates are used like matrix indices: `(row, col)`.
//!
//! # Timing
//!
//! The board owns no clock. Drivers render at a fixed frame period
//! ([`FRAME_MS`]) and call `update()` once every `threshold` frames, where
//!
//! ```text
//! threshold(level) = floor(BASE_TICK_THRESHOLD * TICK_THRESHOLD_DECAY^level) + 1
//! ```
//!
//! | Level | Threshold | Ticks/s at 60 FPS |
//! |-------|-----------|-------------------|
//! | 0 | 60 | 1.0 |
//! | 1 | 48 | 1.25 |
//! | 2 | 38 | 1.6 |
//! | 5 | 20 | 3.0 |
//! | 10 | 7 | 8.6 |
//! | 19+ | 1 | 60 |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Rotation, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let kind = ShapeKind::from_index(3).unwrap();
//! assert_eq!(kind, ShapeKind::I);
//!
//! let rotation = Rotation::Deg0.next();
//! assert_eq!(rotation, Rotation::Deg90);
//! assert_eq!(Rotation::Deg0.previous(), Rotation::Deg270);
//!
//! assert_eq!(BOARD_HEIGHT, 24);
//! assert_eq!(BOARD_WIDTH, 10);
//! ```

/// Board height in cells (24 rows)
pub const BOARD_HEIGHT: usize = 24;

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: usize = 10;

/// Frame period of the reference driver in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u64 = 16;

/// Cleared lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Frames between ticks at level 0, minus one
pub const BASE_TICK_THRESHOLD: f64 = 59.0;

/// Per-level geometric decay of the tick threshold
pub const TICK_THRESHOLD_DECAY: f64 = 0.8;

/// State of a single cell.
///
/// `0` means empty. Any other value is an opaque identity/color byte carried
/// by the piece that produced it.
pub type CellState = u8;

/// The empty cell state
pub const EMPTY: CellState = 0;


/// The seven tetromino shape kinds
///
/// The discriminant is the catalog index (0..7):
/// - **O**: 2x2 square
/// - **L**: 3x2, foot to the right
/// - **J**: 3x2, foot to the left (mirror of L)
/// - **I**: 4x1 vertical bar
/// - **S**: 2x3
/// - **T**: 2x3, stem pointing up
/// - **Z**: 2x3 (mirror of S)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    O = 0,
    L = 1,
    J = 2,
    I = 3,
    S = 4,
    T = 5,
    Z = 6,
}

impl ShapeKind {
    /// Number of shape kinds in the catalog
    pub const COUNT: usize = 7;

    /// All shape kinds in catalog order
    pub const ALL: [ShapeKind; Self::COUNT] = [
        ShapeKind::O,
        ShapeKind::L,
        ShapeKind::J,
        ShapeKind::I,
        ShapeKind::S,
        ShapeKind::T,
        ShapeKind::Z,
    ];

    /// Look up a shape kind by catalog index
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_index(0), Some(ShapeKind::O));
    /// assert_eq!(ShapeKind::from_index(6), Some(ShapeKind::Z));
    /// assert_eq!(ShapeKind::from_index(7), None);
    /// ```
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Catalog index of this kind
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Quarter-turn rotation of a piece, clockwise from its catalog orientation
///
/// The cycle goes: 0° → 90° → 180° → 270° → 0°
///
/// Rotation also owns the coordinate remap between a piece's rotated frame
/// and its base shape. Rotating a matrix 90° clockwise is transposing it and
/// reversing the column order, which gives, for base dimensions `(bh, bw)`
/// and rotated-frame coordinates `(i, j)`:
///
/// | rotation | base coordinate |
/// |---|---|
/// | 0° | `(i, j)` |
/// | 90° | `(bh-1-j, i)` |
/// | 180° | `(bh-1-i, bw-1-j)` |
/// | 270° | `(j, bw-1-i)` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    #[default]
    Deg0 = 0,
    Deg90 = 1,
    Deg180 = 2,
    Deg270 = 3,
}

impl Rotation {
    /// All rotations in clockwise order
    pub const ALL: [Rotation; 4] = [
        Rotation::Deg0,
        Rotation::Deg90,
        Rotation::Deg180,
        Rotation::Deg270,
    ];

    fn from_quarters(quarters: u8) -> Self {
        Self::ALL[(quarters % 4) as usize]
    }

    /// Rotate clockwise (90°)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::Rotation;
    ///
    /// assert_eq!(Rotation::Deg0.next(), Rotation::Deg90);
    /// assert_eq!(Rotation::Deg90.next(), Rotation::Deg180);
    /// assert_eq!(Rotation::Deg180.next(), Rotation::Deg270);
    /// assert_eq!(Rotation::Deg270.next(), Rotation::Deg0);
    /// ```
    pub fn next(self) -> Self {
        Self::from_quarters(self as u8 + 1)
    }

    /// Rotate counter-clockwise (-90° or 270°)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::Rotation;
    ///
    /// assert_eq!(Rotation::Deg0.previous(), Rotation::Deg270);
    /// assert_eq!(Rotation::Deg270.previous(), Rotation::Deg180);
    /// assert_eq!(Rotation::Deg180.previous(), Rotation::Deg90);
    /// assert_eq!(Rotation::Deg90.previous(), Rotation::Deg0);
    /// ```
    pub fn previous(self) -> Self {
        // +3 instead of -1 keeps the arithmetic unsigned.
        Self::from_quarters(self as u8 + 3)
    }

    /// Whether height and width are swapped in this rotation
    pub fn is_transposed(self) -> bool {
        matches!(self, Rotation::Deg90 | Rotation::Deg270)
    }

    /// Rotated `(height, width)` of a base shape of size `(bh, bw)`
    pub fn dims(self, bh: usize, bw: usize) -> (usize, usize) {
        if self.is_transposed() {
            (bw, bh)
        } else {
            (bh, bw)
        }
    }

    /// Map rotated-frame coordinates `(i, j)` to base-shape coordinates.
    ///
    /// `(i, j)` must lie inside `dims(bh, bw)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::Rotation;
    ///
    /// // 3x2 base, rotated 90°: the rotated frame is 2x3
    /// assert_eq!(Rotation::Deg90.to_base(3, 2, 0, 0), (2, 0));
    /// assert_eq!(Rotation::Deg90.to_base(3, 2, 1, 2), (0, 1));
    /// ```
    pub fn to_base(self, bh: usize, bw: usize, i: usize, j: usize) -> (usize, usize) {
        match self {
            Rotation::Deg0 => (i, j),
            Rotation::Deg90 => (bh - 1 - j, i),
            Rotation::Deg180 => (bh - 1 - i, bw - 1 - j),
            Rotation::Deg270 => (j, bw - 1 - i),
        }
    }

    /// Inverse of [`Rotation::to_base`]: map base-shape coordinates back into
    /// the rotated frame.
    pub fn from_base(self, bh: usize, bw: usize, bi: usize, bj: usize) -> (usize, usize) {
        match self {
            Rotation::Deg0 => (bi, bj),
            Rotation::Deg90 => (bj, bh - 1 - bi),
            Rotation::Deg180 => (bh - 1 - bi, bw - 1 - bj),
            Rotation::Deg270 => (bw - 1 - bj, bi),
        }
    }
}

/// Board commands a driver can issue
///
/// Quitting is not a board command; input layers report it separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down
    SoftDrop,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Rotate piece 90° counter-clockwise
    RotateCcw,
}
