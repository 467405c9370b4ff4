//! Piece module - the falling piece
//!
//! A [`FallingPiece`] is a catalog shape placed on the board at an origin
//! (its top-left corner under the current rotation), plus a rotation and a
//! non-zero state tag. All queries refer to the rotated shape.
//!
//! The piece does no bounds checking of its own: it may sit partly or fully
//! outside the board while the board tests a speculative move.

use std::num::NonZeroU8;

use crate::shapes::{get_shape, Shape};
use crate::types::{CellState, Rotation, ShapeKind, EMPTY};

/// A positioned, rotatable instance of a catalog shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FallingPiece {
    /// Origin row (top edge of the rotated bounding box)
    row: i32,
    /// Origin column (left edge of the rotated bounding box)
    col: i32,
    kind: ShapeKind,
    rotation: Rotation,
    state: NonZeroU8,
}

impl FallingPiece {
    /// Create a piece at `(row, col)` in its catalog orientation
    pub fn new(row: i32, col: i32, kind: ShapeKind, state: NonZeroU8) -> Self {
        Self {
            row,
            col,
            kind,
            rotation: Rotation::Deg0,
            state,
        }
    }

    /// Create a piece at the spawn position of a board `board_width` wide:
    /// row 0, column `(board_width - 1) / 2`.
    pub fn spawn(kind: ShapeKind, state: NonZeroU8, board_width: usize) -> Self {
        Self::new(0, (board_width.saturating_sub(1) / 2) as i32, kind, state)
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// State tag reported for occupied cells
    pub fn state(&self) -> CellState {
        self.state.get()
    }

    fn shape(&self) -> &'static Shape {
        get_shape(self.kind)
    }

    /// Row of the upper-left corner
    pub fn row(&self) -> i32 {
        self.row
    }

    /// Column of the upper-left corner
    pub fn col(&self) -> i32 {
        self.col
    }

    /// Row of the lower-right corner (inclusive)
    pub fn bottom(&self) -> i32 {
        self.row + self.height() as i32 - 1
    }

    /// Column of the lower-right corner (inclusive)
    pub fn right(&self) -> i32 {
        self.col + self.width() as i32 - 1
    }

    /// Height of the rotated shape
    pub fn height(&self) -> usize {
        let shape = self.shape();
        self.rotation.dims(shape.height(), shape.width()).0
    }

    /// Width of the rotated shape
    pub fn width(&self) -> usize {
        let shape = self.shape();
        self.rotation.dims(shape.height(), shape.width()).1
    }

    /// State of piece-local cell `(i, j)` in the rotated frame.
    ///
    /// Returns the state tag for occupied cells and `0` for empty ones,
    /// including anything outside `[0, height) x [0, width)`.
    pub fn cell_state(&self, i: i32, j: i32) -> CellState {
        if i < 0 || j < 0 || i as usize >= self.height() || j as usize >= self.width() {
            return EMPTY;
        }
        let shape = self.shape();
        let (bi, bj) = self
            .rotation
            .to_base(shape.height(), shape.width(), i as usize, j as usize);
        if shape.is_filled(bi, bj) {
            self.state.get()
        } else {
            EMPTY
        }
    }

    /// State of the piece at board coordinates `(row, col)`
    pub fn cell_state_on_board(&self, row: i32, col: i32) -> CellState {
        self.cell_state(row - self.row, col - self.col)
    }

    /// Board coordinates of every occupied cell, top to bottom, left to right
    pub fn occupied_cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let (h, w) = (self.height() as i32, self.width() as i32);
        (0..h)
            .flat_map(move |i| (0..w).map(move |j| (i, j)))
            .filter(move |&(i, j)| self.cell_state(i, j) != EMPTY)
            .map(move |(i, j)| (self.row + i, self.col + j))
    }

    pub fn move_up(&mut self) {
        self.row -= 1;
    }

    pub fn move_down(&mut self) {
        self.row += 1;
    }

    pub fn move_left(&mut self) {
        self.col -= 1;
    }

    pub fn move_right(&mut self) {
        self.col += 1;
    }

    /// Rotate 90° clockwise about the origin
    pub fn rotate_clockwise(&mut self) {
        self.rotation = self.rotation.next();
    }

    /// Rotate 90° counter-clockwise about the origin
    pub fn rotate_counterclockwise(&mut self) {
        self.rotation = self.rotation.previous();
    }
}
