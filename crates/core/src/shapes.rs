//! Shapes module - the tetromino catalog
//!
//! Every shape is a fixed row-major bitmap (`1` = occupied) with a known
//! height and width, stored as static data. Pieces refer to their shape by
//! [`ShapeKind`] and look the bitmap up here; nothing is copied per piece.

use crate::types::ShapeKind;

/// An immutable base shape in its catalog orientation
#[derive(Debug, PartialEq, Eq)]
pub struct Shape {
    height: usize,
    width: usize,
    cells: &'static [u8],
}

impl Shape {
    const fn new(height: usize, width: usize, cells: &'static [u8]) -> Self {
        assert!(cells.len() == height * width);
        Self {
            height,
            width,
            cells,
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Row-major bitmap
    pub fn cells(&self) -> &'static [u8] {
        self.cells
    }

    /// Whether base cell `(i, j)` is occupied. Out-of-range is unoccupied.
    pub fn is_filled(&self, i: usize, j: usize) -> bool {
        i < self.height && j < self.width && self.cells[i * self.width + j] != 0
    }

    /// Number of occupied cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != 0).count()
    }
}

#[rustfmt::skip]
static SHAPES: [Shape; ShapeKind::COUNT] = [
    // O
    Shape::new(2, 2, &[
        1, 1,
        1, 1,
    ]),
    // L
    Shape::new(3, 2, &[
        1, 0,
        1, 0,
        1, 1,
    ]),
    // J
    Shape::new(3, 2, &[
        0, 1,
        0, 1,
        1, 1,
    ]),
    // I
    Shape::new(4, 1, &[
        1,
        1,
        1,
        1,
    ]),
    // S
    Shape::new(2, 3, &[
        0, 1, 1,
        1, 1, 0,
    ]),
    // T
    Shape::new(2, 3, &[
        0, 1, 0,
        1, 1, 1,
    ]),
    // Z
    Shape::new(2, 3, &[
        1, 1, 0,
        0, 1, 1,
    ]),
];

/// Get the base shape for a shape kind
pub fn get_shape(kind: ShapeKind) -> &'static Shape {
    &SHAPES[kind.index()]
}
