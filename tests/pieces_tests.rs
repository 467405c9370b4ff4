//! Piece tests - catalog data and rotation transforms

use std::num::NonZeroU8;

use blockfall::core::{get_shape, FallingPiece};
use blockfall::types::{Rotation, ShapeKind, EMPTY};

fn tag(v: u8) -> NonZeroU8 {
    NonZeroU8::new(v).unwrap()
}

/// Occupancy grid of the piece in its current rotation.
fn grid(piece: &FallingPiece) -> Vec<Vec<bool>> {
    (0..piece.height() as i32)
        .map(|i| {
            (0..piece.width() as i32)
                .map(|j| piece.cell_state(i, j) != EMPTY)
                .collect()
        })
        .collect()
}

#[test]
fn test_catalog_dimensions() {
    let expected = [
        (ShapeKind::O, 2, 2),
        (ShapeKind::L, 3, 2),
        (ShapeKind::J, 3, 2),
        (ShapeKind::I, 4, 1),
        (ShapeKind::S, 2, 3),
        (ShapeKind::T, 2, 3),
        (ShapeKind::Z, 2, 3),
    ];
    for (kind, h, w) in expected {
        let shape = get_shape(kind);
        assert_eq!((shape.height(), shape.width()), (h, w), "{:?}", kind);
        assert_eq!(shape.cells().len(), h * w);
    }
}

#[test]
fn test_every_shape_has_four_cells() {
    for kind in ShapeKind::ALL {
        assert_eq!(get_shape(kind).filled_count(), 4, "{:?}", kind);
    }
}

#[test]
fn test_catalog_bitmaps() {
    assert_eq!(get_shape(ShapeKind::S).cells(), &[0, 1, 1, 1, 1, 0]);
    assert_eq!(get_shape(ShapeKind::T).cells(), &[0, 1, 0, 1, 1, 1]);
    assert_eq!(get_shape(ShapeKind::Z).cells(), &[1, 1, 0, 0, 1, 1]);
    assert_eq!(get_shape(ShapeKind::J).cells(), &[0, 1, 0, 1, 1, 1]);
}

#[test]
fn test_catalog_lookup_is_stable() {
    for kind in ShapeKind::ALL {
        assert!(std::ptr::eq(get_shape(kind), get_shape(kind)));
    }
}

#[test]
fn test_four_clockwise_rotations_are_identity() {
    for kind in ShapeKind::ALL {
        let mut piece = FallingPiece::new(3, 3, kind, tag(2));
        let original = grid(&piece);
        for _ in 0..4 {
            piece.rotate_clockwise();
        }
        assert_eq!(piece.rotation(), Rotation::Deg0);
        assert_eq!(grid(&piece), original, "{:?}", kind);
    }
}

#[test]
fn test_counterclockwise_undoes_clockwise() {
    for kind in ShapeKind::ALL {
        for start in 0..4 {
            let mut piece = FallingPiece::new(0, 0, kind, tag(2));
            for _ in 0..start {
                piece.rotate_clockwise();
            }
            let before = piece;
            piece.rotate_clockwise();
            piece.rotate_counterclockwise();
            assert_eq!(piece, before);
        }
    }
}

#[test]
fn test_odd_rotations_swap_dimensions() {
    for kind in ShapeKind::ALL {
        let shape = get_shape(kind);
        let mut piece = FallingPiece::new(0, 0, kind, tag(1));
        for rotation in Rotation::ALL {
            assert_eq!(piece.rotation(), rotation);
            let dims = if rotation.is_transposed() {
                (shape.width(), shape.height())
            } else {
                (shape.height(), shape.width())
            };
            assert_eq!((piece.height(), piece.width()), dims);
            piece.rotate_clockwise();
        }
    }
}

#[test]
fn test_t_rotations() {
    let mut piece = FallingPiece::new(0, 0, ShapeKind::T, tag(1));
    let x = true;
    let o = false;

    assert_eq!(grid(&piece), vec![vec![o, x, o], vec![x, x, x]]);
    piece.rotate_clockwise();
    assert_eq!(grid(&piece), vec![vec![x, o], vec![x, x], vec![x, o]]);
    piece.rotate_clockwise();
    assert_eq!(grid(&piece), vec![vec![x, x, x], vec![o, x, o]]);
    piece.rotate_clockwise();
    assert_eq!(grid(&piece), vec![vec![o, x], vec![x, x], vec![o, x]]);
}

#[test]
fn test_rotation_keeps_cell_count_and_state() {
    for kind in ShapeKind::ALL {
        let mut piece = FallingPiece::new(0, 0, kind, tag(200));
        for _ in 0..4 {
            assert_eq!(piece.occupied_cells().count(), 4);
            for (r, c) in piece.occupied_cells() {
                assert_eq!(piece.cell_state_on_board(r, c), 200);
            }
            piece.rotate_counterclockwise();
        }
    }
}

#[test]
fn test_rotation_keeps_origin() {
    let mut piece = FallingPiece::new(7, 2, ShapeKind::L, tag(1));
    piece.rotate_clockwise();
    assert_eq!((piece.row(), piece.col()), (7, 2));
    piece.rotate_counterclockwise();
    piece.rotate_counterclockwise();
    assert_eq!((piece.row(), piece.col()), (7, 2));
    assert_eq!(piece.rotation(), Rotation::Deg270);
}

#[test]
fn test_bounding_box_follows_moves() {
    let mut piece = FallingPiece::new(0, 0, ShapeKind::I, tag(1));
    assert_eq!((piece.bottom(), piece.right()), (3, 0));
    piece.move_down();
    piece.move_right();
    assert_eq!((piece.row(), piece.col()), (1, 1));
    assert_eq!((piece.bottom(), piece.right()), (4, 1));
    piece.move_up();
    piece.move_left();
    assert_eq!((piece.row(), piece.col()), (0, 0));
}
