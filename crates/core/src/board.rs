//! Board module - the game board and its rules
//!
//! The board owns the grid of landed cells, the falling piece, the next piece
//! and the progression counters. Coordinates are `(row, col)` with row 0 at
//! the top; dimensions are const generic parameters (24 x 10 by default).
//!
//! Every command is all-or-nothing: a move or rotation is applied to the
//! falling piece, the position is validated, and the exact inverse is applied
//! if it turned out invalid. No half-applied state is ever observable.
//!
//! Per-row occupancy counters track how many landed cells each row holds, so
//! full rows are detected without rescanning the grid.

use arrayvec::ArrayVec;

use crate::piece::FallingPiece;
use crate::rng::PieceSource;
use crate::types::{
    CellState, GameAction, BASE_TICK_THRESHOLD, BOARD_HEIGHT, BOARD_WIDTH, EMPTY,
    LINES_PER_LEVEL, TICK_THRESHOLD_DECAY,
};

/// Rows cleared by a single settle, in clearing order (top to bottom).
///
/// A piece is at most 4 rows tall, so at most 4 rows clear at once.
pub type ClearedRows = ArrayVec<usize, 4>;

/// Result of one [`Board::update`] tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// The falling piece moved down one row
    Fell,
    /// The piece settled and the next piece spawned
    Settled { cleared: ClearedRows },
    /// The piece settled and the next piece could not spawn; the game is over
    ToppedOut { cleared: ClearedRows },
    /// The game was already over; nothing changed
    Halted,
}

/// The game board - `H` rows x `W` columns of landed cells plus the falling piece
#[derive(Debug, Clone)]
pub struct Board<const H: usize = BOARD_HEIGHT, const W: usize = BOARD_WIDTH> {
    /// Landed cells, row-major
    landed: [[CellState; W]; H],
    /// Number of non-empty landed cells in each row
    row_counts: [usize; H],
    current: FallingPiece,
    next: FallingPiece,
    source: PieceSource,
    level: u32,
    line_clears: u32,
    game_over: bool,
}

/// Board with the default 24 x 10 dimensions
pub type StandardBoard = Board<BOARD_HEIGHT, BOARD_WIDTH>;

impl<const H: usize, const W: usize> Board<H, W> {
    /// Create a new board whose pieces are drawn from a source seeded with `seed`
    pub fn new(seed: u64) -> Self {
        Self::with_source(PieceSource::new(seed))
    }

    /// Create a new board that draws its pieces from `source`.
    ///
    /// Both the current and the next piece are drawn from the source, so the
    /// very first falling piece is already random.
    pub fn with_source(mut source: PieceSource) -> Self {
        let (kind, tag) = source.draw();
        let first = FallingPiece::spawn(kind, tag, W);
        let mut board = Self {
            landed: [[EMPTY; W]; H],
            row_counts: [0; H],
            current: first,
            next: first,
            source,
            level: 0,
            line_clears: 0,
            game_over: false,
        };
        board.spawn_next();
        board
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        H
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        W
    }

    /// Current level (`line_clears / 10`, refreshed at the start of each tick)
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Total number of cleared rows
    pub fn line_clears(&self) -> u32 {
        self.line_clears
    }

    /// Recommended number of frames between two [`Board::update`] calls.
    ///
    /// Shrinks geometrically with the level: `floor(59 * 0.8^level) + 1`.
    /// At 60 FPS a threshold of 60 means one tick per second.
    pub fn update_cycle_threshold(&self) -> u32 {
        let exponent = self.level.min(i32::MAX as u32) as i32;
        (BASE_TICK_THRESHOLD * TICK_THRESHOLD_DECAY.powi(exponent)).floor() as u32 + 1
    }

    /// Whether the game has ended
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// The falling piece
    pub fn current_piece(&self) -> &FallingPiece {
        &self.current
    }

    /// The piece that spawns after the current one settles
    pub fn next_piece(&self) -> &FallingPiece {
        &self.next
    }

    /// Seed of the board's piece source
    pub fn seed(&self) -> u64 {
        self.source.seed()
    }

    /// Composite state of cell `(i, j)`: the landed cell if any, otherwise
    /// the falling piece's cell. Out-of-range coordinates are empty.
    pub fn cell_state(&self, i: i32, j: i32) -> CellState {
        match self.landed_state(i, j) {
            EMPTY => self.current.cell_state_on_board(i, j),
            landed => landed,
        }
    }

    /// State of landed cell `(i, j)`, ignoring the falling piece
    pub fn landed_state(&self, i: i32, j: i32) -> CellState {
        match Self::index(i, j) {
            Some((r, c)) => self.landed[r][c],
            None => EMPTY,
        }
    }

    /// Number of landed cells in row `i` (0 when out of range)
    pub fn row_count(&self, i: i32) -> usize {
        match Self::index(i, 0) {
            Some((r, _)) => self.row_counts[r],
            None => 0,
        }
    }

    /// Landed cells as rows, top to bottom
    pub fn landed_rows(&self) -> &[[CellState; W]; H] {
        &self.landed
    }

    #[inline(always)]
    fn index(i: i32, j: i32) -> Option<(usize, usize)> {
        if i < 0 || j < 0 || i as usize >= H || j as usize >= W {
            return None;
        }
        Some((i as usize, j as usize))
    }

    /// Whether `piece` would be in a valid position on this board: its
    /// bounding box lies inside the grid and none of its cells overlaps a
    /// landed cell.
    pub fn fits(&self, piece: &FallingPiece) -> bool {
        if piece.row() < 0
            || piece.col() < 0
            || piece.bottom() >= H as i32
            || piece.right() >= W as i32
        {
            return false;
        }

        for i in piece.row()..=piece.bottom() {
            for j in piece.col()..=piece.right() {
                if piece.cell_state_on_board(i, j) != EMPTY
                    && self.landed[i as usize][j as usize] != EMPTY
                {
                    return false;
                }
            }
        }

        true
    }

    /// Whether the falling piece is in a valid position
    pub fn has_valid_position(&self) -> bool {
        self.fits(&self.current)
    }

    /// Apply `apply` to the falling piece and keep it if the result is
    /// valid; otherwise restore the piece with `undo`.
    fn try_apply(&mut self, apply: fn(&mut FallingPiece), undo: fn(&mut FallingPiece)) -> bool {
        if self.game_over {
            return false;
        }

        apply(&mut self.current);
        if self.has_valid_position() {
            true
        } else {
            undo(&mut self.current);
            false
        }
    }

    /// Move the falling piece one column left if the new position is valid
    pub fn move_left_if_valid(&mut self) -> bool {
        self.try_apply(FallingPiece::move_left, FallingPiece::move_right)
    }

    /// Move the falling piece one column right if the new position is valid
    pub fn move_right_if_valid(&mut self) -> bool {
        self.try_apply(FallingPiece::move_right, FallingPiece::move_left)
    }

    /// Move the falling piece one row down if the new position is valid
    pub fn move_down_if_valid(&mut self) -> bool {
        self.try_apply(FallingPiece::move_down, FallingPiece::move_up)
    }

    /// Rotate the falling piece clockwise in place if the result is valid.
    /// There are no wall kicks.
    pub fn rotate_clockwise_if_valid(&mut self) -> bool {
        self.try_apply(
            FallingPiece::rotate_clockwise,
            FallingPiece::rotate_counterclockwise,
        )
    }

    /// Rotate the falling piece counter-clockwise in place if the result is
    /// valid. There are no wall kicks.
    pub fn rotate_counterclockwise_if_valid(&mut self) -> bool {
        self.try_apply(
            FallingPiece::rotate_counterclockwise,
            FallingPiece::rotate_clockwise,
        )
    }

    /// Apply a driver action, returning whether the piece moved
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left_if_valid(),
            GameAction::MoveRight => self.move_right_if_valid(),
            GameAction::SoftDrop => self.move_down_if_valid(),
            GameAction::RotateCw => self.rotate_clockwise_if_valid(),
            GameAction::RotateCcw => self.rotate_counterclockwise_if_valid(),
        }
    }

    /// Advance the simulation by one tick.
    ///
    /// 1. Refresh the level from the line-clear count.
    /// 2. Move the falling piece down if the new position is valid.
    /// 3. Otherwise settle it into the landed grid, clear full rows and
    ///    spawn the next piece.
    ///
    /// Once the game is over this is a no-op returning [`TickOutcome::Halted`];
    /// that early return is the only game-over guard, so neither settling
    /// nor spawning can run on a finished board.
    pub fn update(&mut self) -> TickOutcome {
        if self.game_over {
            return TickOutcome::Halted;
        }

        self.level = self.line_clears / LINES_PER_LEVEL;

        if self.move_down_if_valid() {
            return TickOutcome::Fell;
        }

        let cleared = self.settle();
        self.spawn_next();

        if self.game_over {
            TickOutcome::ToppedOut { cleared }
        } else {
            TickOutcome::Settled { cleared }
        }
    }

    /// Copy the falling piece into the landed grid, row by row from the top,
    /// clearing each row as soon as it becomes full.
    fn settle(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        let piece = self.current;

        for i in piece.row()..=piece.bottom() {
            let row = i as usize;
            for j in piece.col()..=piece.right() {
                let state = piece.cell_state_on_board(i, j);
                if state != EMPTY {
                    self.landed[row][j as usize] = state;
                    self.row_counts[row] += 1;
                }
            }

            if self.row_counts[row] == W {
                self.clear_row(row);
                cleared.push(row);
            }
        }

        cleared
    }

    /// Remove `row`, shift every row above it down by one and empty row 0
    fn clear_row(&mut self, row: usize) {
        if row >= H {
            return;
        }

        // Nothing to shift when the top row itself is cleared.
        self.landed.copy_within(0..row, 1);
        self.row_counts.copy_within(0..row, 1);

        self.landed[0] = [EMPTY; W];
        self.row_counts[0] = 0;

        self.line_clears += 1;
    }

    /// Promote the next piece to the falling piece and draw a new next piece.
    /// Ends the game if the promoted piece does not fit.
    fn spawn_next(&mut self) {
        let (kind, tag) = self.source.draw();
        self.current = std::mem::replace(&mut self.next, FallingPiece::spawn(kind, tag, W));

        if !self.has_valid_position() {
            self.game_over = true;
        }
    }

    /// Set landed cell `(i, j)` directly, keeping the row counters in sync.
    ///
    /// Rejected (returns `false`) when the coordinate is outside the grid,
    /// when a non-empty state would overlap the falling piece, or when it
    /// would complete the row (full rows only ever exist transiently while
    /// a piece settles).
    pub fn set_landed(&mut self, i: i32, j: i32, state: CellState) -> bool {
        let Some((r, c)) = Self::index(i, j) else {
            return false;
        };

        let old = self.landed[r][c];
        if state != EMPTY {
            if self.current.cell_state_on_board(i, j) != EMPTY {
                return false;
            }
            if old == EMPTY && self.row_counts[r] + 1 == W {
                return false;
            }
        }

        match (old != EMPTY, state != EMPTY) {
            (false, true) => self.row_counts[r] += 1,
            (true, false) => self.row_counts[r] -= 1,
            _ => {}
        }
        self.landed[r][c] = state;
        true
    }

    /// Replace the falling piece with `piece` if it fits.
    ///
    /// Rejected once the game is over.
    pub fn set_current(&mut self, piece: FallingPiece) -> bool {
        if self.game_over || !self.fits(&piece) {
            return false;
        }
        self.current = piece;
        true
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU8;

    use super::*;
    use crate::types::ShapeKind;

    fn tag(v: u8) -> NonZeroU8 {
        NonZeroU8::new(v).unwrap()
    }

    fn assert_counters_consistent<const H: usize, const W: usize>(board: &Board<H, W>) {
        for (r, row) in board.landed.iter().enumerate() {
            let filled = row.iter().filter(|&&c| c != EMPTY).count();
            assert_eq!(board.row_counts[r], filled, "row {r}");
        }
    }

    #[test]
    fn test_clear_row_shifts_rows_above() {
        let mut board: Board<4, 3> = Board::new(1);
        board.landed = [[1, 0, 0], [0, 2, 0], [3, 3, 3], [0, 0, 4]];
        board.row_counts = [1, 1, 3, 1];

        board.clear_row(2);

        assert_eq!(board.landed, [[0, 0, 0], [1, 0, 0], [0, 2, 0], [0, 0, 4]]);
        assert_eq!(board.row_counts, [0, 1, 1, 1]);
        assert_eq!(board.line_clears, 1);
    }

    #[test]
    fn test_clear_top_row() {
        let mut board: Board<3, 2> = Board::new(1);
        board.landed = [[5, 5], [0, 6], [7, 0]];
        board.row_counts = [2, 1, 1];

        board.clear_row(0);

        assert_eq!(board.landed, [[0, 0], [0, 6], [7, 0]]);
        assert_eq!(board.row_counts, [0, 1, 1]);
        assert_eq!(board.line_clears, 1);
    }

    #[test]
    fn test_clear_row_out_of_range() {
        let mut board: Board<3, 2> = Board::new(1);
        board.clear_row(3);
        assert_eq!(board.line_clears, 0);
    }

    #[test]
    fn test_settle_clears_two_rows() {
        let mut board: StandardBoard = Board::new(3);
        for r in 22..24 {
            for c in 0..8 {
                assert!(board.set_landed(r, c, 9));
            }
        }
        assert!(board.set_current(FallingPiece::new(22, 8, ShapeKind::O, tag(1))));

        let outcome = board.update();

        let cleared = match outcome {
            TickOutcome::Settled { cleared } => cleared,
            other => panic!("unexpected outcome {other:?}"),
        };
        assert_eq!(cleared.as_slice(), &[22, 23]);
        assert_eq!(board.line_clears(), 2);
        assert!(board.landed.iter().all(|row| row.iter().all(|&c| c == EMPTY)));
        assert_counters_consistent(&board);
    }

    #[test]
    fn test_settle_keeps_counters_consistent() {
        let mut board: StandardBoard = Board::new(99);
        for _ in 0..2000 {
            if board.is_game_over() {
                break;
            }
            board.update();
            assert_counters_consistent(&board);
        }
        assert!(board.is_game_over());
    }

    #[test]
    fn test_spawn_promotes_next() {
        let mut board: StandardBoard = Board::new(12345);
        let next = *board.next_piece();

        while matches!(board.update(), TickOutcome::Fell) {}

        assert_eq!(board.current_piece().kind(), next.kind());
        assert_eq!(board.current_piece().state(), next.state());
        assert_eq!(
            (board.current_piece().row(), board.current_piece().col()),
            (0, 4)
        );
    }

    #[test]
    fn test_level_refreshes_on_next_update() {
        let mut board: StandardBoard = Board::new(5);
        assert_eq!(board.update_cycle_threshold(), 60);

        board.line_clears = 10;
        assert_eq!(board.level(), 0);
        board.update();
        assert_eq!(board.level(), 1);
        assert_eq!(board.update_cycle_threshold(), 48);

        let expected = [(2, 38), (5, 20), (10, 7), (19, 1), (40, 1)];
        for (level, threshold) in expected {
            board.line_clears = level * LINES_PER_LEVEL;
            board.update();
            assert_eq!(board.level(), level);
            assert_eq!(board.update_cycle_threshold(), threshold, "level {level}");
        }
    }

    #[test]
    fn test_set_landed_rejects_completing_a_row() {
        let mut board: StandardBoard = Board::new(1);
        for c in 0..9 {
            assert!(board.set_landed(23, c, 1));
        }
        assert!(!board.set_landed(23, 9, 1));
        assert_eq!(board.row_count(23), 9);

        assert!(board.set_landed(23, 1, 0));
        assert_eq!(board.row_count(23), 8);
        assert!(board.set_landed(23, 9, 1));
        assert_eq!(board.row_count(23), 9);

        assert!(!board.set_landed(24, 0, 1));
        assert!(!board.set_landed(0, -1, 1));
        assert_counters_consistent(&board);
    }
}
