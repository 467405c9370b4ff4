use crate::core::Board;
use crate::types::GameAction;

/// Frame counter that decides when the driver should tick the board.
///
/// The board only advises a threshold (frames per tick); the pacer counts
/// rendered frames against it. The threshold is re-read every frame, so a
/// level change takes effect on the very next frame.
#[derive(Debug, Clone, Default)]
pub struct TickPacer {
    frames: u32,
}

impl TickPacer {
    pub fn new() -> Self {
        Self { frames: 0 }
    }

    /// Record one rendered frame and report whether `update()` is due.
    ///
    /// A threshold of 0 is treated as 1 (tick every frame).
    pub fn on_frame(&mut self, threshold: u32) -> bool {
        self.frames = self.frames.saturating_add(1);
        if self.frames >= threshold.max(1) {
            self.frames = 0;
            return true;
        }
        false
    }

    /// Frames counted since the last tick
    pub fn frames(&self) -> u32 {
        self.frames
    }

    /// Restart the count.
    pub fn reset(&mut self) {
        self.frames = 0;
    }

    /// Apply a driver action to `board`, returning whether the piece moved.
    ///
    /// A soft drop that moved the piece restarts the count, so the next
    /// gravity tick is a full threshold away.
    pub fn apply_action<const H: usize, const W: usize>(
        &mut self,
        board: &mut Board<H, W>,
        action: GameAction,
    ) -> bool {
        let moved = board.apply_action(action);
        if moved && action == GameAction::SoftDrop {
            self.reset();
        }
        moved
    }
}
