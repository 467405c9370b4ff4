//! GameView: maps a `core::Board` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Every board cell is read through `Board::cell_state`, so landed cells and
//! the falling piece come out as one composite. Colors are picked from the
//! opaque state byte.

use crate::core::{Board, FallingPiece};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{CellState, EMPTY};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Block colors, indexed by `state % 7`.
const PALETTE: [Rgb; 7] = [
    Rgb::new(220, 80, 80),
    Rgb::new(100, 220, 120),
    Rgb::new(240, 220, 80),
    Rgb::new(80, 120, 220),
    Rgb::new(200, 120, 220),
    Rgb::new(80, 220, 220),
    Rgb::new(255, 165, 0),
];

const CONTROLS: [&str; 5] = ["<- -> MOVE", "v DROP", "^ R ROTATE", "U Z CCW", "Q QUIT"];

const PLAYFIELD_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// Color used to draw a non-empty cell state
pub fn state_color(state: CellState) -> Rgb {
    PALETTE[(state % PALETTE.len() as u8) as usize]
}

/// A lightweight terminal renderer for the board.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w,
            cell_h,
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Terminal position of the playfield frame's top-left corner.
    pub fn frame_origin<const H: usize, const W: usize>(
        &self,
        board: &Board<H, W>,
        viewport: Viewport,
    ) -> (u16, u16) {
        let (frame_w, frame_h) = self.frame_size(board);
        let x = viewport.width.saturating_sub(frame_w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };
        (x, y)
    }

    fn frame_size<const H: usize, const W: usize>(&self, board: &Board<H, W>) -> (u16, u16) {
        let w = (board.width() as u16).saturating_mul(self.cell_w);
        let h = (board.height() as u16).saturating_mul(self.cell_h);
        (w.saturating_add(2), h.saturating_add(2))
    }

    /// Render the board into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into<const H: usize, const W: usize>(
        &self,
        board: &Board<H, W>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let (frame_w, frame_h) = self.frame_size(board);
        let (start_x, start_y) = self.frame_origin(board, viewport);

        fb.fill_rect(
            start_x + 1,
            start_y + 1,
            frame_w - 2,
            frame_h - 2,
            ' ',
            CellStyle::new(PLAYFIELD_BG, PLAYFIELD_BG),
        );
        self.draw_border(
            fb,
            start_x,
            start_y,
            frame_w,
            frame_h,
            CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG),
        );

        for row in 0..H {
            for col in 0..W {
                let (x, y) = (start_x + 1 + col as u16 * self.cell_w, start_y + 1 + row as u16 * self.cell_h);
                match board.cell_state(row as i32, col as i32) {
                    EMPTY => self.draw_empty_cell(fb, x, y),
                    state => self.draw_block(fb, x, y, state),
                }
            }
        }

        self.draw_side_panel(fb, board, viewport, start_x.saturating_add(frame_w), start_y);

        if board.is_game_over() {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render<const H: usize, const W: usize>(
        &self,
        board: &Board<H, W>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(board, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, x: u16, y: u16) {
        let style = CellStyle::new(Rgb::new(90, 90, 100), PLAYFIELD_BG).dim();
        fb.fill_rect(x, y, self.cell_w, self.cell_h, '·', style);
    }

    fn draw_block(&self, fb: &mut FrameBuffer, x: u16, y: u16, state: CellState) {
        let style = CellStyle::new(state_color(state), PLAYFIELD_BG).bold();
        fb.fill_rect(x, y, self.cell_w, self.cell_h, '█', style);
    }

    /// Draw a piece's raw cells with its top-left corner at `(x, y)`.
    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, piece: &FallingPiece) {
        for i in 0..piece.height() {
            for j in 0..piece.width() {
                let state = piece.cell_state(i as i32, j as i32);
                if state != EMPTY {
                    let style = CellStyle::new(state_color(state), PANEL_BG).bold();
                    fb.fill_rect(
                        x + j as u16 * self.cell_w,
                        y + i as u16 * self.cell_h,
                        self.cell_w,
                        self.cell_h,
                        '█',
                        style,
                    );
                }
            }
        }
    }

    fn draw_side_panel<const H: usize, const W: usize>(
        &self,
        fb: &mut FrameBuffer,
        board: &Board<H, W>,
        viewport: Viewport,
        frame_right: u16,
        start_y: u16,
    ) {
        let panel_x = frame_right.saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = start_y;
        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        let next = board.next_piece();
        self.draw_preview(fb, panel_x, y, next);
        // Reserve room for the tallest piece.
        y = y.saturating_add(4 * self.cell_h + 1);

        fb.put_str(panel_x, y, "LEVEL", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, board.level(), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LINES", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, board.line_clears(), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "SPEED", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, "1/", value.dim());
        fb.put_u32(panel_x + 2, y, board.update_cycle_threshold(), value);
        y = y.saturating_add(2);

        // Legend only when it fits below the counters.
        if y.saturating_add(CONTROLS.len() as u16 + 1) <= viewport.height {
            fb.put_str(panel_x, y, "CONTROLS", label);
            for line in CONTROLS {
                y = y.saturating_add(1);
                fb.put_str(panel_x, y, line, value.dim());
            }
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        fb.put_str(x, mid_y, text, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_ignores_high_bits() {
        assert_eq!(state_color(1), state_color(8));
        assert_eq!(state_color(255), PALETTE[255 % 7]);
    }
}
