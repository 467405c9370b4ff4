//! Terminal Blockfall runner (default binary).
//!
//! Drives a [`StandardBoard`] from crossterm key events and renders it with
//! the framebuffer-based terminal renderer. The board is ticked every
//! `update_cycle_threshold()` frames.

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::{Board, StandardBoard};
use blockfall::input::{handle_key_event, should_quit};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, TickPacer, Viewport};
use blockfall::types::FRAME_MS;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Seed for the piece sequence, given as a 64-bit integer.
    /// The same seed always deals the same pieces.
    /// Example: `blockfall --seed=42` or `blockfall -s 42`.
    #[arg(short, long)]
    seed: Option<u64>,
    /// Frame period in milliseconds. The board ticks once every
    /// `threshold` frames, so this scales the overall game speed.
    #[arg(short, long, default_value_t = FRAME_MS)]
    frame_ms: u64,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);
    let frame = Duration::from_millis(args.frame_ms.max(1));

    let mut board: StandardBoard = Board::new(seed);
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut board, frame);

    // Always try to restore terminal state.
    let _ = term.exit();
    result?;

    println!(
        "seed {} | level {} | lines {}{}",
        board.seed(),
        board.level(),
        board.line_clears(),
        if board.is_game_over() { " | game over" } else { "" }
    );
    Ok(())
}

fn run(term: &mut TerminalRenderer, board: &mut StandardBoard, frame: Duration) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut pacer = TickPacer::new();
    let mut last_frame = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&*board, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until the next frame.
        let timeout = frame
            .checked_sub(last_frame.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key).filter(|_| !board.is_game_over()) {
                        pacer.apply_action(&mut *board, action);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick. The board is inert after game over; keep rendering until quit.
        if last_frame.elapsed() >= frame {
            last_frame = Instant::now();
            if !board.is_game_over() && pacer.on_frame(board.update_cycle_threshold()) {
                board.update();
            }
        }
    }
}
