//! Terminal tile-walk runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from `guff::term`.
//! Logs go to stderr; run with `RUST_LOG=debug guff 2>guff.log` to keep them
//! off the alternate screen.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use guff::core::{Game, GameSnapshot};
use guff::input::{is_interrupt, ControlState};
use guff::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use guff::types::{Flow, TICK_MS};

fn main() -> Result<()> {
    env_logger::init();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = Game::new();
    let mut controls = if term.reports_key_release() {
        ControlState::new().without_key_release_timeout()
    } else {
        ControlState::new()
    };
    log::info!(
        "session started, key release events: {}",
        term.reports_key_release()
    );

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        game.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if is_interrupt(key) {
                        log::info!("interrupted");
                        return Ok(());
                    }
                    match key.kind {
                        // Without release reporting, auto-repeat arrives as presses
                        // and keeps the key fresh.
                        KeyEventKind::Press | KeyEventKind::Repeat => {
                            controls.press(key.code);
                        }
                        KeyEventKind::Release => {
                            controls.release(key.code);
                        }
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            controls.advance(TICK_MS);
            let held = controls.snapshot();
            if game.update(TICK_MS, &held) == Flow::Quit {
                return Ok(());
            }
        }
    }
}
