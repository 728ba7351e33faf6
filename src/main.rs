//! Terminal runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from `blockfall-term`.

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event};

use blockfall::core::{GameSnapshot, GameState};
use blockfall::input::{handle_key_event, is_intent_event, should_quit};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::{GameEvent, TICK_MS};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for a reproducible piece sequence (OS entropy when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Simulation step in milliseconds
    #[arg(long, default_value_t = TICK_MS)]
    tick_ms: u32,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &args);

    // Restore the terminal before reporting any error.
    let restored = term.exit();
    result.and(restored)
}

fn run(term: &mut TerminalRenderer, args: &Args) -> Result<()> {
    let mut game = match args.seed {
        Some(seed) => GameState::with_seed(seed),
        None => GameState::new(),
    };

    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut notice: Option<GameEvent> = None;

    let tick_duration = Duration::from_millis(u64::from(args.tick_ms.max(1)));
    let mut last_tick = Instant::now();

    loop {
        // Render.
        game.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, notice, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input until the next step is due, applied in arrival order.
        let mut timeout = tick_duration.saturating_sub(last_tick.elapsed());
        while event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if is_intent_event(key) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        game.apply_action(action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
            timeout = Duration::ZERO;
        }

        // Step with the measured elapsed time.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            let elapsed_ms = u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX);
            game.tick(elapsed_ms);
        }

        if let Some(latest) = game.drain_events().pop() {
            notice = Some(latest);
        }
    }
}
