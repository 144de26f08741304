//! Terminal Tetris runner (default binary).
//!
//! Drives one session at 60 frames per second: crossterm key events feed a
//! held-key tracker, and each frame's draw list is rasterized to the terminal.

use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;

use tick_tetris::config::Config;
use tick_tetris::core::SimpleRng;
use tick_tetris::engine::{InputSource, PollOutcome, Session};
use tick_tetris::input::{drain_key_events, HeldKeyTracker};
use tick_tetris::term::{GameView, StatusView, TerminalRenderer};
use tick_tetris::types::HeldKeys;

/// Terminal keyboard as the session's input source.
struct TerminalInput {
    tracker: HeldKeyTracker,
}

impl InputSource for TerminalInput {
    type Error = anyhow::Error;

    fn poll_keys(&mut self) -> Result<HeldKeys> {
        let now = Instant::now();
        for key in drain_key_events()? {
            self.tracker.handle_key_event(key, now);
        }
        Ok(self.tracker.held_at(now))
    }
}

struct RunSummary {
    frames: u64,
    pieces: u32,
    spawn_overlaps: u32,
}

fn main() -> Result<()> {
    let config = Config::from_env();
    if !config.rejected.is_empty() {
        println!(
            "[tick-tetris] ignoring invalid settings: {}",
            config.rejected.join(", ")
        );
    }
    let seed = config.seed_or_clock();

    let view = GameView::new(config.cell_w).with_anchor_y(config.anchor_y);
    let mut term = TerminalRenderer::new(view);
    term.enter()?;

    let result = run(&mut term, &config, seed);

    // Always try to restore terminal state.
    let restored = term.exit();

    let summary = result?;
    restored?;
    println!(
        "[tick-tetris] exit: seed={} frames={} pieces={} spawn_overlaps={} key_release_events={}",
        seed,
        summary.frames,
        summary.pieces,
        summary.spawn_overlaps,
        term.key_release_events()
    );
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &Config, seed: u32) -> Result<RunSummary> {
    let mut session = Session::new(SimpleRng::new(seed));
    let mut input = TerminalInput {
        tracker: HeldKeyTracker::with_release_timeout(config.release_timeout),
    };

    let mut last = Instant::now();
    loop {
        let now = Instant::now();
        let elapsed = now.saturating_duration_since(last);
        last = now;

        match session.poll(elapsed, &mut input, term)? {
            PollOutcome::Quit => break,
            PollOutcome::Stepped(_) => {
                let state = session.state();
                term.set_status(StatusView {
                    frame: state.frame(),
                    pieces: state.piece_id(),
                    spawn_overlaps: state.spawn_overlaps(),
                });
            }
            PollOutcome::Idle => {
                thread::sleep(session.timestep().until_next().min(Duration::from_millis(2)));
            }
        }
    }

    let state = session.state();
    Ok(RunSummary {
        frames: state.frame(),
        pieces: state.piece_id(),
        spawn_overlaps: state.spawn_overlaps(),
    })
}
