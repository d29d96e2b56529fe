//! Terminal runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from the `term`
//! crate. With `--headless` it skips the terminal entirely, plays a fixed
//! number of frames (optionally following a `--script` of actions) and
//! prints the final snapshot as JSON.

mod cli;

use std::fs::File;
use std::io::{self, Write};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info, warn};

use arena_tetris::core::{run_headless, FrameClock, Session, SessionSnapshot, SimpleRng};
use arena_tetris::input::{map_key, should_quit};
use arena_tetris::term::{FrameBuffer, GameView, Notices, TerminalRenderer, Viewport};
use arena_tetris::types::GameAction;

use cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args)?;

    let seed = args.seed();
    let mut session = Session::with_config(args.session_config(), SimpleRng::new(seed))
        .context("invalid arena configuration")?;
    info!(seed, "session created");

    if args.headless {
        return print_headless(&mut session, &args);
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session, &args);

    // Always try to restore terminal state.
    if let Err(err) = term.exit() {
        warn!(error = %err, "failed to restore terminal");
    }
    result
}

/// The terminal owns stdout while playing, so logs only go to a file there.
fn init_logging(args: &Args) -> Result<()> {
    let builder = tracing_subscriber::fmt().with_max_level(args.log_level);

    match (&args.log_file, args.headless) {
        (Some(path), _) => {
            let file = File::create(path)
                .with_context(|| format!("creating log file {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        (None, true) => builder.with_writer(io::stderr).init(),
        (None, false) => {}
    }

    Ok(())
}

fn run(term: &mut TerminalRenderer, session: &mut Session, args: &Args) -> Result<()> {
    let view = GameView::default();
    let mut notices = Notices::new();
    let mut snap = SessionSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let epoch = Instant::now();
    let mut clock = FrameClock::new();
    let tick_duration = Duration::from_millis(args.tick_ms as u64);
    let mut last_tick = Instant::now();

    session.start();

    loop {
        for ev in session.take_events() {
            notices.observe(&ev);
        }

        // Render.
        session.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, &notices.view(), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!(score = session.score(), "quit");
                        return Ok(());
                    }
                    if let Some(action) = map_key(key) {
                        debug!(action = action.as_str(), "key");
                        if action == GameAction::Start {
                            clock.reset();
                        }
                        session.apply_action(action);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            let now_ms = u64::try_from(epoch.elapsed().as_millis()).unwrap_or(u64::MAX);
            let elapsed = clock.frame(now_ms);
            session.tick(elapsed);
            notices.update(elapsed);
        }
    }
}

fn print_headless(session: &mut Session, args: &Args) -> Result<()> {
    let snap = run_headless(session, args.frames, args.tick_ms, &args.script);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, &snap).context("writing snapshot")?;
    writeln!(out)?;
    Ok(())
}
