//! Terminal Spider Solitaire runner (default binary).
//!
//! Uses crossterm for input and a character canvas that is diffed row by row. Logs go to a
//! file under the configured log directory; the terminal belongs to the game.

use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use spider_solitaire::input::{handle_key_event, should_quit};
use spider_solitaire::store::FileGameStore;
use spider_solitaire::term::{Canvas, GameView, TerminalRenderer, Viewport};
use spider_solitaire::{App, AppConfig};

const TICK: Duration = Duration::from_secs(1);

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    let config = AppConfig::from_env();
    let _guard = setup_logging(&config.log_dir)?;

    tracing::info!(
        save_path = %config.save_path.display(),
        difficulty = config.difficulty.suit_count(),
        "starting"
    );

    let store = FileGameStore::new(&config.save_path);
    let mut app = App::new(config, Box::new(store));

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut app);

    // Always try to restore terminal state.
    let _ = term.exit();

    if let Err(err) = app.save() {
        tracing::warn!("Failed to save game on exit: {err}");
    }
    result
}

fn run(term: &mut TerminalRenderer, app: &mut App) -> Result<()> {
    let view = GameView::default();
    let mut canvas = Canvas::default();
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(app.session(), &app.cursor_view(), Viewport::new(w, h), &mut canvas);
        term.present(&mut canvas)?;

        // Input with timeout until the next second.
        let timeout = TICK
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        app.handle(action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Timer.
        if last_tick.elapsed() >= TICK {
            last_tick = Instant::now();
            app.tick();
        }

        let events = app.take_events();
        if app.wants_cue(&events) {
            term.bell()?;
        }
    }
}

/// Install a file-only tracing subscriber. The returned guard flushes on drop.
fn setup_logging(log_dir: &Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)?;

    let file_appender = tracing_appender::rolling::daily(log_dir, "spider-solitaire.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // File layer only: stderr would draw over the table.
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    Ok(guard)
}
