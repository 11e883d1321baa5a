//! Terminal visualizer for stepping through a solution.
//!
//! The visualizer is a thin consumer of the engine: it owns a
//! [`PuzzleSession`](crate::PuzzleSession), maps keys and timer ticks to
//! session operations, and draws whatever configuration the session
//! reports. Puzzle rules live entirely in the engine.

mod app;
mod input;
mod ui;

pub use app::App;
pub use input::{Action, action_for};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tracing::{error, info};

/// Runs the visualizer until the user quits.
pub fn run(disk_count: u32, tick: Duration) -> Result<()> {
    // Log to a file so output does not fight the terminal UI.
    let log_file = std::fs::File::create("hanoi_steps_tui.log")?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(disk_count, ?tick, "Starting visualizer");

    let mut app = App::new(disk_count, tick).context("failed to plan the puzzle")?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Visualizer loop error");
    }
    res
}

/// Synchronous draw/poll/tick loop. The timer only decides when to call the
/// session; a tick advances at most one step.
fn run_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    <B as ratatui::backend::Backend>::Error: Send + Sync + 'static,
{
    let mut last_tick = Instant::now();

    while !app.should_quit() {
        terminal.draw(|frame| ui::draw(frame, app))?;

        let timeout = app.tick().saturating_sub(last_tick.elapsed());
        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && let Some(action) = input::action_for(key.code)
        {
            app.handle_action(action);
        }

        if last_tick.elapsed() >= app.tick() {
            app.on_tick();
            last_tick = Instant::now();
        }
    }

    Ok(())
}
