//! Terminal front end.

mod app;
mod input;
mod ui;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{error, info, instrument};

use crate::animation_config::AnimationConfig;
pub use app::App;

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Poll interval while something on screen is moving.
const FRAME: Duration = Duration::from_millis(16);
/// Poll interval once the screen is static.
const IDLE: Duration = Duration::from_millis(250);

/// Runs the game in the terminal until the user quits.
#[instrument(skip_all)]
pub fn run_tui(animation: AnimationConfig) -> Result<()> {
    info!("Starting tic-tac-toe TUI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, App::new(animation));

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

fn run_app(terminal: &mut Term, mut app: App) -> Result<()> {
    while !app.should_quit() {
        app.drain_events();
        terminal.draw(|f| ui::draw(f, &mut app))?;

        let timeout = if app.is_animating() { FRAME } else { IDLE };
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key.code),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }
    }
    Ok(())
}
