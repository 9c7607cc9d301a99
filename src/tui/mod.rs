mod app;
pub mod host;
pub mod input;
mod message;
pub mod ui;

use crate::config::Config;
use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

pub use app::{App, PaletteSnapshot, Shell};
pub use message::Message;

pub async fn run(config: Config, start: &str) -> Result<()> {
    // Check if stdout is a terminal
    if !std::io::IsTerminal::is_terminal(&io::stdout()) {
        anyhow::bail!("folio requires an interactive terminal");
    }

    // Build the app before touching the terminal so config errors print normally
    let mut app = App::new(config, start)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let size = terminal.size()?;
    app.on_resize(size.width, size.height);

    let result = run_app(&mut terminal, &mut app).await;

    // Unmount the shell before restoring the terminal
    drop(app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let tick_rate = Duration::from_millis(250);
    let mut last_tick = std::time::Instant::now();
    let mut painted = false;

    loop {
        {
            let view: &App = app;
            let palette = view.palette_snapshot()?;
            terminal.draw(|f| ui::draw(f, view, &palette))?;
        }

        if !painted {
            painted = true;
            app.on_first_paint();
            continue;
        }

        // Wake up early while the deferred input focus is pending
        let timeout = if app.view.focus_pending() {
            Duration::from_millis(20)
        } else {
            tick_rate.saturating_sub(last_tick.elapsed())
        };

        if event::poll(timeout)? {
            let quit = match event::read()? {
                Event::Resize(width, height) => {
                    app.on_resize(width, height);
                    false
                }
                Event::Key(key) => app.handle_key(key).await?,
                Event::Mouse(mouse) => app.handle_mouse(mouse).await?,
                _ => false,
            };
            if quit {
                return Ok(()); // Quit requested
            }
        }

        if last_tick.elapsed() >= tick_rate || app.view.focus_pending() {
            app.on_tick().await;
            last_tick = std::time::Instant::now();
        }
    }
}
