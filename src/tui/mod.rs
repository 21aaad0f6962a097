//! # Terminal User Interface Module
//!
//! Full-screen terminal front end for the lottery ticket, built on Ratatui
//! with the crossterm backend.
//!
//! ## Key Components
//! - **Terminal Management**: raw mode, alternate screen and mouse capture
//! - **Event Loop**: poll input, update state, redraw
//! - **Input Processing**: keyboard shortcuts and mouse clicks / drags
//! - **Widget Rendering**: counter, win banner, ticket card, key hints

use crate::app::App;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use lottery::TicketSource;
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::{io, time::Duration};

pub mod input;
pub mod layout;
pub mod mouse;
pub mod widgets;

type Term = Terminal<CrosstermBackend<io::Stdout>>;

/// Main entry point for the terminal user interface
///
/// Initializes the terminal, runs the event loop until the player quits, and
/// restores the terminal even when the loop fails.
///
/// # Arguments
/// * `app` - Mutable reference to the application state
/// * `tick` - How long to wait for input before redrawing
///
/// # Errors
/// Returns an error if terminal setup, drawing, event reading or cleanup fails
pub fn run<S: TicketSource>(app: &mut App<S>, tick: Duration) -> io::Result<()> {
    let mut terminal = init_terminal()?;
    let result = event_loop(&mut terminal, app, tick);
    app.shutdown();
    let restored = restore_terminal(&mut terminal);
    result.and(restored)
}

fn event_loop<S: TicketSource>(terminal: &mut Term, app: &mut App<S>, tick: Duration) -> io::Result<()> {
    while !app.should_quit {
        app.update();

        terminal.draw(|f| widgets::render(app, f))?;

        if event::poll(tick)? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press {
                        input::handle_key_press(app, key);
                    }
                }
                Event::Mouse(mouse) => {
                    let terminal_size = terminal.size()?;
                    let terminal_rect = Rect::new(0, 0, terminal_size.width, terminal_size.height);
                    input::handle_mouse_event(app, mouse.kind, mouse.column, mouse.row, terminal_rect);
                }
                _ => {}
            }
        }
    }
    Ok(())
}

/// Puts the terminal into game mode: raw input, alternate screen, mouse
/// reporting on (needed for the button and for dragging) and the cursor hidden.
fn init_terminal() -> io::Result<Term> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    // Mouse capture is enabled on the alternate screen so the reporting mode
    // is torn down together with it in `restore_terminal`.
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, crossterm::cursor::Hide)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

/// Hands the terminal back to the shell.
///
/// Raw mode goes first so a failure later on still leaves line editing usable;
/// mouse reporting must be off before the prompt returns or every click would
/// print escape codes into it.
fn restore_terminal(terminal: &mut Term) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()
}
