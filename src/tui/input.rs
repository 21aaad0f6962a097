//! # Input Handling Module
//!
//! Keyboard shortcuts and the hand-off of mouse events to [`mouse`].

use crate::app::App;
use crate::tui::mouse;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEventKind};
use lottery::TicketSource;
use ratatui::layout::Rect;

/// Handles a key press.
///
/// `n`, Space and Enter press the "New Ticket" button; `q`, Esc and Ctrl-C quit.
pub fn handle_key_press<S: TicketSource>(app: &mut App<S>, key: KeyEvent) {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.should_quit = true,
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Char('n') | KeyCode::Char(' ') | KeyCode::Enter => app.new_ticket(),
        _ => {}
    }
}

/// Handles mouse events by delegating to the mouse module
///
/// # Arguments
/// * `app` - Mutable reference to the application state
/// * `kind` - Type of mouse event (click, drag, release, ...)
/// * `col` - Column position of the mouse event
/// * `row` - Row position of the mouse event
/// * `terminal_size` - Size of the terminal for coordinate calculations
pub fn handle_mouse_event<S: TicketSource>(app: &mut App<S>, kind: MouseEventKind, col: u16, row: u16, terminal_size: Rect) {
    mouse::handle_mouse_event(app, kind, col, row, terminal_size);
}
