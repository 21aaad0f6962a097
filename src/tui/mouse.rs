//! # Mouse Module
//!
//! Turns crossterm mouse events into widget calls: clicking the button draws a
//! new ticket, and pressing, dragging and releasing move a winning ticket.
//! Drag and release are handled wherever the pointer is, so a fast drag that
//! leaves the card still follows through.

use crate::app::App;
use crate::tui::layout::{card_sections, hit, to_bounds};
use crossterm::event::{MouseButton, MouseEventKind};
use lottery::drag::Position;
use lottery::TicketSource;
use ratatui::layout::Rect;

/// Handle mouse events for the application
pub fn handle_mouse_event<S: TicketSource>(app: &mut App<S>, kind: MouseEventKind, col: u16, row: u16, terminal_size: Rect) {
    match kind {
        MouseEventKind::Down(MouseButton::Left) => {
            handle_mouse_click(app, col, row, terminal_size);
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            handle_mouse_drag(app, col, row);
        }
        MouseEventKind::Up(MouseButton::Left) => {
            app.widget.pointer_up();
        }
        _ => {}
    }
}

/// Handle mouse click events
fn handle_mouse_click<S: TicketSource>(app: &mut App<S>, col: u16, row: u16, terminal_size: Rect) {
    let card = app.layout(terminal_size).card;

    if !app.widget.is_won() {
        if hit(card_sections(card).button, col, row) {
            app.new_ticket();
        }
        return;
    }

    app.widget.pointer_down(pointer(col, row), to_bounds(card));
}

/// Handle mouse drag events
fn handle_mouse_drag<S: TicketSource>(app: &mut App<S>, col: u16, row: u16) {
    app.widget.pointer_move(pointer(col, row));
}

fn pointer(col: u16, row: u16) -> Position {
    Position::new(i32::from(col), i32::from(row))
}
