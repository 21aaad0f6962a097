//! # Layout Module
//!
//! Screen geometry for the ticket game. Both drawing and mouse hit-testing go
//! through these functions, so a click always lands on what was drawn.
//!
//! ## Screen
//! - **Header**: one row, attempt counter on the right
//! - **Body**: win banner background; the ticket card floats above it
//! - **Footer**: one row of key hints

use lottery::drag::{Bounds, Position};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of the "[ New Ticket ]" button, in cells.
pub const BUTTON_WIDTH: u16 = 16;

/// Configuration for the card size
pub struct LayoutConfig {
    /// Card width including borders
    pub card_width: u16,
    /// Card height including borders
    pub card_height: u16,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            card_width: 42,
            card_height: 13,
        }
    }
}

/// Rectangles for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub counter: Rect,
    pub banner: Rect,
    pub card: Rect,
    pub footer: Rect,
}

/// Rows inside the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardSections {
    pub badge: Rect,
    pub digits: Rect,
    pub message: Rect,
    pub hint: Rect,
    pub button: Rect,
}

impl LayoutConfig {
    /// Calculates the frame layout.
    ///
    /// # Arguments
    /// * `area` - Whole terminal area
    /// * `card_position` - Where the player dragged the card, if anywhere
    /// * `float_offset` - Vertical bob applied to a card still in its default slot
    pub fn get_main_layout(&self, area: Rect, card_position: Option<Position>, float_offset: i32) -> ScreenLayout {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);
        let (header, body, footer) = (chunks[0], chunks[1], chunks[2]);

        let width = self.card_width.min(area.width);
        let height = self.card_height.min(body.height.max(1)).min(area.height);

        let card = match card_position {
            Some(position) => clamp_rect(position, width, height, area),
            None => {
                let x = i32::from(body.x) + i32::from(body.width.saturating_sub(width) / 2);
                let y = i32::from(body.y) + i32::from(body.height.saturating_sub(height) / 2) + float_offset;
                clamp_rect(Position::new(x, y), width, height, body)
            }
        };

        ScreenLayout {
            counter: header,
            banner: body,
            card,
            footer,
        }
    }
}

/// Places a `width` x `height` box at `position`, pushed back inside `area`.
pub fn clamp_rect(position: Position, width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let max_x = i32::from(area.x) + i32::from(area.width - width);
    let max_y = i32::from(area.y) + i32::from(area.height - height);
    let x = position.x.clamp(i32::from(area.x), max_x);
    let y = position.y.clamp(i32::from(area.y), max_y);
    // Both values lie between two u16 bounds after clamping.
    Rect::new(x as u16, y as u16, width, height)
}

/// Splits the card's inner area into its rows.
pub fn card_sections(card: Rect) -> CardSections {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // spacer
            Constraint::Length(1), // badge
            Constraint::Length(1), // spacer
            Constraint::Length(1), // digits
            Constraint::Length(1), // spacer
            Constraint::Length(1), // message
            Constraint::Length(1), // hint
            Constraint::Min(0),
            Constraint::Length(1), // button
        ])
        .split(card);

    let button_row = rows[8];
    let button_width = BUTTON_WIDTH.min(button_row.width);
    let button = Rect::new(
        button_row.x + (button_row.width - button_width) / 2,
        button_row.y,
        button_width,
        button_row.height,
    );

    CardSections {
        badge: rows[1],
        digits: rows[3],
        message: rows[5],
        hint: rows[6],
        button,
    }
}

/// Converts a drawn rectangle into drag bounds.
pub fn to_bounds(rect: Rect) -> Bounds {
    Bounds {
        x: i32::from(rect.x),
        y: i32::from(rect.y),
        width: rect.width,
        height: rect.height,
    }
}

/// True when the cell at `col`, `row` falls inside `rect`.
pub fn hit(rect: Rect, col: u16, row: u16) -> bool {
    col >= rect.x && col < rect.x + rect.width && row >= rect.y && row < rect.y + rect.height
}
