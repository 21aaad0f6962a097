//! # Application State
//!
//! Owns the ticket widget for the lifetime of the terminal session and the
//! bits of presentation state that are not part of the game itself (layout,
//! animation tick, quit flag).

use crate::tui::layout::{LayoutConfig, ScreenLayout};
use lottery::audio::AudioFeedback;
use lottery::widget::TicketWidget;
use lottery::{TicketGenerator, TicketSource};
use ratatui::layout::Rect;

/// Ticks per half-cycle of the winning card's bob.
const FLOAT_HALF_PERIOD: u64 = 5;

/// The main application state
pub struct App<S = TicketGenerator> {
    pub should_quit: bool,
    pub widget: TicketWidget<S, Box<dyn AudioFeedback>>,
    pub layout_config: LayoutConfig,
    /// Frames since start; drives the float animation.
    pub tick: u64,
}

impl<S: TicketSource> App<S> {
    pub fn new(source: S, audio: Box<dyn AudioFeedback>) -> Self {
        Self {
            should_quit: false,
            widget: TicketWidget::new(source, audio),
            layout_config: LayoutConfig::default(),
            tick: 0,
        }
    }

    /// Called once per frame before drawing.
    pub fn update(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        self.widget.observe();
    }

    /// "New Ticket" pressed.
    pub fn new_ticket(&mut self) {
        self.widget.regenerate();
    }

    /// Vertical bob for a winning card that has not been picked up yet.
    pub fn float_offset(&self) -> i32 {
        let floating = self.widget.is_won()
            && self.widget.card_position().is_none()
            && !self.widget.is_dragging();
        if floating && (self.tick / FLOAT_HALF_PERIOD) % 2 == 1 {
            -1
        } else {
            0
        }
    }

    pub fn layout(&self, area: Rect) -> ScreenLayout {
        self.layout_config
            .get_main_layout(area, self.widget.card_position(), self.float_offset())
    }

    /// Detaches pointer handling before the terminal is restored.
    pub fn shutdown(&mut self) {
        self.widget.teardown();
    }
}
