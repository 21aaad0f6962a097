//! # Ticket Widget
//!
//! The whole game state: the current ticket, the attempt counter, the victory
//! edge detector and the drag controller. The front end drives it with
//! [`TicketWidget::regenerate`], calls [`TicketWidget::observe`] once per
//! frame, and forwards pointer events.

use crate::audio::AudioFeedback;
use crate::drag::{Bounds, DragController, Position};
use crate::{Ticket, TicketSource};

/// Remembers the previous verdict so the win fires once per transition.
#[derive(Debug, Clone, Copy, Default)]
pub struct VictoryLatch {
    previous: bool,
}

impl VictoryLatch {
    /// Records `won` and reports whether it is a not-won to won transition.
    pub fn observe(&mut self, won: bool) -> bool {
        let rising = won && !self.previous;
        self.previous = won;
        rising
    }
}

/// Lottery ticket state machine.
pub struct TicketWidget<S, A> {
    source: S,
    audio: A,
    ticket: Ticket,
    attempts: u64,
    victory: VictoryLatch,
    drag: DragController,
    /// Top-left of the ticket once it has been picked up; `None` keeps the default slot.
    card_position: Option<Position>,
}

impl<S: TicketSource, A: AudioFeedback> TicketWidget<S, A> {
    /// Creates the widget and draws the first ticket.
    ///
    /// # Arguments
    /// * `source` - Where tickets come from
    /// * `audio` - Backend for the click and victory cues
    pub fn new(mut source: S, audio: A) -> Self {
        let ticket = source.draw();
        tracing::debug!(%ticket, "first ticket");
        Self {
            source,
            audio,
            ticket,
            attempts: 0,
            victory: VictoryLatch::default(),
            drag: DragController::new(),
            card_position: None,
        }
    }

    pub fn ticket(&self) -> &Ticket {
        &self.ticket
    }

    /// Number of regenerations so far.
    pub fn attempts(&self) -> u64 {
        self.attempts
    }

    /// Evaluated from the current ticket on every call.
    pub fn is_won(&self) -> bool {
        self.ticket.is_winning()
    }

    /// The audio backend, so recording backends can be inspected after play.
    #[doc(hidden)]
    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    pub fn card_position(&self) -> Option<Position> {
        self.card_position
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Draws a new ticket unless the current one already won.
    ///
    /// # Returns
    /// `true` if a new ticket was drawn
    pub fn regenerate(&mut self) -> bool {
        if self.is_won() {
            return false;
        }
        self.audio.play_click();
        self.ticket = self.source.draw();
        self.attempts += 1;
        tracing::debug!(ticket = %self.ticket, attempts = self.attempts, "regenerated");
        true
    }

    /// Per-frame check of the verdict.
    ///
    /// Plays the victory cue and attaches the drag controller on the
    /// transition into the won state only; repeated observations while won
    /// do nothing.
    ///
    /// # Returns
    /// `true` on the winning edge
    pub fn observe(&mut self) -> bool {
        let won = self.is_won();
        if !self.victory.observe(won) {
            return false;
        }
        tracing::info!(ticket = %self.ticket, attempts = self.attempts, "winning ticket");
        self.audio.play_victory();
        self.drag.attach();
        true
    }

    /// Pointer pressed. Starts a drag if the ticket has won and was hit.
    ///
    /// # Arguments
    /// * `pointer` - Press location
    /// * `card` - Where the ticket is currently drawn
    pub fn pointer_down(&mut self, pointer: Position, card: Bounds) -> bool {
        if !self.is_won() || !self.drag.pointer_down(pointer, card) {
            return false;
        }
        self.card_position.get_or_insert(card.origin());
        tracing::debug!(x = pointer.x, y = pointer.y, "drag started");
        true
    }

    /// Pointer moved anywhere on the surface.
    ///
    /// # Returns
    /// The ticket's new position if it moved
    pub fn pointer_move(&mut self, pointer: Position) -> Option<Position> {
        if !self.is_won() {
            return None;
        }
        let position = self.drag.pointer_move(pointer)?;
        self.card_position = Some(position);
        Some(position)
    }

    /// Pointer released anywhere on the surface.
    pub fn pointer_up(&mut self) {
        if self.drag.pointer_up() {
            tracing::debug!(position = ?self.card_position, "drag ended");
        }
    }

    /// Detaches the drag controller. Call before the widget goes away.
    pub fn teardown(&mut self) {
        self.drag.detach();
    }
}
