//! # Drag Module
//!
//! Pointer-drag tracking for the winning ticket. The controller is a two-state
//! machine (idle / dragging) that only listens while attached; the widget
//! attaches it on the winning edge and detaches it on teardown.

/// A point on the render surface, in cells. May be negative while dragging
/// past the top or left edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned box occupied by the ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub width: u16,
    pub height: u16,
}

impl Bounds {
    pub fn origin(&self) -> Position {
        Position::new(self.x, self.y)
    }

    pub fn contains(&self, point: Position) -> bool {
        point.x >= self.x
            && point.y >= self.y
            && point.x < self.x + i32::from(self.width)
            && point.y < self.y + i32::from(self.height)
    }
}

/// Where inside the ticket the pointer grabbed it.
///
/// Lives only for the duration of one gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragOffset {
    pub dx: i32,
    pub dy: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum DragPhase {
    #[default]
    Idle,
    Dragging(DragOffset),
}

/// State for tracking the ticket drag gesture
#[derive(Debug, Clone, Default)]
pub struct DragController {
    attached: bool,
    phase: DragPhase,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts listening for pointer events.
    pub fn attach(&mut self) {
        self.attached = true;
    }

    /// Stops listening and forgets any gesture in progress.
    pub fn detach(&mut self) {
        self.attached = false;
        self.phase = DragPhase::Idle;
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging(_))
    }

    /// Current gesture offset, if a drag is in progress.
    pub fn offset(&self) -> Option<DragOffset> {
        match self.phase {
            DragPhase::Dragging(offset) => Some(offset),
            DragPhase::Idle => None,
        }
    }

    /// Begins a drag when the pointer goes down inside `element`.
    ///
    /// # Arguments
    /// * `pointer` - Where the button was pressed
    /// * `element` - The ticket's current bounds
    ///
    /// # Returns
    /// `true` if a gesture started
    pub fn pointer_down(&mut self, pointer: Position, element: Bounds) -> bool {
        if !self.attached || !element.contains(pointer) {
            return false;
        }
        self.phase = DragPhase::Dragging(DragOffset {
            dx: pointer.x - element.x,
            dy: pointer.y - element.y,
        });
        true
    }

    /// Follows the pointer, keeping the grab offset under it.
    ///
    /// # Returns
    /// The element's new top-left corner, or `None` when not dragging
    pub fn pointer_move(&mut self, pointer: Position) -> Option<Position> {
        if !self.attached {
            return None;
        }
        self.offset()
            .map(|offset| Position::new(pointer.x - offset.dx, pointer.y - offset.dy))
    }

    /// Ends the gesture wherever the pointer is released.
    ///
    /// # Returns
    /// `true` if a gesture was in progress
    pub fn pointer_up(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        self.phase = DragPhase::Idle;
        was_dragging
    }
}
