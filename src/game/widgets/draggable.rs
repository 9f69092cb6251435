//=========================================================================
// Draggable
//=========================================================================
//
// An item that can be picked up, follows the pointer centred on it, and
// always snaps back home when released.
//
//=========================================================================

use crate::core::canvas::{Canvas, Color};
use crate::core::geometry::{Point, Rect};

const OUTLINE: Color = Color::rgb(40, 40, 40);

//=== Draggable ===========================================================

#[derive(Debug, Clone)]
pub struct Draggable {
    name: &'static str,
    home: Rect,
    rect: Rect,
    color: Color,
    dragging: bool,
}

impl Draggable {
    pub fn new(name: &'static str, home: Rect, color: Color) -> Self {
        Self {
            name,
            home,
            rect: home,
            color,
            dragging: false,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn home(&self) -> Rect {
        self.home
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Starts dragging if `pos` is on the item.
    pub fn grab(&mut self, pos: Point) -> bool {
        if self.rect.contains(pos) {
            self.dragging = true;
            self.rect = self.rect.with_center(pos);
        }
        self.dragging
    }

    /// Moves a grabbed item so it is centred on `pos`.
    pub fn drag_to(&mut self, pos: Point) {
        if self.dragging {
            self.rect = self.rect.with_center(pos);
        }
    }

    /// Releases the item. Returns `true` if it overlapped `target`.
    ///
    /// The item returns home either way.
    pub fn release(&mut self, target: &Rect) -> bool {
        if !self.dragging {
            return false;
        }
        let dropped = self.rect.intersects(target);
        self.dragging = false;
        self.rect = self.home;
        dropped
    }

    pub fn draw(&self, canvas: &mut Canvas) {
        canvas.fill_rect(self.rect, self.color);
        canvas.outline_rect(self.rect, OUTLINE, 2.0);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
