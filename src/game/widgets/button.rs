//=========================================================================
// Button
//=========================================================================
//
// Rectangular push button: hover highlight, click on left button-down.
//
//=========================================================================

use crate::core::canvas::{Canvas, Color};
use crate::core::geometry::{Point, Rect};
use crate::core::input::InputEvent;

use super::draw_text_centered;

//=== Colors ==============================================================

const FILL: Color = Color::rgb(244, 180, 96);
const HOVER_FILL: Color = Color::rgb(255, 210, 130);
const DISABLED_FILL: Color = Color::rgb(170, 170, 170);
const BORDER: Color = Color::rgb(60, 40, 30);
const LABEL: Color = Color::rgb(30, 30, 30);

//=== Button ==============================================================

#[derive(Debug, Clone)]
pub struct Button {
    rect: Rect,
    label: &'static str,
    enabled: bool,
    hovered: bool,
    /// Extra size while hovered, `(0, 0)` for none.
    hover_grow: (f32, f32),
}

impl Button {
    pub fn new(rect: Rect, label: &'static str) -> Self {
        Self {
            rect,
            label,
            enabled: true,
            hovered: false,
            hover_grow: (0.0, 0.0),
        }
    }

    /// Enlarges the button around its centre while hovered.
    pub fn with_hover_grow(mut self, dw: f32, dh: f32) -> Self {
        self.hover_grow = (dw, dh);
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Area the button is drawn in (grown while hovered).
    pub fn drawn_rect(&self) -> Rect {
        if self.hovered && self.enabled {
            self.rect.inflate(self.hover_grow.0, self.hover_grow.1)
        } else {
            self.rect
        }
    }

    /// Tracks hover and returns `true` when the button was clicked.
    ///
    /// Clicks hit-test the resting rect, not the hover-grown one.
    /// Disabled buttons track hover but never report clicks.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        if let InputEvent::MouseMoved { x, y } = *event {
            self.hovered = self.rect.contains(Point::new(x, y));
            return false;
        }

        match event.left_click() {
            Some(pos) => {
                self.hovered = self.rect.contains(pos);
                self.enabled && self.hovered
            }
            None => false,
        }
    }

    pub fn draw(&self, canvas: &mut Canvas) {
        let fill = match (self.enabled, self.hovered) {
            (false, _) => DISABLED_FILL,
            (true, true) => HOVER_FILL,
            (true, false) => FILL,
        };
        let rect = self.drawn_rect();
        canvas.fill_rect(rect, fill);
        canvas.outline_rect(rect, BORDER, 3.0);
        draw_text_centered(canvas, self.label, rect.center(), LABEL);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn button() -> Button {
        Button::new(Rect::new(100.0, 100.0, 200.0, 50.0), "Jugar")
    }

    #[test]
    fn click_inside_reports_click() {
        let mut b = button();
        assert!(b.handle_input(&InputEvent::click(150.0, 120.0)));
        assert!(!b.handle_input(&InputEvent::click(50.0, 120.0)));
    }

    #[test]
    fn release_is_not_a_click() {
        let mut b = button();
        assert!(!b.handle_input(&InputEvent::release(150.0, 120.0)));
    }

    #[test]
    fn disabled_button_ignores_clicks() {
        let mut b = button().disabled();
        assert!(!b.handle_input(&InputEvent::click(150.0, 120.0)));

        b.set_enabled(true);
        assert!(b.handle_input(&InputEvent::click(150.0, 120.0)));
    }

    #[test]
    fn hover_follows_pointer() {
        let mut b = button();
        b.handle_input(&InputEvent::MouseMoved { x: 150.0, y: 120.0 });
        assert!(b.is_hovered());
        b.handle_input(&InputEvent::MouseMoved { x: 10.0, y: 10.0 });
        assert!(!b.is_hovered());
    }

    #[test]
    fn hover_grow_enlarges_drawn_rect_only() {
        let mut b = button().with_hover_grow(20.0, 10.0);
        assert_eq!(b.drawn_rect(), b.rect());

        b.handle_input(&InputEvent::MouseMoved { x: 299.0, y: 120.0 });
        assert_eq!(b.drawn_rect(), Rect::new(90.0, 95.0, 220.0, 60.0));
        assert!(!b.handle_input(&InputEvent::click(305.0, 120.0)));
    }

    #[test]
    fn draw_fills_rect() {
        let mut canvas = Canvas::new(400, 200);
        canvas.clear(Color::BLACK);
        button().disabled().draw(&mut canvas);
        assert_eq!(canvas.pixel(110, 110), Some(DISABLED_FILL));
        assert_eq!(canvas.pixel(101, 101), Some(BORDER));
    }
}
