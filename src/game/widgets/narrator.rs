//=========================================================================
// Narrator
//=========================================================================
//
// Queue of timed dialogue lines. One line shows at a time; when its time
// runs out (or it is skipped) the next one takes its place.
//
//=========================================================================

use std::collections::VecDeque;

use crate::core::canvas::{Canvas, Color};
use crate::core::geometry::{Point, Rect};

use super::draw_text;

const PANEL: Color = Color::rgb(255, 255, 255);
const PANEL_BORDER: Color = Color::rgb(30, 30, 30);
const INK: Color = Color::rgb(30, 30, 30);

//=== Narrator ============================================================

#[derive(Debug, Default)]
pub struct Narrator {
    current: Option<Line>,
    queue: VecDeque<Line>,
}

#[derive(Debug)]
struct Line {
    text: String,
    remaining: f32,
}

impl Narrator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a line shown for `seconds`.
    pub fn say(&mut self, text: impl Into<String>, seconds: f32) {
        self.queue.push_back(Line {
            text: text.into(),
            remaining: seconds,
        });
        if self.current.is_none() {
            self.next_line();
        }
    }

    /// Counts down the current line.
    pub fn update(&mut self, dt: f32) {
        if let Some(line) = &mut self.current {
            line.remaining -= dt;
            if line.remaining <= 0.0 {
                self.next_line();
            }
        }
    }

    /// Drops the current line immediately.
    pub fn skip(&mut self) {
        self.next_line();
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_ref().map(|line| line.text.as_str())
    }

    pub fn is_idle(&self) -> bool {
        self.current.is_none()
    }

    /// Draws the current line inside `panel`, if any.
    pub fn draw(&self, canvas: &mut Canvas, panel: Rect) {
        if let Some(text) = self.current() {
            canvas.fill_rect(panel, PANEL);
            canvas.outline_rect(panel, PANEL_BORDER, 3.0);
            draw_text(canvas, text, Point::new(panel.x + 20.0, panel.y + 20.0), INK);
        }
    }

    fn next_line(&mut self) {
        self.current = self.queue.pop_front();
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_play_in_order() {
        let mut n = Narrator::new();
        n.say("uno", 1.0);
        n.say("dos", 1.0);
        assert_eq!(n.current(), Some("uno"));

        n.update(0.5);
        assert_eq!(n.current(), Some("uno"));
        n.update(0.5);
        assert_eq!(n.current(), Some("dos"));
        n.update(1.0);
        assert!(n.is_idle());
    }

    #[test]
    fn skip_advances() {
        let mut n = Narrator::new();
        n.say("uno", 3.0);
        n.skip();
        assert!(n.is_idle());
        n.skip();
        assert!(n.is_idle());
    }

    #[test]
    fn say_after_idle_starts_immediately() {
        let mut n = Narrator::new();
        n.update(1.0);
        n.say("hola", 2.0);
        assert_eq!(n.current(), Some("hola"));
    }
}
