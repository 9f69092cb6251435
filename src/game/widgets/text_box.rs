//=========================================================================
// Text Box
//=========================================================================
//
// Single-line text entry with click-to-focus.
//
// Behaviour:
//   click inside   → toggles focus
//   click outside  → drops focus
//   Enter          → drops focus
//   Backspace      → deletes the last character
//   Text(c)        → appends while focused and under the length limit
//
//=========================================================================

use crate::core::canvas::{Canvas, Color};
use crate::core::geometry::{Point, Rect};
use crate::core::input::{InputEvent, KeyCode};

use super::{draw_text, GLYPH_HEIGHT};

//=== Colors ==============================================================

const BACKGROUND: Color = Color::rgb(250, 250, 250);
const BORDER: Color = Color::rgb(120, 120, 120);
const BORDER_ACTIVE: Color = Color::rgb(40, 110, 220);
const INK: Color = Color::rgb(30, 30, 30);
const PLACEHOLDER_INK: Color = Color::rgb(170, 170, 170);

//=== TextBox =============================================================

#[derive(Debug, Clone)]
pub struct TextBox {
    rect: Rect,
    text: String,
    placeholder: &'static str,
    max_chars: usize,
    active: bool,
}

impl TextBox {
    pub fn new(rect: Rect, placeholder: &'static str, max_chars: usize) -> Self {
        Self {
            rect,
            text: String::new(),
            placeholder,
            max_chars,
            active: false,
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Nothing but whitespace typed so far.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Returns `true` if the event was meant for the box.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        if let Some(pos) = event.left_click() {
            if self.rect.contains(pos) {
                self.active = !self.active;
                return true;
            }
            self.active = false;
            return false;
        }

        if !self.active {
            return false;
        }

        match event {
            InputEvent::KeyDown { key: KeyCode::Enter, .. } => {
                self.active = false;
                true
            }
            InputEvent::KeyDown { key: KeyCode::Backspace, .. } => {
                self.text.pop();
                true
            }
            InputEvent::Text(c) => {
                if self.text.chars().count() < self.max_chars {
                    self.text.push(*c);
                }
                true
            }
            _ => false,
        }
    }

    pub fn draw(&self, canvas: &mut Canvas) {
        canvas.fill_rect(self.rect, BACKGROUND);
        let border = if self.active { BORDER_ACTIVE } else { BORDER };
        canvas.outline_rect(self.rect, border, 2.0);

        let origin = Point::new(
            self.rect.x + 10.0,
            self.rect.y + (self.rect.h - GLYPH_HEIGHT) / 2.0,
        );
        if self.text.is_empty() && !self.active {
            draw_text(canvas, self.placeholder, origin, PLACEHOLDER_INK);
        } else {
            draw_text(canvas, &self.text, origin, INK);
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
