//=========================================================================
// Widgets
//=========================================================================
//
// Small interactive building blocks shared by the scenes.
//
// Widgets are plain structs owned by a scene. The scene forwards each
// input event to them and reads back what happened (a click, a drop);
// widgets never request transitions themselves.
//
// Labels sit on a fixed character grid. Each cell shows the installed
// outline font's glyph (see `font`), or a solid block when no face is
// available.
//
//=========================================================================

//=== Module Declarations =================================================

mod button;
mod draggable;
mod font;
mod narrator;
mod text_box;

//=== Public API ==========================================================

pub use button::Button;
pub use draggable::Draggable;
pub use font::{font_installed, install_font, install_font_file, install_system_font, FontError};
pub use narrator::Narrator;
pub use text_box::TextBox;

//=== Internal Dependencies ===============================================

use crate::core::canvas::{Canvas, Color};
use crate::core::geometry::{Point, Rect};

//=== Grid Text ===========================================================

pub const GLYPH_WIDTH: f32 = 8.0;
pub const GLYPH_HEIGHT: f32 = 14.0;
const GLYPH_ADVANCE: f32 = GLYPH_WIDTH + 2.0;
const LINE_ADVANCE: f32 = GLYPH_HEIGHT + 4.0;

/// Draws `text` starting at `origin` (top-left), one grid cell per glyph.
///
/// Spaces advance without drawing; `\n` starts a new line.
pub fn draw_text(canvas: &mut Canvas, text: &str, origin: Point, color: Color) {
    let mut pen = origin;
    for ch in text.chars() {
        match ch {
            '\n' => {
                pen = Point::new(origin.x, pen.y + LINE_ADVANCE);
            }
            c if c.is_whitespace() => pen.x += GLYPH_ADVANCE,
            c => {
                if !font::draw_glyph(canvas, c, pen, color) {
                    canvas.fill_rect(Rect::new(pen.x, pen.y, GLYPH_WIDTH, GLYPH_HEIGHT), color);
                }
                pen.x += GLYPH_ADVANCE;
            }
        }
    }
}

/// Width of the longest line of `text`.
pub fn text_width(text: &str) -> f32 {
    text.lines()
        .map(|line| line.chars().count() as f32 * GLYPH_ADVANCE)
        .fold(0.0, f32::max)
}

/// Draws `text` centred on `center`.
pub fn draw_text_centered(canvas: &mut Canvas, text: &str, center: Point, color: Color) {
    let lines = text.lines().count().max(1) as f32;
    let origin = Point::new(
        center.x - text_width(text) / 2.0,
        center.y - lines * LINE_ADVANCE / 2.0,
    );
    draw_text(canvas, text, origin, color);
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const INK: Color = Color::rgb(30, 30, 30);

    #[test]
    fn glyphs_are_blocks_and_spaces_are_gaps() {
        let mut canvas = Canvas::new(64, 32);
        canvas.clear(Color::WHITE);
        draw_text(&mut canvas, "a b", Point::new(0.0, 0.0), INK);

        assert_eq!(canvas.pixel(1, 1), Some(INK));
        assert_eq!(canvas.pixel(11, 1), Some(Color::WHITE));
        assert_eq!(canvas.pixel(21, 1), Some(INK));
    }

    #[test]
    fn newline_moves_down() {
        let mut canvas = Canvas::new(64, 64);
        canvas.clear(Color::WHITE);
        draw_text(&mut canvas, "a\nb", Point::new(0.0, 0.0), INK);

        assert_eq!(canvas.pixel(1, 20), Some(INK));
        assert_eq!(canvas.pixel(11, 1), Some(Color::WHITE));
    }

    #[test]
    fn width_uses_longest_line() {
        assert_eq!(text_width("ab\nabcd"), 4.0 * GLYPH_ADVANCE);
        assert_eq!(text_width(""), 0.0);
    }
}
