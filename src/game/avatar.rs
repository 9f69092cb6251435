//=========================================================================
// Avatar
//=========================================================================
//
// Flat-shape rendering of the customized character: body, head stacked
// on top, optional hat, optional outfit over the torso. Each part index
// picks a colour from its palette.
//
//=========================================================================

use crate::core::canvas::{Canvas, Color};
use crate::core::geometry::{Point, Rect};

use super::state::{Character, OUTFITS};

//=== Palettes ============================================================

const BODY_COLORS: [Color; 5] = [
    Color::rgb(250, 190, 200),
    Color::rgb(240, 170, 90),
    Color::rgb(120, 190, 110),
    Color::rgb(110, 170, 230),
    Color::rgb(250, 210, 70),
];

const HEAD_COLORS: [Color; 6] = [
    Color::rgb(240, 170, 90),
    Color::rgb(235, 240, 250),
    Color::rgb(60, 60, 80),
    Color::rgb(230, 80, 150),
    Color::rgb(250, 210, 70),
    Color::rgb(150, 160, 180),
];

const HAT_COLORS: [Color; 4] = [
    Color::BLACK,
    Color::rgb(30, 30, 30),
    Color::rgb(210, 40, 40),
    Color::rgb(90, 60, 170),
];

const OUTFIT_COLORS: [Color; 6] = [
    Color::rgb(200, 200, 200),
    Color::rgb(40, 40, 40),
    Color::rgb(180, 30, 60),
    Color::rgb(200, 30, 30),
    Color::rgb(30, 40, 110),
    Color::rgb(230, 120, 40),
];

/// Swatch colour for a closet item.
pub fn outfit_color(name: &str) -> Color {
    OUTFITS
        .iter()
        .position(|outfit| *outfit == name)
        .map_or(Color::WHITE, |i| OUTFIT_COLORS[i])
}

//=== Drawing =============================================================

/// Draws `character` standing with its feet at `feet`.
pub fn draw(
    canvas: &mut Canvas,
    character: &Character,
    feet: Point,
    height: f32,
    outfit: Option<&str>,
) {
    let body = body_rect(feet, height);
    canvas.fill_rect(body, BODY_COLORS[character.body % BODY_COLORS.len()]);

    if let Some(outfit) = outfit {
        let torso = Rect::new(body.x, body.y, body.w, body.h * 0.6);
        canvas.fill_rect(torso, outfit_color(outfit));
    }

    let head_size = height * 0.45;
    let head = Rect::centered(feet.x, body.y - head_size / 2.0 + 10.0, head_size, head_size);
    canvas.fill_rect(head, HEAD_COLORS[character.head % HEAD_COLORS.len()]);

    if character.hat_name().is_some() {
        let hat = Rect::new(
            head.x + head.w * 0.15,
            head.y - height * 0.15,
            head.w * 0.7,
            height * 0.15,
        );
        canvas.fill_rect(hat, HAT_COLORS[character.hat % HAT_COLORS.len()]);
    }
}

/// Torso rectangle for a character of `height` standing at `feet`.
pub fn body_rect(feet: Point, height: f32) -> Rect {
    let h = height * 0.6;
    let w = height * 0.45;
    Rect::new(feet.x - w / 2.0, feet.y - h, w, h)
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_sits_on_feet() {
        let body = body_rect(Point::new(100.0, 300.0), 200.0);
        assert_eq!(body.bottom(), 300.0);
        assert_eq!(body.center().x, 100.0);
    }

    #[test]
    fn outfit_covers_torso() {
        let mut canvas = Canvas::new(200, 320);
        canvas.clear(Color::WHITE);
        let character = Character::default();
        draw(&mut canvas, &character, Point::new(100.0, 300.0), 200.0, Some("starry sweater"));

        assert_eq!(canvas.pixel(100, 200), Some(outfit_color("starry sweater")));
        assert_eq!(canvas.pixel(100, 290), Some(BODY_COLORS[0]));
    }

    #[test]
    fn unknown_outfit_is_white() {
        assert_eq!(outfit_color("tuxedo"), Color::WHITE);
    }
}
