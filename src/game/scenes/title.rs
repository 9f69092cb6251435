//=========================================================================
// Title Scene
//=========================================================================

use log::info;

use crate::core::canvas::{Canvas, Color};
use crate::core::geometry::Rect;
use crate::core::input::InputEvent;
use crate::core::scene::{Scene, TransitionRequest};
use crate::game::widgets::{draw_text_centered, Button};
use crate::game::{GameScene, Layout};

const BACKGROUND: Color = Color::rgb(255, 226, 170);
const BANNER: Color = Color::rgb(120, 60, 140);
const TITLE_TEXT: &str = "Egresaditos: La Ultima Semana";

pub struct TitleScene {
    layout: Layout,
    play: Button,
}

impl TitleScene {
    pub fn new(layout: Layout) -> Self {
        let center = layout.at(0.5, 0.8);
        let play = Button::new(Rect::centered(center.x, center.y, 240.0, 90.0), "JUGAR");
        Self { layout, play }
    }

    pub fn play_button(&self) -> &Button {
        &self.play
    }
}

impl Scene<GameScene> for TitleScene {
    fn handle_input(&mut self, event: &InputEvent) -> Option<TransitionRequest<GameScene>> {
        if self.play.handle_input(event) {
            info!(target: "scene", "Starting customization");
            return Some(TransitionRequest::to(GameScene::Customize));
        }
        None
    }

    fn draw(&self, canvas: &mut Canvas) {
        canvas.clear(BACKGROUND);

        let banner_center = self.layout.at(0.5, 0.3);
        let banner = Rect::centered(
            banner_center.x,
            banner_center.y,
            self.layout.width * 0.6,
            140.0,
        );
        canvas.fill_rect(banner, BANNER);
        draw_text_centered(canvas, TITLE_TEXT, banner.center(), Color::WHITE);

        self.play.draw(canvas);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
