//=========================================================================
// Game Flow Integration Tests
//=========================================================================
//
// Drives the real game scenes through the transition controller without
// a window: input events in, ticks at 60 Hz, state inspected through the
// shared handle.
//
// Scenes lay out in the default 1280x720 space; the canvas is kept small
// since drawing clips to it.
//
//=========================================================================

use std::cell::RefCell;
use std::rc::Rc;

use egresaditos::game::{Character, GameScene, GameScenes, GameState, Layout, SharedState};
use egresaditos::prelude::*;

const DT: f32 = 1.0 / 60.0;
const FADE_RATE: f32 = 350.0;

//=== Harness =============================================================

struct Game {
    controller: TransitionController<GameScene, GameScenes>,
    canvas: Canvas,
    state: SharedState,
}

impl Game {
    fn start_at(initial: GameScene, state: GameState) -> Self {
        let state = Rc::new(RefCell::new(state));
        let scenes = GameScenes::with_state(Rc::clone(&state), Layout::default());
        let controller =
            match TransitionController::new(scenes, initial, GameScene::Title, FADE_RATE) {
                Ok(controller) => controller,
                Err(e) => panic!("controller should start: {}", e),
            };
        Self {
            controller,
            canvas: Canvas::new(128, 72),
            state,
        }
    }

    fn new() -> Self {
        Self::start_at(GameScene::Title, GameState::default())
    }

    fn scene(&self) -> GameScene {
        self.controller.active_key()
    }

    fn tick(&mut self, events: &[InputEvent]) {
        match self.controller.tick(events, DT, &mut self.canvas) {
            Ok(TickControl::Continue) => {}
            Ok(TickControl::Exit) => panic!("unexpected exit"),
            Err(e) => panic!("tick failed: {}", e),
        }
    }

    fn idle(&mut self, ticks: usize) {
        for _ in 0..ticks {
            self.tick(&[]);
        }
    }

    /// Ticks until no transition is in flight.
    fn settle(&mut self) {
        for _ in 0..1_000 {
            if self.controller.phase() == FadePhase::Stable && self.controller.input_enabled() {
                return;
            }
            self.tick(&[]);
        }
        panic!("transition never settled");
    }

    fn click(&mut self, x: f32, y: f32) {
        self.tick(&[InputEvent::MouseMoved { x, y }, InputEvent::click(x, y)]);
    }

    /// Clicks and waits for the resulting transition (if any) to finish.
    fn click_and_settle(&mut self, x: f32, y: f32) {
        self.click(x, y);
        self.settle();
    }

    fn type_text(&mut self, text: &str) {
        let events: Vec<InputEvent> = text.chars().map(InputEvent::Text).collect();
        self.tick(&events);
    }

    fn hold(&mut self, key: KeyCode, ticks: usize) {
        self.tick(&[InputEvent::key_down(key)]);
        self.idle(ticks);
        self.tick(&[InputEvent::key_up(key)]);
    }

    fn press(&mut self, key: KeyCode) {
        self.tick(&[InputEvent::key_down(key)]);
        self.tick(&[InputEvent::key_up(key)]);
    }
}

//--- Screen positions (1280x720) -----------------------------------------

const PLAY: (f32, f32) = (640.0, 576.0);
const NAME_BOX: (f32, f32) = (890.0, 385.0);
const CONFIRM: (f32, f32) = (1130.0, 650.0);
const HEAD_NEXT: (f32, f32) = (610.0, 320.0);
const ROOM_BUTTON: (f32, f32) = (640.0, 648.0);
const STARRY_SWEATER: (f32, f32) = (828.0, 454.0);
const CHARACTER_TORSO: (f32, f32) = (512.0, 424.0);
const CLOSET_DONE: (f32, f32) = (960.0, 648.0);
const KITCHEN_BACK: (f32, f32) = (100.0, 50.0);
const KITCHEN_DOOR: (f32, f32) = (1150.0, 50.0);
const STICKER_HEART: (f32, f32) = (130.0, 440.0);
const SAVE_LETTER: (f32, f32) = (1160.0, 665.0);
const REWIND: (f32, f32) = (640.0, 561.0);

fn customized() -> GameState {
    GameState {
        player_name: "Lola".into(),
        character: Some(Character::default()),
        ..GameState::default()
    }
}

//=========================================================================
// Scene-by-scene
//=========================================================================

#[test]
fn title_play_button_leads_to_customize() {
    let mut game = Game::new();
    assert_eq!(game.scene(), GameScene::Title);

    game.click_and_settle(PLAY.0, PLAY.1);
    assert_eq!(game.scene(), GameScene::Customize);
    assert_eq!(game.controller.swap_count(), 1);
}

#[test]
fn customize_saves_choices_into_state() {
    let mut game = Game::new();
    game.click_and_settle(PLAY.0, PLAY.1);

    game.click(HEAD_NEXT.0, HEAD_NEXT.1);
    game.click(NAME_BOX.0, NAME_BOX.1);
    game.type_text("Lola");
    game.click_and_settle(CONFIRM.0, CONFIRM.1);

    assert_eq!(game.scene(), GameScene::Room);
    let state = game.state.borrow();
    assert_eq!(state.player_name, "Lola");
    assert_eq!(state.character.map(|c| c.head_name()), Some("cloud"));
}

#[test]
fn customize_without_name_stays_put() {
    let mut game = Game::new();
    game.click_and_settle(PLAY.0, PLAY.1);

    game.click_and_settle(CONFIRM.0, CONFIRM.1);
    assert_eq!(game.scene(), GameScene::Customize);
    assert!(!game.state.borrow().has_character());
}

#[test]
fn room_dialogue_times_out_then_button_works() {
    let mut game = Game::start_at(GameScene::Room, customized());
    assert_eq!(game.scene(), GameScene::Room);

    // The first click only dismisses the dialogue, so let it time out.
    game.idle(190);
    game.click_and_settle(ROOM_BUTTON.0, ROOM_BUTTON.1);
    assert_eq!(game.scene(), GameScene::ClosetOutfit);
}

#[test]
fn room_click_dismisses_dialogue() {
    let mut game = Game::start_at(GameScene::Room, customized());

    game.click_and_settle(ROOM_BUTTON.0, ROOM_BUTTON.1);
    assert_eq!(game.scene(), GameScene::Room);

    game.click_and_settle(ROOM_BUTTON.0, ROOM_BUTTON.1);
    assert_eq!(game.scene(), GameScene::ClosetOutfit);
}

#[test]
fn room_escape_returns_to_title() {
    let mut game = Game::start_at(GameScene::Room, customized());
    game.press(KeyCode::Escape);
    game.settle();
    assert_eq!(game.scene(), GameScene::Title);
}

#[test]
fn closet_drop_on_character_selects_outfit() {
    let mut game = Game::start_at(GameScene::ClosetOutfit, customized());

    game.click_and_settle(CLOSET_DONE.0, CLOSET_DONE.1);
    assert_eq!(game.scene(), GameScene::ClosetOutfit, "exit is locked");

    game.tick(&[InputEvent::click(STARRY_SWEATER.0, STARRY_SWEATER.1)]);
    game.tick(&[InputEvent::MouseMoved {
        x: CHARACTER_TORSO.0,
        y: CHARACTER_TORSO.1,
    }]);
    game.tick(&[InputEvent::release(CHARACTER_TORSO.0, CHARACTER_TORSO.1)]);
    assert_eq!(game.state.borrow().selected_outfit, Some("starry sweater"));

    game.click_and_settle(CLOSET_DONE.0, CLOSET_DONE.1);
    assert_eq!(game.scene(), GameScene::Kitchen);
}

#[test]
fn kitchen_backpack_opens_the_door() {
    let mut game = Game::start_at(GameScene::Kitchen, customized());

    game.click_and_settle(KITCHEN_DOOR.0, KITCHEN_DOOR.1);
    assert_eq!(game.scene(), GameScene::Kitchen, "door is locked");

    // 320 → ~770 at 5 px per tick.
    game.hold(KeyCode::ArrowRight, 89);
    game.press(KeyCode::Space);
    assert!(game.state.borrow().has_backpack);

    game.click_and_settle(KITCHEN_DOOR.0, KITCHEN_DOOR.1);
    assert_eq!(game.scene(), GameScene::WriteLetter);
}

#[test]
fn kitchen_back_remembers_position() {
    let mut game = Game::start_at(GameScene::Kitchen, customized());
    game.hold(KeyCode::ArrowRight, 20);

    game.click_and_settle(KITCHEN_BACK.0, KITCHEN_BACK.1);
    assert_eq!(game.scene(), GameScene::Room);
    let saved = game.state.borrow().player_x;
    assert!(saved > 320.0, "moved right before leaving, got {}", saved);
}

#[test]
fn write_letter_records_text_and_stickers() {
    let mut game = Game::start_at(GameScene::WriteLetter, customized());

    game.press(KeyCode::Enter);
    game.type_text("Gracias");
    game.click(STICKER_HEART.0, STICKER_HEART.1);
    game.click_and_settle(SAVE_LETTER.0, SAVE_LETTER.1);

    assert_eq!(game.scene(), GameScene::Ending);
    let state = game.state.borrow();
    assert_eq!(state.letter, "Querido profesor...\nGracias");
    assert_eq!(state.stickers, ["corazon"]);
    assert!(state.letter_written);
}

#[test]
fn ending_rewinds_to_title() {
    let mut game = Game::start_at(GameScene::Ending, customized());
    game.click_and_settle(REWIND.0, REWIND.1);
    assert_eq!(game.scene(), GameScene::Title);
}

//=========================================================================
// Failure Paths
//=========================================================================

#[test]
fn room_without_character_falls_back_to_title() {
    let game = Game::start_at(GameScene::Room, GameState::default());
    assert_eq!(game.scene(), GameScene::Title);
}

#[test]
fn fallback_that_cannot_build_is_fatal() {
    let scenes = GameScenes::new();
    match TransitionController::new(scenes, GameScene::Room, GameScene::ClosetOutfit, FADE_RATE) {
        Err(e) => assert!(e.is_fatal()),
        Ok(_) => panic!("neither scene can build without a character"),
    }
}

#[test]
fn input_during_fade_is_ignored() {
    let mut game = Game::new();
    game.click(PLAY.0, PLAY.1);
    assert!(!game.controller.input_enabled());

    // A second click lands while fading; it must not queue anything.
    game.click(PLAY.0, PLAY.1);
    game.settle();
    assert_eq!(game.scene(), GameScene::Customize);
    assert_eq!(game.controller.swap_count(), 1);
}

#[test]
fn quit_exits_mid_transition() {
    let mut game = Game::new();
    game.click(PLAY.0, PLAY.1);
    game.idle(10);

    let control = game.controller.tick(&[InputEvent::Quit], DT, &mut game.canvas);
    assert!(matches!(control, Ok(TickControl::Exit)));
    assert_eq!(game.scene(), GameScene::Title);
}

//=========================================================================
// Full Playthrough
//=========================================================================

#[test]
fn full_playthrough() {
    let mut game = Game::new();

    game.click_and_settle(PLAY.0, PLAY.1);
    game.click(NAME_BOX.0, NAME_BOX.1);
    game.type_text("Lola");
    game.click_and_settle(CONFIRM.0, CONFIRM.1);
    assert_eq!(game.scene(), GameScene::Room);

    game.click(ROOM_BUTTON.0, ROOM_BUTTON.1);
    game.click_and_settle(ROOM_BUTTON.0, ROOM_BUTTON.1);
    assert_eq!(game.scene(), GameScene::ClosetOutfit);

    game.tick(&[InputEvent::click(STARRY_SWEATER.0, STARRY_SWEATER.1)]);
    game.tick(&[InputEvent::MouseMoved {
        x: CHARACTER_TORSO.0,
        y: CHARACTER_TORSO.1,
    }]);
    game.tick(&[InputEvent::release(CHARACTER_TORSO.0, CHARACTER_TORSO.1)]);
    game.click_and_settle(CLOSET_DONE.0, CLOSET_DONE.1);
    assert_eq!(game.scene(), GameScene::Kitchen);

    game.hold(KeyCode::ArrowRight, 89);
    game.press(KeyCode::Space);
    game.click_and_settle(KITCHEN_DOOR.0, KITCHEN_DOOR.1);
    assert_eq!(game.scene(), GameScene::WriteLetter);

    game.click_and_settle(SAVE_LETTER.0, SAVE_LETTER.1);
    assert_eq!(game.scene(), GameScene::Ending);

    game.click_and_settle(REWIND.0, REWIND.1);
    assert_eq!(game.scene(), GameScene::Title);
    assert_eq!(game.controller.swap_count(), 7);

    let state = game.state.borrow();
    assert_eq!(state.selected_outfit, Some("starry sweater"));
    assert!(state.has_backpack);
    assert!(state.letter_written);
}
