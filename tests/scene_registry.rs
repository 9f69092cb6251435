//=========================================================================
// Scene Registry Integration Tests
//=========================================================================
//
// Runs real game scenes from a `SceneRegistry` instead of the closed
// `GameScenes` factory: only some keys are registered, and constructors
// receive the registry's state handle.
//
//=========================================================================

use std::cell::RefCell;
use std::rc::Rc;

use egresaditos::game::scenes::{CustomizeScene, EndingScene, RoomScene, TitleScene};
use egresaditos::game::{Character, GameScene, GameState, Layout};
use egresaditos::prelude::*;

const DT: f32 = 1.0 / 60.0;
const FADE_RATE: f32 = 350.0;
const PLAY: (f32, f32) = (640.0, 576.0);

type Registry = SceneRegistry<GameScene, GameState>;

//=== Harness =============================================================

fn registry(state: GameState) -> Registry {
    let layout = Layout::default();
    let mut registry = SceneRegistry::new(Rc::new(RefCell::new(state)));
    registry.register(GameScene::Title, move |_| Ok(Box::new(TitleScene::new(layout))));
    registry.register(GameScene::Ending, move |_| Ok(Box::new(EndingScene::new(layout))));
    registry
}

fn start(registry: Registry, initial: GameScene) -> TransitionController<GameScene, Registry> {
    match TransitionController::new(registry, initial, GameScene::Title, FADE_RATE) {
        Ok(controller) => controller,
        Err(e) => panic!("controller should start: {}", e),
    }
}

fn run(controller: &mut TransitionController<GameScene, Registry>, events: &[InputEvent]) {
    let mut canvas = Canvas::new(128, 72);
    match controller.tick(events, DT, &mut canvas) {
        Ok(TickControl::Continue) => {}
        Ok(TickControl::Exit) => panic!("unexpected exit"),
        Err(e) => panic!("tick failed: {}", e),
    }
}

fn settle(controller: &mut TransitionController<GameScene, Registry>) {
    for _ in 0..1_000 {
        if controller.phase() == FadePhase::Stable && controller.input_enabled() {
            return;
        }
        run(controller, &[]);
    }
    panic!("transition never settled");
}

fn press_play(controller: &mut TransitionController<GameScene, Registry>) {
    let (x, y) = PLAY;
    run(controller, &[InputEvent::MouseMoved { x, y }, InputEvent::click(x, y)]);
    settle(controller);
}

//=========================================================================
// Tests
//=========================================================================

#[test]
fn registered_scene_is_reached() {
    let mut scenes = registry(GameState::default());
    scenes.register(GameScene::Customize, |state| {
        Ok(Box::new(CustomizeScene::new(state, Layout::default())))
    });
    let mut controller = start(scenes, GameScene::Title);

    press_play(&mut controller);

    assert_eq!(controller.active_key(), GameScene::Customize);
    assert_eq!(controller.swap_count(), 1);
}

#[test]
fn unregistered_target_falls_back_to_title() {
    let scenes = registry(GameState::default());
    assert!(!scenes.is_registered(GameScene::Customize));
    let mut controller = start(scenes, GameScene::Title);

    press_play(&mut controller);

    assert_eq!(controller.active_key(), GameScene::Title);
    assert_eq!(controller.swap_count(), 1);
    assert!(controller.input_enabled());
}

#[test]
fn constructors_see_the_registry_state() {
    let layout = Layout::default();
    let with_character = GameState {
        character: Some(Character::default()),
        ..GameState::default()
    };

    let mut scenes = registry(with_character);
    scenes.register(GameScene::Room, move |state| Ok(Box::new(RoomScene::new(state, layout)?)));
    assert!(scenes.create(GameScene::Room).is_ok());

    scenes.state().borrow_mut().character = None;
    assert!(matches!(
        scenes.create(GameScene::Room),
        Err(SceneError::Construction { .. })
    ));
}

#[test]
fn failed_initial_scene_starts_on_fallback() {
    let layout = Layout::default();
    let mut scenes = registry(GameState::default());
    scenes.register(GameScene::Room, move |state| Ok(Box::new(RoomScene::new(state, layout)?)));

    let controller = start(scenes, GameScene::Room);

    assert_eq!(controller.active_key(), GameScene::Title);
}
