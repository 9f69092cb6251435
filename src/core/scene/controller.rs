//=========================================================================
// Transition Controller
//=========================================================================
//
// Owns the active scene and drives the fade-to-black scene swap.
//
// Per-tick order (observable behavior depends on it):
// ```text
//   1. input    → quit ends the tick; otherwise dispatched only while
//                 input is enabled (a transition in flight swallows it)
//   2. update   → skipped on the tick the outgoing scene is replaced
//   3. request  → Stable + request ⇒ FadingOut, input disabled
//   4. fade     → ±rate·dt; at 255 build the target (or the fallback);
//                 at 0 re-enable input
//   5. draw     → active scene
//   6. overlay  → black at round(fade_level) when > 0
// ```
// Step 7 (present) belongs to the caller, which owns the frame.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, error, info, trace};

//=== Internal Dependencies ===============================================

use super::fade::{Fade, FadeEvent, FadePhase};
use super::{Scene, SceneFactory, SceneKey, TransitionRequest};
use crate::core::canvas::{Canvas, Color};
use crate::core::error::SceneError;
use crate::core::input::InputEvent;
use crate::core::TickControl;

//=== TransitionController ================================================

/// Scene owner and fade state machine.
///
/// Exactly one scene is live at any time. The outgoing scene is dropped
/// at the moment the fade reaches full black, before the incoming scene
/// receives any call.
///
/// # Failure Policy
///
/// When the target scene cannot be constructed (unregistered key or a
/// failing constructor) the error is logged and the configured fallback
/// scene is built instead. Only if the fallback also fails does
/// [`tick`](Self::tick) return an error ([`SceneError::FallbackFailed`]).
pub struct TransitionController<K: SceneKey, F: SceneFactory<K>> {
    factory: F,
    active_scene: Box<dyn Scene<K>>,
    active_key: K,
    fallback: K,
    fade: Fade,
    pending_target: Option<K>,
    input_enabled: bool,
    swaps: u64,
}

impl<K: SceneKey, F: SceneFactory<K>> TransitionController<K, F> {
    //--- Construction -----------------------------------------------------

    /// Builds the controller with `initial` as the active scene.
    ///
    /// The initial scene follows the same fallback policy as transitions.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::FallbackFailed`] if neither `initial` nor
    /// `fallback` can be constructed.
    ///
    /// # Panics
    ///
    /// Panics if `fade_rate` is not positive.
    pub fn new(factory: F, initial: K, fallback: K, fade_rate: f32) -> Result<Self, SceneError> {
        let fade = Fade::new(fade_rate);
        let (active_scene, active_key) = construct_or_fallback(&factory, initial, fallback)?;

        info!(target: "scene", "Starting on scene {} (fade rate {}/s)", active_key, fade_rate);

        Ok(Self {
            factory,
            active_scene,
            active_key,
            fallback,
            fade,
            pending_target: None,
            input_enabled: true,
            swaps: 0,
        })
    }

    //--- Accessors --------------------------------------------------------

    /// Key of the live scene (the fallback key after a failed load).
    pub fn active_key(&self) -> K {
        self.active_key
    }

    pub fn fallback_key(&self) -> K {
        self.fallback
    }

    pub fn fade_level(&self) -> f32 {
        self.fade.level()
    }

    pub fn phase(&self) -> FadePhase {
        self.fade.phase()
    }

    pub fn pending_target(&self) -> Option<K> {
        self.pending_target
    }

    pub fn input_enabled(&self) -> bool {
        self.input_enabled
    }

    /// Number of scene replacements performed so far.
    pub fn swap_count(&self) -> u64 {
        self.swaps
    }

    //--- Tick -------------------------------------------------------------

    /// Runs one frame: input, update, transition, draw, overlay.
    ///
    /// Returns [`TickControl::Exit`] as soon as a quit event is seen;
    /// nothing after it in the tick runs and any pending transition is
    /// abandoned.
    ///
    /// # Errors
    ///
    /// Only [`SceneError::FallbackFailed`], when a swap could build
    /// neither the target nor the fallback scene.
    pub fn tick(
        &mut self,
        events: &[InputEvent],
        dt: f32,
        canvas: &mut Canvas,
    ) -> Result<TickControl, SceneError> {
        let mut request = None;

        //--- Step 1: Input ------------------------------------------------
        for event in events {
            if event.is_quit() {
                info!(
                    target: "scene",
                    "Quit received on {} (phase {:?}, fade {:.1})",
                    self.active_key,
                    self.fade.phase(),
                    self.fade.level()
                );
                return Ok(TickControl::Exit);
            }

            if self.input_enabled {
                keep_first(&mut request, self.active_scene.handle_input(event));
            } else {
                trace!(target: "scene", "Input dropped during transition: {:?}", event);
            }
        }

        //--- Step 2: Update -----------------------------------------------
        if !self.fade.will_reach_black(dt) {
            keep_first(&mut request, self.active_scene.update(dt));
        }

        //--- Step 3: Transition request -----------------------------------
        if let Some(request) = request {
            self.request_transition(request.target);
        }

        //--- Step 4: Fade -------------------------------------------------
        self.advance_fade(dt)?;

        //--- Steps 5-6: Draw + overlay ------------------------------------
        self.render(canvas);

        Ok(TickControl::Continue)
    }

    /// Draws the active scene and the fade overlay.
    pub fn render(&self, canvas: &mut Canvas) {
        self.active_scene.draw(canvas);

        let alpha = self.fade.overlay_alpha();
        if alpha > 0 {
            canvas.overlay(Color::BLACK, alpha);
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn request_transition(&mut self, target: K) {
        if !self.fade.begin_fade_out() {
            debug!(
                target: "scene",
                "Ignoring request for {} while {:?}",
                target,
                self.fade.phase()
            );
            return;
        }

        info!(target: "scene", "Transition {} -> {}", self.active_key, target);
        self.pending_target = Some(target);
        self.input_enabled = false;
    }

    fn advance_fade(&mut self, dt: f32) -> Result<(), SceneError> {
        match self.fade.advance(dt) {
            FadeEvent::ReachedBlack => self.swap_scene(),
            FadeEvent::Cleared => {
                debug!(target: "scene", "Transition into {} complete", self.active_key);
                self.input_enabled = true;
                Ok(())
            }
            FadeEvent::None => Ok(()),
        }
    }

    fn swap_scene(&mut self) -> Result<(), SceneError> {
        let target = match self.pending_target.take() {
            Some(target) => target,
            None => {
                error!(target: "scene", "Reached full black without a target, using fallback");
                self.fallback
            }
        };

        let (scene, key) = construct_or_fallback(&self.factory, target, self.fallback)?;

        // Old scene is dropped here, before the new one sees any call.
        self.active_scene = scene;
        self.active_key = key;
        self.swaps += 1;

        Ok(())
    }
}

//=== Free Helpers ========================================================

/// Builds `target`, or `fallback` (logged) if that fails.
fn construct_or_fallback<K: SceneKey, F: SceneFactory<K>>(
    factory: &F,
    target: K,
    fallback: K,
) -> Result<(Box<dyn Scene<K>>, K), SceneError> {
    match factory.create(target) {
        Ok(scene) => Ok((scene, target)),
        Err(err) => {
            error!(
                target: "scene",
                "Failed to load scene {}: {}. Falling back to {}",
                target,
                err,
                fallback
            );
            factory
                .create(fallback)
                .map(|scene| (scene, fallback))
                .map_err(|source| SceneError::FallbackFailed {
                    key: fallback.to_string(),
                    source: Box::new(source),
                })
        }
    }
}

/// First request of a tick wins; later ones are dropped.
fn keep_first<K: SceneKey>(
    slot: &mut Option<TransitionRequest<K>>,
    incoming: Option<TransitionRequest<K>>,
) {
    match (slot.as_ref(), incoming) {
        (None, Some(request)) => *slot = Some(request),
        (Some(kept), Some(extra)) => {
            debug!(target: "scene", "Ignoring extra request for {} (kept {})", extra.target, kept.target);
        }
        _ => {}
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
