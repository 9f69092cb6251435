//=========================================================================
// Engine
//
// Main entry point: wires configuration, the logic thread and the
// platform together.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run(make_factory)──>  [Runtime]
//         │                          │
//         ├─ with_config()           ├─ spawns the logic thread
//         ├─ with_fps()              │    (factory, controller, canvas)
//         ├─ with_fade_rate()        ├─ runs the platform (main thread)
//         └─ with_channel_capacity() └─ blocks until both have stopped
// ```
//
// The scene factory and the shared game state it holds are created
// inside the logic thread by `make_factory`, so they never cross a
// thread boundary.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::marker::PhantomData;
use std::str::FromStr;
use std::thread;

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use log::{error, info, trace};
use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::canvas::Canvas;
use crate::core::clock::FrameClock;
use crate::core::config::{ConfigError, GameConfig};
use crate::core::error::SceneError;
use crate::core::platform_bridge::{EventCollector, FrameMessage, PlatformError, PlatformEvent};
use crate::core::scene::{SceneFactory, SceneKey, TransitionController};
use crate::core::TickControl;
use crate::platform::Platform;

//=== EngineError =========================================================

/// Reasons the engine stopped abnormally.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Scene(#[from] SceneError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error("failed to spawn logic thread: {0}")]
    LogicThreadSpawn(#[source] std::io::Error),

    #[error("logic thread panicked")]
    LogicThreadPanicked,
}

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **Config**: [`GameConfig::default()`] (60 FPS, fade 350/s, 1280x720)
/// - **Channel capacity**: 128 input batches
///
/// # Examples
///
/// ```no_run
/// use egresaditos::game::{GameScene, GameScenes};
/// use egresaditos::{EngineBuilder, GameConfig};
///
/// let config = GameConfig::load().expect("valid configuration");
///
/// EngineBuilder::<GameScene>::new()
///     .with_config(config)
///     .build()
///     .run(GameScenes::new)
///     .expect("engine stopped cleanly");
/// ```
pub struct EngineBuilder<K: SceneKey> {
    config: GameConfig,
    channel_capacity: usize,
    _phantom: PhantomData<K>,
}

impl<K: SceneKey> EngineBuilder<K> {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            config: GameConfig::default(),
            channel_capacity: 128,
            _phantom: PhantomData,
        }
    }

    /// Replaces the whole configuration.
    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the target frames per second of the logic loop.
    ///
    /// # Panics
    ///
    /// Panics if `fps <= 0.0`.
    pub fn with_fps(mut self, fps: f64) -> Self {
        assert!(fps > 0.0, "FPS must be positive, got {}", fps);
        self.config.timing.fps = fps;
        self
    }

    /// Sets the fade speed in alpha units per second.
    ///
    /// # Panics
    ///
    /// Panics if `rate <= 0.0`.
    pub fn with_fade_rate(mut self, rate: f32) -> Self {
        assert!(rate > 0.0, "Fade rate must be positive, got {}", rate);
        self.config.timing.fade_rate = rate;
        self
    }

    /// Sets the channel capacity for platform → logic communication.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    /// Builds the engine instance.
    pub fn build(self) -> Engine<K> {
        info!(
            "Building engine (FPS: {}, fade: {}/s, channel: {})",
            self.config.timing.fps, self.config.timing.fade_rate, self.channel_capacity
        );

        Engine {
            config: self.config,
            channel_capacity: self.channel_capacity,
            _phantom: PhantomData,
        }
    }
}

impl<K: SceneKey> Default for EngineBuilder<K> {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Game runtime.
///
/// # Architecture
///
/// ```text
/// Engine (Main Thread)
///   ├─► Logic Thread @ FPS
///   │     └─► EventCollector → TransitionController → Canvas
///   │
///   └─► Platform (Event Loop)
///         └─► Window, Input Capture, pixels presentation
///
/// Communication: crossbeam channels (PlatformEvent ⇄ FrameMessage)
/// ```
pub struct Engine<K: SceneKey> {
    config: GameConfig,
    channel_capacity: usize,
    _phantom: PhantomData<K>,
}

impl<K> Engine<K>
where
    K: SceneKey + FromStr + Send,
{
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Starts the runtime and blocks until the game exits.
    ///
    /// `make_factory` runs on the logic thread and builds the scene
    /// factory (and with it the shared game state).
    ///
    /// # Lifecycle
    ///
    /// 1. Resolves the initial and fallback scene keys from the config
    /// 2. Spawns the logic thread, which builds the controller
    /// 3. Runs the platform event loop (blocks here)
    /// 4. Window close → `Quit` → logic loop ends; a fatal scene error →
    ///    `Shutdown` → platform closes the window
    ///
    /// # Errors
    ///
    /// - [`EngineError::Config`] for unknown scene names
    /// - [`EngineError::Scene`] when the fallback scene cannot be built
    /// - [`EngineError::Platform`] for window or surface failures
    pub fn run<M, F>(self, make_factory: M) -> Result<(), EngineError>
    where
        M: FnOnce() -> F + Send + 'static,
        F: SceneFactory<K>,
    {
        let initial: K = self.config.initial_scene()?;
        let fallback: K = self.config.fallback_scene()?;

        info!("Starting engine runtime (initial: {}, fallback: {})", initial, fallback);

        //--- 1. Create communication channels ----------------------------
        let (event_tx, event_rx): (Sender<PlatformEvent>, Receiver<PlatformEvent>) =
            bounded(self.channel_capacity);
        let (frame_tx, frame_rx) = bounded(2);

        //--- 2. Spawn the logic thread ------------------------------------
        let config = self.config.clone();
        let logic_handle = thread::Builder::new()
            .name("logic".into())
            .spawn(move || {
                let result = run_logic(make_factory, initial, fallback, &config, event_rx, &frame_tx);
                if let Err(e) = &result {
                    error!(target: "scene", "Logic loop stopped: {}", e);
                }
                let _ = frame_tx.send(FrameMessage::Shutdown);
                result
            })
            .map_err(EngineError::LogicThreadSpawn)?;
        info!("Logic thread spawned");

        //--- 3. Launch the platform subsystem ------------------------------
        let platform = Platform::new(self.config.window.clone(), event_tx, frame_rx);
        let platform_result = platform.run();
        if let Err(e) = &platform_result {
            error!("Platform error: {}", e);
        }
        info!("Platform event loop exited");

        //--- 4. Cleanup: wait for the logic thread ------------------------
        let logic_result = match logic_handle.join() {
            Ok(result) => result,
            Err(e) => {
                error!("Logic thread panicked: {:?}", e);
                return Err(EngineError::LogicThreadPanicked);
            }
        };

        logic_result?;
        platform_result?;

        info!("Engine shutdown complete");
        Ok(())
    }
}

//=== Logic Loop ==========================================================

/// Fixed-rate loop: collect input, tick the controller, publish the frame.
fn run_logic<K, M, F>(
    make_factory: M,
    initial: K,
    fallback: K,
    config: &GameConfig,
    events: Receiver<PlatformEvent>,
    frames: &Sender<FrameMessage>,
) -> Result<(), SceneError>
where
    K: SceneKey,
    M: FnOnce() -> F,
    F: SceneFactory<K>,
{
    let mut controller =
        TransitionController::new(make_factory(), initial, fallback, config.timing.fade_rate)?;
    let mut canvas = Canvas::new(config.window.width, config.window.height);
    let mut clock = FrameClock::new(config.timing.fps, config.timing.max_dt);
    let mut collector = EventCollector::new(events);

    loop {
        let dt = clock.begin_frame();
        let input = collector.collect_frame();

        if controller.tick(input, dt, &mut canvas)? == TickControl::Exit {
            info!("Logic thread exiting");
            return Ok(());
        }

        match frames.try_send(FrameMessage::Frame(canvas.frame().to_vec())) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => trace!("Platform behind, frame skipped"),
            Err(TrySendError::Disconnected(_)) => {
                info!("Platform gone, logic thread exiting");
                return Ok(());
            }
        }

        clock.end_frame();
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
