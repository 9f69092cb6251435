//=========================================================================
// Platform
//
// The main-thread half of the game: a winit window, a pixels surface and
// the two channels to the logic thread.
//
// ```text
//   winit events ─► InputProcessor ─► InputBuffer ─┐
//                                                  │ RedrawRequested
//                                                  ▼
//                                    PlatformEvent::Inputs ─► logic
//   pixels.render() ◄─ newest FrameMessage::Frame ◄────────── logic
// ```
//
// Notes:
// - A redraw is the frame boundary. Input buffered since the previous
//   redraw goes out as one ordered batch.
// - Cursor positions are converted to canvas pixels here, so scenes
//   hit-test in the coordinates they draw in.
// - Frames the display could not keep up with are skipped; only the
//   newest one is presented.
// - winit needs the main thread on macOS, so `Engine::run` calls this
//   from the thread that invoked it.
//
//=========================================================================

//=== Submodules ==========================================================

mod input_buffer;
mod input_processor;

//=== External Crates =====================================================

use std::sync::Arc;

use crossbeam_channel::{Receiver, Sender, TryRecvError};
use log::*;
use pixels::{Pixels, SurfaceTexture};
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowAttributes, WindowId},
};

//=== Internal Imports ====================================================

use crate::core::config::WindowConfig;
use crate::core::platform_bridge::{FrameMessage, PlatformError, PlatformEvent};
use input_buffer::InputBuffer;
use input_processor::InputProcessor;

//=== Platform ============================================================

/// Window, input capture and frame presentation.
///
/// Runs on the main thread and exchanges messages with the logic thread:
/// input batches go out, finished frames come back.
///
/// # Lifecycle
///
/// 1. **Construction**: `Platform::new(...)` - no window yet
/// 2. **Execution**: `platform.run()` - blocks in the event loop
/// 3. **Shutdown**: window closed (sends `WindowClosed`) or the logic
///    thread sends `FrameMessage::Shutdown`; either way the loop exits
pub(crate) struct Platform {
    /// Window settings; the canvas matches `width` x `height`.
    config: WindowConfig,

    /// Created on the first `resumed()`.
    window: Option<Arc<Window>>,

    /// Presentation surface (created together with the window).
    pixels: Option<Pixels<'static>>,

    /// Input since the last redraw.
    buffer: InputBuffer,

    /// Input batches and window close, to the logic thread.
    event_sender: Sender<PlatformEvent>,

    /// Channel receiving finished frames from the logic thread.
    frame_receiver: Receiver<FrameMessage>,

    /// Cursor and modifier state for winit conversion.
    input_processor: InputProcessor,

    /// Most recent frame not yet presented.
    pending_frame: Option<Vec<u8>>,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new(
        config: WindowConfig,
        event_sender: Sender<PlatformEvent>,
        frame_receiver: Receiver<FrameMessage>,
    ) -> Self {
        debug!(target: "platform", "Platform created ({}x{})", config.width, config.height);
        Self {
            config,
            window: None,
            pixels: None,
            buffer: InputBuffer::new(),
            event_sender,
            frame_receiver,
            input_processor: InputProcessor::new(),
            pending_frame: None,
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the event loop until the window closes or the logic thread
    /// asks for shutdown.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop cannot be created or
    /// fails while running.
    ///
    /// # Panics
    ///
    /// Panics if called off the main thread (macOS/iOS Winit requirement).
    pub(crate) fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Entering event loop");

        let event_loop =
            EventLoop::new().map_err(|e| PlatformError::EventLoopCreation(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        event_loop
            .run_app(&mut self)
            .map_err(|e| PlatformError::EventLoopExecution(e.to_string()))
    }

    //--- Internal Helpers -------------------------------------------------

    /// Creates the window and its pixels surface.
    fn create_surface(
        &self,
        event_loop: &ActiveEventLoop,
    ) -> Result<(Arc<Window>, Pixels<'static>), PlatformError> {
        let attrs = WindowAttributes::default()
            .with_title(self.config.title.clone())
            .with_inner_size(PhysicalSize::new(self.config.width, self.config.height));

        let window = event_loop
            .create_window(attrs)
            .map(Arc::new)
            .map_err(|e| PlatformError::WindowCreation(e.to_string()))?;

        let size = window.inner_size();
        let surface = SurfaceTexture::new(size.width, size.height, Arc::clone(&window));
        let pixels = Pixels::new(self.config.width, self.config.height, surface)
            .map_err(|e| PlatformError::Surface(e.to_string()))?;

        info!(
            target: "platform",
            "Window created: {}x{} @ {}x DPI (canvas {}x{})",
            size.width,
            size.height,
            window.scale_factor(),
            self.config.width,
            self.config.height
        );

        Ok((window, pixels))
    }

    /// Sends the input gathered since the last redraw. A closed channel
    /// only drops the batch; the window must stay closable.
    fn flush_input_buffer(&mut self) {
        let Some((discrete, continuous)) = self.buffer.drain() else {
            return;
        };

        let count = discrete.len() + continuous.len();
        trace!(target: "platform::input", "Sending {} input events", count);

        if self.event_sender.send(PlatformEvent::Inputs { discrete, continuous }).is_err() {
            warn!(
                target: "platform::input",
                "Logic thread gone, {} input events dropped",
                count
            );
        }
    }

    /// Pulls finished frames (keeping the newest). Returns `false` once
    /// the logic thread has shut down.
    fn poll_frames(&mut self) -> bool {
        loop {
            match self.frame_receiver.try_recv() {
                Ok(FrameMessage::Frame(frame)) => self.pending_frame = Some(frame),
                Ok(FrameMessage::Shutdown) => {
                    info!(target: "platform", "Logic thread requested shutdown");
                    return false;
                }
                Err(TryRecvError::Empty) => return true,
                Err(TryRecvError::Disconnected) => {
                    warn!(target: "platform", "Frame channel disconnected");
                    return false;
                }
            }
        }
    }

    /// Copies the pending frame into the surface and renders it.
    fn present(&mut self) -> Result<(), PlatformError> {
        let (Some(pixels), Some(frame)) = (self.pixels.as_mut(), self.pending_frame.take()) else {
            return Ok(());
        };

        let target = pixels.frame_mut();
        if target.len() != frame.len() {
            warn!(
                target: "platform",
                "Dropping frame of {} bytes (surface expects {})",
                frame.len(),
                target.len()
            );
            return Ok(());
        }

        target.copy_from_slice(&frame);
        pixels.render().map_err(|e| PlatformError::Surface(e.to_string()))
    }

    /// Maps a window position (physical pixels) into canvas space.
    fn to_canvas(&self, x: f64, y: f64) -> (f32, f32) {
        let position = (x as f32, y as f32);
        match &self.pixels {
            Some(pixels) => {
                let (cx, cy) = pixels
                    .window_pos_to_pixel(position)
                    .unwrap_or_else(|outside| pixels.clamp_pixel_pos(outside));
                (cx as f32, cy as f32)
            }
            None => position,
        }
    }

    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        let _ = self.event_sender.send(PlatformEvent::WindowClosed);
        event_loop.exit();
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Creates the window on first activation.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (resume)");
            return;
        }

        match self.create_surface(event_loop) {
            Ok((window, pixels)) => {
                window.request_redraw();
                self.window = Some(window);
                self.pixels = Some(pixels);
            }
            Err(e) => {
                error!(target: "platform", "{}", e);
                self.shutdown(event_loop);
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match &event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Close requested by the player");
                self.shutdown(event_loop);
            }

            WindowEvent::Resized(size) => {
                if let Some(pixels) = self.pixels.as_mut() {
                    if let Err(e) = pixels.resize_surface(size.width.max(1), size.height.max(1)) {
                        error!(target: "platform", "Surface resize failed: {}", e);
                        self.shutdown(event_loop);
                    }
                }
            }

            WindowEvent::ModifiersChanged(state) => {
                trace!(target: "platform::input", "Modifiers changed: {:?}", state);
                self.input_processor.set_modifiers(state.state());
            }

            WindowEvent::CursorMoved { position, .. } => {
                let (x, y) = self.to_canvas(position.x, position.y);
                let event = self.input_processor.cursor_moved(x, y);
                self.buffer.push_continuous(event);
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                for event in self.input_processor.keyboard(key_event) {
                    self.buffer.push_discrete(event);
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let event = self.input_processor.mouse_button(*button, *state);
                self.buffer.push_discrete(event);
            }

            WindowEvent::RedrawRequested => {
                // Frame boundary: flush input, show the newest frame
                self.flush_input_buffer();

                if let Err(e) = self.present() {
                    error!(target: "platform", "{}", e);
                    self.shutdown(event_loop);
                    return;
                }

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }

    /// Checks for frames and shutdown between event batches.
    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if !self.poll_frames() {
            event_loop.exit();
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
