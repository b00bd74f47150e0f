//=========================================================================
// Platform Subsystem
//
// Bridges Winit window events to the frontend through a crossbeam channel.
//
// Architecture:
// ```text
//  Host event loop (Winit)               Frontend
//  ┌──────────────────────────┐    ┌──────────────────────┐
//  │  WindowEvent             │    │  EventCollector      │
//  │   ↓                      │    │   ↓                  │
//  │  PlatformBridge          │    │  ContextRegistry     │
//  │   ├─ InputProcessor      │    │   ↓                  │
//  │   │   ├─ modifiers       │    │  Bindings → UiSignal │
//  │   │   └─ cursor position │    │   ↓                  │
//  │   └─ buffer: Vec<>       │    │  GuiRoot             │
//  │   ↓                      │    └──────────────────────┘
//  │  RedrawRequested (flush) │               ↑
//  │  Channel ────────────────┼───────────────┘
//  └──────────────────────────┘       PlatformEvent
//
//  Frame Boundary: RedrawRequested
//    → All buffered input sent as one batch
//    → Empty buffers are not sent
// ```
//
// The host owns the window and the event loop; it forwards each
// `WindowEvent` to the bridge. Focus loss and close requests flush any
// pending input first so the frontend sees them in order.
//
// A full channel or a disconnected receiver drops the batch with a
// warning. The host keeps running so the window can still be closed.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod event_collector;
pub mod input_processor;

//=== External Crates =====================================================

use crossbeam_channel::{Sender, TrySendError};
use log::*;
use winit::event::WindowEvent;

//=== Internal Imports ====================================================

use crate::core::gui::geometry::Point;
use crate::core::input::event::InputEvent;

pub use event_collector::{EventCollector, FrameItem, TickControl, DEFAULT_MAX_EVENTS_PER_TICK};
pub use input_processor::InputProcessor;

//=== PlatformEvent =======================================================

/// Messages sent from the platform bridge to the frontend.
#[derive(Debug, Clone)]
pub enum PlatformEvent {
    /// Input converted during one frame, in arrival order. Never empty.
    Inputs(Vec<InputEvent>),

    /// The window lost keyboard focus. Held buttons will never see their
    /// release, so bindings should be normalized.
    FocusLost,

    /// Window close requested by the user or the OS.
    WindowClosed,
}

//=== PointerSource =======================================================

/// On-demand query for the current pointer position.
pub trait PointerSource {
    fn pointer_position(&self) -> Point;
}

/// A fixed pointer, handy for tests and synthetic input.
impl PointerSource for Point {
    fn pointer_position(&self) -> Point {
        *self
    }
}

//=== PlatformBridge ======================================================

/// Converts and buffers window events until the frame boundary.
pub struct PlatformBridge {
    processor: InputProcessor,
    buffer: Vec<InputEvent>,
    sender: Sender<PlatformEvent>,
}

impl PlatformBridge {
    pub fn new(sender: Sender<PlatformEvent>) -> Self {
        info!(target: "platform", "Platform bridge initialized");
        Self {
            processor: InputProcessor::new(),
            buffer: Vec::with_capacity(16),
            sender,
        }
    }

    //--- Event Intake -----------------------------------------------------

    /// Feeds one Winit window event through the bridge.
    pub fn handle_window_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                self.flush();
                self.send(PlatformEvent::WindowClosed);
            }

            WindowEvent::Focused(false) => {
                debug!(target: "platform", "Window lost focus");
                self.flush();
                self.send(PlatformEvent::FocusLost);
            }

            WindowEvent::ModifiersChanged(state) => {
                trace!(target: "platform::input", "Modifiers changed: {:?}", state);
                self.processor.update_modifiers(state.state());
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.processor.process_cursor_moved(position.x as f32, position.y as f32);
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                if let Some(event) = self.processor.process_key_event(key_event) {
                    self.buffer.push(event);
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let event = self.processor.process_mouse_button(*button, *state);
                self.buffer.push(event);
            }

            WindowEvent::RedrawRequested => self.flush(),

            _ => {}
        }
    }

    /// Buffers an event from a device Winit does not cover (joysticks).
    pub fn push(&mut self, event: InputEvent) {
        self.buffer.push(event);
    }

    pub fn pending(&self) -> usize {
        self.buffer.len()
    }

    pub fn processor(&self) -> &InputProcessor {
        &self.processor
    }

    //--- Frame Boundary ---------------------------------------------------

    /// Sends everything buffered as one `Inputs` batch.
    pub fn flush(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let batch = std::mem::take(&mut self.buffer);
        trace!(target: "platform::input", "Flushing {} events", batch.len());
        self.send(PlatformEvent::Inputs(batch));
    }

    fn send(&self, event: PlatformEvent) {
        match self.sender.try_send(event) {
            Ok(()) => {}
            Err(TrySendError::Full(dropped)) => {
                warn!(target: "platform::input", "Channel full, dropping {:?}", dropped);
            }
            Err(TrySendError::Disconnected(dropped)) => {
                warn!(target: "platform::input", "Channel disconnected, dropping {:?}", dropped);
            }
        }
    }
}

impl PointerSource for PlatformBridge {
    fn pointer_position(&self) -> Point {
        self.processor.pointer_position()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
