//=========================================================================
// Frontend
//
// Entry point that ties the platform bridge, the input contexts and the
// widget tree together.
//
// Architecture:
// ```text
//     FrontendBuilder  ──build()──>  (Frontend, PlatformBridge)
//         │                              │            │
//         ├─ with_channel_capacity()     │            └─ fed by the host's
//         └─ with_max_events_per_tick()  │               Winit event loop
//                                        │
//                    tick() ─────────────┘
//                      ├─ EventCollector drains PlatformEvents
//                      ├─ ContextRegistry dispatches each InputEvent
//                      │    └─ wired bindings emit UiSignals
//                      └─ UiSignals routed into GuiRoot before the
//                         next InputEvent is dispatched
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{bounded, unbounded, Receiver, Sender};
use log::{debug, info, trace, warn};

//=== Internal Dependencies ===============================================

use crate::core::gui::renderer::{Renderer, ResourceProvider};
use crate::core::gui::root::GuiRoot;
use crate::core::input::binding::{MouseKeyBinding, TextBinding};
use crate::core::input::context::{InputContext, InputRole};
use crate::core::input::event::{InputEvent, MouseButton, TextInput};
use crate::core::input::registry::ContextRegistry;
use crate::platform::{
    EventCollector, FrameItem, PlatformBridge, PointerSource, TickControl,
    DEFAULT_MAX_EVENTS_PER_TICK,
};

//=== Constants ===========================================================

pub const DEFAULT_CHANNEL_CAPACITY: usize = 128;

//=== UiSignal ============================================================

/// Semantic GUI input produced by wired bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiSignal {
    MouseDown(MouseButton),
    MouseUp(MouseButton),
    Text(TextInput),
}

//=== FrontendBuilder =====================================================

/// Builder for a [`Frontend`] and the [`PlatformBridge`] feeding it.
///
/// # Default Values
///
/// - **Channel capacity**: 128 platform messages
/// - **Max events per tick**: 100
///
/// # Examples
///
/// ```
/// use aetheric_ui::prelude::*;
///
/// let (mut frontend, mut bridge) = FrontendBuilder::new()
///     .with_channel_capacity(256)
///     .build();
///
/// let mut menu = InputContext::new("menu");
/// frontend.wire_gui(&mut menu);
/// frontend.registry_mut().activate(ContextSlot::Primary, menu);
///
/// // Per frame, after forwarding window events to `bridge`:
/// bridge.flush();
/// let pointer = bridge.pointer_position();
/// assert_eq!(frontend.tick(&pointer), TickControl::Continue);
/// ```
#[derive(Debug, Clone)]
pub struct FrontendBuilder {
    channel_capacity: usize,
    max_events_per_tick: usize,
}

impl FrontendBuilder {
    pub fn new() -> Self {
        Self {
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            max_events_per_tick: DEFAULT_MAX_EVENTS_PER_TICK,
        }
    }

    /// Sets the capacity of the platform → frontend channel.
    ///
    /// Batches arriving while the channel is full are dropped with a
    /// warning rather than blocking the event loop.
    ///
    /// Default: 128
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    /// Sets how many platform messages one [`Frontend::tick`] handles.
    ///
    /// Default: 100
    ///
    /// # Panics
    ///
    /// Panics if `max == 0`.
    pub fn with_max_events_per_tick(mut self, max: usize) -> Self {
        assert!(max > 0, "Events per tick must be positive");
        self.max_events_per_tick = max;
        self
    }

    pub fn build(self) -> (Frontend, PlatformBridge) {
        info!(
            "Building frontend (channel: {}, events per tick: {})",
            self.channel_capacity, self.max_events_per_tick
        );

        let (platform_tx, platform_rx) = bounded(self.channel_capacity);
        let (ui_sender, ui_receiver) = unbounded();

        let frontend = Frontend {
            registry: ContextRegistry::new(),
            root: GuiRoot::new(),
            collector: EventCollector::new(platform_rx, self.max_events_per_tick),
            ui_sender,
            ui_receiver,
        };
        (frontend, PlatformBridge::new(platform_tx))
    }
}

impl Default for FrontendBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Frontend ============================================================

/// Owns the active input contexts and the widget tree.
///
/// Everything runs on the thread that calls [`tick`](Self::tick) or
/// [`dispatch`](Self::dispatch). Each raw event is fully handled,
/// including the widget callbacks it triggers, before the next one.
pub struct Frontend {
    registry: ContextRegistry,
    root: GuiRoot,
    collector: EventCollector,
    ui_sender: Sender<UiSignal>,
    ui_receiver: Receiver<UiSignal>,
}

impl Frontend {
    pub fn builder() -> FrontendBuilder {
        FrontendBuilder::new()
    }

    //--- Accessors --------------------------------------------------------

    pub fn registry(&self) -> &ContextRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut ContextRegistry {
        &mut self.registry
    }

    pub fn root(&self) -> &GuiRoot {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut GuiRoot {
        &mut self.root
    }

    /// Sender for injecting GUI input directly, bypassing bindings.
    pub fn ui_sender(&self) -> Sender<UiSignal> {
        self.ui_sender.clone()
    }

    //--- Wiring -----------------------------------------------------------

    /// Connects a context's mouse and text bindings to the GUI.
    ///
    /// Missing roles get a default binding (every mouse button, plain
    /// text). A role bound to some other binding type is left alone.
    pub fn wire_gui(&self, context: &mut InputContext) {
        if context.binding(InputRole::MouseButtons).is_none() {
            context.bind(InputRole::MouseButtons, Box::new(MouseKeyBinding::all_buttons()));
        }
        if context.binding(InputRole::Text).is_none() {
            context.bind(InputRole::Text, Box::new(TextBinding::new()));
        }

        if let Some(mouse) = context.get_mut::<MouseKeyBinding>(InputRole::MouseButtons) {
            let down = self.ui_sender.clone();
            mouse.down.connect(move |button| {
                if let Err(e) = down.send(UiSignal::MouseDown(*button)) {
                    warn!(target: "input", "GUI signal dropped: {}", e);
                }
            });
            let up = self.ui_sender.clone();
            mouse.up.connect(move |button| {
                if let Err(e) = up.send(UiSignal::MouseUp(*button)) {
                    warn!(target: "input", "GUI signal dropped: {}", e);
                }
            });
        } else {
            warn!(target: "input", "Context '{}' has a non-mouse MouseButtons binding", context.name());
        }

        if let Some(text) = context.get_mut::<TextBinding>(InputRole::Text) {
            let entered = self.ui_sender.clone();
            text.entered.connect(move |input| {
                if let Err(e) = entered.send(UiSignal::Text(*input)) {
                    warn!(target: "input", "GUI signal dropped: {}", e);
                }
            });
        } else {
            warn!(target: "input", "Context '{}' has a non-text Text binding", context.name());
        }

        debug!(target: "input", "Wired context '{}' to the GUI", context.name());
    }

    //--- Dispatch ---------------------------------------------------------

    /// Runs one raw event through every active context, then delivers the
    /// GUI input it produced.
    pub fn dispatch(&mut self, event: &InputEvent, pointer: &dyn PointerSource) {
        trace!(target: "input", "Dispatching {:?}", event);
        self.registry.dispatch(event);
        self.route_ui_signals(pointer);
    }

    /// Processes everything the platform queued since the last tick.
    pub fn tick(&mut self, pointer: &dyn PointerSource) -> TickControl {
        if self.collector.collect() == TickControl::Exit {
            info!("Frontend shutting down");
            return TickControl::Exit;
        }

        for item in self.collector.take_items() {
            match item {
                FrameItem::Inputs(batch) => {
                    for event in &batch {
                        self.dispatch(event, pointer);
                    }
                }
                FrameItem::FocusLost => {
                    debug!(target: "input", "Focus lost, normalizing active bindings");
                    self.registry.normalize_all();
                    self.root.cancel_press();
                }
            }
        }

        // Signals injected through `ui_sender` outside of dispatch.
        self.route_ui_signals(pointer);
        TickControl::Continue
    }

    pub fn draw(&mut self, renderer: &mut dyn Renderer, resources: &mut dyn ResourceProvider) {
        self.root.draw(renderer, resources);
    }

    fn route_ui_signals(&mut self, pointer: &dyn PointerSource) {
        while let Ok(signal) = self.ui_receiver.try_recv() {
            match signal {
                UiSignal::MouseDown(button) => {
                    self.root.mouse_down(button, pointer.pointer_position())
                }
                UiSignal::MouseUp(button) => self.root.mouse_up(button, pointer.pointer_position()),
                UiSignal::Text(input) => self.root.text_input(input),
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
