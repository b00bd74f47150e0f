//=========================================================================
// Input
//
// Raw device events, the bindings that interpret them, and the contexts
// that decide which bindings are listening.
//
// Responsibilities:
// - Represent raw occurrences portably (`event`)
// - Turn raw streams into semantic signals (`binding`)
// - Group bindings by role and swap them as a unit (`context`, `registry`)
//
// Notes:
// Everything here runs on the main loop thread. A raw event is fully
// dispatched (every callback run) before the next one is looked at.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod binding;
pub mod context;
pub mod event;
pub mod registry;

//=== Public API ==========================================================

pub use binding::{
    AxisBinding, InputBinding, MouseKeyBinding, SinglePressBinding, TextBinding,
    DEFAULT_DEADZONE,
};
pub use context::{ContextSlot, InputContext, InputRole};
pub use event::{
    DeviceClass, InputEvent, InputSource, KeyCode, Modifiers, MouseButton, TextInput,
};
pub use registry::ContextRegistry;
