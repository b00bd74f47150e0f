//=========================================================================
// Input Bindings
//=========================================================================
//
// Stateful adapters that turn a stream of raw `InputEvent`s into one
// semantic signal each.
//
// Architecture:
//   InputEvent → on_event() → (match by InputSource) → internal state
//                                                     ↓
//                                          Signal::emit(semantic value)
//
// Variants:
// - `AxisBinding`: continuous axis with tri-state discretization
// - `SinglePressBinding`: logical press/release over many sources
// - `MouseKeyBinding`: mouse button down/up passthrough
// - `TextBinding`: key + modifiers → printable character
//
//=========================================================================

//=== Module Declarations =================================================

mod axis;
mod mouse_key;
mod press;
mod text;

//=== Public API ==========================================================

pub use axis::{AxisBinding, DEFAULT_DEADZONE};
pub use mouse_key::MouseKeyBinding;
pub use press::SinglePressBinding;
pub use text::TextBinding;

//=== External Dependencies ===============================================

use std::any::Any;

//=== Internal Dependencies ===============================================

use super::event::{DeviceClass, InputEvent};

//=== InputBinding Trait ==================================================

/// Capability shared by every binding: consume raw events, and produce a
/// fresh copy of itself.
///
/// # Cloning
///
/// [`clone_fresh`](InputBinding::clone_fresh) returns a binding with the
/// same matching rules but no accumulated state and no subscribers. This
/// is what lets a whole context be duplicated for a new consumer.
pub trait InputBinding: Any {
    /// Processes one raw event. Events from foreign controls are ignored.
    fn on_event(&mut self, event: &InputEvent);

    /// Returns a copy with identical matching rules, zeroed state and
    /// empty signals.
    fn clone_fresh(&self) -> Box<dyn InputBinding>;

    /// Forgets any held state without emitting release notifications.
    ///
    /// Called when the window loses input focus so that releases the
    /// platform never delivers cannot leave a control stuck.
    fn normalize(&mut self) {}

    /// Returns `true` if this binding reacts to events of `class`.
    fn accepts(&self, class: DeviceClass) -> bool;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}
