//=========================================================================
// Mouse Key Binding
//=========================================================================
//
// Stateless passthrough for mouse button transitions.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::any::Any;
use std::collections::HashSet;

//=== Internal Dependencies ===============================================

use super::InputBinding;
use crate::core::input::event::{DeviceClass, InputEvent, InputSource, MouseButton};
use crate::core::signal::Signal;

//=== MouseKeyBinding =====================================================

/// Forwards down/up transitions of the configured mouse buttons.
pub struct MouseKeyBinding {
    buttons: HashSet<MouseButton>,

    pub down: Signal<MouseButton>,
    pub up: Signal<MouseButton>,
}

impl MouseKeyBinding {
    /// Creates a binding forwarding only `buttons`.
    pub fn new(buttons: impl IntoIterator<Item = MouseButton>) -> Self {
        Self {
            buttons: buttons.into_iter().collect(),
            down: Signal::new(),
            up: Signal::new(),
        }
    }

    /// Creates a binding forwarding every mouse button.
    pub fn all_buttons() -> Self {
        Self::new(MouseButton::ALL)
    }

    pub fn forwards(&self, button: MouseButton) -> bool {
        self.buttons.contains(&button)
    }
}

impl InputBinding for MouseKeyBinding {
    fn on_event(&mut self, event: &InputEvent) {
        if let InputEvent::Button { source: InputSource::Mouse(button), is_down, .. } = *event {
            if !self.buttons.contains(&button) {
                return;
            }
            if is_down {
                self.down.emit(&button);
            } else {
                self.up.emit(&button);
            }
        }
    }

    fn clone_fresh(&self) -> Box<dyn InputBinding> {
        Box::new(Self::new(self.buttons.iter().copied()))
    }

    fn accepts(&self, class: DeviceClass) -> bool {
        class == DeviceClass::Mouse
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
