//=========================================================================
// Text Binding
//=========================================================================
//
// Translates raw keyboard transitions into printable text input.
//
// Mapping:
//   KeyA..KeyZ   → letter, uppercase when Shift XOR Caps Lock
//   Digit0..9    → digit
//   Space        → ' '
//   Backspace    → TextInput::Backspace
//   anything else → ignored
//
//=========================================================================

//=== External Dependencies ===============================================

use std::any::Any;

//=== Internal Dependencies ===============================================

use super::InputBinding;
use crate::core::input::event::{
    DeviceClass, InputEvent, InputSource, KeyCode, Modifiers, TextInput,
};
use crate::core::signal::Signal;

//=== TextBinding =========================================================

/// Stateless keyboard-to-text adapter.
///
/// `entered` fires on key down, `lifted` on key up, both carrying the
/// translated input. Keys without a printable meaning produce nothing.
#[derive(Default)]
pub struct TextBinding {
    pub entered: Signal<TextInput>,
    pub lifted: Signal<TextInput>,
}

impl TextBinding {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves a key and modifier state to text input.
    pub fn translate(key: KeyCode, modifiers: Modifiers) -> Option<TextInput> {
        if let Some(letter) = key.letter() {
            let upper = modifiers.shift != modifiers.caps_lock;
            let c = if upper { letter.to_ascii_uppercase() } else { letter };
            return Some(TextInput::Char(c));
        }
        if let Some(digit) = key.digit() {
            return Some(TextInput::Char(digit));
        }
        match key {
            KeyCode::Space => Some(TextInput::Char(' ')),
            KeyCode::Backspace => Some(TextInput::Backspace),
            _ => None,
        }
    }
}

impl InputBinding for TextBinding {
    fn on_event(&mut self, event: &InputEvent) {
        let InputEvent::Button { source: InputSource::Key(key), is_down, modifiers } = *event else {
            return;
        };
        let Some(input) = Self::translate(key, modifiers) else {
            return;
        };

        if is_down {
            self.entered.emit(&input);
        } else {
            self.lifted.emit(&input);
        }
    }

    fn clone_fresh(&self) -> Box<dyn InputBinding> {
        Box::new(Self::new())
    }

    fn accepts(&self, class: DeviceClass) -> bool {
        class == DeviceClass::Keyboard
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
