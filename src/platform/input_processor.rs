//=========================================================================
// Input Processor
//=========================================================================
//
// Converts Winit window events into `InputEvent`s.
//
// Architecture:
//   WindowEvent → InputProcessor → InputEvent → PlatformBridge buffer
//
// State carried between events:
// - Modifier state from `ModifiersChanged`, stamped onto every button event
// - Caps Lock, toggled by the CapsLock key itself (Winit does not report it)
// - Last cursor position, answered on demand through `PointerSource`
//
// OS key-repeat events and unmapped keys produce nothing.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::trace;
use winit::{
    event::{ElementState, KeyEvent, MouseButton as WinitMouseButton},
    keyboard::{KeyCode as WinitKeyCode, ModifiersState, PhysicalKey},
};

//=== Internal Dependencies ===============================================

use super::PointerSource;
use crate::core::gui::geometry::Point;
use crate::core::input::event::{InputEvent, InputSource, KeyCode, Modifiers, MouseButton};

//=== InputProcessor ======================================================

/// Stateful Winit → engine converter.
#[derive(Debug, Default)]
pub struct InputProcessor {
    modifiers: Modifiers,
    cursor: Point,
}

impl InputProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    //--- Modifier State ---------------------------------------------------

    /// Replaces Shift/Ctrl/Alt. Caps Lock is kept.
    pub fn update_modifiers(&mut self, state: ModifiersState) {
        self.modifiers = Modifiers {
            caps_lock: self.modifiers.caps_lock,
            ..Modifiers::from(state)
        };
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    //--- Event Processing -------------------------------------------------

    pub fn process_key_event(&mut self, key_event: &KeyEvent) -> Option<InputEvent> {
        self.process_key(key_event.physical_key, key_event.state, key_event.repeat)
    }

    /// Converts one key transition.
    ///
    /// Returns `None` for OS repeats and keys without an engine mapping.
    /// Pressing CapsLock flips the Caps Lock modifier before the event is
    /// stamped, so the CapsLock event itself already carries the new state.
    pub fn process_key(
        &mut self,
        physical_key: PhysicalKey,
        state: ElementState,
        repeat: bool,
    ) -> Option<InputEvent> {
        if repeat {
            trace!(target: "platform::input", "Key repeat ignored: {:?}", physical_key);
            return None;
        }

        let key = match physical_key {
            PhysicalKey::Code(code) => KeyCode::from(code),
            _ => return None,
        };
        if key == KeyCode::Unidentified {
            return None;
        }

        if key == KeyCode::CapsLock && state == ElementState::Pressed {
            self.modifiers.caps_lock = !self.modifiers.caps_lock;
        }

        Some(InputEvent::Button {
            source: InputSource::Key(key),
            is_down: state == ElementState::Pressed,
            modifiers: self.modifiers,
        })
    }

    pub fn process_mouse_button(&self, button: WinitMouseButton, state: ElementState) -> InputEvent {
        InputEvent::Button {
            source: InputSource::Mouse(MouseButton::from(button)),
            is_down: state == ElementState::Pressed,
            modifiers: self.modifiers,
        }
    }

    /// Records the cursor position. Movement is not an event of its own.
    pub fn process_cursor_moved(&mut self, x: f32, y: f32) {
        self.cursor = Point::new(x, y);
    }
}

impl PointerSource for InputProcessor {
    fn pointer_position(&self) -> Point {
        self.cursor
    }
}

//=========================================================================
// Winit Conversions
//=========================================================================

/// Winit normalizes platform keys (macOS Cmd → Ctrl, Option → Alt).
impl From<ModifiersState> for Modifiers {
    fn from(state: ModifiersState) -> Self {
        Self {
            shift: state.shift_key(),
            ctrl: state.control_key(),
            alt: state.alt_key(),
            caps_lock: false,
        }
    }
}

/// Maps A-Z, 0-9, arrows, and the editing keys. Everything else becomes
/// `KeyCode::Unidentified`.
impl From<WinitKeyCode> for KeyCode {
    fn from(code: WinitKeyCode) -> Self {
        use WinitKeyCode::*;
        match code {
            //--- Digits -------------------------------------------------------

            Digit0 => KeyCode::Digit0, Digit1 => KeyCode::Digit1,
            Digit2 => KeyCode::Digit2, Digit3 => KeyCode::Digit3,
            Digit4 => KeyCode::Digit4, Digit5 => KeyCode::Digit5,
            Digit6 => KeyCode::Digit6, Digit7 => KeyCode::Digit7,
            Digit8 => KeyCode::Digit8, Digit9 => KeyCode::Digit9,

            //--- Letters ------------------------------------------------------

            KeyA => KeyCode::KeyA, KeyB => KeyCode::KeyB, KeyC => KeyCode::KeyC,
            KeyD => KeyCode::KeyD, KeyE => KeyCode::KeyE, KeyF => KeyCode::KeyF,
            KeyG => KeyCode::KeyG, KeyH => KeyCode::KeyH, KeyI => KeyCode::KeyI,
            KeyJ => KeyCode::KeyJ, KeyK => KeyCode::KeyK, KeyL => KeyCode::KeyL,
            KeyM => KeyCode::KeyM, KeyN => KeyCode::KeyN, KeyO => KeyCode::KeyO,
            KeyP => KeyCode::KeyP, KeyQ => KeyCode::KeyQ, KeyR => KeyCode::KeyR,
            KeyS => KeyCode::KeyS, KeyT => KeyCode::KeyT, KeyU => KeyCode::KeyU,
            KeyV => KeyCode::KeyV, KeyW => KeyCode::KeyW, KeyX => KeyCode::KeyX,
            KeyY => KeyCode::KeyY, KeyZ => KeyCode::KeyZ,

            //--- Arrows -------------------------------------------------------

            ArrowUp => KeyCode::ArrowUp,
            ArrowDown => KeyCode::ArrowDown,
            ArrowLeft => KeyCode::ArrowLeft,
            ArrowRight => KeyCode::ArrowRight,

            //--- Editing ------------------------------------------------------

            Space => KeyCode::Space,
            Enter => KeyCode::Enter,
            Escape => KeyCode::Escape,
            Tab => KeyCode::Tab,
            Backspace => KeyCode::Backspace,
            Delete => KeyCode::Delete,
            CapsLock => KeyCode::CapsLock,

            _ => KeyCode::Unidentified,
        }
    }
}

/// Back/Forward and numbered buttons collapse into `Other`.
impl From<WinitMouseButton> for MouseButton {
    fn from(button: WinitMouseButton) -> Self {
        match button {
            WinitMouseButton::Left => MouseButton::Left,
            WinitMouseButton::Right => MouseButton::Right,
            WinitMouseButton::Middle => MouseButton::Middle,
            _ => MouseButton::Other,
        }
    }
}

//=========================================================================
// Tests
//=========================================================================
