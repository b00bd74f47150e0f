//=========================================================================
// Raw Input Events
//
// Defines the engine-level representation of one raw device occurrence.
//
// This module abstracts away platform-specific input (e.g. Winit, a
// gamepad library) into a unified format consumed by input bindings.
//
// Responsibilities:
// - Identify controls portably (`InputSource`: device class + control id)
// - Represent button transitions and axis samples as immutable values
// - Provide identity-only equality and hashing for binding lookups
// - Carry modifier state so text bindings can resolve characters
//
// Event Flow:
// ```text
// Platform Layer (Winit / gamepad)
//         ↓
//    InputEvent (this module)
//         ↓
//    InputContext → InputBinding (axis, press, mouse, text)
//         ↓
//    Semantic callbacks (GUI root, game logic)
// ```
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::hash::{Hash, Hasher};

//=== DeviceClass =========================================================

/// Family of physical device that produced an event.
///
/// Bindings are built for a fixed set of device classes and never react
/// to events from any other class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DeviceClass {
    Keyboard,
    Mouse,
    Joystick,
}

//=== MouseButton =========================================================

/// Physical mouse button identifier.
///
/// The `Other` variant covers side buttons, macro buttons, and any
/// non-standard inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MouseButton {
    /// Primary button (typically left).
    Left,

    /// Secondary button (typically right).
    Right,

    /// Middle button (wheel click).
    Middle,

    /// Any other button (side buttons, thumb buttons, macro keys).
    Other,
}

impl MouseButton {
    /// Every mouse button identity, in declaration order.
    pub const ALL: [MouseButton; 4] = [
        MouseButton::Left,
        MouseButton::Right,
        MouseButton::Middle,
        MouseButton::Other,
    ];
}

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// Represents the physical key location, not the character produced.
/// Character resolution happens in the text binding, which combines the
/// key with the modifier state carried by the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KeyCode {
    //--- Numeric Keys -----------------------------------------------------

    /// Number row: 0-9
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    //--- Alphabetic Keys --------------------------------------------------

    /// Letter keys: A-Z (physical location, not character)
    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    //--- Arrow Keys -------------------------------------------------------

    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    //--- Special Keys -----------------------------------------------------

    Space,
    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,
    CapsLock,

    /// Fallback for keys not explicitly mapped by the platform layer.
    Unidentified,
}

impl KeyCode {
    /// Returns the lowercase letter for `KeyA..=KeyZ`.
    pub fn letter(self) -> Option<char> {
        use KeyCode::*;
        let c = match self {
            KeyA => 'a', KeyB => 'b', KeyC => 'c', KeyD => 'd', KeyE => 'e',
            KeyF => 'f', KeyG => 'g', KeyH => 'h', KeyI => 'i', KeyJ => 'j',
            KeyK => 'k', KeyL => 'l', KeyM => 'm', KeyN => 'n', KeyO => 'o',
            KeyP => 'p', KeyQ => 'q', KeyR => 'r', KeyS => 's', KeyT => 't',
            KeyU => 'u', KeyV => 'v', KeyW => 'w', KeyX => 'x', KeyY => 'y',
            KeyZ => 'z',
            _ => return None,
        };
        Some(c)
    }

    /// Returns the digit character for `Digit0..=Digit9`.
    pub fn digit(self) -> Option<char> {
        use KeyCode::*;
        let c = match self {
            Digit0 => '0', Digit1 => '1', Digit2 => '2', Digit3 => '3',
            Digit4 => '4', Digit5 => '5', Digit6 => '6', Digit7 => '7',
            Digit8 => '8', Digit9 => '9',
            _ => return None,
        };
        Some(c)
    }
}

//=== InputSource =========================================================

/// Identity of a single physical control: device class plus control id.
///
/// Two events "match" when their sources are equal. The sampled value of
/// an axis or the direction of a button transition never takes part in
/// matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum InputSource {
    /// Keyboard key.
    Key(KeyCode),

    /// Mouse button.
    Mouse(MouseButton),

    /// Joystick / gamepad button.
    JoyButton { joystick: u8, button: u8 },

    /// Joystick / gamepad analog axis.
    JoyAxis { joystick: u8, axis: u8 },
}

impl InputSource {
    /// Returns the device class this control belongs to.
    pub fn device_class(&self) -> DeviceClass {
        match self {
            Self::Key(_) => DeviceClass::Keyboard,
            Self::Mouse(_) => DeviceClass::Mouse,
            Self::JoyButton { .. } | Self::JoyAxis { .. } => DeviceClass::Joystick,
        }
    }
}

//=== Modifiers ===========================================================

/// Modifier key state (Shift, Ctrl, Alt, Caps Lock).
///
/// The platform layer stamps the current state onto every button event
/// so that bindings never need to track modifier keys themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    /// Shift key held (either left or right).
    pub shift: bool,

    /// Ctrl key held (either left or right, Command on macOS).
    pub ctrl: bool,

    /// Alt key held (either left or right, Option on macOS).
    pub alt: bool,

    /// Caps Lock toggled on.
    pub caps_lock: bool,
}

impl Modifiers {
    /// No modifiers held.
    pub const NONE: Self = Self { shift: false, ctrl: false, alt: false, caps_lock: false };

    /// Shift only.
    pub const SHIFT: Self = Self { shift: true, ctrl: false, alt: false, caps_lock: false };

    /// Ctrl only.
    pub const CTRL: Self = Self { shift: false, ctrl: true, alt: false, caps_lock: false };

    /// Alt only.
    pub const ALT: Self = Self { shift: false, ctrl: false, alt: true, caps_lock: false };

    /// Caps Lock only.
    pub const CAPS_LOCK: Self = Self { shift: false, ctrl: false, alt: false, caps_lock: true };
}

//=== InputEvent ==========================================================

/// One raw occurrence delivered by the platform layer.
///
/// # Equality & Hashing Semantics
///
/// Events compare by kind and source only:
///
/// ```text
/// Button{Key(A), down}  == Button{Key(A), up}        ✓ (same control)
/// Axis{JoyAxis 0/1, 0.3} == Axis{JoyAxis 0/1, -0.9}  ✓ (value ignored)
/// Button{Key(A)}        == Button{Key(B)}            ✗
/// ```
///
/// Events are produced once, dispatched, and discarded.
#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    /// Analog sample. `previous` is the value this control reported last
    /// time, so consumers can apply the difference.
    Axis {
        source: InputSource,
        value: f32,
        previous: f32,
        flipped: bool,
    },

    /// Digital transition.
    Button {
        source: InputSource,
        is_down: bool,
        modifiers: Modifiers,
    },
}

impl InputEvent {
    //--- Constructors -----------------------------------------------------

    pub fn key_down(key: KeyCode, modifiers: Modifiers) -> Self {
        Self::Button { source: InputSource::Key(key), is_down: true, modifiers }
    }

    pub fn key_up(key: KeyCode, modifiers: Modifiers) -> Self {
        Self::Button { source: InputSource::Key(key), is_down: false, modifiers }
    }

    pub fn mouse_down(button: MouseButton) -> Self {
        Self::Button { source: InputSource::Mouse(button), is_down: true, modifiers: Modifiers::NONE }
    }

    pub fn mouse_up(button: MouseButton) -> Self {
        Self::Button { source: InputSource::Mouse(button), is_down: false, modifiers: Modifiers::NONE }
    }

    pub fn joy_axis(joystick: u8, axis: u8, value: f32, previous: f32) -> Self {
        Self::Axis {
            source: InputSource::JoyAxis { joystick, axis },
            value,
            previous,
            flipped: false,
        }
    }

    //--- Accessors --------------------------------------------------------

    /// Returns the control identity of this event.
    pub fn source(&self) -> InputSource {
        match self {
            Self::Axis { source, .. } | Self::Button { source, .. } => *source,
        }
    }

    pub fn device_class(&self) -> DeviceClass {
        self.source().device_class()
    }

    /// Returns `true` if both events come from the same control.
    pub fn matches(&self, other: &InputEvent) -> bool {
        self == other
    }

    /// Signed change carried by an axis sample (`value - previous`,
    /// negated when the axis is flipped). Button events have no delta.
    pub fn delta(&self) -> f32 {
        match *self {
            Self::Axis { value, previous, flipped, .. } => {
                let delta = value - previous;
                if flipped { -delta } else { delta }
            }
            Self::Button { .. } => 0.0,
        }
    }
}

//--- Trait Implementations -----------------------------------------------

impl PartialEq for InputEvent {
    fn eq(&self, other: &Self) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
            && self.source() == other.source()
    }
}

impl Eq for InputEvent {}

/// Hashes discriminant + source, consistent with equality.
impl Hash for InputEvent {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        self.source().hash(state);
    }
}

//=== TextInput ===========================================================

/// Printable result of a key press, as produced by the text binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextInput {
    Char(char),
    Backspace,
}

//=========================================================================
// Unit Tests
//=========================================================================
