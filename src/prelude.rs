//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use aetheric_ui::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Frontend facade
pub use crate::frontend::{Frontend, FrontendBuilder, UiSignal};

// Platform bridge
pub use crate::platform::{PlatformBridge, PlatformEvent, PointerSource, TickControl};

// Input system
pub use crate::core::input::{
    AxisBinding, ContextRegistry, ContextSlot, InputBinding, InputContext, InputEvent,
    InputRole, InputSource, KeyCode, Modifiers, MouseButton, MouseKeyBinding,
    SinglePressBinding, TextBinding, TextInput,
};

// GUI system
pub use crate::core::gui::{
    Alignment, Button, Checkbox, Color, Container, Control, GuiRoot, Label, ListContainer,
    ListControl, Orientation, Point, RadioButton, RadioControl, Rect, Renderer,
    ResourceProvider, ScrollDirection, ScrollingTable, Size, TextBox, Widget, WidgetId,
};

// Signals
pub use crate::core::signal::Signal;
