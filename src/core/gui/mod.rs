//=========================================================================
// GUI
//
// Widget tree, layout policies, and the root dispatcher that feeds them
// pointer and text input.
//
// Responsibilities:
// - Define the widget capability and the concrete leaf widgets
// - Provide layout-only containers and owning controls
// - Hit-test, track focus and the current dialog, forward draw calls
//
// Rendering and asset loading stay outside: widgets talk to them through
// the `Renderer` and `ResourceProvider` traits only.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod container;
pub mod control;
pub mod geometry;
pub mod renderer;
pub mod root;
pub mod widget;
pub mod widgets;

//=== Public API ==========================================================

pub use container::{Alignment, Container, LayoutError, ListContainer, Orientation};
pub use control::{
    Control, ControlBase, ListControl, RadioControl, ScrollDirection, ScrollingTable,
    DEFAULT_OPTION_SPACING,
};
pub use geometry::{Color, Point, Rect, Size};
pub use renderer::{
    FontHandle, GlyphBitmap, ImageHandle, Renderer, ResourceError, ResourceProvider,
};
pub use root::GuiRoot;
pub use widget::{Widget, WidgetCore, WidgetId};
pub use widgets::{Button, Checkbox, Label, RadioButton, TextBox};
