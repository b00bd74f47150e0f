//=========================================================================
// Widget
//
// Base capability for everything the GUI root can display.
//
// Responsibilities:
// - Carry shared state (id, position, size, visibility, focusability)
// - Expose pointer/focus/text hooks the root calls during dispatch
// - Expose children so the root can flatten a control tree for
//   hit-testing and drawing
//
// Lifecycle:
// ```text
// Widget::new() → GuiRoot::add / Control::add_child → dispatch + draw
//                                                   → GuiRoot::remove
// ```
//
// Widgets never hold references to each other. Anything that needs to
// point at a widget stores its `WidgetId` and looks it up.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::any::Any;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

//=== Internal Dependencies ===============================================

use super::geometry::{Point, Rect, Size};
use super::renderer::{Renderer, ResourceProvider};
use crate::core::input::event::{MouseButton, TextInput};
use crate::core::signal::Signal;

//=== WidgetId ============================================================

/// Process-unique widget identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(u64);

static NEXT_WIDGET_ID: AtomicU64 = AtomicU64::new(1);

impl WidgetId {
    pub(crate) fn next() -> Self {
        Self(NEXT_WIDGET_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

//=== WidgetCore ==========================================================

/// State every widget carries.
///
/// `fixed_size` overrides the content-derived size when set.
pub struct WidgetCore {
    id: WidgetId,
    pub position: Point,
    pub fixed_size: Option<Size>,
    pub visible: bool,
    pub focusable: bool,

    /// Fires when a pointer button goes down on this widget.
    pub down: Signal<MouseButton>,

    /// Fires when the focused widget sees the pointer button go up.
    pub up: Signal<MouseButton>,

    /// Fires on up only if the pointer is still inside the bounds.
    pub click: Signal<MouseButton>,
}

impl WidgetCore {
    pub fn new() -> Self {
        Self {
            id: WidgetId::next(),
            position: Point::ORIGIN,
            fixed_size: None,
            visible: true,
            focusable: false,
            down: Signal::new(),
            up: Signal::new(),
            click: Signal::new(),
        }
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }
}

impl Default for WidgetCore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for WidgetCore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WidgetCore")
            .field("id", &self.id)
            .field("position", &self.position)
            .field("fixed_size", &self.fixed_size)
            .field("visible", &self.visible)
            .field("focusable", &self.focusable)
            .finish()
    }
}

//=== Widget Trait ========================================================

/// A positioned, sized, drawable element.
///
/// Only [`core`](Widget::core), [`core_mut`](Widget::core_mut) and the
/// `Any` accessors are required. Everything else has a default built on
/// the core state.
pub trait Widget: Any {
    fn core(&self) -> &WidgetCore;

    fn core_mut(&mut self) -> &mut WidgetCore;

    //--- Geometry ---------------------------------------------------------

    fn id(&self) -> WidgetId {
        self.core().id()
    }

    fn position(&self) -> Point {
        self.core().position
    }

    fn set_position(&mut self, position: Point) {
        self.core_mut().position = position;
    }

    /// Size derived from content when no fixed size is set.
    fn intrinsic_size(&self) -> Size {
        Size::ZERO
    }

    fn size(&self) -> Size {
        self.core().fixed_size.unwrap_or_else(|| self.intrinsic_size())
    }

    fn set_fixed_size(&mut self, size: Option<Size>) {
        self.core_mut().fixed_size = size;
    }

    fn bounds(&self) -> Rect {
        Rect::new(self.position(), self.size())
    }

    //--- Flags ------------------------------------------------------------

    fn visible(&self) -> bool {
        self.core().visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.core_mut().visible = visible;
    }

    fn focusable(&self) -> bool {
        self.core().focusable
    }

    //--- Event Hooks ------------------------------------------------------

    fn on_down(&mut self, button: MouseButton) {
        self.core_mut().down.emit(&button);
    }

    fn on_up(&mut self, button: MouseButton) {
        self.core_mut().up.emit(&button);
    }

    fn on_click(&mut self, button: MouseButton) {
        self.core_mut().click.emit(&button);
    }

    fn on_focus(&mut self) {}

    fn on_blur(&mut self) {}

    fn on_text(&mut self, _input: TextInput) {}

    /// Called on every ancestor after a descendant was clicked.
    fn on_child_clicked(&mut self, _child: WidgetId) {}

    //--- Children ---------------------------------------------------------

    fn child_count(&self) -> usize {
        0
    }

    fn child(&self, _index: usize) -> Option<&dyn Widget> {
        None
    }

    fn child_mut(&mut self, _index: usize) -> Option<&mut dyn Widget> {
        None
    }

    //--- Rendering --------------------------------------------------------

    /// Resolves resources that changed since the last call.
    fn refresh(&mut self, _resources: &mut dyn ResourceProvider) {}

    /// Draws this widget only. Children are drawn by whoever walks the tree.
    fn draw(&self, _renderer: &mut dyn Renderer) {}

    //--- Downcasting ------------------------------------------------------

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

//--- Tree Helpers --------------------------------------------------------

/// Depth-first search for `id` in the subtree rooted at `widget`.
pub(crate) fn find(widget: &dyn Widget, id: WidgetId) -> Option<&dyn Widget> {
    if widget.id() == id {
        return Some(widget);
    }
    (0..widget.child_count())
        .filter_map(|i| widget.child(i))
        .find_map(|child| find(child, id))
}

pub(crate) fn find_mut(widget: &mut dyn Widget, id: WidgetId) -> Option<&mut dyn Widget> {
    if widget.id() == id {
        return Some(widget);
    }
    // Locate the branch first so only one mutable descent is taken.
    let index = (0..widget.child_count())
        .find(|&i| widget.child(i).is_some_and(|child| find(child, id).is_some()))?;
    find_mut(widget.child_mut(index)?, id)
}

/// Ids from `widget` down to `id`, inclusive, or `None` if absent.
pub(crate) fn path_to(widget: &dyn Widget, id: WidgetId) -> Option<Vec<WidgetId>> {
    if widget.id() == id {
        return Some(vec![id]);
    }
    for i in 0..widget.child_count() {
        let Some(child) = widget.child(i) else {
            continue;
        };
        if let Some(mut path) = path_to(child, id) {
            path.insert(0, widget.id());
            return Some(path);
        }
    }
    None
}

/// Calls `visit` on `widget` and every descendant, parents first.
pub(crate) fn walk<'a>(widget: &'a dyn Widget, visit: &mut dyn FnMut(&'a dyn Widget)) {
    visit(widget);
    for i in 0..widget.child_count() {
        if let Some(child) = widget.child(i) {
            walk(child, visit);
        }
    }
}

pub(crate) fn walk_mut(widget: &mut dyn Widget, visit: &mut dyn FnMut(&mut dyn Widget)) {
    visit(widget);
    for i in 0..widget.child_count() {
        if let Some(child) = widget.child_mut(i) {
            walk_mut(child, visit);
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    //--- Test Widgets -----------------------------------------------------

    /// Plain box used across the GUI tests.
    pub(crate) struct Block {
        core: WidgetCore,
        pub children: Vec<Box<dyn Widget>>,
        pub focus_events: Vec<&'static str>,
        pub clicked_children: Vec<WidgetId>,
    }

    impl Block {
        pub(crate) fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
            let mut core = WidgetCore::new();
            core.position = Point::new(x, y);
            core.fixed_size = Some(Size::new(w, h));
            Self {
                core,
                children: Vec::new(),
                focus_events: Vec::new(),
                clicked_children: Vec::new(),
            }
        }

        pub(crate) fn focusable(mut self) -> Self {
            self.core.focusable = true;
            self
        }

        pub(crate) fn with_child(mut self, child: impl Widget) -> Self {
            self.children.push(Box::new(child));
            self
        }
    }

    impl Widget for Block {
        fn core(&self) -> &WidgetCore {
            &self.core
        }

        fn core_mut(&mut self) -> &mut WidgetCore {
            &mut self.core
        }

        fn on_focus(&mut self) {
            self.focus_events.push("focus");
        }

        fn on_blur(&mut self) {
            self.focus_events.push("blur");
        }

        fn on_child_clicked(&mut self, child: WidgetId) {
            self.clicked_children.push(child);
        }

        fn child_count(&self) -> usize {
            self.children.len()
        }

        fn child(&self, index: usize) -> Option<&dyn Widget> {
            self.children.get(index).map(|c| c.as_ref())
        }

        fn child_mut(&mut self, index: usize) -> Option<&mut dyn Widget> {
            self.children.get_mut(index).map(|c| c.as_mut() as &mut dyn Widget)
        }

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    //=====================================================================
    // Identity
    //=====================================================================

    #[test]
    fn ids_are_unique() {
        let a = WidgetCore::new();
        let b = WidgetCore::new();
        assert_ne!(a.id(), b.id());
        assert!(b.id().raw() > a.id().raw());
    }

    //=====================================================================
    // Defaults
    //=====================================================================

    #[test]
    fn fixed_size_overrides_intrinsic() {
        let mut block = Block::new(0.0, 0.0, 10.0, 5.0);
        assert_eq!(block.size(), Size::new(10.0, 5.0));

        block.set_fixed_size(None);
        assert_eq!(block.size(), Size::ZERO);
    }

    #[test]
    fn bounds_follow_position() {
        let mut block = Block::new(0.0, 0.0, 10.0, 5.0);
        block.set_position(Point::new(3.0, 4.0));
        assert_eq!(block.bounds(), Rect::new(Point::new(3.0, 4.0), Size::new(10.0, 5.0)));
    }

    #[test]
    fn pointer_hooks_emit_core_signals() {
        let mut block = Block::new(0.0, 0.0, 1.0, 1.0);
        let hits = Rc::new(Cell::new(0));
        for signal in [&mut block.core.down, &mut block.core.up, &mut block.core.click] {
            let seen_by = Rc::clone(&hits);
            signal.connect(move |_| seen_by.set(seen_by.get() + 1));
        }

        block.on_down(MouseButton::Left);
        block.on_up(MouseButton::Left);
        block.on_click(MouseButton::Left);

        assert_eq!(hits.get(), 3);
    }

    //=====================================================================
    // Tree Helpers
    //=====================================================================

    #[test]
    fn find_and_path_descend_into_children() {
        let leaf = Block::new(0.0, 0.0, 1.0, 1.0);
        let leaf_id = leaf.id();
        let inner = Block::new(0.0, 0.0, 1.0, 1.0).with_child(leaf);
        let inner_id = inner.id();
        let mut outer = Block::new(0.0, 0.0, 1.0, 1.0).with_child(inner);
        let outer_id = outer.id();

        assert!(find(&outer, leaf_id).is_some());
        assert_eq!(path_to(&outer, leaf_id), Some(vec![outer_id, inner_id, leaf_id]));
        assert_eq!(path_to(&outer, WidgetCore::new().id()), None);

        find_mut(&mut outer, leaf_id).unwrap().set_visible(false);
        assert!(!find(&outer, leaf_id).unwrap().visible());
    }

    #[test]
    fn walk_visits_parents_first() {
        let leaf = Block::new(0.0, 0.0, 1.0, 1.0);
        let leaf_id = leaf.id();
        let outer = Block::new(0.0, 0.0, 1.0, 1.0).with_child(leaf);
        let outer_id = outer.id();

        let mut order = Vec::new();
        walk(&outer, &mut |w| order.push(w.id()));

        assert_eq!(order, vec![outer_id, leaf_id]);
    }
}
