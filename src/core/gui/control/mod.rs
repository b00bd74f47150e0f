//=========================================================================
// Controls
//=========================================================================
//
// Compound widgets that own their children.
//
// Architecture:
//   Control (owns Vec<Box<dyn Widget>>)
//       ├── child positions are absolute, shifted with the control
//       ├── size    = component-wise max of child sizes
//       └── visible = first child's visibility (empty → false)
//
// Variants:
// - `ListControl`: list layout over owned children
// - `RadioControl`: exclusive selection over `RadioButton`s
// - `ScrollingTable`: fixed grid window over a longer run of cells
//
//=========================================================================

//=== Module Declarations =================================================

mod list;
mod radio;
mod table;

//=== Public API ==========================================================

pub use list::ListControl;
pub use radio::{RadioControl, DEFAULT_OPTION_SPACING};
pub use table::{ScrollDirection, ScrollingTable};

//=== External Dependencies ===============================================

use log::trace;

//=== Internal Dependencies ===============================================

use super::container::LayoutError;
use super::geometry::{Point, Size};
use super::widget::{Widget, WidgetCore, WidgetId};

//=== Control Trait =======================================================

/// Owning composite.
///
/// Adding a child shifts it by the control's position, so a child placed
/// at `(5, 5)` inside a control at `(100, 0)` lands at `(105, 5)`.
pub trait Control: Widget {
    /// Takes ownership of `child`. Returns `None` if this control does
    /// not accept that kind of widget; the child is dropped.
    fn add_child(&mut self, child: Box<dyn Widget>) -> Option<WidgetId>;

    fn remove_child(&mut self, id: WidgetId) -> Option<Box<dyn Widget>>;

    /// Repositions children according to the control's policy.
    fn perform_layout(&mut self) -> Result<(), LayoutError> {
        Ok(())
    }
}

//=== ControlBase =========================================================

/// Shared state and child bookkeeping for every control.
pub struct ControlBase {
    core: WidgetCore,
    children: Vec<Box<dyn Widget>>,
}

impl ControlBase {
    pub fn new() -> Self {
        Self {
            core: WidgetCore::new(),
            children: Vec::new(),
        }
    }

    pub fn core(&self) -> &WidgetCore {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut WidgetCore {
        &mut self.core
    }

    //--- Children ---------------------------------------------------------

    /// Adds `child`, shifting it by the control's position.
    pub fn push(&mut self, mut child: Box<dyn Widget>) -> WidgetId {
        let shifted = child.position() + self.core.position;
        child.set_position(shifted);
        let id = child.id();
        trace!(target: "gui", "Control {} adopted {}", self.core.id(), id);
        self.children.push(child);
        id
    }

    pub fn remove(&mut self, id: WidgetId) -> Option<Box<dyn Widget>> {
        let index = self.index_of(id)?;
        Some(self.children.remove(index))
    }

    pub fn index_of(&self, id: WidgetId) -> Option<usize> {
        self.children.iter().position(|child| child.id() == id)
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&dyn Widget> {
        self.children.get(index).map(|child| child.as_ref())
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut dyn Widget> {
        self.children
            .get_mut(index)
            .map(|child| child.as_mut() as &mut dyn Widget)
    }

    pub fn last(&self) -> Option<&dyn Widget> {
        self.children.last().map(|child| child.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Widget> {
        self.children.iter().map(|child| child.as_ref())
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Box<dyn Widget>> {
        self.children.iter_mut()
    }

    //--- Widget Behavior --------------------------------------------------

    /// Moves the control and every child by the same delta.
    pub fn set_position(&mut self, position: Point) {
        let delta = position - self.core.position;
        for child in &mut self.children {
            let moved = child.position() + delta;
            child.set_position(moved);
        }
        self.core.position = position;
    }

    pub fn size(&self) -> Size {
        self.children
            .iter()
            .fold(Size::ZERO, |acc, child| acc.max(child.size()))
    }

    pub fn visible(&self) -> bool {
        self.children.first().is_some_and(|child| child.visible())
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.core.visible = visible;
        for child in &mut self.children {
            child.set_visible(visible);
        }
    }
}

impl Default for ControlBase {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::gui::widget::tests::Block;

    fn base_at(x: f32, y: f32) -> ControlBase {
        let mut base = ControlBase::new();
        base.core_mut().position = Point::new(x, y);
        base
    }

    #[test]
    fn push_shifts_child_by_control_position() {
        let mut base = base_at(100.0, 0.0);
        let id = base.push(Box::new(Block::new(5.0, 5.0, 10.0, 10.0)));

        assert_eq!(base.get(0).unwrap().position(), Point::new(105.0, 5.0));
        assert_eq!(base.index_of(id), Some(0));
    }

    #[test]
    fn set_position_moves_children_by_delta() {
        let mut base = base_at(10.0, 10.0);
        base.push(Box::new(Block::new(0.0, 0.0, 1.0, 1.0)));
        base.push(Box::new(Block::new(5.0, 20.0, 1.0, 1.0)));

        base.set_position(Point::new(15.0, 0.0));

        assert_eq!(base.get(0).unwrap().position(), Point::new(15.0, 0.0));
        assert_eq!(base.get(1).unwrap().position(), Point::new(20.0, 20.0));
    }

    #[test]
    fn size_is_component_wise_max() {
        let mut base = ControlBase::new();
        base.push(Box::new(Block::new(0.0, 0.0, 50.0, 20.0)));
        base.push(Box::new(Block::new(0.0, 0.0, 30.0, 40.0)));

        assert_eq!(base.size(), Size::new(50.0, 40.0));
    }

    #[test]
    fn empty_control_is_invisible() {
        let base = ControlBase::new();
        assert!(!base.visible());
        assert_eq!(base.size(), Size::ZERO);
    }

    #[test]
    fn visibility_follows_first_child_and_propagates() {
        let mut base = ControlBase::new();
        base.push(Box::new(Block::new(0.0, 0.0, 1.0, 1.0)));
        base.push(Box::new(Block::new(0.0, 0.0, 1.0, 1.0)));
        assert!(base.visible());

        base.get_mut(0).unwrap().set_visible(false);
        assert!(!base.visible());

        base.set_visible(true);
        assert!(base.iter().all(|child| child.visible()));

        base.set_visible(false);
        assert!(base.iter().all(|child| !child.visible()));
    }

    #[test]
    fn remove_returns_child() {
        let mut base = ControlBase::new();
        let id = base.push(Box::new(Block::new(0.0, 0.0, 1.0, 1.0)));

        assert!(base.remove(id).is_some());
        assert!(base.remove(id).is_none());
        assert!(base.is_empty());
    }
}
