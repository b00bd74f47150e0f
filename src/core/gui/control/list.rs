//=========================================================================
// List Control
//=========================================================================
//
// Owning counterpart of `ListContainer`. Layout is anchored at the
// control's own position.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::any::Any;

//=== Internal Dependencies ===============================================

use super::{Control, ControlBase};
use crate::core::gui::container::{list_positions, Alignment, LayoutError, Orientation};
use crate::core::gui::geometry::{Point, Size};
use crate::core::gui::widget::{Widget, WidgetCore, WidgetId};

//=== ListControl =========================================================

pub struct ListControl {
    base: ControlBase,
    orientation: Orientation,
    alignment: Alignment,
}

impl ListControl {
    pub fn new(orientation: Orientation, alignment: Alignment) -> Self {
        Self {
            base: ControlBase::new(),
            orientation,
            alignment,
        }
    }

    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.base.set_position(Point::new(x, y));
        self
    }

    pub fn with_child(mut self, child: impl Widget) -> Self {
        self.base.push(Box::new(child));
        self
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn alignment(&self) -> Alignment {
        self.alignment
    }
}

impl Widget for ListControl {
    fn core(&self) -> &WidgetCore {
        self.base.core()
    }

    fn core_mut(&mut self) -> &mut WidgetCore {
        self.base.core_mut()
    }

    fn set_position(&mut self, position: Point) {
        self.base.set_position(position);
    }

    fn intrinsic_size(&self) -> Size {
        self.base.size()
    }

    fn visible(&self) -> bool {
        self.base.visible()
    }

    fn set_visible(&mut self, visible: bool) {
        self.base.set_visible(visible);
    }

    fn child_count(&self) -> usize {
        self.base.len()
    }

    fn child(&self, index: usize) -> Option<&dyn Widget> {
        self.base.get(index)
    }

    fn child_mut(&mut self, index: usize) -> Option<&mut dyn Widget> {
        self.base.get_mut(index)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl Control for ListControl {
    fn add_child(&mut self, child: Box<dyn Widget>) -> Option<WidgetId> {
        Some(self.base.push(child))
    }

    fn remove_child(&mut self, id: WidgetId) -> Option<Box<dyn Widget>> {
        self.base.remove(id)
    }

    fn perform_layout(&mut self) -> Result<(), LayoutError> {
        let sizes: Vec<Size> = self.base.iter().map(|child| child.size()).collect();
        let anchor = self.base.core().position;
        let positions = list_positions(anchor, self.orientation, self.alignment, &sizes)?;
        for (child, position) in self.base.iter_mut().zip(positions) {
            child.set_position(position);
        }
        Ok(())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
