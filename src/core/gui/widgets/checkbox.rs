//=========================================================================
// Checkbox
//=========================================================================

//=== External Dependencies ===============================================

use std::any::Any;

//=== Internal Dependencies ===============================================

use crate::core::gui::geometry::{Color, Point, Size};
use crate::core::gui::renderer::Renderer;
use crate::core::gui::widget::{Widget, WidgetCore};
use crate::core::input::event::MouseButton;
use crate::core::signal::Signal;

//=== Constants ===========================================================

pub const CHECKBOX_SIZE: f32 = 16.0;
const CHECK_INSET: f32 = 4.0;

//=== Checkbox ============================================================

/// Square toggle. A click flips the state and fires `toggled`.
pub struct Checkbox {
    core: WidgetCore,
    checked: bool,
    frame: Color,
    mark: Color,

    pub toggled: Signal<bool>,
}

impl Checkbox {
    pub fn new() -> Self {
        Self {
            core: WidgetCore::new(),
            checked: false,
            frame: Color::GRAY,
            mark: Color::WHITE,
            toggled: Signal::new(),
        }
    }

    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.core.position = Point::new(x, y);
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Sets the state. `toggled` fires only if it changed.
    pub fn set_checked(&mut self, checked: bool) {
        if self.checked != checked {
            self.checked = checked;
            self.toggled.emit(&checked);
        }
    }
}

impl Default for Checkbox {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Checkbox {
    fn core(&self) -> &WidgetCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut WidgetCore {
        &mut self.core
    }

    fn intrinsic_size(&self) -> Size {
        Size::new(CHECKBOX_SIZE, CHECKBOX_SIZE)
    }

    fn on_click(&mut self, button: MouseButton) {
        self.core.click.emit(&button);
        self.set_checked(!self.checked);
    }

    fn draw(&self, renderer: &mut dyn Renderer) {
        let size = self.size();
        renderer.fill_rect(self.core.position, size, self.frame);
        if self.checked {
            let inset = Point::new(CHECK_INSET, CHECK_INSET);
            let inner = Size::new(size.w - 2.0 * CHECK_INSET, size.h - 2.0 * CHECK_INSET);
            renderer.fill_rect(self.core.position + inset, inner, self.mark);
        }
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::gui::renderer::testing::RecordingRenderer;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn click_toggles_and_reports() {
        let states = Rc::new(RefCell::new(Vec::new()));
        let mut checkbox = Checkbox::new();
        let seen_by = Rc::clone(&states);
        checkbox.toggled.connect(move |on| seen_by.borrow_mut().push(*on));

        checkbox.on_click(MouseButton::Left);
        checkbox.on_click(MouseButton::Left);

        assert_eq!(*states.borrow(), vec![true, false]);
        assert!(!checkbox.is_checked());
    }

    #[test]
    fn set_checked_is_silent_without_change() {
        let fired = Rc::new(RefCell::new(0));
        let mut checkbox = Checkbox::new().checked(true);
        let seen_by = Rc::clone(&fired);
        checkbox.toggled.connect(move |_| *seen_by.borrow_mut() += 1);

        checkbox.set_checked(true);

        assert_eq!(*fired.borrow(), 0);
    }

    #[test]
    fn checked_box_draws_mark() {
        let mut renderer = RecordingRenderer::default();
        Checkbox::new().draw(&mut renderer);
        assert_eq!(renderer.calls.len(), 1);

        let mut renderer = RecordingRenderer::default();
        Checkbox::new().checked(true).draw(&mut renderer);
        assert_eq!(renderer.calls.len(), 2);
    }
}
