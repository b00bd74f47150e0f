//=========================================================================
// Radio Button
//=========================================================================
//
// One option in an exclusive group. The button only knows its own state;
// exclusivity is enforced by the owning `RadioControl`. A grouped option
// leaves selection on click to its control.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::any::Any;

//=== Internal Dependencies ===============================================

use super::Caption;
use crate::core::gui::geometry::{Color, Point, Size};
use crate::core::gui::renderer::{Renderer, ResourceProvider};
use crate::core::gui::widget::{Widget, WidgetCore};
use crate::core::input::event::MouseButton;
use crate::core::signal::Signal;

//=== Constants ===========================================================

pub const INDICATOR_SIZE: f32 = 16.0;
const INDICATOR_GAP: f32 = 4.0;
const DOT_INSET: f32 = 4.0;

//=== RadioButton =========================================================

pub struct RadioButton {
    core: WidgetCore,
    caption: Caption,
    selected: bool,
    grouped: bool,
    ring: Color,
    dot: Color,

    /// Fires when this option becomes selected.
    pub on_select: Signal<()>,

    /// Fires when this option stops being selected.
    pub on_deselect: Signal<()>,
}

impl RadioButton {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            core: WidgetCore::new(),
            caption: Caption::new(label),
            selected: false,
            grouped: false,
            ring: Color::GRAY,
            dot: Color::WHITE,
            on_select: Signal::new(),
            on_deselect: Signal::new(),
        }
    }

    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.core.position = Point::new(x, y);
        self
    }

    pub fn label(&self) -> &str {
        self.caption.text()
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn is_grouped(&self) -> bool {
        self.grouped
    }

    pub(crate) fn set_grouped(&mut self, grouped: bool) {
        self.grouped = grouped;
    }

    /// Marks the option selected. No-op if it already is.
    pub fn select(&mut self) {
        if !self.selected {
            self.selected = true;
            self.on_select.emit(&());
        }
    }

    /// Marks the option deselected. No-op if it already is.
    pub fn deselect(&mut self) {
        if self.selected {
            self.selected = false;
            self.on_deselect.emit(&());
        }
    }
}

impl Widget for RadioButton {
    fn core(&self) -> &WidgetCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut WidgetCore {
        &mut self.core
    }

    fn intrinsic_size(&self) -> Size {
        let text = self.caption.size();
        if text.w == 0.0 {
            return Size::new(INDICATOR_SIZE, INDICATOR_SIZE);
        }
        Size::new(INDICATOR_SIZE + INDICATOR_GAP + text.w, INDICATOR_SIZE.max(text.h))
    }

    fn on_click(&mut self, button: MouseButton) {
        self.core.click.emit(&button);
        if !self.grouped {
            self.select();
        }
    }

    fn refresh(&mut self, resources: &mut dyn ResourceProvider) {
        self.caption.refresh(resources);
    }

    fn draw(&self, renderer: &mut dyn Renderer) {
        let origin = self.core.position;
        renderer.fill_rect(origin, Size::new(INDICATOR_SIZE, INDICATOR_SIZE), self.ring);
        if self.selected {
            let dot = INDICATOR_SIZE - 2.0 * DOT_INSET;
            renderer.fill_rect(origin + Point::new(DOT_INSET, DOT_INSET), Size::new(dot, dot), self.dot);
        }
        self.caption
            .draw(renderer, origin + Point::new(INDICATOR_SIZE + INDICATOR_GAP, 0.0));
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
