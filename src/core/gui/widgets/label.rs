//=========================================================================
// Label
//=========================================================================

//=== External Dependencies ===============================================

use std::any::Any;

//=== Internal Dependencies ===============================================

use super::Caption;
use crate::core::gui::geometry::{Color, Point, Size};
use crate::core::gui::renderer::{Renderer, ResourceProvider};
use crate::core::gui::widget::{Widget, WidgetCore};

//=== Label ===============================================================

/// Static text. Sized by its rendered glyphs unless a fixed size is set.
pub struct Label {
    core: WidgetCore,
    caption: Caption,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            core: WidgetCore::new(),
            caption: Caption::new(text),
        }
    }

    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.core.position = Point::new(x, y);
        self
    }

    pub fn with_font(mut self, path: impl Into<String>, point_size: u32) -> Self {
        self.caption.set_font(path, point_size);
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.caption.color = color;
        self
    }

    pub fn text(&self) -> &str {
        self.caption.text()
    }

    /// Replaces the text. The new glyphs appear after the next refresh.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.caption.set_text(text);
    }
}

impl Widget for Label {
    fn core(&self) -> &WidgetCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut WidgetCore {
        &mut self.core
    }

    fn intrinsic_size(&self) -> Size {
        self.caption.size()
    }

    fn refresh(&mut self, resources: &mut dyn ResourceProvider) {
        self.caption.refresh(resources);
    }

    fn draw(&self, renderer: &mut dyn Renderer) {
        self.caption.draw(renderer, self.core.position);
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
