//=========================================================================
// Button
//=========================================================================
//
// Caption over a background. The background is an image when one is set
// and loads, a flat fill otherwise. While a pointer button is held on
// it, the background is tinted.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::any::Any;

use log::warn;

//=== Internal Dependencies ===============================================

use super::Caption;
use crate::core::gui::geometry::{Color, Point, Size};
use crate::core::gui::renderer::{ImageHandle, Renderer, ResourceProvider};
use crate::core::gui::widget::{Widget, WidgetCore};
use crate::core::input::event::MouseButton;

//=== Constants ===========================================================

/// Space between the caption and the edge of a flat background.
pub const BUTTON_PADDING: f32 = 6.0;

//=== Button ==============================================================

pub struct Button {
    core: WidgetCore,
    caption: Caption,
    background_path: Option<String>,
    background: Option<ImageHandle>,
    background_dirty: bool,
    fill: Color,
    pressed_tint: Color,
    pressed: bool,
}

impl Button {
    pub fn new(caption: impl Into<String>) -> Self {
        Self {
            core: WidgetCore::new(),
            caption: Caption::new(caption),
            background_path: None,
            background: None,
            background_dirty: false,
            fill: Color::rgb(60, 60, 70),
            pressed_tint: Color::GRAY,
            pressed: false,
        }
    }

    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.core.position = Point::new(x, y);
        self
    }

    pub fn with_background(mut self, path: impl Into<String>) -> Self {
        self.background_path = Some(path.into());
        self.background_dirty = true;
        self
    }

    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = fill;
        self
    }

    pub fn with_pressed_tint(mut self, tint: Color) -> Self {
        self.pressed_tint = tint;
        self
    }

    pub fn with_font(mut self, path: impl Into<String>, point_size: u32) -> Self {
        self.caption.set_font(path, point_size);
        self
    }

    pub fn caption(&self) -> &str {
        self.caption.text()
    }

    pub fn set_caption(&mut self, text: impl Into<String>) {
        self.caption.set_text(text);
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    fn caption_origin(&self) -> Point {
        let size = self.size();
        let text = self.caption.size();
        Point::new(
            self.core.position.x + (size.w - text.w) / 2.0,
            self.core.position.y + (size.h - text.h) / 2.0,
        )
    }
}

impl Widget for Button {
    fn core(&self) -> &WidgetCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut WidgetCore {
        &mut self.core
    }

    fn intrinsic_size(&self) -> Size {
        let text = self.caption.size();
        let padded = Size::new(text.w + 2.0 * BUTTON_PADDING, text.h + 2.0 * BUTTON_PADDING);
        match &self.background {
            Some(image) => image.size().max(text),
            None => padded,
        }
    }

    fn on_down(&mut self, button: MouseButton) {
        self.pressed = true;
        self.core.down.emit(&button);
    }

    fn on_up(&mut self, button: MouseButton) {
        self.pressed = false;
        self.core.up.emit(&button);
    }

    fn on_blur(&mut self) {
        self.pressed = false;
    }

    fn refresh(&mut self, resources: &mut dyn ResourceProvider) {
        if self.background_dirty {
            self.background_dirty = false;
            self.background = match self.background_path.as_deref().map(|p| resources.load_image(p)) {
                Some(Ok(image)) => Some(image),
                Some(Err(err)) => {
                    warn!(target: "gui", "Button {} drawn without background: {}", self.core.id(), err);
                    None
                }
                None => None,
            };
        }
        self.caption.refresh(resources);
    }

    fn draw(&self, renderer: &mut dyn Renderer) {
        let size = self.size();
        match &self.background {
            Some(image) => {
                let tint = if self.pressed { self.pressed_tint } else { Color::WHITE };
                renderer.blit_image(image, self.core.position, size, tint);
            }
            None => {
                let fill = if self.pressed { self.pressed_tint } else { self.fill };
                renderer.fill_rect(self.core.position, size, fill);
            }
        }
        self.caption.draw(renderer, self.caption_origin());
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
