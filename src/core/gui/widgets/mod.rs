//=========================================================================
// Leaf Widgets
//=========================================================================
//
// Concrete widgets with no children.
//
// Variants:
// - `Label`: static text
// - `Button`: clickable caption with optional background image
// - `Checkbox`: boolean toggle
// - `RadioButton`: one option of an exclusive group
// - `TextBox`: focusable single-line text entry
//
// Text is never rasterized here. `Caption` asks the resource provider for
// a glyph bitmap when the text changes and keeps the handle for drawing.
//
//=========================================================================

//=== Module Declarations =================================================

mod button;
mod checkbox;
mod label;
mod radio_button;
mod text_box;

//=== Public API ==========================================================

pub use button::{Button, BUTTON_PADDING};
pub use checkbox::{Checkbox, CHECKBOX_SIZE};
pub use label::Label;
pub use radio_button::{RadioButton, INDICATOR_SIZE};
pub use text_box::{TextBox, DEFAULT_TEXT_BOX_WIDTH};

//=== External Dependencies ===============================================

use log::warn;

//=== Internal Dependencies ===============================================

use super::geometry::{Color, Point, Size};
use super::renderer::{GlyphBitmap, Renderer, ResourceProvider};

//=== Constants ===========================================================

pub const DEFAULT_FONT: &str = "fonts/ui.ttf";
pub const DEFAULT_POINT_SIZE: u32 = 14;

//=== Caption =============================================================

/// Text plus its cached rendering.
///
/// The glyph bitmap is rebuilt on the next [`refresh`](Caption::refresh)
/// after the text or font changes. Failures leave the caption without
/// glyphs; it then measures as zero and draws nothing.
#[derive(Debug, Clone)]
pub(crate) struct Caption {
    text: String,
    font_path: String,
    point_size: u32,
    pub color: Color,
    glyphs: Option<GlyphBitmap>,
    dirty: bool,
}

impl Caption {
    pub(crate) fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font_path: DEFAULT_FONT.to_string(),
            point_size: DEFAULT_POINT_SIZE,
            color: Color::WHITE,
            glyphs: None,
            dirty: true,
        }
    }

    pub(crate) fn text(&self) -> &str {
        &self.text
    }

    pub(crate) fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.dirty = true;
    }

    pub(crate) fn text_mut(&mut self) -> &mut String {
        self.dirty = true;
        &mut self.text
    }

    pub(crate) fn set_font(&mut self, path: impl Into<String>, point_size: u32) {
        self.font_path = path.into();
        self.point_size = point_size;
        self.dirty = true;
    }

    pub(crate) fn size(&self) -> Size {
        self.glyphs.map(|g| g.size()).unwrap_or(Size::ZERO)
    }

    pub(crate) fn refresh(&mut self, resources: &mut dyn ResourceProvider) {
        if !self.dirty {
            return;
        }
        self.dirty = false;

        if self.text.is_empty() {
            self.glyphs = None;
            return;
        }

        let rendered = resources
            .load_font(&self.font_path, self.point_size)
            .and_then(|font| resources.render_text(&font, &self.text));

        self.glyphs = match rendered {
            Ok(glyphs) => Some(glyphs),
            Err(err) => {
                warn!(target: "gui", "Caption '{}' drawn without text: {}", self.text, err);
                None
            }
        };
    }

    pub(crate) fn draw(&self, renderer: &mut dyn Renderer, position: Point) {
        if let Some(glyphs) = &self.glyphs {
            renderer.blit_text(glyphs, position, self.color);
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
