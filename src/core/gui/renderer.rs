//=========================================================================
// Renderer & Resource Interfaces
//=========================================================================
//
// Narrow seams to the drawing backend and the asset loader. Neither is
// implemented here; the host supplies both.
//
// Architecture:
//   Widget::refresh(&mut dyn ResourceProvider) → handles cached on widget
//   Widget::draw(&mut dyn Renderer)            → primitive draw calls
//
//=========================================================================

//=== External Dependencies ===============================================

use thiserror::Error;

//=== Internal Dependencies ===============================================

use super::geometry::{Color, Point, Size};

//=== Handles =============================================================

/// Loaded image. The id is meaningful only to the provider that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageHandle {
    pub id: u64,
    pub width: u32,
    pub height: u32,
}

/// Loaded font at a fixed point size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontHandle {
    pub id: u64,
    pub point_size: u32,
}

/// Pre-rendered run of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GlyphBitmap {
    pub id: u64,
    pub width: u32,
    pub height: u32,
}

impl ImageHandle {
    pub fn size(&self) -> Size {
        Size::new(self.width as f32, self.height as f32)
    }
}

impl GlyphBitmap {
    pub fn size(&self) -> Size {
        Size::new(self.width as f32, self.height as f32)
    }
}

//=== ResourceError =======================================================

/// Failure to resolve a decoration. Widgets log these and draw without
/// the decoration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResourceError {
    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("failed to decode '{path}': {reason}")]
    Decode { path: String, reason: String },

    #[error("text rendering failed: {0}")]
    Render(String),
}

//=== Renderer ============================================================

/// Drawing primitives consumed by widgets.
pub trait Renderer {
    fn fill_rect(&mut self, position: Point, size: Size, color: Color);

    fn blit_image(&mut self, image: &ImageHandle, position: Point, size: Size, tint: Color);

    fn blit_text(&mut self, glyphs: &GlyphBitmap, position: Point, tint: Color);
}

//=== ResourceProvider ====================================================

/// Resolves asset paths to handles.
pub trait ResourceProvider {
    fn load_image(&mut self, path: &str) -> Result<ImageHandle, ResourceError>;

    fn load_font(&mut self, path: &str, point_size: u32) -> Result<FontHandle, ResourceError>;

    fn render_text(&mut self, font: &FontHandle, text: &str) -> Result<GlyphBitmap, ResourceError>;
}

//=========================================================================
// Test Doubles
//=========================================================================


//=========================================================================
// Unit Tests
//=========================================================================
