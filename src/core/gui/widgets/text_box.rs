//=========================================================================
// Text Box
//=========================================================================
//
// Single-line text entry. Receives text only while focused; the root
// routes `TextInput` to the focused widget.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::any::Any;

use log::trace;

//=== Internal Dependencies ===============================================

use super::Caption;
use crate::core::gui::geometry::{Color, Point, Size};
use crate::core::gui::renderer::{Renderer, ResourceProvider};
use crate::core::gui::widget::{Widget, WidgetCore};
use crate::core::input::event::TextInput;
use crate::core::signal::Signal;

//=== Constants ===========================================================

pub const DEFAULT_TEXT_BOX_WIDTH: f32 = 160.0;
const TEXT_PADDING: f32 = 4.0;
const LINE_HEIGHT: f32 = 16.0;
const CARET_WIDTH: f32 = 1.0;

//=== TextBox =============================================================

pub struct TextBox {
    core: WidgetCore,
    caption: Caption,
    max_len: Option<usize>,
    focused: bool,
    background: Color,
    caret: Color,

    /// Fires with the full contents after every edit.
    pub changed: Signal<String>,
}

impl TextBox {
    pub fn new() -> Self {
        let mut core = WidgetCore::new();
        core.focusable = true;
        Self {
            core,
            caption: Caption::new(""),
            max_len: None,
            focused: false,
            background: Color::rgb(30, 30, 35),
            caret: Color::WHITE,
            changed: Signal::new(),
        }
    }

    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.core.position = Point::new(x, y);
        self
    }

    /// Caps the number of characters. Input beyond the cap is dropped.
    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.caption.set_text(text);
        self
    }

    pub fn text(&self) -> &str {
        self.caption.text()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    fn at_capacity(&self) -> bool {
        self.max_len
            .is_some_and(|max| self.caption.text().chars().count() >= max)
    }
}

impl Default for TextBox {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for TextBox {
    fn core(&self) -> &WidgetCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut WidgetCore {
        &mut self.core
    }

    fn intrinsic_size(&self) -> Size {
        let text = self.caption.size();
        Size::new(DEFAULT_TEXT_BOX_WIDTH, LINE_HEIGHT.max(text.h) + 2.0 * TEXT_PADDING)
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
    }

    fn on_text(&mut self, input: TextInput) {
        match input {
            TextInput::Char(c) => {
                if self.at_capacity() {
                    trace!(target: "gui", "TextBox {} full, dropped {:?}", self.core.id(), c);
                    return;
                }
                self.caption.text_mut().push(c);
            }
            TextInput::Backspace => {
                if self.caption.text().is_empty() {
                    return;
                }
                self.caption.text_mut().pop();
            }
        }
        let contents = self.caption.text().to_string();
        self.changed.emit(&contents);
    }

    fn refresh(&mut self, resources: &mut dyn ResourceProvider) {
        self.caption.refresh(resources);
    }

    fn draw(&self, renderer: &mut dyn Renderer) {
        let size = self.size();
        let origin = self.core.position;
        renderer.fill_rect(origin, size, self.background);

        let text_origin = origin + Point::new(TEXT_PADDING, TEXT_PADDING);
        self.caption.draw(renderer, text_origin);

        if self.focused {
            let caret_at = text_origin + Point::new(self.caption.size().w, 0.0);
            renderer.fill_rect(
                caret_at,
                Size::new(CARET_WIDTH, size.h - 2.0 * TEXT_PADDING),
                self.caret,
            );
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
    use crate::core::gui::renderer::testing::{DrawCall, FakeResources, RecordingRenderer};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn type_str(text_box: &mut TextBox, s: &str) {
        for c in s.chars() {
            text_box.on_text(TextInput::Char(c));
        }
    }

    #[test]
    fn is_focusable_by_default() {
        assert!(TextBox::new().focusable());
    }

    #[test]
    fn typing_and_backspace_edit_contents() {
        let mut text_box = TextBox::new();
        type_str(&mut text_box, "abc");
        text_box.on_text(TextInput::Backspace);
        assert_eq!(text_box.text(), "ab");
    }

    #[test]
    fn backspace_on_empty_is_silent() {
        let fired = Rc::new(RefCell::new(0));
        let mut text_box = TextBox::new();
        let seen_by = Rc::clone(&fired);
        text_box.changed.connect(move |_| *seen_by.borrow_mut() += 1);

        text_box.on_text(TextInput::Backspace);

        assert_eq!(*fired.borrow(), 0);
    }

    #[test]
    fn max_len_drops_overflow() {
        let mut text_box = TextBox::new().with_max_len(3);
        type_str(&mut text_box, "hello");
        assert_eq!(text_box.text(), "hel");
    }

    #[test]
    fn changed_reports_full_contents() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut text_box = TextBox::new().with_text("x");
        let seen_by = Rc::clone(&seen);
        text_box.changed.connect(move |s| seen_by.borrow_mut().push(s.clone()));

        type_str(&mut text_box, "yz");

        assert_eq!(*seen.borrow(), vec!["xy".to_string(), "xyz".to_string()]);
    }

    #[test]
    fn caret_drawn_only_while_focused() {
        let mut resources = FakeResources::new();
        let mut text_box = TextBox::new().with_text("ab");
        text_box.refresh(&mut resources);

        let mut renderer = RecordingRenderer::default();
        text_box.draw(&mut renderer);
        assert_eq!(renderer.calls.len(), 2);

        text_box.on_focus();
        let mut renderer = RecordingRenderer::default();
        text_box.draw(&mut renderer);
        assert_eq!(renderer.calls.len(), 3);
        assert!(matches!(
            renderer.calls[2],
            DrawCall::Rect { position, .. } if position == Point::new(4.0 + 16.0, 4.0)
        ));

        text_box.on_blur();
        assert!(!text_box.is_focused());
    }
}
