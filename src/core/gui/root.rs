//=========================================================================
// GUI Root
//
// Owns every displayed widget and turns pointer/text input into widget
// hook calls.
//
// Responsibilities:
// - Own the display list (top-level widgets, controls with children)
// - Hit-test the pointer against the flattened tree in z-order
// - Track the single focused widget and the single current dialog by id
// - Drive resource refresh and drawing
//
// Dispatch:
// ```text
// mouse_down(button, p)
//     ├── hit = topmost visible widget containing p
//     ├── hit.on_down, press = (button, hit)
//     ├── previous focus .on_blur
//     └── focus = hit (on_focus if focusable)
//
// mouse_up(button, p)
//     ├── ignored unless button matches the press on the focused widget
//     ├── focus.on_up
//     └── if focus.bounds contains p:
//             focus.on_click, then ancestors.on_child_clicked (innermost first)
// ```
//
// Z-order is the pre-order of the display list: later top-level widgets
// are in front of earlier ones, and a control's children are in front of
// the control itself.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, trace, warn};

//=== Internal Dependencies ===============================================

use super::geometry::Point;
use super::renderer::{Renderer, ResourceProvider};
use super::widget::{self, Widget, WidgetId};
use crate::core::input::event::{MouseButton, TextInput};

//=== GuiRoot =============================================================

#[derive(Default)]
pub struct GuiRoot {
    widgets: Vec<Box<dyn Widget>>,
    focused: Option<WidgetId>,
    pressed: Option<(MouseButton, WidgetId)>,
    current_dialog: Option<WidgetId>,
}

impl GuiRoot {
    pub fn new() -> Self {
        Self::default()
    }

    //--- Display List -----------------------------------------------------

    /// Adds `widget` in front of everything already displayed.
    pub fn add(&mut self, widget: impl Widget) -> WidgetId {
        self.add_boxed(Box::new(widget))
    }

    pub fn add_boxed(&mut self, widget: Box<dyn Widget>) -> WidgetId {
        let id = widget.id();
        trace!(target: "gui", "Root added {}", id);
        self.widgets.push(widget);
        id
    }

    /// Removes a top-level widget and its children.
    ///
    /// Ids that are not top-level (or not present) are a no-op.
    pub fn remove(&mut self, id: WidgetId) -> Option<Box<dyn Widget>> {
        let Some(index) = self.widgets.iter().position(|w| w.id() == id) else {
            trace!(target: "gui", "Root ignored removal of {}", id);
            return None;
        };
        let removed = self.widgets.remove(index);
        trace!(target: "gui", "Root removed {}", id);
        Some(removed)
    }

    /// `true` if `id` is displayed anywhere in the tree.
    pub fn contains(&self, id: WidgetId) -> bool {
        self.widget(id).is_some()
    }

    pub fn widget(&self, id: WidgetId) -> Option<&dyn Widget> {
        self.widgets
            .iter()
            .find_map(|top| widget::find(top.as_ref(), id))
    }

    pub fn widget_mut(&mut self, id: WidgetId) -> Option<&mut dyn Widget> {
        let index = self
            .widgets
            .iter()
            .position(|top| widget::find(top.as_ref(), id).is_some())?;
        widget::find_mut(self.widgets[index].as_mut(), id)
    }

    pub fn get<W: Widget>(&self, id: WidgetId) -> Option<&W> {
        self.widget(id)?.as_any().downcast_ref::<W>()
    }

    pub fn get_mut<W: Widget>(&mut self, id: WidgetId) -> Option<&mut W> {
        self.widget_mut(id)?.as_any_mut().downcast_mut::<W>()
    }

    /// Number of top-level widgets.
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Top-level ids, back to front.
    pub fn ids(&self) -> impl Iterator<Item = WidgetId> + '_ {
        self.widgets.iter().map(|w| w.id())
    }

    //--- Hit Testing ------------------------------------------------------

    /// Frontmost visible widget whose bounds contain `point`.
    pub fn hit_test(&self, point: Point) -> Option<WidgetId> {
        let mut hit = None;
        for top in &self.widgets {
            widget::walk(top.as_ref(), &mut |w| {
                if w.visible() && w.bounds().contains(point) {
                    hit = Some(w.id());
                }
            });
        }
        hit
    }

    //--- Focus ------------------------------------------------------------

    /// The focused widget, if it is still displayed.
    pub fn focused(&self) -> Option<WidgetId> {
        self.focused.filter(|id| self.contains(*id))
    }

    /// Blurs the focused widget, leaving nothing focused.
    pub fn clear_focus(&mut self) {
        let focused = self.focused();
        if let Some(w) = self.lookup_mut(focused) {
            w.on_blur();
        }
        self.focused = None;
        self.pressed = None;
    }

    /// Button and widget of the press awaiting its release.
    pub fn pressed(&self) -> Option<(MouseButton, WidgetId)> {
        self.pressed.filter(|(_, id)| self.contains(*id))
    }

    /// Ends a pending press without a click. The pressed widget gets its
    /// up hook; focus is kept.
    pub fn cancel_press(&mut self) {
        let Some((button, id)) = self.pressed.take() else {
            return;
        };
        trace!(target: "gui", "Press on {} cancelled", id);
        if let Some(w) = self.widget_mut(id) {
            w.on_up(button);
        }
    }

    //--- Dispatch ---------------------------------------------------------

    pub fn mouse_down(&mut self, button: MouseButton, pointer: Point) {
        let hit = self.hit_test(pointer);
        trace!(target: "gui", "{:?} down at {:?} hit {:?}", button, pointer, hit);

        if let Some(w) = self.lookup_mut(hit) {
            w.on_down(button);
        }

        let previous = self.focused();
        if let Some(w) = self.lookup_mut(previous) {
            w.on_blur();
        }

        self.focused = hit;
        self.pressed = hit.map(|id| (button, id));
        if let Some(w) = self.lookup_mut(hit) {
            if w.focusable() {
                w.on_focus();
            }
        }

        if previous != hit {
            debug!(target: "gui", "Focus {:?} -> {:?}", previous, hit);
        }
    }

    pub fn mouse_up(&mut self, button: MouseButton, pointer: Point) {
        let Some((pressed_button, id)) = self.pressed else {
            return;
        };
        if pressed_button != button {
            trace!(target: "gui", "{:?} up ignored: {} pressed with {:?}", button, id, pressed_button);
            return;
        }
        self.pressed = None;
        if self.focused() != Some(id) {
            return;
        }
        let Some(w) = self.widget_mut(id) else {
            return;
        };
        if !w.visible() {
            return;
        }

        w.on_up(button);
        if !w.bounds().contains(pointer) {
            trace!(target: "gui", "Click on {} cancelled: released outside", id);
            return;
        }
        w.on_click(button);

        for ancestor in self.ancestors(id).into_iter().rev() {
            if let Some(parent) = self.widget_mut(ancestor) {
                parent.on_child_clicked(id);
            }
        }
    }

    /// Routes text to the focused widget.
    pub fn text_input(&mut self, input: TextInput) {
        let focused = self.focused();
        let Some(w) = self.lookup_mut(focused) else {
            return;
        };
        if w.visible() {
            w.on_text(input);
        }
    }

    fn lookup_mut(&mut self, id: Option<WidgetId>) -> Option<&mut dyn Widget> {
        self.widget_mut(id?)
    }

    /// Ids enclosing `id`, outermost first, excluding `id` itself.
    fn ancestors(&self, id: WidgetId) -> Vec<WidgetId> {
        let mut path = self
            .widgets
            .iter()
            .find_map(|top| widget::path_to(top.as_ref(), id))
            .unwrap_or_default();
        path.pop();
        path
    }

    //--- Dialogs ----------------------------------------------------------

    /// The current dialog, if it is still displayed.
    pub fn current_dialog(&self) -> Option<WidgetId> {
        self.current_dialog.filter(|id| self.contains(*id))
    }

    /// Replaces the current dialog with `dialog`.
    ///
    /// The previous dialog is taken out of the display list and returned.
    pub fn switch_dialog(&mut self, dialog: Box<dyn Widget>) -> Option<Box<dyn Widget>> {
        let previous = self.current_dialog.take().and_then(|id| self.remove(id));
        let id = self.add_boxed(dialog);
        debug!(
            target: "gui",
            "Dialog switched {:?} -> {}", previous.as_ref().map(|d| d.id()), id
        );
        self.current_dialog = Some(id);
        previous
    }

    /// Closes the current dialog, returning it.
    pub fn close_dialog(&mut self) -> Option<Box<dyn Widget>> {
        let id = self.current_dialog.take()?;
        self.remove(id)
    }

    /// Removes and re-adds a top-level widget so it draws in front.
    pub fn bring_to_front(&mut self, id: WidgetId) -> bool {
        match self.remove(id) {
            Some(w) => {
                self.widgets.push(w);
                true
            }
            None => {
                warn!(target: "gui", "Cannot bring {} to front: not a top-level widget", id);
                false
            }
        }
    }

    /// Brings the current dialog to the front. The recorded dialog stays
    /// the same.
    pub fn refresh_dialog(&mut self) -> bool {
        match self.current_dialog() {
            Some(id) => self.bring_to_front(id),
            None => false,
        }
    }

    //--- Rendering --------------------------------------------------------

    /// Refreshes resources on every widget, then draws the visible ones
    /// back to front.
    pub fn draw(&mut self, renderer: &mut dyn Renderer, resources: &mut dyn ResourceProvider) {
        for top in &mut self.widgets {
            widget::walk_mut(top.as_mut(), &mut |w| w.refresh(resources));
        }
        for top in &self.widgets {
            widget::walk(top.as_ref(), &mut |w| {
                if w.visible() {
                    w.draw(renderer);
                }
            });
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::gui::control::{Control, RadioControl, ScrollDirection, ScrollingTable};
    use crate::core::gui::geometry::Size;
    use crate::core::gui::renderer::testing::{DrawCall, FakeResources, RecordingRenderer};
    use crate::core::gui::widget::tests::Block;
    use crate::core::gui::widgets::{Label, RadioButton, TextBox};
    use std::cell::RefCell;
    use std::rc::Rc;

    //--- Test Helpers -----------------------------------------------------

    const LEFT: MouseButton = MouseButton::Left;

    type Log = Rc<RefCell<Vec<String>>>;

    /// Subscribes to down/up/click on `id`, recording "<name>:<event>".
    fn record(root: &mut GuiRoot, id: WidgetId, name: &str, log: &Log) {
        let core = root.widget_mut(id).unwrap().core_mut();
        for (event, signal) in [
            ("down", &mut core.down),
            ("up", &mut core.up),
            ("click", &mut core.click),
        ] {
            let log = Rc::clone(log);
            let tag = format!("{}:{}", name, event);
            signal.connect(move |_| log.borrow_mut().push(tag.clone()));
        }
    }

    fn click(root: &mut GuiRoot, at: Point) {
        root.mouse_down(LEFT, at);
        root.mouse_up(LEFT, at);
    }

    //=====================================================================
    // Hit Testing
    //=====================================================================

    #[test]
    fn later_widget_wins_overlap() {
        let mut root = GuiRoot::new();
        let a = root.add(Block::new(0.0, 0.0, 100.0, 100.0));
        let b = root.add(Block::new(50.0, 50.0, 100.0, 100.0));
        let log: Log = Rc::default();
        record(&mut root, a, "a", &log);
        record(&mut root, b, "b", &log);

        click(&mut root, Point::new(75.0, 75.0));

        assert_eq!(*log.borrow(), vec!["b:down", "b:up", "b:click"]);
    }

    #[test]
    fn bounds_are_inclusive() {
        let mut root = GuiRoot::new();
        let a = root.add(Block::new(10.0, 10.0, 10.0, 10.0));
        assert_eq!(root.hit_test(Point::new(20.0, 20.0)), Some(a));
        assert_eq!(root.hit_test(Point::new(20.1, 20.0)), None);
    }

    #[test]
    fn invisible_widgets_are_skipped() {
        let mut root = GuiRoot::new();
        let a = root.add(Block::new(0.0, 0.0, 100.0, 100.0));
        let b = root.add(Block::new(0.0, 0.0, 100.0, 100.0));
        root.widget_mut(b).unwrap().set_visible(false);

        assert_eq!(root.hit_test(Point::new(5.0, 5.0)), Some(a));
    }

    #[test]
    fn children_are_in_front_of_their_control() {
        let mut root = GuiRoot::new();
        let radio = RadioControl::new().with_option(RadioButton::new(""));
        let option = radio.child(0).unwrap().id();
        root.add(radio);

        assert_eq!(root.hit_test(Point::new(8.0, 8.0)), Some(option));
    }

    //=====================================================================
    // Click Semantics
    //=====================================================================

    #[test]
    fn release_outside_cancels_click() {
        let mut root = GuiRoot::new();
        let a = root.add(Block::new(0.0, 0.0, 10.0, 10.0));
        let log: Log = Rc::default();
        record(&mut root, a, "a", &log);

        root.mouse_down(LEFT, Point::new(5.0, 5.0));
        root.mouse_up(LEFT, Point::new(50.0, 50.0));

        assert_eq!(*log.borrow(), vec!["a:down", "a:up"]);
    }

    #[test]
    fn up_goes_to_pressed_widget_not_hovered_one() {
        let mut root = GuiRoot::new();
        let a = root.add(Block::new(0.0, 0.0, 10.0, 10.0));
        let b = root.add(Block::new(20.0, 0.0, 10.0, 10.0));
        let log: Log = Rc::default();
        record(&mut root, a, "a", &log);
        record(&mut root, b, "b", &log);

        root.mouse_down(LEFT, Point::new(5.0, 5.0));
        root.mouse_up(LEFT, Point::new(25.0, 5.0));

        assert_eq!(*log.borrow(), vec!["a:down", "a:up"]);
    }

    #[test]
    fn hidden_focus_receives_no_up() {
        let mut root = GuiRoot::new();
        let a = root.add(Block::new(0.0, 0.0, 10.0, 10.0));
        let log: Log = Rc::default();
        record(&mut root, a, "a", &log);

        root.mouse_down(LEFT, Point::new(5.0, 5.0));
        root.widget_mut(a).unwrap().set_visible(false);
        root.mouse_up(LEFT, Point::new(5.0, 5.0));

        assert_eq!(*log.borrow(), vec!["a:down"]);
    }

    #[test]
    fn up_without_focus_is_ignored() {
        let mut root = GuiRoot::new();
        root.mouse_up(LEFT, Point::ORIGIN);
        assert_eq!(root.focused(), None);
    }

    #[test]
    fn only_matching_button_completes_press() {
        let mut root = GuiRoot::new();
        let a = root.add(Block::new(0.0, 0.0, 10.0, 10.0));
        let clicks: Log = Rc::default();
        let seen = Rc::clone(&clicks);
        root.widget_mut(a)
            .unwrap()
            .core_mut()
            .click
            .connect(move |b| seen.borrow_mut().push(format!("click {:?}", b)));

        root.mouse_down(LEFT, Point::new(5.0, 5.0));
        root.mouse_up(MouseButton::Right, Point::new(5.0, 5.0));
        assert_eq!(root.pressed(), Some((LEFT, a)));

        root.mouse_up(LEFT, Point::new(5.0, 5.0));
        root.mouse_up(LEFT, Point::new(5.0, 5.0));

        assert_eq!(*clicks.borrow(), vec!["click Left"]);
        assert_eq!(root.pressed(), None);
    }

    #[test]
    fn cancelled_press_sends_up_without_click() {
        let mut root = GuiRoot::new();
        let a = root.add(Block::new(0.0, 0.0, 10.0, 10.0));
        let log: Log = Rc::default();
        record(&mut root, a, "a", &log);

        root.mouse_down(LEFT, Point::new(5.0, 5.0));
        root.cancel_press();
        root.mouse_up(LEFT, Point::new(5.0, 5.0));

        assert_eq!(*log.borrow(), vec!["a:down", "a:up"]);
        assert_eq!(root.focused(), Some(a));
    }

    #[test]
    fn click_notifies_ancestors_innermost_first() {
        let leaf = Block::new(0.0, 0.0, 10.0, 10.0);
        let leaf_id = leaf.id();
        let inner = Block::new(0.0, 0.0, 20.0, 20.0).with_child(leaf);
        let inner_id = inner.id();
        let outer = Block::new(0.0, 0.0, 30.0, 30.0).with_child(inner);
        let outer_id = outer.id();
        let mut root = GuiRoot::new();
        root.add(outer);

        click(&mut root, Point::new(5.0, 5.0));

        assert_eq!(root.get::<Block>(inner_id).unwrap().clicked_children, vec![leaf_id]);
        assert_eq!(root.get::<Block>(outer_id).unwrap().clicked_children, vec![leaf_id]);
    }

    #[test]
    fn clicking_radio_option_moves_selection() {
        let mut root = GuiRoot::new();
        let radio = RadioControl::new()
            .with_option(RadioButton::new(""))
            .with_option(RadioButton::new(""))
            .with_option(RadioButton::new(""));
        let radio_id = root.add(radio);

        // Third option sits at y = 2 * (16 + 4).
        click(&mut root, Point::new(8.0, 48.0));

        let radio = root.get::<RadioControl>(radio_id).unwrap();
        assert_eq!(radio.selected(), Some(2));
        let flags: Vec<bool> = (0..3).map(|i| radio.option(i).unwrap().is_selected()).collect();
        assert_eq!(flags, vec![false, false, true]);
    }

    #[test]
    fn radio_click_deselects_previous_before_selecting() {
        let log: Log = Rc::default();
        let mut radio = RadioControl::new()
            .with_option(RadioButton::new(""))
            .with_option(RadioButton::new(""))
            .with_option(RadioButton::new(""));
        let off = Rc::clone(&log);
        radio.option_mut(0).unwrap().on_deselect.connect(move |_| off.borrow_mut().push("deselect 0".to_string()));
        let on = Rc::clone(&log);
        radio.option_mut(2).unwrap().on_select.connect(move |_| on.borrow_mut().push("select 2".to_string()));
        let mut root = GuiRoot::new();
        root.add(radio);

        click(&mut root, Point::new(8.0, 48.0));

        assert_eq!(*log.borrow(), vec!["deselect 0", "select 2"]);
    }

    //=====================================================================
    // Focus
    //=====================================================================

    #[test]
    fn focus_moves_with_blur_then_focus() {
        let mut root = GuiRoot::new();
        let a = root.add(Block::new(0.0, 0.0, 10.0, 10.0).focusable());
        let b = root.add(Block::new(20.0, 0.0, 10.0, 10.0).focusable());

        click(&mut root, Point::new(5.0, 5.0));
        assert_eq!(root.focused(), Some(a));

        click(&mut root, Point::new(25.0, 5.0));
        assert_eq!(root.focused(), Some(b));
        assert_eq!(root.get::<Block>(a).unwrap().focus_events, vec!["focus", "blur"]);
        assert_eq!(root.get::<Block>(b).unwrap().focus_events, vec!["focus"]);
    }

    #[test]
    fn clicking_empty_space_defocuses() {
        let mut root = GuiRoot::new();
        let a = root.add(Block::new(0.0, 0.0, 10.0, 10.0).focusable());

        click(&mut root, Point::new(5.0, 5.0));
        click(&mut root, Point::new(500.0, 500.0));

        assert_eq!(root.focused(), None);
        assert_eq!(root.get::<Block>(a).unwrap().focus_events, vec!["focus", "blur"]);
    }

    #[test]
    fn non_focusable_widget_gets_no_focus_hook() {
        let mut root = GuiRoot::new();
        let a = root.add(Block::new(0.0, 0.0, 10.0, 10.0));

        root.mouse_down(LEFT, Point::new(5.0, 5.0));

        assert!(root.get::<Block>(a).unwrap().focus_events.is_empty());
    }

    #[test]
    fn removed_focus_is_forgotten() {
        let mut root = GuiRoot::new();
        let a = root.add(Block::new(0.0, 0.0, 10.0, 10.0).focusable());
        click(&mut root, Point::new(5.0, 5.0));

        root.remove(a);

        assert_eq!(root.focused(), None);
        root.mouse_up(LEFT, Point::new(5.0, 5.0));
        root.text_input(TextInput::Char('x'));
    }

    #[test]
    fn clear_focus_blurs() {
        let mut root = GuiRoot::new();
        let a = root.add(Block::new(0.0, 0.0, 10.0, 10.0).focusable());
        click(&mut root, Point::new(5.0, 5.0));

        root.clear_focus();

        assert_eq!(root.focused(), None);
        assert_eq!(root.get::<Block>(a).unwrap().focus_events, vec!["focus", "blur"]);
    }

    //=====================================================================
    // Text
    //=====================================================================

    #[test]
    fn text_goes_to_focused_text_box() {
        let mut root = GuiRoot::new();
        let first = root.add(TextBox::new());
        let second = root.add(TextBox::new().at(0.0, 100.0));

        click(&mut root, Point::new(5.0, 105.0));
        root.text_input(TextInput::Char('h'));
        root.text_input(TextInput::Char('i'));

        assert_eq!(root.get::<TextBox>(second).unwrap().text(), "hi");
        assert_eq!(root.get::<TextBox>(first).unwrap().text(), "");
        assert!(root.get::<TextBox>(second).unwrap().is_focused());
    }

    //=====================================================================
    // Removal & Dialogs
    //=====================================================================

    #[test]
    fn removing_unknown_or_nested_id_is_noop() {
        let child = Block::new(0.0, 0.0, 1.0, 1.0);
        let child_id = child.id();
        let mut root = GuiRoot::new();
        root.add(Block::new(0.0, 0.0, 5.0, 5.0).with_child(child));

        assert!(root.remove(child_id).is_none());
        assert!(root.contains(child_id));

        let stranger = Block::new(0.0, 0.0, 1.0, 1.0);
        assert!(root.remove(stranger.id()).is_none());
        assert_eq!(root.len(), 1);
    }

    #[test]
    fn switch_dialog_replaces_previous() {
        let mut root = GuiRoot::new();
        let first = Block::new(0.0, 0.0, 10.0, 10.0);
        let first_id = first.id();
        let second = Block::new(0.0, 0.0, 10.0, 10.0);
        let second_id = second.id();

        assert!(root.switch_dialog(Box::new(first)).is_none());
        assert_eq!(root.current_dialog(), Some(first_id));

        let previous = root.switch_dialog(Box::new(second)).unwrap();
        assert_eq!(previous.id(), first_id);
        assert!(!root.contains(first_id));
        assert_eq!(root.current_dialog(), Some(second_id));
        assert_eq!(root.len(), 1);
    }

    #[test]
    fn refresh_dialog_brings_it_to_front() {
        let mut root = GuiRoot::new();
        let dialog = Block::new(0.0, 0.0, 10.0, 10.0);
        let dialog_id = dialog.id();
        root.switch_dialog(Box::new(dialog));
        let cover = root.add(Block::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(root.hit_test(Point::new(5.0, 5.0)), Some(cover));

        assert!(root.refresh_dialog());

        assert_eq!(root.hit_test(Point::new(5.0, 5.0)), Some(dialog_id));
        assert_eq!(root.current_dialog(), Some(dialog_id));
    }

    #[test]
    fn removed_dialog_is_no_longer_current() {
        let mut root = GuiRoot::new();
        let dialog = Block::new(0.0, 0.0, 10.0, 10.0);
        let dialog_id = dialog.id();
        root.switch_dialog(Box::new(dialog));

        root.remove(dialog_id);

        assert_eq!(root.current_dialog(), None);
        assert!(!root.refresh_dialog());
    }

    #[test]
    fn close_dialog_removes_it() {
        let mut root = GuiRoot::new();
        root.switch_dialog(Box::new(Block::new(0.0, 0.0, 10.0, 10.0)));

        assert!(root.close_dialog().is_some());
        assert!(root.is_empty());
        assert!(root.close_dialog().is_none());
    }

    //=====================================================================
    // Rendering
    //=====================================================================

    #[test]
    fn draw_refreshes_then_draws_visible_widgets() {
        let mut root = GuiRoot::new();
        root.add(Label::new("one"));
        let hidden = root.add(Label::new("two").at(0.0, 20.0));
        root.widget_mut(hidden).unwrap().set_visible(false);

        let mut renderer = RecordingRenderer::default();
        let mut resources = FakeResources::new();
        root.draw(&mut renderer, &mut resources);

        assert_eq!(resources.rendered, vec!["one", "two"]);
        assert_eq!(renderer.calls.len(), 1);
        assert!(matches!(renderer.calls[0], DrawCall::Text { position, .. } if position == Point::ORIGIN));
    }

    #[test]
    fn off_window_table_cells_are_not_drawn() {
        let mut table = ScrollingTable::new(1, 1, Size::new(10.0, 10.0), ScrollDirection::Vertical);
        table.add_child(Box::new(Label::new("a")));
        table.add_child(Box::new(Label::new("b")));
        table.scroll_to(1);
        let mut root = GuiRoot::new();
        root.add(table);

        let mut renderer = RecordingRenderer::default();
        root.draw(&mut renderer, &mut FakeResources::new());

        assert_eq!(renderer.calls.len(), 1);
    }
}
