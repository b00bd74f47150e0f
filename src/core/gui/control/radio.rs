//=========================================================================
// Radio Control
//=========================================================================
//
// Exclusive selection over a vertical stack of `RadioButton`s.
//
// Selection flow:
//   click on option i → RadioButton::on_click (grouped, selects nothing)
//                     → GuiRoot notifies ancestors
//                     → RadioControl::on_child_clicked → select(i)
//                          ├── previous option deselected
//                          └── option i selected, `selection_changed` fires
//
//=========================================================================

//=== External Dependencies ===============================================

use std::any::Any;

use log::{debug, warn};

//=== Internal Dependencies ===============================================

use super::{Control, ControlBase};
use crate::core::gui::geometry::{Point, Size};
use crate::core::gui::widget::{Widget, WidgetCore, WidgetId};
use crate::core::gui::widgets::RadioButton;
use crate::core::signal::Signal;

//=== Constants ===========================================================

/// Vertical gap between stacked options.
pub const DEFAULT_OPTION_SPACING: f32 = 4.0;

//=== RadioControl ========================================================

/// Group of options of which exactly one is selected once any exist.
///
/// The first option added becomes the selection.
pub struct RadioControl {
    base: ControlBase,
    selected: Option<usize>,
    spacing: f32,

    /// Fires with the newly selected index.
    pub selection_changed: Signal<usize>,
}

impl RadioControl {
    pub fn new() -> Self {
        Self {
            base: ControlBase::new(),
            selected: None,
            spacing: DEFAULT_OPTION_SPACING,
            selection_changed: Signal::new(),
        }
    }

    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.base.set_position(Point::new(x, y));
        self
    }

    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_option(mut self, option: RadioButton) -> Self {
        self.add_option(option);
        self
    }

    //--- Options ----------------------------------------------------------

    /// Stacks `option` below the last one and wires it into the group.
    pub fn add_option(&mut self, option: RadioButton) -> WidgetId {
        self.stack(Box::new(option))
    }

    fn stack(&mut self, mut option: Box<dyn Widget>) -> WidgetId {
        let origin = self.base.core().position;
        let offset = match self.base.last() {
            Some(previous) => Point::new(
                previous.position().x - origin.x,
                previous.position().y - origin.y + previous.size().h + self.spacing,
            ),
            None => Point::ORIGIN,
        };
        option.set_position(offset);
        if let Some(radio) = option.as_any_mut().downcast_mut::<RadioButton>() {
            radio.deselect();
            radio.set_grouped(true);
        }

        let id = self.base.push(option);
        if self.selected.is_none() {
            self.select(0);
        }
        id
    }

    pub fn option(&self, index: usize) -> Option<&RadioButton> {
        self.base.get(index)?.as_any().downcast_ref::<RadioButton>()
    }

    pub fn option_mut(&mut self, index: usize) -> Option<&mut RadioButton> {
        self.base.get_mut(index)?.as_any_mut().downcast_mut::<RadioButton>()
    }

    pub fn len(&self) -> usize {
        self.base.len()
    }

    pub fn is_empty(&self) -> bool {
        self.base.is_empty()
    }

    //--- Selection --------------------------------------------------------

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Moves the selection to `index`.
    ///
    /// The previous option is deselected first. Out-of-range indices are
    /// ignored with a warning.
    pub fn select(&mut self, index: usize) {
        if index >= self.base.len() {
            warn!(target: "gui", "Radio {} has no option {}", self.base.core().id(), index);
            return;
        }

        if let Some(previous) = self.selected {
            if previous != index {
                self.deselect_at(previous);
            }
        }
        if let Some(option) = self.option_mut(index) {
            option.select();
        }

        if self.selected != Some(index) {
            debug!(target: "gui", "Radio {} selected option {}", self.base.core().id(), index);
            self.selected = Some(index);
            self.selection_changed.emit(&index);
        }
    }

    /// Deselects `index`. Indices past the end are ignored silently.
    fn deselect_at(&mut self, index: usize) {
        if let Some(option) = self.option_mut(index) {
            option.deselect();
        }
    }
}

impl Default for RadioControl {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for RadioControl {
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

    fn on_child_clicked(&mut self, child: WidgetId) {
        if let Some(index) = self.base.index_of(child) {
            self.select(index);
        }
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

impl Control for RadioControl {
    /// Accepts only `RadioButton`s, which are stacked like
    /// [`add_option`](RadioControl::add_option). Anything else is dropped.
    fn add_child(&mut self, child: Box<dyn Widget>) -> Option<WidgetId> {
        if !child.as_any().is::<RadioButton>() {
            warn!(
                target: "gui",
                "Radio {} rejected non-option child {}", self.base.core().id(), child.id()
            );
            return None;
        }
        Some(self.stack(child))
    }

    fn remove_child(&mut self, id: WidgetId) -> Option<Box<dyn Widget>> {
        let index = self.base.index_of(id)?;
        let mut removed = self.base.remove(id)?;
        if let Some(radio) = removed.as_any_mut().downcast_mut::<RadioButton>() {
            radio.set_grouped(false);
        }

        match self.selected {
            Some(selected) if selected == index => {
                self.selected = None;
                if !self.base.is_empty() {
                    self.select(0);
                }
            }
            Some(selected) if selected > index => self.selected = Some(selected - 1),
            _ => {}
        }
        Some(removed)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::gui::widget::tests::Block;
    use crate::core::gui::widgets::INDICATOR_SIZE;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn three_options() -> RadioControl {
        RadioControl::new()
            .at(10.0, 20.0)
            .with_option(RadioButton::new(""))
            .with_option(RadioButton::new(""))
            .with_option(RadioButton::new(""))
    }

    fn selected_flags(radio: &RadioControl) -> Vec<bool> {
        (0..radio.len())
            .map(|i| radio.option(i).unwrap().is_selected())
            .collect()
    }

    //=====================================================================
    // Selection
    //=====================================================================

    #[test]
    fn first_option_is_selected_automatically() {
        let radio = three_options();
        assert_eq!(radio.selected(), Some(0));
        assert_eq!(selected_flags(&radio), vec![true, false, false]);
    }

    #[test]
    fn selecting_moves_exclusive_selection() {
        let mut radio = three_options();

        radio.select(2);
        assert_eq!(selected_flags(&radio), vec![false, false, true]);

        radio.select(1);
        assert_eq!(selected_flags(&radio), vec![false, true, false]);
        assert_eq!(radio.selected(), Some(1));
    }

    #[test]
    fn deselect_hook_runs_before_select_hook() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut radio = three_options();
        let off = Rc::clone(&log);
        radio.option_mut(0).unwrap().on_deselect.connect(move |_| off.borrow_mut().push("deselect 0"));
        let on = Rc::clone(&log);
        radio.option_mut(2).unwrap().on_select.connect(move |_| on.borrow_mut().push("select 2"));

        radio.select(2);

        assert_eq!(*log.borrow(), vec!["deselect 0", "select 2"]);
    }

    #[test]
    fn out_of_range_select_is_ignored() {
        let mut radio = three_options();
        radio.select(7);
        assert_eq!(radio.selected(), Some(0));
        assert_eq!(selected_flags(&radio), vec![true, false, false]);
    }

    #[test]
    fn selection_changed_fires_once_per_change() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut radio = three_options();
        let seen_by = Rc::clone(&seen);
        radio.selection_changed.connect(move |i| seen_by.borrow_mut().push(*i));

        radio.select(1);
        radio.select(1);

        assert_eq!(*seen.borrow(), vec![1]);
    }

    #[test]
    fn child_click_selects_that_option() {
        let mut radio = three_options();
        let id = radio.child(2).unwrap().id();

        radio.on_child_clicked(id);

        assert_eq!(radio.selected(), Some(2));
        assert_eq!(selected_flags(&radio), vec![false, false, true]);
    }

    //=====================================================================
    // Stacking
    //=====================================================================

    #[test]
    fn options_stack_below_previous_with_spacing() {
        let radio = three_options();
        let step = INDICATOR_SIZE + DEFAULT_OPTION_SPACING;

        assert_eq!(radio.child(0).unwrap().position(), Point::new(10.0, 20.0));
        assert_eq!(radio.child(1).unwrap().position(), Point::new(10.0, 20.0 + step));
        assert_eq!(radio.child(2).unwrap().position(), Point::new(10.0, 20.0 + 2.0 * step));
    }

    #[test]
    fn custom_spacing_applies_to_later_options() {
        let radio = RadioControl::new()
            .with_spacing(10.0)
            .with_option(RadioButton::new(""))
            .with_option(RadioButton::new(""));

        assert_eq!(radio.child(1).unwrap().position(), Point::new(0.0, INDICATOR_SIZE + 10.0));
    }

    //=====================================================================
    // Children
    //=====================================================================

    #[test]
    fn generic_add_rejects_non_options() {
        let mut radio = RadioControl::new();
        assert!(radio.add_child(Box::new(Block::new(0.0, 0.0, 1.0, 1.0))).is_none());
        assert!(radio.is_empty());

        assert!(radio.add_child(Box::new(RadioButton::new(""))).is_some());
        assert_eq!(radio.selected(), Some(0));
    }

    #[test]
    fn removing_selected_option_selects_first_remaining() {
        let mut radio = three_options();
        radio.select(1);
        let id = radio.child(1).unwrap().id();

        radio.remove_child(id);

        assert_eq!(radio.len(), 2);
        assert_eq!(radio.selected(), Some(0));
        assert_eq!(selected_flags(&radio), vec![true, false]);
    }

    #[test]
    fn options_are_grouped_while_stacked() {
        let mut radio = three_options();
        assert!(radio.option(1).unwrap().is_grouped());

        let id = radio.child(1).unwrap().id();
        let removed = radio.remove_child(id).unwrap();

        assert!(!removed.as_any().downcast_ref::<RadioButton>().unwrap().is_grouped());
    }

    #[test]
    fn removing_earlier_option_shifts_selection_index() {
        let mut radio = three_options();
        radio.select(2);
        let id = radio.child(0).unwrap().id();

        radio.remove_child(id);

        assert_eq!(radio.selected(), Some(1));
        assert_eq!(selected_flags(&radio), vec![false, true]);
    }

    #[test]
    fn removing_last_option_clears_selection() {
        let mut radio = RadioControl::new().with_option(RadioButton::new(""));
        let id = radio.child(0).unwrap().id();

        radio.remove_child(id);

        assert_eq!(radio.selected(), None);
        assert!(!radio.visible());
    }
}
