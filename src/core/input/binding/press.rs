//=========================================================================
// Single Press Binding
//=========================================================================
//
// One logical button fed by any number of physical buttons.
//
// Architecture:
//   down (matching) → press_count += 1 → 0→1 fires `pressed`
//   up   (matching) → press_count -= 1 → 1→0 fires `released`
//
// The counter never goes below zero, so stray releases (e.g. a key held
// before the context was activated) are absorbed.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::any::Any;
use std::collections::HashSet;

use log::trace;

//=== Internal Dependencies ===============================================

use super::InputBinding;
use crate::core::input::event::{DeviceClass, InputEvent, InputSource};
use crate::core::signal::Signal;

//=== SinglePressBinding ==================================================

/// Logical press/release over overlapping physical holds.
///
/// With two keys bound to "jump", holding both and releasing them in any
/// order yields exactly one `pressed` and one `released`.
pub struct SinglePressBinding {
    sources: HashSet<InputSource>,
    press_count: u32,

    /// Fires when the first matching source goes down.
    pub pressed: Signal<()>,

    /// Fires when the last held matching source goes up.
    pub released: Signal<()>,
}

impl SinglePressBinding {
    pub fn new() -> Self {
        Self {
            sources: HashSet::new(),
            press_count: 0,
            pressed: Signal::new(),
            released: Signal::new(),
        }
    }

    /// Adds a button source. Adding the same source twice has no effect.
    pub fn with_source(mut self, source: InputSource) -> Self {
        self.sources.insert(source);
        self
    }

    /// Number of matching sources currently held.
    pub fn press_count(&self) -> u32 {
        self.press_count
    }

    pub fn is_pressed(&self) -> bool {
        self.press_count > 0
    }
}

impl Default for SinglePressBinding {
    fn default() -> Self {
        Self::new()
    }
}

impl InputBinding for SinglePressBinding {
    fn on_event(&mut self, event: &InputEvent) {
        let InputEvent::Button { source, is_down, .. } = *event else {
            return;
        };
        if !self.sources.contains(&source) {
            return;
        }

        if is_down {
            self.press_count += 1;
            if self.press_count == 1 {
                trace!(target: "input", "Press via {:?}", source);
                self.pressed.emit(&());
            }
        } else if self.press_count > 0 {
            self.press_count -= 1;
            if self.press_count == 0 {
                trace!(target: "input", "Release via {:?}", source);
                self.released.emit(&());
            }
        }
    }

    fn clone_fresh(&self) -> Box<dyn InputBinding> {
        Box::new(Self {
            sources: self.sources.clone(),
            press_count: 0,
            pressed: Signal::new(),
            released: Signal::new(),
        })
    }

    /// Drops every held press without firing `released`.
    fn normalize(&mut self) {
        self.press_count = 0;
    }

    fn accepts(&self, class: DeviceClass) -> bool {
        self.sources.iter().any(|source| source.device_class() == class)
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
