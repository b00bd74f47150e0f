//=========================================================================
// Axis Binding
//=========================================================================
//
// Continuous axis fed by analog axes and/or pairs of buttons.
//
// Architecture:
//   Axis sample   → raw_pos += delta (value - previous)
//   Positive btn  → raw_pos ±= 1 (down / up)
//   Negative btn  → raw_pos ∓= 1 (down / up)
//                          ↓
//                 discretize(raw_pos) → {-1, 0, 1} → changed (on transition)
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

//=== Constants ===========================================================

/// Threshold beyond which an accumulated axis counts as fully deflected.
pub const DEFAULT_DEADZONE: f32 = 0.7;

//=== AxisBinding =========================================================

/// Accumulating axis with deadzone discretization.
///
/// Axis sources contribute the difference between their new and previous
/// sample, which lets several physical axes share one binding. Button
/// sources contribute ±1 per transition, so holding a positive and a
/// negative button at the same time cancels out.
///
/// `changed` fires only when the discretized value moves between -1, 0
/// and 1, carrying the new value.
pub struct AxisBinding {
    axes: HashSet<InputSource>,
    positive: HashSet<InputSource>,
    negative: HashSet<InputSource>,
    deadzone: f32,

    raw_pos: f32,
    value: i8,

    /// Fires with the new discretized value on every transition.
    pub changed: Signal<i8>,
}

impl AxisBinding {
    /// Creates an axis with no sources and the default deadzone.
    pub fn new() -> Self {
        Self {
            axes: HashSet::new(),
            positive: HashSet::new(),
            negative: HashSet::new(),
            deadzone: DEFAULT_DEADZONE,
            raw_pos: 0.0,
            value: 0,
            changed: Signal::new(),
        }
    }

    //--- Configuration ----------------------------------------------------

    /// Adds an analog axis source.
    pub fn with_axis(mut self, source: InputSource) -> Self {
        self.axes.insert(source);
        self
    }

    /// Adds a button that pushes the axis towards +1 while held.
    pub fn with_positive(mut self, source: InputSource) -> Self {
        self.positive.insert(source);
        self
    }

    /// Adds a button that pushes the axis towards -1 while held.
    pub fn with_negative(mut self, source: InputSource) -> Self {
        self.negative.insert(source);
        self
    }

    /// Overrides the discretization threshold.
    ///
    /// # Panics
    ///
    /// Panics unless `0.0 < deadzone <= 1.0`.
    pub fn with_deadzone(mut self, deadzone: f32) -> Self {
        assert!(
            deadzone > 0.0 && deadzone <= 1.0,
            "Deadzone must lie in (0, 1], got {}",
            deadzone
        );
        self.deadzone = deadzone;
        self
    }

    //--- Queries ----------------------------------------------------------

    /// Unclamped accumulated position.
    pub fn raw_position(&self) -> f32 {
        self.raw_pos
    }

    /// Accumulated position clamped to `[-1, 1]`.
    pub fn position(&self) -> f32 {
        self.raw_pos.clamp(-1.0, 1.0)
    }

    /// Current discretized value: -1, 0 or 1.
    pub fn value(&self) -> i8 {
        self.value
    }

    //--- Internal Helpers -------------------------------------------------

    /// Exact -1/0/1 positions are taken as-is; anything else goes through
    /// the deadzone threshold.
    fn discretize(&self) -> i8 {
        let raw = self.raw_pos;
        if raw == 0.0 || raw == 1.0 || raw == -1.0 {
            return raw as i8;
        }
        if raw < -self.deadzone {
            -1
        } else if raw > self.deadzone {
            1
        } else {
            0
        }
    }

    fn apply(&mut self, event: &InputEvent) -> bool {
        match *event {
            InputEvent::Axis { source, .. } if self.axes.contains(&source) => {
                self.raw_pos += event.delta();
                true
            }
            InputEvent::Button { source, is_down, .. } => {
                let step = if is_down { 1.0 } else { -1.0 };
                if self.positive.contains(&source) {
                    self.raw_pos += step;
                    true
                } else if self.negative.contains(&source) {
                    self.raw_pos -= step;
                    true
                } else {
                    false
                }
            }
            _ => false,
        }
    }
}

impl Default for AxisBinding {
    fn default() -> Self {
        Self::new()
    }
}

impl InputBinding for AxisBinding {
    fn on_event(&mut self, event: &InputEvent) {
        if !self.apply(event) {
            return;
        }

        let value = self.discretize();
        if value != self.value {
            trace!(target: "input", "Axis {} -> {} (raw {})", self.value, value, self.raw_pos);
            self.value = value;
            self.changed.emit(&value);
        }
    }

    fn clone_fresh(&self) -> Box<dyn InputBinding> {
        Box::new(Self {
            axes: self.axes.clone(),
            positive: self.positive.clone(),
            negative: self.negative.clone(),
            deadzone: self.deadzone,
            raw_pos: 0.0,
            value: 0,
            changed: Signal::new(),
        })
    }

    fn normalize(&mut self) {
        self.raw_pos = 0.0;
        self.value = 0;
    }

    fn accepts(&self, class: DeviceClass) -> bool {
        self.axes
            .iter()
            .chain(&self.positive)
            .chain(&self.negative)
            .any(|source| source.device_class() == class)
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
