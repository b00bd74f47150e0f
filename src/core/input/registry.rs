//=========================================================================
// Context Registry
//=========================================================================
//
// Holds the active input context for each slot and routes raw events.
//
// Architecture:
//   InputEvent → ContextRegistry::dispatch → active contexts (slot order)
//                                            → InputContext::dispatch
//
// Activation is a swap: the previous context is handed back to the
// caller, who keeps it until it should be restored. Nothing is kept on a
// stack here.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::BTreeMap;

use log::debug;

//=== Internal Dependencies ===============================================

use super::context::{ContextSlot, InputContext};
use super::event::InputEvent;

//=== ContextRegistry =====================================================

/// Active contexts keyed by slot.
#[derive(Debug, Default)]
pub struct ContextRegistry {
    active: BTreeMap<ContextSlot, InputContext>,
}

impl ContextRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    //--- Activation -------------------------------------------------------

    /// Installs `context` under `slot`, returning the context it replaced.
    ///
    /// ```
    /// # use aetheric_ui::prelude::*;
    /// let mut registry = ContextRegistry::new();
    /// registry.activate(ContextSlot::Primary, InputContext::new("game"));
    ///
    /// // Open a menu, remembering what to restore.
    /// let saved = registry.activate(ContextSlot::Primary, InputContext::new("menu"));
    ///
    /// // Close it again.
    /// if let Some(game) = saved {
    ///     registry.activate(ContextSlot::Primary, game);
    /// }
    /// assert_eq!(registry.active(ContextSlot::Primary).unwrap().name(), "game");
    /// ```
    pub fn activate(&mut self, slot: ContextSlot, context: InputContext) -> Option<InputContext> {
        debug!(target: "input", "Activating context '{}' in {:?}", context.name(), slot);
        self.active.insert(slot, context)
    }

    /// Removes and returns the context active in `slot`.
    pub fn deactivate(&mut self, slot: ContextSlot) -> Option<InputContext> {
        let removed = self.active.remove(&slot);
        if let Some(ctx) = &removed {
            debug!(target: "input", "Deactivated context '{}' in {:?}", ctx.name(), slot);
        }
        removed
    }

    pub fn active(&self, slot: ContextSlot) -> Option<&InputContext> {
        self.active.get(&slot)
    }

    pub fn active_mut(&mut self, slot: ContextSlot) -> Option<&mut InputContext> {
        self.active.get_mut(&slot)
    }

    pub fn is_active(&self, slot: ContextSlot) -> bool {
        self.active.contains_key(&slot)
    }

    /// Occupied slots in dispatch order.
    pub fn slots(&self) -> impl Iterator<Item = ContextSlot> + '_ {
        self.active.keys().copied()
    }

    //--- Dispatch ---------------------------------------------------------

    /// Delivers `event` to every active context.
    pub fn dispatch(&mut self, event: &InputEvent) {
        for context in self.active.values_mut() {
            context.dispatch(event);
        }
    }

    /// Normalizes every active context. Inactive contexts are untouched.
    pub fn normalize_all(&mut self) {
        debug!(target: "input", "Normalizing {} active context(s)", self.active.len());
        for context in self.active.values_mut() {
            context.normalize();
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
