//=========================================================================
// Input Context
//=========================================================================
//
// Named set of bindings keyed by semantic role.
//
// Roles: A closed enumeration of what a binding is *for* (mouse buttons,
//        text, horizontal axis...). One binding per role.
// Slots: Registry keys under which a context can be active.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::BTreeMap;
use std::fmt;

use log::trace;

//=== Internal Dependencies ===============================================

use super::binding::InputBinding;
use super::event::InputEvent;

//=== InputRole ===========================================================

/// Purpose of a binding inside a context.
///
/// Ordering is significant: dispatch visits roles in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum InputRole {
    /// Pointer buttons feeding the GUI root.
    MouseButtons,

    /// Printable text feeding the focused widget.
    Text,

    Horizontal,
    Vertical,
    Confirm,
    Cancel,
}

//=== ContextSlot =========================================================

/// Identifies a registry key under which one context is active.
///
/// # Variants
///
/// - `Primary`: Default slot for core gameplay or the main menu
/// - `Custom(u32)`: User-defined slots (overlays, vehicles, editors)
///
/// # Recommended Pattern
///
/// Define semantic constants:
/// ```
/// # use aetheric_ui::prelude::*;
/// const GAMEPLAY: ContextSlot = ContextSlot::Primary;
/// const EDITOR: ContextSlot = ContextSlot::custom(0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum ContextSlot {
    #[default]
    Primary,

    Custom(u32),
}

impl ContextSlot {
    #[inline]
    pub const fn custom(id: u32) -> Self {
        Self::Custom(id)
    }
}

//=== InputContext ========================================================

/// A named mapping from roles to bindings.
///
/// A context only receives events while it is installed in a
/// [`ContextRegistry`](super::ContextRegistry). Swapped out, its bindings
/// keep their accumulated state untouched until it is installed again.
///
/// # Example
///
/// ```
/// # use aetheric_ui::prelude::*;
/// let menu = InputContext::new("menu")
///     .with_binding(InputRole::MouseButtons, MouseKeyBinding::all_buttons())
///     .with_binding(InputRole::Text, TextBinding::new());
///
/// assert!(menu.get::<TextBinding>(InputRole::Text).is_some());
/// ```
pub struct InputContext {
    name: String,
    bindings: BTreeMap<InputRole, Box<dyn InputBinding>>,
}

impl InputContext {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bindings: BTreeMap::new(),
        }
    }

    //--- Binding API ------------------------------------------------------

    /// Builder form of [`bind`](Self::bind).
    pub fn with_binding(mut self, role: InputRole, binding: impl InputBinding) -> Self {
        self.bindings.insert(role, Box::new(binding));
        self
    }

    /// Installs `binding` for `role`, returning the binding it replaces.
    pub fn bind(
        &mut self,
        role: InputRole,
        binding: Box<dyn InputBinding>,
    ) -> Option<Box<dyn InputBinding>> {
        self.bindings.insert(role, binding)
    }

    pub fn unbind(&mut self, role: InputRole) -> Option<Box<dyn InputBinding>> {
        self.bindings.remove(&role)
    }

    pub fn binding(&self, role: InputRole) -> Option<&dyn InputBinding> {
        self.bindings.get(&role).map(|b| b.as_ref())
    }

    /// Typed access to the binding for `role`.
    ///
    /// Returns `None` if the role is unbound or bound to another type.
    pub fn get<B: InputBinding>(&self, role: InputRole) -> Option<&B> {
        self.bindings.get(&role)?.as_any().downcast_ref::<B>()
    }

    pub fn get_mut<B: InputBinding>(&mut self, role: InputRole) -> Option<&mut B> {
        self.bindings.get_mut(&role)?.as_any_mut().downcast_mut::<B>()
    }

    //--- Dispatch ---------------------------------------------------------

    /// Offers `event` to every binding that accepts its device class.
    pub fn dispatch(&mut self, event: &InputEvent) {
        let class = event.device_class();
        for (role, binding) in self.bindings.iter_mut() {
            if binding.accepts(class) {
                trace!(target: "input", "[{}] {:?} ← {:?}", self.name, role, event.source());
                binding.on_event(event);
            }
        }
    }

    /// Forgets held state in every binding without firing releases.
    pub fn normalize(&mut self) {
        for binding in self.bindings.values_mut() {
            binding.normalize();
        }
    }

    /// Copies the matching rules into a new context with zero state and no
    /// subscribers.
    pub fn duplicate(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bindings: self
                .bindings
                .iter()
                .map(|(role, binding)| (*role, binding.clone_fresh()))
                .collect(),
        }
    }

    //--- Queries ----------------------------------------------------------

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Bound roles in dispatch order.
    pub fn roles(&self) -> impl Iterator<Item = InputRole> + '_ {
        self.bindings.keys().copied()
    }
}

impl fmt::Debug for InputContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputContext")
            .field("name", &self.name)
            .field("roles", &self.bindings.keys().collect::<Vec<_>>())
            .finish()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
