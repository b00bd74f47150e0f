//=========================================================================
// Core Systems
//
// Platform-independent half of the pipeline.
//
// Responsibilities:
// - `input`: raw events, bindings, contexts and the active-context registry
// - `gui`: widget tree, layout and the root dispatcher
// - `signal`: the callback lists both halves use to talk upward
//
// Nothing in here touches Winit or a channel. The frontend and platform
// modules own the plumbing between the OS and these systems.
//
//=========================================================================

pub mod gui;
pub mod input;
pub mod signal;
