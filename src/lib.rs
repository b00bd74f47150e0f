//=========================================================================
// Aetheric UI: Library Root
//
// Input binding contexts and widget dispatch for the Aetheric engine.
//
// Responsibilities:
// - Expose the frontend facade (`Frontend`, `FrontendBuilder`)
// - Expose the input and GUI systems for direct use and extension
// - Bridge Winit window events into the pipeline (`platform`)
//
// Typical usage:
// ```no_run
// use aetheric_ui::prelude::*;
//
// let (mut frontend, mut bridge) = FrontendBuilder::new().build();
// // In the host's Winit handler:
// //   bridge.handle_window_event(&event);
// //   on RedrawRequested: frontend.tick(&bridge) and frontend.draw(..)
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the platform-independent systems (input, GUI, signals).
// `platform` converts Winit events; hosts feed it from their own loop.
//
pub mod core;
pub mod frontend;
pub mod platform;
pub mod prelude;

//--- Public Exports ------------------------------------------------------

pub use frontend::{Frontend, FrontendBuilder, UiSignal};
