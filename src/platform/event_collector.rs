//=========================================================================
// Event Collector
//=========================================================================
//
// Drains platform events once per tick with a bound on how many are taken.
//
// Architecture:
//   Receiver<PlatformEvent> → collect() → frame items → TickControl
//
// Ordering between input batches and focus loss is preserved. Anything
// beyond the bound stays queued for the next tick.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{Receiver, TryRecvError};
use log::{debug, warn};

//=== Internal Dependencies ===============================================

use super::PlatformEvent;
use crate::core::input::event::InputEvent;

//=== Constants ===========================================================

pub const DEFAULT_MAX_EVENTS_PER_TICK: usize = 100;

//=== TickControl =========================================================

/// Update loop control signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickControl {
    Continue,
    Exit,
}

//=== FrameItem ===========================================================

/// One unit of work collected for the current tick, in arrival order.
#[derive(Debug, Clone)]
pub enum FrameItem {
    Inputs(Vec<InputEvent>),
    FocusLost,
}

//=== EventCollector ======================================================

pub struct EventCollector {
    receiver: Receiver<PlatformEvent>,
    max_events: usize,
    items: Vec<FrameItem>,
}

impl EventCollector {
    /// # Panics
    ///
    /// Panics if `max_events` is zero.
    pub fn new(receiver: Receiver<PlatformEvent>, max_events: usize) -> Self {
        assert!(max_events > 0, "Event bound must be positive");
        Self {
            receiver,
            max_events,
            items: Vec::with_capacity(4),
        }
    }

    /// Collects pending platform events, at most `max_events` of them.
    ///
    /// Returns `Exit` when the window closed or every sender is gone.
    pub fn collect(&mut self) -> TickControl {
        self.items.clear();
        let mut drained = 0;

        while drained < self.max_events {
            match self.receiver.try_recv() {
                Ok(event) => {
                    drained += 1;
                    if self.handle_event(event) == TickControl::Exit {
                        return TickControl::Exit;
                    }
                }
                Err(TryRecvError::Disconnected) => {
                    debug!(target: "platform", "Platform channel disconnected");
                    return TickControl::Exit;
                }
                Err(TryRecvError::Empty) => break,
            }
        }

        if drained >= self.max_events {
            warn!(target: "platform", "Event queue backlog: drained {} events this tick", drained);
        }

        TickControl::Continue
    }

    pub fn items(&self) -> &[FrameItem] {
        &self.items
    }

    /// Takes the collected items, leaving the buffer empty.
    pub fn take_items(&mut self) -> Vec<FrameItem> {
        std::mem::take(&mut self.items)
    }

    fn handle_event(&mut self, event: PlatformEvent) -> TickControl {
        match event {
            PlatformEvent::Inputs(batch) => {
                if !batch.is_empty() {
                    self.items.push(FrameItem::Inputs(batch));
                }
                TickControl::Continue
            }
            PlatformEvent::FocusLost => {
                self.items.push(FrameItem::FocusLost);
                TickControl::Continue
            }
            PlatformEvent::WindowClosed => TickControl::Exit,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
