//=========================================================================
// Signal
//=========================================================================
//
// Ordered observer list used by bindings and widgets to publish events.
//
// Architecture:
//   connect(FnMut(&T)) → Vec<Box<dyn FnMut>> → emit(&T) → every slot, in order
//
// Subscribers run synchronously on the dispatch thread. An empty signal
// is a no-op on emit.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;

//=== Signal ==============================================================

/// Multicast callback list.
///
/// Subscribers are invoked in the order they were connected. Signals are
/// never cloned along with their owner: a freshly cloned binding or widget
/// starts with an empty list.
pub struct Signal<T> {
    slots: Vec<Box<dyn FnMut(&T)>>,
}

impl<T> Signal<T> {
    /// Creates a signal with no subscribers.
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Appends a subscriber and returns the new subscriber count.
    pub fn connect<F>(&mut self, slot: F) -> usize
    where
        F: FnMut(&T) + 'static,
    {
        self.slots.push(Box::new(slot));
        self.slots.len()
    }

    /// Invokes every subscriber with `value`.
    pub fn emit(&mut self, value: &T) {
        for slot in &mut self.slots {
            slot(value);
        }
    }

    /// Drops all subscribers.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl<T> Default for Signal<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("subscribers", &self.slots.len())
            .finish()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn emit_on_empty_signal_is_noop() {
        let mut signal = Signal::<i32>::new();
        signal.emit(&5);
        assert!(signal.is_empty());
    }

    #[test]
    fn subscribers_run_in_connection_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut signal = Signal::<i32>::new();

        let first = Rc::clone(&log);
        signal.connect(move |v| first.borrow_mut().push(("first", *v)));
        let second = Rc::clone(&log);
        let count = signal.connect(move |v| second.borrow_mut().push(("second", *v)));

        assert_eq!(count, 2);
        signal.emit(&7);

        assert_eq!(*log.borrow(), vec![("first", 7), ("second", 7)]);
    }

    #[test]
    fn clear_drops_subscribers() {
        let hits = Rc::new(RefCell::new(0));
        let mut signal = Signal::<()>::new();
        let seen_by = Rc::clone(&hits);
        signal.connect(move |_| *seen_by.borrow_mut() += 1);

        signal.clear();
        signal.emit(&());

        assert_eq!(*hits.borrow(), 0);
        assert_eq!(signal.len(), 0);
    }

    #[test]
    fn debug_reports_subscriber_count() {
        let mut signal = Signal::<u8>::new();
        signal.connect(|_| {});
        assert!(format!("{:?}", signal).contains("subscribers: 1"));
    }
}
