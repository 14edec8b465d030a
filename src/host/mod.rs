//! Host environment abstraction.
//!
//! This module defines the seam between the navigation state machine and
//! whatever environment hosts it: a browser window, a native shell, or the
//! in-process simulation used by tests and the replay harness. The controller
//! never talks to a concrete window; it talks to these traits, so embeddings
//! can supply real bindings and tests can supply counting fakes.
//!
//! # Resource discipline
//!
//! Listener registration is scoped: every `on_*` call returns a
//! [`Subscription`] whose drop deregisters the listener exactly once. The
//! page-wide scroll lock is a singleton resource behind [`ScrollLockHandle`];
//! only the lock coordinator may call it.
//!
//! # Modules
//!
//! - [`sim`]: Deterministic in-process window and lock fakes

pub mod sim;

use std::rc::Rc;

/// Window-level signals and primitives supplied by the hosting environment.
///
/// All callbacks run on the single logical thread that drives the navigation
/// bar; implementations must deliver signals in the order they occur and must
/// not invoke a listener after its subscription is dropped.
pub trait WindowHooks {
    /// Registers a scroll-signal listener.
    ///
    /// The listener is invoked for every scroll signal (the observer applies
    /// its own per-frame coalescing). Returns a disposer that deregisters the
    /// listener when dropped.
    fn on_scroll(&self, listener: Rc<dyn Fn()>) -> Subscription;

    /// Registers a resize-signal listener, invoked with the new width.
    fn on_resize(&self, listener: Rc<dyn Fn(u32)>) -> Subscription;

    /// Schedules a callback for the next animation frame.
    ///
    /// Callbacks scheduled during a frame run on the following frame, matching
    /// browser `requestAnimationFrame` semantics.
    fn request_frame(&self, callback: Box<dyn FnOnce()>);

    /// Current vertical scroll offset, as the host reports it.
    fn scroll_offset(&self) -> f64;

    /// Current viewport width in pixels.
    fn viewport_width(&self) -> u32;
}

/// The page-wide scroll-disable resource.
///
/// A singleton per page: acquiring disables body scrolling, releasing restores
/// it. Implementations need not be idempotent; the lock coordinator guarantees
/// acquire/release calls are strictly alternating.
pub trait ScrollLockHandle {
    /// Disables body scrolling.
    fn acquire(&self);

    /// Restores body scrolling.
    fn release(&self);
}

/// Scoped handle for a registered listener.
///
/// Holds the disposer returned by the host; dropping the subscription (or
/// calling [`Subscription::cancel`]) deregisters the listener. The disposer
/// runs exactly once on every exit path, so re-initialization can never
/// accumulate duplicate listeners.
pub struct Subscription {
    dispose: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Wraps a disposer closure.
    #[must_use]
    pub fn new(dispose: impl FnOnce() + 'static) -> Self {
        Self {
            dispose: Some(Box::new(dispose)),
        }
    }

    /// Deregisters the listener immediately.
    ///
    /// Equivalent to dropping the subscription; provided for call sites where
    /// an explicit verb reads better than a scope end.
    pub fn cancel(mut self) {
        self.run_disposer();
    }

    fn run_disposer(&mut self) {
        if let Some(dispose) = self.dispose.take() {
            dispose();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run_disposer();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.dispose.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn subscription_runs_disposer_once_on_drop() {
        let count = Rc::new(Cell::new(0));
        {
            let count = Rc::clone(&count);
            let _sub = Subscription::new(move || count.set(count.get() + 1));
        }
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn cancel_then_drop_does_not_double_dispose() {
        let count = Rc::new(Cell::new(0));
        let sub = {
            let count = Rc::clone(&count);
            Subscription::new(move || count.set(count.get() + 1))
        };
        sub.cancel();
        assert_eq!(count.get(), 1);
    }
}
