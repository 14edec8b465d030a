//! Viewport width observation and classification.
//!
//! This module implements [`ViewportClassifier`], which subscribes to the host
//! window's resize signal and maintains the current [`ViewportClass`]. The
//! classification updates synchronously inside the resize listener (the
//! controller consults it at toggle time, so it must never lag behind the last
//! delivered signal) and a [`Event::ViewportResize`](crate::app::Event) is
//! queued for the state machine. No debouncing is applied; unchanged
//! classifications are cheap to skip downstream.

use crate::app::{Event, EventQueue, ViewportClass};
use crate::host::{Subscription, WindowHooks};
use std::cell::Cell;
use std::rc::Rc;

/// Classifies the viewport as Narrow or Wide against a fixed breakpoint.
///
/// On construction, seeds the class from the window's current width and
/// registers a resize listener. Dropping the classifier deregisters the
/// listener.
pub struct ViewportClassifier {
    current: Rc<Cell<ViewportClass>>,
    threshold: u32,
    subscription: Option<Subscription>,
}

impl ViewportClassifier {
    /// Attaches the classifier to a window, publishing resizes onto `queue`.
    #[must_use]
    pub fn attach(window: &Rc<dyn WindowHooks>, threshold: u32, queue: EventQueue) -> Self {
        let current = Rc::new(Cell::new(ViewportClass::from_width(
            window.viewport_width(),
            threshold,
        )));

        let listener: Rc<dyn Fn(u32)> = {
            let current = Rc::clone(&current);
            Rc::new(move |width| {
                let class = ViewportClass::from_width(width, threshold);
                current.set(class);
                queue.push(Event::ViewportResize { width });

                tracing::trace!(width, class = ?class, "resize signal observed");
            })
        };

        let subscription = window.on_resize(listener);

        Self {
            current,
            threshold,
            subscription: Some(subscription),
        }
    }

    /// Classifies an arbitrary width against this classifier's breakpoint.
    #[must_use]
    pub const fn classify(&self, width: u32) -> ViewportClass {
        ViewportClass::from_width(width, self.threshold)
    }

    /// Current classification, synchronous.
    ///
    /// Reflects the last delivered resize signal (or the mount-time seed),
    /// even if the corresponding event has not been pumped yet.
    #[must_use]
    pub fn current(&self) -> ViewportClass {
        self.current.get()
    }

    /// Deregisters the resize listener.
    pub fn detach(&mut self) {
        self.subscription = None;
    }
}

impl std::fmt::Debug for ViewportClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewportClassifier")
            .field("current", &self.current.get())
            .field("threshold", &self.threshold)
            .field("attached", &self.subscription.is_some())
            .finish()
    }
}
