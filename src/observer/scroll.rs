//! Scroll observation with per-frame sample coalescing.
//!
//! This module implements [`ScrollObserver`], which subscribes to the host
//! window's scroll signal and publishes at most one [`ScrollSample`] per
//! animation frame. Scroll signals can arrive far faster than frames render;
//! the observer schedules a single frame callback per burst and reads the
//! offset when the frame runs, so intermediate positions are dropped
//! (last-value-wins). This is an explicit rate-limiting policy.
//!
//! The observer never touches navigation state. It publishes
//! [`Event::Scroll`](crate::app::Event) onto the queue and keeps the latest
//! sample available for synchronous reads.

use crate::app::{Event, EventQueue};
use crate::domain::ScrollSample;
use crate::host::{Subscription, WindowHooks};
use std::cell::Cell;
use std::rc::Rc;

/// Samples the window's scroll position once per animation frame.
///
/// On construction, registers a scroll listener and seeds the latest sample
/// from the window's current offset. On teardown (drop or
/// [`ScrollObserver::detach`]), the listener is deregistered and any pending
/// frame callback is disarmed; nothing publishes after teardown.
pub struct ScrollObserver {
    latest: Rc<Cell<ScrollSample>>,
    alive: Rc<Cell<bool>>,
    subscription: Option<Subscription>,
}

impl ScrollObserver {
    /// Attaches the observer to a window, publishing samples onto `queue`.
    ///
    /// Seeds the latest sample from the window's current offset, so a page
    /// restored mid-scroll reports its real position before the first signal.
    #[must_use]
    pub fn attach(window: &Rc<dyn WindowHooks>, queue: EventQueue) -> Self {
        let latest = Rc::new(Cell::new(ScrollSample::from_page_offset(window.scroll_offset())));
        let alive = Rc::new(Cell::new(true));
        let frame_pending = Rc::new(Cell::new(false));

        let listener: Rc<dyn Fn()> = {
            let window = Rc::clone(window);
            let latest = Rc::clone(&latest);
            let alive = Rc::clone(&alive);
            let frame_pending = Rc::clone(&frame_pending);

            Rc::new(move || {
                // One frame callback per burst; further signals before the
                // frame runs coalesce into that read.
                if frame_pending.replace(true) {
                    return;
                }

                let window = Rc::clone(&window);
                let latest = Rc::clone(&latest);
                let alive = Rc::clone(&alive);
                let frame_pending = Rc::clone(&frame_pending);
                let queue = queue.clone();

                let reader = Rc::clone(&window);
                window.request_frame(Box::new(move || {
                    frame_pending.set(false);
                    if !alive.get() {
                        return;
                    }

                    let sample = ScrollSample::from_page_offset(reader.scroll_offset());
                    latest.set(sample);
                    queue.push(Event::Scroll(sample));

                    tracing::trace!(offset = sample.offset, "scroll sample published");
                }));
            })
        };

        let subscription = window.on_scroll(listener);

        Self {
            latest,
            alive,
            subscription: Some(subscription),
        }
    }

    /// Latest published sample (or the mount-time seed), synchronous.
    #[must_use]
    pub fn current(&self) -> ScrollSample {
        self.latest.get()
    }

    /// Deregisters the listener and disarms any pending frame callback.
    pub fn detach(&mut self) {
        self.alive.set(false);
        self.subscription = None;
    }
}

impl Drop for ScrollObserver {
    fn drop(&mut self) {
        self.alive.set(false);
    }
}

impl std::fmt::Debug for ScrollObserver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollObserver")
            .field("latest", &self.latest.get())
            .field("attached", &self.subscription.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::sim::SimWindow;

    fn setup(initial_offset: f64) -> (SimWindow, Rc<dyn WindowHooks>, EventQueue) {
        let sim = SimWindow::new(initial_offset, 1280);
        let window: Rc<dyn WindowHooks> = Rc::new(sim.clone());
        (sim, window, EventQueue::new())
    }

    fn drain(queue: &EventQueue) -> Vec<Event> {
        let mut events = vec![];
        while let Some(event) = queue.pop() {
            events.push(event);
        }
        events
    }

    #[test]
    fn seeds_current_sample_from_window() {
        let (_sim, window, queue) = setup(120.0);
        let observer = ScrollObserver::attach(&window, queue);
        assert_eq!(observer.current(), ScrollSample::new(120));
    }

    #[test]
    fn coalesces_signals_within_one_frame_last_value_wins() {
        let (sim, window, queue) = setup(0.0);
        let observer = ScrollObserver::attach(&window, queue.clone());

        sim.set_scroll_offset(10.0);
        sim.set_scroll_offset(25.0);
        sim.set_scroll_offset(40.0);
        assert_eq!(sim.pending_frame_callbacks(), 1);
        assert!(queue.is_empty());

        sim.run_frame();
        assert_eq!(drain(&queue), vec![Event::Scroll(ScrollSample::new(40))]);
        assert_eq!(observer.current(), ScrollSample::new(40));
    }

    #[test]
    fn publishes_again_on_the_next_burst() {
        let (sim, window, queue) = setup(0.0);
        let _observer = ScrollObserver::attach(&window, queue.clone());

        sim.set_scroll_offset(10.0);
        sim.run_frame();
        sim.set_scroll_offset(20.0);
        sim.run_frame();

        assert_eq!(
            drain(&queue),
            vec![
                Event::Scroll(ScrollSample::new(10)),
                Event::Scroll(ScrollSample::new(20)),
            ]
        );
    }

    #[test]
    fn nothing_publishes_after_detach() {
        let (sim, window, queue) = setup(0.0);
        let mut observer = ScrollObserver::attach(&window, queue.clone());

        // Frame already scheduled when teardown happens.
        sim.set_scroll_offset(10.0);
        observer.detach();
        assert_eq!(sim.scroll_listener_count(), 0);

        sim.run_frame();
        assert!(queue.is_empty());
        assert_eq!(observer.current(), ScrollSample::TOP);

        // And no new frames are scheduled after the listener is gone.
        sim.set_scroll_offset(20.0);
        assert_eq!(sim.pending_frame_callbacks(), 0);
    }

    #[test]
    fn drop_disarms_pending_frame() {
        let (sim, window, queue) = setup(0.0);
        let observer = ScrollObserver::attach(&window, queue.clone());

        sim.set_scroll_offset(10.0);
        drop(observer);

        sim.run_frame();
        assert!(queue.is_empty());
    }
}
