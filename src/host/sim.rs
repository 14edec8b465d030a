//! Deterministic in-process host fakes.
//!
//! This module provides [`SimWindow`] and [`SimScrollLock`], concrete
//! implementations of the host traits with no real environment behind them.
//! Signals are injected explicitly and animation frames advance only when the
//! driver pumps them, which makes signal ordering and frame coalescing fully
//! deterministic. The replay harness drives the runtime through these types,
//! and tests use them to assert listener and lock bookkeeping.

use super::{ScrollLockHandle, Subscription, WindowHooks};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

/// Simulated window with listener registries and a manual frame pump.
///
/// Clones share the same underlying window. Scroll and resize signals are
/// injected via [`SimWindow::set_scroll_offset`] and
/// [`SimWindow::set_viewport_width`]; frame callbacks queue until
/// [`SimWindow::run_frame`] is called.
#[derive(Clone, Default)]
pub struct SimWindow {
    inner: Rc<RefCell<WindowState>>,
}

#[derive(Default)]
struct WindowState {
    scroll_offset: f64,
    viewport_width: u32,
    next_listener_id: u64,
    scroll_listeners: Vec<(u64, Rc<dyn Fn()>)>,
    resize_listeners: Vec<(u64, Rc<dyn Fn(u32)>)>,
    frame_queue: VecDeque<Box<dyn FnOnce()>>,
}

impl SimWindow {
    /// Creates a window with an initial scroll offset and viewport width.
    #[must_use]
    pub fn new(scroll_offset: f64, viewport_width: u32) -> Self {
        let window = Self::default();
        {
            let mut state = window.inner.borrow_mut();
            state.scroll_offset = scroll_offset;
            state.viewport_width = viewport_width;
        }
        window
    }

    /// Moves the page to a new scroll offset and fires the scroll signal.
    pub fn set_scroll_offset(&self, offset: f64) {
        let listeners: Vec<Rc<dyn Fn()>> = {
            let mut state = self.inner.borrow_mut();
            state.scroll_offset = offset;
            state.scroll_listeners.iter().map(|(_, l)| Rc::clone(l)).collect()
        };
        for listener in listeners {
            listener();
        }
    }

    /// Resizes the viewport and fires the resize signal.
    pub fn set_viewport_width(&self, width: u32) {
        let listeners: Vec<Rc<dyn Fn(u32)>> = {
            let mut state = self.inner.borrow_mut();
            state.viewport_width = width;
            state.resize_listeners.iter().map(|(_, l)| Rc::clone(l)).collect()
        };
        for listener in listeners {
            listener(width);
        }
    }

    /// Runs one animation frame: every callback queued so far executes once.
    ///
    /// Callbacks scheduled while the frame runs land on the next frame.
    pub fn run_frame(&self) {
        let callbacks: Vec<Box<dyn FnOnce()>> = {
            let mut state = self.inner.borrow_mut();
            state.frame_queue.drain(..).collect()
        };
        for callback in callbacks {
            callback();
        }
    }

    /// Number of currently registered scroll listeners.
    #[must_use]
    pub fn scroll_listener_count(&self) -> usize {
        self.inner.borrow().scroll_listeners.len()
    }

    /// Number of currently registered resize listeners.
    #[must_use]
    pub fn resize_listener_count(&self) -> usize {
        self.inner.borrow().resize_listeners.len()
    }

    /// Number of frame callbacks waiting for the next [`SimWindow::run_frame`].
    #[must_use]
    pub fn pending_frame_callbacks(&self) -> usize {
        self.inner.borrow().frame_queue.len()
    }

    fn subscription_for(inner: &Rc<RefCell<WindowState>>, id: u64, scroll: bool) -> Subscription {
        let weak: Weak<RefCell<WindowState>> = Rc::downgrade(inner);
        Subscription::new(move || {
            if let Some(state) = weak.upgrade() {
                let mut state = state.borrow_mut();
                if scroll {
                    state.scroll_listeners.retain(|(lid, _)| *lid != id);
                } else {
                    state.resize_listeners.retain(|(lid, _)| *lid != id);
                }
            }
        })
    }
}

impl WindowHooks for SimWindow {
    fn on_scroll(&self, listener: Rc<dyn Fn()>) -> Subscription {
        let id = {
            let mut state = self.inner.borrow_mut();
            let id = state.next_listener_id;
            state.next_listener_id += 1;
            state.scroll_listeners.push((id, listener));
            id
        };
        Self::subscription_for(&self.inner, id, true)
    }

    fn on_resize(&self, listener: Rc<dyn Fn(u32)>) -> Subscription {
        let id = {
            let mut state = self.inner.borrow_mut();
            let id = state.next_listener_id;
            state.next_listener_id += 1;
            state.resize_listeners.push((id, listener));
            id
        };
        Self::subscription_for(&self.inner, id, false)
    }

    fn request_frame(&self, callback: Box<dyn FnOnce()>) {
        self.inner.borrow_mut().frame_queue.push_back(callback);
    }

    fn scroll_offset(&self) -> f64 {
        self.inner.borrow().scroll_offset
    }

    fn viewport_width(&self) -> u32 {
        self.inner.borrow().viewport_width
    }
}

impl std::fmt::Debug for SimWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.inner.borrow();
        f.debug_struct("SimWindow")
            .field("scroll_offset", &state.scroll_offset)
            .field("viewport_width", &state.viewport_width)
            .field("scroll_listeners", &state.scroll_listeners.len())
            .field("resize_listeners", &state.resize_listeners.len())
            .field("pending_frames", &state.frame_queue.len())
            .finish()
    }
}

/// Counting scroll-lock resource.
///
/// Tracks acquire/release calls and the resulting locked state so tests can
/// assert the lock invariant and the coordinator's idempotence. Clones share
/// the same counters.
#[derive(Debug, Clone, Default)]
pub struct SimScrollLock {
    inner: Rc<RefCell<LockStats>>,
}

#[derive(Debug, Default)]
struct LockStats {
    acquires: u32,
    releases: u32,
    locked: bool,
}

impl SimScrollLock {
    /// Creates an unlocked resource with zeroed counters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether body scrolling is currently disabled.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.inner.borrow().locked
    }

    /// Total number of acquire calls observed.
    #[must_use]
    pub fn acquire_count(&self) -> u32 {
        self.inner.borrow().acquires
    }

    /// Total number of release calls observed.
    #[must_use]
    pub fn release_count(&self) -> u32 {
        self.inner.borrow().releases
    }
}

impl ScrollLockHandle for SimScrollLock {
    fn acquire(&self) {
        let mut stats = self.inner.borrow_mut();
        stats.acquires += 1;
        stats.locked = true;
    }

    fn release(&self) {
        let mut stats = self.inner.borrow_mut();
        stats.releases += 1;
        stats.locked = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn dropping_subscription_removes_listener() {
        let window = SimWindow::new(0.0, 1280);
        let fired = Rc::new(Cell::new(0u32));

        let sub = {
            let fired = Rc::clone(&fired);
            window.on_scroll(Rc::new(move || fired.set(fired.get() + 1)))
        };
        assert_eq!(window.scroll_listener_count(), 1);

        window.set_scroll_offset(10.0);
        assert_eq!(fired.get(), 1);

        drop(sub);
        assert_eq!(window.scroll_listener_count(), 0);

        window.set_scroll_offset(20.0);
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn frames_queued_during_a_frame_run_on_the_next_one() {
        let window = SimWindow::new(0.0, 1280);
        let ran = Rc::new(Cell::new(0u32));

        {
            let window_inner = window.clone();
            let ran = Rc::clone(&ran);
            window.request_frame(Box::new(move || {
                ran.set(ran.get() + 1);
                let ran = Rc::clone(&ran);
                window_inner.request_frame(Box::new(move || ran.set(ran.get() + 1)));
            }));
        }

        window.run_frame();
        assert_eq!(ran.get(), 1);
        assert_eq!(window.pending_frame_callbacks(), 1);

        window.run_frame();
        assert_eq!(ran.get(), 2);
    }

    #[test]
    fn resize_listeners_receive_the_new_width() {
        let window = SimWindow::new(0.0, 1280);
        let seen = Rc::new(Cell::new(0u32));

        let _sub = {
            let seen = Rc::clone(&seen);
            window.on_resize(Rc::new(move |width| seen.set(width)))
        };

        window.set_viewport_width(720);
        assert_eq!(seen.get(), 720);
        assert_eq!(window.viewport_width(), 720);
    }

    #[test]
    fn lock_counters_track_calls() {
        let lock = SimScrollLock::new();
        lock.acquire();
        lock.acquire();
        lock.release();

        assert_eq!(lock.acquire_count(), 2);
        assert_eq!(lock.release_count(), 1);
        assert!(!lock.is_locked());
    }
}
