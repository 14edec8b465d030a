//! Navigation bar runtime: assembly, event pumping, and teardown.
//!
//! This module wires the observers, the state machine, and the lock
//! coordinator into a single [`Navbar`] owned by the embedding. The embedding
//! delivers window signals (or lets real bindings do so), then calls
//! [`Navbar::pump`] to drain queued events through the handler in delivery
//! order; user interaction goes through [`Navbar::toggle_menu`] and
//! [`Navbar::close_menu`], which pump synchronously.
//!
//! # Lifecycle
//!
//! [`Navbar::mount`] registers both window listeners and seeds state from the
//! window's current readings. [`Navbar::unmount`] (or an implicit drop)
//! deregisters the listeners, disarms any pending frame callback, and releases
//! the scroll lock unconditionally. Registration is paired 1:1 with the
//! navbar's lifetime, so re-mounting can never accumulate duplicate listeners.
//!
//! # Single ownership
//!
//! The navbar owns the only [`ScrollLockCoordinator`] for its page; the
//! handler emits lock-sync actions and the runtime executes them here, so no
//! other code path touches the lock resource.

use crate::app::{handle_event, Action, EventQueue, Event, NavState, ViewportClass};
use crate::domain::error::Result;
use crate::domain::ScrollSample;
use crate::host::{ScrollLockHandle, WindowHooks};
use crate::lock::ScrollLockCoordinator;
use crate::observer::{ScrollObserver, ViewportClassifier};
use crate::ui::NavViewModel;
use crate::Config;
use std::rc::Rc;

/// A mounted navigation bar: observers, state machine, and lock coordinator.
///
/// Constructed via [`Navbar::mount`]; torn down via [`Navbar::unmount`] or
/// drop. All operations are synchronous reactions on the single logical
/// thread that delivers window signals.
#[derive(Debug)]
pub struct Navbar {
    state: NavState,
    queue: EventQueue,
    scroll: ScrollObserver,
    viewport: ViewportClassifier,
    lock: ScrollLockCoordinator,
}

impl Navbar {
    /// Mounts the navigation bar on a host window.
    ///
    /// Attaches the scroll observer and viewport classifier, seeds state from
    /// their initial readings (a page restored mid-scroll starts detached),
    /// and wraps the injected lock resource in the page's sole coordinator.
    #[must_use]
    pub fn mount(
        window: &Rc<dyn WindowHooks>,
        lock_handle: Rc<dyn ScrollLockHandle>,
        config: Config,
    ) -> Self {
        let queue = EventQueue::new();
        let scroll = ScrollObserver::attach(window, queue.clone());
        let viewport = ViewportClassifier::attach(window, config.narrow_threshold, queue.clone());

        let state = NavState::new(config, scroll.current(), viewport.current());

        tracing::debug!(
            scroll_offset = state.scroll_offset.offset,
            viewport = ?state.viewport,
            "navbar mounted"
        );

        Self {
            state,
            queue,
            scroll,
            viewport,
            lock: ScrollLockCoordinator::new(lock_handle),
        }
    }

    /// Drains queued events through the handler in delivery order.
    ///
    /// Executes every resulting action. Returns `true` if any event changed
    /// the view model (the embedding should re-render).
    pub fn pump(&mut self) -> Result<bool> {
        let mut changed = false;
        while let Some(event) = self.queue.pop() {
            let (event_changed, actions) = handle_event(&mut self.state, &event)?;
            changed |= event_changed;
            for action in actions {
                self.run_action(action);
            }
        }
        Ok(changed)
    }

    /// Flips the mobile menu and processes the transition synchronously.
    ///
    /// Any window signals already queued are handled first, preserving
    /// delivery order.
    pub fn toggle_menu(&mut self) -> Result<bool> {
        self.queue.push(Event::ToggleMenu);
        self.pump()
    }

    /// Closes the mobile menu (panel item selected or dismissed).
    pub fn close_menu(&mut self) -> Result<bool> {
        self.queue.push(Event::CloseMenu);
        self.pump()
    }

    /// Presentation-ready snapshot of the derived flags.
    #[must_use]
    pub fn viewmodel(&self) -> NavViewModel {
        self.state.compute_viewmodel()
    }

    /// Latest scroll sample published by the observer.
    #[must_use]
    pub fn scroll_position(&self) -> ScrollSample {
        self.scroll.current()
    }

    /// Current viewport classification, synchronous.
    #[must_use]
    pub fn viewport_class(&self) -> ViewportClass {
        self.viewport.current()
    }

    /// Read access to the underlying state container.
    #[must_use]
    pub const fn state(&self) -> &NavState {
        &self.state
    }

    /// Tears the navigation bar down explicitly.
    ///
    /// Deregisters both listeners, disarms pending frame callbacks, and
    /// releases the scroll lock regardless of last-known state. Dropping the
    /// navbar performs the same cleanup; this method exists for call sites
    /// that want the teardown to be visible.
    pub fn unmount(mut self) {
        tracing::debug!("navbar unmounting");
        self.scroll.detach();
        self.viewport.detach();
        self.lock.release_now();
    }

    fn run_action(&mut self, action: Action) {
        match action {
            Action::SyncScrollLock { expanded, viewport } => {
                self.lock.sync(expanded, viewport);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::sim::{SimScrollLock, SimWindow};

    fn mounted(width: u32) -> (SimWindow, SimScrollLock, Navbar) {
        let sim = SimWindow::new(0.0, width);
        let lock = SimScrollLock::new();
        let window: Rc<dyn WindowHooks> = Rc::new(sim.clone());
        let navbar = Navbar::mount(&window, Rc::new(lock.clone()), Config::default());
        (sim, lock, navbar)
    }

    #[test]
    fn mount_registers_exactly_one_listener_per_signal() {
        let (sim, _lock, _navbar) = mounted(1280);
        assert_eq!(sim.scroll_listener_count(), 1);
        assert_eq!(sim.resize_listener_count(), 1);
    }

    #[test]
    fn toggle_on_narrow_viewport_locks_scrolling() {
        let (_sim, lock, mut navbar) = mounted(600);

        navbar.toggle_menu().unwrap();
        assert!(navbar.viewmodel().expanded);
        assert!(lock.is_locked());

        navbar.toggle_menu().unwrap();
        assert!(!lock.is_locked());
    }

    #[test]
    fn toggle_on_wide_viewport_flips_flag_without_locking() {
        let (_sim, lock, mut navbar) = mounted(1280);

        navbar.toggle_menu().unwrap();
        assert!(navbar.viewmodel().expanded);
        assert!(!lock.is_locked());
        assert_eq!(lock.acquire_count(), 0);
    }

    #[test]
    fn resize_to_wide_collapses_menu_and_releases_lock() {
        let (sim, lock, mut navbar) = mounted(600);
        navbar.toggle_menu().unwrap();
        assert!(lock.is_locked());

        sim.set_viewport_width(1440);
        navbar.pump().unwrap();

        assert!(!navbar.viewmodel().expanded);
        assert!(!lock.is_locked());
    }

    #[test]
    fn unmount_releases_lock_and_listeners() {
        let (sim, lock, mut navbar) = mounted(600);
        navbar.toggle_menu().unwrap();
        assert!(lock.is_locked());

        navbar.unmount();
        assert!(!lock.is_locked());
        assert_eq!(sim.scroll_listener_count(), 0);
        assert_eq!(sim.resize_listener_count(), 0);
    }

    #[test]
    fn implicit_drop_is_as_safe_as_unmount() {
        let (sim, lock, mut navbar) = mounted(600);
        navbar.toggle_menu().unwrap();

        drop(navbar);
        assert!(!lock.is_locked());
        assert_eq!(sim.scroll_listener_count(), 0);
        assert_eq!(sim.resize_listener_count(), 0);
    }

    #[test]
    fn remounting_does_not_accumulate_listeners() {
        let sim = SimWindow::new(0.0, 600);
        let window: Rc<dyn WindowHooks> = Rc::new(sim.clone());

        for _ in 0..3 {
            let navbar = Navbar::mount(
                &window,
                Rc::new(SimScrollLock::new()),
                Config::default(),
            );
            assert_eq!(sim.scroll_listener_count(), 1);
            drop(navbar);
        }
        assert_eq!(sim.scroll_listener_count(), 0);
    }
}
