//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes observer signals
//! and user events, translating them into state changes and action sequences. It
//! is the primary control flow coordinator for the navigation bar.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Observers push events onto the [`EventQueue`] as signals arrive
//! 2. The runtime drains the queue and calls [`handle_event`] per event
//! 3. State mutations occur via [`NavState`] methods
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Environmental**: `Scroll` (from the scroll observer, one per frame),
//!   `ViewportResize` (from the viewport classifier)
//! - **User**: `ToggleMenu`, `CloseMenu`
//!
//! # Ordering
//!
//! Events are handled strictly in delivery order. The only coalescing in the
//! system happens upstream in the scroll observer; the handler itself never
//! reorders or batches.

use crate::app::modes::ViewportClass;
use crate::app::{Action, NavState};
use crate::domain::error::Result;
use crate::domain::ScrollSample;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Events triggered by observer signals or user interaction.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The handler processes these sequentially, ensuring
/// deterministic state transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A new scroll sample, published once per animation frame.
    Scroll(ScrollSample),

    /// The viewport was resized.
    ///
    /// Carries the raw width; classification against the configured threshold
    /// happens in the handler so that state transitions and their logs live in
    /// one place.
    ViewportResize {
        /// New viewport width in pixels.
        width: u32,
    },

    /// The user tapped the menu-toggle affordance.
    ToggleMenu,

    /// A mobile panel item was selected or the panel was dismissed.
    CloseMenu,
}

/// Single-threaded FIFO queue connecting observers to the runtime.
///
/// Observers hold a clone and push as signals arrive; the runtime drains it in
/// delivery order. Cheap to clone (shared interior).
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    events: Rc<RefCell<VecDeque<Event>>>,
}

impl EventQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an event at the back of the queue.
    pub fn push(&self, event: Event) {
        self.events.borrow_mut().push_back(event);
    }

    /// Removes and returns the oldest queued event.
    pub fn pop(&self) -> Option<Event> {
        self.events.borrow_mut().pop_front()
    }

    /// Returns `true` when no events are queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}

/// Processes an event, mutates navigation state, and returns actions to execute.
///
/// This is the primary event handler coordinating all state transitions and
/// side effects. It pattern-matches on event types, calls state mutation
/// methods, and collects actions for the runtime.
///
/// # Returns
///
/// A `(changed, actions)` pair: `changed` reports whether the view model
/// differs from before the event (a re-render hint for presentation code);
/// `actions` carries scroll-lock synchronization commands. Well-formed signals
/// never fail; the `Result` keeps the interface uniform with the crate's
/// fallible edges.
///
/// # Tracing
///
/// Each call creates a debug-level span carrying the event type.
pub fn handle_event(state: &mut NavState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Scroll(sample) => {
            let before = state.compute_viewmodel();
            state.on_scroll(*sample);
            let changed = state.compute_viewmodel() != before;

            tracing::trace!(offset = sample.offset, changed, "scroll sample applied");
            Ok((changed, vec![]))
        }
        Event::ViewportResize { width } => {
            let class = ViewportClass::from_width(*width, state.config.narrow_threshold);
            if class == state.viewport {
                tracing::debug!(width, "viewport class unchanged, skipping");
                return Ok((false, vec![]));
            }

            let before = state.compute_viewmodel();
            state.on_viewport_change(class);

            tracing::debug!(width, class = ?class, "viewport class changed");
            Ok((
                state.compute_viewmodel() != before,
                vec![Action::SyncScrollLock {
                    expanded: state.expanded,
                    viewport: class,
                }],
            ))
        }
        Event::ToggleMenu => {
            state.toggle_menu();

            tracing::debug!(expanded = state.expanded, "menu toggled");
            Ok((
                true,
                vec![Action::SyncScrollLock {
                    expanded: state.expanded,
                    viewport: state.viewport,
                }],
            ))
        }
        Event::CloseMenu => {
            let before = state.compute_viewmodel();
            state.close_menu();

            Ok((
                state.compute_viewmodel() != before,
                vec![Action::SyncScrollLock {
                    expanded: false,
                    viewport: state.viewport,
                }],
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;

    fn narrow_state() -> NavState {
        NavState::new(Config::default(), ScrollSample::TOP, ViewportClass::Narrow)
    }

    #[test]
    fn scroll_reports_change_only_when_flags_move() {
        let mut state = narrow_state();

        let (changed, actions) = handle_event(&mut state, &Event::Scroll(ScrollSample::new(10))).unwrap();
        assert!(changed);
        assert!(actions.is_empty());

        // Same derived flags for any positive offset without a banner.
        let (changed, _) = handle_event(&mut state, &Event::Scroll(ScrollSample::new(20))).unwrap();
        assert!(!changed);
    }

    #[test]
    fn resize_to_same_class_is_skipped() {
        let mut state = narrow_state();
        let (changed, actions) = handle_event(&mut state, &Event::ViewportResize { width: 400 }).unwrap();
        assert!(!changed);
        assert!(actions.is_empty());
        assert_eq!(state.viewport, ViewportClass::Narrow);
    }

    #[test]
    fn resize_across_threshold_emits_lock_sync() {
        let mut state = narrow_state();
        state.toggle_menu();

        let (_, actions) = handle_event(&mut state, &Event::ViewportResize { width: 1280 }).unwrap();
        assert_eq!(
            actions,
            vec![Action::SyncScrollLock {
                expanded: false,
                viewport: ViewportClass::Wide,
            }]
        );
        assert!(!state.expanded);
    }

    #[test]
    fn toggle_emits_lock_sync_with_current_viewport() {
        let mut state = narrow_state();

        let (changed, actions) = handle_event(&mut state, &Event::ToggleMenu).unwrap();
        assert!(changed);
        assert_eq!(
            actions,
            vec![Action::SyncScrollLock {
                expanded: true,
                viewport: ViewportClass::Narrow,
            }]
        );
    }

    #[test]
    fn close_on_collapsed_menu_reports_no_change() {
        let mut state = narrow_state();
        let (changed, actions) = handle_event(&mut state, &Event::CloseMenu).unwrap();
        assert!(!changed);
        assert_eq!(actions.len(), 1);
    }

    #[test]
    fn queue_preserves_delivery_order() {
        let queue = EventQueue::new();
        queue.push(Event::ToggleMenu);
        queue.push(Event::CloseMenu);

        assert_eq!(queue.pop(), Some(Event::ToggleMenu));
        assert_eq!(queue.pop(), Some(Event::CloseMenu));
        assert!(queue.is_empty());
    }
}
