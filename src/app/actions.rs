//! Actions representing side effects to be executed by the runtime.
//!
//! This module defines the [`Action`] type, which represents imperative commands
//! produced by the event handler after processing a signal or user event.
//! Actions bridge pure state transformations and effectful operations, which
//! in this crate means synchronizing the page-wide scroll lock.
//!
//! # Architecture
//!
//! The event handler returns a `Vec<Action>` after processing each event. The
//! runtime executes them in sequence; only the runtime's lock coordinator ever
//! touches the scroll-lock resource.

use crate::app::modes::ViewportClass;

/// Commands representing side effects to be executed by the runtime.
///
/// Actions are produced by the event handler and executed by the runtime's
/// action processor. They represent the boundary between pure state
/// transformations and effectful operations on host resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Synchronizes the page-wide scroll lock with the menu state.
    ///
    /// Emitted whenever `expanded` or the viewport class may have changed. The
    /// coordinator acquires the lock iff `expanded` is true and the viewport is
    /// narrow, and releases it otherwise; repeated syncs with the same inputs
    /// are no-ops.
    SyncScrollLock {
        /// Whether the mobile menu is open after the transition.
        expanded: bool,
        /// Viewport class after the transition.
        viewport: ViewportClass,
    },
}
