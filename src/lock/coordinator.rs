//! Scoped acquisition of the page-wide scroll lock.
//!
//! This module implements [`ScrollLockCoordinator`], the single owner of the
//! page's scroll-disable resource. The lock is held exactly while the mobile
//! menu is open on a narrow viewport; every other combination keeps it
//! released. The resource handle is injected at construction so tests can
//! supply a counting fake and assert acquire/release pairing.

use crate::app::ViewportClass;
use crate::host::ScrollLockHandle;
use std::rc::Rc;

/// Sole owner of the page-wide scroll-disable resource.
///
/// Tracks whether the lock is currently held and keeps acquire/release calls
/// strictly alternating: repeated [`ScrollLockCoordinator::sync`] calls with
/// the same inputs are no-ops. Dropping the coordinator releases the lock
/// unconditionally, so no exit path can leave the page unscrollable.
pub struct ScrollLockCoordinator {
    handle: Rc<dyn ScrollLockHandle>,
    held: bool,
}

impl ScrollLockCoordinator {
    /// Creates a coordinator around an injected lock resource. The lock starts
    /// released.
    #[must_use]
    pub fn new(handle: Rc<dyn ScrollLockHandle>) -> Self {
        Self { handle, held: false }
    }

    /// Brings the lock in line with the menu state.
    ///
    /// Acquires iff `expanded` is true and the viewport is narrow; releases
    /// otherwise. Idempotent: calling repeatedly with the same inputs does not
    /// double-acquire or double-release.
    pub fn sync(&mut self, expanded: bool, viewport: ViewportClass) {
        let want_held = expanded && viewport.is_narrow();
        if want_held == self.held {
            return;
        }

        if want_held {
            tracing::debug!("acquiring scroll lock");
            self.handle.acquire();
        } else {
            tracing::debug!("releasing scroll lock");
            self.handle.release();
        }
        self.held = want_held;
    }

    /// Releases the lock if held. The teardown path; safe to call repeatedly.
    pub fn release_now(&mut self) {
        if self.held {
            tracing::debug!("releasing scroll lock on teardown");
            self.handle.release();
            self.held = false;
        }
    }

    /// Whether the coordinator currently holds the lock.
    #[must_use]
    pub const fn is_held(&self) -> bool {
        self.held
    }
}

impl Drop for ScrollLockCoordinator {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl std::fmt::Debug for ScrollLockCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollLockCoordinator")
            .field("held", &self.held)
            .finish_non_exhaustive()
    }
}
