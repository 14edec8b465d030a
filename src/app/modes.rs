//! Viewport classification for the navigation state machine.
//!
//! This module defines [`ViewportClass`], the state machine enum that determines
//! whether mobile-only navigation UI is active. The class is derived from the
//! window width against a fixed breakpoint and is the authoritative source of
//! truth consulted by the controller at toggle time.

/// Default breakpoint below which a viewport is classified as narrow, in pixels.
pub const NARROW_VIEWPORT_THRESHOLD: u32 = 960;

/// Classification of the viewport width relative to the narrow breakpoint.
///
/// Determines whether the mobile menu and its scroll-lock behavior are active.
/// Recomputed on every resize signal; transitions to [`ViewportClass::Wide`]
/// force-collapse the mobile menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportClass {
    /// Viewport is narrower than the breakpoint.
    ///
    /// Mobile-only UI is active: the menu toggle is visible and expanding the
    /// menu locks page scrolling.
    Narrow,

    /// Viewport is at or beyond the breakpoint.
    ///
    /// Desktop layout: there is no togglable menu, and an expanded flag has no
    /// visible effect.
    Wide,
}

impl ViewportClass {
    /// Classifies a viewport width against a breakpoint.
    ///
    /// Widths strictly below the threshold are [`ViewportClass::Narrow`];
    /// the threshold itself is [`ViewportClass::Wide`].
    ///
    /// # Examples
    ///
    /// ```
    /// use navkit::app::modes::{ViewportClass, NARROW_VIEWPORT_THRESHOLD};
    ///
    /// assert_eq!(ViewportClass::from_width(959, NARROW_VIEWPORT_THRESHOLD), ViewportClass::Narrow);
    /// assert_eq!(ViewportClass::from_width(960, NARROW_VIEWPORT_THRESHOLD), ViewportClass::Wide);
    /// ```
    #[must_use]
    pub const fn from_width(width: u32, threshold: u32) -> Self {
        if width < threshold {
            Self::Narrow
        } else {
            Self::Wide
        }
    }

    /// Returns `true` for [`ViewportClass::Narrow`].
    #[must_use]
    pub const fn is_narrow(self) -> bool {
        matches!(self, Self::Narrow)
    }
}
