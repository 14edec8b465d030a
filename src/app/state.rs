//! Navigation state container and view model computation.
//!
//! This module defines [`NavState`], the central state container for the
//! navigation bar, along with the transition methods driven by the event handler
//! and the pure derivation of presentation flags. It is the single source of
//! truth for all transient navigation state.
//!
//! # Architecture
//!
//! `NavState` separates raw inputs (latest scroll sample, viewport class, the
//! user-controlled expanded flag) from derived state (`detached`, `show_blur`),
//! which is computed on demand and never stored. View models are computed from
//! state snapshots via [`NavState::compute_viewmodel`].
//!
//! # State Components
//!
//! - **Scroll offset**: latest sample published by the scroll observer
//! - **Viewport class**: Narrow/Wide, recomputed on resize
//! - **Expanded**: whether the mobile menu panel is open (user-controlled,
//!   force-collapsed when the viewport turns wide)
//! - **Config**: construction-time inputs (`has_notify`, `is_home`, threshold)
//!
//! # Derivation Rules
//!
//! - `detached`: the bar has visually separated from the page top. With a
//!   persistent notification banner the effective top is pushed down, so the
//!   threshold rises from 0 to 30 pixels.
//! - `show_blur`: the bar needs a translucent/blurred backdrop whenever the
//!   menu is open, the bar is detached, or the page is the home page.

use crate::app::modes::ViewportClass;
use crate::domain::ScrollSample;
use crate::ui::viewmodel::NavViewModel;
use crate::Config;

/// Scroll distance, in pixels, before the bar detaches when a notification
/// banner occupies the top of the page.
const NOTIFY_DETACH_OFFSET: u32 = 30;

/// Downward offset applied to the search panel while the bar is still attached.
const SEARCH_ATTACHED_OFFSET: u32 = 30;

/// Central navigation state container.
///
/// Holds the raw inputs the presentation flags are derived from. Mutated by the
/// event handler in response to observer signals and user toggle events. The
/// derived flags are pure functions of this state and are recomputed on demand.
#[derive(Debug, Clone)]
pub struct NavState {
    /// Latest scroll sample published by the scroll observer.
    ///
    /// Seeded from the window's current offset at mount; updated once per
    /// animation frame while scroll signals arrive.
    pub scroll_offset: ScrollSample,

    /// Current viewport classification.
    ///
    /// Seeded from the window's width at mount; updated by resize signals.
    /// A transition to [`ViewportClass::Wide`] force-collapses the menu.
    pub viewport: ViewportClass,

    /// Whether the mobile menu panel is open.
    ///
    /// Flipped by toggle events, cleared by close events, and forcibly reset
    /// whenever the viewport turns wide. Meaningful only while the viewport is
    /// narrow, but safe to flip at any width.
    pub expanded: bool,

    /// Construction-time configuration (`has_notify`, `is_home`, threshold).
    ///
    /// Never mutated by the controller.
    pub config: Config,
}

impl NavState {
    /// Creates navigation state from configuration and initial readings.
    ///
    /// The initial sample and class come from the observers at mount time, so
    /// a page loaded mid-scroll starts detached rather than snapping on the
    /// first scroll signal.
    ///
    /// # Examples
    ///
    /// ```
    /// use navkit::app::{NavState, modes::ViewportClass};
    /// use navkit::domain::ScrollSample;
    /// use navkit::Config;
    ///
    /// let state = NavState::new(Config::default(), ScrollSample::TOP, ViewportClass::Wide);
    /// assert!(!state.expanded);
    /// ```
    #[must_use]
    pub const fn new(config: Config, scroll_offset: ScrollSample, viewport: ViewportClass) -> Self {
        Self {
            scroll_offset,
            viewport,
            expanded: false,
            config,
        }
    }

    /// Records a new scroll sample.
    ///
    /// Updates only the offset; `expanded` is never touched by scrolling.
    pub fn on_scroll(&mut self, sample: ScrollSample) {
        self.scroll_offset = sample;
    }

    /// Records a viewport class change.
    ///
    /// A transition to [`ViewportClass::Wide`] force-collapses the menu
    /// regardless of its prior state: once the layout no longer has a mobile
    /// menu, an open panel must not linger invisibly.
    pub fn on_viewport_change(&mut self, class: ViewportClass) {
        if class == ViewportClass::Wide && self.expanded {
            tracing::debug!("viewport turned wide, force-collapsing menu");
            self.expanded = false;
        }
        self.viewport = class;
    }

    /// Flips the mobile menu open or closed.
    ///
    /// Only meaningful while the viewport is narrow; calling it while wide
    /// flips the flag with no visible effect since mobile-only UI is hidden
    /// at that width.
    pub fn toggle_menu(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Closes the mobile menu unconditionally.
    ///
    /// Used when a panel item is selected or the panel is dismissed.
    pub fn close_menu(&mut self) {
        self.expanded = false;
    }

    /// Whether the bar has visually separated from the page top.
    ///
    /// With a notification banner the detach threshold is pushed down to
    /// 30 pixels; without one, any scrolling detaches the bar.
    #[must_use]
    pub const fn detached(&self) -> bool {
        if self.config.has_notify {
            self.scroll_offset.offset > NOTIFY_DETACH_OFFSET
        } else {
            self.scroll_offset.offset > 0
        }
    }

    /// Whether the bar needs a translucent/blurred backdrop.
    ///
    /// True whenever the menu is open (the panel needs a backdrop), the bar is
    /// detached, or the page is the home page.
    #[must_use]
    pub const fn show_blur(&self) -> bool {
        self.expanded || self.detached() || self.config.is_home
    }

    /// Computes the presentation-ready view model from current state.
    ///
    /// The view model is an immutable snapshot of the derived flags plus the
    /// search panel offset; layout code selects visual variants from it and
    /// never reaches back into the state.
    ///
    /// # Examples
    ///
    /// ```
    /// use navkit::app::{NavState, modes::ViewportClass};
    /// use navkit::domain::ScrollSample;
    /// use navkit::Config;
    ///
    /// let state = NavState::new(Config::default(), ScrollSample::new(12), ViewportClass::Wide);
    /// let vm = state.compute_viewmodel();
    /// assert!(vm.detached && vm.show_blur);
    /// ```
    #[must_use]
    pub const fn compute_viewmodel(&self) -> NavViewModel {
        let detached = self.detached();
        NavViewModel {
            detached,
            show_blur: self.show_blur(),
            expanded: self.expanded,
            search_offset_top: if detached { 0 } else { SEARCH_ATTACHED_OFFSET },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(has_notify: bool, is_home: bool) -> NavState {
        let config = Config {
            has_notify,
            is_home,
            ..Config::default()
        };
        NavState::new(config, ScrollSample::TOP, ViewportClass::Narrow)
    }

    #[test]
    fn detached_without_notify_triggers_on_any_scroll() {
        let mut state = state_with(false, false);
        assert!(!state.detached());

        state.on_scroll(ScrollSample::new(1));
        assert!(state.detached());
    }

    #[test]
    fn detached_with_notify_requires_scrolling_past_banner() {
        let mut state = state_with(true, false);

        state.on_scroll(ScrollSample::new(30));
        assert!(!state.detached());

        state.on_scroll(ScrollSample::new(31));
        assert!(state.detached());
    }

    #[test]
    fn show_blur_follows_expanded_detached_and_home() {
        for expanded in [false, true] {
            for offset in [0, 40] {
                for is_home in [false, true] {
                    let mut state = state_with(false, is_home);
                    state.expanded = expanded;
                    state.on_scroll(ScrollSample::new(offset));
                    assert_eq!(
                        state.show_blur(),
                        expanded || state.detached() || is_home,
                        "expanded={expanded} offset={offset} is_home={is_home}"
                    );
                }
            }
        }
    }

    #[test]
    fn home_page_shows_blur_at_page_top() {
        let state = state_with(false, true);
        assert!(!state.detached());
        assert!(!state.expanded);
        assert!(state.show_blur());
    }

    #[test]
    fn toggle_twice_restores_expanded() {
        let mut state = state_with(false, false);
        state.toggle_menu();
        assert!(state.expanded);
        state.toggle_menu();
        assert!(!state.expanded);
    }

    #[test]
    fn scrolling_never_touches_expanded() {
        let mut state = state_with(false, false);
        state.toggle_menu();
        state.on_scroll(ScrollSample::new(500));
        assert!(state.expanded);
    }

    #[test]
    fn wide_viewport_force_collapses_menu() {
        let mut state = state_with(false, false);
        state.toggle_menu();
        assert!(state.expanded);

        state.on_viewport_change(ViewportClass::Wide);
        assert!(!state.expanded);
        assert_eq!(state.viewport, ViewportClass::Wide);
    }

    #[test]
    fn narrow_viewport_change_preserves_expanded() {
        let mut state = state_with(false, false);
        state.viewport = ViewportClass::Wide;
        state.toggle_menu();

        state.on_viewport_change(ViewportClass::Narrow);
        assert!(state.expanded);
    }

    #[test]
    fn notify_scenario_from_offsets_twenty_and_forty() {
        let mut state = state_with(true, false);

        state.on_scroll(ScrollSample::new(20));
        let vm = state.compute_viewmodel();
        assert!(!vm.detached);
        assert!(!vm.show_blur);

        state.on_scroll(ScrollSample::new(40));
        let vm = state.compute_viewmodel();
        assert!(vm.detached);
        assert!(vm.show_blur);
    }

    #[test]
    fn search_panel_offset_clears_once_detached() {
        let mut state = state_with(false, false);
        assert_eq!(state.compute_viewmodel().search_offset_top, 30);

        state.on_scroll(ScrollSample::new(5));
        assert_eq!(state.compute_viewmodel().search_offset_top, 0);
    }
}
