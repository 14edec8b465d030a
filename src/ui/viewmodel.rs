//! View model types representing presentation-ready navigation state.
//!
//! This module defines the immutable view model computed from navigation state.
//! Presentation code (whatever visual framework hosts the bar) selects visual
//! variants from it and contains no derivation logic of its own.

/// Presentation-ready snapshot of the navigation bar's derived flags.
///
/// Computed via `NavState::compute_viewmodel()` and handed to layout code.
/// Contains no business logic, only display-ready data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavViewModel {
    /// The bar has visually separated from the page top.
    pub detached: bool,

    /// The bar needs a translucent/blurred background treatment.
    pub show_blur: bool,

    /// The mobile menu panel is open.
    pub expanded: bool,

    /// Downward offset for the search panel, in pixels.
    ///
    /// 30 while the bar is attached (leaving room for the top edge), 0 once
    /// detached.
    pub search_offset_top: u32,
}
