//! Presentation boundary of the navigation state machine.
//!
//! Markup, styling, and rendering are the hosting page's concern; this layer
//! only defines the view model handed across that boundary.
//!
//! ```text
//! NavState → compute_viewmodel → NavViewModel → host presentation
//! ```

pub mod viewmodel;

pub use viewmodel::NavViewModel;
