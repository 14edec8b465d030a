//! Application layer coordinating state, events, and actions.
//!
//! This module defines the navigation state machine, sitting between the host
//! plumbing (observers, runtime) and the domain layer. It implements the
//! event-driven architecture that powers the responsive navigation bar.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! Window Signals → Events → Event Handler → State Mutations → Actions → Scroll Lock
//!                                                 ↓
//!                                            View Model → Presentation
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Viewport classification state machine types
//! - [`state`]: Central navigation state container and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event, EventQueue};
pub use modes::{ViewportClass, NARROW_VIEWPORT_THRESHOLD};
pub use state::NavState;
