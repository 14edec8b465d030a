//! Scroll-lock coordination layer.
//!
//! Owns the page-wide scroll-disable resource on behalf of the navigation bar.
//! Exactly one coordinator is active per page; concurrent independent owners
//! would race on acquire/release and are ruled out by the runtime owning a
//! single instance.

pub mod coordinator;

pub use coordinator::ScrollLockCoordinator;
