//! Navkit: a host-agnostic state controller for responsive navigation bars.
//!
//! Navkit derives a navigation bar's presentation state from environmental
//! signals and user interaction:
//! - Scroll-aware styling: `detached` and `show_blur` flags computed from the
//!   scroll offset, with per-animation-frame sample coalescing
//! - Viewport breakpoints: Narrow/Wide classification that force-collapses
//!   the mobile menu when the layout turns wide
//! - Scoped scroll locking: the page's scroll-disable resource is held
//!   exactly while the mobile menu is open on a narrow viewport, and released
//!   on every teardown path
//!
//! Markup, styling, routing, and animation are the hosting page's concern;
//! navkit only hands it a view model.
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Host shim (main.rs replay harness / embeddings)    │  ← Signal source
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Runtime (runtime::Navbar)                          │  ← Assembly,
//! │  - Mount/unmount lifecycle                          │    queue pump,
//! │  - Action execution                                 │    teardown
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Observers     │   │ App layer     │   │ Lock layer    │
//! │ (observer/)   │   │ (app/)        │   │ (lock/)       │
//! │ - Scroll      │   │ - Events      │   │ - Scoped      │
//! │ - Viewport    │   │ - State       │   │   acquire/    │
//! │   classifier  │   │ - View model  │   │   release     │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Host abstraction & domain (host/, domain/)         │
//! │  - WindowHooks / ScrollLockHandle traits            │
//! │  - Subscription disposers, value types, errors      │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing, file-based OTLP export    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Navigation state machine with event/action model
//! - [`domain`]: Core value types and errors
//! - [`host`]: Hosting-environment traits, subscriptions, and simulation
//! - [`observer`]: Scroll and viewport signal observers
//! - [`lock`]: Scroll-lock coordination
//! - [`runtime`]: The mounted `Navbar` assembly
//! - [`ui`]: Presentation view model
//! - [`infrastructure`]: Data-dir resolution for trace output
//! - `observability`: OpenTelemetry tracing (internal wiring)
//!
//! # Example
//!
//! ```
//! use navkit::host::sim::{SimScrollLock, SimWindow};
//! use navkit::host::WindowHooks;
//! use navkit::runtime::Navbar;
//! use navkit::Config;
//! use std::rc::Rc;
//!
//! // A simulated window; real embeddings implement WindowHooks themselves.
//! let sim = SimWindow::new(0.0, 600);
//! let lock = SimScrollLock::new();
//! let window: Rc<dyn WindowHooks> = Rc::new(sim.clone());
//!
//! let mut navbar = Navbar::mount(&window, Rc::new(lock.clone()), Config::default());
//!
//! // The user opens the mobile menu; the page stops scrolling behind it.
//! navbar.toggle_menu()?;
//! assert!(navbar.viewmodel().expanded);
//! assert!(lock.is_locked());
//!
//! // Scroll signals coalesce into one sample per animation frame.
//! sim.set_scroll_offset(80.0);
//! sim.run_frame();
//! navbar.pump()?;
//! assert!(navbar.viewmodel().detached);
//!
//! // Teardown releases everything, even with the menu open.
//! navbar.unmount();
//! assert!(!lock.is_locked());
//! # Ok::<(), navkit::NavError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod host;
pub mod infrastructure;
pub mod lock;
pub mod observer;
pub mod runtime;
pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, Event, NavState, ViewportClass};
pub use domain::{NavError, Result, ScrollSample};
pub use runtime::Navbar;
pub use ui::NavViewModel;

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Navigation bar configuration, supplied at mount and never mutated.
///
/// Loadable from a TOML file via [`Config::from_file`]; every field has a
/// default so partial files are fine:
///
/// ```toml
/// has_notify = true
/// is_home = false
/// narrow_threshold = 960
/// trace_level = "debug"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Whether a persistent notification banner occupies the top of the page.
    ///
    /// Pushes the detach threshold from 0 to 30 pixels, since the banner moves
    /// the bar's effective "top" down.
    pub has_notify: bool,

    /// Whether the bar is rendered on the home page.
    ///
    /// The home page always shows the blurred background treatment, even
    /// unscrolled with the menu closed.
    pub is_home: bool,

    /// Viewport width below which the mobile layout is active, in pixels.
    ///
    /// Default: 960.
    pub narrow_threshold: u32,

    /// Tracing level for the observability pipeline.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`.
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            has_notify: false,
            is_home: false,
            narrow_threshold: app::NARROW_VIEWPORT_THRESHOLD,
            trace_level: None,
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// Missing fields take their defaults; unknown fields are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::Io`] if the file cannot be read and
    /// [`NavError::Config`] if it is not valid TOML for this shape.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw).map_err(|e| NavError::Config(e.to_string()))
    }
}

/// Creates navigation state from configuration without mounting observers.
///
/// Embeddings that drive the state machine directly (no window to attach to)
/// start here; [`Navbar::mount`] covers the common case and seeds state from
/// the window instead.
#[must_use]
pub fn initialize(config: &Config) -> NavState {
    tracing::debug!(
        has_notify = config.has_notify,
        is_home = config.is_home,
        "initializing navigation state"
    );
    NavState::new(config.clone(), ScrollSample::TOP, ViewportClass::Wide)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_matches_documented_values() {
        let config = Config::default();
        assert!(!config.has_notify);
        assert!(!config.is_home);
        assert_eq!(config.narrow_threshold, 960);
        assert!(config.trace_level.is_none());
    }

    #[test]
    fn partial_config_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "has_notify = true").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert!(config.has_notify);
        assert_eq!(config.narrow_threshold, 960);
    }

    #[test]
    fn malformed_config_file_reports_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "narrow_threshold = \"wide\"").unwrap();

        match Config::from_file(file.path()) {
            Err(NavError::Config(_)) => {}
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn missing_config_file_reports_io_error() {
        match Config::from_file("/nonexistent/navkit.toml") {
            Err(NavError::Io(_)) => {}
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn initialize_starts_collapsed() {
        let state = initialize(&Config::default());
        assert!(!state.expanded);
        assert_eq!(state.scroll_offset, ScrollSample::TOP);
    }
}
