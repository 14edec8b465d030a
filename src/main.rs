//! Replay harness and entry point.
//!
//! This binary is the thin integration layer between the navkit library and a
//! scripted host environment. It reads a JSON-lines signal script, applies
//! each step to a simulated window, pumps the runtime, and prints one JSON
//! transition record per view-model change. It exists for debugging derivation
//! rules and for reproducing signal sequences outside any visual framework.
//!
//! # Usage
//!
//! ```text
//! navkit <script.jsonl> [config.toml]
//! ```
//!
//! # Script format
//!
//! One JSON object per line; blank lines and `#` comments are skipped:
//!
//! ```text
//! {"signal": "scroll", "offset": 120.0}
//! {"signal": "frame"}
//! {"signal": "resize", "width": 720}
//! {"signal": "toggle"}
//! {"signal": "close"}
//! ```
//!
//! `scroll` and `resize` inject window signals; `frame` runs one animation
//! frame (scroll samples publish only on frames, mirroring the observer's
//! coalescing); `toggle` and `close` are user events.

use std::rc::Rc;

use navkit::host::sim::{SimScrollLock, SimWindow};
use navkit::host::WindowHooks;
use navkit::runtime::Navbar;
use navkit::{Config, NavError, Result};
use serde::Deserialize;
use serde_json::json;

/// One step of a signal script.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(tag = "signal", rename_all = "snake_case")]
enum ScriptStep {
    /// Move the page to a new scroll offset (fires the scroll signal).
    Scroll { offset: f64 },
    /// Resize the viewport (fires the resize signal).
    Resize { width: u32 },
    /// Run one animation frame.
    Frame,
    /// Tap the menu-toggle affordance.
    Toggle,
    /// Select a panel item / dismiss the panel.
    Close,
}

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let script_path = args.next().ok_or_else(|| {
        NavError::Script("usage: navkit <script.jsonl> [config.toml]".to_string())
    })?;

    let config = match args.next() {
        Some(config_path) => Config::from_file(config_path)?,
        None => Config::default(),
    };
    navkit::observability::init_tracing(&config);

    let script = std::fs::read_to_string(&script_path)?;

    // Replays start on a wide, unscrolled page until the script says otherwise.
    let sim = SimWindow::new(0.0, 1280);
    let lock = SimScrollLock::new();
    let window: Rc<dyn WindowHooks> = Rc::new(sim.clone());
    let mut navbar = Navbar::mount(&window, Rc::new(lock.clone()), config);

    println!(
        "{}",
        json!({
            "replay": script_path,
            "started_at": chrono::Utc::now().to_rfc3339(),
        })
    );

    for (line_number, line) in script.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let step: ScriptStep = serde_json::from_str(line).map_err(|e| {
            NavError::Script(format!("line {}: {e}", line_number + 1))
        })?;

        match step {
            ScriptStep::Scroll { offset } => sim.set_scroll_offset(offset),
            ScriptStep::Resize { width } => sim.set_viewport_width(width),
            ScriptStep::Frame => sim.run_frame(),
            ScriptStep::Toggle => {
                navbar.toggle_menu()?;
            }
            ScriptStep::Close => {
                navbar.close_menu()?;
            }
        }

        if navbar.pump()? || matches!(step, ScriptStep::Toggle | ScriptStep::Close) {
            let vm = navbar.viewmodel();
            println!(
                "{}",
                json!({
                    "line": line_number + 1,
                    "step": format!("{step:?}"),
                    "detached": vm.detached,
                    "show_blur": vm.show_blur,
                    "expanded": vm.expanded,
                    "search_offset_top": vm.search_offset_top,
                    "scroll_locked": lock.is_locked(),
                })
            );
        }
    }

    let vm = navbar.viewmodel();
    println!(
        "{}",
        json!({
            "final": {
                "detached": vm.detached,
                "show_blur": vm.show_blur,
                "expanded": vm.expanded,
                "scroll_locked": lock.is_locked(),
                "lock_acquires": lock.acquire_count(),
                "lock_releases": lock.release_count(),
            }
        })
    );

    navbar.unmount();
    Ok(())
}
