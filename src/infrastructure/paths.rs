//! Filesystem locations for navkit's own output.
//!
//! The crate writes nothing except trace files; this module resolves where
//! they live. Resolution follows the platform's local-data convention via the
//! `dirs` crate, falling back to the system temp directory when no data dir
//! is available (e.g. stripped-down containers).

use std::path::PathBuf;

/// Returns the data directory for navkit trace output.
///
/// Resolves to `<platform local data dir>/navkit` (typically
/// `~/.local/share/navkit` on Linux), or `<temp dir>/navkit` when the
/// platform reports no data directory. The directory is not created here;
/// callers create it on first use.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("navkit")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_dir_ends_with_crate_name() {
        assert!(get_data_dir().ends_with("navkit"));
    }
}
