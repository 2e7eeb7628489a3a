//! Path utilities for the Zellij sandbox environment.
//!
//! Inside the plugin sandbox the host filesystem is mounted under `/host`
//! (the cwd of the last focused terminal, or where Zellij was started).
//! The only filesystem the plugin touches is its own trace directory.

use std::path::PathBuf;

/// Returns the data directory for Memefinder diagnostics.
///
/// Resolves to `/host/.local/share/zellij/memefinder` in the sandbox, which
/// typically maps to `~/.local/share/zellij/memefinder` when Zellij is
/// started from a home-directory terminal. The rotating OTLP trace file
/// lives here.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("memefinder")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_dir_is_sandbox_relative() {
        assert_eq!(
            get_data_dir(),
            PathBuf::from("/host/.local/share/zellij/memefinder")
        );
    }
}
