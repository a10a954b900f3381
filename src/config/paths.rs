//! Cross-platform application paths using the `dirs` crate.
//!
//! Layout:
//!
//! Config dir (settings + board storage):
//!   Windows: %APPDATA%\task-organizer\
//!   macOS:   ~/Library/Application Support/task-organizer/
//!   Linux:   ~/.config/task-organizer/

use std::path::PathBuf;

/// Holds all resolved application directory/file paths.
#[derive(Debug, Clone)]
pub struct AppPaths {
    /// Directory for `settings.toml` and the board storage entries.
    pub config_dir: PathBuf,
    /// Full path to `settings.toml`.
    pub settings_file: PathBuf,
    /// Directory where `FileStorage` keeps its `<entry>.json` files.
    pub storage_dir: PathBuf,
}

impl AppPaths {
    const APP_NAME: &'static str = "task-organizer";

    /// Resolves all paths using the `dirs` crate.
    ///
    /// Falls back to the current directory if the platform cannot provide a
    /// standard path (should be extremely rare in practice).
    pub fn new() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(Self::APP_NAME);

        let settings_file = config_dir.join("settings.toml");
        let storage_dir = config_dir.join("board");

        Self {
            config_dir,
            settings_file,
            storage_dir,
        }
    }
}

impl Default for AppPaths {
    fn default() -> Self {
        Self::new()
    }
}
