//! Database path helpers.

use std::path::{Path, PathBuf};

use crate::error::{Result, WizardError};

/// File name of the database under the XDG data directory.
pub const DATABASE_FILE: &str = "stride.db";

impl super::Database {
    /// Returns the default database path following XDG Base Directory
    /// specification: `$XDG_DATA_HOME/stride/stride.db`.
    pub fn default_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("stride")
            .place_data_file(DATABASE_FILE)
            .map_err(|e| WizardError::XdgDirectory(e.to_string()))
    }

    /// Creates the parent directory of `path` if needed.
    pub fn ensure_parent_dir(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| WizardError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
        Ok(())
    }
}
