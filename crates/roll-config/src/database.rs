//! Database location.

use serde::{Deserialize, Serialize};

/// Default database path, relative to the working directory.
fn default_path() -> String {
    String::from(".rollcall/rollcall.db")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Path to the libSQL database file, or `:memory:`.
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}

impl DatabaseConfig {
    /// Whether the database lives only for the process lifetime.
    pub fn is_in_memory(&self) -> bool {
        self.path == ":memory:"
    }

    /// Parent directory that must exist before opening a file-backed database.
    pub fn parent_dir(&self) -> Option<&std::path::Path> {
        if self.is_in_memory() {
            return None;
        }
        std::path::Path::new(&self.path)
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
    }
}
