use std::path::{Path, PathBuf};

/// Runtime configuration describing where the SQLite database file lives.
#[derive(Debug, Clone)]
pub struct SqliteConfig {
    pub path: PathBuf,
}

impl SqliteConfig {
    /// Construct a configuration pointing at the given database file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the database file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
