use std::path::{Path, PathBuf};

/// File checked when no path is given on the command line.
pub const DEFAULT_TARGET: &str = "index.html";

pub struct LinterConfig {
    pub target: PathBuf,
}

impl LinterConfig {
    pub fn from_path(path: &Path) -> Self {
        Self {
            target: path.to_path_buf(),
        }
    }

    /// Use the explicit path when given, otherwise the default target.
    pub fn resolve(path: Option<&Path>) -> Self {
        match path {
            Some(p) => Self::from_path(p),
            None => Self::discover().unwrap_or_else(|| Self::from_path(Path::new(DEFAULT_TARGET))),
        }
    }

    /// Discover repo root by walking up from cwd to find .git directory
    pub fn discover() -> Option<Self> {
        let dir = std::env::current_dir().ok()?;
        Self::discover_from(&dir)
    }

    pub fn discover_from(start: &Path) -> Option<Self> {
        let mut dir = start.to_path_buf();
        loop {
            if dir.join(".git").exists() {
                return Some(Self::from_path(&dir.join(DEFAULT_TARGET)));
            }
            if !dir.pop() {
                return None;
            }
        }
    }
}
