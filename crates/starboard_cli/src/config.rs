//! Environment loading for the CLI.
//!
//! Order: 1) `~/.starboard/env`  2) nearest `.env` walking up from the cwd.
//! `dotenvy` never overrides a variable that is already set, so the real
//! environment wins over both files and the global file wins over the project one.

use std::path::{Path, PathBuf};

const MAX_ASCENT: usize = 32;

pub fn load_env_files() {
    if let Some(path) = global_env_path() {
        if path.exists() {
            let _ = dotenvy::from_path(&path);
        }
    }
    if let Ok(cwd) = std::env::current_dir() {
        if let Some(path) = find_upwards(&cwd, ".env") {
            let _ = dotenvy::from_path(&path);
        }
    }
}

pub fn global_env_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".starboard").join("env"))
}

/// Nearest `name` in `start` or one of its ancestors.
fn find_upwards(start: &Path, name: &str) -> Option<PathBuf> {
    start
        .ancestors()
        .take(MAX_ASCENT)
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.exists())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_upwards() {
        let root = tempfile::tempdir().unwrap();
        let nested = root.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(root.path().join("a").join(".env"), "X=1\n").unwrap();

        let found = find_upwards(&nested, ".env").unwrap();
        assert_eq!(found, root.path().join("a").join(".env"));
        assert!(find_upwards(&nested, ".does-not-exist").is_none());
    }
}
