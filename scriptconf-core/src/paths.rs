use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::ConfigError;

/// Root directory of the project: one level above the running utility.
///
/// Infallible; degrades to the current directory when the executable
/// location cannot be resolved.
pub fn project_root() -> PathBuf {
    let exe_dir = env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));
    // Relative components resolve against the working directory.
    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let joined = cwd.join(exe_dir).join("..");
    joined.canonicalize().unwrap_or(joined)
}

/// Create `path` (and missing parents) if absent and return it canonicalized.
///
/// A directory already existing is not an error, so independent processes
/// may race on the same path safely.
pub fn ensure_dir(path: impl AsRef<Path>) -> Result<PathBuf, ConfigError> {
    let path = path.as_ref();
    if path.exists() && !path.is_dir() {
        return Err(ConfigError::NotADirectory {
            path: path.to_path_buf(),
        });
    }
    fs::create_dir_all(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    path.canonicalize().map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn project_root_is_an_absolute_directory() {
        let root = project_root();
        assert!(root.is_absolute());
        assert!(root.is_dir());
    }

    #[test]
    fn ensure_dir_creates_missing_parents() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("a").join("b");

        let created = ensure_dir(&target).unwrap();

        assert!(created.is_dir());
        assert!(created.is_absolute());
    }

    #[test]
    fn ensure_dir_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("cache");

        let first = ensure_dir(&target).unwrap();
        let second = ensure_dir(&target).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn ensure_dir_rejects_an_existing_file() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("occupied");
        fs::write(&target, b"x").unwrap();

        let err = ensure_dir(&target).unwrap_err();

        assert!(matches!(err, ConfigError::NotADirectory { .. }));
    }
}
