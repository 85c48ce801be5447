use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{} is a directory, not a file", .path.display())]
    NotAFile { path: PathBuf },
    #[error("{} exists but is not a directory", .path.display())]
    NotADirectory { path: PathBuf },
    #[error("{} is not a valid JSON config file: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("I/O error accessing {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
