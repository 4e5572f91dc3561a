use std::path::PathBuf;
use thiserror::Error;

/// Error type for command catalog discovery
#[derive(Error, Debug)]
pub enum Error {
    #[error("Could not determine the user home directory")]
    HomeDirectory,

    #[error("Failed to read commands directory {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a directory-read error for the given path
    pub fn read_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadDir {
            path: path.into(),
            source,
        }
    }
}

/// Convenient result type for command discovery
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_display_messages() {
        let err = Error::HomeDirectory;
        assert_eq!(
            err.to_string(),
            "Could not determine the user home directory"
        );

        let err = Error::read_dir(
            "/tmp/commands",
            io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        );
        assert_eq!(
            err.to_string(),
            "Failed to read commands directory /tmp/commands: permission denied"
        );
    }

    #[test]
    fn test_read_dir_preserves_source() {
        let err = Error::read_dir(
            "/tmp/commands",
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        );
        match err {
            Error::ReadDir { path, source } => {
                assert_eq!(path, PathBuf::from("/tmp/commands"));
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            _ => panic!("Expected ReadDir error"),
        }
    }
}
