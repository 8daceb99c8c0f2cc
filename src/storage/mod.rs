//! Persistence backends for rendered documents.
//!
//! A [`Storage`] accepts the rendered text and either persists it or
//! reports why it could not. Backends hold no document state.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Default target for [`FileStorage`].
pub const DEFAULT_OUTPUT: &str = "document.txt";

/// Failure to persist a rendered document.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The sink could not be opened for writing.
    #[error("unable to open {} for writing: {source}", .path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The sink was opened but writing to it failed.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backend exists as a seam but has no implementation.
    #[error("{backend} storage is not implemented")]
    NotImplemented { backend: &'static str },
}

/// A capability that persists a string to a durable sink.
pub trait Storage {
    /// Persist `data` in full, replacing whatever the sink held before.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the sink cannot be reached or written.
    fn save(&self, data: &str) -> Result<(), StorageError>;

    /// Human-readable name of the sink, e.g. the target file path.
    fn describe(&self) -> String;
}

impl<S: Storage + ?Sized> Storage for Box<S> {
    fn save(&self, data: &str) -> Result<(), StorageError> {
        (**self).save(data)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Writes the rendering as the entire content of a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileStorage {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT)
    }
}

impl Storage for FileStorage {
    fn save(&self, data: &str) -> Result<(), StorageError> {
        let mut file = File::create(&self.path).map_err(|source| StorageError::Unavailable {
            path: self.path.clone(),
            source,
        })?;
        file.write_all(data.as_bytes())
            .and_then(|()| file.flush())
            .map_err(|source| StorageError::Write {
                path: self.path.clone(),
                source,
            })?;
        tracing::info!(path = %self.path.display(), bytes = data.len(), "document written");
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Placeholder for a database-backed sink.
///
/// Always reports [`StorageError::NotImplemented`], so callers can tell an
/// unwired backend apart from one that was wired and failed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DatabaseStorage;

impl Storage for DatabaseStorage {
    fn save(&self, data: &str) -> Result<(), StorageError> {
        tracing::debug!(bytes = data.len(), "database storage invoked");
        Err(StorageError::NotImplemented {
            backend: "database",
        })
    }

    fn describe(&self) -> String {
        "database".to_string()
    }
}

/// Storage backend selectable from configuration.
#[derive(clap::ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StorageKind {
    #[default]
    File,
    Database,
}

impl StorageKind {
    /// Build the backend. `path` is only used by the file backend.
    pub fn build(self, path: &Path) -> Box<dyn Storage> {
        match self {
            Self::File => Box::new(FileStorage::new(path)),
            Self::Database => Box::new(DatabaseStorage),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Database => "database",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "file" => Some(Self::File),
            "database" => Some(Self::Database),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_file_storage_writes_exact_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let storage = FileStorage::new(&path);

        storage.save("a\n\tb").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a\n\tb");
    }

    #[test]
    fn test_file_storage_overwrites_previous_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.txt");
        std::fs::write(&path, "a much longer previous body").unwrap();

        FileStorage::new(&path).save("short").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "short");
    }

    #[test]
    fn test_file_storage_missing_directory_is_unavailable() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("out.txt");

        let err = FileStorage::new(&path).save("data").unwrap_err();
        assert!(
            matches!(err, StorageError::Unavailable { path: ref p, .. } if *p == path),
            "unexpected error: {err:?}"
        );
        assert!(err.to_string().contains("unable to open"));
    }

    #[cfg(unix)]
    #[test]
    fn test_file_storage_full_device_is_write_error() {
        let path = Path::new("/dev/full");
        if !path.exists() {
            return;
        }

        let err = FileStorage::new(path).save("data").unwrap_err();
        assert!(
            matches!(err, StorageError::Write { path: ref p, .. } if p == path),
            "unexpected error: {err:?}"
        );
        assert!(err.to_string().starts_with("failed to write /dev/full"));
    }

    #[test]
    fn test_default_file_storage_targets_document_txt() {
        assert_eq!(FileStorage::default().path(), Path::new("document.txt"));
        assert_eq!(FileStorage::default().describe(), "document.txt");
    }

    #[test]
    fn test_database_storage_reports_not_implemented() {
        let err = DatabaseStorage.save("data").unwrap_err();
        assert!(matches!(
            err,
            StorageError::NotImplemented {
                backend: "database"
            }
        ));
    }

    #[test]
    fn test_storage_kind_builds_matching_backend() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("kind.txt");

        let file = StorageKind::File.build(&path);
        file.save("x").unwrap();
        assert!(path.exists());

        let db = StorageKind::Database.build(&path);
        assert_eq!(db.describe(), "database");
        assert!(db.save("x").is_err());
    }

    #[test]
    fn test_storage_kind_parse_round_trips_names() {
        for kind in [StorageKind::File, StorageKind::Database] {
            assert_eq!(StorageKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(StorageKind::parse("sqlite"), None);
    }
}
