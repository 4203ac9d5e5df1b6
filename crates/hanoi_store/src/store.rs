use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use hanoi_logging::hanoi_debug;
use tempfile::NamedTempFile;
use thiserror::Error;

/// Directory used when no state directory is configured.
pub const DEFAULT_STATE_DIR: &str = ".hanoi";

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("state directory {path:?} is not a directory")]
    NotADirectory { path: PathBuf },
    #[error("cannot create state directory {path:?}: {source}")]
    StateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Named text files inside one state directory. The directory is created on
/// first write; replacing a file is a single rename, so readers never see a
/// half-written file.
#[derive(Debug, Clone)]
pub struct StateStore {
    dir: PathBuf,
}

impl StateStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Where `filename` lives inside the store.
    pub fn path(&self, filename: &str) -> PathBuf {
        self.dir.join(filename)
    }

    /// Creates the state directory if needed.
    pub fn prepare(&self) -> Result<(), PersistError> {
        match fs::metadata(&self.dir) {
            Ok(meta) if meta.is_dir() => Ok(()),
            Ok(_) => Err(PersistError::NotADirectory {
                path: self.dir.clone(),
            }),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                fs::create_dir_all(&self.dir).map_err(|source| PersistError::StateDir {
                    path: self.dir.clone(),
                    source,
                })?;
                hanoi_debug!("created state directory {:?}", self.dir);
                Ok(())
            }
            Err(source) => Err(PersistError::StateDir {
                path: self.dir.clone(),
                source,
            }),
        }
    }

    /// Reads `filename`, or `None` if it has never been written.
    pub fn read(&self, filename: &str) -> Result<Option<String>, PersistError> {
        let path = self.path(filename);
        match fs::read_to_string(&path) {
            Ok(text) => {
                hanoi_debug!("read {} bytes from {:?}", text.len(), path);
                Ok(Some(text))
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(PersistError::Read { path, source }),
        }
    }

    /// Replaces `filename` with `content` through a temporary sibling file.
    pub fn write(&self, filename: &str, content: &str) -> Result<PathBuf, PersistError> {
        self.prepare()?;
        let path = self.path(filename);
        let write_error = |source| PersistError::Write {
            path: path.clone(),
            source,
        };

        let mut staged = NamedTempFile::new_in(&self.dir).map_err(write_error)?;
        staged.write_all(content.as_bytes()).map_err(write_error)?;
        staged.as_file().sync_all().map_err(write_error)?;
        staged
            .persist(&path)
            .map_err(|err| write_error(err.error))?;

        hanoi_debug!("wrote {} bytes to {:?}", content.len(), path);
        Ok(path)
    }
}
