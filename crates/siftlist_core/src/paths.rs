//! Per-user filesystem locations.
//!
//! Everything lives under one configuration directory: the todo store,
//! the configuration document and rotated log files.

use directories::ProjectDirs;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::PathBuf;

const APP_NAME: &str = "siftlist";
const DB_FILE: &str = "todos.db";
const CONFIG_FILE: &str = "siftlist.conf";
const LOG_DIR: &str = "logs";

#[derive(Debug)]
pub enum PathsError {
    /// No home directory could be resolved for the current user.
    NoHomeDirectory,
    Io(std::io::Error),
}

impl Display for PathsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoHomeDirectory => {
                write!(f, "could not resolve a home directory for the current user")
            }
            Self::Io(err) => write!(f, "{err}"),
        }
    }
}

impl Error for PathsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NoHomeDirectory => None,
            Self::Io(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for PathsError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Resolved locations for one user profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub config_dir: PathBuf,
    pub db_file: PathBuf,
    pub config_file: PathBuf,
    pub log_dir: PathBuf,
}

impl AppPaths {
    /// Resolves the platform configuration directory for this app.
    pub fn resolve() -> Result<Self, PathsError> {
        let dirs = ProjectDirs::from("", "", APP_NAME).ok_or(PathsError::NoHomeDirectory)?;
        Ok(Self::under(dirs.config_dir().to_path_buf()))
    }

    /// Builds the layout under an explicit root. Used by tests and by
    /// anything relocating the profile.
    pub fn under(config_dir: PathBuf) -> Self {
        let db_file = config_dir.join(DB_FILE);
        let config_file = config_dir.join(CONFIG_FILE);
        let log_dir = config_dir.join(LOG_DIR);
        Self {
            config_dir,
            db_file,
            config_file,
            log_dir,
        }
    }

    /// Creates the directory tree.
    pub fn ensure(&self) -> Result<(), PathsError> {
        fs::create_dir_all(&self.config_dir)?;
        fs::create_dir_all(&self.log_dir)?;
        Ok(())
    }
}
