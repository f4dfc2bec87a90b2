//! Binary-encoded configuration document.
//!
//! # Responsibility
//! - Persist named preference sections as one bincode document.
//! - Keep the on-disk file in sync on every mutation (write-through).
//!
//! # Invariants
//! - Section names are unique; duplicate/missing section access is a
//!   programmer error surfaced as `ConfigError`, never auto-recovered.
//! - A missing file is created as an empty document on load.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};

/// One typed preference value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SettingValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

/// One named group of settings.
pub type Section = BTreeMap<String, SettingValue>;

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Codec(bincode::Error),
    MissingSection(String),
    DuplicateSection(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "configuration i/o error: {err}"),
            Self::Codec(err) => write!(f, "configuration encoding error: {err}"),
            Self::MissingSection(name) => {
                write!(f, "configuration section `{name}` does not exist")
            }
            Self::DuplicateSection(name) => {
                write!(f, "configuration section `{name}` already exists")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Codec(err) => Some(err),
            Self::MissingSection(_) | Self::DuplicateSection(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<bincode::Error> for ConfigError {
    fn from(value: bincode::Error) -> Self {
        Self::Codec(value)
    }
}

/// In-memory view of the configuration document with write-through
/// persistence.
#[derive(Debug)]
pub struct Configuration {
    path: PathBuf,
    sections: BTreeMap<String, Section>,
}

impl Configuration {
    /// Loads the document at `path`, creating an empty one (and its
    /// parent directory) when absent.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        if !path.exists() {
            let empty: BTreeMap<String, Section> = BTreeMap::new();
            fs::write(&path, bincode::serialize(&empty)?)?;
        }

        let raw = fs::read(&path)?;
        let sections = bincode::deserialize(&raw)?;
        Ok(Self { path, sections })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whole-document snapshot.
    pub fn sections(&self) -> &BTreeMap<String, Section> {
        &self.sections
    }

    /// Replaces the whole document.
    pub fn replace(&mut self, sections: BTreeMap<String, Section>) -> ConfigResult<()> {
        self.sections = sections;
        self.write()
    }

    /// Drops every section.
    pub fn reset(&mut self) -> ConfigResult<()> {
        self.sections.clear();
        self.write()
    }

    pub fn has_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    /// Creates an empty section. Fails when the name is taken.
    pub fn add_section(&mut self, name: &str) -> ConfigResult<()> {
        if self.sections.contains_key(name) {
            return Err(ConfigError::DuplicateSection(name.to_string()));
        }
        self.sections.insert(name.to_string(), Section::new());
        self.write()
    }

    pub fn section(&self, name: &str) -> ConfigResult<&Section> {
        self.sections.get(name).ok_or_else(|| missing(name))
    }

    /// Replaces an existing section's mapping.
    pub fn set_section(&mut self, name: &str, section: Section) -> ConfigResult<()> {
        let slot = self.sections.get_mut(name).ok_or_else(|| missing(name))?;
        *slot = section;
        self.write()
    }

    /// Merges `changes` into an existing section, overwriting key-wise.
    pub fn update_section(&mut self, name: &str, changes: Section) -> ConfigResult<()> {
        let slot = self.sections.get_mut(name).ok_or_else(|| missing(name))?;
        slot.extend(changes);
        self.write()
    }

    /// Empties an existing section, keeping it present.
    pub fn reset_section(&mut self, name: &str) -> ConfigResult<()> {
        let slot = self.sections.get_mut(name).ok_or_else(|| missing(name))?;
        slot.clear();
        self.write()
    }

    /// Removes a section permanently.
    pub fn delete_section(&mut self, name: &str) -> ConfigResult<()> {
        if self.sections.remove(name).is_none() {
            return Err(missing(name));
        }
        self.write()
    }

    fn write(&self) -> ConfigResult<()> {
        fs::write(&self.path, bincode::serialize(&self.sections)?)?;
        Ok(())
    }
}

fn missing(name: &str) -> ConfigError {
    ConfigError::MissingSection(name.to_string())
}
