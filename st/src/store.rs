//! File-backed progress store

use chrono::{Local, NaiveDateTime};
use log::{debug, info};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::state::{CompletionKind, Note, ProgressState};

/// Owns the backing file; each operation is a full load, mutate, save cycle
#[derive(Debug, Clone)]
pub struct ProgressStore {
    path: PathBuf,
}

impl ProgressStore {
    /// Point a store at a backing file. Nothing is read until `load`.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        debug!("Opened progress store at {}", path.display());
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole document, or the default state if the file does not exist
    pub fn load(&self) -> Result<ProgressState, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("load: {} missing, using defaults", self.path.display());
                return Ok(ProgressState::default());
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let mut state: ProgressState = serde_json::from_str(&content).map_err(|source| StoreError::Malformed {
            path: self.path.clone(),
            source,
        })?;
        state.normalize()?;
        debug!(
            "load: week {} day {}, {} notes",
            state.current_week,
            state.current_day,
            state.notes.len()
        );
        Ok(state)
    }

    /// Stamp `last_updated` and write the whole document back
    pub fn save(&self, state: &mut ProgressState) -> Result<(), StoreError> {
        state.last_updated = Some(now());

        let io_err = |source: std::io::Error| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let mut content = serde_json::to_string_pretty(state).map_err(|source| StoreError::Malformed {
            path: self.path.clone(),
            source,
        })?;
        content.push('\n');
        fs::write(&self.path, content).map_err(io_err)?;

        info!("Saved progress to {}", self.path.display());
        Ok(())
    }

    /// Record `name` as complete; returns false if it already was
    pub fn mark_complete(&self, kind: CompletionKind, name: &str) -> Result<bool, StoreError> {
        let mut state = self.load()?;
        let added = state.insert_completed(kind, name);
        self.save(&mut state)?;
        Ok(added)
    }

    /// Move to the given week and day, both parsed as positive integers
    ///
    /// Arguments are validated before anything is read or written.
    pub fn set_position(&self, week: &str, day: &str) -> Result<(u32, u32), StoreError> {
        let week = parse_position("week", week)?;
        let day = parse_position("day", day)?;

        let mut state = self.load()?;
        state.current_week = week;
        state.current_day = day;
        self.save(&mut state)?;
        Ok((week, day))
    }

    /// Append a note stamped with the current time
    pub fn add_note(&self, text: &str) -> Result<Note, StoreError> {
        let mut state = self.load()?;
        let note = state.push_note(now(), text).clone();
        self.save(&mut state)?;
        Ok(note)
    }
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

fn parse_position(label: &str, raw: &str) -> Result<u32, StoreError> {
    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_| StoreError::Validation(format!("{} must be an integer, got '{}'", label, raw)))?;
    if value < 1 {
        return Err(StoreError::Validation(format!(
            "{} must be a positive integer, got '{}'",
            label, raw
        )));
    }
    u32::try_from(value).map_err(|_| StoreError::Validation(format!("{} is out of range: '{}'", label, raw)))
}
