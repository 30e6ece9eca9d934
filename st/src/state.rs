//! Persisted progress document

use chrono::NaiveDateTime;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::error::StoreError;

/// Which completed set an item belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CompletionKind {
    Task,
    Theory,
    Project,
}

impl CompletionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompletionKind::Task => "task",
            CompletionKind::Theory => "theory",
            CompletionKind::Project => "project",
        }
    }
}

impl fmt::Display for CompletionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A timestamped free-text note
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub timestamp: NaiveDateTime,
    /// Older files stored this under `note`
    #[serde(alias = "note")]
    pub text: String,
}

/// Everything the tracker knows about your progress
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressState {
    pub current_week: u32,
    pub current_day: u32,
    pub completed_tasks: Vec<String>,
    pub completed_theory: Vec<String>,
    pub completed_projects: Vec<String>,
    /// Seeded once at creation, never changed by a command
    pub scores: BTreeMap<String, f64>,
    /// Stamped on every save, `null` until the first one
    pub last_updated: Option<NaiveDateTime>,
    pub notes: Vec<Note>,
}

impl Default for ProgressState {
    fn default() -> Self {
        Self {
            current_week: 1,
            current_day: 1,
            completed_tasks: Vec::new(),
            completed_theory: Vec::new(),
            completed_projects: Vec::new(),
            scores: crate::SCORE_WEEKS.iter().map(|w| (w.to_string(), 0.0)).collect(),
            last_updated: None,
            notes: Vec::new(),
        }
    }
}

impl ProgressState {
    /// Items recorded as complete for the given kind
    pub fn completed(&self, kind: CompletionKind) -> &[String] {
        match kind {
            CompletionKind::Task => &self.completed_tasks,
            CompletionKind::Theory => &self.completed_theory,
            CompletionKind::Project => &self.completed_projects,
        }
    }

    fn completed_mut(&mut self, kind: CompletionKind) -> &mut Vec<String> {
        match kind {
            CompletionKind::Task => &mut self.completed_tasks,
            CompletionKind::Theory => &mut self.completed_theory,
            CompletionKind::Project => &mut self.completed_projects,
        }
    }

    /// Add `name` to the set for `kind`; returns false if it was already there
    pub fn insert_completed(&mut self, kind: CompletionKind, name: &str) -> bool {
        let set = self.completed_mut(kind);
        if set.iter().any(|existing| existing == name) {
            debug!("insert_completed: {} '{}' already present", kind, name);
            return false;
        }
        set.push(name.to_string());
        true
    }

    /// Append a note stamped with `timestamp`
    pub fn push_note(&mut self, timestamp: NaiveDateTime, text: impl Into<String>) -> &Note {
        self.notes.push(Note {
            timestamp,
            text: text.into(),
        });
        &self.notes[self.notes.len() - 1]
    }

    /// The last `count` notes, oldest first
    pub fn recent_notes(&self, count: usize) -> &[Note] {
        let start = self.notes.len().saturating_sub(count);
        &self.notes[start..]
    }

    /// Check the position invariants and collapse duplicate completions
    ///
    /// Hand-edited files can contain repeated identifiers; the first
    /// occurrence is kept.
    pub fn normalize(&mut self) -> Result<(), StoreError> {
        if self.current_week == 0 {
            return Err(StoreError::Validation("current_week must be at least 1".to_string()));
        }
        if self.current_day == 0 {
            return Err(StoreError::Validation("current_day must be at least 1".to_string()));
        }

        for kind in [CompletionKind::Task, CompletionKind::Theory, CompletionKind::Project] {
            let set = self.completed_mut(kind);
            let before = set.len();
            let mut seen = std::collections::HashSet::new();
            set.retain(|name| seen.insert(name.clone()));
            if set.len() != before {
                warn!(
                    "Dropped {} duplicate {} entries from progress file",
                    before - set.len(),
                    kind
                );
            }
        }
        Ok(())
    }
}
