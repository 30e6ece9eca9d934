//! StudyTrack - progress tracker for a week-by-week self-study curriculum
//!
//! Keeps a single JSON document recording where you are in the curriculum,
//! what you have finished, and any notes you jotted down along the way.
//!
//! # Storage
//!
//! ```text
//! progress_state.json
//! {
//!   "current_week": 1,
//!   "current_day": 1,
//!   "completed_tasks": [],
//!   "completed_theory": [],
//!   "completed_projects": [],
//!   "scores": { "week1": 0.0, ... },
//!   "last_updated": null,
//!   "notes": []
//! }
//! ```
//!
//! Every command loads the whole document, mutates it in memory and writes it
//! back. There is no locking; the last writer wins.
//!
//! # Example
//!
//! ```ignore
//! use studytrack::{CompletionKind, ProgressStore};
//!
//! let store = ProgressStore::open("progress_state.json");
//! store.mark_complete(CompletionKind::Task, "Calculator")?;
//! store.set_position("1", "2")?;
//! println!("{}", studytrack::report::render_status(&store.load()?, "C++ Mastery"));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod report;
mod state;
mod store;

pub use error::StoreError;
pub use state::{CompletionKind, Note, ProgressState};
pub use store::ProgressStore;

/// Default backing file, relative to the working directory
pub const DEFAULT_STATE_FILE: &str = "progress_state.json";

/// Week labels seeded into `scores` when a fresh state is created
pub const SCORE_WEEKS: [&str; 4] = ["week1", "week2", "week3", "week4"];

/// Number of notes shown in the status report
pub const RECENT_NOTES: usize = 3;
