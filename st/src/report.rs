//! Human-readable reports: status, resume guide and usage

use log::debug;
use std::path::Path;

use crate::state::ProgressState;

const FALLBACK_ACTION: &str = "Continue with current week's tasks";

/// Suggested next step for a (week, day) position
pub fn next_action(week: u32, day: u32) -> &'static str {
    match (week, day) {
        (1, 1) => "Set up development environment and start Calculator project",
        (1, 2) => "Complete Expression Parser and study control structures",
        (1, 3) => "Begin OOP concepts and Shape Hierarchy project",
        (1, 4) => "Master inheritance and polymorphism",
        (1, 5) => "Implement Banking System with memory management",
        (1, 6) => "Build Smart Pointer library and study RAII",
        (1, 7) => "Complete Memory Pool and integration testing",
        (2, 1) => "Master STL containers and build benchmark suite",
        _ => {
            debug!("next_action: no entry for week {} day {}", week, day);
            FALLBACK_ACTION
        }
    }
}

/// Position, completion counts, recent notes and the next recommended action
pub fn render_status(state: &ProgressState, curriculum_name: &str) -> String {
    let mut out = String::new();

    out.push_str(&format!("🎯 {} Progress Status\n", curriculum_name));
    out.push_str(&format!("{}\n", "=".repeat(40)));
    out.push_str(&format!(
        "Current Position: Week {}, Day {}\n",
        state.current_week, state.current_day
    ));
    let last_updated = state
        .last_updated
        .map(|ts| ts.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "Never".to_string());
    out.push_str(&format!("Last Updated: {}\n", last_updated));
    out.push('\n');

    out.push_str("📊 Completion Summary:\n");
    out.push_str(&format!("  Tasks Completed: {}\n", state.completed_tasks.len()));
    out.push_str(&format!("  Theory Completed: {}\n", state.completed_theory.len()));
    out.push_str(&format!("  Projects Completed: {}\n", state.completed_projects.len()));
    out.push('\n');

    let notes = state.recent_notes(crate::RECENT_NOTES);
    if !notes.is_empty() {
        out.push_str("📝 Recent Notes:\n");
        for note in notes {
            out.push_str(&format!("  - {}\n", note.text));
        }
        out.push('\n');
    }

    out.push_str(&format!(
        "🎯 Next Recommended Action: {}\n",
        next_action(state.current_week, state.current_day)
    ));
    out
}

/// Shell hints for picking the curriculum back up at the current week
pub fn render_resume_guide(state: &ProgressState, curriculum_root: &Path, bin: &str) -> String {
    let mut out = String::new();

    out.push_str("🚀 Quick Resume Guide\n");
    out.push_str(&format!("{}\n", "=".repeat(30)));
    out.push_str(&format!("cd {}\n", curriculum_root.display()));
    out.push_str(&format!("cd week-{}\n", state.current_week));
    out.push_str("cat README.md  # Review week overview\n");
    out.push_str("ls theory/     # Check theory files\n");
    out.push_str("ls projects/   # Check project files\n");
    out.push('\n');

    out.push_str("To update progress after completing tasks:\n");
    for (kind, placeholder) in [("task", "task_name"), ("theory", "theory_file"), ("project", "project_name")] {
        out.push_str(&format!("{} complete {} '{}'\n", bin, kind, placeholder));
    }
    out
}

/// Printed for unknown commands or missing arguments
pub fn usage(bin: &str) -> String {
    let mut out = String::from("Usage:\n");
    for args in [
        "status",
        "complete [task|theory|project] 'name'",
        "set [week] [day]",
        "note 'your note'",
        "resume",
    ] {
        out.push_str(&format!("  {} {}\n", bin, args));
    }
    out
}
