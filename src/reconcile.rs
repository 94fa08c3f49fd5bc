//! List-View Reconciliation
//!
//! Each list view fetches its slice once and then keeps it in step with the
//! events its task cards report, without going back to the server.

use chrono::{DateTime, Utc};

use crate::models::{Lifecycle, Task, TaskChanges};

/// The three filtered task lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListView {
    Active,
    Completed,
    Trash,
}

impl ListView {
    /// Membership predicate for this view.
    pub fn admits(self, task: &Task) -> bool {
        matches!(
            (self, task.lifecycle()),
            (ListView::Active, Lifecycle::Active)
                | (ListView::Completed, Lifecycle::Completed)
                | (ListView::Trash, Lifecycle::Trashed)
        )
    }

    pub fn title(self) -> &'static str {
        match self {
            ListView::Active => "My Tasks",
            ListView::Completed => "Completed Tasks",
            ListView::Trash => "Trash",
        }
    }

    pub fn loading_message(self) -> &'static str {
        match self {
            ListView::Active => "Loading your tasks...",
            ListView::Completed => "Loading completed tasks...",
            ListView::Trash => "Loading deleted tasks...",
        }
    }

    pub fn load_failure(self) -> &'static str {
        match self {
            ListView::Active => "Failed to fetch tasks",
            ListView::Completed => "Failed to fetch completed tasks",
            ListView::Trash => "Failed to fetch deleted tasks",
        }
    }

    pub fn empty_message(self) -> &'static str {
        match self {
            ListView::Active => "No tasks yet",
            ListView::Completed => "No completed tasks yet",
            ListView::Trash => "Trash is empty",
        }
    }

    /// Notice shown when a task leaves this view through its own card.
    pub fn exclusion_notice(self) -> Option<&'static str> {
        match self {
            ListView::Trash => Some("Task restored successfully!"),
            ListView::Active | ListView::Completed => None,
        }
    }
}

/// What a task card reports after the server confirmed a mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskEvent {
    Changed { task_id: String, changes: TaskChanges },
    Deleted { task_id: String },
}

impl TaskEvent {
    pub fn task_id(&self) -> &str {
        match self {
            TaskEvent::Changed { task_id, .. } | TaskEvent::Deleted { task_id } => task_id,
        }
    }
}

/// Which reconciliation rule an event triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconciled {
    /// Fields merged, task kept in place
    Merged,
    /// Merged task no longer belongs to the view and was dropped
    Excluded,
    /// Task deleted
    Removed,
    /// No task with that id in the view
    Ignored,
}

/// Apply `event` to the locally held slice of `view`.
pub fn reconcile(view: ListView, tasks: &mut Vec<Task>, event: &TaskEvent) -> Reconciled {
    let Some(index) = tasks.iter().position(|t| t.id == event.task_id()) else {
        return Reconciled::Ignored;
    };

    match event {
        TaskEvent::Deleted { .. } => {
            tasks.remove(index);
            Reconciled::Removed
        }
        TaskEvent::Changed { changes, .. } => {
            tasks[index].apply(changes);
            if view.admits(&tasks[index]) {
                Reconciled::Merged
            } else {
                tasks.remove(index);
                Reconciled::Excluded
            }
        }
    }
}

// ========================
// View Statistics
// ========================

const DAY_MS: f64 = 86_400_000.0;

/// Tasks still waiting to be completed.
pub fn pending_count(tasks: &[Task]) -> usize {
    tasks.iter().filter(|t| !t.is_completed).count()
}

/// Average whole days since each task was last updated (i.e. moved to trash),
/// rounded up. An empty trash averages 0.
pub fn average_days_in_trash(tasks: &[Task], now: DateTime<Utc>) -> u64 {
    if tasks.is_empty() {
        return 0;
    }
    let total: f64 = tasks
        .iter()
        .map(|t| {
            let elapsed = (now - t.date_updated).num_milliseconds() as f64;
            (elapsed / DAY_MS).ceil()
        })
        .sum();
    (total / tasks.len() as f64).ceil().max(0.0) as u64
}
