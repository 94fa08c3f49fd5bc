//! Task Lifecycle Actions
//!
//! The four requests a task card can issue, and the event each one reports
//! back to its list view once the server confirms it.

use futures::future::try_join_all;

use crate::api::{self, ApiClient, ApiResult};
use crate::models::{Task, TaskChanges};
use crate::reconcile::{ListView, TaskEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskAction {
    Complete,
    Incomplete,
    Delete,
    Restore,
}

impl TaskAction {
    /// Actions a card offers for `task` when rendered in `view`, in display order.
    pub fn available(view: ListView, task: &Task) -> Vec<TaskAction> {
        match view {
            ListView::Active => vec![TaskAction::toggle_for(task), TaskAction::Delete],
            ListView::Completed => vec![TaskAction::Incomplete, TaskAction::Delete],
            ListView::Trash => vec![TaskAction::Restore],
        }
    }

    /// Complete an open task, reopen a completed one.
    pub fn toggle_for(task: &Task) -> TaskAction {
        if task.is_completed {
            TaskAction::Incomplete
        } else {
            TaskAction::Complete
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TaskAction::Complete => "Mark Complete",
            TaskAction::Incomplete => "Mark Incomplete",
            TaskAction::Delete => "Delete",
            TaskAction::Restore => "Restore",
        }
    }

    pub fn failure_message(self) -> &'static str {
        match self {
            TaskAction::Complete | TaskAction::Incomplete => "Failed to update task status",
            TaskAction::Delete => "Failed to delete task",
            TaskAction::Restore => "Failed to restore task",
        }
    }

    /// The delta reported upward: exactly the fields the action changed.
    pub fn event(self, task_id: &str) -> TaskEvent {
        let task_id = task_id.to_string();
        match self {
            TaskAction::Complete => TaskEvent::Changed {
                task_id,
                changes: TaskChanges::completed(true),
            },
            TaskAction::Incomplete => TaskEvent::Changed {
                task_id,
                changes: TaskChanges::completed(false),
            },
            TaskAction::Restore => TaskEvent::Changed {
                task_id,
                changes: TaskChanges::deleted(false),
            },
            TaskAction::Delete => TaskEvent::Deleted { task_id },
        }
    }

    /// Issue the request; on success return the event to reconcile with.
    pub async fn perform(self, api: &ApiClient, task_id: &str) -> ApiResult<TaskEvent> {
        match self {
            TaskAction::Complete => api::complete_task(api, task_id).await?,
            TaskAction::Incomplete => api::incomplete_task(api, task_id).await?,
            TaskAction::Delete => api::delete_task(api, task_id).await?,
            TaskAction::Restore => api::restore_task(api, task_id).await?,
        };
        log::info!("{:?} task {}", self, task_id);
        Ok(self.event(task_id))
    }
}

/// Restore every task in the trash concurrently. Fails if any restore fails.
pub async fn restore_all(api: &ApiClient, tasks: &[Task]) -> ApiResult<usize> {
    let restored = try_join_all(tasks.iter().map(|t| api::restore_task(api, &t.id))).await?;
    Ok(restored.len())
}

pub fn restore_all_prompt(count: usize) -> String {
    format!("Are you sure you want to restore all {} tasks?", count)
}
