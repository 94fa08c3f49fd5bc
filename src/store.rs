//! Task List Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity over the slice a
//! list view owns.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Task;
use crate::reconcile::{reconcile, ListView, Reconciled, TaskEvent};

/// State owned by one mounted list view
#[derive(Clone, Debug, Store)]
pub struct TaskListState {
    pub view: ListView,
    /// Tasks in server order
    pub tasks: Vec<Task>,
    /// Initial fetch still running
    pub loading: bool,
    /// Bulk restore in flight
    pub restoring: bool,
}

impl TaskListState {
    pub fn new(view: ListView) -> Self {
        Self {
            view,
            tasks: Vec::new(),
            loading: true,
            restoring: false,
        }
    }
}

/// Type alias for the store
pub type TaskListStore = Store<TaskListState>;

// ========================
// Store Helper Functions
// ========================

/// `None` once the owning view has unmounted
pub fn store_view(store: &TaskListStore) -> Option<ListView> {
    store.view().try_get_untracked()
}

pub fn store_tasks(store: &TaskListStore) -> Vec<Task> {
    store.tasks().get()
}

pub fn store_is_loading(store: &TaskListStore) -> bool {
    store.loading().get()
}

pub fn store_is_restoring(store: &TaskListStore) -> bool {
    store.restoring().get()
}

/// Replace the slice after a fetch
pub fn store_load(store: &TaskListStore, tasks: Vec<Task>) {
    store.tasks().set(tasks);
}

pub fn store_set_loading(store: &TaskListStore, loading: bool) {
    store.loading().set(loading);
}

pub fn store_set_restoring(store: &TaskListStore, restoring: bool) {
    store.restoring().set(restoring);
}

/// Reconcile a card's event against the view's slice.
/// A store whose view has unmounted ignores the event.
pub fn store_apply_event(store: &TaskListStore, event: &TaskEvent) -> Reconciled {
    let Some(view) = store_view(store) else {
        return Reconciled::Ignored;
    };
    store
        .tasks()
        .try_update(|tasks| reconcile(view, tasks, event))
        .unwrap_or(Reconciled::Ignored)
}

/// Drop everything, e.g. after a bulk restore
pub fn store_clear(store: &TaskListStore) {
    store.tasks().try_update(|tasks| tasks.clear());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::task;
    use crate::models::TaskChanges;

    fn ids(store: &TaskListStore) -> Vec<String> {
        store_tasks(store).into_iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_complete_in_active_view_drops_task() {
        let owner = Owner::new();
        owner.with(|| {
            let store = TaskListStore::new(TaskListState::new(ListView::Active));
            store_load(&store, vec![task("A", false, false), task("B", false, false)]);

            let event = TaskEvent::Changed {
                task_id: "A".to_string(),
                changes: TaskChanges::completed(true),
            };
            assert_eq!(store_apply_event(&store, &event), Reconciled::Excluded);
            assert_eq!(ids(&store), ["B"]);
        });
    }

    #[test]
    fn test_delete_removes_only_that_task() {
        let owner = Owner::new();
        owner.with(|| {
            let store = TaskListStore::new(TaskListState::new(ListView::Completed));
            store_load(&store, vec![task("A", true, false), task("B", true, false)]);

            let event = TaskEvent::Deleted {
                task_id: "B".to_string(),
            };
            assert_eq!(store_apply_event(&store, &event), Reconciled::Removed);
            assert_eq!(ids(&store), ["A"]);
        });
    }

    #[test]
    fn test_clear_empties_the_slice() {
        let owner = Owner::new();
        owner.with(|| {
            let store = TaskListStore::new(TaskListState::new(ListView::Trash));
            store_load(&store, vec![task("X", false, true)]);
            store_clear(&store);
            assert!(store_tasks(&store).is_empty());
        });
    }

    #[test]
    fn test_writes_after_unmount_are_ignored() {
        let owner = Owner::new();
        let store = owner.with(|| {
            let store = TaskListStore::new(TaskListState::new(ListView::Trash));
            store_load(&store, vec![task("X", false, true)]);
            store
        });
        owner.cleanup();

        let event = TaskEvent::Changed {
            task_id: "X".to_string(),
            changes: TaskChanges::deleted(false),
        };
        assert_eq!(store_apply_event(&store, &event), Reconciled::Ignored);
        store_clear(&store);
        store_set_restoring(&store, false);
    }
}
