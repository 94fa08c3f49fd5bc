//! Task Card Component
//!
//! One task in a list view, with the lifecycle actions that view allows.
//! A card never touches the list itself: after the server confirms an
//! action it reports the resulting `TaskEvent` through `on_event`.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions::TaskAction;
use crate::api::ApiResult;
use crate::components::{DeleteConfirmButton, LoadingSpinner};
use crate::context::use_app;
use crate::models::Task;
use crate::reconcile::{ListView, TaskEvent};
use crate::routes::Route;

const DATE_FORMAT: &str = "%b %-d, %Y, %H:%M";

/// Hand a finished action to the list view. Dropped if the view has unmounted.
fn report(
    action: TaskAction,
    task_id: &str,
    result: ApiResult<TaskEvent>,
    on_event: Callback<TaskEvent>,
    on_error: Callback<String>,
) {
    match result {
        Ok(event) => {
            on_event.try_run(event);
        }
        Err(e) => {
            log::error!("{:?} failed for task {}: {}", action, task_id, e);
            on_error.try_run(e.user_message(action.failure_message()));
        }
    }
}

#[component]
pub fn TaskCard(
    task: Task,
    view: ListView,
    #[prop(into)] on_event: Callback<TaskEvent>,
    #[prop(into)] on_error: Callback<String>,
) -> impl IntoView {
    let ctx = use_app();
    let busy = RwSignal::new(false);
    let task_id = StoredValue::new(task.id.clone());

    let run = move |action: TaskAction| {
        // Controls are disabled while busy; this also guards re-entry
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let api = ctx.api();
        let id = task_id.get_value();
        spawn_local(async move {
            let result = action.perform(&api, &id).await;
            busy.try_set(false);
            report(action, &id, result, on_event, on_error);
        });
    };

    let card_class = match view {
        ListView::Active => "task-card",
        ListView::Completed => "task-card task-card-completed",
        ListView::Trash => "task-card task-card-trash",
    };
    let title_class = if task.is_completed { "task-title done" } else { "task-title" };
    let created = task.date_created.format(DATE_FORMAT).to_string();
    let updated = task
        .was_edited()
        .then(|| task.date_updated.format(DATE_FORMAT).to_string());
    let is_completed = task.is_completed;

    let buttons = TaskAction::available(view, &task)
        .into_iter()
        .map(|action| match action {
            TaskAction::Delete => view! {
                <DeleteConfirmButton
                    disabled=busy
                    on_confirm=move |_: ()| run(TaskAction::Delete)
                />
            }
            .into_any(),
            _ => {
                let class = if action == TaskAction::Complete { "btn btn-primary" } else { "btn" };
                view! {
                    <button
                        class=class
                        disabled=move || busy.get()
                        on:click=move |_| run(action)
                    >
                        {action.label()}
                    </button>
                }
                .into_any()
            }
        })
        .collect_view();

    view! {
        <article class=card_class>
            <header class="task-card-header">
                <h3 class=title_class>{task.title.clone()}</h3>
                <Show when=move || busy.get()>
                    <LoadingSpinner />
                </Show>
            </header>

            {is_completed.then(|| view! { <span class="chip chip-success">"Completed"</span> })}

            <p class="task-description">{task.description.clone()}</p>

            <div class="task-dates">
                <small>"Created: " {created}</small>
                {updated.map(|u| view! { <small>"Updated: " {u}</small> })}
            </div>

            <div class="task-actions">
                {buttons}
                {(view == ListView::Active).then(|| view! {
                    <button
                        class="btn"
                        on:click=move |_| ctx.navigate(Route::UpdateTask(task_id.get_value()))
                    >
                        "Edit"
                    </button>
                })}
            </div>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;

    #[test]
    fn test_report_reaches_live_view() {
        let owner = Owner::new();
        owner.with(|| {
            let seen = RwSignal::new(None::<TaskEvent>);
            let errors = RwSignal::new(None::<String>);
            let on_event = Callback::new(move |event| seen.set(Some(event)));
            let on_error = Callback::new(move |message| errors.set(Some(message)));

            report(TaskAction::Restore, "X", Ok(TaskAction::Restore.event("X")), on_event, on_error);
            assert_eq!(seen.get_untracked(), Some(TaskAction::Restore.event("X")));

            let failure = ApiError::Status {
                status: 500,
                message: None,
            };
            report(TaskAction::Delete, "X", Err(failure), on_event, on_error);
            assert_eq!(errors.get_untracked().as_deref(), Some("Failed to delete task"));
        });
    }

    #[test]
    fn test_report_after_unmount_is_dropped() {
        let owner = Owner::new();
        let (on_event, on_error) = owner.with(|| {
            (
                Callback::new(|_: TaskEvent| {}),
                Callback::new(|_: String| {}),
            )
        });
        owner.cleanup();

        report(TaskAction::Complete, "A", Ok(TaskAction::Complete.event("A")), on_event, on_error);
        let failure = ApiError::Status {
            status: 404,
            message: Some("Task not found".to_string()),
        };
        report(TaskAction::Complete, "A", Err(failure), on_event, on_error);
    }
}
