//! Task List Page
//!
//! Active, completed and trash views. Each fetches its slice once on mount
//! and afterwards only reconciles the events its cards report.

use chrono::Utc;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions::{restore_all, restore_all_prompt};
use crate::api::{self, ApiResult};
use crate::components::{LoadingSpinner, Notice, NoticeBanner, TaskCard};
use crate::context::use_app;
use crate::reconcile::{average_days_in_trash, pending_count, ListView, Reconciled, TaskEvent};
use crate::routes::Route;
use crate::store::*;

/// Reconcile a card's event; returns the notice the view flashes for it.
fn apply_card_event(store: &TaskListStore, event: &TaskEvent) -> Option<&'static str> {
    let outcome = store_apply_event(store, event);
    log::debug!("{:?} for task {}", outcome, event.task_id());
    if outcome == Reconciled::Excluded {
        store_view(store)?.exclusion_notice()
    } else {
        None
    }
}

/// The slice empties only when every restore went through.
fn finish_restore_all(store: &TaskListStore, notice: Notice, result: ApiResult<usize>) {
    match result {
        Ok(count) => {
            log::info!("Restored {} tasks", count);
            store_clear(store);
            notice.success("All tasks restored successfully!");
        }
        Err(e) => {
            log::error!("Failed to restore all tasks: {}", e);
            notice.error(e.user_message("Failed to restore all tasks"));
        }
    }
    store_set_restoring(store, false);
}

#[component]
pub fn TaskListPage(view: ListView) -> impl IntoView {
    let ctx = use_app();
    let store = TaskListStore::new(TaskListState::new(view));
    let notice = Notice::new();

    // Load the slice once on mount
    Effect::new(move |_| {
        let api = ctx.api();
        spawn_local(async move {
            match api::list_tasks(&api, view).await {
                Ok(tasks) => {
                    log::info!("Loaded {} tasks for {:?}", tasks.len(), view);
                    store_load(&store, tasks);
                }
                Err(e) => {
                    log::error!("Failed to fetch {:?} tasks: {}", view, e);
                    notice.error(e.user_message(view.load_failure()));
                }
            }
            store_set_loading(&store, false);
        });
    });

    let on_event = Callback::new(move |event: TaskEvent| {
        if let Some(message) = apply_card_event(&store, &event) {
            notice.flash_success(message);
        }
    });
    let on_error = Callback::new(move |message: String| notice.error(message));

    let on_restore_all = move |_| {
        let tasks = store_tasks(&store);
        if tasks.is_empty() || store_is_restoring(&store) {
            return;
        }
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message(&restore_all_prompt(tasks.len())).ok())
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        store_set_restoring(&store, true);
        let api = ctx.api();
        spawn_local(async move {
            let result = restore_all(&api, &tasks).await;
            finish_restore_all(&store, notice, result);
        });
    };

    let stats = move || {
        let tasks = store_tasks(&store);
        let cards = match view {
            ListView::Active => vec![
                (tasks.len().to_string(), "Active Tasks"),
                (pending_count(&tasks).to_string(), "Pending"),
            ],
            ListView::Completed => vec![(tasks.len().to_string(), "Completed Tasks")],
            ListView::Trash => vec![
                (tasks.len().to_string(), "Deleted Tasks"),
                (average_days_in_trash(&tasks, Utc::now()).to_string(), "Avg. Days in Trash"),
            ],
        };
        cards
            .into_iter()
            .map(|(value, label)| view! {
                <div class="stat-card">
                    <span class="stat-value">{value}</span>
                    <span class="stat-label">{label}</span>
                </div>
            })
            .collect_view()
    };

    view! {
        <Show
            when=move || !store_is_loading(&store)
            fallback=move || view! { <LoadingSpinner message=view.loading_message() /> }
        >
            <section class="page task-list-page">
                <div class="page-header">
                    <h1>{view.title()}</h1>
                    {match view {
                        ListView::Active => view! {
                            <button class="btn btn-primary" on:click=move |_| ctx.navigate(Route::NewTask)>
                                "Add New Task"
                            </button>
                        }.into_any(),
                        ListView::Trash => view! {
                            <Show when=move || !store_tasks(&store).is_empty()>
                                <button
                                    class="btn btn-primary"
                                    disabled=move || store_is_restoring(&store)
                                    on:click=on_restore_all
                                >
                                    "Restore All"
                                </button>
                            </Show>
                        }.into_any(),
                        ListView::Completed => ().into_any(),
                    }}
                </div>

                <NoticeBanner notice=notice />

                <div class="stats">{stats}</div>

                {(view == ListView::Trash).then(|| view! {
                    <div class="alert alert-warning">
                        "Tasks in trash will be permanently deleted after 30 days."
                    </div>
                })}

                <Show
                    when=move || !store_tasks(&store).is_empty()
                    fallback=move || view! {
                        <div class="empty-state">
                            <h2>{view.empty_message()}</h2>
                            {(view == ListView::Active).then(|| view! {
                                <p>"Create your first task to get started with organizing your work."</p>
                                <button class="btn btn-primary" on:click=move |_| ctx.navigate(Route::NewTask)>
                                    "Create Your First Task"
                                </button>
                            })}
                        </div>
                    }
                >
                    <div class="task-list">
                        <For
                            each=move || store_tasks(&store)
                            key=|task| {
                                // Key on every field a merge can change so merged cards re-render
                                (
                                    task.id.clone(),
                                    task.title.clone(),
                                    task.description.clone(),
                                    task.is_completed,
                                    task.is_deleted,
                                )
                            }
                            children=move |task| view! {
                                <TaskCard task=task view=view on_event=on_event on_error=on_error />
                            }
                        />
                    </div>
                </Show>
            </section>
        </Show>
    }
}
