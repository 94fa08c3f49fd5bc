//! Task Form Page
//!
//! Create a task, or edit the title and description of an existing one.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, CreateTaskData, UpdateTaskData};
use crate::components::{LoadingSpinner, Notice, NoticeBanner};
use crate::config::TASK_FORM_REDIRECT_MS;
use crate::context::use_app;
use crate::forms::{char_counter, FormError, TaskForm, DESCRIPTION_MAX_CHARS, TITLE_MAX_CHARS};
use crate::reconcile::ListView;
use crate::routes::Route;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskFormMode {
    Create,
    Update(String),
}

impl TaskFormMode {
    fn heading(&self) -> (&'static str, &'static str) {
        match self {
            TaskFormMode::Create => ("Create New Task", "Add a new task to your list"),
            TaskFormMode::Update(_) => ("Update Task", "Edit your task details"),
        }
    }

    fn submit_label(&self) -> &'static str {
        match self {
            TaskFormMode::Create => "Create Task",
            TaskFormMode::Update(_) => "Update Task",
        }
    }
}

enum SaveRequest {
    Create(CreateTaskData),
    Update(String, UpdateTaskData),
}

impl SaveRequest {
    fn build(mode: &TaskFormMode, form: &TaskForm) -> Result<Self, FormError> {
        Ok(match mode {
            TaskFormMode::Create => SaveRequest::Create(form.to_create()?),
            TaskFormMode::Update(id) => SaveRequest::Update(id.clone(), form.to_update()?),
        })
    }
}

#[component]
pub fn TaskFormPage(mode: TaskFormMode) -> impl IntoView {
    let ctx = use_app();
    let notice = Notice::new();
    let form = RwSignal::new(TaskForm::default());
    let (submitting, set_submitting) = signal(false);
    let (fetching, set_fetching) = signal(matches!(mode, TaskFormMode::Update(_)));
    let mode = StoredValue::new(mode);

    // Prefill from the server when editing
    Effect::new(move |_| {
        let TaskFormMode::Update(id) = mode.get_value() else {
            return;
        };
        let api = ctx.api();
        spawn_local(async move {
            match api::get_task(&api, &id).await {
                Ok(task) => form.set(TaskForm {
                    title: task.title,
                    description: task.description,
                }),
                Err(e) => {
                    log::error!("Failed to fetch task {}: {}", id, e);
                    notice.error(e.user_message("Failed to fetch task details"));
                }
            }
            set_fetching.set(false);
        });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let current = form.get_untracked();
        let mode = mode.get_value();
        let api = ctx.api();

        // Validate before anything goes over the wire
        let request = match SaveRequest::build(&mode, &current) {
            Ok(request) => request,
            Err(e) => {
                notice.error(e.to_string());
                return;
            }
        };

        set_submitting.set(true);
        notice.error.set(None);
        spawn_local(async move {
            let result = match &request {
                SaveRequest::Create(data) => api::create_task(&api, data).await,
                SaveRequest::Update(id, data) => api::update_task(&api, id, data).await,
            };
            set_submitting.set(false);
            match result {
                Ok(task) => {
                    log::info!("Saved task {}", task.id);
                    let message = match mode {
                        TaskFormMode::Create => "Task created successfully! Redirecting...",
                        TaskFormMode::Update(_) => "Task updated successfully! Redirecting...",
                    };
                    notice.success(message);
                    TimeoutFuture::new(TASK_FORM_REDIRECT_MS).await;
                    ctx.navigate(Route::Tasks(ListView::Active));
                }
                Err(e) => {
                    log::error!("Failed to save task: {}", e);
                    let fallback = match mode {
                        TaskFormMode::Create => "Failed to create task. Please try again.",
                        TaskFormMode::Update(_) => "Failed to update task. Please try again.",
                    };
                    notice.error(e.user_message(fallback));
                }
            }
        });
    };

    let (heading, subheading) = mode.with_value(TaskFormMode::heading);
    let submit_label = mode.with_value(TaskFormMode::submit_label);

    view! {
        <Show
            when=move || !fetching.get()
            fallback=|| view! { <LoadingSpinner message="Loading task details..." /> }
        >
            <section class="page form-page">
                <div class="card">
                    <h1>{heading}</h1>
                    <p class="subtitle">{subheading}</p>
                    <form on:submit=on_submit>
                        <NoticeBanner notice=notice />

                        <label class="field">
                            <span>"Task Title"</span>
                            <input
                                type="text"
                                name="title"
                                required=true
                                maxlength=TITLE_MAX_CHARS.to_string()
                                disabled=move || submitting.get()
                                prop:value=move || form.with(|f| f.title.clone())
                                on:input=move |ev| {
                                    form.update(|f| f.title = event_target_value(&ev));
                                    notice.clear();
                                }
                            />
                            <small>{move || form.with(|f| char_counter(&f.title, TITLE_MAX_CHARS))}</small>
                        </label>

                        <label class="field">
                            <span>"Description"</span>
                            <textarea
                                name="description"
                                rows="6"
                                required=true
                                maxlength=DESCRIPTION_MAX_CHARS.to_string()
                                disabled=move || submitting.get()
                                prop:value=move || form.with(|f| f.description.clone())
                                on:input=move |ev| {
                                    form.update(|f| f.description = event_target_value(&ev));
                                    notice.clear();
                                }
                            ></textarea>
                            <small>
                                {move || form.with(|f| char_counter(&f.description, DESCRIPTION_MAX_CHARS))}
                            </small>
                        </label>

                        <div class="form-actions">
                            <button
                                type="button"
                                class="btn"
                                disabled=move || submitting.get()
                                on:click=move |_| ctx.navigate(Route::Tasks(ListView::Active))
                            >
                                "Cancel"
                            </button>
                            <button
                                type="submit"
                                class="btn btn-primary"
                                disabled=move || submitting.get() || !form.with(TaskForm::can_submit)
                            >
                                {move || if submitting.get() { "Saving..." } else { submit_label }}
                            </button>
                        </div>
                    </form>
                </div>
            </section>
        </Show>
    }
}
