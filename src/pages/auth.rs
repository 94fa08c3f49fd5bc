//! Login and Register Pages

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{LoadingSpinner, Notice, NoticeBanner};
use crate::config::REGISTER_REDIRECT_MS;
use crate::context::use_app;
use crate::forms::{LoginForm, RegisterForm};
use crate::reconcile::ListView;
use crate::routes::Route;
use crate::session::use_session;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app();
    let session = use_session();
    let notice = Notice::new();
    let form = RwSignal::new(LoginForm::default());
    let (loading, set_loading) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        let data = match form.with_untracked(LoginForm::validate) {
            Ok(data) => data,
            Err(e) => {
                notice.error(e.to_string());
                return;
            }
        };

        set_loading.set(true);
        notice.error.set(None);
        let api = ctx.api();
        spawn_local(async move {
            let result = api::login(&api, &data).await;
            set_loading.set(false);
            match result {
                Ok(response) => {
                    log::info!("Logged in as {}", response.user.username);
                    session.login(response.user, response.token);
                    ctx.navigate(Route::Tasks(ListView::Active));
                }
                Err(e) => {
                    log::error!("Login failed: {}", e);
                    notice.error(e.user_message("Login failed, please check your credentials"));
                }
            }
        });
    };

    view! {
        <section class="page form-page">
            <div class="card">
                <h1>"Welcome Back"</h1>
                <p class="subtitle">"Sign in to your Tasky account"</p>
                <form on:submit=on_submit>
                    <NoticeBanner notice=notice />
                    <label class="field">
                        <span>"Email or Username"</span>
                        <input
                            type="text"
                            name="loginIdentifier"
                            required=true
                            disabled=move || loading.get()
                            prop:value=move || form.with(|f| f.login_identifier.clone())
                            on:input=move |ev| {
                                form.update(|f| f.login_identifier = event_target_value(&ev));
                                notice.clear();
                            }
                        />
                    </label>
                    <label class="field">
                        <span>"Password"</span>
                        <input
                            type="password"
                            name="password"
                            required=true
                            disabled=move || loading.get()
                            prop:value=move || form.with(|f| f.password.clone())
                            on:input=move |ev| {
                                form.update(|f| f.password = event_target_value(&ev));
                                notice.clear();
                            }
                        />
                    </label>
                    <button type="submit" class="btn btn-primary btn-block" disabled=move || loading.get()>
                        <Show when=move || loading.get() fallback=|| "Sign In">
                            <LoadingSpinner />
                        </Show>
                    </button>
                </form>
                <p class="switch">
                    "Don't have an account? "
                    <button class="link" on:click=move |_| ctx.navigate(Route::Register)>
                        "Sign up here"
                    </button>
                </p>
            </div>
        </section>
    }
}

#[derive(Clone, Copy)]
enum RegisterField {
    FirstName,
    LastName,
    Username,
    Email,
    Password,
}

impl RegisterField {
    fn slot(self, form: &mut RegisterForm) -> &mut String {
        match self {
            RegisterField::FirstName => &mut form.first_name,
            RegisterField::LastName => &mut form.last_name,
            RegisterField::Username => &mut form.username,
            RegisterField::Email => &mut form.email,
            RegisterField::Password => &mut form.password,
        }
    }

    fn value(self, form: &RegisterForm) -> String {
        match self {
            RegisterField::FirstName => form.first_name.clone(),
            RegisterField::LastName => form.last_name.clone(),
            RegisterField::Username => form.username.clone(),
            RegisterField::Email => form.email.clone(),
            RegisterField::Password => form.password.clone(),
        }
    }

    fn label(self) -> &'static str {
        match self {
            RegisterField::FirstName => "First Name",
            RegisterField::LastName => "Last Name",
            RegisterField::Username => "Username",
            RegisterField::Email => "Email Address",
            RegisterField::Password => "Password",
        }
    }

    fn input_type(self) -> &'static str {
        match self {
            RegisterField::Email => "email",
            RegisterField::Password => "password",
            _ => "text",
        }
    }
}

/// One input bound to a field of the register form
fn register_input(
    form: RwSignal<RegisterForm>,
    notice: Notice,
    loading: ReadSignal<bool>,
    field: RegisterField,
) -> impl IntoView {
    view! {
        <label class="field">
            <span>{field.label()}</span>
            <input
                type=field.input_type()
                required=true
                disabled=move || loading.get()
                prop:value=move || form.with(|f| field.value(f))
                on:input=move |ev| {
                    form.update(|f| *field.slot(f) = event_target_value(&ev));
                    notice.clear();
                }
            />
        </label>
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let ctx = use_app();
    let notice = Notice::new();
    let form = RwSignal::new(RegisterForm::default());
    let (loading, set_loading) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        let data = match form.with_untracked(RegisterForm::validate) {
            Ok(data) => data,
            Err(e) => {
                notice.error(e.to_string());
                return;
            }
        };

        set_loading.set(true);
        notice.error.set(None);
        let api = ctx.api();
        spawn_local(async move {
            let result = api::register(&api, &data).await;
            set_loading.set(false);
            match result {
                Ok(()) => {
                    log::info!("Registered {}", data.username);
                    notice.success("Account created successfully! Redirecting to login...");
                    TimeoutFuture::new(REGISTER_REDIRECT_MS).await;
                    ctx.navigate(Route::Login);
                }
                Err(e) => {
                    log::error!("Registration failed: {}", e);
                    notice.error(e.user_message("Registration failed. Please try again."));
                }
            }
        });
    };

    view! {
        <section class="page form-page">
            <div class="card">
                <h1>"Create Account"</h1>
                <p class="subtitle">"Join Tasky and start organizing your tasks"</p>
                <form on:submit=on_submit>
                    <NoticeBanner notice=notice />
                    <div class="field-row">
                        {register_input(form, notice, loading, RegisterField::FirstName)}
                        {register_input(form, notice, loading, RegisterField::LastName)}
                    </div>
                    {register_input(form, notice, loading, RegisterField::Username)}
                    {register_input(form, notice, loading, RegisterField::Email)}
                    {register_input(form, notice, loading, RegisterField::Password)}
                    <small class="hint">"Password must be at least 6 characters long"</small>
                    <button type="submit" class="btn btn-primary btn-block" disabled=move || loading.get()>
                        <Show when=move || loading.get() fallback=|| "Create Account">
                            <LoadingSpinner />
                        </Show>
                    </button>
                </form>
                <p class="switch">
                    "Already have an account? "
                    <button class="link" on:click=move |_| ctx.navigate(Route::Login)>
                        "Sign in here"
                    </button>
                </p>
            </div>
        </section>
    }
}

#[component]
pub fn LandingPage() -> impl IntoView {
    let ctx = use_app();
    let session = use_session();

    view! {
        <section class="page landing">
            <h1>"Organize your work with Tasky"</h1>
            <p class="subtitle">
                "Create tasks, check them off, and recover anything you delete from the trash."
            </p>
            <Show
                when=move || session.is_authenticated()
                fallback=move || view! {
                    <div class="landing-actions">
                        <button class="btn btn-primary" on:click=move |_| ctx.navigate(Route::Register)>
                            "Get Started"
                        </button>
                        <button class="btn" on:click=move |_| ctx.navigate(Route::Login)>
                            "Sign In"
                        </button>
                    </div>
                }
            >
                <div class="landing-actions">
                    <button
                        class="btn btn-primary"
                        on:click=move |_| ctx.navigate(Route::Tasks(ListView::Active))
                    >
                        "Go to My Tasks"
                    </button>
                </div>
            </Show>
        </section>
    }
}
