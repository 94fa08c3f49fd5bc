//! Profile Page
//!
//! Account details, password change and profile picture upload.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlInputElement;

use crate::api::{self, AvatarUpload};
use crate::components::{LoadingSpinner, Notice, NoticeBanner};
use crate::context::use_app;
use crate::forms::{validate_avatar, PasswordForm, ProfileForm};
use crate::models::User;
use crate::session::use_session;

const MEMBER_SINCE_FORMAT: &str = "%B %-d, %Y";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProfileTab {
    Profile,
    Password,
}

/// Read a picked file into memory for the multipart upload.
async fn read_avatar(file: web_sys::File) -> Result<AvatarUpload, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("{:?}", e))?;
    Ok(AvatarUpload {
        file_name: file.name(),
        content_type: file.type_(),
        bytes: js_sys::Uint8Array::new(&buffer).to_vec(),
    })
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let ctx = use_app();
    let session = use_session();
    let notice = Notice::new();
    let (tab, set_tab) = signal(ProfileTab::Profile);
    let (saving, set_saving) = signal(false);
    let (uploading, set_uploading) = signal(false);

    let profile_form = RwSignal::new(
        session
            .user()
            .map(|u| ProfileForm::from_user(&u))
            .unwrap_or_default(),
    );
    let password_form = RwSignal::new(PasswordForm::default());

    // Pick up changes made from another device
    Effect::new(move |_| {
        let api = ctx.api();
        spawn_local(async move {
            match api::get_profile(&api).await {
                Ok(user) => {
                    // Keep edits the user already started
                    let current = profile_form.try_get_untracked();
                    let untouched = current.is_some()
                        && current == session.user().map(|u| ProfileForm::from_user(&u));
                    if untouched {
                        profile_form.try_set(ProfileForm::from_user(&user));
                    }
                    session.update_user(user);
                }
                Err(e) => log::warn!("Could not refresh profile: {}", e),
            }
        });
    });

    let switch_tab = move |next: ProfileTab| {
        notice.clear();
        set_tab.set(next);
    };

    let on_profile_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let data = match profile_form.with_untracked(ProfileForm::validate) {
            Ok(data) => data,
            Err(e) => {
                notice.error(e.to_string());
                return;
            }
        };

        set_saving.set(true);
        let api = ctx.api();
        spawn_local(async move {
            match api::update_profile(&api, &data).await {
                Ok(user) => {
                    log::info!("Updated profile for {}", user.username);
                    profile_form.set(ProfileForm::from_user(&user));
                    session.update_user(user);
                    notice.success("Profile updated successfully!");
                }
                Err(e) => {
                    log::error!("Failed to update profile: {}", e);
                    notice.error(e.user_message("Failed to update profile. Please try again."));
                }
            }
            set_saving.set(false);
        });
    };

    let on_password_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let data = match password_form.with_untracked(PasswordForm::validate) {
            Ok(data) => data,
            Err(e) => {
                notice.error(e.to_string());
                return;
            }
        };

        set_saving.set(true);
        let api = ctx.api();
        spawn_local(async move {
            match api::update_password(&api, &data).await {
                Ok(()) => {
                    log::info!("Password changed");
                    password_form.set(PasswordForm::default());
                    notice.success("Password updated successfully!");
                }
                Err(e) => {
                    log::error!("Failed to update password: {}", e);
                    notice.error(e.user_message("Failed to update password. Please try again."));
                }
            }
            set_saving.set(false);
        });
    };

    let on_avatar_change = move |ev: leptos::ev::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        // Let the same file be picked again after a failure
        input.set_value("");

        if let Err(e) = validate_avatar(&file.type_(), file.size() as u64) {
            notice.error(e.to_string());
            return;
        }

        set_uploading.set(true);
        notice.clear();
        let api = ctx.api();
        spawn_local(async move {
            let result = match read_avatar(file).await {
                Ok(upload) => api::upload_avatar(&api, upload)
                    .await
                    .map_err(|e| {
                        log::error!("Avatar upload failed: {}", e);
                        e.user_message("Failed to upload profile picture. Please try again.")
                    }),
                Err(e) => {
                    log::error!("Could not read picked file: {}", e);
                    Err("Failed to read the selected file".to_string())
                }
            };
            match result {
                Ok(user) => {
                    session.update_user(user);
                    notice.success("Profile picture updated successfully!");
                }
                Err(message) => notice.error(message),
            }
            set_uploading.set(false);
        });
    };

    let avatar = move |user: &User| match &user.avatar {
        Some(path) => view! {
            <img class="avatar" src=ctx.asset_url(path) alt=user.full_name() />
        }
        .into_any(),
        None => view! { <div class="avatar avatar-initials">{user.initials()}</div> }.into_any(),
    };

    let profile_header = move || {
        session.user().map(|user| {
            view! {
                <div class="profile-header">
                    <div class="avatar-wrap">
                        {avatar(&user)}
                        <label class="avatar-upload">
                            <Show when=move || uploading.get() fallback=|| "Change photo">
                                <LoadingSpinner />
                            </Show>
                            <input
                                type="file"
                                accept="image/*"
                                hidden=true
                                disabled=move || uploading.get()
                                on:change=on_avatar_change
                            />
                        </label>
                    </div>
                    <div class="profile-meta">
                        <h1>{user.full_name()}</h1>
                        <p class="username">{format!("@{}", user.username)}</p>
                        <p class="joined">
                            {format!("Member since {}", user.date_joined.format(MEMBER_SINCE_FORMAT))}
                        </p>
                    </div>
                </div>
            }
        })
    };

    let tab_class = move |which: ProfileTab| {
        move || if tab.get() == which { "tab active" } else { "tab" }
    };

    view! {
        <section class="page profile-page">
            <div class="card">
                {profile_header}

                <div class="tabs">
                    <button class=tab_class(ProfileTab::Profile) on:click=move |_| switch_tab(ProfileTab::Profile)>
                        "Profile"
                    </button>
                    <button class=tab_class(ProfileTab::Password) on:click=move |_| switch_tab(ProfileTab::Password)>
                        "Password"
                    </button>
                </div>

                <NoticeBanner notice=notice />

                <Show
                    when=move || tab.get() == ProfileTab::Profile
                    fallback=move || view! {
                        <form on:submit=on_password_submit>
                            <label class="field">
                                <span>"Current Password"</span>
                                <input
                                    type="password"
                                    required=true
                                    disabled=move || saving.get()
                                    prop:value=move || password_form.with(|f| f.current_password.clone())
                                    on:input=move |ev| {
                                        password_form.update(|f| f.current_password = event_target_value(&ev));
                                        notice.clear();
                                    }
                                />
                            </label>
                            <label class="field">
                                <span>"New Password"</span>
                                <input
                                    type="password"
                                    required=true
                                    disabled=move || saving.get()
                                    prop:value=move || password_form.with(|f| f.new_password.clone())
                                    on:input=move |ev| {
                                        password_form.update(|f| f.new_password = event_target_value(&ev));
                                        notice.clear();
                                    }
                                />
                            </label>
                            <label class="field">
                                <span>"Confirm New Password"</span>
                                <input
                                    type="password"
                                    required=true
                                    disabled=move || saving.get()
                                    prop:value=move || password_form.with(|f| f.confirm_password.clone())
                                    on:input=move |ev| {
                                        password_form.update(|f| f.confirm_password = event_target_value(&ev));
                                        notice.clear();
                                    }
                                />
                            </label>
                            <button type="submit" class="btn btn-primary" disabled=move || saving.get()>
                                {move || if saving.get() { "Updating..." } else { "Update Password" }}
                            </button>
                        </form>
                    }
                >
                    <form on:submit=on_profile_submit>
                        <div class="field-row">
                            <label class="field">
                                <span>"First Name"</span>
                                <input
                                    type="text"
                                    required=true
                                    disabled=move || saving.get()
                                    prop:value=move || profile_form.with(|f| f.first_name.clone())
                                    on:input=move |ev| {
                                        profile_form.update(|f| f.first_name = event_target_value(&ev));
                                        notice.clear();
                                    }
                                />
                            </label>
                            <label class="field">
                                <span>"Last Name"</span>
                                <input
                                    type="text"
                                    required=true
                                    disabled=move || saving.get()
                                    prop:value=move || profile_form.with(|f| f.last_name.clone())
                                    on:input=move |ev| {
                                        profile_form.update(|f| f.last_name = event_target_value(&ev));
                                        notice.clear();
                                    }
                                />
                            </label>
                        </div>
                        <label class="field">
                            <span>"Username"</span>
                            <input
                                type="text"
                                required=true
                                disabled=move || saving.get()
                                prop:value=move || profile_form.with(|f| f.username.clone())
                                on:input=move |ev| {
                                    profile_form.update(|f| f.username = event_target_value(&ev));
                                    notice.clear();
                                }
                            />
                        </label>
                        <label class="field">
                            <span>"Email Address"</span>
                            <input
                                type="email"
                                required=true
                                disabled=move || saving.get()
                                prop:value=move || profile_form.with(|f| f.email.clone())
                                on:input=move |ev| {
                                    profile_form.update(|f| f.email = event_target_value(&ev));
                                    notice.clear();
                                }
                            />
                        </label>
                        <button type="submit" class="btn btn-primary" disabled=move || saving.get()>
                            {move || if saving.get() { "Saving..." } else { "Save Changes" }}
                        </button>
                    </form>
                </Show>
            </div>
        </section>
    }
}
