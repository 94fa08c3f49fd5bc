//! Delete Confirm Button Component
//!
//! Inline delete confirmation: the first click asks, the second deletes.

use leptos::prelude::*;

fn confirm_label(deleting: bool) -> &'static str {
    if deleting {
        "Deleting..."
    } else {
        "Delete"
    }
}

/// Inline delete confirmation button
///
/// Shows "Delete" initially. When clicked, shows a prompt with confirm and
/// cancel buttons; cancelling has no side effects.
///
/// # Arguments
/// * `disabled` - Disables both steps while a request is in flight
/// * `on_confirm` - Callback to execute when user confirms deletion
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] disabled: Signal<bool>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirm_delete, set_confirm_delete) = signal(false);

    view! {
        <Show when=move || !confirm_delete.get()>
            <button
                class="btn btn-danger-outline"
                disabled=move || disabled.get()
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_confirm_delete.set(true);
                }
            >
                "Delete"
            </button>
        </Show>
        <Show when=move || confirm_delete.get()>
            <span class="delete-confirm">
                <span class="delete-confirm-text">
                    "Delete this task? It can be restored from the trash."
                </span>
                <button
                    class="btn btn-danger"
                    disabled=move || disabled.get()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        // Prompt stays up so the in-flight label shows
                        on_confirm.run(());
                    }
                >
                    {move || confirm_label(disabled.get())}
                </button>
                <button
                    class="btn"
                    disabled=move || disabled.get()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirm_delete.set(false);
                    }
                >
                    "Cancel"
                </button>
            </span>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_label_follows_request() {
        assert_eq!(confirm_label(false), "Delete");
        assert_eq!(confirm_label(true), "Deleting...");
    }
}
