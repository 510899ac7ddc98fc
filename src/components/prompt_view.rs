//! Prompt View
//!
//! Landing page: describe a form, submit, land on the generated form.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::api;
use crate::context::AppContext;
use crate::routes::form_route;
use crate::state::{submit_allowed, submit_disabled, Generation};

#[component]
pub fn PromptView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let navigate = use_navigate();

    let (prompt, set_prompt) = signal(String::new());
    let (pending, set_pending) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let disabled = move || prompt.with(|p| submit_disabled(p));
    // Disposed with the view, so a late result cannot navigate elsewhere
    let generation = StoredValue::new(Generation::default());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = prompt.get();
        if !submit_allowed(&text, pending.get_untracked()) { return; }
        let Some(tag) = generation.try_update_value(|g| g.begin()) else { return };

        set_error.set(None);
        set_pending.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = api::create_form(ctx.api_base(), &text).await;
            if !generation.try_with_value(|g| g.is_current(tag)).unwrap_or(false) {
                log::debug!("[PromptView] View closed before form creation finished");
                return;
            }
            set_pending.set(false);
            match result {
                Ok(created) => {
                    log::info!("[PromptView] Created form {} for {:?}", created.id, created.prompt);
                    navigate(&form_route(&created.id), NavigateOptions::default());
                }
                Err(e) => {
                    log::warn!("[PromptView] Failed to create form: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }
        });
    };

    view! {
        <form class="page centered" on:submit=on_submit>
            <div class="title">"Need a form?"</div>
            <input
                class="text-input"
                type="text"
                placeholder="Prompt"
                prop:value=move || prompt.get()
                on:input=move |ev| set_prompt.set(event_target_value(&ev))
            />
            <button class="submit-btn" type="submit" disabled=disabled>
                "Make me one"
            </button>

            <Show when=move || pending.get()>
                <div class="status">"Creating your form..."</div>
            </Show>
            {move || error.get().map(|e| view! {
                <div class="error">"Could not create the form: " {e}</div>
            })}
        </form>
    }
}
