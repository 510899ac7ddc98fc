//! Response Form Component
//!
//! Input for answering the current form.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::{AppContext, FormSession};
use crate::state::{Draft, LoadState};

#[component]
pub fn ResponseForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let session = use_context::<FormSession>().expect("FormSession should be provided");

    let draft = RwSignal::new(Draft::default());
    let disabled = move || draft.with(Draft::is_disabled);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(sent) = draft.try_update(Draft::begin_send).flatten() else { return };
        let Some(tag) = session.begin() else { return };
        let form_id = session.form_id.get_untracked();

        spawn_local(async move {
            match api::submit_response(ctx.api_base(), &form_id, &sent).await {
                Ok(form) => {
                    log::info!(
                        "[ResponseForm] Response saved, form {} has {} responses",
                        form.id,
                        form.responses.len()
                    );
                    // Snapshot writes are tag-gated; the draft is not
                    session.apply(tag, LoadState::Loaded(form));
                    let _ = draft.try_update(|d| d.sent(&sent));
                }
                Err(e) => {
                    log::warn!("[ResponseForm] Failed to submit response: {}", e);
                    let _ = draft.try_update(|d| d.failed(&sent, &e));
                }
            }
        });
    };

    view! {
        <form class="response-form" on:submit=on_submit>
            <div class="response-row">
                <input
                    class="text-input"
                    type="text"
                    placeholder="Response"
                    prop:value=move || draft.with(|d| d.text.clone())
                    on:input=move |ev| draft.update(|d| d.text = event_target_value(&ev))
                />
                <button class="submit-btn" type="submit" disabled=disabled>
                    "Respond"
                </button>
            </div>
            {move || draft.with(|d| d.error.clone()).map(|e| view! {
                <div class="error">{e}</div>
            })}
        </form>
    }
}
