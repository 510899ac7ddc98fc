//! Form View
//!
//! Loads the form named by the route and renders one of loading, error or
//! the form itself.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::api;
use crate::components::FormBody;
use crate::context::{AppContext, FormSession};
use crate::state::LoadStatus;

#[component]
pub fn FormView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let params = use_params_map();
    // Already percent-decoded by the router
    let form_id = Memo::new(move |_| params.with(|p| p.get("id").unwrap_or_default()));

    let session = FormSession::new(form_id);
    provide_context(session);

    // Fetch on mount and whenever the route id changes
    Effect::new(move |_| {
        let id = form_id.get();
        let Some(tag) = session.begin() else { return };
        session.reset(tag);
        log::debug!("[FormView] Loading form {}", id);

        spawn_local(async move {
            let result = api::get_form(ctx.api_base(), &id).await;
            if let Err(e) = &result {
                log::warn!("[FormView] Failed to load form {}: {}", id, e);
            }
            session.apply(tag, result.into());
        });
    });

    // Only the branch is tracked here so FormBody survives snapshot swaps
    let status = Memo::new(move |_| session.form.with(|s| s.status()));

    view! {
        <div class="page">
            {move || match status.get() {
                LoadStatus::Loading => view! {
                    <div class="status">"Loading..."</div>
                }.into_any(),
                LoadStatus::Failed => {
                    let reason = session.form.with(|s| s.error().unwrap_or_default().to_string());
                    view! {
                        <div class="error">"Could not load this form: " {reason}</div>
                        <A href="/">"Make a new form"</A>
                    }.into_any()
                }
                LoadStatus::Loaded => view! { <FormBody /> }.into_any(),
            }}
        </div>
    }
}
