//! Form Body Component
//!
//! Heading, response box, and the responses collected so far.

use leptos::prelude::*;

use crate::components::ResponseForm;
use crate::context::FormSession;

#[component]
pub fn FormBody() -> impl IntoView {
    let session = use_context::<FormSession>().expect("FormSession should be provided");

    let prompt = move || {
        session.form.with(|s| s.loaded().map(|f| f.prompt.clone()).unwrap_or_default())
    };
    let responses = move || {
        session.form.with(|s| s.loaded().map(|f| f.responses.clone()).unwrap_or_default())
    };

    view! {
        <div class="form-body">
            <div class="title">{prompt}</div>
            <ResponseForm />

            <div>
                <div class="responses-title">"Responses so far:"</div>
                <ul class="response-list">
                    <For
                        each=responses
                        key=|response| response.id.clone()
                        children=move |response| view! { <li>{response.text}</li> }
                    />
                </ul>
            </div>
        </div>
    }
}
