use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="page centered">
            <div class="title">"Nothing here"</div>
            <A href="/">"Make a new form"</A>
        </div>
    }
}
