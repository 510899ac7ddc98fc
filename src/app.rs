//! Form Builder App
//!
//! Root component: app context plus the client-side routes.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::{FormView, NotFound, PromptView};
use crate::config::AppConfig;
use crate::context::AppContext;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_context(AppContext::new(config));

    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=PromptView />
                <Route path=path!("/:id") view=FormView />
            </Routes>
        </Router>
    }
}
