//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::models::Form;
use crate::state::{Generation, LoadState};

/// App-wide settings provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub config: AppConfig,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn api_base(&self) -> &'static str {
        self.config.api_base
    }
}

/// The one form held by a Form View, plus the tags guarding writes to it.
///
/// The generation counter lives in the view's reactive owner: once the view
/// is unmounted the counter is disposed and late results are dropped.
#[derive(Clone, Copy)]
pub struct FormSession {
    /// Id from the route - read
    pub form_id: Memo<String>,
    /// Current form snapshot - read
    pub form: ReadSignal<LoadState<Form>>,
    /// Current form snapshot - write
    set_form: WriteSignal<LoadState<Form>>,
    generation: StoredValue<Generation>,
}

impl FormSession {
    pub fn new(form_id: Memo<String>) -> Self {
        let (form, set_form) = signal(LoadState::default());
        Self {
            form_id,
            form,
            set_form,
            generation: StoredValue::new(Generation::default()),
        }
    }

    /// Tag a new request; `None` once the view is gone
    pub fn begin(&self) -> Option<u64> {
        self.generation.try_update_value(|g| g.begin())
    }

    pub fn is_current(&self, tag: u64) -> bool {
        self.generation
            .try_with_value(|g| g.is_current(tag))
            .unwrap_or(false)
    }

    /// Show the loading placeholder for a fresh fetch
    pub fn reset(&self, tag: u64) {
        if self.is_current(tag) {
            self.set_form.set(LoadState::Loading);
        }
    }

    /// Replace the whole snapshot if `tag` is still the newest request.
    /// Returns whether the state was written.
    pub fn apply(&self, tag: u64, next: LoadState<Form>) -> bool {
        if !self.is_current(tag) {
            log::debug!("[FormSession] Dropping stale result for request {}", tag);
            return false;
        }
        self.set_form.set(next);
        true
    }
}
