//! View State
//!
//! Request outcome tracking shared by the views.

/// Lifecycle of a fetched value
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Loaded(T),
    Failed(String),
}

/// Which branch of [`LoadState`] is active, without the payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    Loading,
    Loaded,
    Failed,
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Loading
    }
}

impl<T> LoadState<T> {
    pub fn status(&self) -> LoadStatus {
        match self {
            LoadState::Loading => LoadStatus::Loading,
            LoadState::Loaded(_) => LoadStatus::Loaded,
            LoadState::Failed(_) => LoadStatus::Failed,
        }
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}

impl<T, E: std::fmt::Display> From<Result<T, E>> for LoadState<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => LoadState::Loaded(value),
            Err(err) => LoadState::Failed(err.to_string()),
        }
    }
}

/// Monotonic request tags; only the newest tag may write state
#[derive(Debug, Default)]
pub struct Generation {
    current: u64,
}

impl Generation {
    /// Start a new request, superseding every earlier one
    pub fn begin(&mut self) -> u64 {
        self.current += 1;
        self.current
    }

    pub fn is_current(&self, tag: u64) -> bool {
        self.current == tag
    }
}

/// Submit controls are disabled only for the exact empty string
pub fn submit_disabled(text: &str) -> bool {
    text.is_empty()
}

/// A submit goes through only for non-empty text with nothing in flight
pub fn submit_allowed(text: &str, pending: bool) -> bool {
    !submit_disabled(text) && !pending
}

/// Text being composed plus the outcome of the last failed send
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Draft {
    pub text: String,
    pub error: Option<String>,
}

impl Draft {
    pub fn is_disabled(&self) -> bool {
        submit_disabled(&self.text)
    }

    /// Text to send, or `None` when empty. Clears the previous error.
    pub fn begin_send(&mut self) -> Option<String> {
        if self.is_disabled() {
            return None;
        }
        self.error = None;
        Some(self.text.clone())
    }

    /// The server accepted `sent`; clear unless the user already typed more
    pub fn sent(&mut self, sent: &str) {
        if self.text == sent {
            self.text.clear();
        }
    }

    /// Names the failed text, since the input may hold something else by now
    pub fn failed(&mut self, sent: &str, reason: impl std::fmt::Display) {
        self.error = Some(format!("Could not send \"{}\": {}", sent, reason));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;

    #[test]
    fn test_submit_disabled() {
        assert!(submit_disabled(""));
        assert!(!submit_disabled("a"));
        assert!(!submit_disabled(" "));
        assert!(!submit_disabled("\t\n"));
    }

    #[test]
    fn test_submit_allowed_blocks_while_pending() {
        assert!(submit_allowed("A survey", false));
        assert!(!submit_allowed("A survey", true));
        assert!(!submit_allowed("", false));
        assert!(!submit_allowed("", true));
    }

    #[test]
    fn test_draft_clears_after_send() {
        let mut draft = Draft { text: "Blue".into(), error: None };
        let sent = draft.begin_send().unwrap();
        draft.sent(&sent);
        assert_eq!(draft.text, "");
        assert!(draft.is_disabled());
    }

    #[test]
    fn test_draft_keeps_text_typed_during_send() {
        let mut draft = Draft { text: "Blue".into(), error: None };
        let sent = draft.begin_send().unwrap();
        draft.text = "Green".into();
        draft.sent(&sent);
        assert_eq!(draft.text, "Green");
    }

    #[test]
    fn test_draft_keeps_text_on_failure() {
        let mut draft = Draft { text: "Blue".into(), error: None };
        let sent = draft.begin_send().unwrap();
        draft.failed(&sent, ApiError::Status(500));
        assert_eq!(draft.text, "Blue");
        assert_eq!(
            draft.error.as_deref(),
            Some("Could not send \"Blue\": server responded with status 500")
        );
    }

    #[test]
    fn test_draft_next_attempt_clears_error() {
        let mut draft = Draft { text: "Blue".into(), error: Some("old".into()) };
        assert_eq!(draft.begin_send().as_deref(), Some("Blue"));
        assert_eq!(draft.error, None);
    }

    #[test]
    fn test_empty_draft_does_not_send() {
        let mut draft = Draft { text: String::new(), error: Some("old".into()) };
        assert_eq!(draft.begin_send(), None);
        assert_eq!(draft.error.as_deref(), Some("old"));
    }

    #[test]
    fn test_superseded_failure_is_still_reported() {
        // "A" fails after the user already moved on to "B"
        let mut draft = Draft { text: "A".into(), error: None };
        let a = draft.begin_send().unwrap();
        draft.text = "B".into();
        let b = draft.begin_send().unwrap();
        draft.sent(&b);
        draft.failed(&a, ApiError::Network("offline".into()));

        assert_eq!(draft.text, "");
        assert_eq!(
            draft.error.as_deref(),
            Some("Could not send \"A\": network error: offline")
        );
    }

    #[test]
    fn test_load_state_starts_loading() {
        let state = LoadState::<u32>::default();
        assert_eq!(state.status(), LoadStatus::Loading);
        assert_eq!(state.loaded(), None);
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_load_state_from_result() {
        let ok: LoadState<u32> = Ok::<_, ApiError>(7).into();
        assert_eq!(ok.status(), LoadStatus::Loaded);
        assert_eq!(ok.loaded(), Some(&7));

        let failed: LoadState<u32> = Err(ApiError::Status(404)).into();
        assert_eq!(failed.status(), LoadStatus::Failed);
        assert_eq!(failed.error(), Some("server responded with status 404"));
    }

    #[test]
    fn test_failed_is_distinct_from_loading() {
        let failed: LoadState<u32> = LoadState::Failed("boom".into());
        assert_ne!(failed.status(), LoadStatus::Loading);
    }

    #[test]
    fn test_generation_supersedes_older_tags() {
        let mut generation = Generation::default();
        let first = generation.begin();
        let second = generation.begin();

        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }

    #[test]
    fn test_generation_out_of_order_results() {
        // Two submissions in flight; the older one resolves last
        let mut generation = Generation::default();
        let mut shown = LoadState::<Vec<&str>>::Loading;

        let a = generation.begin();
        let b = generation.begin();

        for (tag, value) in [(b, vec!["Red", "Blue"]), (a, vec!["Red"])] {
            if generation.is_current(tag) {
                shown = LoadState::Loaded(value);
            }
        }

        assert_eq!(shown, LoadState::Loaded(vec!["Red", "Blue"]));
    }
}
