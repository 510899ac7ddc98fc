//! UI Components
//!
//! Views mounted by the router and the pieces they are built from.

mod prompt_view;
mod form_view;
mod form_body;
mod response_form;
mod not_found;

pub use prompt_view::PromptView;
pub use form_view::FormView;
pub use form_body::FormBody;
pub use response_form::ResponseForm;
pub use not_found::NotFound;
