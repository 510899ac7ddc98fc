//! Client Routes
//!
//! Paths the router serves and helpers to move between them.

use crate::api::encode_segment;

/// Browser path of a form's detail view.
///
/// The router decodes `:id` itself, so the view reads the param as-is.
pub fn form_route(id: &str) -> String {
    format!("/{}", encode_segment(id))
}
