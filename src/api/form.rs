//! Form Endpoints
//!
//! Create a form, fetch it, and append responses.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use super::{get_json, post_json, ApiError};
use crate::models::{CreateFormArgs, CreatedForm, Form, RespondArgs};

/// Characters escaped inside a single URL path segment
pub const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

// ========================
// URLs
// ========================

pub fn forms_url(base: &str) -> String {
    format!("{}/form", base)
}

pub fn form_url(base: &str, id: &str) -> String {
    format!("{}/form/{}", base, encode_segment(id))
}

pub fn form_response_url(base: &str, id: &str) -> String {
    format!("{}/form/{}/response", base, encode_segment(id))
}

// ========================
// Endpoints
// ========================

pub async fn create_form(base: &str, prompt: &str) -> Result<CreatedForm, ApiError> {
    post_json(&forms_url(base), &CreateFormArgs { prompt }).await
}

pub async fn get_form(base: &str, id: &str) -> Result<Form, ApiError> {
    get_json(&form_url(base, id)).await
}

/// Returns the whole form with the new response appended
pub async fn submit_response(base: &str, id: &str, text: &str) -> Result<Form, ApiError> {
    post_json(&form_response_url(base, id), &RespondArgs { text }).await
}
