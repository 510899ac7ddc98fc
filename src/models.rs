//! Frontend Models
//!
//! Data structures matching backend JSON bodies.

use serde::{Deserialize, Serialize};

/// Form data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Form {
    pub id: String,
    pub prompt: String,
    /// Server order is display order
    #[serde(default)]
    pub responses: Vec<FormResponse>,
}

/// A single answer to a form (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormResponse {
    pub id: String,
    pub text: String,
}

/// Body returned by the form-creation endpoint
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreatedForm {
    pub id: String,
    #[serde(default)]
    pub prompt: Option<String>,
}

// ========================
// Request Bodies
// ========================

#[derive(Debug, Serialize)]
pub struct CreateFormArgs<'a> {
    pub prompt: &'a str,
}

#[derive(Debug, Serialize)]
pub struct RespondArgs<'a> {
    pub text: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_decodes_backend_body() {
        let body = r#"{"id":"xyz","prompt":"Pick a color","responses":[{"id":"1","text":"Red"}]}"#;
        let form: Form = serde_json::from_str(body).unwrap();

        assert_eq!(form.id, "xyz");
        assert_eq!(form.prompt, "Pick a color");
        assert_eq!(form.responses.len(), 1);
        assert_eq!(form.responses[0].text, "Red");
    }

    #[test]
    fn test_form_keeps_response_order() {
        let body = r#"{"id":"xyz","prompt":"p","responses":[
            {"id":"2","text":"Red"},{"id":"1","text":"Blue"},{"id":"3","text":"Green"}
        ]}"#;
        let form: Form = serde_json::from_str(body).unwrap();

        let texts: Vec<&str> = form.responses.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["Red", "Blue", "Green"]);
    }

    #[test]
    fn test_form_without_responses() {
        let form: Form = serde_json::from_str(r#"{"id":"a","prompt":"q"}"#).unwrap();
        assert!(form.responses.is_empty());
    }

    #[test]
    fn test_created_form_ignores_extra_fields() {
        let created: CreatedForm =
            serde_json::from_str(r#"{"id":"abc","prompt":"A survey","extra":true}"#).unwrap();
        assert_eq!(created.id, "abc");
        assert_eq!(created.prompt.as_deref(), Some("A survey"));

        let bare: CreatedForm = serde_json::from_str(r#"{"id":"abc"}"#).unwrap();
        assert_eq!(bare.prompt, None);
    }

    #[test]
    fn test_created_form_requires_id() {
        assert!(serde_json::from_str::<CreatedForm>(r#"{"prompt":"x"}"#).is_err());
    }

    #[test]
    fn test_request_bodies() {
        let prompt = serde_json::to_string(&CreateFormArgs { prompt: "A survey" }).unwrap();
        assert_eq!(prompt, r#"{"prompt":"A survey"}"#);

        let respond = serde_json::to_string(&RespondArgs { text: "Blue" }).unwrap();
        assert_eq!(respond, r#"{"text":"Blue"}"#);
    }
}
