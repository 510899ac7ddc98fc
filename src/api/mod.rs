//! Backend API Wrappers
//!
//! Frontend bindings to the form service's HTTP endpoints, built on the
//! browser `fetch` API.

mod form;

use js_sys::Promise;
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

pub use form::*;

/// Status code the backend uses for every successful call
const STATUS_OK: u16 = 200;

/// Everything that can go wrong talking to the backend
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("could not encode request: {0}")]
    Encode(String),
    #[error("browser window is not available")]
    NoWindow,
}

impl ApiError {
    fn network(err: JsValue) -> Self {
        ApiError::Network(format!("{:?}", err))
    }
}

/// Only an exact 200 counts as success; failure bodies are never read
pub fn check_status(status: u16) -> Result<(), ApiError> {
    if status == STATUS_OK {
        Ok(())
    } else {
        Err(ApiError::Status(status))
    }
}

// ========================
// Fetch Bridge
// ========================

async fn send(method: &str, url: &str, body: Option<String>) -> Result<Response, ApiError> {
    let window = web_sys::window().ok_or(ApiError::NoWindow)?;

    let opts = RequestInit::new();
    opts.set_method(method);
    if let Some(body) = &body {
        opts.set_body(&JsValue::from_str(body));
    }

    let request = Request::new_with_str_and_init(url, &opts).map_err(ApiError::network)?;
    if body.is_some() {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(ApiError::network)?;
    }

    log::debug!("[API] {} {}", method, url);
    let promise: Promise = window.fetch_with_request(&request);
    let value = JsFuture::from(promise).await.map_err(ApiError::network)?;
    value.dyn_into::<Response>().map_err(ApiError::network)
}

async fn read_json<R: DeserializeOwned>(response: Response) -> Result<R, ApiError> {
    check_status(response.status())?;
    let promise = response.json().map_err(ApiError::network)?;
    let value = JsFuture::from(promise)
        .await
        .map_err(|e| ApiError::Decode(format!("{:?}", e)))?;
    serde_wasm_bindgen::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

pub(crate) async fn get_json<R: DeserializeOwned>(url: &str) -> Result<R, ApiError> {
    let response = send("GET", url, None).await?;
    read_json(response).await
}

pub(crate) async fn post_json<A, R>(url: &str, args: &A) -> Result<R, ApiError>
where
    A: Serialize,
    R: DeserializeOwned,
{
    let body = serde_json::to_string(args).map_err(|e| ApiError::Encode(e.to_string()))?;
    let response = send("POST", url, Some(body)).await?;
    read_json(response).await
}
