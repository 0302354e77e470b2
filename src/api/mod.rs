//! REST Backend Client
//!
//! Fetch-based bindings to the list backend, organized by domain.

mod list;
mod sort;
mod check;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::config::AppConfig;

pub use list::*;
pub use sort::*;
pub use check::*;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("no browser window available")]
    NoWindow,
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("failed to encode request: {0}")]
    Encode(serde_json::Error),
    #[error("invalid response body: {0}")]
    Decode(serde_json::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;

fn js_error(e: JsValue) -> ApiError {
    ApiError::Transport(format!("{:?}", e))
}

/// Handle to the backend; cheap to clone into async tasks
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self { base_url: config.backend_url.clone() }
    }

    fn url(&self, path_and_query: &str) -> String {
        format!("{}{}", self.base_url, path_and_query)
    }

    /// One HTTP round-trip; non-2xx statuses are errors
    async fn send(&self, method: &str, path_and_query: &str, body: Option<String>) -> ApiResult<String> {
        let window = web_sys::window().ok_or(ApiError::NoWindow)?;
        let url = self.url(path_and_query);

        let opts = web_sys::RequestInit::new();
        opts.set_method(method);
        opts.set_mode(web_sys::RequestMode::Cors);
        if let Some(body) = body.as_deref() {
            opts.set_body(&JsValue::from_str(body));
        }

        let request = web_sys::Request::new_with_str_and_init(&url, &opts).map_err(js_error)?;
        if body.is_some() {
            request.headers().set("Content-Type", "application/json").map_err(js_error)?;
        }

        log::debug!("[API] {} {}", method, url);
        let response = JsFuture::from(window.fetch_with_request(&request)).await.map_err(js_error)?;
        let response: web_sys::Response = response.dyn_into().map_err(js_error)?;
        if !response.ok() {
            return Err(ApiError::Status(response.status()));
        }

        let text = JsFuture::from(response.text().map_err(js_error)?).await.map_err(js_error)?;
        Ok(text.as_string().unwrap_or_default())
    }

    async fn get_json<T: DeserializeOwned>(&self, path_and_query: &str) -> ApiResult<T> {
        let text = self.send("GET", path_and_query, None).await?;
        serde_json::from_str(&text).map_err(ApiError::Decode)
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> ApiResult<T> {
        let body = serde_json::to_string(body).map_err(ApiError::Encode)?;
        let text = self.send("POST", path, Some(body)).await?;
        serde_json::from_str(&text).map_err(ApiError::Decode)
    }

    /// POST whose response body carries nothing we use
    async fn post(&self, path: &str, body: &impl Serialize) -> ApiResult<()> {
        let body = serde_json::to_string(body).map_err(ApiError::Encode)?;
        self.send("POST", path, Some(body)).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base_and_path() {
        let api = ApiClient::new(&AppConfig::with_backend_url(Some("http://host:8080/")));
        assert_eq!(api.url("/getSort"), "http://host:8080/getSort");
        assert_eq!(api.url("/getList?start=0"), "http://host:8080/getList?start=0");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ApiError::Status(500).to_string(), "server responded with status 500");
        let decode = serde_json::from_str::<u32>("x").unwrap_err();
        assert!(ApiError::Decode(decode).to_string().starts_with("invalid response body"));
    }
}
