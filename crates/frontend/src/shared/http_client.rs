//! Process-wide HTTP client for the school backend.
//!
//! Every request carries `credentials: include`, a JSON content type (unless
//! multipart) and an `AbortController` that fires after the configured
//! timeout. Non-2xx responses become [`ApiError::Server`] with the backend's
//! `message` when the error body has one.

use std::cell::Cell;
use std::rc::Rc;

use contracts::shared::api_message::ApiMessage;
use gloo_net::http::{Request, RequestBuilder, Response};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::JsValue;
use web_sys::{AbortController, FormData, RequestCredentials};

use super::api_error::ApiError;
use super::api_utils::{api_base, join_url, REQUEST_TIMEOUT_MS};
use super::delayed_task::DelayedTask;

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout_ms: u32,
    pub include_credentials: bool,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self {
            base_url: api_base(),
            timeout_ms: REQUEST_TIMEOUT_MS,
            include_credentials: true,
        }
    }

    pub fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }
}

#[derive(Clone, Copy)]
enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

impl Verb {
    fn as_str(self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Put => "PUT",
            Verb::Delete => "DELETE",
        }
    }

    fn builder(self, url: &str) -> RequestBuilder {
        match self {
            Verb::Get => Request::get(url),
            Verb::Post => Request::post(url),
            Verb::Put => Request::put(url),
            Verb::Delete => Request::delete(url),
        }
    }
}

enum Payload {
    Empty,
    Json(String),
    Form(FormData),
}

impl Payload {
    fn json<B: Serialize + ?Sized>(body: &B) -> Result<Self, ApiError> {
        serde_json::to_string(body)
            .map(Payload::Json)
            .map_err(|e| ApiError::Decode(format!("failed to serialize request: {e}")))
    }
}

pub struct HttpClient {
    config: ClientConfig,
}

impl HttpClient {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.dispatch(Verb::Get, path, Payload::Empty).await?;
        decode(response).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.dispatch(Verb::Post, path, Payload::json(body)?).await?;
        decode(response).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.dispatch(Verb::Put, path, Payload::json(body)?).await?;
        decode(response).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.dispatch(Verb::Delete, path, Payload::Empty).await?;
        decode(response).await
    }

    /// Multipart upload; the browser sets the boundary content type.
    pub async fn post_form_data<T: DeserializeOwned>(
        &self,
        path: &str,
        data: FormData,
    ) -> Result<T, ApiError> {
        let response = self.dispatch(Verb::Post, path, Payload::Form(data)).await?;
        decode(response).await
    }

    /// JSON request with a binary response body (PDF reports).
    pub async fn post_for_bytes<B>(&self, path: &str, body: &B) -> Result<Vec<u8>, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let response = self.dispatch(Verb::Post, path, Payload::json(body)?).await?;
        response.binary().await.map_err(ApiError::from)
    }

    async fn dispatch(&self, verb: Verb, path: &str, payload: Payload) -> Result<Response, ApiError> {
        let url = self.config.url(path);
        log::debug!("{} {}", verb.as_str(), url);

        let controller =
            AbortController::new().map_err(|e| ApiError::Transport(format!("{e:?}")))?;
        let timed_out = Rc::new(Cell::new(false));
        let timer = {
            let controller = controller.clone();
            let timed_out = timed_out.clone();
            DelayedTask::new(self.config.timeout_ms, move || {
                timed_out.set(true);
                controller.abort();
            })
        };

        let signal = controller.signal();
        let mut builder = verb.builder(&url).abort_signal(Some(&signal));
        if self.config.include_credentials {
            builder = builder.credentials(RequestCredentials::Include);
        }
        let request = match payload {
            Payload::Empty => builder.header("Content-Type", "application/json").build(),
            Payload::Json(body) => builder
                .header("Content-Type", "application/json")
                .body(JsValue::from_str(&body)),
            Payload::Form(data) => builder.body(JsValue::from(data)),
        }?;

        let sent = request.send().await;
        timer.cancel();

        let response = match sent {
            Ok(response) => response,
            Err(_) if timed_out.get() => {
                log::warn!("{} {} timed out after {} ms", verb.as_str(), url, self.config.timeout_ms);
                return Err(ApiError::Timeout);
            }
            Err(e) => {
                log::warn!("{} {} failed: {}", verb.as_str(), url, e);
                return Err(e.into());
            }
        };

        if response.ok() {
            return Ok(response);
        }

        let status = response.status();
        let message = response
            .json::<ApiMessage>()
            .await
            .ok()
            .and_then(|m| m.text().map(str::to_string));
        log::warn!("{} {} -> {} {:?}", verb.as_str(), url, status, message);
        Err(ApiError::Server { status, message })
    }
}

/// Decodes a success body; an empty body is read as `{}` so write
/// acknowledgements without content still decode into [`ApiMessage`].
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let text = response.text().await?;
    parse_body(&text)
}

fn parse_body<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    let text = if text.trim().is_empty() { "{}" } else { text };
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

static CLIENT: Lazy<HttpClient> = Lazy::new(|| HttpClient::new(ClientConfig::from_env()));

pub fn client() -> &'static HttpClient {
    &CLIENT
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_stream::aggregate::Stream;

    #[test]
    fn debug_config_targets_proxy_prefix() {
        let config = ClientConfig::from_env();
        assert_eq!(config.base_url, "/api");
        assert_eq!(config.timeout_ms, 10_000);
        assert!(config.include_credentials);
    }

    #[test]
    fn url_joins_base_and_path() {
        let config = ClientConfig {
            base_url: "https://school.example/api/".into(),
            timeout_ms: 1,
            include_credentials: false,
        };
        assert_eq!(
            config.url("/stream/getstreamnames"),
            "https://school.example/api/stream/getstreamnames"
        );
    }

    #[test]
    fn empty_body_decodes_as_blank_message() {
        let message: ApiMessage = parse_body("").unwrap();
        assert_eq!(message.text(), None);
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        let result: Result<Vec<Stream>, _> = parse_body("<html>");
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[test]
    fn list_body_decodes() {
        let streams: Vec<Stream> =
            parse_body(r#"[{"_id":1,"stream_name":"North"}]"#).unwrap();
        assert_eq!(streams[0].stream_name, "North");
    }
}
