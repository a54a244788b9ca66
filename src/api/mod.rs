mod resource;

use crate::models::{Category, CategoryPayload, Note, NotePayload};
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub(crate) use resource::{Categories, Notes, Resource};

pub(crate) const API_PREFIX: &str = "/api";
const GENERIC_FAILURE: &str = "Request failed";

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum ApiErrorKind {
    /// Connection refused, DNS, CORS, aborted fetch.
    Network,
    /// Non-2xx response.
    Http,
    Parse,
}

#[derive(Clone, Debug, thiserror::Error)]
#[error("{message}")]
pub(crate) struct ApiError {
    pub kind: ApiErrorKind,
    pub status: Option<u16>,
    pub message: String,
}

/// Error body shape returned by the backend (`{"detail": "..."}`).
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

impl ApiError {
    fn network(e: reqwest::Error) -> Self {
        Self {
            kind: ApiErrorKind::Network,
            status: None,
            message: e.to_string(),
        }
    }

    fn parse(e: impl std::fmt::Display) -> Self {
        Self {
            kind: ApiErrorKind::Parse,
            status: None,
            message: e.to_string(),
        }
    }

    fn http(status: u16, body: &str) -> Self {
        // `detail` may also be a list (422 validation payloads); only a string is shown.
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.detail)
            .and_then(|d| d.as_str().map(str::to_string))
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| GENERIC_FAILURE.to_string());

        Self {
            kind: ApiErrorKind::Http,
            status: Some(status),
            message,
        }
    }
}

pub(crate) type ApiResult<T> = Result<T, ApiError>;

/// Normalizes a finished HTTP exchange.
///
/// `204` and empty success bodies yield `None` without touching the JSON parser.
pub(crate) fn decode_response<T: DeserializeOwned>(
    status: u16,
    body: &str,
) -> ApiResult<Option<T>> {
    if !(200..300).contains(&status) {
        return Err(ApiError::http(status, body));
    }

    if status == 204 || body.trim().is_empty() {
        return Ok(None);
    }

    serde_json::from_str(body).map(Some).map_err(ApiError::parse)
}

fn require_body<T>(value: Option<T>) -> ApiResult<T> {
    value.ok_or_else(|| ApiError::parse("empty response body"))
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct EnvConfig {
    pub api_url: String,
}

impl EnvConfig {
    pub fn new() -> Self {
        let default_api_url = "http://localhost:8000".to_string();

        // Both `window.ENV.API_URL` and the older `window.ENV.api_url` are honored.
        if let Some(window) = web_sys::window() {
            if let Some(env) = window.get("ENV") {
                if !env.is_undefined() && env.is_object() {
                    for key in ["API_URL", "api_url"] {
                        if let Ok(api_url) = js_sys::Reflect::get(&env, &key.into()) {
                            if let Some(url_str) = api_url.as_string() {
                                return Self::with_api_url(url_str);
                            }
                        }
                    }
                }
            }
        }

        Self {
            api_url: default_api_url,
        }
    }

    pub fn with_api_url(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
        }
    }

    /// Host plus the fixed `/api` prefix, without a trailing slash.
    pub fn api_base(&self) -> String {
        let host = self.api_url.trim().trim_end_matches('/');
        if host.ends_with(API_PREFIX) {
            host.to_string()
        } else {
            format!("{host}{API_PREFIX}")
        }
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Entity operations the controller depends on.
///
/// Every call is a fresh round trip. A cancellation token would be threaded
/// through here if in-flight requests ever need to be abortable.
#[allow(async_fn_in_trait)]
pub(crate) trait CrudApi {
    async fn get_categories(&self) -> ApiResult<Vec<Category>>;
    async fn create_category(&self, payload: &CategoryPayload) -> ApiResult<Category>;
    async fn update_category(&self, id: i64, payload: &CategoryPayload) -> ApiResult<Category>;
    async fn delete_category(&self, id: i64) -> ApiResult<()>;

    async fn get_notes(&self) -> ApiResult<Vec<Note>>;
    async fn create_note(&self, payload: &NotePayload) -> ApiResult<Note>;
    async fn update_note(&self, id: i64, payload: &NotePayload) -> ApiResult<Note>;
    async fn delete_note(&self, id: i64) -> ApiResult<()>;
}

#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    pub(crate) base_url: String,
}

impl ApiClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(EnvConfig::new().api_base())
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&impl Serialize>,
    ) -> ApiResult<Option<T>> {
        let client = reqwest::Client::new();
        let mut req = client
            .request(method, self.url(path))
            .header(CONTENT_TYPE, "application/json");

        if let Some(b) = body {
            req = req.json(b);
        }

        let res = req.send().await.map_err(ApiError::network)?;
        let status = res.status().as_u16();
        let text = res.text().await.map_err(ApiError::network)?;

        decode_response(status, &text)
    }

    pub async fn list<R: Resource>(&self) -> ApiResult<Vec<R::Entity>> {
        let items: Option<Vec<R::Entity>> = self
            .request(Method::GET, &R::collection_path(), None::<&()>)
            .await?;
        Ok(items.unwrap_or_default())
    }

    pub async fn create<R: Resource>(&self, payload: &R::Payload) -> ApiResult<R::Entity> {
        let created = self
            .request(Method::POST, &R::collection_path(), Some(payload))
            .await?;
        require_body(created)
    }

    pub async fn update<R: Resource>(&self, id: i64, payload: &R::Payload) -> ApiResult<R::Entity> {
        let updated = self
            .request(Method::PUT, &R::item_path(id), Some(payload))
            .await?;
        require_body(updated)
    }

    pub async fn delete<R: Resource>(&self, id: i64) -> ApiResult<()> {
        self.request::<serde_json::Value>(Method::DELETE, &R::item_path(id), None::<&()>)
            .await?;
        Ok(())
    }
}

impl CrudApi for ApiClient {
    async fn get_categories(&self) -> ApiResult<Vec<Category>> {
        self.list::<Categories>().await
    }

    async fn create_category(&self, payload: &CategoryPayload) -> ApiResult<Category> {
        self.create::<Categories>(payload).await
    }

    async fn update_category(&self, id: i64, payload: &CategoryPayload) -> ApiResult<Category> {
        self.update::<Categories>(id, payload).await
    }

    async fn delete_category(&self, id: i64) -> ApiResult<()> {
        self.delete::<Categories>(id).await
    }

    async fn get_notes(&self) -> ApiResult<Vec<Note>> {
        self.list::<Notes>().await
    }

    async fn create_note(&self, payload: &NotePayload) -> ApiResult<Note> {
        self.create::<Notes>(payload).await
    }

    async fn update_note(&self, id: i64, payload: &NotePayload) -> ApiResult<Note> {
        self.update::<Notes>(id, payload).await
    }

    async fn delete_note(&self, id: i64) -> ApiResult<()> {
        self.delete::<Notes>(id).await
    }
}
