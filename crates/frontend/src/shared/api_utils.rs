//! API utilities for talking to the records API
//!
//! Every request carries the session cookie. Mutating requests also carry the
//! CSRF token the API sets in the `csrftoken` cookie.

use contracts::domain::common::{AggregateId, AggregateRoot};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::JsCast;
use web_sys::RequestCredentials;

use contracts::system::auth::ApiErrorBody;

use super::api_error::ApiError;
use super::config::app_config;

const CSRF_COOKIE: &str = "csrftoken";
const CSRF_HEADER: &str = "X-CSRFToken";

/// Get the base URL for API requests
///
/// Uses the configured base URL when set, otherwise the current page's host
/// on the configured API port.
///
/// # Returns
/// - API base URL like "http://localhost:8000"
/// - The configured base URL as-is when the window is not available
pub fn api_base() -> String {
    let config = &app_config().api;
    if !config.base_url.is_empty() {
        return config.base_url.clone();
    }

    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, config.port)
}

/// Build a full API URL from a path starting with "/api/"
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// `/api/{collection}/` or `/api/{collection}/{id}/`
pub fn collection_path(collection: &str, id: Option<&str>) -> String {
    match id {
        Some(id) => format!("/api/{}/{}/", collection, id),
        None => format!("/api/{}/", collection),
    }
}

/// Value of cookie `name` in a `document.cookie` string
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty())
}

/// CSRF token set by the API, if the browser holds one
pub fn csrf_token() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let html = document.dyn_into::<web_sys::HtmlDocument>().ok()?;
    let cookies = html.cookie().ok()?;
    cookie_value(&cookies, CSRF_COOKIE)
}

/// Attach session credentials and the CSRF header
pub fn with_session(builder: RequestBuilder) -> RequestBuilder {
    let builder = builder.credentials(RequestCredentials::Include);
    match csrf_token() {
        Some(token) => builder.header(CSRF_HEADER, &token),
        None => builder,
    }
}

/// Turn a non-2xx response into [`ApiError::Status`], keeping the API's
/// `{"error": ...}` message when present
pub async fn error_from_response(response: Response) -> ApiError {
    let status = response.status();
    let message = match response.json::<ApiErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => response.status_text(),
    };
    ApiError::Status { status, message }
}

pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(error_from_response(response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

pub async fn expect_success(response: Response) -> Result<(), ApiError> {
    if !response.ok() {
        return Err(error_from_response(response).await);
    }
    Ok(())
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = with_session(Request::get(&api_url(path)))
        .send()
        .await?;
    read_json(response).await
}

async fn send_json<D: Serialize>(builder: RequestBuilder, body: &D) -> Result<Response, ApiError> {
    with_session(builder)
        .json(body)
        .map_err(|e| ApiError::Serialize(e.to_string()))?
        .send()
        .await
        .map_err(ApiError::from)
}

pub async fn post_json<D: Serialize, T: DeserializeOwned>(path: &str, body: &D) -> Result<T, ApiError> {
    let response = send_json(Request::post(&api_url(path)), body).await?;
    read_json(response).await
}

// ============================================================================
// Collection CRUD
// ============================================================================

/// Fetch the whole collection of `T`
pub async fn fetch_all<T>() -> Result<Vec<T>, ApiError>
where
    T: AggregateRoot + DeserializeOwned,
{
    get_json(&collection_path(T::collection_name(), None)).await
}

/// Create a record in `T`'s collection
pub async fn create<T, D>(dto: &D) -> Result<(), ApiError>
where
    T: AggregateRoot,
    D: Serialize,
{
    let path = collection_path(T::collection_name(), None);
    let response = send_json(Request::post(&api_url(&path)), dto).await?;
    expect_success(response).await
}

/// Replace record `id` in `T`'s collection
pub async fn update<T, D>(id: T::Id, dto: &D) -> Result<(), ApiError>
where
    T: AggregateRoot,
    D: Serialize,
{
    let path = collection_path(T::collection_name(), Some(&id.as_string()));
    let response = send_json(Request::put(&api_url(&path)), dto).await?;
    expect_success(response).await
}

/// Create when `id` is `None`, update otherwise
pub async fn save<T, D>(id: Option<T::Id>, dto: &D) -> Result<(), ApiError>
where
    T: AggregateRoot,
    D: Serialize,
{
    match id {
        Some(id) => update::<T, D>(id, dto).await,
        None => create::<T, D>(dto).await,
    }
}

/// Delete record `id` from `T`'s collection
pub async fn delete<T: AggregateRoot>(id: T::Id) -> Result<(), ApiError> {
    let path = collection_path(T::collection_name(), Some(&id.as_string()));
    let response = with_session(Request::delete(&api_url(&path)))
        .send()
        .await?;
    expect_success(response).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cookie_value() {
        let cookies = "sessionid=abc; csrftoken=tok123; theme=dark";
        assert_eq!(cookie_value(cookies, "csrftoken"), Some("tok123".to_string()));
        assert_eq!(cookie_value(cookies, "sessionid"), Some("abc".to_string()));
        assert_eq!(cookie_value(cookies, "missing"), None);
        assert_eq!(cookie_value("", "csrftoken"), None);
        assert_eq!(cookie_value("csrftoken=", "csrftoken"), None);
    }

    #[test]
    fn test_collection_path_has_trailing_slash() {
        assert_eq!(collection_path("productos", None), "/api/productos/");
        assert_eq!(collection_path("ventas", Some("7")), "/api/ventas/7/");
    }
}
