use reqwest::{RequestBuilder, Response, StatusCode, Url};
use secrecy::{ExposeSecret, SecretString};

use crate::errors::{AppError, AppResult, ErrorResponse};

/// Appends path segments to the API base URL, percent-encoding each one.
pub fn endpoint(base: &Url, segments: &[&str]) -> AppResult<Url> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| AppError::ConfigError(format!("'{}' cannot be a base URL", base)))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Adds the bearer token when one is configured.
pub fn authorize(request: RequestBuilder, token: Option<&SecretString>) -> RequestBuilder {
    match token {
        Some(token) => request.bearer_auth(token.expose_secret()),
        None => request,
    }
}

/// Turns a failing response into an error, using the API's message when it
/// sent one.
pub async fn error_for_status(response: Response) -> AppResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().clone();
    let body = response.text().await.unwrap_or_default();
    Err(status_error(status, &url, &body))
}

pub fn status_error(status: StatusCode, url: &Url, body: &str) -> AppError {
    let message = serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(ErrorResponse::into_message)
        .unwrap_or_else(|| format!("{} {}", status, url.path()));
    AppError::from_status(status, message)
}
