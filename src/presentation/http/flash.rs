//! One-shot notices carried across a redirect in a short-lived cookie.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::{HeaderMap, HeaderValue, header};
use axum::response::{Html, IntoResponse, Response};

use crate::presentation::http::auth::get_cookie;

const FLASH_COOKIE: &str = "flash";

/// Message left by the previous response, if any. Never rejects.
#[derive(Debug, Default, Clone)]
pub struct Flash(pub Option<String>);

impl Flash {
    pub fn message(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for Flash
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let msg = parts
            .headers
            .get(header::COOKIE)
            .and_then(|v| v.to_str().ok())
            .and_then(|hdr| get_cookie(hdr, FLASH_COOKIE))
            .and_then(|raw| urlencoding::decode(&raw).ok().map(|s| s.into_owned()))
            .filter(|s| !s.is_empty());
        Ok(Flash(msg))
    }
}

pub fn set_flash(headers: &mut HeaderMap, message: &str) {
    let cookie = format!(
        "{}={}; Path=/; Max-Age=60; SameSite=Lax; HttpOnly",
        FLASH_COOKIE,
        urlencoding::encode(message)
    );
    if let Ok(v) = HeaderValue::from_str(&cookie) {
        headers.append(header::SET_COOKIE, v);
    }
}

pub fn clear_flash(headers: &mut HeaderMap) {
    headers.append(
        header::SET_COOKIE,
        HeaderValue::from_static("flash=; Path=/; Max-Age=0; SameSite=Lax; HttpOnly"),
    );
}

/// Renders a page, expiring the flash cookie once it has been shown.
pub fn page(html: String, flash: &Flash) -> Response {
    let mut response = Html(html).into_response();
    if flash.0.is_some() {
        clear_flash(response.headers_mut());
    }
    response
}
