//! Plain-data description of an outgoing request.
//!
//! # Design
//! `HttpClientWrapper` first assembles an `HttpRequest` from its arguments and
//! only then hands it to `ureq`. Keeping the assembled request as data lets the
//! URL, header and auth policy be checked without a network round-trip.

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// HTTP verb sent on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    /// Sent by `patch`. The wire string is the literal `PATH`, not `PATCH`;
    /// existing consumers depend on it.
    Path,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Path => "PATH",
            HttpMethod::Delete => "DELETE",
        }
    }

    /// Whether requests with this method carry a body and content headers.
    pub fn has_body(self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put | HttpMethod::Path)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Basic-auth credentials. Either side may be absent.
///
/// Every request carries one of these, even when both sides are `None`.
/// Whether an `Authorization` header is produced is decided by
/// [`BasicAuth::header_value`].
#[derive(Clone, Default, PartialEq, Eq)]
pub struct BasicAuth {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl BasicAuth {
    pub fn new(username: Option<&str>, password: Option<&str>) -> Self {
        Self {
            username: username.map(str::to_string),
            password: password.map(str::to_string),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.password.is_none()
    }

    /// `Authorization` header value, or `None` when no credentials were given.
    /// A missing side is encoded as the empty string.
    pub fn header_value(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        let user = self.username.as_deref().unwrap_or("");
        let pass = self.password.as_deref().unwrap_or("");
        Some(format!("Basic {}", STANDARD.encode(format!("{user}:{pass}"))))
    }
}

impl fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicAuth")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// A fully assembled request, ready for [`crate::HttpClientWrapper::execute`].
///
/// `url` is the base URI and the path concatenated as given. `headers` is
/// empty for `GET` and `DELETE`.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub auth: BasicAuth,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}
