//! Base-URI-prefixing convenience wrapper around a `ureq::Agent`.
//!
//! # Design
//! `HttpClientWrapper` holds a `base_uri` and one `ureq::Agent`, created at
//! construction and reused for every call. Each verb is split into a
//! `build_*` method producing an `HttpRequest` and a blocking method that
//! builds and then runs it through [`HttpClientWrapper::execute`].
//!
//! The target URL is `base_uri + path` by plain concatenation. Nothing is
//! validated or normalized; a malformed URL surfaces as the agent's error.

use tracing::debug;
use ureq::http::header::AUTHORIZATION;

use crate::error::{Error, Result};
use crate::http::{BasicAuth, HttpMethod, HttpRequest};

/// Content type used by `post`, `put` and `patch` when none is given.
pub const DEFAULT_CONTENT_TYPE: &str = "application/json";

/// Raw response returned by the underlying client. The wrapper never reads it.
pub type Response = ureq::http::Response<ureq::Body>;

/// Blocking HTTP client that prefixes every path with a base URI.
///
/// Status codes are interpreted by the agent: with ureq defaults a 4xx/5xx
/// reply comes back as `Err(Error::Transport(ureq::Error::StatusCode(_)))`.
#[derive(Debug)]
pub struct HttpClientWrapper {
    base_uri: String,
    agent: ureq::Agent,
}

impl Default for HttpClientWrapper {
    fn default() -> Self {
        Self::new("")
    }
}

impl HttpClientWrapper {
    pub fn new(base_uri: impl Into<String>) -> Self {
        Self::with_agent(base_uri, ureq::Agent::new_with_defaults())
    }

    /// Use a caller-configured agent, e.g. one with timeouts or a proxy.
    pub fn with_agent(base_uri: impl Into<String>, agent: ureq::Agent) -> Self {
        Self {
            base_uri: base_uri.into(),
            agent,
        }
    }

    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Requests built after this call use `uri`; already built ones keep theirs.
    pub fn set_base_uri(&mut self, uri: impl Into<String>) {
        self.base_uri = uri.into();
    }

    pub fn build_get(
        &self,
        path: &str,
        username: Option<&str>,
        password: Option<&str>,
    ) -> HttpRequest {
        self.bodiless(HttpMethod::Get, path, username, password)
    }

    pub fn build_post(
        &self,
        path: &str,
        body: &str,
        username: Option<&str>,
        password: Option<&str>,
        content_type: Option<&str>,
    ) -> HttpRequest {
        self.with_body(HttpMethod::Post, path, body, username, password, content_type)
    }

    pub fn build_put(
        &self,
        path: &str,
        body: &str,
        username: Option<&str>,
        password: Option<&str>,
        content_type: Option<&str>,
    ) -> HttpRequest {
        self.with_body(HttpMethod::Put, path, body, username, password, content_type)
    }

    /// Builds a request with the `PATH` wire verb (see [`HttpMethod::Path`]).
    pub fn build_patch(
        &self,
        path: &str,
        body: &str,
        username: Option<&str>,
        password: Option<&str>,
        content_type: Option<&str>,
    ) -> HttpRequest {
        self.with_body(HttpMethod::Path, path, body, username, password, content_type)
    }

    pub fn build_delete(
        &self,
        path: &str,
        username: Option<&str>,
        password: Option<&str>,
    ) -> HttpRequest {
        self.bodiless(HttpMethod::Delete, path, username, password)
    }

    pub fn get(
        &self,
        path: &str,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<Response> {
        self.execute(self.build_get(path, username, password))
    }

    pub fn post(
        &self,
        path: &str,
        body: &str,
        username: Option<&str>,
        password: Option<&str>,
        content_type: Option<&str>,
    ) -> Result<Response> {
        self.execute(self.build_post(path, body, username, password, content_type))
    }

    pub fn put(
        &self,
        path: &str,
        body: &str,
        username: Option<&str>,
        password: Option<&str>,
        content_type: Option<&str>,
    ) -> Result<Response> {
        self.execute(self.build_put(path, body, username, password, content_type))
    }

    /// Sends `PATH`, not `PATCH`.
    pub fn patch(
        &self,
        path: &str,
        body: &str,
        username: Option<&str>,
        password: Option<&str>,
        content_type: Option<&str>,
    ) -> Result<Response> {
        self.execute(self.build_patch(path, body, username, password, content_type))
    }

    pub fn delete(
        &self,
        path: &str,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<Response> {
        self.execute(self.build_delete(path, username, password))
    }

    /// Send a built request through the shared agent and return its response
    /// untouched. Agent failures propagate as-is.
    pub fn execute(&self, request: HttpRequest) -> Result<Response> {
        debug!(method = %request.method, url = %request.url, "dispatching request");

        let mut builder = ureq::http::Request::builder()
            .method(request.method.as_str())
            .uri(request.url.as_str());
        if let Some(value) = request.auth.header_value() {
            builder = builder.header(AUTHORIZATION, value);
        }
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        // ureq rejects methods it does not know, such as PATH, unless allowed.
        let result = match request.body {
            Some(body) => {
                let req = self
                    .agent
                    .configure_request(builder.body(body)?)
                    .allow_non_standard_methods(true)
                    .build();
                self.agent.run(req)
            }
            None => {
                let req = self
                    .agent
                    .configure_request(builder.body(())?)
                    .allow_non_standard_methods(true)
                    .build();
                self.agent.run(req)
            }
        };

        result.map_err(|e| {
            debug!(method = %request.method, url = %request.url, error = %e, "request failed");
            Error::from(e)
        })
    }

    fn bodiless(
        &self,
        method: HttpMethod,
        path: &str,
        username: Option<&str>,
        password: Option<&str>,
    ) -> HttpRequest {
        HttpRequest {
            method,
            url: format!("{}{path}", self.base_uri),
            auth: BasicAuth::new(username, password),
            headers: Vec::new(),
            body: None,
        }
    }

    fn with_body(
        &self,
        method: HttpMethod,
        path: &str,
        body: &str,
        username: Option<&str>,
        password: Option<&str>,
        content_type: Option<&str>,
    ) -> HttpRequest {
        let content_type = content_type.unwrap_or(DEFAULT_CONTENT_TYPE);
        HttpRequest {
            method,
            url: format!("{}{path}", self.base_uri),
            auth: BasicAuth::new(username, password),
            headers: vec![
                ("content-type".to_string(), content_type.to_string()),
                ("accept".to_string(), content_type.to_string()),
            ],
            body: Some(body.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> HttpClientWrapper {
        HttpClientWrapper::new("https://api.example.com")
    }

    fn json_headers() -> Vec<(String, String)> {
        vec![
            ("content-type".to_string(), "application/json".to_string()),
            ("accept".to_string(), "application/json".to_string()),
        ]
    }

    #[test]
    fn default_base_uri_is_empty() {
        let client = HttpClientWrapper::default();
        assert_eq!(client.base_uri(), "");
        assert_eq!(client.build_get("/users", None, None).url, "/users");
    }

    #[test]
    fn set_base_uri_replaces_prefix() {
        let mut client = HttpClientWrapper::default();
        client.set_base_uri("https://api.example.com");
        assert_eq!(client.base_uri(), "https://api.example.com");

        let req = client.build_get("/users/1", None, None);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "https://api.example.com/users/1");
        assert!(req.body.is_none());
    }

    #[test]
    fn set_base_uri_leaves_built_requests_alone() {
        let mut client = client();
        let before = client.build_get("/a", None, None);
        client.set_base_uri("http://other.test");
        let after = client.build_get("/a", None, None);
        assert_eq!(before.url, "https://api.example.com/a");
        assert_eq!(after.url, "http://other.test/a");
    }

    #[test]
    fn url_is_plain_concatenation() {
        let client = HttpClientWrapper::new("http://host/");
        assert_eq!(client.build_get("/x", None, None).url, "http://host//x");

        let client = HttpClientWrapper::new("http://host");
        assert_eq!(client.build_get("x", None, None).url, "http://hostx");
    }

    #[test]
    fn build_get_has_no_headers_or_body() {
        let req = client().build_get("/users", Some("u"), Some("p"));
        assert!(req.headers.is_empty());
        assert!(req.body.is_none());
        assert_eq!(req.auth, BasicAuth::new(Some("u"), Some("p")));
    }

    #[test]
    fn build_delete_has_no_headers_or_body() {
        let req = client().build_delete("/users/1", None, None);
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.url, "https://api.example.com/users/1");
        assert!(req.headers.is_empty());
        assert!(req.body.is_none());
    }

    #[test]
    fn absent_credentials_still_travel_as_a_pair() {
        let req = client().build_delete("/users/1", None, None);
        assert_eq!(req.auth, BasicAuth { username: None, password: None });
    }

    #[test]
    fn build_post_sets_json_headers_and_body() {
        let req = client().build_post("/users", r#"{"name":"a"}"#, Some("u"), Some("p"), None);
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "https://api.example.com/users");
        assert_eq!(req.headers, json_headers());
        assert_eq!(req.body.as_deref(), Some(r#"{"name":"a"}"#));
        assert_eq!(req.auth.header_value().as_deref(), Some("Basic dTpw"));
    }

    #[test]
    fn build_put_honours_content_type() {
        let req = client().build_put("/doc", "<a/>", None, None, Some("application/xml"));
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(
            req.headers,
            vec![
                ("content-type".to_string(), "application/xml".to_string()),
                ("accept".to_string(), "application/xml".to_string()),
            ]
        );
        assert_eq!(req.body.as_deref(), Some("<a/>"));
    }

    #[test]
    fn build_patch_uses_path_verb() {
        let req = client().build_patch("/users/1", "{}", None, None, None);
        assert_eq!(req.method, HttpMethod::Path);
        assert_eq!(req.method.as_str(), "PATH");
        assert_eq!(req.headers, json_headers());
        assert_eq!(req.body.as_deref(), Some("{}"));
    }

    #[test]
    fn body_is_forwarded_verbatim() {
        let body = "  not json at all \n";
        let req = client().build_post("/raw", body, None, None, Some("text/plain"));
        assert_eq!(req.body.as_deref(), Some(body));
    }

    #[test]
    fn malformed_url_is_a_transport_error() {
        let client = HttpClientWrapper::new("not a url");
        let err = client.get("/x", None, None).unwrap_err();
        assert!(matches!(err, Error::Transport(_)));
    }
}
