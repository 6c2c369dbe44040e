//! Echo server for exercising HTTP clients over a real socket.
//!
//! `/status/{code}` answers with that status and an empty body. Every other
//! request, whatever its method, is answered with `200` and a JSON
//! description of what was received.

use std::collections::BTreeMap;

use axum::{
    extract::Path,
    http::{HeaderMap, Method, StatusCode, Uri},
    routing::any,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tracing::debug;

/// What the server saw. Header names are lower-case; repeated headers keep
/// the last value.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct EchoedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

pub fn app() -> Router {
    Router::new()
        .route("/status/{code}", any(status))
        .fallback(echo)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn echo(method: Method, uri: Uri, headers: HeaderMap, body: String) -> Json<EchoedRequest> {
    debug!(%method, %uri, "echoing request");
    let headers = headers
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_string(), v.to_string()))
        })
        .collect();
    Json(EchoedRequest {
        method: method.as_str().to_string(),
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        headers,
        body,
    })
}

async fn status(Path(code): Path<u16>) -> StatusCode {
    StatusCode::from_u16(code).unwrap_or(StatusCode::BAD_REQUEST)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn echoed_request_serializes_to_json() {
        let echoed = EchoedRequest {
            method: "PATH".to_string(),
            path: "/users/1".to_string(),
            query: None,
            headers: BTreeMap::from([("accept".to_string(), "application/json".to_string())]),
            body: "{}".to_string(),
        };
        let json = serde_json::to_value(&echoed).unwrap();
        assert_eq!(json["method"], "PATH");
        assert_eq!(json["path"], "/users/1");
        assert!(json["query"].is_null());
        assert_eq!(json["headers"]["accept"], "application/json");
        assert_eq!(json["body"], "{}");
    }

    #[test]
    fn echoed_request_reads_back() {
        let raw = r#"{"method":"GET","path":"/","query":"a=1","headers":{},"body":""}"#;
        let echoed: EchoedRequest = serde_json::from_str(raw).unwrap();
        assert_eq!(echoed.method, "GET");
        assert_eq!(echoed.query.as_deref(), Some("a=1"));
        assert!(echoed.headers.is_empty());
    }
}
