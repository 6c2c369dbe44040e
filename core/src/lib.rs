//! Blocking HTTP client wrapper with a configurable base URI.
//!
//! # Overview
//! `HttpClientWrapper` exposes `get`, `post`, `put`, `patch` and `delete`.
//! Each call prefixes its path with the current base URI, attaches optional
//! basic-auth credentials and, for body-bearing verbs, `Content-Type` and
//! `Accept` headers, then forwards the request to a shared `ureq::Agent`.
//! The agent's response or error is returned to the caller unchanged.
//!
//! # Design
//! - One agent per wrapper, built at construction and reused.
//! - `build_*` methods return the assembled `HttpRequest` without I/O, so
//!   the request policy is testable offline.
//! - `patch` sends the literal verb `PATH`.

pub mod client;
pub mod error;
pub mod http;

pub use client::{HttpClientWrapper, Response, DEFAULT_CONTENT_TYPE};
pub use error::{Error, Result};
pub use http::{BasicAuth, HttpMethod, HttpRequest};
