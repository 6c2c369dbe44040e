//! Error type for `HttpClientWrapper`.
//!
//! # Design
//! There is a single category: whatever the underlying `ureq` agent reported.
//! DNS, connect, TLS, malformed URI and 4xx/5xx status failures all arrive as
//! `Error::Transport` with the original `ureq::Error` inside, untranslated.

use thiserror::Error;

/// Failure returned by every verb method of `HttpClientWrapper`.
#[derive(Debug, Error)]
pub enum Error {
    /// The underlying HTTP client failed. Display and source are forwarded
    /// from the inner error.
    #[error(transparent)]
    Transport(#[from] ureq::Error),
}

impl Error {
    /// Borrow the underlying client error.
    pub fn as_transport(&self) -> &ureq::Error {
        match self {
            Error::Transport(e) => e,
        }
    }

    /// Take the underlying client error by value.
    pub fn into_transport(self) -> ureq::Error {
        match self {
            Error::Transport(e) => e,
        }
    }
}

impl From<ureq::http::Error> for Error {
    fn from(e: ureq::http::Error) -> Self {
        Error::Transport(ureq::Error::from(e))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
