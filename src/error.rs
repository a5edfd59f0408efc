// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.
//!
//! Errors are `Clone` so they can be carried inside Iced messages. Port-level
//! failures (backend API, asset uploads) have their own types in
//! [`crate::application::port`] and convert into [`Error`] when they need to
//! cross layers.

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Config Error: {0}")]
    Config(String),
    #[error("HTTP Error: {0}")]
    Http(String),
    #[error("Decode Error: {0}")]
    Decode(String),

    #[error("Unsupported URL: {0}")]
    UnsupportedUrl(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Error::Decode(err.to_string())
        } else {
            Error::Http(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
