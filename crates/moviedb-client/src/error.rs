// SPDX-License-Identifier: GPL-3.0-or-later

use reqwest::StatusCode;
use thiserror::Error;

use crate::transport::TransportError;

pub type Result<T> = std::result::Result<T, MovieDbError>;

#[derive(Debug, Error)]
pub enum MovieDbError {
    #[error("HTTP status {status}: {body}")]
    Upstream { status: StatusCode, body: String },

    #[error("Transport error: {0}")]
    Transport(#[source] TransportError),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Deserialization error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Unexpected response shape: {0}")]
    UnexpectedShape(String),

    #[error("No API credential configured")]
    MissingCredential,
}
