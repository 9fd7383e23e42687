// SPDX-License-Identifier: GPL-3.0-or-later

//! Network seam for [`MovieDbClient`](crate::MovieDbClient).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use crate::error::{MovieDbError, Result};

pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

const USER_AGENT: &str = concat!("moviedb/", env!("CARGO_PKG_VERSION"));

/// Raw response handed back by a [`Transport`]. The body is left undecoded so
/// the client can check the status first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: StatusCode,
    pub body: String,
}

/// Performs a single GET request.
///
/// Implementations report connection-level failures as
/// [`MovieDbError::Transport`] and must not interpret the status code.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str, headers: &[(&str, String)]) -> Result<TransportResponse>;
}

/// [`Transport`] backed by a pooled `reqwest` client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// `timeout` of `None` leaves reqwest's default in place, which never
    /// times out.
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &str, headers: &[(&str, String)]) -> Result<TransportResponse> {
        let mut request = self.client.get(url);
        for (name, value) in headers {
            request = request.header(*name, value.as_str());
        }

        let response = request
            .send()
            .await
            .map_err(|e| MovieDbError::Transport(Box::new(e)))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| MovieDbError::Transport(Box::new(e)))?;

        Ok(TransportResponse { status, body })
    }
}
