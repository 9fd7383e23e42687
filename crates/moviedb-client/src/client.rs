// SPDX-License-Identifier: GPL-3.0-or-later

use std::fmt;
use std::time::Duration;

use moviedb_config::{ApiConfig, DEFAULT_BASE_URL};
use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::error::{MovieDbError, Result};
use crate::models::{CastList, ImageSet, ListType, MovieDetails, MovieId, MovieList};
use crate::transport::{ReqwestTransport, Transport};

/// TMDB API client.
///
/// Every request carries an `Authorization: Bearer <token>` header. Bodies are
/// returned as the service sent them; non-success statuses fail with
/// [`MovieDbError::Upstream`] before the body is decoded.
#[derive(Clone)]
pub struct MovieDbClient<T = ReqwestTransport> {
    transport: T,
    base_url: String,
    token: String,
}

impl MovieDbClient<ReqwestTransport> {
    /// Create a client builder for custom configuration.
    pub fn builder() -> MovieDbClientBuilder {
        MovieDbClientBuilder::default()
    }

    /// Build a client from the `[api]` configuration section.
    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        let mut builder = Self::builder().base_url(config.base_url.as_str());
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(token) = config.token.as_deref() {
            builder = builder.token(token);
        }
        builder.build()
    }
}

impl<T: Transport> MovieDbClient<T> {
    /// Fetch a movie's details.
    ///
    /// # Example
    /// ```no_run
    /// # use moviedb_client::MovieDbClient;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = MovieDbClient::builder().token("my-token").build()?;
    /// let movie = client.get_single_movie(603).await?;
    /// println!("{}", movie["title"]);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_single_movie(&self, movie_id: MovieId) -> Result<MovieDetails> {
        let body = self.get_json(&format!("/movie/{}", movie_id)).await?;
        into_object(body, "movie details")
    }

    /// Fetch the cast of a movie. A credits body without a `cast` key yields an
    /// empty list.
    pub async fn get_single_movie_cast(&self, movie_id: MovieId) -> Result<CastList> {
        let body = self.get_json(&format!("/movie/{}/credits", movie_id)).await?;
        let mut credits = into_object(body, "movie credits")?;

        match credits.remove("cast") {
            Some(Value::Array(cast)) => Ok(cast),
            None | Some(Value::Null) => {
                debug!(target: "moviedb", movie_id, "credits response has no cast");
                Ok(Vec::new())
            }
            Some(other) => Err(MovieDbError::UnexpectedShape(format!(
                "expected `cast` to be an array, got {}",
                kind(&other)
            ))),
        }
    }

    /// Fetch the backdrops and posters of a movie.
    pub async fn get_movie_images(&self, movie_id: MovieId) -> Result<ImageSet> {
        let body = self.get_json(&format!("/movie/{}/images", movie_id)).await?;
        into_object(body, "movie images").map(ImageSet::new)
    }

    /// Fetch the first page of a curated movie list.
    pub async fn get_movies_list(&self, list_type: ListType) -> Result<MovieList> {
        let body = self
            .get_json(&format!("/movie/{}", list_type.as_path()))
            .await?;
        into_object(body, "movie list")
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json(&self, path: &str) -> Result<Value> {
        let url = format!("{}{}", self.base_url, path);
        trace!(target: "moviedb", "GET {}", url);

        let headers = [("Authorization", format!("Bearer {}", self.token))];
        let response = self.transport.get(&url, &headers).await?;
        debug!(target: "moviedb", "response status: {}", response.status);

        if !response.status.is_success() {
            return Err(MovieDbError::Upstream {
                status: response.status,
                body: response.body,
            });
        }

        Ok(serde_json::from_str(&response.body)?)
    }
}

impl<T> fmt::Debug for MovieDbClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MovieDbClient")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .finish_non_exhaustive()
    }
}

fn into_object(value: Value, what: &str) -> Result<Map<String, Value>> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(MovieDbError::UnexpectedShape(format!(
            "expected {} to be an object, got {}",
            what,
            kind(&other)
        ))),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Builder for configuring a TMDB client.
#[derive(Debug)]
pub struct MovieDbClientBuilder {
    base_url: String,
    token: Option<String>,
    timeout: Option<Duration>,
}

impl Default for MovieDbClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: None,
            timeout: None,
        }
    }
}

impl MovieDbClientBuilder {
    /// Set a custom base URL (useful for testing with mock servers).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the bearer token sent with every request.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set request timeout duration. Without one, requests wait as long as
    /// the transport does.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client over a pooled `reqwest` transport.
    pub fn build(self) -> Result<MovieDbClient> {
        let transport = ReqwestTransport::new(self.timeout)?;
        self.build_with_transport(transport)
    }

    /// Build the client over a caller-supplied transport.
    pub fn build_with_transport<T: Transport>(self, transport: T) -> Result<MovieDbClient<T>> {
        let token = self
            .token
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty())
            .ok_or(MovieDbError::MissingCredential)?;

        Ok(MovieDbClient {
            transport,
            base_url: self.base_url.trim_end_matches('/').to_string(),
            token,
        })
    }
}
