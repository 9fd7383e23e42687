// SPDX-License-Identifier: GPL-3.0-or-later

use serde_json::{Map, Value};

/// TMDB movie identifier.
pub type MovieId = u64;

/// Movie details exactly as returned by `/movie/{id}`.
pub type MovieDetails = Map<String, Value>;

/// Cast members taken from the `cast` key of `/movie/{id}/credits`.
pub type CastList = Vec<Value>;

/// Body of a movie list endpoint such as `/movie/popular`.
pub type MovieList = Map<String, Value>;

/// Body of `/movie/{id}/images`, kept verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageSet(Map<String, Value>);

impl ImageSet {
    pub fn new(body: Map<String, Value>) -> Self {
        Self(body)
    }

    /// Backdrop images. Empty when the key is absent or not a sequence.
    pub fn backdrops(&self) -> &[Value] {
        self.sequence("backdrops")
    }

    /// Poster images. Empty when the key is absent or not a sequence.
    pub fn posters(&self) -> &[Value] {
        self.sequence("posters")
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    fn sequence(&self, key: &str) -> &[Value] {
        self.0
            .get(key)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl From<ImageSet> for Value {
    fn from(images: ImageSet) -> Self {
        Value::Object(images.0)
    }
}

/// Curated movie lists exposed under `/movie/{list}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListType {
    Popular,
    TopRated,
    Upcoming,
    NowPlaying,
}

impl ListType {
    pub fn as_path(&self) -> &'static str {
        match self {
            ListType::Popular => "popular",
            ListType::TopRated => "top_rated",
            ListType::Upcoming => "upcoming",
            ListType::NowPlaying => "now_playing",
        }
    }
}
