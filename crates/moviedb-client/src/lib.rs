// SPDX-License-Identifier: GPL-3.0-or-later

//! The Movie Database (TMDB) API client.
//!
//! This crate fetches a movie's details, cast and images from the TMDB v3 API
//! and hands back the decoded JSON as the service sent it. The network layer
//! sits behind the [`Transport`] trait so callers can swap in their own.

pub mod client;
pub mod error;
pub mod images;
pub mod models;
pub mod transport;

pub use client::{MovieDbClient, MovieDbClientBuilder};
pub use error::{MovieDbError, Result};
pub use images::{image_url, DEFAULT_POSTER_SIZE, IMAGE_BASE_URL};
pub use models::{CastList, ImageSet, ListType, MovieDetails, MovieId, MovieList};
pub use transport::{ReqwestTransport, Transport, TransportError, TransportResponse};
