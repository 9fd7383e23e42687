// SPDX-License-Identifier: GPL-3.0-or-later

pub const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";
pub const DEFAULT_POSTER_SIZE: &str = "w342";

/// Build a full image URL from a `file_path` as found in movie details or an
/// [`ImageSet`](crate::ImageSet), e.g. `"/abc.jpg"` with size `"w342"`.
pub fn image_url(file_path: &str, size: &str) -> String {
    if file_path.starts_with('/') {
        format!("{}/{}{}", IMAGE_BASE_URL, size, file_path)
    } else {
        format!("{}/{}/{}", IMAGE_BASE_URL, size, file_path)
    }
}
