// SPDX-License-Identifier: MPL-2.0
//! Breed data source ports.

use crate::domain::Breed;
use crate::error::Result;
use std::future::Future;

/// Paginated listing and free-text search over breed records.
pub trait BreedSource {
    /// Fetches page `page` (zero-based) of `limit` breeds.
    ///
    /// An empty list signals the end of the data.
    fn list_page(
        &self,
        page: u32,
        limit: u32,
    ) -> impl Future<Output = Result<Vec<Breed>>> + Send + 'static;

    /// Fetches the breeds matching `query`.
    fn search(&self, query: String) -> impl Future<Output = Result<Vec<Breed>>> + Send + 'static;
}

/// Raw image bytes addressed by a breed's reference image identifier.
pub trait ImageSource {
    fn fetch_image(
        &self,
        image_id: String,
    ) -> impl Future<Output = Result<Vec<u8>>> + Send + 'static;
}
