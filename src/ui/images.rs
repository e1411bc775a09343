// SPDX-License-Identifier: MPL-2.0
//! Breed image cache with placeholder fallback.
//!
//! Images are keyed by the breed's reference image identifier. A breed
//! without one, or whose image failed to download, renders the embedded
//! placeholder. Failures are logged and never reach the controller.

use crate::error::Result;
use iced::widget::image::Handle;
use lru::LruCache;
use std::num::NonZeroUsize;

const PLACEHOLDER_PNG: &[u8] = include_bytes!("../../assets/images/placeholder.png");

#[derive(Debug, Clone)]
enum Slot {
    Loading,
    Ready(Handle),
    Failed,
}

/// What a card should render in its image area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageView {
    /// The download has not finished yet.
    Loading,
    Ready(Handle),
}

#[derive(Debug)]
pub struct ImageCache {
    slots: LruCache<String, Slot>,
    placeholder: Handle,
}

impl ImageCache {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            slots: LruCache::new(capacity),
            placeholder: Handle::from_bytes(PLACEHOLDER_PNG),
        }
    }

    #[must_use]
    pub fn placeholder(&self) -> Handle {
        self.placeholder.clone()
    }

    /// Marks every unknown identifier as loading and returns them for fetching.
    ///
    /// `image_ids` is the whole displayed list; the cache grows to hold it so
    /// a pass never evicts entries it is about to revisit.
    pub fn request<'a>(&mut self, image_ids: impl IntoIterator<Item = &'a str>) -> Vec<String> {
        let image_ids: Vec<&str> = image_ids.into_iter().collect();
        if let Some(needed) = NonZeroUsize::new(image_ids.len()) {
            if needed > self.slots.cap() {
                tracing::debug!(capacity = needed.get(), "growing breed image cache");
                self.slots.resize(needed);
            }
        }

        let mut missing = Vec::new();
        for id in image_ids {
            if self.slots.get(id).is_none() {
                self.slots.put(id.to_string(), Slot::Loading);
                missing.push(id.to_string());
            }
        }
        missing
    }

    /// Stores the outcome of a download.
    pub fn complete(&mut self, image_id: String, result: Result<Vec<u8>>) {
        let slot = match result {
            Ok(bytes) if !bytes.is_empty() => Slot::Ready(Handle::from_bytes(bytes)),
            Ok(_) => {
                tracing::debug!(image_id, "breed image was empty");
                Slot::Failed
            }
            Err(err) => {
                tracing::debug!(image_id, error = %err, "breed image unavailable");
                Slot::Failed
            }
        };
        self.slots.put(image_id, slot);
    }

    /// Whether any download is still outstanding.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.slots.iter().any(|(_, slot)| matches!(slot, Slot::Loading))
    }

    /// Resolves the image for a card without touching recency.
    #[must_use]
    pub fn view(&self, image_id: Option<&str>) -> ImageView {
        let Some(id) = image_id else {
            return ImageView::Ready(self.placeholder());
        };
        match self.slots.peek(id) {
            Some(Slot::Loading) => ImageView::Loading,
            Some(Slot::Ready(handle)) => ImageView::Ready(handle.clone()),
            Some(Slot::Failed) | None => ImageView::Ready(self.placeholder()),
        }
    }
}
