// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **API**: Endpoints, page size and request timeout
//! - **Search**: Debounce delay and result cache size
//! - **Images**: Decoded image cache size

// ==========================================================================
// API Defaults
// ==========================================================================

/// Base URL of the breed listing and search endpoints.
pub const DEFAULT_API_BASE_URL: &str = "https://api.thedogapi.com/v1";

/// Base URL of the breed reference images (`{base}/{id}.jpg`).
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://cdn2.thedogapi.com/images";

/// Number of breeds requested per page.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Minimum page size.
pub const MIN_PAGE_SIZE: u32 = 1;

/// Maximum page size accepted by the listing endpoint.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Default HTTP request timeout (in seconds).
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

/// Minimum HTTP request timeout (in seconds).
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;

/// Maximum HTTP request timeout (in seconds).
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 120;

// ==========================================================================
// Search Defaults
// ==========================================================================

/// Quiet interval after the last keystroke before a search is issued.
pub const DEFAULT_DEBOUNCE_MS: u64 = 1000;

/// Minimum debounce delay (in milliseconds).
pub const MIN_DEBOUNCE_MS: u64 = 100;

/// Maximum debounce delay (in milliseconds).
pub const MAX_DEBOUNCE_MS: u64 = 5000;

/// Number of recent search results kept for instant redisplay.
pub const DEFAULT_SEARCH_CACHE_ENTRIES: usize = 32;

/// Maximum number of cached search results.
pub const MAX_SEARCH_CACHE_ENTRIES: usize = 256;

// ==========================================================================
// Image Defaults
// ==========================================================================

/// Number of decoded breed images kept in memory.
pub const DEFAULT_IMAGE_CACHE_ENTRIES: usize = 128;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_PAGE_SIZE > 0);
    assert!(MAX_PAGE_SIZE >= MIN_PAGE_SIZE);
    assert!(DEFAULT_PAGE_SIZE >= MIN_PAGE_SIZE);
    assert!(DEFAULT_PAGE_SIZE <= MAX_PAGE_SIZE);

    assert!(MIN_REQUEST_TIMEOUT_SECS > 0);
    assert!(MAX_REQUEST_TIMEOUT_SECS >= MIN_REQUEST_TIMEOUT_SECS);
    assert!(DEFAULT_REQUEST_TIMEOUT_SECS >= MIN_REQUEST_TIMEOUT_SECS);
    assert!(DEFAULT_REQUEST_TIMEOUT_SECS <= MAX_REQUEST_TIMEOUT_SECS);

    assert!(MIN_DEBOUNCE_MS > 0);
    assert!(MAX_DEBOUNCE_MS >= MIN_DEBOUNCE_MS);
    assert!(DEFAULT_DEBOUNCE_MS >= MIN_DEBOUNCE_MS);
    assert!(DEFAULT_DEBOUNCE_MS <= MAX_DEBOUNCE_MS);

    assert!(DEFAULT_SEARCH_CACHE_ENTRIES > 0);
    assert!(DEFAULT_SEARCH_CACHE_ENTRIES <= MAX_SEARCH_CACHE_ENTRIES);
    assert!(DEFAULT_IMAGE_CACHE_ENTRIES > 0);
};
